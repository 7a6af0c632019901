//! # rust-scrabble
//!
//! Rules engine for a turn-based tile-placement word game.
//!
//! ## Design Principles
//!
//! 1. **Snapshot in, snapshot out**: [`TurnEngine::apply_action`] reads a
//!    [`GameState`] and returns a new one, or an error with the original
//!    untouched. No partial mutation is ever observable.
//!
//! 2. **One path for every player**: computer players choose an [`Action`]
//!    and it goes through the same validation as a human move.
//!
//! 3. **Configuration Over Convention**: rack size, bonuses, the board
//!    layout, the tile set and the scoreless-turn limit all live in
//!    [`GameConfig`].
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: cheap cloning via `im-rs`, so every
//!   action works on its own copy of the game.
//!
//! - **Deterministic**: the bag draws from a seeded ChaCha8 stream that
//!   survives serialization, so replaying the same actions from the same
//!   seed reproduces the same game.
//!
//! - **Shared dictionary**: a read-only [`Dictionary`] behind an `Arc`,
//!   safe to share between any number of concurrent games.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, actions, game state, status
//! - `tiles`: tiles, letter distributions, the tile bag
//! - `board`: geometry, premium layout, placement validation
//! - `dictionary`: word and prefix lookup
//! - `rules`: the turn engine, scoring, end-of-game detection
//! - `ai`: the computer player
//!
//! ## Example
//!
//! ```
//! use rust_scrabble::{Action, Dictionary, GameConfig, Participant, TurnEngine};
//!
//! let engine = TurnEngine::new(Dictionary::from_words(["CAT", "AT"]).shared());
//! let players = [Participant::human("Ada"), Participant::human("Grace")];
//! let game = engine.new_game(&players, GameConfig::default().with_seed(7)).unwrap();
//!
//! let current = game.current_player();
//! let outcome = engine.apply_action(&game, current, &Action::Pass).unwrap();
//! assert_eq!(outcome.game.scoreless_turns(), 1);
//! assert_ne!(outcome.game.current_player(), current);
//! ```

pub mod core;
pub mod tiles;
pub mod board;
pub mod dictionary;
pub mod rules;
pub mod ai;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use crate::core::{
    Participant, Player, PlayerId, PlayerKind, PlayerMap,
    GameRng, GameRngState, GameConfig,
    Action, ActionKind, MoveResult,
    GameState, GameStatus, Outcome, WinReason, SnapshotError,
};

pub use crate::tiles::{LetterDistribution, RackKey, Tile, TileBag, BLANK};

pub use crate::board::{
    Board, BoardLayout, Cell, Direction, FormedWord, PlacedTile,
    PlacementError, PlacementOutcome, Position, Premium,
};

pub use crate::dictionary::{Dictionary, SharedDictionary};

pub use crate::rules::{
    ActionError, ScoreBreakdown, ScoredPlacement, SetupError, TurnEngine, TurnOutcome,
};

pub use crate::ai::{Candidate, ComputerStrategy, StrategyConfig};
