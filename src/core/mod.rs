//! Core engine types: players, RNG, configuration, actions, state, status.
//!
//! Everything here is plain data. The rules that move a game from one
//! state to the next live in [`crate::rules`].

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod status;
pub mod state;
pub mod snapshot;

pub use player::{Participant, Player, PlayerId, PlayerKind, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, BINGO_BONUS, RACK_SIZE, SCORELESS_TURN_LIMIT};
pub use action::{Action, ActionKind, MoveResult};
pub use status::{GameStatus, Outcome, WinReason};
pub use state::GameState;
pub use snapshot::SnapshotError;
