//! Computer player.
//!
//! [`ComputerStrategy::choose_action`] searches the rack against the board
//! and dictionary and returns an ordinary [`Action`](crate::core::Action).
//! The host feeds it through [`TurnEngine::apply_action`](crate::rules::TurnEngine::apply_action)
//! like any human move, or calls
//! [`TurnEngine::play_computer_turn`](crate::rules::TurnEngine::play_computer_turn)
//! to do both in one step.
//!
//! ```
//! use rust_scrabble::ai::ComputerStrategy;
//! use rust_scrabble::core::{GameConfig, Participant};
//! use rust_scrabble::dictionary::Dictionary;
//! use rust_scrabble::rules::TurnEngine;
//!
//! let engine = TurnEngine::new(Dictionary::from_words(["AT", "TA", "EAT", "TEA"]).shared());
//! let players = [Participant::human("Ada"), Participant::computer("Bot")];
//! let game = engine.new_game(&players, GameConfig::default()).unwrap();
//!
//! let strategy = ComputerStrategy::default();
//! let outcome = engine.play_computer_turn(&game, &strategy).unwrap();
//! assert_eq!(outcome.game.history().len(), 1);
//! ```

pub mod candidates;
pub mod config;
pub mod strategy;

pub use candidates::{generate, Candidate, SearchStats};
pub use config::StrategyConfig;
pub use strategy::ComputerStrategy;
