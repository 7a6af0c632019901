//! Turn execution: validation, scoring, end-of-game detection.
//!
//! [`TurnEngine`] is the sole mutation entry point. Everything else in this
//! module is a pure helper it calls.

pub mod end_game;
pub mod engine;
pub mod error;
pub mod scoring;

pub use end_game::decide_outcome;
pub use engine::{ScoredPlacement, TurnEngine, TurnOutcome};
pub use error::{ActionError, SetupError};
pub use scoring::{score_placement, ScoreBreakdown};
