//! Placement scoring: formed words plus the bingo bonus.

use serde::{Deserialize, Serialize};

use crate::board::PlacementOutcome;
use crate::core::GameConfig;

/// Points for one placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of every formed word's multiplier-adjusted score.
    pub words: i32,
    /// Bingo bonus, zero unless a full rack was placed.
    pub bingo: i32,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.words + self.bingo
    }

    #[must_use]
    pub fn is_bingo(&self) -> bool {
        self.bingo > 0
    }
}

/// Score a validated placement.
#[must_use]
pub fn score_placement(outcome: &PlacementOutcome, config: &GameConfig) -> ScoreBreakdown {
    let bingo = if outcome.placed.len() == config.rack_size {
        config.bingo_bonus
    } else {
        0
    };
    ScoreBreakdown {
        words: outcome.words_score(),
        bingo,
    }
}
