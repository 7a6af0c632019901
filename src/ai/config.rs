//! Computer player configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`ComputerStrategy`](super::ComputerStrategy).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Maximum placements handed to the engine for full validation per move.
    /// The search stops early once this many have been evaluated.
    pub max_evaluations: usize,

    /// Exchange tiles when no placement is found and the bag allows it.
    /// Otherwise pass.
    pub exchange_when_stuck: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 50_000,
            exchange_when_stuck: true,
        }
    }
}

impl StrategyConfig {
    pub fn with_max_evaluations(mut self, max: usize) -> Self {
        self.max_evaluations = max;
        self
    }

    pub fn with_exchange_when_stuck(mut self, exchange: bool) -> Self {
        self.exchange_when_stuck = exchange;
        self
    }
}
