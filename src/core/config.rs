//! Game configuration.
//!
//! Everything a host may tune per game lives here: rack size, bonuses,
//! the scoreless-turn limit, the board layout, the tile set and the bag
//! seed. The configuration travels inside every game snapshot.

use serde::{Deserialize, Serialize};

use crate::board::BoardLayout;
use crate::tiles::LetterDistribution;

/// Tiles held by each player between turns.
pub const RACK_SIZE: usize = 7;

/// Points awarded for placing a full rack in one turn.
pub const BINGO_BONUS: i32 = 50;

/// Default number of consecutive passes/exchanges that ends a game.
pub const SCORELESS_TURN_LIMIT: u32 = 6;

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tiles per rack; also the minimum bag size for an exchange.
    pub rack_size: usize,

    /// Bonus for using `rack_size` tiles in a single placement.
    pub bingo_bonus: i32,

    /// Consecutive pass/exchange turns, across all players, that end the game.
    pub scoreless_turn_limit: u32,

    /// Seed for the tile bag. Same seed and same actions replay the same game.
    pub seed: u64,

    pub min_players: usize,
    pub max_players: usize,

    pub layout: BoardLayout,
    pub distribution: LetterDistribution,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rack_size: RACK_SIZE,
            bingo_bonus: BINGO_BONUS,
            scoreless_turn_limit: SCORELESS_TURN_LIMIT,
            seed: 42,
            min_players: 2,
            max_players: 4,
            layout: BoardLayout::standard(),
            distribution: LetterDistribution::english(),
        }
    }
}

impl GameConfig {
    /// Set the bag seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the consecutive pass/exchange limit.
    #[must_use]
    pub fn with_scoreless_turn_limit(mut self, limit: u32) -> Self {
        self.scoreless_turn_limit = limit;
        self
    }

    #[must_use]
    pub fn with_rack_size(mut self, rack_size: usize) -> Self {
        self.rack_size = rack_size;
        self
    }

    #[must_use]
    pub fn with_bingo_bonus(mut self, bonus: i32) -> Self {
        self.bingo_bonus = bonus;
        self
    }

    /// Allowed number of seated players.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_distribution(mut self, distribution: LetterDistribution) -> Self {
        self.distribution = distribution;
        self
    }
}
