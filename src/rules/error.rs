//! Recoverable validation failures.
//!
//! Whenever one of these is returned the caller's game state is unchanged
//! and the player may retry with a corrected action.

use thiserror::Error;

use crate::board::PlacementError;
use crate::core::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the game is already over")]
    GameOver,
    #[error("{0} is not seated at this game")]
    UnknownPlayer(PlayerId),
    #[error("it is not {player}'s turn (waiting on {current})")]
    NotPlayersTurn { player: PlayerId, current: PlayerId },
    #[error("the rack does not hold the tiles this action uses")]
    TilesNotInRack,
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("not a valid word: {}", .words.join(", "))]
    InvalidWord { words: Vec<String> },
    #[error("exchange needs at least {required} tiles in the bag, {remaining} left")]
    InsufficientBagForExchange { remaining: usize, required: usize },
    #[error("an exchange must include at least one tile")]
    EmptyExchange,
}

/// Problems creating a new game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{count} players is too few (minimum {min})")]
    TooFewPlayers { count: usize, min: usize },
    #[error("{count} players is too many (maximum {max})")]
    TooManyPlayers { count: usize, max: usize },
    #[error("the tile set has {available} tiles, {needed} are needed to deal every rack")]
    NotEnoughTiles { available: usize, needed: usize },
    #[error("rack size must be at least 1")]
    EmptyRack,
    #[error("scoreless turn limit must be at least 1")]
    NoScorelessLimit,
}
