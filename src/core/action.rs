//! Player actions and the results they produce.
//!
//! An [`Action`] is an ephemeral request: place tiles, exchange tiles, or
//! pass. Only the [`MoveResult`] of an applied action is kept in history.
//! The set of actions is closed; the turn engine matches it exhaustively.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::board::{Direction, Position};
use crate::tiles::Tile;

/// What a player wants to do this turn.
///
/// ```
/// use rust_scrabble::board::{Direction, Position};
/// use rust_scrabble::core::{Action, ActionKind};
/// use rust_scrabble::tiles::Tile;
///
/// let cat = [Tile::new('C', 3), Tile::new('A', 1), Tile::new('T', 1)];
/// let action = Action::place_word(Position::new(7, 6), Direction::Horizontal, &cat);
/// assert_eq!(action.kind(), ActionKind::PlaceWord);
/// assert_eq!(action.tiles().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Lay `tiles` in order into the empty cells from `origin` along `direction`.
    PlaceWord {
        origin: Position,
        direction: Direction,
        /// SmallVec keeps a full rack inline without heap allocation.
        tiles: SmallVec<[Tile; 7]>,
    },
    /// Return `tiles` to the bag and draw as many replacements.
    Exchange { tiles: SmallVec<[Tile; 7]> },
    Pass,
}

impl Action {
    #[must_use]
    pub fn place_word(origin: Position, direction: Direction, tiles: &[Tile]) -> Self {
        Action::PlaceWord {
            origin,
            direction,
            tiles: SmallVec::from_slice(tiles),
        }
    }

    #[must_use]
    pub fn exchange(tiles: &[Tile]) -> Self {
        Action::Exchange {
            tiles: SmallVec::from_slice(tiles),
        }
    }

    /// Exchange every rack tile flagged `selected_for_swap`.
    #[must_use]
    pub fn exchange_selected(rack: &[Tile]) -> Self {
        Action::Exchange {
            tiles: rack.iter().filter(|t| t.selected_for_swap).copied().collect(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::PlaceWord { .. } => ActionKind::PlaceWord,
            Action::Exchange { .. } => ActionKind::Exchange,
            Action::Pass => ActionKind::Pass,
        }
    }

    /// Rack tiles this action consumes.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        match self {
            Action::PlaceWord { tiles, .. } | Action::Exchange { tiles } => tiles,
            Action::Pass => &[],
        }
    }
}

/// Kind of a recorded move. `Resign` never appears as an [`Action`]; it
/// is recorded when a player leaves the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PlaceWord,
    Exchange,
    Pass,
    Resign,
}

/// Outcome of one applied action. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The player who acted.
    pub player: PlayerId,
    pub player_name: String,
    pub kind: ActionKind,
    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
    /// Points gained this turn, bingo included.
    pub score: i32,
    /// Every word formed, main word first.
    pub words: Vec<String>,
    /// Tiles placed or exchanged.
    pub tile_count: usize,
    pub bingo: bool,
    pub ended_game: bool,
    /// Whose turn it is now.
    pub next_player: PlayerId,
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ActionKind::PlaceWord => {
                write!(
                    f,
                    "{} played {} for {} points",
                    self.player_name,
                    self.words.join(", "),
                    self.score
                )?;
                if self.bingo {
                    write!(f, " (bingo)")?;
                }
            }
            ActionKind::Exchange => {
                write!(f, "{} exchanged {} tiles", self.player_name, self.tile_count)?
            }
            ActionKind::Pass => write!(f, "{} passed", self.player_name)?,
            ActionKind::Resign => write!(f, "{} resigned", self.player_name)?,
        }
        if self.ended_game {
            write!(f, "; game over")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: ActionKind) -> MoveResult {
        MoveResult {
            player: PlayerId::new(0),
            player_name: "Ada".to_string(),
            kind,
            turn: 1,
            score: 10,
            words: vec!["CAT".to_string()],
            tile_count: 3,
            bingo: false,
            ended_game: false,
            next_player: PlayerId::new(1),
        }
    }

    #[test]
    fn test_exchange_selected_picks_flagged_tiles() {
        let rack = [
            Tile::new('Q', 10).selected(true),
            Tile::new('E', 1),
            Tile::new('V', 4).selected(true),
        ];

        let action = Action::exchange_selected(&rack);

        assert_eq!(action.kind(), ActionKind::Exchange);
        let letters: Vec<char> = action.tiles().iter().map(|t| t.letter).collect();
        assert_eq!(letters, vec!['Q', 'V']);
    }

    #[test]
    fn test_pass_has_no_tiles() {
        assert!(Action::Pass.tiles().is_empty());
        assert_eq!(Action::Pass.kind(), ActionKind::Pass);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::place_word(
            Position::new(7, 7),
            Direction::Vertical,
            &[Tile::new('A', 1), Tile::blank().assign('X')],
        );
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_move_result_summary() {
        assert_eq!(result(ActionKind::PlaceWord).to_string(), "Ada played CAT for 10 points");
        assert_eq!(result(ActionKind::Exchange).to_string(), "Ada exchanged 3 tiles");
        assert_eq!(result(ActionKind::Pass).to_string(), "Ada passed");

        let mut last = result(ActionKind::PlaceWord);
        last.bingo = true;
        last.ended_game = true;
        assert_eq!(last.to_string(), "Ada played CAT for 10 points (bingo); game over");
    }
}
