//! Terminal game status.
//!
//! Created exactly once, when the turn engine detects that the game is
//! over, and never changed afterwards.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// Who won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(PlayerId),
    /// Players still level after every tie-break.
    Tie(Vec<PlayerId>),
}

impl Outcome {
    /// Check if a player won or shared the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            Outcome::Winner(p) => *p == player,
            Outcome::Tie(ps) => ps.contains(&player),
        }
    }
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A player emptied their rack with the bag already empty.
    WentOut,
    /// Every other player resigned.
    OpponentsResigned,
    /// Too many consecutive passes and exchanges.
    ScorelessTurns,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub outcome: Outcome,
    pub reason: WinReason,
    pub final_scores: PlayerMap<i32>,
}

impl GameStatus {
    /// The single winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match &self.outcome {
            Outcome::Winner(p) => Some(*p),
            Outcome::Tie(_) => None,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self.outcome, Outcome::Tie(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let tie = Outcome::Tie(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(tie.is_winner(PlayerId::new(0)));
        assert!(!tie.is_winner(PlayerId::new(1)));
        assert!(tie.is_winner(PlayerId::new(2)));
    }

    #[test]
    fn test_status_accessors() {
        let status = GameStatus {
            outcome: Outcome::Tie(vec![PlayerId::new(0), PlayerId::new(1)]),
            reason: WinReason::ScorelessTurns,
            final_scores: PlayerMap::with_value(2, 30),
        };
        assert!(status.is_tie());
        assert_eq!(status.winner(), None);
    }
}
