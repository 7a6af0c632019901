//! End-of-game detection.
//!
//! Checked after every applied action, in this order:
//! 1. the acting player went out (empty rack, empty bag),
//! 2. the consecutive pass/exchange limit was reached,
//! 3. fewer than two players remain seated.
//!
//! Ties on final score go to the player with the fewest rack points left;
//! players still level after that share a [`Outcome::Tie`].

use crate::core::{GameState, GameStatus, Outcome, Player, PlayerId, PlayerMap, WinReason};

/// Finish the game if a terminal condition holds. Returns the reason.
pub(crate) fn settle(game: &mut GameState, actor: PlayerId) -> Option<WinReason> {
    let reason = if went_out(game, actor) {
        apply_going_out_bonus(game, actor);
        WinReason::WentOut
    } else if game.scoreless_turns() >= game.config().scoreless_turn_limit {
        WinReason::ScorelessTurns
    } else if game.seated_players().count() < 2 {
        WinReason::OpponentsResigned
    } else {
        return None;
    };

    let status = GameStatus {
        outcome: decide_outcome(game.players()),
        reason,
        final_scores: game.scores(),
    };
    game.finish(status);
    Some(reason)
}

fn went_out(game: &GameState, actor: PlayerId) -> bool {
    game.bag_len() == 0 && game.players()[actor].rack().is_empty()
}

/// Every other player loses their rack value; the player who went out gains the sum.
fn apply_going_out_bonus(game: &mut GameState, actor: PlayerId) {
    let mut bonus = 0;
    for (id, player) in game.players_mut().iter_mut() {
        if id != actor {
            let penalty = player.rack_points();
            player.score -= penalty;
            bonus += penalty;
        }
    }
    game.player_mut(actor).score += bonus;
}

/// Rank seated players by score, then by fewest rack points left.
///
/// Resigned players cannot win unless nobody is seated.
#[must_use]
pub fn decide_outcome(players: &PlayerMap<Player>) -> Outcome {
    let mut contenders: Vec<&Player> = players.values().filter(|p| p.is_seated()).collect();
    if contenders.is_empty() {
        contenders = players.values().collect();
    }

    let best_score = contenders.iter().map(|p| p.score).max().unwrap_or_default();
    contenders.retain(|p| p.score == best_score);

    let fewest_left = contenders.iter().map(|p| p.rack_points()).min().unwrap_or_default();
    contenders.retain(|p| p.rack_points() == fewest_left);

    match contenders.as_slice() {
        [only] => Outcome::Winner(only.id),
        tied => Outcome::Tie(tied.iter().map(|p| p.id).collect()),
    }
}
