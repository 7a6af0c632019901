//! Greedy computer player.

use tracing::trace;

use super::candidates::{generate, Candidate};
use super::config::StrategyConfig;
use crate::core::{Action, GameState, Player, PlayerId};
use crate::rules::TurnEngine;
use crate::tiles::Tile;

/// Plays the highest-scoring placement it can find.
///
/// Deterministic: the same board, rack, dictionary and configuration always
/// produce the same action. Among equal scores the first candidate found
/// wins. With no placement available it exchanges when the bag allows,
/// otherwise it passes.
#[derive(Clone, Debug, Default)]
pub struct ComputerStrategy {
    config: StrategyConfig,
}

impl ComputerStrategy {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Every legal placement for `player`, in discovery order.
    pub fn candidates(&self, engine: &TurnEngine, game: &GameState, player: PlayerId) -> Vec<Candidate> {
        let Some(me) = game.player(player) else {
            return Vec::new();
        };
        let (found, stats) = generate(
            engine,
            game.board(),
            game.config(),
            me.rack(),
            self.config.max_evaluations,
        );
        trace!(
            player = %player,
            origins = stats.origins,
            nodes = stats.nodes,
            evaluations = stats.evaluations,
            accepted = stats.accepted,
            "candidate search finished"
        );
        found
    }

    /// The placement this strategy would play, if any.
    pub fn best_placement(
        &self,
        engine: &TurnEngine,
        game: &GameState,
        player: PlayerId,
    ) -> Option<Candidate> {
        self.candidates(engine, game, player)
            .into_iter()
            .fold(None, |best, candidate| match best {
                Some(best) if best.score() >= candidate.score() => Some(best),
                _ => Some(candidate),
            })
    }

    /// Pick an action for `player`. Always returns something to apply.
    pub fn choose_action(&self, engine: &TurnEngine, game: &GameState, player: PlayerId) -> Action {
        let Some(me) = game.player(player) else {
            return Action::Pass;
        };
        if game.is_finished() || me.rack().is_empty() {
            return Action::Pass;
        }

        match self.best_placement(engine, game, player) {
            Some(best) => best.action(),
            None => self.fallback(game, me),
        }
    }

    /// Trade everything but blanks, or pass when exchanging is not allowed.
    fn fallback(&self, game: &GameState, me: &Player) -> Action {
        if self.config.exchange_when_stuck && game.bag_len() >= game.config().rack_size {
            let unwanted: Vec<Tile> = me.rack().iter().filter(|t| !t.is_blank).copied().collect();
            if !unwanted.is_empty() {
                return Action::exchange(&unwanted);
            }
        }
        Action::Pass
    }
}
