//! The turn engine.
//!
//! [`TurnEngine::apply_action`] is the only way a game moves forward. It
//! takes a game snapshot and an action and either returns a new snapshot
//! plus a [`MoveResult`], or an [`ActionError`] with the caller's snapshot
//! untouched. Each call runs to completion synchronously:
//!
//! 1. precondition checks (game running, player's turn, tiles on rack)
//! 2. variant dispatch (place word, exchange, pass)
//! 3. end-of-game evaluation
//! 4. turn advancement
//!
//! Computer players go through exactly the same path: the strategy picks
//! an [`Action`] and it is applied like any human action.

use tracing::{debug, info, warn};

use super::end_game;
use super::error::{ActionError, SetupError};
use super::scoring::{score_placement, ScoreBreakdown};
use crate::ai::ComputerStrategy;
use crate::board::{Board, Direction, PlacementOutcome, Position};
use crate::core::{
    Action, ActionKind, GameConfig, GameState, MoveResult, Participant, PlayerId,
};
use crate::dictionary::{Dictionary, SharedDictionary};
use crate::tiles::Tile;

/// A new game snapshot and the result of the move that produced it.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    pub game: GameState,
    pub result: MoveResult,
}

/// A placement that passed both board and dictionary validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredPlacement {
    pub outcome: PlacementOutcome,
    pub score: ScoreBreakdown,
}

/// Validates and applies actions against a shared dictionary.
///
/// Holds no per-game state; one engine can serve any number of games
/// concurrently.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    dictionary: SharedDictionary,
}

impl TurnEngine {
    pub fn new(dictionary: SharedDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Create a game and deal every player a full rack.
    pub fn new_game(
        &self,
        participants: &[Participant],
        config: GameConfig,
    ) -> Result<GameState, SetupError> {
        let count = participants.len();
        if count < config.min_players.max(1) {
            return Err(SetupError::TooFewPlayers {
                count,
                min: config.min_players.max(1),
            });
        }
        if count > config.max_players.min(255) {
            return Err(SetupError::TooManyPlayers {
                count,
                max: config.max_players.min(255),
            });
        }
        if config.rack_size == 0 {
            return Err(SetupError::EmptyRack);
        }
        if config.scoreless_turn_limit == 0 {
            return Err(SetupError::NoScorelessLimit);
        }
        let needed = config.rack_size * count;
        let available = config.distribution.total();
        if available < needed {
            return Err(SetupError::NotEnoughTiles { available, needed });
        }

        let mut game = GameState::new(participants, config);
        game.deal();
        game.assert_invariants();

        info!(players = count, seed = game.config().seed, "created game");
        Ok(game)
    }

    /// Validate a placement on `board` and score it.
    ///
    /// Every formed word, main word and cross-words alike, must be in the
    /// dictionary. This is the single validation path for human and
    /// computer placements.
    pub fn evaluate_placement(
        &self,
        board: &Board,
        config: &GameConfig,
        tiles: &[Tile],
        origin: Position,
        direction: Direction,
    ) -> Result<ScoredPlacement, ActionError> {
        let outcome = board.place(tiles, origin, direction)?;

        let invalid: Vec<String> = outcome
            .word_strings()
            .filter(|w| !self.dictionary.is_valid_word(w))
            .map(str::to_string)
            .collect();
        if !invalid.is_empty() {
            return Err(ActionError::InvalidWord { words: invalid });
        }

        let score = score_placement(&outcome, config);
        Ok(ScoredPlacement { outcome, score })
    }

    /// Apply `action` on behalf of `player`.
    ///
    /// On error nothing changes: `game` is only read, and the returned
    /// snapshot is built from a clone.
    pub fn apply_action(
        &self,
        game: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<TurnOutcome, ActionError> {
        if game.is_finished() {
            return Err(ActionError::GameOver);
        }
        let acting = game.player(player).ok_or(ActionError::UnknownPlayer(player))?;
        if player != game.current_player() {
            return Err(ActionError::NotPlayersTurn {
                player,
                current: game.current_player(),
            });
        }
        if !acting.has_tiles(action.tiles()) {
            return Err(ActionError::TilesNotInRack);
        }

        let mut next = game.clone();
        let mut words = Vec::new();
        let mut score = 0;
        let mut bingo = false;

        match action {
            Action::PlaceWord {
                origin,
                direction,
                tiles,
            } => {
                let Some(taken) = next.player_mut(player).take_tiles(tiles) else {
                    return Err(ActionError::TilesNotInRack);
                };
                // Points come from the rack; only a blank's letter comes from the action.
                let placed: Vec<Tile> = taken
                    .iter()
                    .zip(tiles.iter())
                    .map(|(own, named)| own.assign(named.letter))
                    .collect();
                let scored = self.evaluate_placement(
                    game.board(),
                    game.config(),
                    &placed,
                    *origin,
                    *direction,
                )?;
                next.board_mut().commit(&scored.outcome);

                score = scored.score.total();
                bingo = scored.score.is_bingo();
                words = scored.outcome.word_strings().map(str::to_string).collect();

                next.player_mut(player).score += score;
                next.refill_rack(player);
                next.reset_scoreless_turns();
            }
            Action::Exchange { tiles } => {
                if tiles.is_empty() {
                    return Err(ActionError::EmptyExchange);
                }
                let required = game.config().rack_size;
                if game.bag_len() < required {
                    return Err(ActionError::InsufficientBagForExchange {
                        remaining: game.bag_len(),
                        required,
                    });
                }
                let Some(returned) = next.player_mut(player).take_tiles(tiles) else {
                    return Err(ActionError::TilesNotInRack);
                };

                // Draw before returning so the player cannot redraw their own tiles.
                let fresh = next.bag_mut().draw(returned.len());
                next.player_mut(player).give_tiles(fresh);
                next.bag_mut().return_and_reshuffle(returned);
                next.count_scoreless_turn();
            }
            Action::Pass => next.count_scoreless_turn(),
        }

        let reason = end_game::settle(&mut next, player);
        next.advance_turn();

        let result = MoveResult {
            player,
            player_name: acting.name.clone(),
            kind: action.kind(),
            turn: game.turn_number(),
            score,
            words,
            tile_count: action.tiles().len(),
            bingo,
            ended_game: reason.is_some(),
            next_player: next.current_player(),
        };
        next.record(result.clone());
        next.assert_invariants();

        debug!(
            player = %player,
            kind = ?result.kind,
            score = result.score,
            bag = next.bag_len(),
            "applied action"
        );
        if let (Some(reason), Some(status)) = (reason, next.status()) {
            info!(?reason, outcome = ?status.outcome, "game finished");
        }

        Ok(TurnOutcome { game: next, result })
    }

    /// Remove `player` from the game. Allowed at any time, in or out of turn.
    ///
    /// Their rack goes back into the bag and they are skipped from now on.
    /// When a single seated player remains, that player wins.
    pub fn resign(&self, game: &GameState, player: PlayerId) -> Result<TurnOutcome, ActionError> {
        if game.is_finished() {
            return Err(ActionError::GameOver);
        }
        let resigning = game
            .player(player)
            .filter(|p| p.is_seated())
            .ok_or(ActionError::UnknownPlayer(player))?;

        let mut next = game.clone();
        let rack = next.player_mut(player).clear_rack();
        next.bag_mut().return_and_reshuffle(rack);
        next.player_mut(player).resigned = true;

        let reason = end_game::settle(&mut next, player);
        if game.current_player() == player {
            next.advance_turn();
        }

        let result = MoveResult {
            player,
            player_name: resigning.name.clone(),
            kind: ActionKind::Resign,
            turn: game.turn_number(),
            score: 0,
            words: Vec::new(),
            tile_count: 0,
            bingo: false,
            ended_game: reason.is_some(),
            next_player: next.current_player(),
        };
        next.record(result.clone());
        next.assert_invariants();

        info!(player = %player, ended = result.ended_game, "player resigned");
        Ok(TurnOutcome { game: next, result })
    }

    /// Let `strategy` move for the current player.
    ///
    /// If the chosen action is rejected the player passes instead.
    pub fn play_computer_turn(
        &self,
        game: &GameState,
        strategy: &ComputerStrategy,
    ) -> Result<TurnOutcome, ActionError> {
        let player = game.current_player();
        let action = strategy.choose_action(self, game, player);
        match self.apply_action(game, player, &action) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                warn!(player = %player, error = %err, "computer move rejected, passing");
                self.apply_action(game, player, &Action::Pass)
            }
        }
    }
}
