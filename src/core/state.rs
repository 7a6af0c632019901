//! Game state: the aggregate root.
//!
//! ## GameState
//!
//! Complete game state:
//! - Configuration (rack size, bonuses, layout, tile set)
//! - Board and tile bag (the bag carries the deterministic RNG)
//! - Players in turn order, and whose turn it is
//! - Move history and the terminal status once finished
//!
//! Uses `im` persistent data structures so the turn engine can clone the
//! state, apply an action to the clone, and hand back a new snapshot while
//! the caller's original stays untouched.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveResult;
use super::config::GameConfig;
use super::player::{Participant, Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use super::status::GameStatus;
use crate::board::Board;
use crate::tiles::TileBag;

/// Full, serializable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    bag: TileBag,
    players: PlayerMap<Player>,

    /// Player whose turn it is.
    current: PlayerId,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Consecutive passes and exchanges across all players.
    scoreless_turns: u32,

    history: Vector<MoveResult>,
    status: Option<GameStatus>,

    /// Size of the full tile set; conserved for the life of the game.
    total_tiles: usize,
}

impl GameState {
    /// A fresh game: empty board, full bag, players without tiles.
    ///
    /// Player 0 moves first. Call [`GameState::deal`] before the first turn.
    pub(crate) fn new(participants: &[Participant], config: GameConfig) -> Self {
        let board = Board::new(&config.layout);
        let bag = TileBag::new(
            config.distribution.tiles(),
            GameRng::new(config.seed).for_context("bag"),
        );
        let mut players = PlayerMap::new(participants.len(), |id| {
            Player::new(id, &participants[id.index()])
        });
        players[PlayerId::new(0)].my_turn = true;
        let total_tiles = bag.len();

        Self {
            config,
            board,
            bag,
            players,
            current: PlayerId::new(0),
            turn_number: 1,
            scoreless_turns: 0,
            history: Vector::new(),
            status: None,
            total_tiles,
        }
    }

    /// Deal a full rack to every player, in seat order.
    pub(crate) fn deal(&mut self) {
        for id in PlayerId::all(self.player_count()) {
            self.refill_rack(id);
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// Tiles left in the bag.
    #[must_use]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn scoreless_turns(&self) -> u32 {
        self.scoreless_turns
    }

    /// Every applied move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveResult> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveResult> {
        self.history.last()
    }

    /// Terminal status, set once the game is over.
    #[must_use]
    pub fn status(&self) -> Option<&GameStatus> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_some()
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        self.players.map(|p| p.score)
    }

    /// Players still taking turns.
    pub fn seated_players(&self) -> impl Iterator<Item = &Player> {
        self.players.values().filter(|p| p.is_seated())
    }

    /// Size of the full tile set.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.total_tiles
    }

    /// Tiles in the bag, on every rack, and on the board.
    #[must_use]
    pub fn tiles_accounted(&self) -> usize {
        self.bag.len()
            + self.players.values().map(|p| p.rack().len()).sum::<usize>()
            + self.board.tile_count()
    }

    // === Invariants ===

    /// Describe the first broken invariant, if any.
    #[must_use]
    pub fn invariant_violation(&self) -> Option<String> {
        let on_board = self.board.cells().filter(|c| c.tile.is_some()).count();
        if on_board != self.board.tile_count() {
            return Some(format!(
                "board holds {on_board} tiles but counts {}",
                self.board.tile_count()
            ));
        }

        let accounted = self.tiles_accounted();
        if accounted != self.total_tiles {
            return Some(format!(
                "tile conservation broken: {accounted} tiles accounted for, expected {}",
                self.total_tiles
            ));
        }

        if self.current.index() >= self.player_count() {
            return Some(format!("current player {} does not exist", self.current));
        }

        let flagged: Vec<PlayerId> = self
            .players
            .values()
            .filter(|p| p.my_turn)
            .map(|p| p.id)
            .collect();
        let expected = if self.is_finished() {
            Vec::new()
        } else {
            vec![self.current]
        };
        if flagged != expected {
            return Some(format!(
                "turn flags {flagged:?} do not match current player {}",
                self.current
            ));
        }

        if !self.is_finished() && !self.players[self.current].is_seated() {
            return Some(format!("current player {} has resigned", self.current));
        }

        None
    }

    /// Panic if the state has diverged from the rules.
    ///
    /// A violation is a programming defect, never a recoverable error.
    pub fn assert_invariants(&self) {
        if let Some(violation) = self.invariant_violation() {
            panic!("game state invariant violated: {violation}");
        }
    }

    // === Mutation (turn engine only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn bag_mut(&mut self) -> &mut TileBag {
        &mut self.bag
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    pub(crate) fn players_mut(&mut self) -> &mut PlayerMap<Player> {
        &mut self.players
    }

    /// Draw from the bag until the player's rack is full or the bag is empty.
    ///
    /// Returns the number of tiles drawn.
    pub(crate) fn refill_rack(&mut self, id: PlayerId) -> usize {
        let missing = self.config.rack_size.saturating_sub(self.players[id].rack().len());
        let drawn = self.bag.draw(missing);
        let count = drawn.len();
        self.players[id].give_tiles(drawn);
        count
    }

    pub(crate) fn reset_scoreless_turns(&mut self) {
        self.scoreless_turns = 0;
    }

    pub(crate) fn count_scoreless_turn(&mut self) {
        self.scoreless_turns += 1;
    }

    /// Next seated player after `id`, wrapping. `id` itself if nobody else is seated.
    #[must_use]
    pub fn next_seated_after(&self, id: PlayerId) -> PlayerId {
        let count = self.player_count();
        let mut next = id.next(count);
        for _ in 0..count {
            if self.players[next].is_seated() {
                return next;
            }
            next = next.next(count);
        }
        id
    }

    /// Hand the turn to the next seated player.
    pub(crate) fn advance_turn(&mut self) {
        let next = self.next_seated_after(self.current);
        self.players[self.current].my_turn = false;
        self.current = next;
        self.players[next].my_turn = !self.is_finished();
        self.turn_number += 1;
    }

    pub(crate) fn record(&mut self, result: MoveResult) {
        self.history.push_back(result);
    }

    /// Mark the game finished. Clears every turn flag.
    pub(crate) fn finish(&mut self, status: GameStatus) {
        assert!(self.status.is_none(), "game status is set exactly once");
        for (_, player) in self.players.iter_mut() {
            player.my_turn = false;
        }
        self.status = Some(status);
    }
}
