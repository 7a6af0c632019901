//! Player identification, per-player storage, and seated participants.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 1-255 players. Turn order is seat order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A seated participant: rack, cumulative score, turn flag and kind.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::tiles::{RackKey, Tile};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player to move is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat in turn order, wrapping after the last player.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_scrabble::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ```
/// use rust_scrabble::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::with_value(3, 0);
/// scores[PlayerId::new(1)] += 12;
/// assert_eq!(scores[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Who is behind a seat. The engine treats both kinds identically;
/// hosts use it to decide when to ask the computer strategy for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// A participant joining a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub kind: PlayerKind,
}

impl Participant {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Computer,
        }
    }
}

/// A seated player, owned exclusively by the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
    rack: Vec<Tile>,
    pub score: i32,
    /// Set on exactly one seated player while the game is running.
    pub my_turn: bool,
    /// A resigned player keeps their score but no longer takes turns.
    pub resigned: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, participant: &Participant) -> Self {
        Self {
            id,
            name: participant.name.clone(),
            kind: participant.kind,
            rack: Vec::new(),
            score: 0,
            my_turn: false,
            resigned: false,
        }
    }

    /// Tiles currently held. Order carries no meaning.
    #[must_use]
    pub fn rack(&self) -> &[Tile] {
        &self.rack
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    /// Still taking turns.
    #[must_use]
    pub fn is_seated(&self) -> bool {
        !self.resigned
    }

    /// Face value of the tiles left on the rack (blanks count zero).
    #[must_use]
    pub fn rack_points(&self) -> i32 {
        self.rack.iter().map(|t| i32::from(t.points)).sum()
    }

    /// Multiset containment: every tile in `tiles` matches a distinct rack tile.
    #[must_use]
    pub fn has_tiles(&self, tiles: &[Tile]) -> bool {
        let mut available: Vec<RackKey> = self.rack.iter().map(Tile::rack_key).collect();
        tiles.iter().all(|tile| {
            match available.iter().position(|k| *k == tile.rack_key()) {
                Some(pos) => {
                    available.swap_remove(pos);
                    true
                }
                None => false,
            }
        })
    }

    /// Remove one matching rack tile for each of `tiles`.
    ///
    /// Returns the removed rack tiles, or `None` (rack untouched) if the
    /// rack does not contain them all.
    pub fn take_tiles(&mut self, tiles: &[Tile]) -> Option<Vec<Tile>> {
        if !self.has_tiles(tiles) {
            return None;
        }
        let mut taken = Vec::with_capacity(tiles.len());
        for tile in tiles {
            let pos = self.rack.iter().position(|t| t.rack_key() == tile.rack_key())?;
            taken.push(self.rack.remove(pos));
        }
        Some(taken)
    }

    /// Add drawn tiles to the rack.
    pub fn give_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.rack.extend(tiles);
    }

    /// Empty the rack, returning everything it held.
    pub fn clear_rack(&mut self) -> Vec<Tile> {
        std::mem::take(&mut self.rack)
    }
}
