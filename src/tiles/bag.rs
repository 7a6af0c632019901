//! The pool of undrawn tiles.
//!
//! Draws are uniformly random using the game's deterministic RNG, so the
//! same seed and the same sequence of actions always deal the same tiles.

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::GameRng;

/// Mutable multiset of undrawn tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: GameRng,
}

impl TileBag {
    /// Create a bag holding `tiles`, shuffled with `rng`.
    #[must_use]
    pub fn new(mut tiles: Vec<Tile>, mut rng: GameRng) -> Self {
        rng.shuffle(&mut tiles);
        Self { tiles, rng }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The undrawn tiles, in no meaningful order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Remove up to `n` tiles uniformly at random.
    ///
    /// Returns fewer than `n` when the bag runs low; an empty bag is not an error.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let count = n.min(self.tiles.len());
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.rng.gen_range_usize(0..self.tiles.len());
            drawn.push(self.tiles.swap_remove(index));
        }
        drawn
    }

    /// Put tiles back and reshuffle before any later draw.
    ///
    /// Returned tiles lose their exchange flag and blanks lose their letter.
    pub fn return_and_reshuffle(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles.into_iter().map(Tile::returned));
        self.rng.shuffle(&mut self.tiles);
    }

    /// Remove one specific tile, for arranging exact racks in tests.
    #[cfg(test)]
    pub(crate) fn take(&mut self, key: super::RackKey) -> Option<Tile> {
        let index = self.tiles.iter().position(|t| t.rack_key() == key)?;
        Some(self.tiles.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::LetterDistribution;

    fn full_bag(seed: u64) -> TileBag {
        TileBag::new(LetterDistribution::english().tiles(), GameRng::new(seed))
    }

    #[test]
    fn test_draw_removes_tiles() {
        let mut bag = full_bag(42);
        let drawn = bag.draw(7);

        assert_eq!(drawn.len(), 7);
        assert_eq!(bag.len(), 93);
    }

    #[test]
    fn test_draw_more_than_available() {
        let mut bag = TileBag::new(vec![Tile::new('A', 1), Tile::new('B', 3)], GameRng::new(1));

        let drawn = bag.draw(7);
        assert_eq!(drawn.len(), 2);
        assert!(bag.is_empty());
        assert!(bag.draw(3).is_empty());
    }

    #[test]
    fn test_draws_are_deterministic() {
        let mut a = full_bag(9);
        let mut b = full_bag(9);
        assert_eq!(a.draw(20), b.draw(20));
    }

    #[test]
    fn test_return_and_reshuffle_cleans_tiles() {
        let mut bag = TileBag::new(Vec::new(), GameRng::new(3));
        bag.return_and_reshuffle([Tile::new('E', 1).selected(true), Tile::blank().assign('Q')]);

        assert_eq!(bag.len(), 2);
        assert!(bag.tiles().iter().all(|t| !t.selected_for_swap));
        assert!(bag.tiles().iter().any(Tile::is_unassigned_blank));
    }
}
