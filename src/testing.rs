//! Fixtures shared by unit tests.

use crate::core::{GameConfig, GameState, Participant, PlayerId};
use crate::tiles::{LetterDistribution, RackKey, Tile, BLANK};

/// A tile with its English face value; `?` is a blank.
pub(crate) fn tile(letter: char) -> Tile {
    if letter == BLANK {
        Tile::blank()
    } else {
        Tile::new(letter, LetterDistribution::english().points(letter))
    }
}

pub(crate) fn tiles(word: &str) -> Vec<Tile> {
    word.chars().map(tile).collect()
}

/// An undealt game whose racks and bag hold exactly the given letters.
///
/// `?` stands for a blank. The tile set is built from the letters themselves,
/// so tile conservation holds from the start.
pub(crate) fn rigged(racks: &[&str], bag: &str, config: GameConfig) -> GameState {
    let english = LetterDistribution::english();
    let mut counts: Vec<(char, u8, u8)> = Vec::new();
    for c in racks.concat().chars().chain(bag.chars()) {
        match counts.iter_mut().find(|e| e.0 == c) {
            Some(entry) => entry.1 += 1,
            None => counts.push((c, 1, english.points(c))),
        }
    }
    let config = config.with_distribution(LetterDistribution::new(counts));
    let participants: Vec<Participant> = (0..racks.len())
        .map(|i| Participant::human(format!("P{i}")))
        .collect();

    let mut game = GameState::new(&participants, config);
    for (i, rack) in racks.iter().enumerate() {
        for c in rack.chars() {
            let key = if c == BLANK {
                RackKey::Blank
            } else {
                RackKey::Letter(c)
            };
            let tile = game.bag_mut().take(key).unwrap();
            game.player_mut(PlayerId::new(i as u8)).give_tiles([tile]);
        }
    }
    game.assert_invariants();
    game
}
