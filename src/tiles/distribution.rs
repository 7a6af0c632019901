//! Letter distributions: how many of each tile a language ships with and
//! what each is worth.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, BLANK};

/// Count and face value for one letter (or [`BLANK`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSpec {
    pub letter: char,
    pub count: u8,
    pub points: u8,
}

/// The complete tile set for a language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDistribution {
    letters: Vec<LetterSpec>,
}

/// Standard English set: 100 tiles including two blanks.
const ENGLISH: &[(char, u8, u8)] = &[
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    (BLANK, 2, 0),
];

impl LetterDistribution {
    /// Build a distribution from `(letter, count, points)` triples.
    pub fn new(letters: impl IntoIterator<Item = (char, u8, u8)>) -> Self {
        Self {
            letters: letters
                .into_iter()
                .map(|(letter, count, points)| LetterSpec {
                    letter: letter.to_ascii_uppercase(),
                    count,
                    points,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH.iter().copied())
    }

    /// Total number of tiles in a full bag.
    #[must_use]
    pub fn total(&self) -> usize {
        self.letters.iter().map(|s| usize::from(s.count)).sum()
    }

    /// Face value of a letter; unknown letters and blanks are worth zero.
    #[must_use]
    pub fn points(&self, letter: char) -> u8 {
        let upper = letter.to_ascii_uppercase();
        self.letters
            .iter()
            .find(|s| s.letter == upper)
            .map_or(0, |s| s.points)
    }

    pub fn specs(&self) -> &[LetterSpec] {
        &self.letters
    }

    /// Materialise every tile of the set, in distribution order.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        self.letters
            .iter()
            .flat_map(|spec| {
                let tile = if spec.letter == BLANK {
                    Tile::blank()
                } else {
                    Tile::new(spec.letter, spec.points)
                };
                std::iter::repeat(tile).take(usize::from(spec.count))
            })
            .collect()
    }
}

impl Default for LetterDistribution {
    fn default() -> Self {
        Self::english()
    }
}
