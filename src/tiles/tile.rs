//! Tile value objects.
//!
//! Racks, the bag, and the board each own their own copies of tiles.
//! A blank sits in a rack as [`BLANK`] and is given a letter only when
//! it is placed.

use serde::{Deserialize, Serialize};

/// Letter shown by a blank tile that has not been assigned a letter.
pub const BLANK: char = '?';

/// A single letter tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Upper-case letter, or [`BLANK`] for an unassigned blank.
    pub letter: char,
    /// Face value. Always zero for blanks.
    pub points: u8,
    pub is_blank: bool,
    /// Transient flag used by clients to mark tiles for an exchange.
    #[serde(default)]
    pub selected_for_swap: bool,
}

/// Identity used when matching action tiles against a rack.
///
/// Any blank matches any blank regardless of the letter it was assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RackKey {
    Letter(char),
    Blank,
}

impl Tile {
    #[must_use]
    pub fn new(letter: char, points: u8) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            points,
            is_blank: false,
            selected_for_swap: false,
        }
    }

    #[must_use]
    pub fn blank() -> Self {
        Self {
            letter: BLANK,
            points: 0,
            is_blank: true,
            selected_for_swap: false,
        }
    }

    /// Give a blank the letter it will represent on the board.
    ///
    /// Has no effect on ordinary tiles.
    #[must_use]
    pub fn assign(self, letter: char) -> Self {
        if self.is_blank {
            Self {
                letter: letter.to_ascii_uppercase(),
                ..self
            }
        } else {
            self
        }
    }

    /// A blank with no letter yet cannot be placed.
    #[must_use]
    pub fn is_unassigned_blank(&self) -> bool {
        self.is_blank && !self.letter.is_ascii_alphabetic()
    }

    #[must_use]
    pub fn rack_key(&self) -> RackKey {
        if self.is_blank {
            RackKey::Blank
        } else {
            RackKey::Letter(self.letter)
        }
    }

    /// Mark or unmark the tile for exchange.
    #[must_use]
    pub fn selected(self, selected: bool) -> Self {
        Self {
            selected_for_swap: selected,
            ..self
        }
    }

    /// The tile as it goes back into the bag: flags cleared, blanks reset.
    #[must_use]
    pub fn returned(self) -> Self {
        if self.is_blank {
            Self::blank()
        } else {
            self.selected(false)
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_blank && !self.is_unassigned_blank() {
            write!(f, "{}", self.letter.to_ascii_lowercase())
        } else {
            write!(f, "{}", self.letter)
        }
    }
}
