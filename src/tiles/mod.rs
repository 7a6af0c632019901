//! Letter tiles, the language's letter distribution, and the tile bag.

pub mod tile;
pub mod distribution;
pub mod bag;

pub use tile::{RackKey, Tile, BLANK};
pub use distribution::{LetterDistribution, LetterSpec};
pub use bag::TileBag;
