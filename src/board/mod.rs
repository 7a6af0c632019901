//! The physical board: geometry, premium layout, cells, and word placement.
//!
//! `Board::place` validates a placement and reports the words it forms
//! without touching the board; `Board::commit` writes an accepted
//! placement. Keeping the two apart is what lets the turn engine check
//! every formed word against the dictionary before anything changes.

pub mod geometry;
pub mod layout;
pub mod grid;
pub mod placement;

pub use geometry::{Direction, Position};
pub use layout::{BoardLayout, Premium};
pub use grid::{Board, Cell};
pub use placement::{FormedWord, PlacedTile, PlacementError, PlacementOutcome};
