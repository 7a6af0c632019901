//! Candidate placement generation.
//!
//! Depth-first over the rack, one empty cell at a time, from every origin
//! whose reach touches an anchor (or the centre on an empty board). A
//! branch is cut as soon as the main word stops being a dictionary prefix
//! or a perpendicular word falls out of the dictionary. Whatever survives
//! is handed to [`TurnEngine::evaluate_placement`], the same check a human
//! placement goes through.

use smallvec::SmallVec;

use crate::board::{Board, Direction, Position};
use crate::core::{Action, GameConfig};
use crate::dictionary::Dictionary;
use crate::rules::{ScoredPlacement, TurnEngine};
use crate::tiles::{RackKey, Tile};

/// A placement that passed full validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub origin: Position,
    pub direction: Direction,
    pub tiles: SmallVec<[Tile; 7]>,
    pub placement: ScoredPlacement,
}

impl Candidate {
    #[must_use]
    pub fn score(&self) -> i32 {
        self.placement.score.total()
    }

    #[must_use]
    pub fn action(&self) -> Action {
        Action::place_word(self.origin, self.direction, &self.tiles)
    }
}

/// Counters from one search, for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Origin and direction pairs explored.
    pub origins: u32,
    /// Tiles tried in some cell.
    pub nodes: u32,
    /// Placements sent to the engine.
    pub evaluations: usize,
    /// Placements the engine accepted.
    pub accepted: u32,
}

/// Every legal placement reachable from `rack`, in discovery order.
///
/// Discovery order is fixed: origins row by row, horizontal before
/// vertical, rack tiles in rack order, blank letters A to Z.
pub fn generate(
    engine: &TurnEngine,
    board: &Board,
    config: &GameConfig,
    rack: &[Tile],
    max_evaluations: usize,
) -> (Vec<Candidate>, SearchStats) {
    let mut search = Search {
        engine,
        board,
        config,
        dictionary: engine.dictionary(),
        max_evaluations,
        stats: SearchStats::default(),
        found: Vec::new(),
    };
    search.run(rack);
    (search.found, search.stats)
}

struct Search<'a> {
    engine: &'a TurnEngine,
    board: &'a Board,
    config: &'a GameConfig,
    dictionary: &'a Dictionary,
    max_evaluations: usize,
    stats: SearchStats,
    found: Vec<Candidate>,
}

/// The placement being built along one line.
struct Frame {
    origin: Position,
    direction: Direction,
    tiles: SmallVec<[Tile; 7]>,
    /// Main word so far, including board letters around the new tiles.
    word: String,
    /// Touches an existing tile, or covers the centre of an empty board.
    connected: bool,
}

impl Search<'_> {
    fn run(&mut self, rack: &[Tile]) {
        if rack.is_empty() || self.dictionary.is_empty() {
            return;
        }
        let size = self.board.size();
        let mut remaining = rack.to_vec();

        for row in 0..size {
            for col in 0..size {
                let origin = Position::new(row, col);
                if self.board.is_occupied(origin) {
                    continue;
                }
                for direction in Direction::ALL {
                    if self.exhausted() {
                        return;
                    }
                    if !self.reaches_anchor(origin, direction, rack.len()) {
                        continue;
                    }
                    self.stats.origins += 1;

                    let before = self.board.letters_before(origin, direction);
                    let mut frame = Frame {
                        origin,
                        direction,
                        tiles: SmallVec::new(),
                        connected: !before.is_empty(),
                        word: before,
                    };
                    self.extend(Some(origin), &mut remaining, &mut frame);
                }
            }
        }
    }

    fn exhausted(&self) -> bool {
        self.stats.evaluations >= self.max_evaluations
    }

    /// Can `count` tiles laid from `origin` reach a cell that connects?
    fn reaches_anchor(&self, origin: Position, direction: Direction, count: usize) -> bool {
        let mut cursor = Some(origin);
        let mut laid = 0;
        while let Some(pos) = cursor {
            if laid == count {
                break;
            }
            if !self.board.is_occupied(pos) {
                let connects = if self.board.is_empty() {
                    pos == self.board.center()
                } else {
                    self.board.is_anchor(pos)
                };
                if connects {
                    return true;
                }
                laid += 1;
            }
            cursor = pos.forward(direction, self.board.size());
        }
        false
    }

    /// Try every distinct rack tile in the empty cell at `cursor`.
    fn extend(&mut self, cursor: Option<Position>, rack: &mut Vec<Tile>, frame: &mut Frame) {
        let Some(pos) = cursor else {
            return;
        };

        let mut tried: SmallVec<[RackKey; 7]> = SmallVec::new();
        for i in 0..rack.len() {
            let tile = rack[i];
            if tried.contains(&tile.rack_key()) {
                continue;
            }
            tried.push(tile.rack_key());

            let options: Vec<Tile> = if tile.is_blank {
                ('A'..='Z').map(|letter| tile.assign(letter)).collect()
            } else {
                vec![tile]
            };

            rack.remove(i);
            for played in options {
                if self.exhausted() {
                    break;
                }
                self.try_tile(pos, played, rack, frame);
            }
            rack.insert(i, tile);
        }
    }

    fn try_tile(&mut self, pos: Position, played: Tile, rack: &mut Vec<Tile>, frame: &mut Frame) {
        self.stats.nodes += 1;

        let across = frame.direction.perpendicular();
        let cross_before = self.board.letters_before(pos, across);
        let cross_after = self.board.letters_after(pos, across);
        let crosses = !cross_before.is_empty() || !cross_after.is_empty();
        if crosses {
            let cross = format!("{cross_before}{}{cross_after}", played.letter);
            if !self.dictionary.is_valid_word(&cross) {
                return;
            }
        }

        let following = self.board.letters_after(pos, frame.direction);
        let word_len = frame.word.len();
        frame.word.push(played.letter);
        frame.word.push_str(&following);

        if self.dictionary.is_prefix(&frame.word) {
            let was_connected = frame.connected;
            frame.connected |= crosses || !following.is_empty() || pos == self.board.center();
            frame.tiles.push(played);

            if frame.connected && frame.word.len() > 1 && self.dictionary.is_valid_word(&frame.word) {
                self.evaluate(frame);
            }
            if !rack.is_empty() {
                let mut next = pos.forward(frame.direction, self.board.size());
                for _ in 0..following.len() {
                    next = next.and_then(|p| p.forward(frame.direction, self.board.size()));
                }
                self.extend(next, rack, frame);
            }

            frame.tiles.pop();
            frame.connected = was_connected;
        }

        frame.word.truncate(word_len);
    }

    fn evaluate(&mut self, frame: &Frame) {
        if self.exhausted() {
            return;
        }
        self.stats.evaluations += 1;

        let result = self.engine.evaluate_placement(
            self.board,
            self.config,
            &frame.tiles,
            frame.origin,
            frame.direction,
        );
        if let Ok(placement) = result {
            self.stats.accepted += 1;
            self.found.push(Candidate {
                origin: frame.origin,
                direction: frame.direction,
                tiles: frame.tiles.clone(),
                placement,
            });
        }
    }
}
