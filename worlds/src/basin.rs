//! Walk through an evolving cellular automaton.
//!
//! The grid changes underfoot: each tick every cell is recomputed from its
//! Moore neighborhood, and the agent simultaneously steps orthogonally or
//! waits, landing only on cells open in the *next* generation. The problem
//! is a shortest path through a time-expanded lattice, so the canonical
//! key is position + tick.
//!
//! Generations are precomputed to a fixed horizon when the basin is built,
//! keeping successor generation a pure function of state plus static
//! configuration — there is no cache filling up behind the search's back.
//! A goal that stays unreachable within the horizon exhausts normally.

use std::ops::RangeInclusive;

use itertools::iproduct;
use pathwise_engine::space::{Cost, SearchSpace, Step};

use crate::grid::{Grid, Position, HEADINGS};

/// Basin parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no rows, or rows of unequal width.
    BadShape,
    /// A cell is not `#`, `.`, `S`, or `E`.
    BadCell { row: usize, col: usize, cell: char },
    /// The `S` or `E` marker is missing.
    MissingMarker { marker: char },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadShape => write!(f, "basin needs equal-width, non-empty rows"),
            Self::BadCell { row, col, cell } => {
                write!(f, "unexpected cell {cell:?} at row {row}, column {col}")
            }
            Self::MissingMarker { marker } => write!(f, "basin has no {marker:?} marker"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An outer-totalistic birth/survival rule over the count of blocked
/// Moore neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// An open cell becomes blocked when its blocked-neighbor count falls
    /// in this range.
    pub born: RangeInclusive<u8>,
    /// A blocked cell stays blocked when its blocked-neighbor count falls
    /// in this range.
    pub survives: RangeInclusive<u8>,
}

impl Rule {
    /// A rule under which nothing ever changes.
    #[must_use]
    pub fn frozen() -> Self {
        Rule {
            born: 9..=9,
            survives: 0..=8,
        }
    }

    /// A rule under which every blocked cell opens on the next tick and
    /// nothing new is ever born.
    #[must_use]
    pub fn thawing() -> Self {
        Rule {
            born: 9..=9,
            survives: 9..=9,
        }
    }

    fn next(&self, blocked: bool, neighbors: u8) -> bool {
        if blocked {
            self.survives.contains(&neighbors)
        } else {
            self.born.contains(&neighbors)
        }
    }
}

impl Default for Rule {
    /// Conway's rule: born on exactly 3, survives on 2 or 3.
    fn default() -> Self {
        Rule {
            born: 3..=3,
            survives: 2..=3,
        }
    }
}

/// The agent's search state: a position at a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Moment {
    pub pos: Position,
    pub tick: u16,
}

/// A parsed basin with its generations precomputed to a horizon.
#[derive(Debug, Clone)]
pub struct Basin {
    generations: Vec<Grid<bool>>,
    start: Position,
    exit: Position,
}

impl Basin {
    /// Parse the initial generation (`#` blocked, `.` open, `S` start,
    /// `E` exit) and evolve `horizon` further generations under `rule`.
    ///
    /// # Errors
    ///
    /// [`ParseError`] on shape problems, unexpected cells, or missing
    /// markers.
    pub fn parse(input: &str, rule: &Rule, horizon: u16) -> Result<Self, ParseError> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut start = None;
        let mut exit = None;

        for (row, line) in input.trim().lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, cell) in line.chars().enumerate() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let here = Position {
                    row: row as i32,
                    col: col as i32,
                };
                let blocked = match cell {
                    '#' => true,
                    '.' => false,
                    'S' => {
                        start = Some(here);
                        false
                    }
                    'E' => {
                        exit = Some(here);
                        false
                    }
                    _ => return Err(ParseError::BadCell { row, col, cell }),
                };
                cells.push(blocked);
            }
            rows.push(cells);
        }
        if rows.is_empty() || rows.iter().any(|row| row.len() != rows[0].len()) || rows[0].is_empty()
        {
            return Err(ParseError::BadShape);
        }

        let start = start.ok_or(ParseError::MissingMarker { marker: 'S' })?;
        let exit = exit.ok_or(ParseError::MissingMarker { marker: 'E' })?;

        let mut generations = vec![Grid::from_rows(rows)];
        for _ in 0..horizon {
            let last = generations.last().expect("seeded with generation zero");
            generations.push(evolve(last, rule));
        }

        Ok(Self {
            generations,
            start,
            exit,
        })
    }

    /// The agent's start state at tick zero.
    #[must_use]
    pub fn entry(&self) -> Moment {
        Moment {
            pos: self.start,
            tick: 0,
        }
    }

    #[must_use]
    pub fn exit(&self) -> Position {
        self.exit
    }

    /// The precomputed generation at `tick`, if within the horizon.
    #[must_use]
    pub fn generation(&self, tick: u16) -> Option<&Grid<bool>> {
        self.generations.get(usize::from(tick))
    }
}

/// One automaton step.
fn evolve(current: &Grid<bool>, rule: &Rule) -> Grid<bool> {
    let mut rows = Vec::with_capacity(usize::try_from(current.height()).unwrap_or(0));
    for row in 0..current.height() {
        let mut cells = Vec::with_capacity(usize::try_from(current.width()).unwrap_or(0));
        for col in 0..current.width() {
            let pos = Position { row, col };
            let blocked = *current.get(pos).expect("row/col ranges stay in bounds");
            cells.push(rule.next(blocked, blocked_neighbors(current, pos)));
        }
        rows.push(cells);
    }
    Grid::from_rows(rows)
}

/// Blocked cells in the Moore neighborhood; outside the grid counts open.
fn blocked_neighbors(grid: &Grid<bool>, pos: Position) -> u8 {
    let mut count = 0;
    for (dr, dc) in iproduct!(-1i32..=1, -1i32..=1) {
        if (dr, dc) == (0, 0) {
            continue;
        }
        let neighbor = Position {
            row: pos.row + dr,
            col: pos.col + dc,
        };
        if grid.get(neighbor) == Some(&true) {
            count += 1;
        }
    }
    count
}

impl SearchSpace for Basin {
    type State = Moment;
    type Key = Moment;

    fn canonical_key(&self, state: &Moment) -> Moment {
        *state
    }

    fn successors(&self, state: &Moment, out: &mut Vec<Step<Moment>>) {
        let tick = state.tick + 1;
        let Some(next_gen) = self.generation(tick) else {
            // Beyond the precomputed horizon: a dead end, not an error.
            return;
        };

        // Waiting in place is a move too; the cell must stay open.
        let mut candidates = vec![state.pos];
        candidates.extend(HEADINGS.iter().map(|&heading| state.pos.step(heading)));

        for pos in candidates {
            if next_gen.get(pos) == Some(&false) {
                out.push(Step {
                    state: Moment { pos, tick },
                    cost: 1,
                });
            }
        }
    }

    fn is_goal(&self, state: &Moment) -> bool {
        state.pos == self.exit
    }

    fn estimate(&self, state: &Moment) -> Cost {
        state.pos.manhattan(self.exit)
    }
}
