//! Elevation-grid climb: uniform-cost grid walk with a climb constraint.
//!
//! The map is rows of `a`–`z` elevations with an `S` start marker (lowest
//! elevation) and an `E` summit marker (highest). Each step moves one cell
//! orthogonally and may climb at most one elevation unit; descending any
//! distance is free. The archive's second variant starts from every
//! lowest-elevation cell at once, which here is just a multi-start seed.

use pathwise_engine::space::{Cost, SearchSpace, Step};

use crate::grid::{Grid, Position, HEADINGS};

/// Elevation-map parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no rows, or rows of unequal width.
    BadShape,
    /// A cell is not `a`–`z`, `S`, or `E`.
    BadCell { row: usize, col: usize, cell: char },
    /// The `S` or `E` marker is missing.
    MissingMarker { marker: char },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadShape => write!(f, "elevation map needs equal-width, non-empty rows"),
            Self::BadCell { row, col, cell } => {
                write!(f, "unexpected cell {cell:?} at row {row}, column {col}")
            }
            Self::MissingMarker { marker } => {
                write!(f, "elevation map has no {marker:?} marker")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A parsed elevation map with its start and summit.
#[derive(Debug, Clone)]
pub struct HillMap {
    grid: Grid<u8>,
    start: Position,
    summit: Position,
}

impl HillMap {
    /// Parse from letter rows.
    ///
    /// # Errors
    ///
    /// [`ParseError`] on shape problems, unexpected cells, or missing
    /// `S`/`E` markers.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut start = None;
        let mut summit = None;

        for (row, line) in input.trim().lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, cell) in line.chars().enumerate() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let here = Position {
                    row: row as i32,
                    col: col as i32,
                };
                let elevation = match cell {
                    'S' => {
                        start = Some(here);
                        0
                    }
                    'E' => {
                        summit = Some(here);
                        25
                    }
                    'a'..='z' => cell as u8 - b'a',
                    _ => return Err(ParseError::BadCell { row, col, cell }),
                };
                cells.push(elevation);
            }
            rows.push(cells);
        }

        if rows.is_empty() || rows.iter().any(|row| row.len() != rows[0].len()) || rows[0].is_empty()
        {
            return Err(ParseError::BadShape);
        }

        let start = start.ok_or(ParseError::MissingMarker { marker: 'S' })?;
        let summit = summit.ok_or(ParseError::MissingMarker { marker: 'E' })?;
        Ok(Self {
            grid: Grid::from_rows(rows),
            start,
            summit,
        })
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn summit(&self) -> Position {
        self.summit
    }

    /// Every lowest-elevation cell — the multi-start seed for the "best
    /// trailhead" variant.
    #[must_use]
    pub fn lowest_cells(&self) -> Vec<Position> {
        self.grid
            .cells()
            .filter(|&(_, &elevation)| elevation == 0)
            .map(|(pos, _)| pos)
            .collect()
    }

    fn elevation(&self, pos: Position) -> u8 {
        *self.grid.get(pos).expect("position came from this grid")
    }
}

impl SearchSpace for HillMap {
    type State = Position;
    type Key = Position;

    fn canonical_key(&self, state: &Position) -> Position {
        *state
    }

    fn successors(&self, state: &Position, out: &mut Vec<Step<Position>>) {
        let here = self.elevation(*state);
        for heading in HEADINGS {
            let next = state.step(heading);
            let Some(&there) = self.grid.get(next) else {
                continue;
            };
            if there <= here + 1 {
                out.push(Step {
                    state: next,
                    cost: 1,
                });
            }
        }
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.summit
    }

    /// Admissible on both axes: every step covers one cell of taxicab
    /// distance and at most one unit of climb, so the true remaining cost
    /// is at least the larger of the two.
    fn estimate(&self, state: &Position) -> Cost {
        let distance = state.manhattan(self.summit);
        let climb = i64::from(self.elevation(self.summit)) - i64::from(self.elevation(*state));
        distance.max(climb)
    }
}
