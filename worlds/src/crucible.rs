//! Inertia-constrained walk over a heat-loss grid.
//!
//! Every cell charges its digit as step cost, and the cart cannot reverse.
//! How long it may roll straight — and how long it must, before turning or
//! stopping — depends on the [`RunRule`]. Position alone is therefore not
//! an identity: the canonical key is position + heading + current run
//! length, and the same cell participates in many distinct search states.

use pathwise_engine::space::{Cost, SearchSpace, Step};

use crate::grid::{Grid, Heading, Position, HEADINGS};

/// Heat-map parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no rows, or rows of unequal width.
    BadShape,
    /// A cell is not a digit.
    BadCell { row: usize, col: usize, cell: char },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadShape => write!(f, "heat map needs equal-width, non-empty rows"),
            Self::BadCell { row, col, cell } => {
                write!(f, "unexpected cell {cell:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Straight-run constraints for the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunRule {
    /// At most three cells in a row before turning.
    Normal,
    /// At least four cells straight before turning or stopping, at most
    /// ten before a turn is forced.
    Ultra,
}

impl RunRule {
    fn max_run(self) -> u8 {
        match self {
            RunRule::Normal => 3,
            RunRule::Ultra => 10,
        }
    }

    /// Minimum straight run before a turn or a stop is legal.
    fn min_run(self) -> u8 {
        match self {
            RunRule::Normal => 1,
            RunRule::Ultra => 4,
        }
    }
}

/// The cart's search state: where it is, how it got here, and for how
/// many cells it has been rolling that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cart {
    pub pos: Position,
    /// `None` only before the first move, when any heading is legal.
    pub heading: Option<Heading>,
    /// Consecutive cells travelled along `heading`.
    pub run: u8,
}

/// A parsed heat-loss grid.
#[derive(Debug, Clone)]
pub struct HeatMap {
    grid: Grid<u8>,
}

impl HeatMap {
    /// Parse from digit rows.
    ///
    /// # Errors
    ///
    /// [`ParseError`] on shape problems or non-digit cells.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (row, line) in input.trim().lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, cell) in line.chars().enumerate() {
                let Some(digit) = cell.to_digit(10) else {
                    return Err(ParseError::BadCell { row, col, cell });
                };
                #[allow(clippy::cast_possible_truncation)]
                cells.push(digit as u8);
            }
            rows.push(cells);
        }
        if rows.is_empty() || rows.iter().any(|row| row.len() != rows[0].len()) || rows[0].is_empty()
        {
            return Err(ParseError::BadShape);
        }
        Ok(Self {
            grid: Grid::from_rows(rows),
        })
    }

    /// The cart's start state at the top-left corner.
    #[must_use]
    pub fn start(&self) -> Cart {
        Cart {
            pos: Position { row: 0, col: 0 },
            heading: None,
            run: 0,
        }
    }

    /// View this map as a search space under `rule`, from the top-left
    /// corner to the bottom-right.
    #[must_use]
    pub fn route(&self, rule: RunRule) -> CrucibleRoute<'_> {
        let min_heat = self
            .grid
            .cells()
            .map(|(_, &heat)| Cost::from(heat))
            .min()
            .unwrap_or(0);
        CrucibleRoute {
            map: self,
            rule,
            goal: Position {
                row: self.grid.height() - 1,
                col: self.grid.width() - 1,
            },
            min_heat,
        }
    }
}

/// A [`HeatMap`] bound to a [`RunRule`] and a goal corner.
#[derive(Debug, Clone, Copy)]
pub struct CrucibleRoute<'a> {
    map: &'a HeatMap,
    rule: RunRule,
    goal: Position,
    /// Cheapest cell on the map; scales the distance estimate so it stays
    /// admissible even for maps with zero-cost cells.
    min_heat: Cost,
}

impl SearchSpace for CrucibleRoute<'_> {
    type State = Cart;
    type Key = Cart;

    fn canonical_key(&self, state: &Cart) -> Cart {
        *state
    }

    fn successors(&self, state: &Cart, out: &mut Vec<Step<Cart>>) {
        for heading in HEADINGS {
            let run = match state.heading {
                Some(current) if heading == current.reverse() => continue,
                Some(current) if heading == current => {
                    if state.run >= self.rule.max_run() {
                        continue;
                    }
                    state.run + 1
                }
                Some(_) if state.run < self.rule.min_run() => continue,
                Some(_) | None => 1,
            };
            let pos = state.pos.step(heading);
            let Some(&heat) = self.map.grid.get(pos) else {
                continue;
            };
            out.push(Step {
                state: Cart {
                    pos,
                    heading: Some(heading),
                    run,
                },
                cost: Cost::from(heat),
            });
        }
    }

    fn is_goal(&self, state: &Cart) -> bool {
        state.pos == self.goal && (state.heading.is_none() || state.run >= self.rule.min_run())
    }

    fn estimate(&self, state: &Cart) -> Cost {
        state.pos.manhattan(self.goal) * self.min_heat
    }
}
