//! A 2-dimensional grid, positions, and headings.
//!
//! Coordinates are signed so that movement math around the edges never
//! underflows; out-of-bounds lookups return `None` instead.

use itertools::Itertools;

/// A position in a 2-dimensional grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing down.
    pub row: i32,
    /// Column index, growing right.
    pub col: i32,
}

impl Position {
    /// The position one step along `heading`.
    #[must_use]
    pub fn step(self, heading: Heading) -> Self {
        let (dr, dc) = heading.delta();
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Taxicab distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Position) -> i64 {
        i64::from((self.row - other.row).abs()) + i64::from((self.col - other.col).abs())
    }
}

/// One of the four orthogonal movement directions.
///
/// A closed enumeration: every dispatch over headings is an exhaustive
/// match the compiler checks, rather than a lookup in a name-keyed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// All four headings, in a fixed enumeration order.
pub const HEADINGS: [Heading; 4] = [
    Heading::North,
    Heading::East,
    Heading::South,
    Heading::West,
];

impl Heading {
    /// Row/column increments for one step. The origin is at the top left
    /// and row indices grow down.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    /// The opposite heading.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }
}

impl From<Heading> for char {
    fn from(value: Heading) -> Self {
        match value {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

/// A rectangular grid of cells backed by one flat allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: i32,
    width: i32,
    raw: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested row vectors.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or ragged; parsers validate shape
    /// before constructing.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        assert!(!rows.is_empty(), "grid needs at least one row");
        let width = rows[0].len();
        assert!(width > 0, "grid needs at least one column");

        let mut raw = Vec::with_capacity(rows.len() * width);
        for row in &rows {
            assert_eq!(row.len(), width, "all grid rows must have equal width");
        }
        let height = i32::try_from(rows.len()).expect("grid height fits in i32");
        let width = i32::try_from(width).expect("grid width fits in i32");
        for row in rows {
            raw.extend(row);
        }

        Self { height, width, raw }
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.height).contains(&pos.row) && (0..self.width).contains(&pos.col)
    }

    /// The cell at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.raw.get(self.index(pos)?)
    }

    /// Mutable cell access, or `None` if out of bounds.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        let index = self.index(pos)?;
        self.raw.get_mut(index)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &T)> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(move |(row, col)| {
                let pos = Position { row, col };
                (pos, self.get(pos).expect("cartesian product stays in bounds"))
            })
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        // In bounds, so every coordinate is non-negative.
        #[allow(clippy::cast_sign_loss)]
        let (row, col, width) = (pos.row as usize, pos.col as usize, self.width as usize);
        Some(row * width + col)
    }
}
