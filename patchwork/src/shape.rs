use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The outline of a patch, stored as a row-major grid of occupied cells.
///
/// A shape is immutable once constructed; [`Self::rotate_clockwise()`] and
/// [`Self::flip_horizontal()`] build new shapes instead of mutating in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Creates a shape from its dimensions and a row-major cell grid.
    ///
    /// Panics if either dimension is zero or the grid has the wrong length.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Self {
        assert!(width >= 1 && height >= 1, "shape dimensions must be >= 1");
        assert_eq!(cells.len(), width * height, "shape grid has the wrong length");
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(x, y)` is occupied. Out-of-bounds cells are empty.
    pub fn tile_at(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// The number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// A new shape, rotated 90° clockwise.
    ///
    /// The original cell `(x, y)` lands at `(height - 1 - y, x)`. Rotating four
    /// times reproduces the original cell pattern.
    pub fn rotate_clockwise(&self) -> Shape {
        let (width, height) = (self.height, self.width);
        let mut cells = vec![false; width * height];
        for y in 0..height {
            for x in 0..width {
                cells[y * width + x] = self.tile_at(y, self.height - 1 - x);
            }
        }
        Shape {
            width,
            height,
            cells,
        }
    }

    /// A new shape, mirrored along the vertical axis.
    pub fn flip_horizontal(&self) -> Shape {
        let mut cells = vec![false; self.width * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                cells[y * self.width + x] = self.tile_at(self.width - 1 - x, y);
            }
        }
        Shape {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                write!(f, "{}", if self.tile_at(x, y) { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

/// The error type for the [`FromStr`] instance of [`Shape`].
#[derive(Clone, Copy, Debug)]
pub enum ShapeFromStrErr {
    Empty,
    RaggedRows,
}

impl std::error::Error for ShapeFromStrErr {}

impl std::fmt::Display for ShapeFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeFromStrErr::Empty => write!(f, "Shape text contains no rows"),
            ShapeFromStrErr::RaggedRows => {
                write!(f, "Shape text has rows of different lengths")
            }
        }
    }
}

impl FromStr for Shape {
    type Err = ShapeFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        let height = rows.len();
        if height == 0 {
            return Err(ShapeFromStrErr::Empty);
        }
        let width = rows[0].chars().count();
        if width == 0 {
            return Err(ShapeFromStrErr::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return Err(ShapeFromStrErr::RaggedRows);
            }
            cells.extend(row.chars().map(|c| c == '#'));
        }
        Ok(Shape {
            width,
            height,
            cells,
        })
    }
}

/// Shorthand for creating shapes from their text form.
///
/// Rows are separated by newlines; `#` marks an occupied cell, any other
/// character an empty one.
///
/// This macro is just calling the [`FromStr`] instance of [`Shape`].
/// ```
/// # use patchwork::{shape, Shape};
/// let corner = shape!("#.\n##");
/// assert_eq!(corner.cell_count(), 3);
/// ```
#[macro_export]
macro_rules! shape {
    ($s:literal) => {
        <$crate::Shape as std::str::FromStr>::from_str($s)
            .expect("Invalid shape text given to shape! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use shape;
