//! Grid Size Parsing
//!
//! A grid size arrives as a `ROWSxCOLS` label. Both dimensions are bounded
//! to 1..=26 because cell labels encode the column as a single letter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::grid::cell::Cell;
use crate::MAX_DIMENSION;

/// Grid dimensions in rows and columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Size {
    /// Create a size from row and column counts.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether both dimensions fall within 1..=26.
    pub fn is_valid(&self) -> bool {
        (1..=MAX_DIMENSION).contains(&self.rows) && (1..=MAX_DIMENSION).contains(&self.cols)
    }

    /// Total number of cells in a grid of this size.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the cell lies within these dimensions.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Parse a `ROWSxCOLS` label such as `8x8` into a [`Size`].
///
/// The label must split on `x` into exactly two parts, each a positive
/// integer within 1..=26. Anything else fails with
/// [`MazeError::InvalidGridSize`].
pub fn parse_size(text: &str) -> Result<Size, MazeError> {
    let (rows, cols) = text.split_once('x').ok_or(MazeError::InvalidGridSize)?;
    let rows: usize = rows.parse().map_err(|_| MazeError::InvalidGridSize)?;
    let cols: usize = cols.parse().map_err(|_| MazeError::InvalidGridSize)?;

    let size = Size::new(rows, cols);
    if !size.is_valid() {
        return Err(MazeError::InvalidGridSize);
    }
    Ok(size)
}
