//! Cells and the Coordinate Codec
//!
//! Converts between human-readable cell labels (column letter followed by
//! row number, e.g. `A1`, `H8`) and zero-based (row, col) indices. Columns
//! are a single letter A..Z and rows run 1..=26, matching the grid-size
//! bound; multi-letter columns are not part of the validated format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::MAX_DIMENSION;

/// A cell position in the grid, zero-based. Row 0 is the top row and
/// column 0 is column A. Equality is structural.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = column A)
    pub col: usize,
}

/// The four cardinal moves, in the search engine's traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row, where the exits are.
    Down,
    /// Toward column A.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// Branch order at every cell: Up before Down before Left before Right.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl Cell {
    /// Create a cell from zero-based row and column indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbor one step in the given direction, or `None` when the step
    /// would leave the coordinate space on the low side. The high-side
    /// bound depends on the grid and is checked by
    /// [`Grid::is_inside`](crate::grid::board::Grid::is_inside).
    pub fn neighbor(self, direction: Direction) -> Option<Cell> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Cell::new(row, self.col)),
            Direction::Down => Some(Cell::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Cell::new(self.row, col)),
            Direction::Right => Some(Cell::new(self.row, self.col + 1)),
        }
    }

    /// Render as a coordinate label.
    pub fn label(self) -> String {
        format_cell(self)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_cell(*self))
    }
}

/// Parse a cell label such as `A1` or `H8` into a [`Cell`].
///
/// The label splits into a leading letter segment (the column) and a
/// trailing digit segment (the one-based row).
///
/// # Errors
///
/// - [`MazeError::InvalidCell`] when neither segment can be located.
/// - [`MazeError::InvalidColumnName`] when the letter segment is missing
///   or is not a single letter A..Z.
/// - [`MazeError::InvalidRow`] when the digit segment is missing, is not
///   a number, or falls outside 1..=26.
pub fn parse_cell(label: &str) -> Result<Cell, MazeError> {
    let split = label
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(label.len());
    let (letters, digits) = label.split_at(split);

    if letters.is_empty() && digits.is_empty() {
        return Err(MazeError::InvalidCell);
    }

    let col = parse_column(letters)?;
    let row: usize = digits.parse().map_err(|_| MazeError::InvalidRow)?;
    if !(1..=MAX_DIMENSION).contains(&row) {
        return Err(MazeError::InvalidRow);
    }

    Ok(Cell::new(row - 1, col))
}

/// Format a cell as its coordinate label, the inverse of [`parse_cell`].
pub fn format_cell(cell: Cell) -> String {
    debug_assert!(cell.col < MAX_DIMENSION && cell.row < MAX_DIMENSION);
    let column = (b'A' + cell.col as u8) as char;
    format!("{}{}", column, cell.row + 1)
}

/// Convert a single-letter column name to its zero-based index (A -> 0,
/// Z -> 25).
fn parse_column(letters: &str) -> Result<usize, MazeError> {
    let mut chars = letters.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => {
            Ok(letter as usize - 'A' as usize)
        }
        _ => Err(MazeError::InvalidColumnName),
    }
}
