//! Solution Paths
//!
//! A path is the ordered cell sequence one search branch walked from the
//! entrance to an exit cell. The presentation collaborator renders paths
//! through the coordinate codec, so the label forms live here too.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::cell::{format_cell, Cell};

/// Ordered sequence of cells from the entrance to an exit cell.
///
/// Consecutive cells differ by exactly one cardinal step; the final cell
/// is the exit the branch reached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Create a path from its cells in walk order.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The final cell of the path: the exit it reached. `None` only for
    /// an empty path, which the search never produces.
    pub fn exit_cell(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path contains no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in walk order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every cell rendered as a coordinate label, in walk order.
    pub fn labels(&self) -> Vec<String> {
        self.cells.iter().map(|cell| format_cell(*cell)).collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.labels().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path {
        Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)])
    }

    #[test]
    fn test_exit_cell_is_last() {
        assert_eq!(sample().exit_cell(), Some(Cell::new(1, 1)));
        assert_eq!(Path::default().exit_cell(), None);
    }

    #[test]
    fn test_labels_in_walk_order() {
        assert_eq!(sample().labels(), vec!["A1", "B1", "B2"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "[A1, B1, B2]");
    }
}
