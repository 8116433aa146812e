//! Cell States and Grid Construction
//!
//! The grid is the surface the search engine walks. Walls and the exit
//! boundary are laid down once at build time; Visited marks accumulate
//! while a solve is in flight. The grid is `Clone` so a solve can own a
//! private copy and leave the built grid untouched.

use serde::{Deserialize, Serialize};

use crate::grid::cell::Cell;
use crate::grid::size::Size;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Impassable cell.
    Wall,
    /// Passable cell not yet reached by any search branch.
    Free,
    /// Cell consumed by a search branch; permanently closed to every
    /// other branch.
    Visited,
    /// Exit boundary cell in the last row. Never downgraded to Visited.
    Exit,
}

/// Rectangular grid of cell states, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: Size,
    cells: Vec<CellState>,
}

impl Grid {
    /// Build a grid for the given size: every last-row cell starts as
    /// [`CellState::Exit`], every other cell as [`CellState::Free`], then
    /// walls overwrite whatever they land on. A wall in the last row
    /// removes that exit cell.
    ///
    /// Wall coordinates must lie inside the grid; construction-level
    /// validation in [`Maze::new`](crate::maze::Maze::new) guarantees this.
    pub fn build(size: Size, walls: &[Cell]) -> Self {
        debug_assert!(size.is_valid());
        let mut cells = vec![CellState::Free; size.cell_count()];
        let last_row = (size.rows - 1) * size.cols;
        for state in &mut cells[last_row..] {
            *state = CellState::Exit;
        }

        let mut grid = Self { size, cells };
        for wall in walls {
            let idx = grid.index(*wall);
            grid.cells[idx] = CellState::Wall;
        }
        grid
    }

    /// Grid dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// State of the given cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid; check
    /// [`is_inside`](Self::is_inside) first for unvalidated coordinates.
    pub fn state(&self, cell: Cell) -> CellState {
        self.cells[self.index(cell)]
    }

    /// Mark the cell Visited unless it is an exit cell.
    pub fn visit(&mut self, cell: Cell) {
        let idx = self.index(cell);
        if self.cells[idx] != CellState::Exit {
            self.cells[idx] = CellState::Visited;
        }
    }

    /// Whether the cell is an exit cell.
    pub fn is_exit(&self, cell: Cell) -> bool {
        self.state(cell) == CellState::Exit
    }

    /// Whether the cell lies inside the grid bounds.
    pub fn is_inside(&self, cell: Cell) -> bool {
        self.size.contains(cell)
    }

    /// Whether a search branch may step into the cell: inside the grid,
    /// not a wall, and not already visited by any branch.
    pub fn can_enter(&self, cell: Cell) -> bool {
        self.is_inside(cell)
            && !matches!(self.state(cell), CellState::Wall | CellState::Visited)
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size.cols + cell.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(labels: &[&str]) -> Vec<Cell> {
        labels
            .iter()
            .map(|l| crate::grid::cell::parse_cell(l).unwrap())
            .collect()
    }

    #[test]
    fn test_build_exit_row_and_free_interior() {
        let grid = Grid::build(Size::new(3, 4), &[]);
        for col in 0..4 {
            for row in 0..2 {
                assert_eq!(grid.state(Cell::new(row, col)), CellState::Free);
            }
            assert_eq!(grid.state(Cell::new(2, col)), CellState::Exit);
        }
    }

    #[test]
    fn test_build_walls_override_free_and_exit() {
        // B1 is an interior wall, B3 removes an exit cell.
        let grid = Grid::build(Size::new(3, 3), &cells(&["B1", "B3"]));
        assert_eq!(grid.state(Cell::new(0, 1)), CellState::Wall);
        assert_eq!(grid.state(Cell::new(2, 1)), CellState::Wall);
        assert_eq!(grid.state(Cell::new(2, 0)), CellState::Exit);
        assert_eq!(grid.state(Cell::new(2, 2)), CellState::Exit);
    }

    #[test]
    fn test_build_single_row_grid_is_all_exits() {
        let grid = Grid::build(Size::new(1, 3), &[]);
        for col in 0..3 {
            assert!(grid.is_exit(Cell::new(0, col)));
        }
    }

    #[test]
    fn test_visit_marks_free_cell() {
        let mut grid = Grid::build(Size::new(3, 3), &[]);
        grid.visit(Cell::new(0, 0));
        assert_eq!(grid.state(Cell::new(0, 0)), CellState::Visited);
    }

    #[test]
    fn test_visit_never_downgrades_exit() {
        let mut grid = Grid::build(Size::new(3, 3), &[]);
        grid.visit(Cell::new(2, 1));
        assert_eq!(grid.state(Cell::new(2, 1)), CellState::Exit);
    }

    #[test]
    fn test_is_inside() {
        let grid = Grid::build(Size::new(2, 5), &[]);
        assert!(grid.is_inside(Cell::new(1, 4)));
        assert!(!grid.is_inside(Cell::new(2, 0)));
        assert!(!grid.is_inside(Cell::new(0, 5)));
    }

    #[test]
    fn test_can_enter() {
        let mut grid = Grid::build(Size::new(3, 3), &cells(&["B2"]));
        assert!(grid.can_enter(Cell::new(0, 0)));
        assert!(grid.can_enter(Cell::new(2, 0)), "exit cells stay enterable");
        assert!(!grid.can_enter(Cell::new(1, 1)), "wall");
        assert!(!grid.can_enter(Cell::new(0, 3)), "outside");

        grid.visit(Cell::new(0, 0));
        assert!(!grid.can_enter(Cell::new(0, 0)), "visited");
    }
}
