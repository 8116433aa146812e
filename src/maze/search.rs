//! Exhaustive Maze Traversal
//!
//! Depth-first search with global visitation: a cell consumed by one branch
//! is permanently closed to every other branch, so the walk explores a
//! depth-first spanning forest rooted at the entrance rather than every
//! simple path through the grid. Each of the at most 676 cells is entered
//! once, which bounds the whole search.

use tracing::trace;

use crate::grid::board::{CellState, Grid};
use crate::grid::cell::{Cell, Direction};
use crate::maze::path::Path;

/// Walk the grid from `entrance` and collect every path that reaches an
/// exit cell.
///
/// Takes the grid by value: the caller hands over a private copy and the
/// visitation marks stay local to this one search.
///
/// The traversal is the iterative equivalent of a recursive walk that
/// tries Up, Down, Left, Right at every cell. Frames are pushed in reverse
/// so Up unwinds first, and a frame whose cell was claimed by an earlier
/// branch in the meantime is dropped when popped, which reproduces the
/// recursive visitation order exactly. Reaching an exit cell records the
/// accumulated path and ends that branch; exit cells are never marked
/// visited, so they never block a later branch.
pub(crate) fn find_solutions(mut grid: Grid, entrance: Cell) -> Vec<Path> {
    let mut solutions = Vec::new();
    let mut stack: Vec<(Cell, Vec<Cell>)> = vec![(entrance, vec![entrance])];

    while let Some((cell, trail)) = stack.pop() {
        if grid.state(cell) == CellState::Visited {
            continue;
        }
        if grid.is_exit(cell) {
            trace!(exit = %cell, steps = trail.len(), "branch reached an exit");
            solutions.push(Path::new(trail));
            continue;
        }
        grid.visit(cell);

        for direction in Direction::ALL.iter().rev() {
            let Some(next) = cell.neighbor(*direction) else {
                continue;
            };
            if grid.can_enter(next) {
                let mut extended = trail.clone();
                extended.push(next);
                stack.push((next, extended));
            }
        }
    }

    solutions
}
