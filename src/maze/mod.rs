//! Maze Orchestration and Solvability Classification
//!
//! A [`Maze`] is built once from validated label-form inputs, solved at
//! most once, and thereafter answers path queries from its recorded
//! solutions.
//!
//! ## Module Structure
//!
//! - `path`: Ordered cell sequences with label rendering
//! - `search`: The exhaustive global-visitation traversal
//!
//! ## State Machine
//!
//! ```text
//!              ┌──> NoSolutions       (zero recorded solutions)
//! NotSolved ───┼──> TooManySolutions  (solutions reach >1 distinct exit)
//!              └──> Solved            (every solution shares one exit)
//! ```
//!
//! All three right-hand states are terminal: repeated [`Maze::solve`]
//! calls report the same outcome without searching again.

pub mod path;

mod search;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::MazeError;
use crate::grid::board::Grid;
use crate::grid::cell::{parse_cell, Cell};
use crate::grid::size::{parse_size, Size};
use path::Path;

/// Solvability classification of a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MazeState {
    /// No search has run yet.
    NotSolved,
    /// The search found no path to an exit cell.
    NoSolutions,
    /// Discovered solutions reach more than one distinct exit cell.
    TooManySolutions,
    /// Every discovered solution shares one exit cell.
    Solved,
}

/// A maze: entrance, dimensions, walls, the built grid, and the outcome
/// of solving it.
///
/// Construction validates every label-form input; a `Maze` therefore
/// always holds a well-formed grid. [`solve`](Self::solve) runs the search
/// engine on a private grid copy, so the built grid is never mutated and
/// two mazes built from identical inputs stay identical after solving.
///
/// All fields round-trip through serde so a persistence collaborator can
/// store and reload a maze in any state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    id: u64,
    entrance: Cell,
    size: Size,
    walls: Vec<Cell>,
    grid: Grid,
    state: MazeState,
    solutions: Vec<Path>,
}

impl Maze {
    /// Construct a maze from label-form inputs: an entrance cell label,
    /// a `ROWSxCOLS` size label, and a list of wall cell labels.
    ///
    /// # Errors
    ///
    /// Propagates the codec and size-parser errors for malformed labels.
    /// An entrance or wall that parses but lies outside the grid fails
    /// with [`MazeError::InvalidCell`].
    pub fn new(
        id: u64,
        entrance: &str,
        size: &str,
        walls: &[impl AsRef<str>],
    ) -> Result<Self, MazeError> {
        let entrance = parse_cell(entrance).map_err(|err| {
            warn!(%err, "could not parse entrance");
            err
        })?;
        let size = parse_size(size).map_err(|err| {
            warn!(%err, "could not parse grid size");
            err
        })?;
        let walls = parse_walls(walls)?;

        if !size.contains(entrance) {
            warn!(entrance = %entrance, grid = %size, "entrance lies outside the grid");
            return Err(MazeError::InvalidCell);
        }
        if let Some(wall) = walls.iter().find(|wall| !size.contains(**wall)) {
            warn!(wall = %wall, grid = %size, "wall lies outside the grid");
            return Err(MazeError::InvalidCell);
        }

        let grid = Grid::build(size, &walls);
        Ok(Self {
            id,
            entrance,
            size,
            walls,
            grid,
            state: MazeState::NotSolved,
            solutions: Vec::new(),
        })
    }

    /// Run the search once and classify the outcome.
    ///
    /// On the first call the search engine walks a private copy of the
    /// grid from the entrance and the discovered solutions are recorded;
    /// the resulting state is terminal and later calls only report it.
    ///
    /// # Errors
    ///
    /// [`MazeError::NoSolution`] when no exit is reachable,
    /// [`MazeError::ManySolutions`] when solutions reach more than one
    /// distinct exit cell. Both leave the maze fully updated; they are
    /// expected outcomes, not defects.
    pub fn solve(&mut self) -> Result<(), MazeError> {
        if self.state == MazeState::NotSolved {
            self.solutions = search::find_solutions(self.grid.clone(), self.entrance);
            self.state = self.classify();
            debug!(
                id = self.id,
                solutions = self.solutions.len(),
                state = ?self.state,
                "maze search finished"
            );
        }

        match self.state {
            MazeState::NoSolutions => Err(MazeError::NoSolution),
            MazeState::TooManySolutions => Err(MazeError::ManySolutions),
            _ => Ok(()),
        }
    }

    /// Shortest recorded solution, solving first when needed. Ties go to
    /// the earliest-discovered path of that length.
    ///
    /// # Errors
    ///
    /// Propagates the classification outcome when the maze has no
    /// solutions or ambiguous exits.
    pub fn shortest_path(&mut self) -> Result<Path, MazeError> {
        self.extremal_path(|best, candidate| candidate.len() < best.len())
    }

    /// Longest recorded solution, solving first when needed. Ties go to
    /// the earliest-discovered path of that length.
    ///
    /// # Errors
    ///
    /// Propagates the classification outcome when the maze has no
    /// solutions or ambiguous exits.
    pub fn longest_path(&mut self) -> Result<Path, MazeError> {
        self.extremal_path(|best, candidate| candidate.len() > best.len())
    }

    /// Maze identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The fixed starting cell.
    pub fn entrance(&self) -> Cell {
        self.entrance
    }

    /// Grid dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Wall coordinates as supplied at construction.
    pub fn walls(&self) -> &[Cell] {
        &self.walls
    }

    /// The built grid. Never carries visitation marks; solves run on a
    /// private copy.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current solvability classification.
    pub fn state(&self) -> MazeState {
        self.state
    }

    /// Solutions recorded by the search, in discovery order. Empty until
    /// the maze is solved.
    pub fn solutions(&self) -> &[Path] {
        &self.solutions
    }

    /// Classify the recorded solutions. Multiple solutions sharing one
    /// exit cell are a single logical outcome; only distinct exits make
    /// the maze ambiguous.
    fn classify(&self) -> MazeState {
        let mut exits = self.solutions.iter().filter_map(Path::exit_cell);
        match exits.next() {
            None => MazeState::NoSolutions,
            Some(first) if exits.any(|exit| exit != first) => MazeState::TooManySolutions,
            Some(_) => MazeState::Solved,
        }
    }

    fn extremal_path(
        &mut self,
        replaces: fn(best: &Path, candidate: &Path) -> bool,
    ) -> Result<Path, MazeError> {
        if self.state == MazeState::NotSolved {
            // The classification outcome is reported from the state below.
            let _ = self.solve();
        }

        match self.state {
            MazeState::NoSolutions => return Err(MazeError::NoSolution),
            MazeState::TooManySolutions => return Err(MazeError::ManySolutions),
            _ => {}
        }

        let mut picked = self
            .solutions
            .first()
            .cloned()
            .ok_or(MazeError::NoSolution)?;
        for candidate in &self.solutions[1..] {
            if replaces(&picked, candidate) {
                picked = candidate.clone();
            }
        }
        Ok(picked)
    }
}

/// Parse a list of wall cell labels, failing on the first malformed label.
fn parse_walls(labels: &[impl AsRef<str>]) -> Result<Vec<Cell>, MazeError> {
    labels
        .iter()
        .map(|label| {
            parse_cell(label.as_ref()).map_err(|err| {
                warn!(label = label.as_ref(), %err, "could not parse wall cell");
                err
            })
        })
        .collect()
}
