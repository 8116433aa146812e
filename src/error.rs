//! Maze Error Types
//!
//! One enum covers both construction-time parsing failures and solve-time
//! classification outcomes. Parsing failures are fatal to maze creation;
//! the classification kinds accompany a fully updated maze and callers may
//! still persist a maze in a non-solved state.

use thiserror::Error;

/// Errors produced by maze construction and solving.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Label has neither a column segment nor a row segment.
    #[error("invalid cell")]
    InvalidCell,
    /// Column segment is missing or is not a single letter A..Z.
    #[error("invalid column name")]
    InvalidColumnName,
    /// Row segment is missing, non-numeric, or outside 1..=26.
    #[error("invalid row number")]
    InvalidRow,
    /// Size label is malformed or a dimension is outside 1..=26.
    #[error("invalid grid size")]
    InvalidGridSize,
    /// No path from the entrance reaches an exit cell.
    #[error("maze does not have a solution")]
    NoSolution,
    /// Discovered solutions reach more than one distinct exit cell.
    #[error("maze has more than one solution")]
    ManySolutions,
}
