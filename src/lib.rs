//! # Maze Engine
//!
//! Grid-based path-search engine: given a rectangular cell grid with walls,
//! a fixed entrance, and an exit boundary along the last row, it finds every
//! reachable exit, classifies the grid's solvability, and extracts the
//! shortest and longest discovered solution.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       MAZE ENGINE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  grid/           - Grid primitives                           │
//! │  ├── cell.rs     - Cells and the coordinate codec (A1..Z26)  │
//! │  ├── size.rs     - ROWSxCOLS label parsing and bounds        │
//! │  └── board.rs    - Cell-state grid (walls, exits, visits)    │
//! │                                                              │
//! │  maze/           - Orchestration and search                  │
//! │  ├── path.rs     - Ordered cell sequences, label rendering   │
//! │  ├── search.rs   - Exhaustive global-visitation traversal    │
//! │  └── mod.rs      - Maze, solvability state machine           │
//! │                                                              │
//! │  error.rs        - MazeError                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! A solve is single-threaded, synchronous, and allocation-bounded: grids
//! are at most 26x26 cells and every cell is consumed at most once by the
//! search. Two mazes built from identical inputs produce identical solution
//! sets and identical classification.
//!
//! Transport, persistence formats, and authentication are owned by external
//! collaborators; this crate validates label-form inputs at its boundary and
//! exposes fully serializable types for whoever stores or renders them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod grid;
pub mod maze;

// Re-export commonly used types
pub use error::MazeError;
pub use grid::board::{CellState, Grid};
pub use grid::cell::{format_cell, parse_cell, Cell, Direction};
pub use grid::size::{parse_size, Size};
pub use maze::path::Path;
pub use maze::{Maze, MazeState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest supported row or column count, bounded by the single-letter
/// column encoding (A..Z).
pub const MAX_DIMENSION: usize = 26;
