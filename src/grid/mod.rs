//! Grid primitives.
//!
//! Everything below the search engine: cell coordinates and their label
//! codec, grid-size parsing, and the cell-state board the search walks.
//!
//! ## Module Structure
//!
//! - `cell`: Cell positions, cardinal directions, the A1..Z26 label codec
//! - `size`: ROWSxCOLS label parsing with the 1..=26 dimension bound
//! - `board`: Cell states and grid construction, visitation, predicates

pub mod board;
pub mod cell;
pub mod size;

// Re-export key types
pub use board::{CellState, Grid};
pub use cell::{format_cell, parse_cell, Cell, Direction};
pub use size::{parse_size, Size};
