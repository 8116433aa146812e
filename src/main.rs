//! Maze Engine Demo
//!
//! Builds the worked 8x8 corridor maze, solves it, and reports the
//! discovered paths. A second, open grid shows the ambiguous-exit
//! classification.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use maze_engine::{Maze, MazeError, VERSION};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Maze Engine v{}", VERSION);

    corridor_demo()?;
    ambiguous_demo()?;
    Ok(())
}

/// The 8x8 corridor maze: exactly one route from A1 to the exit row.
fn corridor_demo() -> Result<()> {
    let walls = [
        "C1", "G1", "A2", "C2", "E2", "G2", "C3", "E3", "B4", "C4", "E4", "F4",
        "G4", "B5", "E5", "B6", "D6", "E6", "G6", "H6", "B7", "D7", "G7", "B8",
    ];
    let mut maze = Maze::new(1, "A1", "8x8", &walls)?;
    maze.solve()?;

    info!(state = ?maze.state(), solutions = maze.solutions().len(), "8x8 corridor maze solved");

    let shortest = maze.shortest_path()?;
    info!("shortest path ({} cells): {}", shortest.len(), shortest);
    let longest = maze.longest_path()?;
    info!("longest path ({} cells): {}", longest.len(), longest);
    Ok(())
}

/// An open 4x4 grid reaches several distinct exit cells, which classifies
/// as too many solutions. That outcome is expected, not a failure.
fn ambiguous_demo() -> Result<()> {
    const NO_WALLS: [&str; 0] = [];
    let mut maze = Maze::new(2, "A1", "4x4", &NO_WALLS)?;

    match maze.solve() {
        Err(MazeError::ManySolutions) => {
            info!(
                solutions = maze.solutions().len(),
                state = ?maze.state(),
                "open 4x4 grid is ambiguous, as expected"
            );
        }
        outcome => warn!(?outcome, "unexpected outcome for the open grid"),
    }
    Ok(())
}
