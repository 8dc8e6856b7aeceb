//! Deterministic single-threaded exploration.

use std::time::Instant;

use tracing::debug;

use crate::core::Position;
use crate::engine::walker::{Outcome, Walker};
use crate::engine::ExplorationReport;
use crate::grid::Grid;
use crate::render::Render;

/// Explore the grid depth-first on the calling thread.
///
/// Every hand-off is refused, so all discovered branches stay on one
/// frontier and the visit order is exactly the move-direction policy.
/// Runs to `ExitReached` or frontier exhaustion; the maze being finite,
/// one of the two always happens.
pub fn explore(grid: &Grid, start: Position, renderer: &dyn Render) -> ExplorationReport {
    let started = Instant::now();
    let mut walker = Walker::new(grid, start);

    let outcome = loop {
        match walker.step(renderer, &mut |_| false) {
            Outcome::Pending => continue,
            done => break done,
        }
    };

    let found = outcome == Outcome::ExitReached;
    debug!(
        "Sequential walk finished after {} steps: {:?}",
        walker.steps(),
        outcome
    );

    ExplorationReport {
        found,
        steps: walker.steps(),
        cells_visited: grid.counts().visited,
        dead_ends: usize::from(!found),
        cancelled: 0,
        tasks_spawned: 0,
        elapsed: started.elapsed(),
    }
}
