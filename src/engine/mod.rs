//! Exploration engines.
//!
//! Both variants drive the same step protocol:
//! - [`sequential`]: single thread, refuses every hand-off, fully
//!   deterministic trace
//! - [`parallel`]: hands sibling branches to scoped fire-and-forget
//!   tasks coordinated by a set-once exit signal
//!
//! Supporting pieces: [`Frontier`] (LIFO candidate stack), [`Walker`]
//! (the step protocol), [`ExitSignal`] and [`TaskBudget`] (cross-task
//! coordination).

pub mod parallel;
pub mod sequential;

mod frontier;
mod shared;
mod walker;

pub use frontier::Frontier;
pub use shared::{ExitSignal, TaskBudget};
pub use walker::{Outcome, Walker};

use std::time::Duration;

/// Aggregated result of one engine run.
#[derive(Clone, Debug)]
pub struct ExplorationReport {
    /// Did any exploration unit reach the exit?
    pub found: bool,
    /// Claimed steps summed across all exploration units
    pub steps: usize,
    /// Cells marked visited during the run
    pub cells_visited: usize,
    /// Units that exhausted their frontier
    pub dead_ends: usize,
    /// Units stopped early by the exit signal
    pub cancelled: usize,
    /// Tasks spawned beyond the initial unit (always 0 for sequential)
    pub tasks_spawned: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}
