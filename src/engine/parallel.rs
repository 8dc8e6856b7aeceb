//! Concurrent exploration with scoped fire-and-forget tasks.
//!
//! Sibling branches discovered during a step are handed to independently
//! scheduled tasks sharing one atomic grid. Parents never wait on their
//! children; the set-once [`ExitSignal`] aggregates success, every unit
//! reports its final outcome on a completion channel, and the enclosing
//! thread scope is the join barrier that makes the answer definite.

use std::thread;
use std::time::Instant;

use crossbeam_channel::{unbounded, Sender};
use tracing::{debug, warn};

use crate::core::Position;
use crate::engine::shared::{ExitSignal, TaskBudget};
use crate::engine::walker::{Outcome, Walker};
use crate::engine::ExplorationReport;
use crate::grid::Grid;
use crate::render::Render;

/// Shared references every unit carries, plus its completion sender.
#[derive(Clone)]
struct TaskContext<'env> {
    grid: &'env Grid,
    renderer: &'env dyn Render,
    signal: &'env ExitSignal,
    budget: &'env TaskBudget,
    outcomes: Sender<UnitReport>,
}

/// Sent by each unit on the completion channel before it exits.
struct UnitReport {
    outcome: Outcome,
    steps: usize,
}

/// Explore the grid with fire-and-forget tasks inside one thread scope.
///
/// When the scope closes every unit has finished, so the signal read
/// afterwards is the definite answer and no unit's result can be lost.
/// `max_tasks` caps tasks spawned beyond the initial unit; zero makes
/// the run effectively sequential.
pub fn explore(
    grid: &Grid,
    start: Position,
    renderer: &dyn Render,
    max_tasks: usize,
) -> ExplorationReport {
    let started = Instant::now();
    let signal = ExitSignal::new();
    let budget = TaskBudget::new(max_tasks);
    let (outcomes, completions) = unbounded();

    thread::scope(|scope| {
        let root = TaskContext {
            grid,
            renderer,
            signal: &signal,
            budget: &budget,
            outcomes,
        };
        run_unit(scope, root, start);
    });

    // Scope closed: every sender is dropped and every report buffered.
    let mut units: usize = 0;
    let mut steps: usize = 0;
    let mut dead_ends: usize = 0;
    let mut cancelled: usize = 0;
    for unit in completions.try_iter() {
        units += 1;
        steps += unit.steps;
        match unit.outcome {
            Outcome::ExitReached => {}
            Outcome::DeadEnd => dead_ends += 1,
            Outcome::Pending => cancelled += 1,
        }
    }

    let found = signal.is_set();
    debug!(
        "Parallel run finished: {} units, {} dead ends, {} cancelled",
        units, dead_ends, cancelled
    );

    ExplorationReport {
        found,
        steps,
        cells_visited: grid.counts().visited,
        dead_ends,
        cancelled,
        tasks_spawned: units.saturating_sub(1),
        elapsed: started.elapsed(),
    }
}

/// Drive one walker to its final outcome, then report it.
///
/// The signal is consulted before every step, so a unit does at most one
/// redundant step after the exit is found, and it announces its own
/// outcome whether it concluded or was cancelled.
fn run_unit<'scope, 'env>(
    scope: &'scope thread::Scope<'scope, 'env>,
    ctx: TaskContext<'env>,
    start: Position,
) {
    let mut walker = Walker::new(ctx.grid, start);

    let outcome = loop {
        if ctx.signal.is_set() {
            break Outcome::Pending;
        }
        match walker.step(ctx.renderer, &mut |branch| try_spawn(scope, &ctx, branch)) {
            Outcome::Pending => continue,
            done => break done,
        }
    };

    if outcome == Outcome::ExitReached && ctx.signal.set() {
        debug!(
            "Exit reached at ({}, {}) after {} steps",
            walker.position().row,
            walker.position().col,
            walker.steps()
        );
    }

    let _ = ctx.outcomes.send(UnitReport {
        outcome,
        steps: walker.steps(),
    });
}

/// Try to move a discovered branch onto its own task.
///
/// Refuses once the signal is set or the budget is exhausted; the caller
/// then keeps the branch on its local frontier. The join handle is
/// dropped deliberately: units are unsupervised, and the scope still
/// joins them all at the end.
fn try_spawn<'scope, 'env>(
    scope: &'scope thread::Scope<'scope, 'env>,
    ctx: &TaskContext<'env>,
    branch: Position,
) -> bool {
    if ctx.signal.is_set() {
        return false;
    }
    let Some(ordinal) = ctx.budget.try_reserve() else {
        return false;
    };

    let child = ctx.clone();
    let budget = ctx.budget;
    let spawned = thread::Builder::new()
        .name(format!("explore-{ordinal}"))
        .spawn_scoped(scope, move || {
            run_unit(scope, child, branch);
            budget.release();
        });

    match spawned {
        Ok(_) => true,
        Err(err) => {
            budget.release();
            warn!("Failed to spawn exploration task: {}", err);
            false
        }
    }
}
