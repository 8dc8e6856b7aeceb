//! End-to-end exploration tests covering both engine variants.
//!
//! The sequential engine is checked against an exact visit trace; the
//! concurrent engine is checked against schedule-independent properties
//! (exactly-once claiming, agreement on solvability, step accounting)
//! plus one choreographed interleaving that pins the cancellation
//! behavior of the exit signal.

use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use bhulbhulaiya::core::{CellKind, Position};
use bhulbhulaiya::engine::{parallel, sequential};
use bhulbhulaiya::grid::Grid;
use bhulbhulaiya::io::loader;
use bhulbhulaiya::render::{Render, SilentRenderer};

/// Renderer that records the order in which cells were claimed.
#[derive(Default)]
struct RecordingRenderer {
    visits: Mutex<Vec<Position>>,
}

impl RecordingRenderer {
    fn visits(&self) -> Vec<Position> {
        self.visits.lock().clone()
    }
}

impl Render for RecordingRenderer {
    fn frame(&self, _grid: &Grid, current: Position) {
        self.visits.lock().push(current);
    }
}

/// Renderer that forces one specific interleaving: the trunk walk
/// pauses until the handed-off branch has claimed its entry cell, and
/// the branch pauses mid-step until the trunk has claimed its last
/// corridor cell, so the exit signal is raised while the branch still
/// has work queued.
struct RendezvousRenderer {
    /// Trunk cell held until `branch_entry` is claimed
    trunk_hold: Position,
    /// First cell of the handed-off branch
    branch_entry: Position,
    /// Last corridor cell the trunk claims before the exit
    trunk_last: Position,
}

impl Render for RendezvousRenderer {
    fn frame(&self, grid: &Grid, current: Position) {
        if current == self.trunk_hold {
            while grid.kind_at(self.branch_entry) != CellKind::Visited {
                thread::yield_now();
            }
        } else if current == self.branch_entry {
            while grid.kind_at(self.trunk_last) != CellKind::Visited {
                thread::yield_now();
            }
            // Let the trunk pop the exit cell and raise the signal first
            thread::sleep(Duration::from_millis(100));
        }
    }
}

fn parse(text: &str) -> (Grid, Position) {
    loader::parse(text).expect("test maze should parse")
}

/// Start in one corner, exit in the opposite one, no walls in between.
const TRACE_MAZE: &str = "3 3\ne x x\nx x x\nx x s\n";

/// Exit walled off behind the lower-right block; 14 claimable cells.
const SEALED_MAZE: &str = "5 5\n\
                           e x x x #\n\
                           x x x x #\n\
                           x x # # #\n\
                           x x # s #\n\
                           x x # # #\n";

/// Two corridors loop around a central island to the same exit.
const RING_MAZE: &str = "5 5\n\
                         e x x x x\n\
                         x # # # x\n\
                         x # s # x\n\
                         x # x # x\n\
                         x x x x x\n";

/// Open square with the start in a corner and the exit at the center,
/// optionally sealed behind four walls.
fn open_field(size: usize, sealed_exit: bool) -> String {
    let mid = size / 2;
    let mut text = format!("{} {}\n", size, size);
    for row in 0..size {
        for col in 0..size {
            let around_exit = (row.abs_diff(mid) == 1 && col == mid)
                || (row == mid && col.abs_diff(mid) == 1);
            let c = if row == 0 && col == 0 {
                'e'
            } else if row == mid && col == mid {
                's'
            } else if sealed_exit && around_exit {
                '#'
            } else {
                'x'
            };
            text.push(c);
            text.push(' ');
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_sequential_trace_prefers_down_then_left() {
    let (grid, start) = parse(TRACE_MAZE);
    let renderer = RecordingRenderer::default();
    let report = sequential::explore(&grid, start, &renderer);

    assert!(report.found, "a path to the exit exists");
    assert_eq!(report.steps, 4);
    // Straight down the left edge, then right along the bottom row; the
    // exit cell itself is reported as found, never rendered as visited.
    assert_eq!(
        renderer.visits(),
        vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(2, 1),
        ]
    );
}

#[test]
fn test_sequential_consumes_every_reachable_cell_when_no_exit() {
    let (grid, start) = parse(SEALED_MAZE);
    let report = sequential::explore(&grid, start, &SilentRenderer);

    assert!(!report.found);
    assert_eq!(report.steps, 14);
    assert_eq!(report.dead_ends, 1);

    let counts = grid.counts();
    assert_eq!(counts.open, 0, "every reachable open cell was visited");
    assert_eq!(counts.visited, 14);
    assert_eq!(counts.exit, 1, "the sealed exit stays untouched");
}

#[test]
fn test_parallel_finds_exit_on_branching_mazes() {
    for text in [TRACE_MAZE, RING_MAZE] {
        let (grid, start) = parse(text);
        let report = parallel::explore(&grid, start, &SilentRenderer, 8);
        assert!(report.found, "no exit reported on {:?}", text);
        assert_eq!(report.steps, report.cells_visited);
    }
}

#[test]
fn test_parallel_claims_each_cell_exactly_once_when_no_exit() {
    // On an unsolvable maze every task runs to exhaustion, so the step
    // total must equal the claimable cell count on every schedule. A
    // double claim would inflate it.
    let (grid, start) = parse(SEALED_MAZE);
    let report = parallel::explore(&grid, start, &SilentRenderer, 8);

    assert!(!report.found);
    assert_eq!(report.steps, 14);
    assert_eq!(report.cells_visited, 14);
    assert_eq!(report.cancelled, 0, "nothing cancels without an exit");
    assert_eq!(grid.counts().open, 0);
}

#[test]
fn test_parallel_exactly_once_under_contention() {
    // A wide open field spawns siblings racing for the same neighbors.
    let text = open_field(17, true);
    let claimable = 17 * 17 - 5; // four walls and the exit

    for _ in 0..5 {
        let (grid, start) = parse(&text);
        let report = parallel::explore(&grid, start, &SilentRenderer, 16);

        assert!(!report.found);
        assert_eq!(report.steps, claimable);
        assert_eq!(report.cells_visited, claimable);
        assert_eq!(grid.counts().open, 0);
    }
}

#[test]
fn test_parallel_never_overcounts_when_cancelling() {
    // With a reachable exit most tasks are cancelled mid-walk. Step and
    // visit counters must still agree, and never exceed the claimable
    // cell count.
    let text = open_field(17, false);
    let claimable = 17 * 17 - 1; // everything but the exit

    for _ in 0..5 {
        let (grid, start) = parse(&text);
        let report = parallel::explore(&grid, start, &SilentRenderer, 16);

        assert!(report.found);
        assert_eq!(report.steps, report.cells_visited);
        assert!(report.steps <= claimable, "claimed {} cells", report.steps);
    }
}

#[test]
fn test_signal_stops_running_branches_and_further_spawns() {
    // Trunk route: from the start cell leftward along the top row, then
    // down the first column to the exit. The branch handed off at the
    // start cell leads to a junction with two unexplored arms; the
    // rendezvous renderer makes the trunk reach the exit while the
    // branch is mid-step at that junction, so the branch's hand-off
    // attempt and its next loop iteration both run with the signal set.
    let text = "3 7\n\
                x x x x e x x\n\
                x # # # # x #\n\
                s # # # # x #\n";
    let (grid, start) = parse(text);
    let renderer = RendezvousRenderer {
        trunk_hold: Position::new(0, 3),
        branch_entry: Position::new(0, 5),
        trunk_last: Position::new(1, 0),
    };
    let report = parallel::explore(&grid, start, &renderer, 4);

    assert!(report.found);
    assert_eq!(report.tasks_spawned, 1, "the junction hand-off was refused");
    assert_eq!(report.cancelled, 1, "the branch stopped before its next claim");
    assert_eq!(report.steps, 7, "six trunk cells plus the branch entry");
    assert_eq!(report.dead_ends, 0);
    // Both junction arms and the cell behind them stay unexplored
    assert_eq!(grid.counts().open, 3);
}

#[test]
fn test_parallel_zero_budget_matches_the_sequential_trace() {
    let (grid, start) = parse(TRACE_MAZE);
    let seq_renderer = RecordingRenderer::default();
    sequential::explore(&grid, start, &seq_renderer);

    let (grid, start) = parse(TRACE_MAZE);
    let par_renderer = RecordingRenderer::default();
    let report = parallel::explore(&grid, start, &par_renderer, 0);

    assert!(report.found);
    assert_eq!(report.tasks_spawned, 0, "budget of zero forbids spawning");
    assert_eq!(par_renderer.visits(), seq_renderer.visits());
}

#[test]
fn test_engines_agree_on_solvability() {
    let fixtures: &[(&str, bool)] = &[
        (TRACE_MAZE, true),
        ("1 2\ne s", true),
        (RING_MAZE, true),
        (SEALED_MAZE, false),
        ("2 2\ne #\n# s", false),
    ];

    for (text, solvable) in fixtures {
        let (grid, start) = parse(text);
        let seq = sequential::explore(&grid, start, &SilentRenderer);
        assert_eq!(seq.found, *solvable, "sequential on {:?}", text);

        let (grid, start) = parse(text);
        let par = parallel::explore(&grid, start, &SilentRenderer, 4);
        assert_eq!(par.found, *solvable, "parallel on {:?}", text);
    }
}

#[test]
fn test_committed_maps_behave_as_documented() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/maps");

    let (grid, start) = loader::load(format!("{dir}/trace.maze")).expect("trace map loads");
    assert!(sequential::explore(&grid, start, &SilentRenderer).found);

    let (grid, start) =
        loader::load(format!("{dir}/serpentine.maze")).expect("serpentine map loads");
    assert!(sequential::explore(&grid, start, &SilentRenderer).found);

    let (grid, start) = loader::load(format!("{dir}/no_exit.maze")).expect("no_exit map loads");
    assert!(!parallel::explore(&grid, start, &SilentRenderer, 4).found);
}
