//! The step protocol shared by both engine variants.

use crate::core::{Claim, Position};
use crate::engine::frontier::Frontier;
use crate::grid::Grid;
use crate::render::Render;

/// Outcome of one protocol step, and of a whole exploration unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// More work remains on this unit's frontier
    Pending,
    /// This unit stepped onto the exit cell
    ExitReached,
    /// This unit's frontier is exhausted
    DeadEnd,
}

/// One exploration unit: a current position plus a private frontier.
///
/// Both engine variants drive the same [`Walker::step`]; they differ
/// only in the hand-off policy. The sequential driver refuses every
/// hand-off, so all branches stay on the local frontier and the walk is
/// fully deterministic. The parallel driver accepts hand-offs by
/// spawning tasks, each a fresh walker on the shared grid.
pub struct Walker<'g> {
    grid: &'g Grid,
    frontier: Frontier,
    current: Position,
    steps: usize,
}

impl<'g> Walker<'g> {
    /// Start an exploration unit at `start`
    pub fn new(grid: &'g Grid, start: Position) -> Self {
        Self {
            grid,
            frontier: Frontier::new(),
            current: start,
            steps: 0,
        }
    }

    /// The cell the next step will claim
    pub fn position(&self) -> Position {
        self.current
    }

    /// Claimed steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run one iteration of the step protocol.
    ///
    /// Claims the current cell (exit and already-claimed cells short
    /// circuit), renders a frame, then discovers traversable neighbors
    /// in push order. Every branch except the most preferred one is
    /// offered to `hand_off`; a refused branch stays on the local
    /// frontier. Finally the most recent frontier entry becomes the new
    /// current position.
    ///
    /// A stale frontier entry, meaning a cell some other unit claimed
    /// after it was pushed here, comes back `Blocked` and is discarded
    /// without a frame; whoever claimed it owns its neighbors.
    pub fn step<F>(&mut self, renderer: &dyn Render, hand_off: &mut F) -> Outcome
    where
        F: FnMut(Position) -> bool,
    {
        match self.grid.claim(self.current) {
            Claim::Exit => return Outcome::ExitReached,
            Claim::Blocked => return self.advance(),
            Claim::Claimed => {}
        }
        self.steps += 1;
        renderer.frame(self.grid, self.current);
        self.frontier.remove_if_present(self.current);

        let mut branches = [self.current; 4];
        let mut found = 0;
        for neighbor in self.current.neighbors() {
            if self.grid.is_traversable(neighbor) {
                branches[found] = neighbor;
                found += 1;
            }
        }
        if found > 0 {
            // The branch found last is the preferred direction; it stays
            // local so this unit continues depth-first.
            for &branch in &branches[..found - 1] {
                if !hand_off(branch) {
                    self.frontier.push(branch);
                }
            }
            self.frontier.push(branches[found - 1]);
        }
        self.advance()
    }

    /// Pop the next candidate, or report exhaustion
    fn advance(&mut self) -> Outcome {
        match self.frontier.pop_most_recent() {
            Some(next) => {
                self.current = next;
                Outcome::Pending
            }
            None => Outcome::DeadEnd,
        }
    }
}
