//! Atomic maze grid storage.
//!
//! Cells are stored row-major as `AtomicU8` discriminants of
//! [`CellKind`], so the visited transition is a compare-exchange instead
//! of a read-then-write. The grid's shape is fixed at construction; the
//! only mutation it ever performs is `Open`/`Start` -> `Visited` through
//! [`Grid::claim`], and at most one caller ever wins that transition for
//! a given cell.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::core::{CellKind, Claim, Position};

/// Fixed-shape 2D cell store shared by all exploration tasks.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<AtomicU8>,
}

/// Cell tallies for one grid, produced by [`Grid::counts`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Wall cells
    pub wall: usize,
    /// Open cells not yet visited
    pub open: usize,
    /// Unvisited start cells (1 before a run, 0 after)
    pub start: usize,
    /// Exit cells (always 1; the exit is never marked visited)
    pub exit: usize,
    /// Cells marked visited
    pub visited: usize,
}

impl CellCounts {
    /// Total number of cells
    pub fn total(&self) -> usize {
        self.wall + self.open + self.start + self.exit + self.visited
    }
}

impl Grid {
    /// Build a grid from row-major cell kinds.
    ///
    /// `kinds.len()` must equal `rows * cols`; the loader guarantees this
    /// for parsed mazes.
    pub fn from_cells(rows: usize, cols: usize, kinds: Vec<CellKind>) -> Self {
        assert_eq!(
            kinds.len(),
            rows * cols,
            "cell data does not match grid shape"
        );
        let cells = kinds.into_iter().map(|k| AtomicU8::new(k as u8)).collect();
        Self { rows, cols, cells }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index for an in-bounds position
    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Current kind of the cell at `pos`.
    ///
    /// Out-of-bounds positions read as `Wall`, which is never traversable;
    /// neighbor probing at the maze edge relies on this.
    #[inline]
    pub fn kind_at(&self, pos: Position) -> CellKind {
        match self.index(pos) {
            Some(idx) => CellKind::from_u8(self.cells[idx].load(Ordering::Acquire)),
            None => CellKind::Wall,
        }
    }

    /// Is `pos` in bounds and currently `Open` or `Exit`?
    #[inline]
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.kind_at(pos).is_traversable()
    }

    /// Atomically claim the cell at `pos` for exploration.
    ///
    /// `Open` and `Start` cells transition to `Visited` and return
    /// [`Claim::Claimed`] to exactly one caller. The exit returns
    /// [`Claim::Exit`] without mutation. Everything else, including
    /// out-of-bounds positions and cells another task already claimed,
    /// returns [`Claim::Blocked`].
    pub fn claim(&self, pos: Position) -> Claim {
        let Some(idx) = self.index(pos) else {
            return Claim::Blocked;
        };
        let cell = &self.cells[idx];
        let mut current = cell.load(Ordering::Acquire);
        loop {
            match CellKind::from_u8(current) {
                CellKind::Exit => return Claim::Exit,
                CellKind::Open | CellKind::Start => {
                    match cell.compare_exchange_weak(
                        current,
                        CellKind::Visited as u8,
                        Ordering::AcqRel,
                        Ordering::Acquire,
                    ) {
                        Ok(_) => return Claim::Claimed,
                        Err(observed) => current = observed,
                    }
                }
                CellKind::Wall | CellKind::Visited => return Claim::Blocked,
            }
        }
    }

    /// Tally every cell kind in the grid
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match CellKind::from_u8(cell.load(Ordering::Acquire)) {
                CellKind::Wall => counts.wall += 1,
                CellKind::Open => counts.open += 1,
                CellKind::Start => counts.start += 1,
                CellKind::Exit => counts.exit += 1,
                CellKind::Visited => counts.visited += 1,
            }
        }
        counts
    }
}
