//! Frame output seam.
//!
//! The engines call [`Render::frame`] once per claimed step; the
//! renderer owns all formatting and pacing. Frames from concurrent
//! tasks are serialized by the ASCII renderer's internal lock so
//! interleaved writes cannot corrupt output, and the logical walk never
//! depends on rendering: a silent run terminates identically with zero
//! delay.

use std::io::Write;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::Position;
use crate::grid::Grid;

/// Per-step frame sink shared by all exploration tasks.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use bhulbhulaiya::core::Position;
/// use bhulbhulaiya::grid::Grid;
/// use bhulbhulaiya::render::Render;
///
/// struct CountingRenderer(AtomicUsize);
///
/// impl Render for CountingRenderer {
///     fn frame(&self, _grid: &Grid, _current: Position) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait Render: Send + Sync {
    /// Called once per claimed step with the shared grid and the cell
    /// just visited
    fn frame(&self, grid: &Grid, current: Position);
}

/// Renderer that emits nothing and never sleeps.
///
/// Used by quiet runs and by tests that only care about outcomes.
pub struct SilentRenderer;

impl Render for SilentRenderer {
    fn frame(&self, _grid: &Grid, _current: Position) {}
}

/// Animated terminal renderer.
///
/// Writes one whole frame per step under an internal lock, then sleeps
/// the frame delay outside the lock so concurrent tasks never serialize
/// on the sleep itself.
pub struct AsciiRenderer {
    out: Mutex<std::io::Stdout>,
    delay: Duration,
    clear: bool,
}

impl AsciiRenderer {
    /// Create a renderer with the given frame delay; `clear` redraws in
    /// place with an ANSI clear instead of scrolling frames
    pub fn new(delay: Duration, clear: bool) -> Self {
        Self {
            out: Mutex::new(std::io::stdout()),
            delay,
            clear,
        }
    }
}

impl Render for AsciiRenderer {
    fn frame(&self, grid: &Grid, _current: Position) {
        {
            let mut out = self.out.lock();
            if self.clear {
                let _ = out.write_all(b"\x1b[2J\x1b[H");
            }
            let _ = out.write_all(format_grid(grid).as_bytes());
            let _ = out.flush();
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Format the grid as maze text: one row per line, cells separated by
/// single spaces.
pub fn format_grid(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.rows() * (grid.cols() * 2 + 1));
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if col > 0 {
                text.push(' ');
            }
            let pos = Position::new(row as i32, col as i32);
            text.push(grid.kind_at(pos).as_char());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellKind;

    #[test]
    fn test_format_grid() {
        use CellKind::{Exit, Open, Start, Wall};
        let grid = Grid::from_cells(2, 3, vec![Start, Open, Wall, Wall, Open, Exit]);
        assert_eq!(format_grid(&grid), "e x #\n# x s\n");
    }

    #[test]
    fn test_format_shows_visited_cells() {
        use CellKind::{Exit, Start};
        let grid = Grid::from_cells(1, 2, vec![Start, Exit]);
        grid.claim(Position::new(0, 0));
        assert_eq!(format_grid(&grid), ". s\n");
    }
}
