//! Grid positions and the move-direction policy.

use serde::{Deserialize, Serialize};

/// Grid position as (row, column), row 0 at the top.
///
/// Components are signed so neighbor probing at the maze edge yields
/// representable out-of-bounds positions; the grid rejects those as
/// blocked instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, increasing downward
    pub row: i32,
    /// Column index, increasing rightward
    pub col: i32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four neighbors in frontier push order: up, right, left, down.
    ///
    /// The frontier is a stack, so pushing in this order makes the "down"
    /// neighbor the most recently pushed entry and therefore the first
    /// branch explored; on backtrack the preference continues left, then
    /// right, then up. Reordering this array changes every exploration
    /// trace.
    #[inline]
    pub fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row, self.col + 1),
            Position::new(self.row, self.col - 1),
            Position::new(self.row + 1, self.col),
        ]
    }
}
