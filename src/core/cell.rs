//! Cell kinds for the maze grid.
//!
//! Each kind has a stable `u8` discriminant so cells can live in atomic
//! storage, and a single-character form matching the maze text format.

use serde::{Deserialize, Serialize};

/// Semantic cell kind - what does this grid cell contain?
///
/// The only mutation a grid ever performs is `Open`/`Start` -> `Visited`,
/// and that transition happens exactly once per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellKind {
    /// Solid wall, never traversable
    Wall = 0,

    /// Open corridor cell, not yet explored
    Open = 1,

    /// The unique entry cell where exploration begins
    Start = 2,

    /// The unique exit cell the engines search for
    Exit = 3,

    /// A cell that has been explored; never traversable again
    Visited = 4,
}

impl CellKind {
    /// Can an explorer step onto this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, CellKind::Open | CellKind::Exit)
    }

    /// Convert from u8 (for atomic cell storage)
    ///
    /// Unknown discriminants fold into `Wall`, which is never traversable.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellKind::Open,
            2 => CellKind::Start,
            3 => CellKind::Exit,
            4 => CellKind::Visited,
            _ => CellKind::Wall,
        }
    }

    /// Parse a maze text character.
    ///
    /// `Visited` has no input form; `'.'` in a maze file is rejected along
    /// with every other unknown character.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(CellKind::Wall),
            'x' => Some(CellKind::Open),
            'e' => Some(CellKind::Start),
            's' => Some(CellKind::Exit),
            _ => None,
        }
    }

    /// Single character representation (maze text format and rendering)
    pub fn as_char(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => 'x',
            CellKind::Start => 'e',
            CellKind::Exit => 's',
            CellKind::Visited => '.',
        }
    }
}

/// Outcome of attempting to claim a cell for exploration.
///
/// Under concurrency at most one claimer ever receives `Claimed` for a
/// given cell; everyone else sees `Blocked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Claim {
    /// The cell was `Open` or `Start`; it is now `Visited` and the caller
    /// owns its exploration step.
    Claimed,
    /// The cell is the exit. It is never marked `Visited`.
    Exit,
    /// Wall, already visited, or out of bounds.
    Blocked,
}
