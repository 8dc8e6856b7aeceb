//! Core types for the maze explorer.
//!
//! - [`CellKind`]: semantic grid cell kinds with stable `u8` discriminants
//! - [`Claim`]: outcome of the atomic visited transition
//! - [`Position`]: (row, column) grid coordinate and the move-direction
//!   policy

mod cell;
mod position;

pub use cell::{CellKind, Claim};
pub use position::Position;
