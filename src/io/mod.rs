//! Maze input.
//!
//! - [`loader`]: strict text-format maze loading and validation

pub mod loader;

pub use loader::{load, parse};
