//! Bhulbhulaiya - depth-first grid maze exploration.
//!
//! Explores a 2D maze from its start cell toward its exit using
//! depth-first backtracking, either on a single thread with a fully
//! deterministic visit order, or concurrently with sibling branches
//! handed to fire-and-forget tasks that share one atomic grid and one
//! set-once exit signal.
//!
//! ## Modules
//!
//! - [`core`]: cell kinds, positions, the move-direction policy
//! - [`grid`]: atomic cell storage with the exactly-once visited claim
//! - [`engine`]: frontier, step protocol, sequential and parallel drivers
//! - [`render`]: frame output seam (animated terminal or silent)
//! - [`io`]: maze text loading and validation
//! - [`config`]: TOML configuration
//! - [`error`]: crate error type
//!
//! ## Data flow
//!
//! ```text
//! maze file --> io::loader --> Grid + start position
//!                                  |
//!                  engine::sequential / engine::parallel
//!                  (claim cells, push/pop frontier, hand off branches)
//!                                  |
//!                  Render frames  +  ExplorationReport
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod render;

pub use crate::core::{CellKind, Claim, Position};
pub use config::Config;
pub use engine::{ExitSignal, ExplorationReport, Frontier, Outcome, TaskBudget, Walker};
pub use error::{Error, Result};
pub use grid::{CellCounts, Grid};
pub use render::{AsciiRenderer, Render, SilentRenderer};
