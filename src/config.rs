//! Configuration for the maze explorer.
//!
//! Loaded from TOML with per-field defaults, so a partial file only
//! overrides what it names. CLI flags override file values; that
//! layering happens in the binary, not here.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Engine tuning
    #[serde(default)]
    pub engine: EngineConfig,

    /// Renderer tuning
    #[serde(default)]
    pub render: RenderConfig,
}

/// Engine tuning
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Cap on concurrently running spawned tasks in the parallel
    /// engine; zero disables spawning entirely
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
}

/// Renderer tuning
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Delay after each rendered frame, in milliseconds
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,

    /// Clear the terminal before each frame instead of scrolling
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_max_tasks() -> usize {
    64
}

fn default_frame_delay_ms() -> u64 {
    50
}

fn default_clear_screen() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_tasks: default_max_tasks(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: default_frame_delay_ms(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }
}
