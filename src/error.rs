//! Error types for configuration and the terminal boundary.

use std::io;

use thiserror::Error;

/// A `Config` that cannot describe a playable field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield must be at least 1x1, got {width}x{height}")]
    EmptyPlayfield { width: i32, height: i32 },
    #[error("gap height {gap} must be positive and smaller than playfield height {height}")]
    GapDoesNotFit { gap: i32, height: i32 },
    #[error("agent column {x} is outside the playfield (width {width})")]
    AgentOutsidePlayfield { x: i32, width: i32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("spawn distance must be positive, got {0}")]
    SpawnDistance(i32),
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Anything that stops a run other than the game itself ending.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
