//! Flappy birb: a text-mode side scroller.
//!
//! Core modules:
//! - `physics`: agent integration under gravity with jump override
//! - `obstacles`: scrolling obstacle field with seeded gap generation
//! - `collision`: scoring and collision evaluation
//! - `render`: state to text grid
//! - `game`: fixed-cadence tick loop tying the stages together
//! - `terminal`: crossterm input source and render sink

pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod obstacles;
pub mod physics;
pub mod render;
pub mod terminal;

pub use collision::{EndReason, Evaluation, evaluate};
pub use config::{Config, EdgePolicy};
pub use error::{ConfigError, Error};
pub use game::{Game, GameState, InputEvent, InputSource, Phase, RenderSink, Summary};
pub use obstacles::{Obstacle, ObstacleField};
pub use physics::{Agent, integrate};
pub use render::{Frame, render};

/// Reference tuning. `Config::default()` is built from these.
pub mod consts {
    use std::time::Duration;

    /// Playfield rows
    pub const SCREEN_HEIGHT: i32 = 20;
    /// Playfield columns
    pub const SCREEN_WIDTH: i32 = 40;

    /// Velocity gained per tick (rows/tick²)
    pub const GRAVITY: f64 = 0.3;
    /// Upward velocity set by a jump
    pub const JUMP_STRENGTH: f64 = 1.8;
    /// Fall speed cap (rows/tick)
    pub const MAX_FALL_SPEED: f64 = 3.0;

    /// Rows of open space in each obstacle, counted from gap top
    pub const GAP_HEIGHT: i32 = 5;
    /// Columns between the right edge and the newest obstacle before another spawns
    pub const SPAWN_DISTANCE: i32 = 15;
    /// Agent's fixed column
    pub const AGENT_X: i32 = 5;

    /// Fixed tick cadence
    pub const TICK_INTERVAL: Duration = Duration::from_millis(70);
}
