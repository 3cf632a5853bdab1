//! Run configuration.
//!
//! Every tuning value is fixed when a `Game` is created. Only the RNG seed and
//! the edge policy can be overridden from the environment at startup.

use std::env;
use std::time::Duration;

use crate::consts::*;
use crate::error::ConfigError;

pub const SEED_VAR: &str = "BIRB_SEED";
pub const EDGES_VAR: &str = "BIRB_EDGES";

/// What happens when the agent reaches the ceiling or the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// The clamp absorbs the contact; only obstacles can end the run.
    #[default]
    Soft,
    /// Resting on the ceiling or floor ends the run.
    Lethal,
}

impl EdgePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "soft" => Some(EdgePolicy::Soft),
            "lethal" | "hard" => Some(EdgePolicy::Lethal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub height: i32,
    pub width: i32,
    pub gravity: f64,
    pub jump_strength: f64,
    pub max_fall_speed: f64,
    pub gap_height: i32,
    pub spawn_distance: i32,
    pub agent_x: i32,
    pub tick_interval: Duration,
    /// Fixed seed for obstacle gaps; a fresh one is drawn when `None`.
    pub seed: Option<u64>,
    pub edges: EdgePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: SCREEN_HEIGHT,
            width: SCREEN_WIDTH,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            max_fall_speed: MAX_FALL_SPEED,
            gap_height: GAP_HEIGHT,
            spawn_distance: SPAWN_DISTANCE,
            agent_x: AGENT_X,
            tick_interval: TICK_INTERVAL,
            seed: None,
            edges: EdgePolicy::Soft,
        }
    }
}

impl Config {
    /// Reference tuning with `BIRB_SEED` / `BIRB_EDGES` applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Some(raw) = lookup(SEED_VAR) {
            let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: SEED_VAR,
                value: raw.clone(),
            })?;
            config.seed = Some(seed);
        }
        if let Some(raw) = lookup(EDGES_VAR) {
            config.edges = EdgePolicy::from_str(&raw).ok_or(ConfigError::InvalidEnv {
                var: EDGES_VAR,
                value: raw.clone(),
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::EmptyPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        // Gap tops are drawn from [0, height - gap), which must be non-empty.
        if self.gap_height < 1 || self.gap_height >= self.height {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.gap_height,
                height: self.height,
            });
        }
        // Scoring looks at agent_x - 1, so column 0 would never score.
        if self.agent_x < 1 || self.agent_x >= self.width {
            return Err(ConfigError::AgentOutsidePlayfield {
                x: self.agent_x,
                width: self.width,
            });
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("jump strength", self.jump_strength),
            ("max fall speed", self.max_fall_speed),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.spawn_distance < 1 {
            return Err(ConfigError::SpawnDistance(self.spawn_distance));
        }
        Ok(())
    }

    /// Bottom row index
    pub fn floor(&self) -> f64 {
        (self.height - 1) as f64
    }
}
