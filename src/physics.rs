//! Agent integration: constant gravity, capped fall speed, jump override.

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    /// Row position, 0 = ceiling. Always within [0, height - 1] after a step.
    pub y: f64,
    /// Rows per tick, positive = falling.
    pub velocity: f64,
    /// Fixed column for the whole run.
    pub x: i32,
}

impl Agent {
    /// Centered vertically, at rest.
    pub fn new(config: &Config) -> Self {
        Self {
            y: config.height as f64 / 2.0,
            velocity: 0.0,
            x: config.agent_x,
        }
    }

    /// Row the agent occupies on the grid.
    pub fn row(&self) -> i32 {
        self.y.round() as i32
    }
}

/// Advance the agent one tick. A pending jump is consumed.
pub fn integrate(agent: Agent, jump_requested: &mut bool, config: &Config) -> Agent {
    let mut velocity = (agent.velocity + config.gravity).min(config.max_fall_speed);

    // Override, not impulse: a jump always lands on the same upward speed.
    if std::mem::take(jump_requested) {
        velocity = -config.jump_strength;
    }

    let y = (agent.y + velocity).clamp(0.0, config.floor());
    Agent { y, velocity, ..agent }
}
