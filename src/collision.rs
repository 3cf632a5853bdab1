//! Scoring and collision evaluation.
//!
//! Runs after the obstacle field has scrolled for the tick. Scoring and
//! collision are checked independently; one tick may do both.

use crate::config::{Config, EdgePolicy};
use crate::obstacles::ObstacleField;
use crate::physics::Agent;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Hit the solid part of an obstacle.
    Collision,
    /// Left the playfield, or touched an edge under `EdgePolicy::Lethal`.
    OutOfBounds,
    /// Player asked to stop.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Obstacles passed this tick.
    pub scored: u32,
    pub end: Option<EndReason>,
}

pub fn evaluate(agent: &Agent, obstacles: &ObstacleField, config: &Config) -> Evaluation {
    let row = agent.row();

    // An obstacle sits one column behind the agent on exactly one tick.
    let scored = obstacles.iter().filter(|o| o.x == agent.x - 1).count() as u32;

    let hit = obstacles
        .iter()
        .any(|o| o.x == agent.x && o.blocks(row, config.gap_height));

    let out_of_bounds = row < 0
        || row >= config.height
        || (config.edges == EdgePolicy::Lethal && (agent.y <= 0.0 || agent.y >= config.floor()));

    let end = if hit {
        Some(EndReason::Collision)
    } else if out_of_bounds {
        Some(EndReason::OutOfBounds)
    } else {
        None
    };

    Evaluation { scored, end }
}
