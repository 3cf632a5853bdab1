//! Game state and the fixed-cadence tick loop.
//!
//! Each tick runs input, physics, obstacle scroll, collision/scoring and
//! render in that order. The first ending is final.

use std::thread;
use std::time::Instant;

use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::collision::{EndReason, evaluate};
use crate::config::Config;
use crate::error::{ConfigError, Error};
use crate::obstacles::ObstacleField;
use crate::physics::{Agent, integrate};
use crate::render::{Frame, render};

/// At most one of these is delivered per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEvent {
    Jump,
    Quit,
    #[default]
    None,
}

/// Where ticks get their input. Must not block.
pub trait InputSource {
    fn poll(&mut self) -> Result<InputEvent, Error>;
}

/// Where finished frames go. Called once per tick.
pub trait RenderSink {
    fn display(&mut self, frame: &Frame) -> Result<(), Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Over(EndReason),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub agent: Agent,
    pub obstacles: ObstacleField,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: Agent::new(config),
            obstacles: ObstacleField::new(),
            score: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }
}

/// What is left once a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: u32,
    pub ticks: u64,
    pub reason: EndReason,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game Over! Your Score: {}", self.score)
    }
}

pub struct Game<R = Pcg32> {
    config: Config,
    state: GameState,
    rng: R,
    jump_requested: bool,
    ticks: u64,
}

impl Game<Pcg32> {
    /// Seeded from `config.seed`, or from a fresh random seed.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            "new game: {}x{} seed={seed} edges={:?}",
            config.width, config.height, config.edges
        );
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: Config, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            config,
            rng,
            jump_requested: false,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for setting up positions in tests and demos.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick. Returns the end reason once the run is over;
    /// further calls change nothing.
    pub fn tick(&mut self, event: InputEvent) -> Option<EndReason> {
        if let Phase::Over(reason) = self.state.phase {
            return Some(reason);
        }
        self.ticks += 1;

        match event {
            InputEvent::Quit => return Some(self.finish(EndReason::Quit)),
            InputEvent::Jump => self.jump_requested = true,
            InputEvent::None => {}
        }

        self.state.agent = integrate(self.state.agent, &mut self.jump_requested, &self.config);
        self.state.obstacles.advance(&mut self.rng, &self.config);

        let eval = evaluate(&self.state.agent, &self.state.obstacles, &self.config);
        self.state.score += eval.scored;
        if eval.scored > 0 {
            debug!("scored {} (total {})", eval.scored, self.state.score);
        }
        trace!(
            "tick {} y={:.2} v={:.2} obstacles={} score={}",
            self.ticks,
            self.state.agent.y,
            self.state.agent.velocity,
            self.state.obstacles.len(),
            self.state.score
        );

        eval.end.map(|reason| self.finish(reason))
    }

    fn finish(&mut self, reason: EndReason) -> EndReason {
        self.state.phase = Phase::Over(reason);
        info!(
            "game over: {reason:?} score={} ticks={}",
            self.state.score, self.ticks
        );
        reason
    }

    pub fn frame(&self) -> Frame {
        render(&self.state, &self.config)
    }

    pub fn summary(&self) -> Option<Summary> {
        match self.state.phase {
            Phase::Over(reason) => Some(Summary {
                score: self.state.score,
                ticks: self.ticks,
                reason,
            }),
            Phase::Running => None,
        }
    }

    /// Run ticks at the configured cadence until the game ends.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
    ) -> Result<Summary, Error> {
        let tick_dur = self.config.tick_interval;

        loop {
            let tick_start = Instant::now();

            let event = input.poll()?;
            let end = self.tick(event);

            // The losing frame is shown too.
            sink.display(&self.frame())?;

            if let Some(reason) = end {
                return Ok(Summary {
                    score: self.state.score,
                    ticks: self.ticks,
                    reason,
                });
            }

            // Tick pacing
            let elapsed = tick_start.elapsed();
            if elapsed < tick_dur {
                thread::sleep(tick_dur - elapsed);
            }
        }
    }
}
