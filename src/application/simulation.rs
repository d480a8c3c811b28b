use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::{LifeConfig, Pacer};
use crate::domain::LifeEngine;
use crate::error::Result;
use crate::rendering::Renderer;

/// How a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Three consecutive generations matched after `frames` frames
    Stable { frames: u64 },
    /// The frame cutoff was reached first
    CutOff { frames: u64 },
}

impl Outcome {
    pub const fn frames(self) -> u64 {
        match self {
            Outcome::Stable { frames } | Outcome::CutOff { frames } => frames,
        }
    }

    pub const fn is_stable(self) -> bool {
        matches!(self, Outcome::Stable { .. })
    }
}

/// Simulation couples the engine to its frame pacing and cutoff.
/// This is the application layer that drives the domain one tick at a time.
pub struct Simulation {
    engine: LifeEngine,
    frame_duration: Duration,
    max_generations: Option<u64>,
}

impl Simulation {
    pub fn new(engine: LifeEngine, frame_duration: Duration) -> Self {
        Self {
            engine,
            frame_duration,
            max_generations: None,
        }
    }

    /// Seed a fresh engine from `rng` using the configured board
    pub fn from_config<R: Rng + ?Sized>(config: &LifeConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let engine = LifeEngine::new(config.height, config.width, rng)?;
        Ok(Self::new(engine, config.frame_duration()).with_max_generations(config.max_generations))
    }

    /// Stop after `max` frames even without a fixed point (builder pattern)
    pub fn with_max_generations(mut self, max: Option<u64>) -> Self {
        self.max_generations = max;
        self
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// Render, advance, then either stop or pace, until the engine reports
    /// a fixed point or the frame cutoff is hit.
    ///
    /// Generation N is fully drawn before N+1 is computed. The first frame
    /// can never be stable.
    pub fn run<D, P>(&mut self, renderer: &mut D, pacer: &mut P) -> Result<Outcome>
    where
        D: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        let mut frame = 0u64;

        loop {
            frame += 1;
            renderer.draw(self.engine.grid(), frame)?;

            let (next, stable) = self.engine.advance();
            debug!(frame, population = next.population(), stable, "tick");

            if stable {
                renderer.stable(frame)?;
                info!(frames = frame, population = self.engine.population(), "reached a fixed point");
                return Ok(Outcome::Stable { frames: frame });
            }

            if self.max_generations.is_some_and(|max| frame >= max) {
                info!(frames = frame, "frame cutoff reached without a fixed point");
                return Ok(Outcome::CutOff { frames: frame });
            }

            pacer.pace(self.frame_duration);
        }
    }
}
