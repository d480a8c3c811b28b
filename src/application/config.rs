//! Runtime configuration for the terminal simulation.
//!
//! Every setting has a default matching the classic 10x10 board at 30 FPS
//! and can be overridden through `LIFE_*` environment variables.

use std::str::FromStr;
use std::time::Duration;

use crate::domain::engine::MIN_SIDE;
use crate::error::{LifeError, Result};

pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_FPS: u64 = 30;

/// Complete simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    /// Grid rows, including the dead border.
    pub height: usize,
    /// Grid columns, including the dead border.
    pub width: usize,
    /// Target frames per second for the pacer.
    pub fps: u64,
    /// Fixed seed for the initial generation; drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Stop after this many frames even if no fixed point was reached.
    pub max_generations: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            fps: DEFAULT_FPS,
            seed: None,
            max_generations: None,
        }
    }
}

impl LifeConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `LIFE_HEIGHT` -- grid rows (default 10)
    /// - `LIFE_WIDTH` -- grid columns (default 10)
    /// - `LIFE_FPS` -- frame rate limit (default 30)
    /// - `LIFE_SEED` -- u64 seed for reproducible runs
    /// - `LIFE_MAX_GENERATIONS` -- frame cutoff
    ///
    /// # Errors
    ///
    /// Returns `LifeError::InvalidConfig` if a variable does not parse or
    /// the resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            height: parse_var(&lookup, "LIFE_HEIGHT")?.unwrap_or(defaults.height),
            width: parse_var(&lookup, "LIFE_WIDTH")?.unwrap_or(defaults.width),
            fps: parse_var(&lookup, "LIFE_FPS")?.unwrap_or(defaults.fps),
            seed: parse_var(&lookup, "LIFE_SEED")?,
            max_generations: parse_var(&lookup, "LIFE_MAX_GENERATIONS")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height < MIN_SIDE || self.width < MIN_SIDE {
            return Err(LifeError::InvalidConfig(format!(
                "grid must be at least {MIN_SIDE}x{MIN_SIDE}, got {}x{}",
                self.height, self.width
            )));
        }
        if self.fps == 0 {
            return Err(LifeError::InvalidConfig("LIFE_FPS must be positive".into()));
        }
        Ok(())
    }

    /// Time budget for one frame: `1000 / fps` milliseconds
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1))
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| LifeError::InvalidConfig(format!("{key}={raw:?}: {e}")))
        })
        .transpose()
}
