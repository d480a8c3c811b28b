mod config;
mod pacer;
mod simulation;

pub use config::{LifeConfig, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use pacer::{NoPacer, Pacer, SleepPacer};
pub use simulation::{Outcome, Simulation};
