use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use terminal_life::{
    LifeConfig, Result, Simulation,
    application::SleepPacer,
    rendering::TerminalRenderer,
};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the frame on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = LifeConfig::from_env()?;
    info!(
        height = config.height,
        width = config.width,
        fps = config.fps,
        seed = config.seed,
        max_generations = config.max_generations,
        "configuration loaded"
    );

    // Seeded once here and handed to the engine; nothing else draws from it
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Starting Game of Life...");
    let mut simulation = Simulation::from_config(&config, &mut rng)?;
    let outcome = simulation.run(&mut TerminalRenderer::stdout(), &mut SleepPacer)?;
    info!(?outcome, "simulation finished");
    Ok(())
}
