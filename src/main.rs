pub mod app;
pub mod config;
pub mod error;
pub mod functions;
pub mod menu;
pub mod oscillators;
pub mod plot;
pub mod signal;
pub mod spectrum;
pub mod types;

use std::error::Error;
use std::io::{stdin, stdout};

use clap::Parser;

use crate::config::Args;

/// Start the command-line waveform and spectrum plotter.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialise logging.
    env_logger::init();

    let args = Args::parse();
    let config = args.to_config()?;
    log::info!(
        "Plotting {} samples over {} periods on a {}x{} grid, showing {} spectrum bins",
        config.num_samples,
        config.periods,
        config.geometry.width(),
        config.geometry.height(),
        config.display_bins
    );

    let mut output = stdout().lock();
    match args.waveform {
        Some(waveform) => app::run_once(&config, waveform, &mut output)?,
        None => app::run_interactive(&config, stdin().lock(), &mut output)?,
    }

    log::info!("Exiting");
    Ok(())
}
