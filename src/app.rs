//! The demonstration itself: time plot, spectrum plot and peak report for a waveform, driven
//! either once from the command line or repeatedly from the menu.

use std::io::{BufRead, Write};

use crate::config::DemoConfig;
use crate::error::Error;
use crate::menu::{parse_selection, print_menu, Selection};
use crate::oscillators::{generate, Waveform};
use crate::plot::render_titled;
use crate::spectrum::{magnitude_spectrum, peak_bin};

/// Generate `waveform`, then print its time domain plot, its frequency domain plot and the
/// strongest non-DC bin.
pub fn demonstrate<W: Write>(config: &DemoConfig, waveform: Waveform, output: &mut W) -> Result<(), Error> {
    let name = waveform.name();
    let signal = generate(waveform, config.num_samples, config.periods)?;

    for line in render_titled(&format!("Time Domain - {name}"), &signal, config.geometry)? {
        writeln!(output, "{line}")?;
    }

    let magnitudes = magnitude_spectrum(&signal)?;
    let shown = &magnitudes[..config.display_bins.min(magnitudes.len())];
    for line in render_titled(&format!("Frequency Domain - {name} (magnitude)"), shown, config.geometry)? {
        writeln!(output, "{line}")?;
    }

    match peak_bin(&magnitudes) {
        Some(bin) => {
            log::debug!("Peak of {waveform} at bin {bin}");
            writeln!(output, "\n  Peak frequency bin: {bin} (expect ~{})", config.periods)?;
        }
        None => writeln!(output, "\n  Peak frequency bin: none (expect ~{})", config.periods)?,
    }

    Ok(())
}

/// Run a single demonstration for `waveform`.
pub fn run_once<W: Write>(config: &DemoConfig, waveform: Waveform, output: &mut W) -> Result<(), Error> {
    log::info!("Plotting {waveform} once");
    demonstrate(config, waveform, output)?;
    output.flush()?;
    Ok(())
}

/// Show the menu and run demonstrations until the user quits or the input ends.
pub fn run_interactive<R: BufRead, W: Write>(config: &DemoConfig, mut input: R, output: &mut W) -> Result<(), Error> {
    let mut line = String::new();
    loop {
        print_menu(output)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::info!("Input closed");
            writeln!(output)?;
            break;
        }

        match parse_selection(&line) {
            Ok(Selection::Quit) => break,
            Ok(Selection::Waveform(waveform)) => demonstrate(config, waveform, output)?,
            Err(err) => {
                log::debug!("Rejected selection: {err}");
                writeln!(output, "  Invalid choice. Try again.")?;
            }
        }
    }

    writeln!(output, "\n  Goodbye!\n")?;
    output.flush()?;
    Ok(())
}
