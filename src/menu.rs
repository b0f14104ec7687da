//! The waveform selection menu.

use std::io::Write;

use crate::error::Error;
use crate::oscillators::Waveform;

/// What the user asked for at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Waveform(Waveform),
    Quit,
}

/// Map a line typed at the prompt to a selection. Surrounding whitespace and case are ignored.
pub fn parse_selection(input: &str) -> Result<Selection, Error> {
    match input.trim().to_lowercase().as_str() {
        "1" => Ok(Selection::Waveform(Waveform::Sine)),
        "2" => Ok(Selection::Waveform(Waveform::Square)),
        "3" => Ok(Selection::Waveform(Waveform::Sawtooth)),
        "q" => Ok(Selection::Quit),
        other => Err(Error::InvalidShape(other.to_string())),
    }
}

/// Print the menu followed by the prompt, without a trailing newline.
pub fn print_menu<W: Write>(output: &mut W) -> Result<(), Error> {
    let rule = "=".repeat(50);
    writeln!(output)?;
    writeln!(output, "{rule}")?;
    writeln!(output, "   FOURIER TRANSFORM DEMONSTRATION")?;
    writeln!(output, "{rule}")?;
    writeln!(output, "\n  Select a waveform:\n")?;
    writeln!(output, "    1. Sine wave")?;
    writeln!(output, "    2. Square wave")?;
    writeln!(output, "    3. Sawtooth wave")?;
    writeln!(output, "    q. Quit")?;
    write!(output, "\n  Enter choice (1/2/3/q): ")?;
    output.flush()?;
    Ok(())
}
