//! Error type shared by the generators, the analyzer, the plotter and the app.

use std::fmt;

/// Errors raised by signal generation, analysis, rendering and configuration.
#[derive(Debug)]
pub enum Error {
    /// A menu selection or waveform name that doesn't name a known shape.
    InvalidShape(String),
    /// A signal must contain at least one sample.
    InvalidSampleCount,
    /// The period count must be finite and positive.
    InvalidPeriods(f64),
    /// Analysis or rendering was asked to work on no samples.
    EmptySignal,
    /// Plots need at least one column and two rows.
    InvalidGeometry { width: usize, height: usize },
    /// An argument combination that can't produce a demonstration.
    InvalidConfig(String),
    /// Console read or write failure.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidShape(shape) => write!(f, "unrecognized waveform: {shape:?}"),
            Error::InvalidSampleCount => write!(f, "sample count must be at least 1"),
            Error::InvalidPeriods(periods) => {
                write!(f, "period count must be finite and positive, got {periods}")
            }
            Error::EmptySignal => write!(f, "signal contains no samples"),
            Error::InvalidGeometry { width, height } => write!(
                f,
                "plot geometry {width}x{height} is invalid (need width >= 1, height >= 2)"
            ),
            Error::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Error::Io(err) => write!(f, "console I/O failure: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}
