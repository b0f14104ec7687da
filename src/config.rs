//! Command-line arguments and the demonstration settings derived from them.

use clap::Parser;

use crate::error::Error;
use crate::oscillators::Waveform;
use crate::plot::Geometry;
use crate::types::Periods;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "asciispec")]
#[command(about = "Plot simple waveforms and their frequency spectra as ASCII graphs", long_about = None)]
pub struct Args {
    /// Number of samples in each generated signal
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 128)]
    pub samples: usize,

    /// Number of cycles spanning the sample window
    #[arg(short, long, value_name = "CYCLES", default_value_t = 4.0)]
    pub periods: f64,

    /// Plot width in columns
    #[arg(long, value_name = "COLUMNS", default_value_t = 70)]
    pub width: usize,

    /// Plot height in rows
    #[arg(long, value_name = "ROWS", default_value_t = 15)]
    pub height: usize,

    /// Number of leading spectrum bins shown in the frequency plot
    #[arg(long, value_name = "COUNT", default_value_t = 32)]
    pub bins: usize,

    /// Plot this waveform once and exit instead of showing the menu: sine, square, sawtooth
    #[arg(short, long, value_name = "SHAPE")]
    pub waveform: Option<Waveform>,
}

impl Args {
    /// Validate the arguments into demonstration settings.
    pub fn to_config(&self) -> Result<DemoConfig, Error> {
        let config = DemoConfig {
            num_samples: self.samples,
            periods: self.periods,
            geometry: Geometry::new(self.width, self.height)?,
            display_bins: self.bins,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Settings shared by every demonstration run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Samples per generated signal
    pub num_samples: usize,

    /// Cycles spanning the sample window
    pub periods: Periods,

    /// Dimensions of both plots
    pub geometry: Geometry,

    /// Leading spectrum bins plotted, fewer are shown if the spectrum is shorter
    pub display_bins: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            num_samples: 128,
            periods: 4.0,
            geometry: Geometry::default(),
            display_bins: 32,
        }
    }
}

impl DemoConfig {
    /// Validate settings that would leave a plot empty or a signal undefined.
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_samples == 0 {
            return Err(Error::InvalidSampleCount);
        }
        if !self.periods.is_finite() || self.periods <= 0.0 {
            return Err(Error::InvalidPeriods(self.periods));
        }
        // The spectrum only has num_samples / 2 bins, there is nothing to plot below 2 samples.
        if self.num_samples < 2 {
            return Err(Error::InvalidConfig(format!(
                "at least 2 samples are needed for a spectrum, got {}",
                self.num_samples
            )));
        }
        if self.display_bins == 0 {
            return Err(Error::InvalidConfig("at least one spectrum bin must be shown".to_string()));
        }
        Ok(())
    }
}
