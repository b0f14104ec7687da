//! Basic oscillators that output simple shapes like sine, square and sawtooth waves over a fixed
//! window of samples.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::functions::{cycles, phase, saw_wave, sine_wave, square_wave};
use crate::signal::Signal;
use crate::types::{Periods, Sample};

/// The shapes an oscillator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Every supported shape, in menu order.
    #[cfg(test)]
    pub const ALL: [Waveform; 3] = [Waveform::Sine, Waveform::Square, Waveform::Sawtooth];

    /// Human readable name used in plot titles.
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine Wave",
            Waveform::Square => "Square Wave",
            Waveform::Sawtooth => "Sawtooth Wave",
        }
    }

    /// Sample this shape at `index` of a window of `num_samples` samples spanning `periods`
    /// cycles.
    pub fn sample(&self, periods: Periods, index: usize, num_samples: usize) -> Sample {
        match self {
            Waveform::Sine => sine_wave(periods, index, num_samples),
            Waveform::Square => square_wave(phase(cycles(periods, index, num_samples))),
            Waveform::Sawtooth => saw_wave(phase(cycles(periods, index, num_samples))),
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
        };
        f.write_str(id)
    }
}

impl FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sine" | "sin" => Ok(Waveform::Sine),
            "square" | "sq" => Ok(Waveform::Square),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            other => Err(Error::InvalidShape(other.to_string())),
        }
    }
}

/// An oscillator spanning `periods` cycles over a window of `num_samples` samples, evaluated by
/// sample index.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    waveform: Waveform,
    num_samples: usize,
    periods: Periods,
}

impl Oscillator {
    /// Create an oscillator, rejecting empty windows and non-positive or non-finite period counts.
    pub fn new(waveform: Waveform, num_samples: usize, periods: Periods) -> Result<Self, Error> {
        if num_samples == 0 {
            return Err(Error::InvalidSampleCount);
        }
        if !periods.is_finite() || periods <= 0.0 {
            return Err(Error::InvalidPeriods(periods));
        }

        Ok(Self {
            waveform,
            num_samples,
            periods,
        })
    }

    /// Sample every index of the window in order.
    pub fn samples(&self) -> Vec<Sample> {
        self.collect_from(0..self.num_samples)
    }
}

impl Signal<usize, Sample> for Oscillator {
    fn evaluate(&self, index: usize) -> Sample {
        self.waveform.sample(self.periods, index, self.num_samples)
    }
}

/// Generate `num_samples` samples of the given shape, spanning `periods` cycles.
pub fn generate(waveform: Waveform, num_samples: usize, periods: Periods) -> Result<Vec<Sample>, Error> {
    let oscillator = Oscillator::new(waveform, num_samples, periods)?;
    let samples = oscillator.samples();
    log::debug!("Generated {} samples of {waveform} over {periods} periods", samples.len());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generate_lengths_and_finiteness() {
        for waveform in Waveform::ALL {
            for &(num_samples, periods) in &[(1, 1.0), (7, 0.5), (128, 4.0), (1000, 3.7)] {
                let samples = generate(waveform, num_samples, periods).unwrap();
                assert_eq!(samples.len(), num_samples);
                assert!(samples.iter().all(|s| s.is_finite()));
            }
        }
    }

    #[test]
    fn test_sine_starts_at_zero() {
        for &(num_samples, periods) in &[(1, 1.0), (64, 2.0), (128, 4.0), (99, 0.3)] {
            assert_eq!(generate(Waveform::Sine, num_samples, periods).unwrap()[0], 0.0);
        }
    }

    #[test]
    fn test_sine_quarter_period() {
        let samples = generate(Waveform::Sine, 128, 4.0).unwrap();
        // One period is 32 samples.
        assert_relative_eq!(samples[8], 1.0, epsilon = 1e-12);
        assert_relative_eq!(samples[24], -1.0, epsilon = 1e-12);
        assert_relative_eq!(samples[32], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_square_is_exactly_plus_or_minus_one() {
        let samples = generate(Waveform::Square, 100, 3.3).unwrap();
        assert!(samples.iter().all(|&s| s == 1.0 || s == -1.0));

        // 8 samples per period: 4 high followed by 4 low, the midpoint going low.
        let samples = generate(Waveform::Square, 16, 2.0).unwrap();
        assert_eq!(
            samples,
            vec![1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0]
        );
    }

    #[test]
    fn test_sawtooth_range_and_ramps() {
        let samples = generate(Waveform::Sawtooth, 128, 4.0).unwrap();
        assert!(samples.iter().all(|&s| (-1.0..1.0).contains(&s)));
        assert_eq!(samples[0], -1.0);
        assert_eq!(samples[16], 0.0);

        // Rising everywhere except where a new period starts.
        for i in 1..samples.len() {
            if i % 32 == 0 {
                assert!(samples[i] < samples[i - 1]);
                assert_eq!(samples[i], -1.0);
            } else {
                assert!(samples[i] > samples[i - 1]);
            }
        }
    }

    #[test]
    fn test_invalid_windows_are_rejected() {
        assert!(matches!(generate(Waveform::Sine, 0, 4.0), Err(Error::InvalidSampleCount)));
        assert!(matches!(generate(Waveform::Square, 8, 0.0), Err(Error::InvalidPeriods(_))));
        assert!(matches!(generate(Waveform::Square, 8, -1.0), Err(Error::InvalidPeriods(_))));
        assert!(matches!(generate(Waveform::Sawtooth, 8, f64::NAN), Err(Error::InvalidPeriods(_))));
    }

    #[test]
    fn test_parse_waveform() {
        assert_eq!("sine".parse::<Waveform>().unwrap(), Waveform::Sine);
        assert_eq!(" Square ".parse::<Waveform>().unwrap(), Waveform::Square);
        assert_eq!("SAW".parse::<Waveform>().unwrap(), Waveform::Sawtooth);
        assert!(matches!("triangle".parse::<Waveform>(), Err(Error::InvalidShape(s)) if s == "triangle"));

        for waveform in Waveform::ALL {
            assert_eq!(waveform.to_string().parse::<Waveform>().unwrap(), waveform);
        }
    }

    #[test]
    fn test_sine_matches_left_to_right_angle() {
        for &(num_samples, periods) in &[(100, 3.7), (77, 2.3), (1000, 3.7)] {
            let samples = generate(Waveform::Sine, num_samples, periods).unwrap();
            for (i, sample) in samples.iter().enumerate() {
                let angle = 2.0 * std::f64::consts::PI * periods * i as f64 / num_samples as f64;
                assert_eq!(sample.to_bits(), angle.sin().to_bits());
            }
        }
    }

    #[test]
    fn test_oscillator_evaluates_by_index() {
        let oscillator = Oscillator::new(Waveform::Sawtooth, 4, 1.0).unwrap();
        assert_eq!(oscillator.evaluate(0), -1.0);
        assert_eq!(oscillator.evaluate(2), 0.0);
        assert_eq!(oscillator.samples(), vec![-1.0, -0.5, 0.0, 0.5]);
    }
}
