//! Basic shape functions, evaluated per sample.
//!
//! Shapes are sampled at index `index` of a window of `num_samples` samples spanning `periods`
//! cycles. The square and sawtooth shapes only look at the phase, the fractional part of the
//! cycles elapsed at that sample.

use std::f64::consts::PI;

use crate::types::{Periods, Phase, Sample};

/// The number of cycles elapsed at sample `index` of a window of `num_samples` samples spanning
/// `periods` cycles.
///
/// `num_samples` must be non-zero, callers validate it before sampling.
pub fn cycles(periods: Periods, index: usize, num_samples: usize) -> f64 {
    periods * index as f64 / num_samples as f64
}

/// The position within the current cycle, in `[0, 1)`.
pub fn phase(cycles: f64) -> Phase {
    cycles.rem_euclid(1.0)
}

/// Generate a sine wave at sample `index` of a window of `num_samples` samples spanning `periods`
/// cycles.
///
/// The angle is accumulated as `2π · periods · index / num_samples`, left to right.
pub fn sine_wave(periods: Periods, index: usize, num_samples: usize) -> Sample {
    f64::sin(2.0 * PI * periods * index as f64 / num_samples as f64)
}

/// Generate a square wave at the given phase: high for the first half of the cycle, low for the
/// second. A phase of exactly one half is low.
pub fn square_wave(phase: Phase) -> Sample {
    if phase < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Generate a sawtooth wave at the given phase, rising from -1 at the start of the cycle towards
/// +1 at its end.
pub fn saw_wave(phase: Phase) -> Sample {
    2.0 * phase - 1.0
}
