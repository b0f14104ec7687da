//! One-sided magnitude spectrum of a real signal.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::Error;
use crate::types::Sample;

/// Compute the one-sided magnitude spectrum of `signal`.
///
/// The transform runs over the whole signal with no padding, so bin `k` is exactly `k` cycles
/// per window. Only the first `len / 2` bins are kept. Every magnitude is divided by the signal
/// length and every bin except DC is doubled to account for the folded negative frequencies.
pub fn magnitude_spectrum(signal: &[Sample]) -> Result<Vec<Sample>, Error> {
    if signal.is_empty() {
        return Err(Error::EmptySignal);
    }

    let n = signal.len();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    let scale = 1.0 / n as f64;
    let magnitudes: Vec<Sample> = buffer[..n / 2]
        .iter()
        .enumerate()
        .map(|(bin, c)| {
            let magnitude = c.norm() * scale;
            if bin == 0 {
                magnitude
            } else {
                2.0 * magnitude
            }
        })
        .collect();

    log::debug!("Computed {} spectrum bins from {} samples", magnitudes.len(), n);
    Ok(magnitudes)
}

/// Index of the largest non-DC magnitude, the first one on ties.
///
/// Returns `None` if the spectrum has no bins besides DC.
pub fn peak_bin(spectrum: &[Sample]) -> Option<usize> {
    spectrum
        .iter()
        .enumerate()
        .skip(1)
        .fold(None, |best: Option<(usize, Sample)>, (bin, &magnitude)| match best {
            Some((_, best_magnitude)) if magnitude <= best_magnitude => best,
            _ => Some((bin, magnitude)),
        })
        .map(|(bin, _)| bin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillators::{generate, Waveform};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn mean(signal: &[Sample]) -> Sample {
        signal.iter().sum::<Sample>() / signal.len() as Sample
    }

    #[test]
    fn test_length_and_non_negative() {
        for n in [1, 2, 3, 7, 64, 100, 127, 128] {
            let signal = generate(Waveform::Sawtooth, n, 3.0).unwrap();
            let spectrum = magnitude_spectrum(&signal).unwrap();
            assert_eq!(spectrum.len(), n / 2);
            assert!(spectrum.iter().all(|&m| m >= 0.0));
        }
    }

    #[test]
    fn test_dc_bin_is_absolute_mean() {
        let signals = [
            vec![5.0, 5.0, 5.0, 5.0],
            vec![-2.0, -3.0, -1.0, -2.0, -4.0, -0.5],
            generate(Waveform::Sawtooth, 128, 4.0).unwrap(),
            generate(Waveform::Square, 90, 2.5).unwrap(),
        ];
        for signal in &signals {
            let spectrum = magnitude_spectrum(signal).unwrap();
            assert_abs_diff_eq!(spectrum[0], mean(signal).abs(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sine_peak_is_at_period_count() {
        let signal = generate(Waveform::Sine, 128, 4.0).unwrap();
        let spectrum = magnitude_spectrum(&signal).unwrap();

        assert_eq!(peak_bin(&spectrum), Some(4));
        // Doubling recovers the unit amplitude of the sine.
        assert_relative_eq!(spectrum[4], 1.0, epsilon = 1e-9);
        for (bin, &magnitude) in spectrum.iter().enumerate() {
            if bin != 4 {
                assert_abs_diff_eq!(magnitude, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_square_has_odd_harmonics() {
        let signal = generate(Waveform::Square, 128, 4.0).unwrap();
        let spectrum = magnitude_spectrum(&signal).unwrap();

        assert_eq!(peak_bin(&spectrum), Some(4));
        assert!(spectrum[12] > 0.1);
        assert!(spectrum[20] > 0.1);
        assert_abs_diff_eq!(spectrum[8], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(spectrum[16], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_odd_length_without_padding() {
        // 3 cycles over 99 samples only lands exactly on bin 3 if nothing is padded.
        let signal = generate(Waveform::Sine, 99, 3.0).unwrap();
        let spectrum = magnitude_spectrum(&signal).unwrap();
        assert_eq!(spectrum.len(), 49);
        assert_eq!(peak_bin(&spectrum), Some(3));
        assert_relative_eq!(spectrum[3], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_signal_is_rejected() {
        assert!(matches!(magnitude_spectrum(&[]), Err(Error::EmptySignal)));
    }

    #[test]
    fn test_peak_bin() {
        assert_eq!(peak_bin(&[]), None);
        assert_eq!(peak_bin(&[10.0]), None);
        assert_eq!(peak_bin(&[10.0, 0.5, 2.0, 1.0]), Some(2));
        // Ties go to the lowest bin, DC never counts.
        assert_eq!(peak_bin(&[9.0, 1.0, 3.0, 3.0]), Some(2));
        assert_eq!(peak_bin(&[9.0, 0.0, 0.0]), Some(1));
    }
}
