//! Shared type definitions.

/// A single amplitude value of a signal or a spectrum.
pub type Sample = f64;

/// A number of full cycles spanning a sample window.
pub type Periods = f64;

/// A fractional position within one cycle, in `[0, 1)`.
pub type Phase = f64;
