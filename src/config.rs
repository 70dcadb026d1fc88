//! Configuration for HIC computation.
//!
//! This module provides the [`HicConfig`] struct which centralizes every
//! tunable of the calculation: the window bounds, the window granularity,
//! the unit system, and the policies for coarse sampling and for windows
//! that run past the end of the signal.
//!
//! # Example
//!
//! ```
//! use head_injury_criterion::{CoarseSamplingPolicy, HicConfig};
//!
//! // HIC36 in SI units
//! let config = HicConfig::default();
//!
//! // HIC15 on a curve in mm/s², continuing on coarse data with a warning
//! let config = HicConfig::hic15()
//!     .with_units(head_injury_criterion::UnitSystem::MillimetreSecond)
//!     .with_coarse_sampling(CoarseSamplingPolicy::Warn);
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HicError, Result};
use crate::units::UnitSystem;

/// Configuration for HIC computation.
///
/// # Window Parameters
///
/// - `tmin`/`tmax`: Bounds on the window duration `t2 - t1`, in seconds.
/// - `window_steps`: Number of candidate durations spread linearly over
///   `[tmin, tmax]`. Finer granularity trades runtime for precision.
///
/// # Sampling Guard
///
/// The largest gap between consecutive samples must not exceed
/// `max_gap_ratio * tmin`. What happens when it does is decided by
/// `coarse_sampling`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HicConfig {
    /// Shortest window duration (s).
    pub tmin: f64,

    /// Longest window duration (s). HIC36 uses 0.036, HIC15 uses 0.015.
    pub tmax: f64,

    /// Number of window durations evaluated per start sample.
    pub window_steps: usize,

    /// Units of the incoming time and acceleration arrays.
    pub units: UnitSystem,

    /// Largest allowed sample gap as a fraction of `tmin`.
    pub max_gap_ratio: f64,

    /// What to do when the sample gap guard trips.
    pub coarse_sampling: CoarseSamplingPolicy,

    /// How to treat windows whose end lies past the last sample.
    pub extrapolation: Extrapolation,
}

/// Handling of signals whose sample spacing exceeds the gap guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoarseSamplingPolicy {
    /// Fail with [`HicError::CoarseSampling`].
    #[default]
    Reject,
    /// Log a warning, flag the sampling report and compute anyway.
    Warn,
}

/// Boundary policy for windows ending after the last sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Extrapolation {
    /// Hold the final integral value past the last sample.
    #[default]
    Clamp,
    /// Skip any window whose end lies past the last sample.
    Reject,
}

impl Default for HicConfig {
    fn default() -> Self {
        Self {
            tmin: 0.003,
            tmax: 0.036,
            window_steps: 100,
            units: UnitSystem::Si,
            max_gap_ratio: 0.2,
            coarse_sampling: CoarseSamplingPolicy::Reject,
            extrapolation: Extrapolation::Clamp,
        }
    }
}

impl HicConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !is_positive_finite(self.tmin) {
            return Err(HicError::invalid_config("tmin must be positive"));
        }
        if !self.tmax.is_finite() || self.tmax <= self.tmin {
            return Err(HicError::invalid_config("tmax must be greater than tmin"));
        }
        if self.window_steps < 2 {
            return Err(HicError::invalid_config(
                "window_steps must be at least 2",
            ));
        }
        if !is_positive_finite(self.units.gravity()) {
            return Err(HicError::invalid_config("gravity must be positive"));
        }
        if !is_positive_finite(self.units.seconds_per_time_unit()) {
            return Err(HicError::invalid_config(
                "seconds_per_time_unit must be positive",
            ));
        }
        if !is_positive_finite(self.max_gap_ratio) {
            return Err(HicError::invalid_config(
                "max_gap_ratio must be positive",
            ));
        }
        Ok(())
    }

    /// Largest allowed sample gap in seconds.
    #[must_use]
    pub fn max_sample_gap(&self) -> f64 {
        self.max_gap_ratio * self.tmin
    }

    /// HIC36: windows from 3 ms up to 36 ms.
    #[must_use]
    pub fn hic36() -> Self {
        Self::default()
    }

    /// HIC15: windows from 3 ms up to 15 ms.
    #[must_use]
    pub fn hic15() -> Self {
        Self {
            tmax: 0.015,
            ..Self::default()
        }
    }

    /// Curves exported by Abaqus/Explicit models in mm and s.
    #[must_use]
    pub fn abaqus() -> Self {
        Self {
            units: UnitSystem::MillimetreSecond,
            ..Self::default()
        }
    }

    /// Set the window bounds.
    #[must_use]
    pub const fn with_window(mut self, tmin: f64, tmax: f64) -> Self {
        self.tmin = tmin;
        self.tmax = tmax;
        self
    }

    /// Set the number of window durations.
    #[must_use]
    pub const fn with_window_steps(mut self, steps: usize) -> Self {
        self.window_steps = steps;
        self
    }

    /// Set the unit system.
    #[must_use]
    pub const fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Set the gap guard ratio.
    #[must_use]
    pub const fn with_max_gap_ratio(mut self, ratio: f64) -> Self {
        self.max_gap_ratio = ratio;
        self
    }

    /// Set the coarse sampling policy.
    #[must_use]
    pub const fn with_coarse_sampling(mut self, policy: CoarseSamplingPolicy) -> Self {
        self.coarse_sampling = policy;
        self
    }

    /// Set the extrapolation policy.
    #[must_use]
    pub const fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }
}

fn is_positive_finite(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
