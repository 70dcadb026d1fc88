//! Signal preparation.
//!
//! Turns caller-supplied time and acceleration arrays into a validated
//! [`SampleSeries`] in seconds and standard gravity, and checks that the
//! sampling is fine enough to resolve the shortest window.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{CoarseSamplingPolicy, HicConfig};
use crate::error::{HicError, Result};

/// Minimum number of samples required for integration.
pub const MIN_SAMPLES: usize = 2;

/// Validated acceleration samples in seconds and g.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    time: Vec<f64>,
    acceleration: Vec<f64>,
}

impl SampleSeries {
    /// Sample times (s), strictly increasing.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Acceleration in multiples of standard gravity.
    #[must_use]
    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false for a validated series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Total covered time span (s).
    #[must_use]
    pub fn duration(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.time[self.time.len() - 1] - self.time[0]
    }
}

/// Sampling density measured against the gap guard.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingReport {
    /// Number of samples.
    pub samples: usize,
    /// Largest gap between consecutive samples (s).
    pub max_gap: f64,
    /// Largest allowed gap (s).
    pub gap_limit: f64,
    /// Whether `max_gap` exceeds `gap_limit`.
    pub coarse: bool,
}

/// A prepared signal together with its sampling report.
#[derive(Debug, Clone)]
pub struct PreparedSignal {
    /// Validated samples.
    pub series: SampleSeries,
    /// Sampling density.
    pub sampling: SamplingReport,
}

/// Validate and normalize raw samples.
///
/// Time is converted to seconds and acceleration to g using `config.units`.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The arrays differ in length or hold fewer than 2 samples
/// - Any sample is NaN or infinite
/// - Time is not strictly increasing
/// - The largest sample gap exceeds the guard and the policy is
///   [`CoarseSamplingPolicy::Reject`]
pub fn prepare_signal(
    time: &[f64],
    acceleration: &[f64],
    config: &HicConfig,
) -> Result<PreparedSignal> {
    config.validate()?;
    validate_inputs(time, acceleration)?;

    let time_scale = config.units.seconds_per_time_unit();
    let gravity = config.units.gravity();

    let series = SampleSeries {
        time: time.iter().map(|&t| t * time_scale).collect(),
        acceleration: acceleration.iter().map(|&a| a / gravity).collect(),
    };

    // Scaling can collapse neighbouring samples onto one value.
    if let Some(index) = first_non_increasing(&series.time) {
        return Err(HicError::NonMonotonicTime { index });
    }

    let max_gap = series
        .time
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(0.0_f64, f64::max);
    let gap_limit = config.max_sample_gap();
    let coarse = max_gap > gap_limit;

    if coarse {
        match config.coarse_sampling {
            CoarseSamplingPolicy::Reject => {
                return Err(HicError::coarse_sampling(max_gap, gap_limit));
            }
            CoarseSamplingPolicy::Warn => {
                tracing::warn!(
                    max_gap,
                    gap_limit,
                    "sampling too coarse for tmin={} s; HIC may be underestimated",
                    config.tmin
                );
            }
        }
    }

    Ok(PreparedSignal {
        sampling: SamplingReport {
            samples: series.len(),
            max_gap,
            gap_limit,
            coarse,
        },
        series,
    })
}

fn validate_inputs(time: &[f64], acceleration: &[f64]) -> Result<()> {
    if time.len() != acceleration.len() {
        return Err(HicError::length_mismatch(time.len(), acceleration.len()));
    }
    if time.len() < MIN_SAMPLES {
        return Err(HicError::too_few_samples(MIN_SAMPLES, time.len()));
    }
    if let Some(index) = time
        .iter()
        .zip(acceleration.iter())
        .position(|(t, a)| !t.is_finite() || !a.is_finite())
    {
        return Err(HicError::NonFinite { index });
    }
    if let Some(index) = first_non_increasing(time) {
        return Err(HicError::NonMonotonicTime { index });
    }
    Ok(())
}

/// Index of the first sample that does not advance past its predecessor.
fn first_non_increasing(time: &[f64]) -> Option<usize> {
    time.windows(2).position(|w| w[1] <= w[0]).map(|i| i + 1)
}
