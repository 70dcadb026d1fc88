//! Cumulative trapezoidal integration.
//!
//! The running integral of acceleration (in g) over time is the velocity
//! change accumulated so far. Mean acceleration over any window then falls
//! out of a single difference of two integral values.

use crate::config::Extrapolation;
use crate::math::interp::interpolate_from;

/// Running trapezoidal integral of `values` over `time`.
///
/// The output has the same length as the input and starts at zero:
/// `out[i] = out[i-1] + (values[i-1] + values[i]) / 2 * (time[i] - time[i-1])`.
#[must_use]
pub fn cumulative_trapezoid(time: &[f64], values: &[f64]) -> Vec<f64> {
    debug_assert_eq!(time.len(), values.len());

    let mut out = Vec::with_capacity(time.len());
    if time.is_empty() {
        return out;
    }

    let mut acc = 0.0;
    out.push(acc);
    for (tw, vw) in time.windows(2).zip(values.windows(2)) {
        acc += 0.5 * (vw[0] + vw[1]) * (tw[1] - tw[0]);
        out.push(acc);
    }
    out
}

/// Cumulative integral paired with its time basis.
///
/// Read-only once built; `integral[0]` is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralSeries {
    time: Vec<f64>,
    integral: Vec<f64>,
}

impl IntegralSeries {
    /// Integrate `values` sampled at `time`.
    ///
    /// `time` must be strictly increasing and hold at least one sample.
    #[must_use]
    pub fn new(time: &[f64], values: &[f64]) -> Self {
        Self {
            time: time.to_vec(),
            integral: cumulative_trapezoid(time, values),
        }
    }

    /// Sample times (s).
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Integral at each sample time.
    #[must_use]
    pub fn integral(&self) -> &[f64] {
        &self.integral
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time of the last sample.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Integral value at `t`, searching from sample `start` onward.
    ///
    /// Returns `None` when `t` lies past the last sample and the policy is
    /// [`Extrapolation::Reject`].
    #[must_use]
    pub fn value_from(&self, start: usize, t: f64, extrapolation: Extrapolation) -> Option<f64> {
        if extrapolation == Extrapolation::Reject && t > self.end_time() {
            return None;
        }
        Some(interpolate_from(&self.time, &self.integral, start, t))
    }
}
