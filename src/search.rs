//! Windowed extremum search.
//!
//! For every sample taken as window start `t1`, every candidate duration `d`
//! in `[tmin, tmax]` gives an end `t2 = t1 + d`. The mean acceleration over
//! the window is the integral difference divided by `d`, and the window's
//! score is
//!
//! ```text
//! HIC(t1, t2) = d * ((I(t2) - I(t1)) / d)^2.5
//! ```
//!
//! Both polarities of the integral difference are tried so that positive
//! and negative pulses score alike. Only strictly positive differences are
//! admitted because the fractional power is undefined for negative bases.
//!
//! # Cost
//!
//! `O(N * K * log N)` for `N` samples and `K` window durations.

use crate::config::Extrapolation;
use crate::math::integrate::IntegralSeries;
use crate::result::HicResult;

/// Exponent applied to the window-averaged acceleration.
pub const HIC_EXPONENT: f64 = 2.5;

/// Candidate window durations spread linearly over `[tmin, tmax]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDurations {
    durations: Vec<f64>,
}

impl WindowDurations {
    /// Build `steps` durations from `tmin` to `tmax` inclusive.
    ///
    /// The first value is exactly `tmin` and the last exactly `tmax`.
    /// Callers validate `0 < tmin < tmax` and `steps >= 2` beforehand.
    #[must_use]
    pub fn linspace(tmin: f64, tmax: f64, steps: usize) -> Self {
        debug_assert!(steps >= 2);
        let last = steps - 1;
        let span = tmax - tmin;
        let durations = (0..steps)
            .map(|k| {
                if k == last {
                    tmax
                } else {
                    tmin + span * (k as f64 / last as f64)
                }
            })
            .collect();
        Self { durations }
    }

    /// Durations in ascending order (s).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.durations
    }

    /// Number of durations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Whether there are no durations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Shortest duration.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.durations.first().copied().unwrap_or(0.0)
    }

    /// Longest duration.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.durations.last().copied().unwrap_or(0.0)
    }
}

/// Score of a window of length `duration` whose integral difference is `delta`.
///
/// Returns `None` unless `delta` is strictly positive.
#[must_use]
pub fn window_score(duration: f64, delta: f64) -> Option<f64> {
    if delta > 0.0 {
        Some(duration * (delta / duration).powf(HIC_EXPONENT))
    } else {
        None
    }
}

/// Find the window with the largest HIC.
///
/// Candidates are visited by ascending `t1`, the positive polarity before
/// the negative one, and ascending duration. The running best is replaced
/// only by a strictly greater score, so ties keep the first candidate in
/// that order.
///
/// Returns [`HicResult::NONE`] when no window has a positive integral
/// difference in either polarity, or when either input is empty.
#[must_use]
pub fn search_max_hic(
    integral: &IntegralSeries,
    durations: &WindowDurations,
    extrapolation: Extrapolation,
) -> HicResult {
    if integral.is_empty() || durations.is_empty() {
        return HicResult::NONE;
    }

    let time = integral.time();
    let values = integral.integral();

    let mut best = HicResult::NONE;
    let mut deltas: Vec<Option<f64>> = Vec::with_capacity(durations.len());

    for (i, (&t1, &i1)) in time.iter().zip(values.iter()).enumerate() {
        deltas.clear();
        deltas.extend(durations.as_slice().iter().map(|&d| {
            integral
                .value_from(i, t1 + d, extrapolation)
                .map(|i2| i2 - i1)
        }));

        for polarity in [1.0, -1.0] {
            let candidate = best_window(durations.as_slice(), &deltas, polarity);
            if let Some((score, d)) = candidate {
                if score > best.hic {
                    best = HicResult::new(score, t1, t1 + d);
                }
            }
        }
    }

    best
}

/// Highest-scoring `(score, duration)` for one polarity, first maximum wins.
fn best_window(durations: &[f64], deltas: &[Option<f64>], polarity: f64) -> Option<(f64, f64)> {
    let mut best: Option<(f64, f64)> = None;
    for (&d, &delta) in durations.iter().zip(deltas.iter()) {
        let Some(delta) = delta else { continue };
        let Some(score) = window_score(d, polarity * delta) else {
            continue;
        };
        let improves = match best {
            Some((s, _)) => score > s,
            None => true,
        };
        if improves {
            best = Some((score, d));
        }
    }
    best
}
