//! HIC result data structures.
//!
//! [`HicResult`] is the `(HIC, t1, t2)` triple handed back to the caller.
//! [`HicReport`] pairs it with the sampling diagnostics gathered while the
//! signal was prepared.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::signal::SamplingReport;

/// Peak HIC and the window that produced it.
///
/// `t2 - t1` lies within `[tmin, tmax]` of the configuration used, except
/// for the no-signal value [`HicResult::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HicResult {
    /// Head Injury Criterion (dimensionless, >= 0).
    pub hic: f64,
    /// Window start (s).
    pub t1: f64,
    /// Window end (s).
    pub t2: f64,
}

impl HicResult {
    /// Returned when no window carries a positive velocity change.
    pub const NONE: Self = Self {
        hic: 0.0,
        t1: 0.0,
        t2: 0.0,
    };

    /// Create a result.
    #[must_use]
    pub const fn new(hic: f64, t1: f64, t2: f64) -> Self {
        Self { hic, t1, t2 }
    }

    /// Window duration `t2 - t1` (s).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.t2 - self.t1
    }

    /// Window midpoint (s).
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.t1 + self.t2)
    }

    /// Whether this is the no-signal value.
    #[must_use]
    pub fn is_no_signal(&self) -> bool {
        self.hic == 0.0
    }

    /// Step curve marking the critical window at height HIC.
    ///
    /// Points are `(t1, 0)`, `(t1, HIC)`, `(t2, HIC)`, `(t2, 0)`, ready to be
    /// plotted on the time axis of the source curve.
    #[must_use]
    pub fn annotation_points(&self) -> [[f64; 2]; 4] {
        [
            [self.t1, 0.0],
            [self.t1, self.hic],
            [self.t2, self.hic],
            [self.t2, 0.0],
        ]
    }

    /// As a tuple `(hic, t1, t2)`.
    #[must_use]
    pub const fn to_tuple(self) -> (f64, f64, f64) {
        (self.hic, self.t1, self.t2)
    }
}

impl fmt::Display for HicResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HIC={}, t1={}, t2={}", self.hic, self.t1, self.t2)
    }
}

impl From<HicResult> for (f64, f64, f64) {
    fn from(result: HicResult) -> Self {
        result.to_tuple()
    }
}

/// Result plus diagnostics from a single computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HicReport {
    /// Peak HIC and its window.
    pub result: HicResult,
    /// Sampling density of the input.
    pub sampling: SamplingReport,
    /// Number of window durations evaluated per start sample.
    pub window_steps: usize,
}

impl HicReport {
    /// Whether the input tripped the coarse sampling guard.
    ///
    /// Only possible under [`crate::CoarseSamplingPolicy::Warn`].
    #[must_use]
    pub fn is_coarse(&self) -> bool {
        self.sampling.coarse
    }
}
