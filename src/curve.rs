//! Named acceleration curves and their HIC annotations.
//!
//! A host plot usually holds several acceleration-vs-time curves. This
//! module runs the calculation on each of them independently and builds the
//! step-shaped HIC curve a host can draw next to its source.
//!
//! Annotation names are `"<source> HIC-<n>"` with the smallest `n >= 1`
//! that collides with neither an input curve nor an earlier annotation of
//! the same batch.
//!
//! # Example
//!
//! ```
//! use head_injury_criterion::{compute_hic_batch, AccelerationCurve, HicConfig, UnitSystem};
//!
//! let time: Vec<f64> = (0..300).map(|i| f64::from(i) * 1e-4).collect();
//! let head: Vec<f64> = time.iter().map(|t| 50.0 * (t * 200.0).sin()).collect();
//! let quiet = vec![0.0; time.len()];
//!
//! let curves = [
//!     AccelerationCurve::new("head", &time, &head).with_legend_label("Head CG"),
//!     AccelerationCurve::new("quiet", &time, &quiet),
//! ];
//! let config = HicConfig::default().with_units(UnitSystem::StandardGravity);
//!
//! let outcomes = compute_hic_batch(&curves, &config);
//! assert_eq!(outcomes.len(), 2);
//!
//! let annotation = outcomes[0].annotation().unwrap();
//! assert_eq!(annotation.name, "head HIC-1");
//! assert_eq!(annotation.legend_label, "Head CG HIC");
//! ```

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calculator::compute_hic_detailed;
use crate::config::HicConfig;
use crate::error::Result;
use crate::result::HicReport;

/// Borrowed acceleration-vs-time curve.
#[derive(Debug, Clone, Copy)]
pub struct AccelerationCurve<'a> {
    /// Curve name in the host.
    pub name: &'a str,
    /// Legend label in the host; the name is used when absent.
    pub legend_label: Option<&'a str>,
    /// Description in the host; the name is used when absent.
    pub description: Option<&'a str>,
    /// Sample times.
    pub time: &'a [f64],
    /// Acceleration samples.
    pub acceleration: &'a [f64],
}

impl<'a> AccelerationCurve<'a> {
    /// Create a curve view.
    #[must_use]
    pub const fn new(name: &'a str, time: &'a [f64], acceleration: &'a [f64]) -> Self {
        Self {
            name,
            legend_label: None,
            description: None,
            time,
            acceleration,
        }
    }

    /// Set the legend label.
    #[must_use]
    pub const fn with_legend_label(mut self, label: &'a str) -> Self {
        self.legend_label = Some(label);
        self
    }

    /// Set the description.
    #[must_use]
    pub const fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Curve marking the critical HIC window of a source curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HicAnnotation {
    /// Name for the new curve, unique within its batch.
    pub name: String,
    /// Legend label for the new curve.
    pub legend_label: String,
    /// Where the curve came from.
    pub source_description: String,
    /// Step points `(t, value)`.
    pub points: [[f64; 2]; 4],
}

/// Outcome of the calculation on one named curve.
#[derive(Debug, Clone)]
pub struct CurveHic {
    /// Name of the source curve.
    pub name: String,
    /// Report or the error raised for this curve.
    pub outcome: Result<HicReport>,
    annotation: Option<HicAnnotation>,
}

impl CurveHic {
    /// Whether the calculation succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Annotation curve for a successful calculation.
    #[must_use]
    pub fn annotation(&self) -> Option<&HicAnnotation> {
        self.annotation.as_ref()
    }
}

/// Compute HIC for every curve.
///
/// Curves are processed independently; a failure on one does not affect the
/// others. Outcomes are returned in input order.
#[must_use]
pub fn compute_hic_batch(curves: &[AccelerationCurve<'_>], config: &HicConfig) -> Vec<CurveHic> {
    let mut taken: HashSet<String> = curves.iter().map(|c| c.name.to_string()).collect();

    curves
        .iter()
        .map(|curve| {
            let outcome = compute_hic_detailed(curve.time, curve.acceleration, config);
            let annotation = match &outcome {
                Ok(report) => {
                    tracing::info!(curve = curve.name, "{}", report.result);
                    let name = unique_name(curve.name, &mut taken);
                    Some(build_annotation(curve, name, report))
                }
                Err(err) => {
                    tracing::warn!(curve = curve.name, "HIC not computed: {err}");
                    None
                }
            };
            CurveHic {
                name: curve.name.to_string(),
                outcome,
                annotation,
            }
        })
        .collect()
}

/// First `"<source> HIC-<n>"` not yet in `taken`; the result is reserved.
fn unique_name(source: &str, taken: &mut HashSet<String>) -> String {
    let mut n = 1_usize;
    loop {
        let candidate = format!("{source} HIC-{n}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn build_annotation(
    curve: &AccelerationCurve<'_>,
    name: String,
    report: &HicReport,
) -> HicAnnotation {
    let legend = curve.legend_label.unwrap_or(curve.name);
    let description = curve.description.unwrap_or(curve.name);
    HicAnnotation {
        name,
        legend_label: format!("{legend} HIC"),
        source_description: format!("HIC estimated from {description}"),
        points: report.result.annotation_points(),
    }
}
