//! Piecewise-linear interpolation over a sampled curve.
//!
//! Abscissae must be strictly increasing. Queries outside the sampled range
//! are clamped to the first or last ordinate.

/// Interpolate `ys` over `xs` at `x`, searching only from index `start`.
///
/// Returns `ys[start]` for `x <= xs[start]` and the last ordinate for
/// `x >= xs[last]`. `xs` and `ys` must have equal, non-zero length.
///
/// Callers that query ascending positions can pass the index of a sample
/// known to lie at or before `x` to shorten the search. If `x` lies before
/// `xs[start]` the result is clamped to `ys[start]`.
#[must_use]
pub fn interpolate_from(xs: &[f64], ys: &[f64], start: usize, x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(start < xs.len());

    let last = xs.len() - 1;
    if x <= xs[start] {
        return ys[start];
    }
    if x >= xs[last] {
        return ys[last];
    }

    // First index with xs[hi] > x; guaranteed in (start, last].
    let hi = start + xs[start..].partition_point(|&t| t <= x);
    let lo = hi - 1;

    let x0 = xs[lo];
    let x1 = xs[hi];
    let frac = (x - x0) / (x1 - x0);
    ys[lo] + (ys[hi] - ys[lo]) * frac
}
