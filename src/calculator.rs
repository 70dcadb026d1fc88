//! Public HIC entry points.
//!
//! # Pipeline Overview
//!
//! 1. Validate configuration and samples, convert to seconds and g
//! 2. Check sampling density against `max_gap_ratio * tmin`
//! 3. Integrate acceleration (trapezoidal rule)
//! 4. Search all windows in `[tmin, tmax]`, both polarities
//!
//! # Scaling
//!
//! The search evaluates `N * window_steps * 2` candidate windows for `N`
//! samples, each with a binary-search interpolation. Callers feeding very
//! long records should trim them to the impact event or lower
//! `window_steps`.

use crate::config::HicConfig;
use crate::error::Result;
use crate::math::integrate::IntegralSeries;
use crate::result::{HicReport, HicResult};
use crate::search::{search_max_hic, WindowDurations};
use crate::signal::prepare_signal;

/// Compute HIC from acceleration samples.
///
/// # Arguments
///
/// * `time` - Sample times, strictly increasing, in the unit of `config.units`
/// * `acceleration` - Acceleration at each sample, in the unit of `config.units`
/// * `config` - Window bounds, granularity, units and policies
///
/// # Returns
///
/// The peak `(HIC, t1, t2)` with `t1`/`t2` in seconds, or
/// [`HicResult::NONE`] when no window carries a positive velocity change.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid (`tmin <= 0`, `tmax <= tmin`, ...)
/// - Fewer than 2 samples are provided or the array lengths differ
/// - Time is not strictly increasing or a sample is not finite
/// - Sampling is too coarse and the policy is
///   [`crate::CoarseSamplingPolicy::Reject`]
///
/// # Example
///
/// ```
/// use head_injury_criterion::{compute_hic, HicConfig, UnitSystem};
///
/// // 80 g half-sine over 10 ms, sampled at 10 kHz.
/// let time: Vec<f64> = (0..=400).map(|i| f64::from(i) * 1e-4).collect();
/// let accel: Vec<f64> = time
///     .iter()
///     .map(|&t| if t <= 0.01 { 80.0 * (std::f64::consts::PI * t / 0.01).sin() } else { 0.0 })
///     .collect();
///
/// let config = HicConfig::hic15().with_units(UnitSystem::StandardGravity);
/// let result = compute_hic(&time, &accel, &config)?;
/// assert!(result.hic > 0.0);
/// assert!(result.duration() <= 0.015 + 1e-12);
/// # Ok::<(), head_injury_criterion::HicError>(())
/// ```
pub fn compute_hic(time: &[f64], acceleration: &[f64], config: &HicConfig) -> Result<HicResult> {
    compute_hic_detailed(time, acceleration, config).map(|report| report.result)
}

/// Compute HIC and return it with sampling diagnostics.
///
/// Identical to [`compute_hic`] but also reports the measured sample gap,
/// which is how callers using [`crate::CoarseSamplingPolicy::Warn`] find
/// out that the guard tripped.
///
/// # Errors
///
/// Same as [`compute_hic`].
pub fn compute_hic_detailed(
    time: &[f64],
    acceleration: &[f64],
    config: &HicConfig,
) -> Result<HicReport> {
    let prepared = prepare_signal(time, acceleration, config)?;
    let series = &prepared.series;

    let integral = IntegralSeries::new(series.time(), series.acceleration());
    let durations = WindowDurations::linspace(config.tmin, config.tmax, config.window_steps);

    tracing::debug!(
        samples = series.len(),
        span = series.duration(),
        windows = durations.len(),
        shortest = durations.min(),
        longest = durations.max(),
        "searching HIC windows"
    );

    let result = search_max_hic(&integral, &durations, config.extrapolation);

    if result.is_no_signal() {
        tracing::debug!("no window with positive velocity change");
    } else {
        tracing::debug!(hic = result.hic, t1 = result.t1, t2 = result.t2, "HIC found");
    }

    Ok(HicReport {
        result,
        sampling: prepared.sampling,
        window_steps: durations.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoarseSamplingPolicy;
    use crate::error::{ErrorKind, HicError};
    use crate::units::UnitSystem;
    use approx::assert_relative_eq;

    fn g_config() -> HicConfig {
        HicConfig::default().with_units(UnitSystem::StandardGravity)
    }

    fn half_sine(n: usize, dt: f64, peak: f64, width: f64) -> (Vec<f64>, Vec<f64>) {
        let time: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
        let accel = time
            .iter()
            .map(|&t| {
                if t <= width {
                    peak * (std::f64::consts::PI * t / width).sin()
                } else {
                    0.0
                }
            })
            .collect();
        (time, accel)
    }

    #[test]
    fn test_zero_signal() {
        let time: Vec<f64> = (0..200).map(|i| i as f64 * 1e-4).collect();
        let accel = vec![0.0; 200];
        let result = compute_hic(&time, &accel, &HicConfig::default()).unwrap();
        assert_eq!(result, HicResult::NONE);
    }

    #[test]
    fn test_unit_systems_agree() {
        let (time, accel_g) = half_sine(600, 1e-4, 60.0, 0.012);
        // The pulse is symmetric, so mirrored windows can tie; compare scores only.
        let reference = compute_hic(&time, &accel_g, &g_config()).unwrap();

        let accel_mm: Vec<f64> = accel_g.iter().map(|a| a * 9810.0).collect();
        let in_mm = compute_hic(&time, &accel_mm, &HicConfig::abaqus()).unwrap();
        assert_relative_eq!(in_mm.hic, reference.hic, max_relative = 1e-9);

        let time_ms: Vec<f64> = time.iter().map(|t| t * 1e3).collect();
        let accel_mm_ms: Vec<f64> = accel_g.iter().map(|a| a * 0.00981).collect();
        let config = HicConfig::default().with_units(UnitSystem::MillimetreMillisecond);
        let in_ms = compute_hic(&time_ms, &accel_mm_ms, &config).unwrap();
        assert_relative_eq!(in_ms.hic, reference.hic, max_relative = 1e-6);
    }

    #[test]
    fn test_window_bounds_respected() {
        let (time, accel) = half_sine(1000, 1e-4, 120.0, 0.05);
        let config = g_config().with_window(0.003, 0.015);
        let result = compute_hic(&time, &accel, &config).unwrap();

        assert!(result.hic > 0.0);
        assert!(result.duration() >= 0.003 - 1e-12);
        assert!(result.duration() <= 0.015 + 1e-12);
        assert!(result.t1 <= result.t2);
    }

    #[test]
    fn test_detailed_report() {
        let (time, accel) = half_sine(300, 1e-4, 50.0, 0.01);
        let report = compute_hic_detailed(&time, &accel, &g_config()).unwrap();

        assert_eq!(report.sampling.samples, 300);
        assert_eq!(report.window_steps, 100);
        assert!(!report.is_coarse());
        assert_eq!(report.result, compute_hic(&time, &accel, &g_config()).unwrap());
    }

    #[test]
    fn test_coarse_policy() {
        let (time, accel) = half_sine(40, 1e-3, 50.0, 0.02);

        let err = compute_hic(&time, &accel, &g_config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CoarseSampling);

        let config = g_config().with_coarse_sampling(CoarseSamplingPolicy::Warn);
        let report = compute_hic_detailed(&time, &accel, &config).unwrap();
        assert!(report.is_coarse());
        assert!(report.result.hic > 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        let (time, accel) = half_sine(100, 1e-4, 50.0, 0.005);

        for config in [
            g_config().with_window(0.0, 0.036),
            g_config().with_window(0.01, 0.01),
            g_config().with_window(0.02, 0.01),
        ] {
            let err = compute_hic(&time, &accel, &config).unwrap_err();
            assert!(matches!(err, HicError::InvalidConfig(_)));
        }

        let err = compute_hic(&[0.0], &[1.0], &g_config()).unwrap_err();
        assert!(err.is_validation());
    }
}
