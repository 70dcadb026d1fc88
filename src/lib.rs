//! Head Injury Criterion Library
//!
//! Computes the Head Injury Criterion (HIC) from a sampled head
//! acceleration signal.
//!
//! HIC is the largest value, over every window `[t1, t2]` whose duration lies
//! in `[tmin, tmax]`, of
//!
//! ```text
//! (t2 - t1) * (1 / (t2 - t1) * ∫ a(t) dt)^2.5      (a in g, t in s)
//! ```
//!
//! # Features
//!
//! - **Exact polarity handling**: positive and negative pulses score alike
//! - **Unit systems**: SI, mm/s, mm/ms, ft/s or acceleration already in g
//! - **Explicit sampling policy**: reject or warn on coarse sampling
//! - **Host-friendly output**: step curve annotations for plotting
//!
//! # Quick Start
//!
//! ```
//! use head_injury_criterion::{compute_hic, HicConfig, UnitSystem};
//!
//! let time: Vec<f64> = (0..500).map(|i| f64::from(i) * 1e-4).collect();
//! let accel: Vec<f64> = time
//!     .iter()
//!     .map(|&t| if (0.01..0.02).contains(&t) { 60.0 } else { 0.0 })
//!     .collect();
//!
//! let config = HicConfig::hic36().with_units(UnitSystem::StandardGravity);
//! let result = compute_hic(&time, &accel, &config)?;
//!
//! println!("{result}");
//! assert!(result.hic > 0.0);
//! # Ok::<(), head_injury_criterion::HicError>(())
//! ```
//!
//! # Presets
//!
//! ```
//! use head_injury_criterion::HicConfig;
//!
//! let hic36 = HicConfig::hic36();
//! let hic15 = HicConfig::hic15();
//! let abaqus = HicConfig::abaqus(); // mm/s² and seconds
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]

pub mod calculator;
pub mod config;
pub mod curve;
pub mod error;
pub mod math;
pub mod result;
pub mod search;
pub mod signal;
pub mod units;

// Re-exports for convenient access
pub use calculator::{compute_hic, compute_hic_detailed};
pub use config::{CoarseSamplingPolicy, Extrapolation, HicConfig};
pub use curve::{compute_hic_batch, AccelerationCurve, CurveHic, HicAnnotation};
pub use error::{ErrorKind, HicError, Result};
pub use result::{HicReport, HicResult};
pub use search::{search_max_hic, window_score, WindowDurations, HIC_EXPONENT};
pub use signal::{prepare_signal, PreparedSignal, SampleSeries, SamplingReport, MIN_SAMPLES};
pub use units::{UnitSystem, STANDARD_GRAVITY};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn generate_pulse(n: usize, dt: f64, start: f64, end: f64, level: f64) -> (Vec<f64>, Vec<f64>) {
        let time: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
        let accel = time
            .iter()
            .map(|&t| if t >= start && t < end { level } else { 0.0 })
            .collect();
        (time, accel)
    }

    #[test]
    fn test_full_pipeline() {
        let (time, accel) = generate_pulse(800, 1e-4, 0.02, 0.03, 9.81 * 80.0);
        let config = HicConfig::default();

        let report = compute_hic_detailed(&time, &accel, &config).unwrap();
        let result = report.result;

        assert!(!report.is_coarse());
        assert!(result.hic > 0.0);
        assert!(result.duration() >= config.tmin - 1e-12);
        assert!(result.duration() <= config.tmax + 1e-12);
        assert!(result.t1 >= 0.0 && result.t2 <= 0.08);

        // About 80 g over roughly 10 ms.
        let expected = 0.01 * 80.0_f64.powf(2.5);
        assert_relative_eq!(result.hic, expected, max_relative = 0.05);
    }

    #[test]
    fn test_preparation_feeds_search() {
        let (time, accel) = generate_pulse(400, 1e-4, 0.01, 0.02, 40.0);
        let config = HicConfig::default().with_units(UnitSystem::StandardGravity);

        let prepared = prepare_signal(&time, &accel, &config).unwrap();
        let integral = math::IntegralSeries::new(prepared.series.time(), prepared.series.acceleration());
        let durations = WindowDurations::linspace(config.tmin, config.tmax, config.window_steps);
        let direct = search_max_hic(&integral, &durations, config.extrapolation);

        assert_eq!(direct, compute_hic(&time, &accel, &config).unwrap());
    }
}
