//! Numerical utilities for HIC computation.
//!
//! This module provides:
//! - [`integrate`]: cumulative trapezoidal integration
//! - [`interp`]: piecewise-linear interpolation over sampled curves

pub mod integrate;
pub mod interp;

pub use integrate::{cumulative_trapezoid, IntegralSeries};
pub use interp::interpolate_from;
