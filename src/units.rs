//! Unit systems for incoming acceleration curves.
//!
//! HIC is defined on acceleration in multiples of standard gravity over time
//! in seconds. A [`UnitSystem`] carries the two scalars needed to get there:
//! the value of one g in the caller's acceleration unit, and the length of
//! the caller's time unit in seconds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard gravity (m/s²) used for all built-in unit systems.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Length and time units of a caller-supplied curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitSystem {
    /// Metres and seconds (m/s²).
    #[default]
    Si,
    /// Millimetres and seconds (mm/s²).
    MillimetreSecond,
    /// Millimetres and milliseconds (mm/ms²), common in explicit crash codes.
    MillimetreMillisecond,
    /// Feet and seconds (ft/s²).
    FootSecond,
    /// Acceleration already in g, time in seconds.
    StandardGravity,
    /// Any other consistent system.
    Custom {
        /// Value of one standard gravity in the acceleration unit.
        gravity: f64,
        /// Length of one time unit in seconds.
        seconds_per_time_unit: f64,
    },
}

impl UnitSystem {
    /// Value of one standard gravity expressed in this system's acceleration unit.
    #[must_use]
    pub fn gravity(self) -> f64 {
        match self {
            Self::Si => STANDARD_GRAVITY,
            Self::MillimetreSecond => STANDARD_GRAVITY * 1.0e3,
            Self::MillimetreMillisecond => STANDARD_GRAVITY * 1.0e-3,
            Self::FootSecond => STANDARD_GRAVITY / 0.3048,
            Self::StandardGravity => 1.0,
            Self::Custom { gravity, .. } => gravity,
        }
    }

    /// Seconds per time unit of this system.
    #[must_use]
    pub fn seconds_per_time_unit(self) -> f64 {
        match self {
            Self::MillimetreMillisecond => 1.0e-3,
            Self::Custom {
                seconds_per_time_unit,
                ..
            } => seconds_per_time_unit,
            _ => 1.0,
        }
    }
}
