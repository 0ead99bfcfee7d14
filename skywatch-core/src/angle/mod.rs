//! Angle handling for astronomical coordinates.
//!
//! [`Angle`] is the primary angular type throughout the workspace. It stores
//! the value as a 64-bit float in radians, which keeps trigonometric calls
//! direct and avoids unit mistakes at module boundaries. Conversions to and
//! from degrees, hours (right ascension), and arcseconds are provided.
//!
//! | Concern | Where |
//! |---------|-------|
//! | Normalization (wrap/clamp) | [`normalize`] |
//! | Sexagesimal formatting (DMS/HMS) | [`format`] |

pub mod format;
pub mod normalize;

pub use format::{latitude_string, longitude_string, DmsFmt, HmsFmt};
pub use normalize::{clamp_dec, wrap_0_2pi, wrap_pm_pi};

use crate::constants::{HALF_PI, PI};
use core::fmt;
use core::ops::{Add, Neg, Sub};

/// An angle stored internally in radians.
///
/// `Eq` and `Ord` are not implemented because `f64` can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90 degrees). The declination of the north celestial pole.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours, where 24h = 360 degrees.
    ///
    /// Right ascension and sidereal time are conventionally quoted in hours.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * 15.0).to_radians(),
        }
    }

    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: (arcsec / 3600.0).to_radians(),
        }
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn hours(&self) -> f64 {
        self.rad.to_degrees() / 15.0
    }

    #[inline]
    pub fn arcseconds(&self) -> f64 {
        self.rad.to_degrees() * 3600.0
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.rad.cos()
    }

    #[inline]
    pub fn tan(&self) -> f64 {
        self.rad.tan()
    }

    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Returns this angle wrapped to [0, 2pi).
    #[inline]
    pub fn wrapped_positive(&self) -> Self {
        Self {
            rad: wrap_0_2pi(self.rad),
        }
    }

    /// Returns this angle wrapped to [-pi, +pi).
    #[inline]
    pub fn wrapped_signed(&self) -> Self {
        Self {
            rad: wrap_pm_pi(self.rad),
        }
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }
}

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.rad + rhs.rad)
    }
}

impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.rad - rhs.rad)
    }
}

impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle::from_radians(-self.rad)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
