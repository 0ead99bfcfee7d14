//! Greenwich and local mean sidereal time.
//!
//! Sidereal time is the hour angle of the vernal equinox; it is what links a
//! body's right ascension to where it currently sits over an observer's
//! horizon. [`GMST`] uses the IAU 1982 polynomial, which is accurate to well
//! under a second of time over several centuries around J2000 — more than
//! enough for the low-precision position models in this workspace.
//! [`LMST`] adds the observer's east longitude.
//!
//! Both wrap into [0, 2pi); a negative raw polynomial value (dates before
//! J2000) wraps up into range rather than surfacing as a negative angle.

use crate::julian::JulianDate;
use skywatch_core::angle::{wrap_0_2pi, wrap_pm_pi};
use skywatch_core::Angle;

/// Greenwich Mean Sidereal Time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GMST(Angle);

impl GMST {
    /// GMST at the given instant (IAU 1982 series).
    pub fn at(jd: &JulianDate) -> Self {
        let d = jd.days_since_j2000();
        let t = jd.centuries_since_j2000();

        let gmst_deg = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0;

        Self(Angle::from_radians(wrap_0_2pi(
            gmst_deg * skywatch_core::constants::DEG_TO_RAD,
        )))
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(Angle::from_radians(wrap_0_2pi(
            Angle::from_hours(hours).radians(),
        )))
    }

    pub fn angle(&self) -> Angle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    /// Local mean sidereal time at the given east longitude.
    pub fn to_lmst(&self, east_longitude: Angle) -> LMST {
        LMST(Angle::from_radians(wrap_0_2pi(
            self.0.radians() + east_longitude.radians(),
        )))
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {:.6}h", self.hours())
    }
}

/// Local Mean Sidereal Time: GMST plus the observer's east longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LMST(Angle);

impl LMST {
    /// LMST at the given instant and east longitude.
    pub fn at(jd: &JulianDate, east_longitude: Angle) -> Self {
        GMST::at(jd).to_lmst(east_longitude)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(Angle::from_radians(wrap_0_2pi(
            Angle::from_hours(hours).radians(),
        )))
    }

    pub fn angle(&self) -> Angle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    /// Hour angle of a target: LMST minus right ascension, wrapped to
    /// [-pi, +pi). Negative means the target is east of the meridian.
    pub fn hour_angle_to(&self, right_ascension: Angle) -> Angle {
        Angle::from_radians(wrap_pm_pi(self.0.radians() - right_ascension.radians()))
    }
}

impl std::fmt::Display for LMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LMST {:.6}h", self.hours())
    }
}
