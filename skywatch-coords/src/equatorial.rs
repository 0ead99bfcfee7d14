//! Geocentric equatorial coordinates.

use skywatch_core::angle::{clamp_dec, wrap_0_2pi, DmsFmt, HmsFmt};
use skywatch_core::Angle;
use std::fmt;

/// Right ascension and declination, with an optional geocentric distance.
///
/// Construction normalizes the inputs: right ascension wraps into [0, 2pi),
/// declination clamps to [-pi/2, +pi/2]. Distance is in astronomical units
/// and is carried only for bodies whose model produces one (the Sun, the
/// Moon, planets); catalog stars leave it `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialPosition {
    right_ascension: Angle,
    declination: Angle,
    distance_au: Option<f64>,
}

impl EquatorialPosition {
    pub fn new(right_ascension: Angle, declination: Angle) -> Self {
        Self {
            right_ascension: Angle::from_radians(wrap_0_2pi(right_ascension.radians())),
            declination: Angle::from_radians(clamp_dec(declination.radians())),
            distance_au: None,
        }
    }

    pub fn with_distance(right_ascension: Angle, declination: Angle, distance_au: f64) -> Self {
        let mut pos = Self::new(right_ascension, declination);
        pos.distance_au = Some(distance_au);
        pos
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    pub fn distance_au(&self) -> Option<f64> {
        self.distance_au
    }
}

impl fmt::Display for EquatorialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {} Dec {}",
            HmsFmt { frac_digits: 1 }.fmt(self.right_ascension),
            DmsFmt { frac_digits: 0 }.fmt(self.declination)
        )
    }
}
