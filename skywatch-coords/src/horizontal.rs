//! Topocentric horizontal coordinates.

use skywatch_core::angle::{clamp_dec, wrap_0_2pi, DmsFmt};
use skywatch_core::Angle;
use std::fmt;

/// Azimuth and altitude as seen from a specific observer.
///
/// Azimuth is measured from North through East and wraps into [0, 2pi) at
/// construction; altitude clamps to [-pi/2, +pi/2].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalPosition {
    azimuth: Angle,
    altitude: Angle,
}

impl HorizontalPosition {
    pub fn new(azimuth: Angle, altitude: Angle) -> Self {
        Self {
            azimuth: Angle::from_radians(wrap_0_2pi(azimuth.radians())),
            altitude: Angle::from_radians(clamp_dec(altitude.radians())),
        }
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    /// True when the body is above the mathematical horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.radians() > 0.0
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Az {:8.4}° Alt {}",
            self.azimuth.degrees(),
            DmsFmt { frac_digits: 0 }.fmt(self.altitude)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azimuth_wraps() {
        let pos = HorizontalPosition::new(Angle::from_degrees(-90.0), Angle::ZERO);
        assert!((pos.azimuth().degrees() - 270.0).abs() < 1e-10);
    }

    #[test]
    fn test_altitude_clamps() {
        let pos = HorizontalPosition::new(Angle::ZERO, Angle::from_degrees(-95.0));
        assert_eq!(pos.altitude().degrees(), -90.0);
    }

    #[test]
    fn test_above_horizon() {
        assert!(HorizontalPosition::new(Angle::ZERO, Angle::from_degrees(5.0)).is_above_horizon());
        assert!(!HorizontalPosition::new(Angle::ZERO, Angle::from_degrees(-0.1)).is_above_horizon());
    }
}
