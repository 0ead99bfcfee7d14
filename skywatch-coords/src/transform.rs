//! Equatorial ↔ horizontal transforms.
//!
//! The forward transform takes geocentric equatorial coordinates to the
//! azimuth/altitude an observer at a given latitude sees at a given local
//! sidereal time:
//!
//! ```text
//! H   = LMST − RA                        (hour angle, wrapped to [-pi, pi))
//! alt = asin(sin δ sin φ + cos δ cos φ cos H)
//! az  = atan2(−cos δ sin H, sin δ cos φ − cos δ sin φ cos H)
//! ```
//!
//! The atan2 form of the azimuth avoids the `tan δ` blow-up of the textbook
//! formula at the celestial poles, and directly yields the
//! North-through-East convention used throughout this workspace.
//!
//! # Degenerate geometry
//!
//! For an observer exactly at a geographic pole every direction is "south"
//! (or "north") and azimuth is mathematically undefined. This is not an
//! error: the transform returns the documented sentinel azimuth 0 and the
//! altitude, which at a pole is simply ±declination.

use crate::equatorial::EquatorialPosition;
use crate::horizontal::HorizontalPosition;
use skywatch_core::angle::wrap_0_2pi;
use skywatch_core::constants::HALF_PI;
use skywatch_core::Angle;
use skywatch_time::LMST;

// Closer to a geographic pole than this, azimuth is treated as undefined.
const POLE_LIMIT_RAD: f64 = HALF_PI - 1e-9;

/// Converts equatorial coordinates to horizontal for an observer latitude
/// and local sidereal time. Total: degenerate geometry yields the sentinel
/// azimuth rather than an error.
pub fn to_horizontal(
    equatorial: &EquatorialPosition,
    latitude: Angle,
    lmst: &LMST,
) -> HorizontalPosition {
    let hour_angle = lmst.hour_angle_to(equatorial.right_ascension());
    let (sin_ha, cos_ha) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = equatorial.declination().sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
    let altitude = Angle::from_radians(sin_alt.asin());

    if latitude.radians().abs() >= POLE_LIMIT_RAD {
        return HorizontalPosition::new(Angle::ZERO, altitude);
    }

    let azimuth = Angle::from_radians(wrap_0_2pi(f64::atan2(
        -cos_dec * sin_ha,
        sin_dec * cos_lat - cos_dec * sin_lat * cos_ha,
    )));

    HorizontalPosition::new(azimuth, altitude)
}

/// Inverse transform: recovers equatorial coordinates from horizontal ones
/// at the same observer latitude and sidereal time.
pub fn to_equatorial(
    horizontal: &HorizontalPosition,
    latitude: Angle,
    lmst: &LMST,
) -> EquatorialPosition {
    let (sin_az, cos_az) = horizontal.azimuth().sin_cos();
    let (sin_alt, cos_alt) = horizontal.altitude().sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();

    let sin_dec = (sin_alt * sin_lat + cos_alt * cos_lat * cos_az).clamp(-1.0, 1.0);
    let declination = Angle::from_radians(sin_dec.asin());

    let hour_angle = f64::atan2(
        -cos_alt * sin_az,
        sin_alt * cos_lat - cos_alt * sin_lat * cos_az,
    );

    let right_ascension = Angle::from_radians(wrap_0_2pi(lmst.radians() - hour_angle));

    EquatorialPosition::new(right_ascension, declination)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS_DEG: f64 = 1e-9;

    #[test]
    fn test_transit_due_south() {
        // Body on the meridian, declination below the observer latitude:
        // azimuth 180° (due south), altitude = 90° − φ + δ
        let lat = Angle::from_degrees(45.0);
        let lmst = LMST::from_hours(6.0);
        let eq = EquatorialPosition::new(Angle::from_hours(6.0), Angle::from_degrees(20.0));

        let hor = to_horizontal(&eq, lat, &lmst);
        assert!(
            (hor.azimuth().degrees() - 180.0).abs() < EPS_DEG,
            "transit azimuth: {}",
            hor.azimuth().degrees()
        );
        assert!(
            (hor.altitude().degrees() - 65.0).abs() < EPS_DEG,
            "transit altitude: {}",
            hor.altitude().degrees()
        );
    }

    #[test]
    fn test_transit_due_north() {
        // Declination above the observer latitude: culminates north of zenith
        let lat = Angle::from_degrees(10.0);
        let lmst = LMST::from_hours(0.0);
        let eq = EquatorialPosition::new(Angle::from_hours(0.0), Angle::from_degrees(60.0));

        let hor = to_horizontal(&eq, lat, &lmst);
        assert!(
            hor.azimuth().degrees() < EPS_DEG || hor.azimuth().degrees() > 360.0 - EPS_DEG,
            "north transit azimuth: {}",
            hor.azimuth().degrees()
        );
        assert!((hor.altitude().degrees() - 40.0).abs() < EPS_DEG);
    }

    #[test]
    fn test_celestial_equator_rises_due_east() {
        // A δ=0 body six hours east of the meridian sits on the horizon due east
        let lat = Angle::from_degrees(45.0);
        let lmst = LMST::from_hours(0.0);
        let eq = EquatorialPosition::new(Angle::from_hours(6.0), Angle::ZERO);

        let hor = to_horizontal(&eq, lat, &lmst);
        assert!(
            (hor.azimuth().degrees() - 90.0).abs() < EPS_DEG,
            "rise azimuth: {}",
            hor.azimuth().degrees()
        );
        assert!(hor.altitude().degrees().abs() < EPS_DEG);
    }

    #[test]
    fn test_altitude_bounds_over_sphere() {
        let lat = Angle::from_degrees(-33.9);
        for ra_h in 0..24 {
            for dec_deg in [-80.0, -45.0, 0.0, 45.0, 80.0] {
                let eq = EquatorialPosition::new(
                    Angle::from_hours(ra_h as f64),
                    Angle::from_degrees(dec_deg),
                );
                let hor = to_horizontal(&eq, lat, &LMST::from_hours(3.7));
                let alt = hor.altitude().degrees();
                let az = hor.azimuth().degrees();
                assert!((-90.0..=90.0).contains(&alt), "altitude out of range: {}", alt);
                assert!((0.0..360.0).contains(&az), "azimuth out of range: {}", az);
            }
        }
    }

    #[test]
    fn test_pole_sentinel_azimuth() {
        let north_pole = Angle::from_degrees(90.0);
        let eq = EquatorialPosition::new(Angle::from_hours(13.4), Angle::from_degrees(28.0));
        let hor = to_horizontal(&eq, north_pole, &LMST::from_hours(5.0));

        assert_eq!(hor.azimuth().degrees(), 0.0, "sentinel azimuth at the pole");
        // At the north pole, altitude equals declination
        assert!((hor.altitude().degrees() - 28.0).abs() < EPS_DEG);

        let south_pole = Angle::from_degrees(-90.0);
        let hor = to_horizontal(&eq, south_pole, &LMST::from_hours(5.0));
        assert_eq!(hor.azimuth().degrees(), 0.0);
        assert!((hor.altitude().degrees() + 28.0).abs() < EPS_DEG);
    }

    #[test]
    fn test_round_trip_recovers_equatorial() {
        let lat = Angle::from_degrees(13.0068);
        let lmst = LMST::from_hours(17.25);

        for (ra_h, dec_deg) in [
            (6.752, -16.716),  // Sirius
            (18.616, 38.784),  // Vega
            (2.530, 89.264),   // Polaris, near the celestial pole
            (0.0, 0.0),
        ] {
            let original =
                EquatorialPosition::new(Angle::from_hours(ra_h), Angle::from_degrees(dec_deg));
            let hor = to_horizontal(&original, lat, &lmst);
            let recovered = to_equatorial(&hor, lat, &lmst);

            let mut ra_diff =
                (recovered.right_ascension().degrees() - original.right_ascension().degrees()).abs();
            if ra_diff > 180.0 {
                ra_diff = 360.0 - ra_diff;
            }
            // Near the celestial pole RA is poorly conditioned; compare the
            // on-sky separation instead of raw RA
            let ra_sky = ra_diff * original.declination().cos();
            assert!(
                ra_sky < 1e-7,
                "RA not recovered for ({}, {}): {}",
                ra_h,
                dec_deg,
                ra_sky
            );
            assert!(
                (recovered.declination().degrees() - original.declination().degrees()).abs() < 1e-7,
                "Dec not recovered for ({}, {})",
                ra_h,
                dec_deg
            );
        }
    }

    #[test]
    fn test_known_position_sirius_from_hassan() {
        // Sanity anchor: Sirius (RA 6h45m, Dec -16.7°) from 13°N when LMST
        // equals its RA must transit due south at altitude ≈ 90 − 13 − 16.7
        let lat = Angle::from_degrees(13.0068);
        let lmst = LMST::from_hours(6.752);
        let eq = EquatorialPosition::new(Angle::from_hours(6.752), Angle::from_degrees(-16.716));

        let hor = to_horizontal(&eq, lat, &lmst);
        assert!((hor.azimuth().degrees() - 180.0).abs() < 1e-6);
        assert!((hor.altitude().degrees() - (90.0 - 13.0068 - 16.716)).abs() < 1e-6);
    }
}
