//! Solar position model and ephemeris entry point.
//!
//! Low-precision Meeus series: mean longitude plus the equation of center
//! (the eccentricity correction for Earth's elliptical orbit, three sine
//! terms), a nutation-in-longitude approximation for the apparent place,
//! and the mean obliquity rotation to equatorial coordinates. Good to well
//! under a degree over multi-year spans around J2000.

use crate::records::SunPosition;
use crate::sampler::SampleRange;
use chrono::{DateTime, Utc};
use skywatch_coords::{to_horizontal, EquatorialPosition};
use skywatch_core::angle::wrap_0_2pi;
use skywatch_core::constants::DEG_TO_RAD;
use skywatch_core::{obliquity, Angle, EphemResult, Observatory};
use skywatch_time::{JulianDate, LMST};

/// The Sun's apparent geocentric ecliptic state: longitude (latitude is
/// negligible at this precision) and distance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SolarEcliptic {
    /// Apparent ecliptic longitude, radians in [0, 2pi).
    pub longitude: f64,
    /// Earth–Sun distance, AU.
    pub distance_au: f64,
}

pub(crate) fn apparent_ecliptic(jd: &JulianDate) -> SolarEcliptic {
    let t = jd.centuries_since_j2000();

    // Geometric mean longitude and mean anomaly, degrees
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m_rad = m * DEG_TO_RAD;

    // Equation of center, degrees
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;

    // Apparent longitude: aberration and the principal nutation term
    let omega_rad = (125.04 - 1934.136 * t) * DEG_TO_RAD;
    let apparent_lon = true_lon - 0.00569 - 0.00478 * omega_rad.sin();

    // Distance from the ellipse equation
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let true_anomaly = m_rad + c * DEG_TO_RAD;
    let a = 1.000001018; // semi-major axis, AU
    let distance_au = a * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    SolarEcliptic {
        longitude: wrap_0_2pi(apparent_lon * DEG_TO_RAD),
        distance_au,
    }
}

/// Apparent geocentric equatorial coordinates of the Sun, with distance.
pub fn geocentric_position(jd: &JulianDate) -> EquatorialPosition {
    let ecliptic = apparent_ecliptic(jd);
    let eps = obliquity::mean_obliquity(jd.jd1(), jd.jd2());

    let (sin_lambda, cos_lambda) = ecliptic.longitude.sin_cos();
    let (sin_eps, cos_eps) = eps.sin_cos();

    let ra = f64::atan2(sin_lambda * cos_eps, cos_lambda);
    let dec = (sin_lambda * sin_eps).asin();

    EquatorialPosition::with_distance(
        Angle::from_radians(wrap_0_2pi(ra)),
        Angle::from_radians(dec),
        ecliptic.distance_au,
    )
}

/// Topocentric Sun ephemeris over `[start, end]` at `step_minutes`.
///
/// Samples at `start + k·step` up to the last sample at or before `end`;
/// see [`SampleRange`] for the end-inclusion policy. Stateless: identical
/// inputs always produce an identical sequence.
pub fn ephemeris(
    observatory: &Observatory,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_minutes: u32,
) -> EphemResult<Vec<SunPosition>> {
    let range = SampleRange::new(start, end, step_minutes)?;
    let mut records = Vec::with_capacity(range.len());
    for instant in range.instants() {
        let jd = JulianDate::from_datetime(&instant);
        let equatorial = geocentric_position(&jd);
        let lmst = LMST::at(&jd, observatory.longitude());
        let horizontal = to_horizontal(&equatorial, observatory.latitude(), &lmst);
        records.push(SunPosition::new(instant, &equatorial, &horizontal));
    }
    Ok(records)
}
