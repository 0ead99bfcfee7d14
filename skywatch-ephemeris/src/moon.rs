//! Lunar position model and ephemeris entry point.
//!
//! Schlyter's low-precision lunar theory: osculating mean elements at the
//! model epoch, Kepler's equation for the unperturbed orbit, then the
//! principal periodic perturbations — the evection, the variation, the
//! annual equation, and the rest of the published 12-term longitude,
//! 5-term latitude, and 2-term distance set. Accuracy is a few arcminutes
//! in longitude for years around J2000, which keeps topocentric
//! azimuth/altitude well within a tenth of a degree.
//!
//! Positions are geocentric; the diurnal parallax (up to ~1°) is not
//! applied, matching the stated precision regime.

use crate::planets::{days_since_element_epoch, solve_kepler};
use crate::records::MoonPosition;
use crate::sampler::SampleRange;
use crate::sun;
use chrono::{DateTime, Utc};
use skywatch_coords::{to_horizontal, EquatorialPosition};
use skywatch_core::angle::wrap_0_2pi;
use skywatch_core::constants::{AU_KM, DEG_TO_RAD, EARTH_EQUATORIAL_RADIUS_KM, PI};
use skywatch_core::{obliquity, Angle, EphemResult, Observatory};
use skywatch_time::{JulianDate, LMST};

/// The Moon's geocentric state at one instant.
#[derive(Debug, Clone, Copy)]
pub struct LunarPosition {
    pub equatorial: EquatorialPosition,
    /// Geocentric distance in kilometers.
    pub distance_km: f64,
    /// Sun–Earth–Moon phase angle: 0 at full moon, pi at new moon.
    pub phase_angle: Angle,
}

/// Geocentric equatorial position, distance, and phase of the Moon.
pub fn geocentric_position(jd: &JulianDate) -> LunarPosition {
    let d = days_since_element_epoch(jd);

    // Mean elements, degrees (distance in Earth radii)
    let n = 125.1228 - 0.0529538083 * d;
    let i = 5.1454;
    let w = 318.0634 + 0.1643573223 * d;
    let a = 60.2666;
    let e = 0.054900;
    let m = 115.3654 + 13.0649929509 * d;

    // Solar mean elements, for the perturbation arguments
    let ms = 356.0470 + 0.9856002585 * d;
    let ws = 282.9404 + 4.70935e-5 * d;
    let ls = ms + ws;

    // Unperturbed orbital plane position
    let m_rad = wrap_0_2pi(m * DEG_TO_RAD);
    let ecc_anomaly = solve_kepler(m_rad, e);
    let xv = a * (ecc_anomaly.cos() - e);
    let yv = a * ecc_anomaly.sin() * (1.0 - e * e).sqrt();
    let v = f64::atan2(yv, xv);
    let mut r = (xv * xv + yv * yv).sqrt();

    // Ecliptic coordinates from the orbital plane
    let n_rad = n * DEG_TO_RAD;
    let i_rad = i * DEG_TO_RAD;
    let vw = v + w * DEG_TO_RAD;
    let (sin_n, cos_n) = n_rad.sin_cos();
    let (sin_vw, cos_vw) = vw.sin_cos();
    let (sin_i, cos_i) = i_rad.sin_cos();

    let xe = r * (cos_n * cos_vw - sin_n * sin_vw * cos_i);
    let ye = r * (sin_n * cos_vw + cos_n * sin_vw * cos_i);
    let ze = r * sin_vw * sin_i;

    let mut lon = f64::atan2(ye, xe);
    let mut lat = f64::atan2(ze, (xe * xe + ye * ye).sqrt());

    // Perturbation arguments, degrees
    let lm = n + w + m; // Moon mean longitude
    let d_elong = lm - ls; // mean elongation from the Sun
    let f = lm - n; // argument of latitude

    let sd = |x: f64| (x * DEG_TO_RAD).sin();
    let cd = |x: f64| (x * DEG_TO_RAD).cos();

    // Longitude perturbations, degrees
    let dlon = -1.274 * sd(m - 2.0 * d_elong)        // evection
        + 0.658 * sd(2.0 * d_elong)                  // variation
        - 0.186 * sd(ms)                             // annual equation
        - 0.059 * sd(2.0 * m - 2.0 * d_elong)
        - 0.057 * sd(m - 2.0 * d_elong + ms)
        + 0.053 * sd(m + 2.0 * d_elong)
        + 0.046 * sd(2.0 * d_elong - ms)
        + 0.041 * sd(m - ms)
        - 0.035 * sd(d_elong)                        // parallactic equation
        - 0.031 * sd(m + ms)
        - 0.015 * sd(2.0 * f - 2.0 * d_elong)
        + 0.011 * sd(m - 4.0 * d_elong);

    // Latitude perturbations, degrees
    let dlat = -0.173 * sd(f - 2.0 * d_elong)
        - 0.055 * sd(m - f - 2.0 * d_elong)
        - 0.046 * sd(m + f - 2.0 * d_elong)
        + 0.033 * sd(f + 2.0 * d_elong)
        + 0.017 * sd(2.0 * m + f);

    // Distance perturbations, Earth radii
    let dr = -0.58 * cd(m - 2.0 * d_elong) - 0.46 * cd(2.0 * d_elong);

    lon = wrap_0_2pi(lon + dlon * DEG_TO_RAD);
    lat += dlat * DEG_TO_RAD;
    r += dr;

    // Perturbed ecliptic vector, rotated to the equator
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let x = r * cos_lon * cos_lat;
    let y = r * sin_lon * cos_lat;
    let z = r * sin_lat;

    let eps = obliquity::mean_obliquity(jd.jd1(), jd.jd2());
    let (sin_eps, cos_eps) = eps.sin_cos();
    let xq = x;
    let yq = y * cos_eps - z * sin_eps;
    let zq = y * sin_eps + z * cos_eps;

    let ra = f64::atan2(yq, xq);
    let dec = f64::atan2(zq, (xq * xq + yq * yq).sqrt());

    let distance_km = r * EARTH_EQUATORIAL_RADIUS_KM;

    // Phase from the geocentric elongation between Sun and Moon
    let solar = sun::apparent_ecliptic(jd);
    let elongation = ((lon - solar.longitude).cos() * lat.cos())
        .clamp(-1.0, 1.0)
        .acos();
    let phase_angle = Angle::from_radians(PI - elongation);

    LunarPosition {
        equatorial: EquatorialPosition::with_distance(
            Angle::from_radians(wrap_0_2pi(ra)),
            Angle::from_radians(dec),
            distance_km / AU_KM,
        ),
        distance_km,
        phase_angle,
    }
}

/// Topocentric Moon ephemeris over `[start, end]` at `step_minutes`.
///
/// See [`SampleRange`] for the range contract and end-inclusion policy.
pub fn ephemeris(
    observatory: &Observatory,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_minutes: u32,
) -> EphemResult<Vec<MoonPosition>> {
    let range = SampleRange::new(start, end, step_minutes)?;
    let mut records = Vec::with_capacity(range.len());
    for instant in range.instants() {
        let jd = JulianDate::from_datetime(&instant);
        let lunar = geocentric_position(&jd);
        let lmst = LMST::at(&jd, observatory.longitude());
        let horizontal = to_horizontal(&lunar.equatorial, observatory.latitude(), &lmst);
        records.push(MoonPosition::new(
            instant,
            &lunar.equatorial,
            &horizontal,
            lunar.distance_km,
            lunar.phase_angle,
        ));
    }
    Ok(records)
}
