//! Planetary position model and ephemeris entry points.
//!
//! Keplerian propagation of the catalog elements: evaluate each element at
//! the requested instant from its epoch value and per-day rate, solve
//! Kepler's equation, rotate the orbital-plane position into heliocentric
//! ecliptic coordinates, then shift to the geocenter with Earth's
//! heliocentric position and rotate by the mean obliquity. Accuracy is a
//! few arcminutes for the inner planets and better for the outer ones,
//! consistent with the solar and lunar models.

use crate::catalog::{self, Planet};
use crate::earth;
use crate::records::PlanetPosition;
use crate::sampler::SampleRange;
use chrono::{DateTime, Utc};
use skywatch_coords::{to_horizontal, EquatorialPosition};
use skywatch_core::angle::wrap_0_2pi;
use skywatch_core::constants::{DEG_TO_RAD, J2000_JD};
use skywatch_core::{obliquity, Angle, BodyKind, EphemError, EphemResult, Observatory};
use skywatch_time::{JulianDate, LMST};

/// Element-set epoch: 1999-12-31 00:00 UT, 1.5 days before J2000.
const ELEMENT_EPOCH_JD: f64 = J2000_JD - 1.5;

/// Days elapsed since the element-set epoch (fractional).
pub(crate) fn days_since_element_epoch(jd: &JulianDate) -> f64 {
    jd.to_f64() - ELEMENT_EPOCH_JD
}

/// Solves Kepler's equation `M = E - e sin E` for the eccentric anomaly.
///
/// Newton iteration from the first-order seed. Every orbit handled here has
/// `e < 0.21`, where the iteration contracts rapidly; the fixed iteration
/// cap is a backstop, not an expected exit.
pub(crate) fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ecc_anomaly =
        mean_anomaly + eccentricity * mean_anomaly.sin() * (1.0 + eccentricity * mean_anomaly.cos());
    for _ in 0..20 {
        let delta = (ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Geocentric equatorial coordinates and distance of a planet.
pub fn geocentric_position(planet: &Planet, jd: &JulianDate) -> EphemResult<EquatorialPosition> {
    let d = days_since_element_epoch(jd);
    let el = planet.elements();

    let n = (el.ascending_node + el.ascending_node_rate * d) * DEG_TO_RAD;
    let i = (el.inclination + el.inclination_rate * d) * DEG_TO_RAD;
    let w = (el.perihelion_argument + el.perihelion_argument_rate * d) * DEG_TO_RAD;
    let a = el.semi_major_axis + el.semi_major_axis_rate * d;
    let e = el.eccentricity + el.eccentricity_rate * d;
    let m = wrap_0_2pi((el.mean_anomaly + el.mean_anomaly_rate * d) * DEG_TO_RAD);

    // Orbital-plane position
    let ecc_anomaly = solve_kepler(m, e);
    let xv = a * (ecc_anomaly.cos() - e);
    let yv = a * ecc_anomaly.sin() * (1.0 - e * e).sqrt();
    let v = f64::atan2(yv, xv);
    let r = (xv * xv + yv * yv).sqrt();

    // Heliocentric ecliptic coordinates
    let (sin_n, cos_n) = n.sin_cos();
    let (sin_vw, cos_vw) = (v + w).sin_cos();
    let (sin_i, cos_i) = i.sin_cos();
    let xh = r * (cos_n * cos_vw - sin_n * sin_vw * cos_i);
    let yh = r * (sin_n * cos_vw + cos_n * sin_vw * cos_i);
    let zh = r * sin_vw * sin_i;

    // Shift to the geocenter
    let [ex, ey, ez] = earth::heliocentric_position(jd);
    let xg = xh - ex;
    let yg = yh - ey;
    let zg = zh - ez;

    // Rotate the ecliptic vector to the equator
    let eps = obliquity::mean_obliquity(jd.jd1(), jd.jd2());
    let (sin_eps, cos_eps) = eps.sin_cos();
    let xq = xg;
    let yq = yg * cos_eps - zg * sin_eps;
    let zq = yg * sin_eps + zg * cos_eps;

    let ra = f64::atan2(yq, xq);
    let dec = f64::atan2(zq, (xq * xq + yq * yq).sqrt());
    let distance = (xq * xq + yq * yq + zq * zq).sqrt();

    if !ra.is_finite() || !dec.is_finite() || !distance.is_finite() {
        return Err(EphemError::calculation_error(
            planet.name(),
            "orbit propagation produced a non-finite position",
        ));
    }

    Ok(EquatorialPosition::with_distance(
        Angle::from_radians(wrap_0_2pi(ra)),
        Angle::from_radians(dec),
        distance,
    ))
}

/// Topocentric ephemeris for a catalog planet over `[start, end]` at
/// `step_minutes`. See [`SampleRange`] for the range contract.
pub fn ephemeris(
    planet: &Planet,
    observatory: &Observatory,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_minutes: u32,
) -> EphemResult<Vec<PlanetPosition>> {
    let range = SampleRange::new(start, end, step_minutes)?;
    let mut records = Vec::with_capacity(range.len());
    for instant in range.instants() {
        let jd = JulianDate::from_datetime(&instant);
        let equatorial = geocentric_position(planet, &jd)?;
        let lmst = LMST::at(&jd, observatory.longitude());
        let horizontal = to_horizontal(&equatorial, observatory.latitude(), &lmst);
        records.push(PlanetPosition::new(
            planet.name(),
            instant,
            &equatorial,
            &horizontal,
        ));
    }
    Ok(records)
}

/// Resolves `name` against the planet catalog, then computes its ephemeris.
///
/// An unknown name yields [`EphemError::UnresolvableBody`].
pub fn ephemeris_by_name(
    name: &str,
    observatory: &Observatory,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_minutes: u32,
) -> EphemResult<Vec<PlanetPosition>> {
    let planet = catalog::planet_by_name(name)
        .ok_or_else(|| EphemError::unresolvable_body(BodyKind::Planet, name))?;
    ephemeris(&planet, observatory, start, end, step_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kepler_circular_orbit() {
        // With zero eccentricity, E == M exactly
        for k in 0..8 {
            let m = k as f64 * 0.7;
            assert!((solve_kepler(m, 0.0) - m).abs() < 1e-15);
        }
    }

    #[test]
    fn test_kepler_satisfies_equation() {
        for &e in &[0.006773, 0.093405, 0.205635] {
            for k in 0..12 {
                let m = k as f64 * 0.5;
                let ecc = solve_kepler(m, e);
                assert!(
                    (ecc - e * ecc.sin() - m).abs() < 1e-10,
                    "e={}, M={}: residual too large",
                    e,
                    m
                );
            }
        }
    }

    #[test]
    fn test_mars_distance_within_geocentric_range() {
        // Geocentric Mars ranges from ~0.37 AU (close opposition) to
        // ~2.68 AU (conjunction)
        let mars = catalog::planet_by_name("Mars").unwrap();
        for month in 0..24 {
            let jd = JulianDate::j2000().add_days(month as f64 * 30.0);
            let pos = geocentric_position(&mars, &jd).unwrap();
            let dist = pos.distance_au().unwrap();
            assert!(
                (0.36..2.70).contains(&dist),
                "month {}: Mars distance {} AU",
                month,
                dist
            );
        }
    }

    #[test]
    fn test_jupiter_distance_within_geocentric_range() {
        let jupiter = catalog::planet_by_name("Jupiter").unwrap();
        for month in 0..24 {
            let jd = JulianDate::j2000().add_days(month as f64 * 30.0);
            let dist = geocentric_position(&jupiter, &jd)
                .unwrap()
                .distance_au()
                .unwrap();
            assert!(
                (3.9..6.5).contains(&dist),
                "month {}: Jupiter distance {} AU",
                month,
                dist
            );
        }
    }

    #[test]
    fn test_inner_planets_stay_near_the_sun() {
        // Maximum solar elongation: ~28° for Mercury, ~48° for Venus
        let sun_limits = [("Mercury", 29.5), ("Venus", 48.5)];
        for (name, limit) in sun_limits {
            let planet = catalog::planet_by_name(name).unwrap();
            for week in 0..52 {
                let jd = JulianDate::j2000().add_days(week as f64 * 7.0);
                let planet_pos = geocentric_position(&planet, &jd).unwrap();
                let sun_pos = crate::sun::geocentric_position(&jd);

                let (sin_d1, cos_d1) = planet_pos.declination().sin_cos();
                let (sin_d2, cos_d2) = sun_pos.declination().sin_cos();
                let dra =
                    (planet_pos.right_ascension() - sun_pos.right_ascension()).radians();
                let cos_sep = (sin_d1 * sin_d2 + cos_d1 * cos_d2 * dra.cos()).clamp(-1.0, 1.0);
                let elongation = cos_sep.acos().to_degrees();

                assert!(
                    elongation <= limit,
                    "week {}: {} elongation {}° exceeds {}°",
                    week,
                    name,
                    elongation,
                    limit
                );
            }
        }
    }

    #[test]
    fn test_unknown_planet_is_unresolvable() {
        use chrono::TimeZone;
        use skywatch_core::{LatitudePole, LongitudePole, Place};

        let start = Utc.with_ymd_and_hms(2017, 11, 7, 0, 0, 0).unwrap();
        let place = Place::new(
            "Hassan",
            13.0068,
            LatitudePole::North,
            76.0996,
            LongitudePole::East,
            "Asia/Calcutta",
            "",
        )
        .unwrap();
        let observatory = Observatory::new(place, start);

        let err = ephemeris_by_name("Vulcan", &observatory, start, start, 10).unwrap_err();
        assert!(matches!(
            err,
            EphemError::UnresolvableBody {
                kind: BodyKind::Planet,
                ..
            }
        ));
    }
}
