//! Star position model and ephemeris entry points.
//!
//! Stars carry fixed J2000 catalog coordinates; the only time dependence is
//! proper motion, applied linearly from the catalog rates. Precession and
//! annual aberration are below the engine's stated precision over the
//! decades around J2000 and are not modelled.

use crate::catalog::{self, Star};
use crate::records::StarPosition;
use crate::sampler::SampleRange;
use chrono::{DateTime, Utc};
use skywatch_coords::{to_horizontal, EquatorialPosition};
use skywatch_core::angle::wrap_0_2pi;
use skywatch_core::constants::{DAYS_PER_JULIAN_YEAR, MILLIARCSEC_TO_RAD};
use skywatch_core::{Angle, BodyKind, EphemError, EphemResult, Observatory};
use skywatch_time::{JulianDate, LMST};

/// Catalog place of a star at `jd`, with proper motion applied.
///
/// The catalog's RA rate already includes the cos δ factor, so the RA
/// component is divided back out at the catalog declination.
pub fn position_at(star: &Star, jd: &JulianDate) -> EquatorialPosition {
    let years = jd.days_since_j2000() / DAYS_PER_JULIAN_YEAR;

    let dec0 = star.dec_j2000();
    let dec = dec0.radians() + star.pm_dec_mas_yr() * years * MILLIARCSEC_TO_RAD;
    let ra = star.ra_j2000().radians()
        + star.pm_ra_mas_yr() * years * MILLIARCSEC_TO_RAD / dec0.cos();

    EquatorialPosition::new(
        Angle::from_radians(wrap_0_2pi(ra)),
        Angle::from_radians(dec),
    )
}

/// Topocentric ephemeris for a catalog star over `[start, end]` at
/// `step_minutes`. See [`SampleRange`] for the range contract.
pub fn ephemeris(
    star: &Star,
    observatory: &Observatory,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_minutes: u32,
) -> EphemResult<Vec<StarPosition>> {
    let range = SampleRange::new(start, end, step_minutes)?;
    let mut records = Vec::with_capacity(range.len());
    for instant in range.instants() {
        let jd = JulianDate::from_datetime(&instant);
        let equatorial = position_at(star, &jd);
        let lmst = LMST::at(&jd, observatory.longitude());
        let horizontal = to_horizontal(&equatorial, observatory.latitude(), &lmst);
        records.push(StarPosition::new(
            star.id(),
            instant,
            &equatorial,
            &horizontal,
        ));
    }
    Ok(records)
}

/// Resolves a star by identifier and constellation, then computes its
/// ephemeris. An unknown pair yields [`EphemError::UnresolvableBody`].
pub fn ephemeris_by_id(
    id: &str,
    constellation: &str,
    observatory: &Observatory,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_minutes: u32,
) -> EphemResult<Vec<StarPosition>> {
    let star = catalog::star_by_id(id, constellation)
        .ok_or_else(|| EphemError::unresolvable_body(BodyKind::Star, id))?;
    ephemeris(&star, observatory, start, end, step_minutes)
}
