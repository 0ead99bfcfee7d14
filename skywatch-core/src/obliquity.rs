//! Mean obliquity of the ecliptic.

use crate::angle::Angle;
use crate::constants::{ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Mean obliquity of the ecliptic (IAU 1980 series), for a two-part Julian
/// Date. Apparent-position work at this precision level does not need the
/// nutation-in-obliquity correction.
///
/// The split `(jd1, jd2)` form preserves precision: typically `jd1` carries
/// the date at midnight and `jd2` the day fraction.
pub fn mean_obliquity(jd1: f64, jd2: f64) -> Angle {
    let t = ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY;
    let eps0_arcsec = 84381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    Angle::from_radians(eps0_arcsec * ARCSEC_TO_RAD)
}
