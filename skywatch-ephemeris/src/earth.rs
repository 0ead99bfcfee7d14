//! Earth's heliocentric position, derived from the solar model.
//!
//! The planet model needs Earth's heliocentric position to turn a planet's
//! heliocentric coordinates into geocentric ones. At this precision the
//! cleanest source is the solar model itself: the Sun's geocentric ecliptic
//! vector, negated, is Earth's heliocentric ecliptic vector.

use crate::sun;
use skywatch_time::JulianDate;

/// Earth's heliocentric position in ecliptic Cartesian coordinates, AU.
/// The z component is zero by construction (the ecliptic is Earth's orbital
/// plane; the Sun's apparent ecliptic latitude is negligible here).
pub fn heliocentric_position(jd: &JulianDate) -> [f64; 3] {
    let solar = sun::apparent_ecliptic(jd);
    let (sin_lon, cos_lon) = solar.longitude.sin_cos();
    [
        -solar.distance_au * cos_lon,
        -solar.distance_au * sin_lon,
        0.0,
    ]
}
