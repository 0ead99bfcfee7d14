pub const J2000_JD: f64 = 2451545.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_PER_MINUTE: i64 = 60;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const HOURS_PER_DAY: f64 = 24.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

/// Astronomical Unit in kilometers (derived from the IAU 2012 definition).
pub const AU_KM: f64 = 149_597_870.7;

/// WGS84 equatorial radius in kilometers. Used to convert lunar distances
/// expressed in Earth radii.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.137;
