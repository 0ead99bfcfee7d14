//! Angle normalization for astronomical coordinate systems.
//!
//! Different angular quantities need different ranges:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth, sidereal time | [0, 2pi) | [`wrap_0_2pi`] |
//! | Hour angle | [-pi, +pi) | [`wrap_pm_pi`] |
//! | Declination, latitude, altitude | [-pi/2, +pi/2] | [`clamp_dec`] |
//!
//! Wrapping preserves the direction on the sphere; clamping enforces a
//! physical limit (you cannot go "past" a pole). The wrapping functions use
//! `libm::fmod` rather than `%` because Rust's `%` is a remainder, which for
//! negative dividends lands outside the target range.

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [0, 2pi) radians.
///
/// Use for right ascension, azimuth, and sidereal time, where negative
/// values make no sense and 2pi is identified with 0.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let mut w = fmod(x, TWOPI);
    if w < 0.0 {
        w += TWOPI;
    }
    // fmod of a value just below a multiple of 2pi can round up to 2pi itself
    if w >= TWOPI {
        w -= TWOPI;
    }
    w
}

/// Wraps an angle to [-pi, +pi) radians.
///
/// Use for hour angles: negative means east of the meridian (not yet
/// crossed), positive means west. The discontinuity sits at the
/// anti-meridian, far from the observing position.
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let mut w = fmod(x + PI, TWOPI);
    if w < 0.0 {
        w += TWOPI;
    }
    w - PI
}

/// Clamps an angle to [-pi/2, +pi/2] radians.
///
/// Use for declination, latitude, and altitude, which saturate at the poles
/// rather than wrapping.
#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}
