//! Time-scale conversions for the skywatch ephemeris engine.
//!
//! The engine consumes calendar instants as `chrono::DateTime<Utc>` — an
//! unambiguous absolute time, already resolved to a fixed offset — and needs
//! two derived scales from them:
//!
//! | Scale | Type | Purpose |
//! |-------|------|---------|
//! | Julian Date | [`JulianDate`] | Uniform day count driving the body models |
//! | Sidereal time | [`GMST`], [`LMST`] | Relates equatorial and horizontal frames |
//!
//! All computation assumes the Gregorian calendar. The distinction between
//! UT1 and UTC (under a second) is far below the precision of the
//! low-precision position models and is ignored throughout.

pub mod julian;
pub mod sidereal;

pub use julian::JulianDate;
pub use sidereal::{GMST, LMST};
