//! Shared building blocks for the skywatch ephemeris engine.
//!
//! `skywatch-core` holds everything the position models and the sampler have
//! in common: angle handling, observing-site types, astronomical constants,
//! and the unified error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, normalization, sexagesimal DMS/HMS formatting |
//! | [`constants`] | J2000, unit conversions, Earth/AU radii |
//! | [`errors`] | [`EphemError`] and [`EphemResult`] |
//! | [`math`] | Float modulo with well-defined negative behavior |
//! | [`obliquity`] | Mean obliquity of the ecliptic (IAU 1980) |
//! | [`place`] | [`Place`] and [`Observatory`] observing-site types |
//!
//! # Design notes
//!
//! - **Radians internally**: all angular computation uses radians; [`Angle`]
//!   converts for degrees/hours display.
//! - **Two-part Julian Dates**: functions accepting `(jd1, jd2)` preserve
//!   precision by splitting the date.
//! - **Validated at the boundary**: `Place` rejects out-of-range coordinate
//!   magnitudes at construction; everything downstream can assume a valid
//!   site.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod obliquity;
pub mod place;

pub use angle::Angle;
pub use errors::{BodyKind, CoordinateKind, EphemError, EphemResult};
pub use place::{LatitudePole, LongitudePole, Observatory, Place};
