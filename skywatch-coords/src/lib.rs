//! Coordinate frames and transforms for the skywatch ephemeris engine.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`equatorial`] | [`EquatorialPosition`]: right ascension, declination, optional distance |
//! | [`horizontal`] | [`HorizontalPosition`]: azimuth, altitude |
//! | [`transform`] | Equatorial ↔ horizontal conversion for a latitude and sidereal time |
//!
//! # Azimuth convention
//!
//! Azimuth is measured from **North through East**, in [0°, 360°), for every
//! body and every transform in this workspace: North = 0°, East = 90°,
//! South = 180°, West = 270°.

pub mod equatorial;
pub mod horizontal;
pub mod transform;

pub use equatorial::EquatorialPosition;
pub use horizontal::HorizontalPosition;
pub use transform::{to_equatorial, to_horizontal};
