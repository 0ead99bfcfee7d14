//! Topocentric ephemeris engine.
//!
//! Produces apparent-position tables (timestamp, RA/Dec, azimuth/altitude,
//! body-specific extras) for the Sun, the Moon, the catalog planets, and a
//! set of bright stars, as seen from a fixed terrestrial site over a closed
//! time range sampled at a fixed step.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`sampler`] | Validated time range and sample-instant iteration |
//! | [`catalog`] | Built-in planet elements and star entries |
//! | [`sun`] | Solar model and Sun ephemeris |
//! | [`moon`] | Lunar model, phase, and Moon ephemeris |
//! | [`planets`] | Keplerian planet model and planet ephemerides |
//! | [`stars`] | Proper-motion star model and star ephemerides |
//! | [`records`] | Per-sample position records and table formatting |
//!
//! Every entry point is a pure function of its arguments: same observatory,
//! range, and step always yield the same record sequence.
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use skywatch_core::{LatitudePole, LongitudePole, Observatory, Place};
//!
//! # fn main() -> skywatch_core::EphemResult<()> {
//! let place = Place::new(
//!     "Hassan",
//!     13.0068,
//!     LatitudePole::North,
//!     76.0996,
//!     LongitudePole::East,
//!     "Asia/Calcutta",
//!     "",
//! )?;
//! let start = Utc.with_ymd_and_hms(2017, 11, 7, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2017, 11, 7, 1, 0, 0).unwrap();
//! let observatory = Observatory::new(place, start);
//!
//! for record in skywatch_ephemeris::sun::ephemeris(&observatory, start, end, 10)? {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod earth;
pub mod moon;
pub mod planets;
pub mod records;
pub mod sampler;
pub mod stars;
pub mod sun;

pub use catalog::{planet_by_name, star_by_id, Planet, Star};
pub use moon::LunarPosition;
pub use records::{MoonPosition, PlanetPosition, StarPosition, SunPosition};
pub use sampler::SampleRange;
