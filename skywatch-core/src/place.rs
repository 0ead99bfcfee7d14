//! Observing sites.
//!
//! A [`Place`] describes a fixed terrestrial observing location. Latitude and
//! longitude are stored as non-negative magnitudes paired with a pole enum
//! ([`LatitudePole`], [`LongitudePole`]); the sign is derived on access and
//! never stored raw, so a site can never silently flip hemisphere through a
//! sign convention mismatch.
//!
//! An [`Observatory`] bundles a `Place` with a reference instant used as the
//! default computation time. Both are immutable, read-only inputs to the
//! engine; the engine retains no references to them after a call returns.

use crate::angle::Angle;
use crate::errors::{CoordinateKind, EphemError, EphemResult};
use chrono::{DateTime, Utc};

/// Hemisphere of a latitude magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatitudePole {
    North,
    South,
}

impl LatitudePole {
    /// Sign applied when combining with the magnitude: North is positive.
    pub fn sign(&self) -> f64 {
        match self {
            LatitudePole::North => 1.0,
            LatitudePole::South => -1.0,
        }
    }
}

/// Hemisphere of a longitude magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LongitudePole {
    East,
    West,
}

impl LongitudePole {
    /// Sign applied when combining with the magnitude: East is positive.
    pub fn sign(&self) -> f64 {
        match self {
            LongitudePole::East => 1.0,
            LongitudePole::West => -1.0,
        }
    }
}

/// A fixed terrestrial observing location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    name: String,
    latitude_magnitude: f64,
    latitude_pole: LatitudePole,
    longitude_magnitude: f64,
    longitude_pole: LongitudePole,
    /// IANA identifier, e.g. `"Asia/Calcutta"`. Kept for presentation; the
    /// engine itself only ever consumes resolved UTC instants.
    time_zone: String,
    notes: String,
}

impl Place {
    /// Creates a place, validating the coordinate magnitudes.
    ///
    /// # Errors
    ///
    /// [`EphemError::InvalidCoordinate`] when the latitude magnitude is
    /// outside [0, 90] or the longitude magnitude outside [0, 180].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        latitude_magnitude: f64,
        latitude_pole: LatitudePole,
        longitude_magnitude: f64,
        longitude_pole: LongitudePole,
        time_zone: &str,
        notes: &str,
    ) -> EphemResult<Self> {
        if !(0.0..=90.0).contains(&latitude_magnitude) || !latitude_magnitude.is_finite() {
            return Err(EphemError::invalid_coordinate(
                CoordinateKind::Latitude,
                latitude_magnitude,
                "magnitude must lie in [0°, 90°]",
            ));
        }
        if !(0.0..=180.0).contains(&longitude_magnitude) || !longitude_magnitude.is_finite() {
            return Err(EphemError::invalid_coordinate(
                CoordinateKind::Longitude,
                longitude_magnitude,
                "magnitude must lie in [0°, 180°]",
            ));
        }
        Ok(Self {
            name: name.to_string(),
            latitude_magnitude,
            latitude_pole,
            longitude_magnitude,
            longitude_pole,
            time_zone: time_zone.to_string(),
            notes: notes.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Signed latitude: magnitude combined with the pole, North positive.
    pub fn latitude(&self) -> Angle {
        Angle::from_degrees(self.latitude_pole.sign() * self.latitude_magnitude)
    }

    /// Signed longitude: magnitude combined with the pole, East positive.
    pub fn longitude(&self) -> Angle {
        Angle::from_degrees(self.longitude_pole.sign() * self.longitude_magnitude)
    }
}

/// An observing site plus the reference instant used as its default
/// computation time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observatory {
    place: Place,
    reference_instant: DateTime<Utc>,
}

impl Observatory {
    pub fn new(place: Place, reference_instant: DateTime<Utc>) -> Self {
        Self {
            place,
            reference_instant,
        }
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    pub fn reference_instant(&self) -> DateTime<Utc> {
        self.reference_instant
    }

    pub fn latitude(&self) -> Angle {
        self.place.latitude()
    }

    pub fn longitude(&self) -> Angle {
        self.place.longitude()
    }
}
