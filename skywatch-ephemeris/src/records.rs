//! Position records: one immutable value per sample instant.
//!
//! The four variants share a timestamp + azimuth + altitude + RA/Dec core
//! and differ only in the auxiliary fields their body exposes (planet and
//! Sun distance, lunar distance and phase angle). Each variant provides a
//! fixed table [`header`](SunPosition::header) and renders itself as one
//! fixed-width row via `Display`, using the sexagesimal formatters from
//! `skywatch-core`. Records are created fresh per sample and never mutated.

use chrono::{DateTime, Utc};
use skywatch_coords::{EquatorialPosition, HorizontalPosition};
use skywatch_core::angle::{DmsFmt, HmsFmt};
use skywatch_core::Angle;
use std::fmt;

const RA_FMT: HmsFmt = HmsFmt { frac_digits: 1 };
const DEC_FMT: DmsFmt = DmsFmt { frac_digits: 0 };
const ALT_FMT: DmsFmt = DmsFmt { frac_digits: 0 };

fn core_row(
    instant: &DateTime<Utc>,
    ra: Angle,
    dec: Angle,
    azimuth: Angle,
    altitude: Angle,
) -> String {
    format!(
        "{}  {}  {}  {:>8.4}  {}",
        instant.format("%Y-%m-%d %H:%M"),
        RA_FMT.fmt(ra),
        DEC_FMT.fmt(dec),
        azimuth.degrees(),
        ALT_FMT.fmt(altitude),
    )
}

// Shared column header, as a macro so the body-specific headers can be
// concatenated at compile time and never drift out of sync with core_row.
macro_rules! core_columns {
    () => {
        "Time (UTC)        RA             Dec            Az (°)    Altitude"
    };
}

const CORE_HEADER: &str = core_columns!();

/// One Sun sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    instant: DateTime<Utc>,
    right_ascension: Angle,
    declination: Angle,
    azimuth: Angle,
    altitude: Angle,
    distance_au: f64,
}

impl SunPosition {
    pub(crate) fn new(
        instant: DateTime<Utc>,
        equatorial: &EquatorialPosition,
        horizontal: &HorizontalPosition,
    ) -> Self {
        Self {
            instant,
            right_ascension: equatorial.right_ascension(),
            declination: equatorial.declination(),
            azimuth: horizontal.azimuth(),
            altitude: horizontal.altitude(),
            distance_au: equatorial.distance_au().unwrap_or(1.0),
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    pub fn distance_au(&self) -> f64 {
        self.distance_au
    }

    /// Column header matching the `Display` row.
    pub fn header() -> &'static str {
        concat!(core_columns!(), "       Dist (AU)")
    }
}

impl fmt::Display for SunPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>9.6}",
            core_row(
                &self.instant,
                self.right_ascension,
                self.declination,
                self.azimuth,
                self.altitude
            ),
            self.distance_au,
        )
    }
}

/// One planet sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetPosition {
    planet: String,
    instant: DateTime<Utc>,
    right_ascension: Angle,
    declination: Angle,
    azimuth: Angle,
    altitude: Angle,
    distance_au: f64,
}

impl PlanetPosition {
    pub(crate) fn new(
        planet: &str,
        instant: DateTime<Utc>,
        equatorial: &EquatorialPosition,
        horizontal: &HorizontalPosition,
    ) -> Self {
        Self {
            planet: planet.to_string(),
            instant,
            right_ascension: equatorial.right_ascension(),
            declination: equatorial.declination(),
            azimuth: horizontal.azimuth(),
            altitude: horizontal.altitude(),
            distance_au: equatorial.distance_au().unwrap_or(f64::NAN),
        }
    }

    pub fn planet(&self) -> &str {
        &self.planet
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    /// Geocentric distance in astronomical units.
    pub fn distance_au(&self) -> f64 {
        self.distance_au
    }

    /// Column header matching the `Display` row.
    pub fn header() -> &'static str {
        concat!(core_columns!(), "       Dist (AU)")
    }
}

impl fmt::Display for PlanetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>9.4}",
            core_row(
                &self.instant,
                self.right_ascension,
                self.declination,
                self.azimuth,
                self.altitude
            ),
            self.distance_au,
        )
    }
}

/// One Moon sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPosition {
    instant: DateTime<Utc>,
    right_ascension: Angle,
    declination: Angle,
    azimuth: Angle,
    altitude: Angle,
    distance_km: f64,
    phase_angle: Angle,
}

impl MoonPosition {
    pub(crate) fn new(
        instant: DateTime<Utc>,
        equatorial: &EquatorialPosition,
        horizontal: &HorizontalPosition,
        distance_km: f64,
        phase_angle: Angle,
    ) -> Self {
        Self {
            instant,
            right_ascension: equatorial.right_ascension(),
            declination: equatorial.declination(),
            azimuth: horizontal.azimuth(),
            altitude: horizontal.altitude(),
            distance_km,
            phase_angle,
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    /// Geocentric distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Sun–Earth–Moon phase angle: 0° at full moon, 180° at new moon.
    pub fn phase_angle(&self) -> Angle {
        self.phase_angle
    }

    /// Illuminated fraction of the disc, in [0, 1].
    pub fn illuminated_fraction(&self) -> f64 {
        (1.0 + self.phase_angle.cos()) / 2.0
    }

    /// Column header matching the `Display` row.
    pub fn header() -> &'static str {
        concat!(core_columns!(), "       Dist (km)  Phase (°)")
    }
}

impl fmt::Display for MoonPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>9.0}  {:>8.2}",
            core_row(
                &self.instant,
                self.right_ascension,
                self.declination,
                self.azimuth,
                self.altitude
            ),
            self.distance_km,
            self.phase_angle.degrees(),
        )
    }
}

/// One star sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarPosition {
    star: String,
    instant: DateTime<Utc>,
    right_ascension: Angle,
    declination: Angle,
    azimuth: Angle,
    altitude: Angle,
}

impl StarPosition {
    pub(crate) fn new(
        star: &str,
        instant: DateTime<Utc>,
        equatorial: &EquatorialPosition,
        horizontal: &HorizontalPosition,
    ) -> Self {
        Self {
            star: star.to_string(),
            instant,
            right_ascension: equatorial.right_ascension(),
            declination: equatorial.declination(),
            azimuth: horizontal.azimuth(),
            altitude: horizontal.altitude(),
        }
    }

    pub fn star(&self) -> &str {
        &self.star
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    /// Column header matching the `Display` row.
    pub fn header() -> &'static str {
        CORE_HEADER
    }
}

impl fmt::Display for StarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            core_row(
                &self.instant,
                self.right_ascension,
                self.declination,
                self.azimuth,
                self.altitude
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_positions() -> (EquatorialPosition, HorizontalPosition) {
        let eq = EquatorialPosition::with_distance(
            Angle::from_hours(14.7),
            Angle::from_degrees(-16.2),
            0.9921,
        );
        let hor = HorizontalPosition::new(Angle::from_degrees(112.3456), Angle::from_degrees(-23.75));
        (eq, hor)
    }

    #[test]
    fn test_sun_row_contains_all_columns() {
        let instant = Utc.with_ymd_and_hms(2017, 11, 7, 0, 10, 0).unwrap();
        let (eq, hor) = sample_positions();
        let record = SunPosition::new(instant, &eq, &hor);

        let row = record.to_string();
        assert!(row.starts_with("2017-11-07 00:10"), "row: {}", row);
        assert!(row.contains("14h 42m"), "row: {}", row);
        assert!(row.contains("-16° 12'"), "row: {}", row);
        assert!(row.contains("112.3456"), "row: {}", row);
        assert!(row.contains("0.992100"), "row: {}", row);
    }

    #[test]
    fn test_headers_name_body_specific_columns() {
        assert!(SunPosition::header().contains("Dist (AU)"));
        assert!(PlanetPosition::header().contains("Dist (AU)"));
        assert!(MoonPosition::header().contains("Phase (°)"));
        assert!(!StarPosition::header().contains("Dist"));
        for header in [
            SunPosition::header(),
            PlanetPosition::header(),
            MoonPosition::header(),
            StarPosition::header(),
        ] {
            assert!(header.contains("Time (UTC)"));
            assert!(header.contains("Az (°)"));
            assert!(header.contains("Altitude"));
        }
    }

    #[test]
    fn test_body_headers_extend_the_shared_columns() {
        // The star header is exactly the shared columns; every other body
        // appends its extras after them
        for header in [
            SunPosition::header(),
            PlanetPosition::header(),
            MoonPosition::header(),
        ] {
            assert!(
                header.starts_with(StarPosition::header()),
                "header diverges from the shared columns: {}",
                header
            );
        }
    }

    #[test]
    fn test_moon_illuminated_fraction() {
        let instant = Utc.with_ymd_and_hms(2017, 11, 7, 0, 0, 0).unwrap();
        let (eq, hor) = sample_positions();

        let full = MoonPosition::new(instant, &eq, &hor, 384_400.0, Angle::ZERO);
        assert!((full.illuminated_fraction() - 1.0).abs() < 1e-12);

        let new = MoonPosition::new(instant, &eq, &hor, 384_400.0, Angle::PI);
        assert!(new.illuminated_fraction().abs() < 1e-12);

        let quarter = MoonPosition::new(instant, &eq, &hor, 384_400.0, Angle::HALF_PI);
        assert!((quarter.illuminated_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_star_record_carries_identity() {
        let instant = Utc.with_ymd_and_hms(2017, 11, 7, 0, 0, 0).unwrap();
        let (eq, hor) = sample_positions();
        let record = StarPosition::new("Sirius", instant, &eq, &hor);
        assert_eq!(record.star(), "Sirius");
        assert_eq!(record.instant(), instant);
    }
}
