//! Julian Date as a split two-part value.

use chrono::{DateTime, Datelike, Timelike, Utc};
use skywatch_core::constants::{
    J2000_JD, MJD_ZERO_POINT, MINUTES_PER_DAY, SECONDS_PER_DAY_F64,
};
use std::fmt;

/// A Julian Date held as two parts whose sum is the full value.
///
/// Keeping `jd1` (date at midnight) and `jd2` (day fraction) separate
/// preserves sub-second precision: a single f64 near 2.45e6 has only ~10
/// microseconds of resolution, while the split form keeps the fraction at
/// full precision. Continuous across calendar day boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    /// J2000.0 epoch: 2000-01-01 12:00, JD 2451545.0.
    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Days elapsed since J2000.0, computed without collapsing the split.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / skywatch_core::constants::DAYS_PER_JULIAN_CENTURY
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_minutes(&self, minutes: f64) -> Self {
        self.add_days(minutes / MINUTES_PER_DAY)
    }

    /// Builds a Julian Date from Gregorian calendar components.
    ///
    /// The date algorithm matches ERFA's eraCal2jd convention: `jd1` is the
    /// full Julian Date at midnight, `jd2` the fraction of day from the time
    /// components.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        // MJD for 0h of the given day
        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }

    /// Builds a Julian Date from an absolute instant.
    pub fn from_datetime(instant: &DateTime<Utc>) -> Self {
        let second = instant.second() as f64 + instant.nanosecond() as f64 * 1e-9;
        Self::from_calendar(
            instant.year(),
            instant.month() as u8,
            instant.day() as u8,
            instant.hour() as u8,
            instant.minute() as u8,
            second,
        )
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_j2000_epoch() {
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(jd.to_f64(), J2000_JD);
        assert_eq!(jd.days_since_j2000(), 0.0);
    }

    #[test]
    fn test_known_dates() {
        // 2017-11-07 00:00 UTC
        let jd = JulianDate::from_calendar(2017, 11, 7, 0, 0, 0.0);
        assert_eq!(jd.to_f64(), 2458064.5);

        // Unix epoch: 1970-01-01 00:00 UTC
        let jd = JulianDate::from_calendar(1970, 1, 1, 0, 0, 0.0);
        assert_eq!(jd.to_f64(), 2440587.5);
    }

    #[test]
    fn test_continuous_across_day_boundary() {
        let before = JulianDate::from_calendar(2017, 11, 6, 23, 59, 0.0);
        let after = JulianDate::from_calendar(2017, 11, 7, 0, 1, 0.0);
        let delta_minutes = (after.to_f64() - before.to_f64()) * MINUTES_PER_DAY;
        assert!(
            (delta_minutes - 2.0).abs() < 1e-6,
            "two minutes across midnight, got {} minutes",
            delta_minutes
        );
    }

    #[test]
    fn test_continuous_across_month_and_year_boundary() {
        let before = JulianDate::from_calendar(2019, 12, 31, 23, 0, 0.0);
        let after = JulianDate::from_calendar(2020, 1, 1, 1, 0, 0.0);
        let delta_hours = (after.to_f64() - before.to_f64()) * 24.0;
        assert!((delta_hours - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_leap_year_february() {
        let feb29 = JulianDate::from_calendar(2020, 2, 29, 0, 0, 0.0);
        let mar01 = JulianDate::from_calendar(2020, 3, 1, 0, 0, 0.0);
        assert_eq!(mar01.to_f64() - feb29.to_f64(), 1.0);
    }

    #[test]
    fn test_from_datetime_matches_calendar() {
        let instant = Utc.with_ymd_and_hms(2017, 11, 7, 0, 10, 0).unwrap();
        let jd = JulianDate::from_datetime(&instant);
        let reference = JulianDate::from_calendar(2017, 11, 7, 0, 10, 0.0);
        assert_eq!(jd, reference);
    }

    #[test]
    fn test_add_minutes() {
        let jd = JulianDate::j2000();
        let later = jd.add_minutes(10.0);
        let delta = later.days_since_j2000() - jd.days_since_j2000();
        assert!((delta - 10.0 / 1440.0).abs() < 1e-15);
    }

    #[test]
    fn test_split_preserves_fraction() {
        let jd = JulianDate::from_calendar(2017, 11, 7, 0, 0, 0.125);
        // jd1 carries the half-integer date, jd2 the sub-day time
        assert_eq!(jd.jd1(), 2458064.5);
        assert!((jd.jd2() - 0.125 / SECONDS_PER_DAY_F64).abs() < 1e-18);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = JulianDate::from_calendar(2017, 11, 7, 6, 30, 15.5);
        let json = serde_json::to_string(&original).unwrap();
        let back: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back, "JulianDate lost in serde round-trip");
    }
}
