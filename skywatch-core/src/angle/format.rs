//! Sexagesimal formatting for astronomical coordinates.
//!
//! Two notations are used side by side in ephemeris tables:
//!
//! - **DMS** (`+DD° MM' SS.ss"`) for declination, latitude, and altitude.
//!   The sign is always explicit.
//! - **HMS** (`HHh MMm SS.sss`) for right ascension and hour angles.
//!   Always positive; negative angles wrap to [0, 24h).
//!
//! These formatters exist for presentation only — computation never goes
//! through strings.
//!
//! ```
//! use skywatch_core::angle::{Angle, DmsFmt, HmsFmt};
//!
//! let dec = Angle::from_degrees(38.783611);
//! assert_eq!(DmsFmt { frac_digits: 0 }.fmt(dec), "+38° 47' 01\"");
//!
//! let ra = Angle::from_hours(18.615556);
//! assert_eq!(HmsFmt { frac_digits: 1 }.fmt(ra), "18h 36m 56.0s");
//! ```

use super::normalize::wrap_0_2pi;
use super::Angle;

/// Formatter for degrees-minutes-seconds notation.
#[derive(Copy, Clone, Debug)]
pub struct DmsFmt {
    /// Decimal places for the arcseconds component.
    pub frac_digits: usize,
}

impl DmsFmt {
    pub fn fmt(&self, angle: Angle) -> String {
        let total = angle.degrees();
        let sign = if total < 0.0 { '-' } else { '+' };
        let (d, m, s) = split_sexagesimal(total.abs(), self.frac_digits);
        format!(
            "{}{:02}° {:02}' {:0width$.prec$}\"",
            sign,
            d,
            m,
            s,
            width = seconds_width(self.frac_digits),
            prec = self.frac_digits
        )
    }
}

/// Formatter for hours-minutes-seconds notation.
#[derive(Copy, Clone, Debug)]
pub struct HmsFmt {
    /// Decimal places for the seconds component.
    pub frac_digits: usize,
}

impl HmsFmt {
    pub fn fmt(&self, angle: Angle) -> String {
        let hours = Angle::from_radians(wrap_0_2pi(angle.radians())).hours();
        let (h, m, s) = split_sexagesimal(hours, self.frac_digits);
        format!(
            "{:02}h {:02}m {:0width$.prec$}s",
            h,
            m,
            s,
            width = seconds_width(self.frac_digits),
            prec = self.frac_digits
        )
    }
}

/// Formats a signed latitude as `DD° MM' SS.s" N|S`.
pub fn latitude_string(latitude: Angle) -> String {
    let hemisphere = if latitude.radians() < 0.0 { 'S' } else { 'N' };
    let (d, m, s) = split_sexagesimal(latitude.degrees().abs(), 1);
    format!("{:02}° {:02}' {:04.1}\" {}", d, m, s, hemisphere)
}

/// Formats a signed longitude as `DDD° MM' SS.s" E|W`.
pub fn longitude_string(longitude: Angle) -> String {
    let hemisphere = if longitude.radians() < 0.0 { 'W' } else { 'E' };
    let (d, m, s) = split_sexagesimal(longitude.degrees().abs(), 1);
    format!("{:03}° {:02}' {:04.1}\" {}", d, m, s, hemisphere)
}

/// Splits a non-negative value into whole units, whole sixtieths, and
/// fractional thirty-six-hundredths, rounding the seconds to `frac_digits`
/// and carrying overflow back up so `60.0"` never appears in output.
fn split_sexagesimal(value: f64, frac_digits: usize) -> (u32, u32, f64) {
    let mut units = value.trunc() as u32;
    let rem = (value - value.trunc()) * 60.0;
    let mut minutes = rem.trunc() as u32;
    let mut seconds = (rem - rem.trunc()) * 60.0;

    let scale = 10f64.powi(frac_digits as i32);
    seconds = (seconds * scale).round() / scale;
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        units += 1;
    }
    (units, minutes, seconds)
}

// Zero-padded width of the seconds field: two integer digits, plus the
// decimal point and fraction when requested.
fn seconds_width(frac_digits: usize) -> usize {
    if frac_digits == 0 {
        2
    } else {
        3 + frac_digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_positive_and_negative() {
        let dms = DmsFmt { frac_digits: 0 };
        assert_eq!(dms.fmt(Angle::from_degrees(38.783611)), "+38° 47' 01\"");
        assert_eq!(dms.fmt(Angle::from_degrees(-5.375)), "-05° 22' 30\"");
        assert_eq!(dms.fmt(Angle::ZERO), "+00° 00' 00\"");
    }

    #[test]
    fn test_dms_fractional_seconds() {
        let dms = DmsFmt { frac_digits: 2 };
        assert_eq!(dms.fmt(Angle::from_degrees(1.0 / 3600.0)), "+00° 00' 01.00\"");
    }

    #[test]
    fn test_hms_wraps_negative() {
        let hms = HmsFmt { frac_digits: 0 };
        // -1h wraps to 23h
        assert_eq!(hms.fmt(Angle::from_hours(-1.0)), "23h 00m 00s");
        assert_eq!(hms.fmt(Angle::from_hours(18.615556)), "18h 36m 56s");
    }

    #[test]
    fn test_rounding_carries_past_sixty() {
        // 59.9996" rounds to 60.00" at 2 digits and must carry into minutes
        let dms = DmsFmt { frac_digits: 2 };
        let a = Angle::from_degrees(10.0 + 59.0 / 60.0 + 59.9996 / 3600.0);
        assert_eq!(dms.fmt(a), "+11° 00' 00.00\"");
    }

    #[test]
    fn test_latitude_longitude_strings() {
        assert_eq!(
            latitude_string(Angle::from_degrees(13.0068)),
            "13° 00' 24.5\" N"
        );
        assert_eq!(
            latitude_string(Angle::from_degrees(-33.8688)),
            "33° 52' 07.7\" S"
        );
        assert_eq!(
            longitude_string(Angle::from_degrees(76.0996)),
            "076° 05' 58.6\" E"
        );
        assert_eq!(
            longitude_string(Angle::from_degrees(-116.865)),
            "116° 51' 54.0\" W"
        );
    }
}
