//! Fixed-step sampling of a time span.
//!
//! [`SampleRange`] is the validated description of "from `start` to `end`
//! every `step_minutes`". Validation happens exactly once, at construction:
//! a range that fails never produces any record, and a range that succeeds
//! can be iterated without further checks.
//!
//! # End-inclusion policy
//!
//! Samples are generated at `start + k·step` for
//! `k = 0 ..= floor((end − start) / step)`. The `end` instant itself appears
//! only when the step sequence lands on it exactly; there is no forced final
//! partial-step sample and no rounding. `start == end` yields exactly one
//! sample, at `start`.

use chrono::{DateTime, Duration, Utc};
use skywatch_core::{EphemError, EphemResult};

/// A validated half-open-or-closed sampling range with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_minutes: u32,
}

impl SampleRange {
    /// Validates and builds a sampling range.
    ///
    /// # Errors
    ///
    /// [`EphemError::InvalidRange`] when `start > end` or
    /// `step_minutes == 0`. No partial or clamped range is ever produced.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, step_minutes: u32) -> EphemResult<Self> {
        if step_minutes == 0 {
            return Err(EphemError::invalid_range("step must be a positive number of minutes"));
        }
        if start > end {
            return Err(EphemError::invalid_range(format!(
                "start {} is after end {}",
                start.format("%Y-%m-%dT%H:%M:%SZ"),
                end.format("%Y-%m-%dT%H:%M:%SZ"),
            )));
        }
        Ok(Self {
            start,
            end,
            step_minutes,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    /// Number of samples: `floor((end − start) / step) + 1`.
    pub fn len(&self) -> usize {
        let span_seconds = (self.end - self.start).num_seconds();
        let step_seconds = self.step_minutes as i64 * 60;
        (span_seconds / step_seconds) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        // A validated range always contains at least the start sample.
        false
    }

    /// The sample instants in generation order: strictly increasing, spaced
    /// exactly one step apart.
    pub fn instants(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        let step_seconds = self.step_minutes as i64 * 60;
        let start = self.start;
        (0..self.len() as i64).map(move |k| start + Duration::seconds(step_seconds * k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 11, 7, h, m, 0).unwrap()
    }

    #[test]
    fn test_aligned_range_includes_end() {
        let range = SampleRange::new(at(0, 0), at(1, 0), 10).unwrap();
        let instants: Vec<_> = range.instants().collect();
        assert_eq!(instants.len(), 7);
        assert_eq!(range.len(), 7);
        assert_eq!(instants[0], at(0, 0));
        assert_eq!(*instants.last().unwrap(), at(1, 0), "aligned end is included");
    }

    #[test]
    fn test_non_aligned_range_stops_short_of_end() {
        // 65 minutes at a 10-minute step: last sample is start+60m, not end
        let range = SampleRange::new(at(0, 0), at(1, 5), 10).unwrap();
        let instants: Vec<_> = range.instants().collect();
        assert_eq!(instants.len(), 7);
        assert_eq!(
            *instants.last().unwrap(),
            at(1, 0),
            "no forced partial-step sample at the end"
        );
    }

    #[test]
    fn test_start_equals_end_single_sample() {
        let range = SampleRange::new(at(0, 0), at(0, 0), 10).unwrap();
        let instants: Vec<_> = range.instants().collect();
        assert_eq!(instants, vec![at(0, 0)]);
    }

    #[test]
    fn test_step_larger_than_span() {
        let range = SampleRange::new(at(0, 0), at(0, 30), 60).unwrap();
        let instants: Vec<_> = range.instants().collect();
        assert_eq!(instants, vec![at(0, 0)], "only the start fits");
    }

    #[test]
    fn test_strictly_increasing_by_step() {
        let range = SampleRange::new(at(0, 0), at(6, 0), 25).unwrap();
        let instants: Vec<_> = range.instants().collect();
        for pair in instants.windows(2) {
            assert_eq!(
                (pair[1] - pair[0]).num_minutes(),
                25,
                "consecutive samples differ by exactly one step"
            );
        }
    }

    #[test]
    fn test_start_after_end_rejected() {
        let err = SampleRange::new(at(1, 0), at(0, 0), 10).unwrap_err();
        assert!(matches!(err, EphemError::InvalidRange { .. }));
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = SampleRange::new(at(0, 0), at(1, 0), 0).unwrap_err();
        assert!(matches!(err, EphemError::InvalidRange { .. }));
    }

    #[test]
    fn test_multi_day_span_length() {
        let start = Utc.with_ymd_and_hms(2017, 11, 7, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 11, 9, 0, 0, 0).unwrap();
        let range = SampleRange::new(start, end, 60).unwrap();
        assert_eq!(range.len(), 49, "48 hourly steps plus the start");
    }
}
