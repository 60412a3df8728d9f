//! Duration decomposition and countdowns.
//!
//! A millisecond delta is split into days, hours, minutes and seconds by
//! successive floor division. This is not calendar aware and ignores DST.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A non-negative span split into whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

impl DurationParts {
    /// Decompose a millisecond count. Negative input is treated as zero.
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        DurationParts {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
            total_seconds: ms / MS_PER_SECOND,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }
}

impl std::fmt::Display for DurationParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d {:02}h {:02}m {:02}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

/// Split the time from `start` to `end` into days, hours, minutes, seconds.
///
/// ```rust
/// use calc_core::dates::duration_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(9, 30, 15).unwrap();
/// let parts = duration_between(start, end).unwrap();
/// assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (1, 1, 30, 15));
/// ```
pub fn duration_between(start: NaiveDateTime, end: NaiveDateTime) -> CalcResult<DurationParts> {
    if end < start {
        return Err(CalcError::invalid_input(
            "end",
            end.to_string(),
            format!("End must not be before start {}", start),
        ));
    }
    Ok(DurationParts::from_millis((end - start).num_milliseconds()))
}

/// Time remaining until a target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub remaining: DurationParts,
    /// True once the target is at or before `now`
    pub finished: bool,
}

/// Countdown from `now` to `target`. A past target reports zero and finished.
///
/// Remaining time rounds up to the next whole second, so the display never
/// shows all zeros while the target is still ahead.
///
/// Each call is an independent recomputation, so a display may call it on
/// any tick interval.
pub fn countdown(target: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let ms = (target - now).num_milliseconds().max(0);
    let remaining = DurationParts::from_millis((ms + MS_PER_SECOND - 1) / MS_PER_SECOND * MS_PER_SECOND);
    Countdown {
        remaining,
        finished: remaining.is_zero(),
    }
}

/// Countdown against the system clock.
pub fn countdown_from_now(target: DateTime<Utc>) -> Countdown {
    countdown(target, Utc::now())
}

/// Input for a countdown. `now` defaults to the system clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownInput {
    pub target: DateTime<Utc>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

impl CountdownInput {
    pub fn evaluate(&self) -> Countdown {
        countdown(self.target, self.now.unwrap_or_else(Utc::now))
    }
}

/// Input for a duration calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationInput {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

pub fn calculate(input: &DurationInput) -> CalcResult<DurationParts> {
    duration_between(input.start, input.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};

    #[test]
    fn test_from_millis() {
        let ms = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND + 999;
        let parts = DurationParts::from_millis(ms);
        assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (2, 3, 4, 5));
        assert_eq!(parts.total_seconds, 2 * 86_400 + 3 * 3600 + 4 * 60 + 5);
    }

    #[test]
    fn test_duration_rejects_reversed() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert!(duration_between(a, b).is_err());
        assert!(duration_between(b, b).unwrap().is_zero());
    }

    #[test]
    fn test_countdown_future_target() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        let target = now + Duration::seconds(3661);
        let c = countdown(target, now);
        assert!(!c.finished);
        assert_eq!((c.remaining.hours, c.remaining.minutes, c.remaining.seconds), (1, 1, 1));
    }

    #[test]
    fn test_countdown_sub_second_rounds_up() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let c = countdown(now + Duration::milliseconds(250), now);
        assert!(!c.finished);
        assert_eq!(c.remaining.total_seconds, 1);
        assert_eq!(c.remaining.to_string(), "0d 00h 00m 01s");

        let c = countdown(now + Duration::milliseconds(1500), now);
        assert_eq!(c.remaining.seconds, 2);

        let c = countdown(now, now);
        assert!(c.finished);
    }

    #[test]
    fn test_countdown_past_target() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let c = countdown(now - Duration::days(3), now);
        assert!(c.finished);
        assert!(c.remaining.is_zero());
    }

    #[test]
    fn test_display() {
        let parts = DurationParts::from_millis(MS_PER_DAY + 5 * MS_PER_MINUTE);
        assert_eq!(parts.to_string(), "1d 00h 05m 00s");
    }
}
