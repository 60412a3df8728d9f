//! Adding or subtracting calendar years, months and days.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A date moved by a calendar offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetDate {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Signed day count from the starting date
    pub days_moved: i64,
}

/// Shift `date` by whole years and months, then by days.
///
/// Month arithmetic clamps to the end of the month: Jan 31 + 1 month is
/// Feb 28 (or 29).
pub fn offset_date(date: NaiveDate, years: i32, months: i32, days: i64) -> CalcResult<OffsetDate> {
    let overflow = || CalcError::invalid_input("date", date.to_string(), "Resulting date is out of range");

    let total_months = i64::from(years) * 12 + i64::from(months);
    let month_step = Months::new(u32::try_from(total_months.unsigned_abs()).map_err(|_| overflow())?);
    let shifted = if total_months >= 0 {
        date.checked_add_months(month_step)
    } else {
        date.checked_sub_months(month_step)
    }
    .ok_or_else(overflow)?;

    let day_step = Days::new(days.unsigned_abs());
    let result = if days >= 0 {
        shifted.checked_add_days(day_step)
    } else {
        shifted.checked_sub_days(day_step)
    }
    .ok_or_else(overflow)?;

    Ok(OffsetDate {
        date: result,
        weekday: result.weekday(),
        days_moved: (result - date).num_days(),
    })
}

/// Input for a date offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateOffsetInput {
    pub date: NaiveDate,
    #[serde(default)]
    pub years: i32,
    #[serde(default)]
    pub months: i32,
    #[serde(default)]
    pub days: i64,
}

pub fn calculate(input: &DateOffsetInput) -> CalcResult<OffsetDate> {
    offset_date(input.date, input.years, input.months, input.days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_end_clamps() {
        assert_eq!(offset_date(d(2024, 1, 31), 0, 1, 0).unwrap().date, d(2024, 2, 29));
        assert_eq!(offset_date(d(2023, 1, 31), 0, 1, 0).unwrap().date, d(2023, 2, 28));
    }

    #[test]
    fn test_negative_offsets() {
        let r = offset_date(d(2024, 3, 1), -1, -2, -1).unwrap();
        assert_eq!(r.date, d(2022, 12, 31));
        assert!(r.days_moved < 0);
    }

    #[test]
    fn test_days_only() {
        let r = offset_date(d(2024, 12, 25), 0, 0, 10).unwrap();
        assert_eq!(r.date, d(2025, 1, 4));
        assert_eq!(r.weekday, Weekday::Sat);
        assert_eq!(r.days_moved, 10);
    }
}
