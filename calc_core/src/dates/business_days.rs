//! Weekday counting between two dates.
//!
//! Weekends are Saturday and Sunday. There is no holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Day counts over an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDays {
    pub business_days: u32,
    pub weekend_days: u32,
    pub total_days: u32,
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Count weekdays from `start` to `end`, both inclusive.
///
/// ```rust
/// use calc_core::dates::count_business_days;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(count_business_days(monday, sunday).unwrap().business_days, 5);
/// ```
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> CalcResult<BusinessDays> {
    if start > end {
        return Err(CalcError::invalid_input(
            "end_date",
            end.to_string(),
            format!("End date must not be before start date {}", start),
        ));
    }

    let mut counts = BusinessDays {
        business_days: 0,
        weekend_days: 0,
        total_days: 0,
    };
    for date in start.iter_days().take_while(|d| *d <= end) {
        counts.total_days += 1;
        if is_weekend(date) {
            counts.weekend_days += 1;
        } else {
            counts.business_days += 1;
        }
    }
    Ok(counts)
}

/// Input for a business-day count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDaysInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub fn calculate(input: &BusinessDaysInput) -> CalcResult<BusinessDays> {
    count_business_days(input.start_date, input.end_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_single_weekday() {
        // 2024-01-01 is a Monday
        let monday = d(2024, 1, 1);
        assert_eq!(count_business_days(monday, monday).unwrap().business_days, 1);
    }

    #[test]
    fn test_single_weekend_day() {
        let saturday = d(2024, 1, 6);
        let counts = count_business_days(saturday, saturday).unwrap();
        assert_eq!(counts.business_days, 0);
        assert_eq!(counts.weekend_days, 1);
    }

    #[test]
    fn test_full_week() {
        let counts = count_business_days(d(2024, 1, 1), d(2024, 1, 7)).unwrap();
        assert_eq!(counts.business_days, 5);
        assert_eq!(counts.weekend_days, 2);
        assert_eq!(counts.total_days, 7);
    }

    #[test]
    fn test_across_year_boundary() {
        // Fri 2021-12-31 through Mon 2022-01-03
        let counts = count_business_days(d(2021, 12, 31), d(2022, 1, 3)).unwrap();
        assert_eq!(counts.business_days, 2);
        assert_eq!(counts.total_days, 4);
    }

    #[test]
    fn test_leap_february() {
        // February 2024: 29 days, starts Thursday, 21 weekdays
        let counts = count_business_days(d(2024, 2, 1), d(2024, 2, 29)).unwrap();
        assert_eq!(counts.business_days, 21);
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(count_business_days(d(2024, 1, 2), d(2024, 1, 1)).is_err());
    }
}
