//! Age calculation with calendar-aware borrowing.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Elapsed calendar time between a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    /// Plain day count between the two dates
    pub total_days: i64,
}

/// Last day of the month before `date`'s month ("day 0" of `date`'s month).
fn end_of_previous_month(date: NaiveDate) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
    first - Duration::days(1)
}

/// Calculate age as years, months and days.
///
/// A negative day difference borrows the length of the month preceding the
/// reference month, and keeps borrowing earlier months while it stays
/// negative (a 31st birth day against a short February). A negative month
/// difference then borrows a year.
///
/// ```rust
/// use calc_core::dates::calculate_age;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// let age = calculate_age(birth, reference).unwrap();
/// assert_eq!((age.years, age.months, age.days), (23, 11, 28));
/// ```
pub fn calculate_age(birth: NaiveDate, reference: NaiveDate) -> CalcResult<AgeBreakdown> {
    if birth > reference {
        return Err(CalcError::domain("age", format!("birth date {} is after {}", birth, reference)));
    }

    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    let mut borrowed = reference;
    while days < 0 {
        borrowed = end_of_previous_month(borrowed);
        months -= 1;
        days += borrowed.day() as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeBreakdown {
        years,
        months,
        days,
        total_days: (reference - birth).num_days(),
    })
}

/// Input for an age calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeInput {
    pub birth_date: NaiveDate,
    /// Defaults to today (UTC) when omitted
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

pub fn calculate(input: &AgeInput) -> CalcResult<AgeBreakdown> {
    let reference = input
        .reference_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    calculate_age(input.birth_date, reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_leap_year_month_borrow() {
        let age = calculate_age(d(2000, 3, 1), d(2024, 2, 29)).unwrap();
        assert_eq!(age.years, 23);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 28);
    }

    #[test]
    fn test_day_borrow_uses_previous_month_length() {
        // March has 31 days before April 10
        let age = calculate_age(d(1990, 1, 31), d(2020, 4, 10)).unwrap();
        assert_eq!((age.years, age.months, age.days), (30, 2, 10));

        // February 2023 has 28 days
        let age = calculate_age(d(2022, 12, 30), d(2023, 3, 5)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 2, 3));
    }

    #[test]
    fn test_short_february_borrows_twice() {
        // Feb has 28 days, not enough to cover the 30-day shortfall
        let age = calculate_age(d(2023, 1, 31), d(2023, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days, age.total_days), (0, 0, 29, 29));

        let age = calculate_age(d(2024, 1, 31), d(2024, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days, age.total_days), (0, 0, 30, 30));

        let age = calculate_age(d(2000, 12, 31), d(2023, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (22, 1, 29));
    }

    #[test]
    fn test_days_never_negative() {
        for reference in [d(2023, 3, 1), d(2024, 3, 1), d(2024, 5, 2)] {
            let mut birth = d(2021, 1, 1);
            while birth <= reference {
                let age = calculate_age(birth, reference).unwrap();
                assert!(age.days >= 0 && age.months >= 0 && age.years >= 0, "{} -> {:?}", birth, age);
                assert!(age.months < 12 && age.days < 31);
                birth = birth.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn test_same_day() {
        let age = calculate_age(d(2010, 6, 15), d(2010, 6, 15)).unwrap();
        assert_eq!((age.years, age.months, age.days, age.total_days), (0, 0, 0, 0));
    }

    #[test]
    fn test_exact_birthday() {
        let age = calculate_age(d(1985, 7, 4), d(2025, 7, 4)).unwrap();
        assert_eq!((age.years, age.months, age.days), (40, 0, 0));
    }

    #[test]
    fn test_birth_after_reference_rejected() {
        assert!(calculate_age(d(2030, 1, 1), d(2020, 1, 1)).is_err());
    }
}
