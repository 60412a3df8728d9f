//! # Date and Time Arithmetic
//!
//! Calendar and clock calculations built on `chrono`. All functions take
//! explicit dates; only the `*_from_now` helpers and the optional default
//! reference date in [`AgeInput`] read the system clock.
//!
//! - [`age`] - years/months/days between two dates
//! - [`business_days`] - weekday count over an inclusive range
//! - [`duration`] - days/hours/minutes/seconds split and countdowns
//! - [`timezone`] - fixed-offset wall-clock projection
//! - [`offset`] - add or subtract calendar units

pub mod age;
pub mod business_days;
pub mod duration;
pub mod offset;
pub mod timezone;

pub use age::{calculate_age, AgeBreakdown, AgeInput};
pub use business_days::{count_business_days, is_weekend, BusinessDays, BusinessDaysInput};
pub use duration::{
    countdown, countdown_from_now, duration_between, Countdown, CountdownInput, DurationInput, DurationParts,
};
pub use offset::{offset_date, DateOffsetInput, OffsetDate};
pub use timezone::{project_time_zone, TimeZoneInput, ZoneProjection};
