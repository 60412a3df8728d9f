//! Projecting a wall-clock time from one fixed UTC offset to another.

use chrono::{FixedOffset, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Widest real-world offset, in minutes (UTC-12:00 .. UTC+14:00 with slack).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Wall-clock time shown in the target zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneProjection {
    pub source: NaiveDateTime,
    pub projected: NaiveDateTime,
    /// Calendar days between source and projected dates (-1, 0 or +1 in practice)
    pub day_shift: i64,
    pub offset_difference_minutes: i32,
}

fn fixed_offset(field: &str, minutes: i32) -> CalcResult<FixedOffset> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(CalcError::invalid_input(
            field,
            minutes.to_string(),
            "Offset must be within +/-14:00",
        ));
    }
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| CalcError::invalid_input(field, minutes.to_string(), "Invalid UTC offset"))
}

/// Show `local` (a wall-clock time at `from_offset_minutes`) as it reads at
/// `to_offset_minutes`.
///
/// ```rust
/// use calc_core::dates::project_time_zone;
/// use chrono::NaiveDate;
///
/// let noon_utc = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let tokyo = project_time_zone(noon_utc, 0, 9 * 60).unwrap();
/// assert_eq!(tokyo.projected.to_string(), "2024-03-01 21:00:00");
/// ```
pub fn project_time_zone(
    local: NaiveDateTime,
    from_offset_minutes: i32,
    to_offset_minutes: i32,
) -> CalcResult<ZoneProjection> {
    let from = fixed_offset("from_offset_minutes", from_offset_minutes)?;
    let to = fixed_offset("to_offset_minutes", to_offset_minutes)?;

    let instant = from
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| CalcError::invalid_input("local", local.to_string(), "Ambiguous local time"))?;
    let projected = instant.with_timezone(&to).naive_local();

    Ok(ZoneProjection {
        source: local,
        projected,
        day_shift: (projected.date() - local.date()).num_days(),
        offset_difference_minutes: to_offset_minutes - from_offset_minutes,
    })
}

/// Input for a time-zone projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeZoneInput {
    pub local: NaiveDateTime,
    pub from_offset_minutes: i32,
    pub to_offset_minutes: i32,
}

pub fn calculate(input: &TimeZoneInput) -> CalcResult<ZoneProjection> {
    project_time_zone(input.local, input.from_offset_minutes, input.to_offset_minutes)
}
