//! Civil time to Julian Day conversion.
//!
//! All inputs are UT. Dates follow the proleptic Gregorian calendar on both
//! sides of the 1582 reform, which is what Swiss Ephemeris does when called
//! with `GREG_CAL`.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const MAX_NANOS: u32 = 999_999_999;

/// Julian Day of 0001-01-01T00:00 UT minus one day, so that adding
/// `NaiveDate::num_days_from_ce` lands on midnight of that date.
const JD_BEFORE_CE: f64 = 1_721_424.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Errors raised while turning calendar fields into a Julian Day
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("month {month} is outside 1..=12")]
    MonthOutOfRange { month: i32 },
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidDate { year: i32, month: i32, day: i32 },
    #[error("hour {hour} is outside [0, 24)")]
    HourOutOfRange { hour: f64 },
}

/// Continuous day count since the Julian epoch (noon, 1 January 4713 BC).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    /// 2000-01-01T12:00 UT
    pub const J2000: JulianDay = JulianDay(2_451_545.0);

    /// Wraps a raw Julian Day value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Converts a civil UT date and fractional hour into a Julian Day.
    ///
    /// Rejects months outside 1..=12, days that do not exist in that month
    /// and hours outside `[0, 24)`. Nothing is clamped.
    pub fn from_civil(year: i32, month: i32, day: i32, hour: f64) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::MonthOutOfRange { month });
        }
        if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
            return Err(TimeError::HourOutOfRange { hour });
        }
        let date = u32::try_from(day)
            .ok()
            .and_then(|d| NaiveDate::from_ymd_opt(year, month as u32, d))
            .ok_or(TimeError::InvalidDate { year, month, day })?;

        Ok(Self::from_date_and_hour(date, hour))
    }

    /// Convert a UTC datetime to a Julian Day.
    ///
    /// chrono encodes a leap second as nanoseconds past 1e9; those are
    /// clamped so 23:59:60 stays inside its own day instead of spilling
    /// into hour 24. Julian Day has no leap-second representation.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let nanos = dt.nanosecond().min(MAX_NANOS);
        let hour = dt.hour() as f64
            + dt.minute() as f64 / 60.0
            + (dt.second() as f64 + nanos as f64 / 1e9) / 3600.0;
        Self::from_date_and_hour(dt.date_naive(), hour)
    }

    /// Convert back to a UTC datetime, rounded to the nearest second.
    ///
    /// Returns `None` when the value is not finite or falls outside the
    /// range chrono can represent.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        let days = self.0 - JD_BEFORE_CE;
        let whole_days = days.floor();
        let mut seconds = ((days - whole_days) * SECONDS_PER_DAY).round() as i64;
        let mut day_number = whole_days as i64;
        if seconds >= SECONDS_PER_DAY as i64 {
            seconds -= SECONDS_PER_DAY as i64;
            day_number += 1;
        }
        let date = NaiveDate::from_num_days_from_ce_opt(i32::try_from(day_number).ok()?)?;
        let naive = date.and_hms_opt(0, 0, 0)? + chrono::Duration::seconds(seconds);
        Some(Utc.from_utc_datetime(&naive))
    }

    /// Raw day count
    pub fn value(self) -> f64 {
        self.0
    }

    fn from_date_and_hour(date: NaiveDate, hour: f64) -> Self {
        Self(JD_BEFORE_CE + f64::from(date.num_days_from_ce()) + hour / 24.0)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}
