//! Julian Date conversions for chrono calendar types.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::SolarError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of 0001-01-01 00:00 minus one day, so that
/// `JD_0h = days_from_ce + CE_OFFSET_JD`.
const CE_OFFSET_JD: f64 = 1_721_424.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date at 0h UT of a calendar date.
pub fn date_to_jd_0h(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64 + CE_OFFSET_JD
}

/// Julian Date (UTC) of an instant, millisecond resolution.
pub fn instant_to_jd(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Instant for a Julian Date (UTC), rounded to the nearest millisecond.
pub fn jd_to_instant(jd_utc: f64) -> Result<DateTime<Utc>, SolarError> {
    if !jd_utc.is_finite() {
        return Err(SolarError::InstantOutOfRange("julian date is not finite"));
    }
    let millis = ((jd_utc - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(SolarError::InstantOutOfRange("julian date overflows i64 millis"));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .ok_or(SolarError::InstantOutOfRange("julian date outside chrono range"))
}
