//! Planetary hour calculation.
//!
//! The day from sunrise to sunset and the night from sunset to the next
//! sunrise are each divided into 12 equal hours. Rulers follow the Chaldean
//! sequence starting from the weekday's lord. When solar times are not
//! usable the day falls back to 24 uniform 60-minute hours.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc};
use saat_base::{HOURS_PER_DAY, planetary_sequence};
use saat_solar::{GeoLocation, SolarError, SolarTimeProvider};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::hours_types::{DayHours, FallbackReason, HourAccuracy, HoursConfig, PlanetaryHour};

/// Hours in each of the day and night halves.
const HALF: usize = HOURS_PER_DAY / 2;

/// Compute the 24 planetary hours opening at `date`'s sunrise.
///
/// Queries the provider for the solar day of `date` and the one after it
/// (for the next sunrise). Polar conditions and provider failures yield
/// fallback hours rather than an error; only an invalid location is
/// rejected.
pub fn compute_hours<P: SolarTimeProvider + ?Sized>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
    now: DateTime<Utc>,
    config: &HoursConfig,
) -> Result<DayHours, SearchError> {
    location.validate()?;
    let solar_date = config.solar_date(date, location);
    let next_date = solar_date
        .succ_opt()
        .ok_or(SearchError::DateOutOfRange("no day after requested date"))?;

    let solar = provider
        .solar_times(solar_date, location)
        .and_then(|today| Ok((today, provider.solar_times(next_date, location)?)));

    let reason = match solar {
        Ok((today, tomorrow)) => {
            let (sunrise, sunset) = (today.sunrise, today.sunset);
            match hours_from_solar_times(date, sunrise, sunset, tomorrow.sunrise, now) {
                Some(day) => {
                    debug!(
                        %date,
                        start = %day.start(),
                        end = %day.end(),
                        "planetary hours computed"
                    );
                    return Ok(day);
                }
                None => FallbackReason::NonPositiveSpan,
            }
        }
        Err(e @ SolarError::InvalidLocation(_)) => return Err(e.into()),
        Err(e) => FallbackReason::from(&e),
    };

    warn!(%date, ?reason, "solar times unusable, generating fallback hours");
    fallback_hours(date, location, now, config, reason)
}

/// Build the 24 hours from pre-computed solar instants.
///
/// Pure arithmetic. Returns `None` when the day or night span is not
/// strictly positive.
pub fn hours_from_solar_times(
    date: NaiveDate,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<DayHours> {
    let day_span = sunset - sunrise;
    let night_span = next_sunrise - sunset;
    if day_span <= TimeDelta::zero() || night_span <= TimeDelta::zero() {
        return None;
    }

    // Boundary k of a half lies at origin + span * k / 12, so the last hour
    // of each half ends exactly at sunset / next sunrise.
    let boundary = |origin: DateTime<Utc>, span: TimeDelta, k: usize| {
        origin + span * k as i32 / HALF as i32
    };

    let sequence = planetary_sequence(date.weekday());
    let hours = std::array::from_fn(|i| {
        let (start, end) = if i < HALF {
            (boundary(sunrise, day_span, i), boundary(sunrise, day_span, i + 1))
        } else {
            let k = i - HALF;
            (boundary(sunset, night_span, k), boundary(sunset, night_span, k + 1))
        };
        PlanetaryHour {
            index: i as u8,
            planet: sequence[i],
            start,
            end,
            is_day_hour: i < HALF,
            is_current: start <= now && now < end,
        }
    });

    Some(DayHours {
        date,
        accuracy: HourAccuracy::Astronomical,
        hours,
    })
}

/// 24 uniform 60-minute hours starting at the configured local hour.
pub fn fallback_hours(
    date: NaiveDate,
    location: &GeoLocation,
    now: DateTime<Utc>,
    config: &HoursConfig,
    reason: FallbackReason,
) -> Result<DayHours, SearchError> {
    let local_start = date
        .and_hms_opt(config.fallback_start_hour, 0, 0)
        .ok_or(SearchError::DateOutOfRange("fallback start hour must be 0..23"))?;
    let start = config
        .local_offset(location)
        .from_local_datetime(&local_start)
        .single()
        .ok_or(SearchError::DateOutOfRange("fallback start not representable"))?
        .with_timezone(&Utc);

    Ok(uniform_hours(date, start, now, reason))
}

fn uniform_hours(
    date: NaiveDate,
    start: DateTime<Utc>,
    now: DateTime<Utc>,
    reason: FallbackReason,
) -> DayHours {
    let sequence = planetary_sequence(date.weekday());
    let hours = std::array::from_fn(|i| {
        let hour_start = start + TimeDelta::hours(i as i64);
        let hour_end = hour_start + TimeDelta::hours(1);
        PlanetaryHour {
            index: i as u8,
            planet: sequence[i],
            start: hour_start,
            end: hour_end,
            is_day_hour: i < HALF,
            is_current: hour_start <= now && now < hour_end,
        }
    });

    DayHours {
        date,
        accuracy: HourAccuracy::Fallback(reason),
        hours,
    }
}

/// Close the gap between two consecutive days when one of them is in
/// fallback mode and `now` falls between them.
///
/// A fallback day is moved to meet its astronomical neighbour: a later
/// fallback day starts where the earlier day ends, an earlier one ends where
/// the later day starts. Two astronomical days share their sunrise and never
/// leave a gap.
fn bridge_gap(earlier: DayHours, later: DayHours, now: DateTime<Utc>) -> DayHours {
    let bridged = match (earlier.accuracy, later.accuracy) {
        (_, HourAccuracy::Fallback(reason)) => {
            uniform_hours(later.date, earlier.end(), now, reason)
        }
        (HourAccuracy::Fallback(reason), _) => {
            let span = TimeDelta::hours(HOURS_PER_DAY as i64);
            uniform_hours(earlier.date, later.start() - span, now, reason)
        }
        _ => return later,
    };
    warn!(
        date = %bridged.date,
        start = %bridged.start(),
        "fallback hours moved to meet the adjacent day"
    );
    bridged
}

/// Compute the planetary day that contains `now`.
///
/// The planetary day runs sunrise to sunrise, so before today's sunrise the
/// previous date's list is the one that contains `now`. When a fallback day
/// and an astronomical day leave a gap around `now`, the fallback day is
/// moved to close it.
pub fn hours_containing<P: SolarTimeProvider + ?Sized>(
    provider: &P,
    now: DateTime<Utc>,
    location: &GeoLocation,
    config: &HoursConfig,
) -> Result<DayHours, SearchError> {
    hours_containing_with(now, location, config, |date| {
        compute_hours(provider, date, location, now, config)
    })
}

/// [`hours_containing`] over any per-date source of hours, such as a cache.
pub(crate) fn hours_containing_with<F>(
    now: DateTime<Utc>,
    location: &GeoLocation,
    config: &HoursConfig,
    mut day_for: F,
) -> Result<DayHours, SearchError>
where
    F: FnMut(NaiveDate) -> Result<DayHours, SearchError>,
{
    let date = config.local_date(now, location);
    let day = day_for(date)?;
    if day.covers(now) {
        return Ok(day);
    }

    let (earlier, later) = if now < day.start() {
        let prev = date
            .pred_opt()
            .ok_or(SearchError::DateOutOfRange("no day before requested date"))?;
        let prev_day = day_for(prev)?;
        if prev_day.covers(now) {
            return Ok(prev_day);
        }
        (prev_day, day)
    } else {
        let next = date
            .succ_opt()
            .ok_or(SearchError::DateOutOfRange("no day after requested date"))?;
        let next_day = day_for(next)?;
        if next_day.covers(now) {
            return Ok(next_day);
        }
        (day, next_day)
    };

    Ok(bridge_gap(earlier, later, now))
}
