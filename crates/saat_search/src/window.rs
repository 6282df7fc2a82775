//! Time windows: how long the current hour lasts and when the next hour
//! matching the user's element begins.

use chrono::{DateTime, TimeDelta, Utc};
use saat_base::Element;
use saat_solar::{GeoLocation, SolarTimeProvider};
use serde::{Deserialize, Serialize};

use crate::current::hour_index_at;
use crate::error::SearchError;
use crate::hours::compute_hours;
use crate::hours_types::{DayHours, HoursConfig, PlanetaryHour};

/// How pressing the close of the current hour is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// Remaining-minute thresholds for [`Urgency`] buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowThresholds {
    /// At or below this many minutes: `High`.
    pub high_minutes: i64,
    /// At or below this many minutes: `Medium`.
    pub medium_minutes: i64,
}

impl Default for WindowThresholds {
    fn default() -> Self {
        Self {
            high_minutes: 15,
            medium_minutes: 60,
        }
    }
}

impl WindowThresholds {
    pub fn urgency(&self, remaining_minutes: i64) -> Urgency {
        if remaining_minutes <= self.high_minutes {
            Urgency::High
        } else if remaining_minutes <= self.medium_minutes {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

/// Countdown and next-window information for the current hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Remaining time of the current hour, e.g. "1h 5min" or "42min".
    pub closes_in: String,
    /// Remaining whole minutes of the current hour.
    pub remaining_minutes: i64,
    pub urgency: Urgency,
    /// First hour from the current one onward whose element matches.
    pub next_optimal_window: Option<PlanetaryHour>,
    /// Time until that hour starts; "0min" when it is already running.
    pub next_window_in: Option<String>,
}

/// Format a span as "Xh Ymin" or "Ymin". Negative spans format as "0min".
pub fn format_span(span: TimeDelta) -> String {
    let minutes = span.num_minutes().max(0);
    let (h, m) = (minutes / 60, minutes % 60);
    if h > 0 {
        format!("{h}h {m}min")
    } else {
        format!("{m}min")
    }
}

/// Derive the time window for `current`.
///
/// The search for the next matching hour starts at `current` itself and
/// continues into `next_day` when today's list is exhausted. When `current`
/// is not part of `hours` there is no next window.
pub fn compute_window(
    current: &PlanetaryHour,
    user_element: Element,
    hours: &[PlanetaryHour],
    next_day: Option<&[PlanetaryHour]>,
    now: DateTime<Utc>,
    thresholds: &WindowThresholds,
) -> TimeWindow {
    let remaining = (current.end - now).max(TimeDelta::zero());
    let remaining_minutes = remaining.num_minutes();

    let next = hours
        .iter()
        .position(|h| h.start == current.start)
        .and_then(|from| {
            hours[from..]
                .iter()
                .chain(next_day.unwrap_or_default())
                .find(|h| h.element() == user_element)
                .copied()
        });

    TimeWindow {
        closes_in: format_span(remaining),
        remaining_minutes,
        urgency: thresholds.urgency(remaining_minutes),
        next_window_in: next.map(|h| format_span(h.start - now)),
        next_optimal_window: next,
    }
}

/// Whether the window at `now` has to look into the following day: no hour
/// from the current one onward matches `user_element`.
pub fn needs_next_day(day: &DayHours, user_element: Element, now: DateTime<Utc>) -> bool {
    hour_index_at(day.hours(), now)
        .is_some_and(|i| day.hours[i..].iter().all(|h| h.element() != user_element))
}

/// Time window for `now` within an already computed day and, optionally,
/// the day after it.
pub fn window_in_day(
    day: &DayHours,
    next_day: Option<&DayHours>,
    user_element: Element,
    now: DateTime<Utc>,
    thresholds: &WindowThresholds,
) -> Result<TimeWindow, SearchError> {
    let index = hour_index_at(day.hours(), now).ok_or(SearchError::NoCurrentHour)?;
    Ok(compute_window(
        &day.hours[index],
        user_element,
        day.hours(),
        next_day.map(DayHours::hours),
        now,
        thresholds,
    ))
}

/// Time window for `now` within a computed day.
///
/// Tomorrow's hours are computed only when no matching hour remains today.
/// Fails with [`SearchError::NoCurrentHour`] when `now` is outside the day.
pub fn window_for_day<P: SolarTimeProvider + ?Sized>(
    provider: &P,
    day: &DayHours,
    location: &GeoLocation,
    user_element: Element,
    now: DateTime<Utc>,
    config: &HoursConfig,
    thresholds: &WindowThresholds,
) -> Result<TimeWindow, SearchError> {
    let tomorrow = if needs_next_day(day, user_element, now) {
        let next_date = day
            .date
            .succ_opt()
            .ok_or(SearchError::DateOutOfRange("no day after requested date"))?;
        Some(compute_hours(provider, next_date, location, now, config)?)
    } else {
        None
    };
    window_in_day(day, tomorrow.as_ref(), user_element, now, thresholds)
}
