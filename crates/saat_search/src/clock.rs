//! Refresh scheduler: holds the current day's hours and republishes a
//! snapshot on every tick, recomputing only when the list goes stale.
//! Days are fetched through an [`HourCache`], so the following day needed
//! near the end of a planetary day is computed once and then retained.

use chrono::{DateTime, NaiveDate, Utc};
use saat_base::{Element, ElementAlignment, Guidance, Language, align, guidance_for};
use saat_solar::{GeoLocation, SolarTimeProvider};
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{DEFAULT_CACHE_CAPACITY, HourCache};
use crate::current::resolve_current;
use crate::error::SearchError;
use crate::hours_types::{DayHours, HourAccuracy, HoursConfig, PlanetaryHour};
use crate::outlook::{DayOutlook, RestDayPolicy, day_outlook};
use crate::window::{TimeWindow, WindowThresholds, needs_next_day, window_in_day};

/// Settings shared by every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockConfig {
    pub hours: HoursConfig,
    pub window: WindowThresholds,
    pub rest_day: RestDayPolicy,
    pub language: Language,
    /// Days retained by the clock's [`HourCache`].
    pub cache_capacity: usize,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            hours: HoursConfig::default(),
            window: WindowThresholds::default(),
            rest_day: RestDayPolicy::default(),
            language: Language::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Everything a display needs for one instant.
#[derive(Debug, Clone, Serialize)]
pub struct HourSnapshot {
    pub at: DateTime<Utc>,
    /// Date whose sunrise opened the planetary day.
    pub date: NaiveDate,
    pub accuracy: HourAccuracy,
    pub current: Option<PlanetaryHour>,
    pub alignment: Option<ElementAlignment>,
    pub window: Option<TimeWindow>,
    pub guidance: Option<Guidance>,
    pub outlook: DayOutlook,
}

/// Stateful wrapper around the pure hour engine.
pub struct HourClock<P: SolarTimeProvider> {
    provider: P,
    location: GeoLocation,
    user_element: Element,
    config: ClockConfig,
    cache: HourCache,
    day: Option<DayHours>,
    /// The planetary day after `day`, kept once a window had to look ahead.
    next_day: Option<DayHours>,
    /// Local date on which `day` was computed.
    computed_on: Option<NaiveDate>,
    recomputations: u64,
}

impl<P: SolarTimeProvider> HourClock<P> {
    pub fn new(
        provider: P,
        location: GeoLocation,
        user_element: Element,
        config: ClockConfig,
    ) -> Result<Self, SearchError> {
        location.validate()?;
        Ok(Self {
            provider,
            location,
            user_element,
            cache: HourCache::new(config.cache_capacity),
            config,
            day: None,
            next_day: None,
            computed_on: None,
            recomputations: 0,
        })
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// Move the clock; the retained days and the cached days of the old
    /// location are dropped.
    pub fn set_location(&mut self, location: GeoLocation) -> Result<(), SearchError> {
        location.validate()?;
        let dropped = self.cache.invalidate_location(&self.location);
        debug!(dropped, "hour cache invalidated for previous location");
        self.location = location;
        self.day = None;
        self.next_day = None;
        self.computed_on = None;
        Ok(())
    }

    pub fn set_user_element(&mut self, element: Element) {
        self.user_element = element;
    }

    /// The retained day, if any tick has run.
    pub fn day(&self) -> Option<&DayHours> {
        self.day.as_ref()
    }

    /// Number of full recomputations so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Advance to `now` and publish a snapshot.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<HourSnapshot, SearchError> {
        let local_date = self.config.hours.local_date(now, &self.location);
        let same_day = self.computed_on == Some(local_date);

        let stale = match self.day.as_mut() {
            Some(day) => {
                day.refresh(now);
                !same_day || resolve_current(day.hours()).is_none()
            }
            None => true,
        };
        if stale {
            let day = self.cache.hours_containing(
                &self.provider,
                now,
                &self.location,
                &self.config.hours,
            )?;
            self.recomputations += 1;
            info!(
                date = %day.date,
                start = %day.start(),
                end = %day.end(),
                astronomical = day.accuracy.is_astronomical(),
                "planetary hours recomputed"
            );
            self.day = Some(day);
            self.next_day = None;
            self.computed_on = Some(local_date);
        }

        let day = self.day.as_ref().ok_or(SearchError::NoCurrentHour)?;
        if self.next_day.is_none() && needs_next_day(day, self.user_element, now) {
            let next_date = day
                .date
                .succ_opt()
                .ok_or(SearchError::DateOutOfRange("no day after requested date"))?;
            let next = self.cache.get_or_compute(
                &self.provider,
                next_date,
                &self.location,
                now,
                &self.config.hours,
            )?;
            debug!(date = %next.date, "following day retained for window search");
            self.next_day = Some(next);
        }

        self.snapshot(day, now)
    }

    fn snapshot(&self, day: &DayHours, now: DateTime<Utc>) -> Result<HourSnapshot, SearchError> {
        let current = resolve_current(day.hours()).copied();
        let alignment = current.map(|h| align(self.user_element, h.element()));
        let window = match current {
            Some(_) => Some(window_in_day(
                day,
                self.next_day.as_ref(),
                self.user_element,
                now,
                &self.config.window,
            )?),
            None => None,
        };

        Ok(HourSnapshot {
            at: now,
            date: day.date,
            accuracy: day.accuracy,
            current,
            guidance: alignment.map(|a| guidance_for(a.quality, self.config.language)),
            alignment,
            window,
            outlook: day_outlook(day.hours(), self.user_element, &self.config.rest_day),
        })
    }
}
