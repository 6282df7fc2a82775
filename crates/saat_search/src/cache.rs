//! LRU cache of computed days keyed by date and rounded location.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use lru::LruCache;
use parking_lot::Mutex;
use saat_solar::{GeoLocation, SolarTimeProvider};
use tracing::trace;

use crate::error::SearchError;
use crate::hours::{compute_hours, hours_containing_with};
use crate::hours_types::{DayHours, HoursConfig};

/// Default number of retained days.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Cache key: date plus coordinates rounded to 0.01°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub date: NaiveDate,
    pub lat_centi: i32,
    pub lon_centi: i32,
}

impl CacheKey {
    pub fn new(date: NaiveDate, location: &GeoLocation) -> Self {
        Self {
            date,
            lat_centi: (location.latitude_deg * 100.0).round() as i32,
            lon_centi: (location.longitude_deg * 100.0).round() as i32,
        }
    }

    fn same_place(&self, other: &Self) -> bool {
        self.lat_centi == other.lat_centi && self.lon_centi == other.lon_centi
    }
}

/// Thread-safe cache of [`DayHours`].
///
/// Stored days keep the `is_current` flags from when they were computed;
/// lookups return a copy refreshed against the caller's instant.
pub struct HourCache {
    inner: Mutex<LruCache<CacheKey, Arc<DayHours>>>,
}

impl Default for HourCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl HourCache {
    /// Create a cache holding up to `capacity` days (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Cached hours for `date` at `location`, refreshed against `now`.
    pub fn get(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        now: DateTime<Utc>,
    ) -> Option<DayHours> {
        let hit = self.inner.lock().get(&CacheKey::new(date, location)).cloned();
        hit.map(|day| {
            let mut day = (*day).clone();
            day.refresh(now);
            day
        })
    }

    /// Return the cached day or compute and insert it.
    ///
    /// The lock is not held during computation; two racing callers may both
    /// compute, and the later insert wins.
    pub fn get_or_compute<P: SolarTimeProvider + ?Sized>(
        &self,
        provider: &P,
        date: NaiveDate,
        location: &GeoLocation,
        now: DateTime<Utc>,
        config: &HoursConfig,
    ) -> Result<DayHours, SearchError> {
        if let Some(day) = self.get(date, location, now) {
            trace!(%date, "hour cache hit");
            return Ok(day);
        }
        let day = compute_hours(provider, date, location, now, config)?;
        self.inner
            .lock()
            .put(CacheKey::new(date, location), Arc::new(day.clone()));
        Ok(day)
    }

    /// Planetary day containing `now`, with each date looked up through the
    /// cache. A day moved to close a fallback gap is returned but not stored.
    pub fn hours_containing<P: SolarTimeProvider + ?Sized>(
        &self,
        provider: &P,
        now: DateTime<Utc>,
        location: &GeoLocation,
        config: &HoursConfig,
    ) -> Result<DayHours, SearchError> {
        hours_containing_with(now, location, config, |date| {
            self.get_or_compute(provider, date, location, now, config)
        })
    }

    /// Drop every day cached for `location`. Returns how many were removed.
    pub fn invalidate_location(&self, location: &GeoLocation) -> usize {
        let place = CacheKey::new(NaiveDate::MIN, location);
        let mut cache = self.inner.lock();
        let stale: Vec<CacheKey> = cache
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| k.same_place(&place))
            .collect();
        for key in &stale {
            cache.pop(key);
        }
        stale.len()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
