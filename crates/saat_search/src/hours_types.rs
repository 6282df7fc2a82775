//! Types for planetary hour results.

use chrono::{
    Datelike, DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeDelta, Utc, Weekday,
};
use saat_base::{Element, HOURS_PER_DAY, Planet};
use saat_solar::{GeoLocation, SolarError};
use serde::{Deserialize, Serialize};

/// Default local hour at which fallback hours start.
pub const DEFAULT_FALLBACK_START_HOUR: u32 = 6;

/// One planetary hour: a half-open interval `[start, end)` with its ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryHour {
    /// 0-based position within the day (0..23); 0..11 are day hours.
    pub index: u8,
    /// Ruling planet.
    pub planet: Planet,
    /// Start of the hour (inclusive).
    pub start: DateTime<Utc>,
    /// End of the hour (exclusive).
    pub end: DateTime<Utc>,
    /// Whether the hour lies between sunrise and sunset.
    pub is_day_hour: bool,
    /// Whether the hour contained "now" when the flags were last refreshed.
    pub is_current: bool,
}

impl PlanetaryHour {
    /// Element of the ruling planet.
    pub fn element(&self) -> Element {
        self.planet.element()
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Length in (fractional) minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 60_000.0
    }

    /// Half-open containment: an instant on a boundary belongs to the later hour.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Why fallback hours were generated instead of astronomical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Polar night on the date or the following one.
    NeverRises,
    /// Midnight sun on the date or the following one.
    NeverSets,
    /// The provider failed for another reason.
    ProviderFailed,
    /// Day or night length came out zero or negative.
    NonPositiveSpan,
}

impl From<&SolarError> for FallbackReason {
    fn from(e: &SolarError) -> Self {
        match e {
            SolarError::NeverRises => Self::NeverRises,
            SolarError::NeverSets => Self::NeverSets,
            SolarError::InvalidSpan => Self::NonPositiveSpan,
            _ => Self::ProviderFailed,
        }
    }
}

/// Confidence of a computed hour list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum HourAccuracy {
    /// Built from real sunrise/sunset instants.
    Astronomical,
    /// Uniform 60-minute hours from a fixed local start.
    Fallback(FallbackReason),
}

impl HourAccuracy {
    pub fn is_astronomical(&self) -> bool {
        matches!(self, Self::Astronomical)
    }
}

/// Settings for hour computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursConfig {
    /// Local hour (0..23) at which fallback hours start.
    pub fallback_start_hour: u32,
    /// Local UTC offset. `None` uses the longitude-derived mean zone.
    pub utc_offset: Option<FixedOffset>,
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            fallback_start_hour: DEFAULT_FALLBACK_START_HOUR,
            utc_offset: None,
        }
    }
}

impl HoursConfig {
    /// Local offset for a location: configured, or `round(longitude / 15)` hours.
    pub fn local_offset(&self, location: &GeoLocation) -> FixedOffset {
        self.utc_offset.unwrap_or_else(|| {
            let hours = (location.longitude_deg / 15.0).round() as i32;
            FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
        })
    }

    /// Local calendar date of an instant at a location.
    pub fn local_date(&self, instant: DateTime<Utc>, location: &GeoLocation) -> NaiveDate {
        instant.with_timezone(&self.local_offset(location)).date_naive()
    }

    /// Date to request from a solar provider for the local date `date`.
    ///
    /// Providers centre a date on local mean noon at the longitude. This is
    /// the mean-time date at local civil noon: `date` itself for the mean
    /// zone, a day earlier or later for offsets far from the longitude
    /// (e.g. UTC+13 at 172°W).
    pub fn solar_date(&self, date: NaiveDate, location: &GeoLocation) -> NaiveDate {
        let offset_s = i64::from(self.local_offset(location).local_minus_utc());
        let mean_s = (location.longitude_deg * 240.0).round() as i64;
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(TimeDelta::hours(12) + TimeDelta::seconds(mean_s - offset_s))
            .map_or(date, |noon| noon.date())
    }
}

/// The 24 planetary hours of one sunrise-to-sunrise day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Local calendar date whose sunrise opens the list.
    pub date: NaiveDate,
    pub accuracy: HourAccuracy,
    pub hours: [PlanetaryHour; HOURS_PER_DAY],
}

impl DayHours {
    pub fn hours(&self) -> &[PlanetaryHour] {
        &self.hours
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Start of the first hour (sunrise).
    pub fn start(&self) -> DateTime<Utc> {
        self.hours[0].start
    }

    /// End of the last hour (next sunrise).
    pub fn end(&self) -> DateTime<Utc> {
        self.hours[HOURS_PER_DAY - 1].end
    }

    /// Whether the instant falls inside this day's span.
    pub fn covers(&self, instant: DateTime<Utc>) -> bool {
        self.start() <= instant && instant < self.end()
    }

    pub fn day_hours(&self) -> &[PlanetaryHour] {
        &self.hours[..HOURS_PER_DAY / 2]
    }

    pub fn night_hours(&self) -> &[PlanetaryHour] {
        &self.hours[HOURS_PER_DAY / 2..]
    }

    /// Recompute every `is_current` flag against `now`.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        crate::current::mark_current(&mut self.hours, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(start_s: i64, end_s: i64) -> PlanetaryHour {
        PlanetaryHour {
            index: 0,
            planet: Planet::Sun,
            start: DateTime::from_timestamp(start_s, 0).unwrap(),
            end: DateTime::from_timestamp(end_s, 0).unwrap(),
            is_day_hour: true,
            is_current: false,
        }
    }

    #[test]
    fn contains_is_half_open() {
        let h = hour(1_000, 4_600);
        assert!(h.contains(h.start));
        assert!(!h.contains(h.end));
        assert!(!h.contains(DateTime::from_timestamp(999, 0).unwrap()));
    }

    #[test]
    fn duration_minutes_fractional() {
        let h = hour(0, 90);
        assert!((h.duration_minutes() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn offset_from_longitude() {
        let cfg = HoursConfig::default();
        let mecca = GeoLocation::try_new(21.4225, 39.8262, 0.0).unwrap();
        assert_eq!(cfg.local_offset(&mecca).local_minus_utc(), 3 * 3600);
        let ny = GeoLocation::try_new(40.7, -74.0, 0.0).unwrap();
        assert_eq!(cfg.local_offset(&ny).local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn configured_offset_wins() {
        let cfg = HoursConfig {
            utc_offset: FixedOffset::east_opt(5 * 3600 + 1800),
            ..Default::default()
        };
        let loc = GeoLocation::try_new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(cfg.local_offset(&loc).local_minus_utc(), 19_800);
    }

    #[test]
    fn local_date_crosses_midnight() {
        let cfg = HoursConfig::default();
        let mecca = GeoLocation::try_new(21.4225, 39.8262, 0.0).unwrap();
        // 22:30 UTC is 01:30 the next day in Mecca
        let t = DateTime::parse_from_rfc3339("2024-01-17T22:30:00Z").unwrap().to_utc();
        assert_eq!(cfg.local_date(t, &mecca), NaiveDate::from_ymd_opt(2024, 1, 18).unwrap());
    }

    #[test]
    fn solar_date_follows_local_noon() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let apia = GeoLocation::try_new(-13.83, -171.76, 0.0).unwrap();
        assert_eq!(HoursConfig::default().solar_date(date, &apia), date);

        let across_dateline = HoursConfig {
            utc_offset: FixedOffset::east_opt(13 * 3600),
            ..Default::default()
        };
        assert_eq!(across_dateline.solar_date(date, &apia), date.pred_opt().unwrap());

        let kiritimati = GeoLocation::try_new(1.87, -157.4, 0.0).unwrap();
        let line_islands = HoursConfig {
            utc_offset: FixedOffset::east_opt(14 * 3600),
            ..Default::default()
        };
        assert_eq!(line_islands.solar_date(date, &kiritimati), date.pred_opt().unwrap());
    }

    #[test]
    fn fallback_reason_from_solar_error() {
        assert_eq!(FallbackReason::from(&SolarError::NeverSets), FallbackReason::NeverSets);
        assert_eq!(
            FallbackReason::from(&SolarError::NoConvergence("x")),
            FallbackReason::ProviderFailed
        );
    }
}
