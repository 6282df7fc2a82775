//! Golden-value integration tests for planetary hours using the analytic
//! solar provider.
//!
//! Solar reference instants are accurate to a few minutes, so instants are
//! compared with a tolerance.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta, Timelike, Utc};
use proptest::prelude::*;
use saat_base::{AlignmentQuality, Element, Planet, align, day_ruler, hour_ruler};
use saat_search::{
    DayHours, FallbackReason, HourAccuracy, HoursConfig, RestDayPolicy, WindowThresholds,
    compute_hours, day_outlook, hour_index_at, hours_containing, window_for_day,
};
use saat_solar::{AnalyticSolarProvider, GeoLocation};

const TOLERANCE_MIN: i64 = 4;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().to_utc()
}

fn mecca() -> GeoLocation {
    GeoLocation::try_new(21.4225, 39.8262, 277.0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_near(actual: DateTime<Utc>, expected: &str) {
    let diff = (actual - at(expected)).num_minutes().abs();
    assert!(diff <= TOLERANCE_MIN, "expected ~{expected}, got {actual} ({diff} min off)");
}

fn mecca_wednesday() -> DayHours {
    compute_hours(
        &AnalyticSolarProvider::default(),
        date(2024, 1, 17),
        &mecca(),
        at("2024-01-17T09:00:00Z"),
        &HoursConfig::default(),
    )
    .unwrap()
}

/// Wednesday opens with Mercury at sunrise and closes at the next sunrise.
#[test]
fn mecca_wednesday_hours() {
    let day = mecca_wednesday();
    assert!(day.accuracy.is_astronomical());
    assert_eq!(day.hours[0].planet, Planet::Mercury);
    assert!(day.hours[0].is_day_hour);
    assert!(!day.hours[12].is_day_hour);
    assert_near(day.start(), "2024-01-17T04:01:00Z");
    assert_near(day.hours[12].start, "2024-01-17T15:00:00Z");
    assert_near(day.end(), "2024-01-18T04:01:00Z");
}

/// Winter day hours are shorter than 60 minutes, night hours longer.
#[test]
fn mecca_winter_hour_lengths() {
    let day = mecca_wednesday();
    let day_min = day.hours[0].duration_minutes();
    let night_min = day.hours[12].duration_minutes();
    assert!((50.0..60.0).contains(&day_min), "day hour {day_min}");
    assert!((60.0..70.0).contains(&night_min), "night hour {night_min}");

    let total: f64 = day.hours.iter().map(|h| h.duration_minutes()).sum();
    let span = (day.end() - day.start()).num_milliseconds() as f64 / 60_000.0;
    assert!((total - span).abs() < 1e-6);
}

/// 09:00 UTC (noon local) falls in the sixth day hour.
#[test]
fn mecca_current_hour_and_alignment() {
    let day = mecca_wednesday();
    let current: Vec<_> = day.hours.iter().filter(|h| h.is_current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].index, 5);
    assert_eq!(current[0].planet, Planet::Sun);
    let alignment = align(Element::Water, current[0].element());
    assert_eq!(alignment.quality, AlignmentQuality::Opposing);
}

#[test]
fn water_user_in_mars_hour_is_opposing() {
    let day = mecca_wednesday();
    let mars = day.hours.iter().find(|h| h.planet == Planet::Mars).unwrap();
    let alignment = align(Element::Water, mars.element());
    assert_eq!(alignment.quality, AlignmentQuality::Opposing);
    assert!((20..=35).contains(&alignment.harmony_score));
}

#[test]
fn each_weekday_opens_with_its_ruler() {
    let provider = AnalyticSolarProvider::default();
    for d in date(2024, 3, 10).iter_days().take(7) {
        let now = at("2024-03-10T00:00:00Z");
        let day = compute_hours(&provider, d, &mecca(), now, &HoursConfig::default()).unwrap();
        assert_eq!(day.hours[0].planet, day_ruler(d.weekday()), "{d}");
        for h in &day.hours {
            assert_eq!(h.planet, hour_ruler(d.weekday(), h.index as usize));
        }
    }
}

/// Polar night in Tromsø falls back to uniform hours from 06:00 local (UTC+1).
#[test]
fn tromso_polar_night_falls_back() {
    let tromso = GeoLocation::try_new(69.6492, 18.9553, 0.0).unwrap();
    let day = compute_hours(
        &AnalyticSolarProvider::default(),
        date(2024, 12, 21),
        &tromso,
        at("2024-12-21T12:00:00Z"),
        &HoursConfig::default(),
    )
    .unwrap();
    assert_eq!(day.accuracy, HourAccuracy::Fallback(FallbackReason::NeverRises));
    assert_eq!(day.start(), at("2024-12-21T05:00:00Z"));
    assert_eq!(day.hours[0].planet, Planet::Saturn);
    assert!(day.hours.iter().all(|h| h.duration() == TimeDelta::hours(1)));
    assert_eq!(day.hours.iter().filter(|h| h.is_current).count(), 1);
}

/// Just before sunrise the previous planetary day is still running.
#[test]
fn pre_dawn_is_previous_planetary_day() {
    let day = hours_containing(
        &AnalyticSolarProvider::default(),
        at("2024-01-18T02:00:00Z"),
        &mecca(),
        &HoursConfig::default(),
    )
    .unwrap();
    assert_eq!(day.date, date(2024, 1, 17));
    assert_eq!(hour_index_at(day.hours(), at("2024-01-18T02:00:00Z")), Some(22));
}

/// Around the end of the polar night the fallback days and the first
/// astronomical days meet without leaving an instant uncovered.
#[test]
fn tromso_polar_night_transition_has_no_gap() {
    let provider = AnalyticSolarProvider::default();
    let tromso = GeoLocation::try_new(69.6492, 18.9553, 0.0).unwrap();
    let config = HoursConfig::default();
    let (mut fallback, mut astronomical) = (0, 0);

    let mut now = at("2025-01-05T00:00:00Z");
    while now < at("2025-01-25T00:00:00Z") {
        let day = hours_containing(&provider, now, &tromso, &config).unwrap();
        assert!(hour_index_at(day.hours(), now).is_some(), "no hour contains {now}");
        assert_eq!(day.hours.iter().filter(|h| h.is_current).count(), 1, "{now}");
        if day.accuracy.is_astronomical() {
            astronomical += 1;
        } else {
            fallback += 1;
        }
        now += TimeDelta::minutes(30);
    }
    assert!(fallback > 0 && astronomical > 0);
}

/// With a civil offset half a day from the mean zone the hours still open
/// at the local morning sunrise of the requested date.
#[test]
fn apia_far_offset_keeps_local_sunrise() {
    let apia = GeoLocation::try_new(-13.83, -171.76, 2.0).unwrap();
    let offset = FixedOffset::east_opt(13 * 3600).unwrap();
    let config = HoursConfig {
        utc_offset: Some(offset),
        ..Default::default()
    };
    let day = compute_hours(
        &AnalyticSolarProvider::default(),
        date(2024, 1, 17),
        &apia,
        at("2024-01-16T20:00:00Z"),
        &config,
    )
    .unwrap();

    let local_sunrise = day.start().with_timezone(&offset);
    assert_eq!(local_sunrise.date_naive(), date(2024, 1, 17));
    assert!((5..=7).contains(&local_sunrise.hour()), "{local_sunrise}");
    assert_eq!(day.hours[0].planet, Planet::Mercury);
}

#[test]
fn window_wraps_past_last_matching_hour() {
    let provider = AnalyticSolarProvider::default();
    let day = mecca_wednesday();
    // Last Fire hour on Wednesday is index 19 (Sun); look from hour 22 on.
    let now = day.hours[22].start + TimeDelta::minutes(1);
    let window = window_for_day(
        &provider,
        &day,
        &mecca(),
        Element::Fire,
        now,
        &HoursConfig::default(),
        &WindowThresholds::default(),
    )
    .unwrap();
    let next = window.next_optimal_window.unwrap();
    assert!(next.start >= day.end());
    assert_eq!(next.element(), Element::Fire);
}

#[test]
fn window_outside_day_is_error() {
    let day = mecca_wednesday();
    let err = window_for_day(
        &AnalyticSolarProvider::default(),
        &day,
        &mecca(),
        Element::Fire,
        day.end() + TimeDelta::minutes(5),
        &HoursConfig::default(),
        &WindowThresholds::default(),
    )
    .unwrap_err();
    assert_eq!(err, saat_search::SearchError::NoCurrentHour);
}

#[test]
fn outlook_counts_every_hour() {
    let day = mecca_wednesday();
    let outlook = day_outlook(day.hours(), Element::Earth, &RestDayPolicy::default());
    assert_eq!(outlook.total_hours, 24);
    assert!(outlook.average_harmony > 0.0);
    assert!(!outlook.best_hours.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Hours tile the planetary day without gaps or overlaps, and any
    /// instant inside it resolves to exactly one hour.
    #[test]
    fn hours_tile_the_day(
        lat in -60.0f64..60.0,
        lon in -180.0f64..180.0,
        day_offset in 0i64..3650,
        frac in 0.0f64..1.0,
    ) {
        let loc = GeoLocation::try_new(lat, lon, 0.0).unwrap();
        let d = date(2020, 1, 1) + TimeDelta::days(day_offset);
        let day = compute_hours(
            &AnalyticSolarProvider::default(),
            d,
            &loc,
            at("2020-01-01T00:00:00Z"),
            &HoursConfig::default(),
        ).unwrap();

        for pair in day.hours.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
            prop_assert!(pair[0].duration() > TimeDelta::zero());
        }

        let span = day.end() - day.start();
        let offset_ms = (span.num_milliseconds() as f64 * frac) as i64;
        let instant = day.start() + TimeDelta::milliseconds(offset_ms);
        let holders = day.hours.iter().filter(|h| h.contains(instant)).count();
        prop_assert_eq!(holders, 1);
    }
}
