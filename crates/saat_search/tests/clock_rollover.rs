//! Scheduler behavior across sunrise, local midnight and location changes.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use saat_base::{Element, Language};
use saat_search::{ClockConfig, HourClock, HoursConfig, compute_hours, resolve_current};
use saat_solar::{AnalyticSolarProvider, GeoLocation};

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().to_utc()
}

fn mecca() -> GeoLocation {
    GeoLocation::try_new(21.4225, 39.8262, 277.0).unwrap()
}

fn clock() -> HourClock<AnalyticSolarProvider> {
    let provider = AnalyticSolarProvider::default();
    HourClock::new(provider, mecca(), Element::Air, ClockConfig::default()).unwrap()
}

/// A list kept past its span has no current hour at all.
#[test]
fn stale_list_has_no_current_hour() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
    let mut day = compute_hours(
        &AnalyticSolarProvider::default(),
        date,
        &mecca(),
        at("2024-01-17T09:00:00Z"),
        &HoursConfig::default(),
    )
    .unwrap();
    day.refresh(day.end() + TimeDelta::minutes(1));
    assert!(resolve_current(day.hours()).is_none());
}

#[test]
fn clock_recovers_after_sunrise() {
    let mut c = clock();
    let evening = c.tick(at("2024-01-17T20:00:00Z")).unwrap();
    assert_eq!(evening.date, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
    assert!(evening.current.is_some_and(|h| !h.is_day_hour));

    // After local midnight (21:00 UTC) but before sunrise: still Wednesday's night.
    let pre_dawn = c.tick(at("2024-01-18T02:00:00Z")).unwrap();
    assert_eq!(pre_dawn.date, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
    assert!(pre_dawn.current.is_some());

    let morning = c.tick(at("2024-01-18T04:20:00Z")).unwrap();
    assert_eq!(morning.date, NaiveDate::from_ymd_opt(2024, 1, 18).unwrap());
    let first = morning.current.unwrap();
    assert_eq!(first.index, 0);
    assert!(first.is_day_hour);
    assert!(c.recomputations() >= 2);
}

#[test]
fn every_minute_of_a_day_resolves() {
    let mut c = clock();
    let start = at("2024-03-01T00:00:00Z");
    for minute in (0..36 * 60).step_by(7) {
        let snap = c.tick(start + TimeDelta::minutes(minute)).unwrap();
        assert!(snap.current.is_some(), "no hour at +{minute} min");
        assert!(snap.window.is_some());
    }
    // At most one recomputation per sunrise or local midnight crossed.
    assert!(c.recomputations() <= 5, "{}", c.recomputations());
}

#[test]
fn moving_recomputes_for_new_place() {
    let mut c = clock();
    let t = at("2024-06-21T12:00:00Z");
    let before = c.tick(t).unwrap();
    c.set_location(GeoLocation::try_new(69.6492, 18.9553, 0.0).unwrap()).unwrap();
    let after = c.tick(t).unwrap();
    assert!(before.accuracy.is_astronomical());
    assert!(!after.accuracy.is_astronomical());
    assert_eq!(c.recomputations(), 2);
}

#[test]
fn french_guidance_follows_language() {
    let config = ClockConfig {
        language: Language::French,
        ..Default::default()
    };
    let provider = AnalyticSolarProvider::default();
    let mut c = HourClock::new(provider, mecca(), Element::Fire, config).unwrap();
    let en = clock().tick(at("2024-01-17T09:00:00Z")).unwrap().guidance.unwrap();
    let fr = c.tick(at("2024-01-17T09:00:00Z")).unwrap().guidance.unwrap();
    assert_eq!(en.quality, fr.quality);
    assert_ne!(en.headline, fr.headline);
}
