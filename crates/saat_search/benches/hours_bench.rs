use chrono::{DateTime, NaiveDate, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saat_base::Element;
use saat_search::{
    HourCache, HoursConfig, RestDayPolicy, WindowThresholds, compute_hours, day_outlook,
    hours_from_solar_times, window_for_day,
};
use saat_solar::{AnalyticSolarProvider, GeoLocation};

fn setup() -> (AnalyticSolarProvider, GeoLocation, NaiveDate, DateTime<Utc>) {
    let date = NaiveDate::from_ymd_opt(2024, 1, 17).expect("valid date");
    (
        AnalyticSolarProvider::default(),
        GeoLocation::try_new(21.4225, 39.8262, 277.0).expect("valid location"),
        date,
        date.and_hms_opt(9, 0, 0).expect("valid time").and_utc(),
    )
}

fn compute_bench(c: &mut Criterion) {
    let (provider, loc, date, now) = setup();
    let config = HoursConfig::default();

    let mut group = c.benchmark_group("hours_compute");
    group.bench_function("compute_hours", |b| {
        b.iter(|| {
            compute_hours(black_box(&provider), black_box(date), black_box(&loc), now, &config)
        })
    });
    let sunrise = date.and_hms_opt(4, 1, 0).expect("valid time").and_utc();
    let sunset = date.and_hms_opt(15, 0, 0).expect("valid time").and_utc();
    let next = sunrise + chrono::TimeDelta::days(1);
    group.bench_function("hours_from_solar_times", |b| {
        b.iter(|| hours_from_solar_times(black_box(date), sunrise, sunset, next, now))
    });
    group.finish();
}

fn derived_bench(c: &mut Criterion) {
    let (provider, loc, date, now) = setup();
    let config = HoursConfig::default();
    let day = compute_hours(&provider, date, &loc, now, &config).expect("hours should compute");

    let mut group = c.benchmark_group("hours_derived");
    group.bench_function("window_for_day", |b| {
        b.iter(|| {
            window_for_day(
                &provider,
                black_box(&day),
                &loc,
                Element::Water,
                now,
                &config,
                &WindowThresholds::default(),
            )
        })
    });
    group.bench_function("day_outlook", |b| {
        b.iter(|| day_outlook(black_box(day.hours()), Element::Earth, &RestDayPolicy::default()))
    });
    group.finish();
}

fn cache_bench(c: &mut Criterion) {
    let (provider, loc, date, now) = setup();
    let config = HoursConfig::default();
    let cache = HourCache::new(16);
    cache
        .get_or_compute(&provider, date, &loc, now, &config)
        .expect("hours should compute");

    c.bench_function("hour_cache_hit", |b| {
        b.iter(|| cache.get_or_compute(&provider, black_box(date), &loc, now, &config))
    });
}

criterion_group!(benches, compute_bench, derived_bench, cache_bench);
criterion_main!(benches);
