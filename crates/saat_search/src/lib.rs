//! Planetary hour engine.
//!
//! This crate provides:
//! - Division of sunrise→sunset and sunset→next sunrise into 12 unequal
//!   hours each, with Chaldean ruler assignment by weekday
//! - A uniform 60-minute fallback when solar times are unavailable
//! - Current-hour resolution, time windows and next matching-element window
//! - A day-level outlook (rest day) reduced from alignment scores
//! - An LRU cache of computed days and a refresh scheduler ([`HourClock`])
//!
//! Every computation is a pure function of (date, location, instant);
//! only [`HourCache`] and [`HourClock`] hold state.

pub mod cache;
pub mod clock;
pub mod current;
pub mod error;
pub mod hours;
pub mod hours_types;
pub mod outlook;
pub mod window;

pub use cache::{CacheKey, HourCache};
pub use clock::{ClockConfig, HourClock, HourSnapshot};
pub use current::{hour_index_at, mark_current, resolve_current};
pub use error::SearchError;
pub use hours::{compute_hours, fallback_hours, hours_containing, hours_from_solar_times};
pub use hours_types::{DayHours, FallbackReason, HourAccuracy, HoursConfig, PlanetaryHour};
pub use outlook::{DayOutlook, RestDayPolicy, day_outlook};
pub use window::{
    TimeWindow, Urgency, WindowThresholds, compute_window, format_span, needs_next_day,
    window_for_day, window_in_day,
};
