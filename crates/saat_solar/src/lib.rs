//! Sunrise/sunset provider for planetary-hour computation.
//!
//! This crate provides:
//! - Geographic location input with range validation
//! - Low-precision analytic solar coordinates and sidereal time
//! - Iterative sunrise/sunset computation with polar-day/night detection
//! - The [`SolarTimeProvider`] seam consumed by the hour engine
//!
//! Everything here is a pure local computation; no I/O is performed.

pub mod error;
pub mod julian;
pub mod provider;
pub mod riseset;
pub mod riseset_types;
pub mod sidereal;
pub mod sun;

pub use error::SolarError;
pub use julian::{J2000_JD, date_to_jd_0h, instant_to_jd, jd_to_instant};
pub use provider::{AnalyticSolarProvider, SolarTimeProvider};
pub use riseset::{approximate_local_noon_jd, compute_rise_set, solar_times_for_date};
pub use riseset_types::{
    GeoLocation, Location, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarTimes,
};
