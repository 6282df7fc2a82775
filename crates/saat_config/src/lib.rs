//! Configuration for the planetary hour engine.
//!
//! Settings come from a TOML file, then environment overrides, then
//! validation. Every section is optional and defaults to the engine's
//! built-in constants.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{
    DEFAULT_CITY, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, HoursSection, LocationSection,
    RefreshSection, RestDaySection, RiseSetSection, SaatConfig, UserSection, WindowSection,
};
