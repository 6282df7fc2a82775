//! The `saat.toml` schema and its conversions into runtime settings.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::FixedOffset;
use saat_base::{Element, Language};
use saat_search::{ClockConfig, HoursConfig, RestDayPolicy, WindowThresholds};
use saat_solar::{AnalyticSolarProvider, GeoLocation, Location, RiseSetConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Location used when none is configured.
pub const DEFAULT_LATITUDE: f64 = 21.4225;
pub const DEFAULT_LONGITUDE: f64 = 39.8262;
pub const DEFAULT_CITY: &str = "Mecca";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaatConfig {
    pub location: LocationSection,
    pub user: UserSection,
    pub hours: HoursSection,
    pub window: WindowSection,
    pub rest_day: RestDaySection,
    pub riseset: RiseSetSection,
    pub refresh: RefreshSection,
}

/// `[location]`. Missing coordinates fall back to the default city and mark
/// the location as inaccurate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationSection {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude_m: f64,
    pub city_name: Option<String>,
}

/// `[user]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSection {
    /// Element name, e.g. "fire".
    pub element: String,
    /// Language tag, e.g. "en" or "fr-CA".
    pub language: String,
}

impl Default for UserSection {
    fn default() -> Self {
        Self {
            element: "fire".to_string(),
            language: "en".to_string(),
        }
    }
}

/// `[hours]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HoursSection {
    pub fallback_start_hour: u32,
    /// Fixed local offset in minutes east of UTC; unset uses the
    /// longitude-derived mean zone.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for HoursSection {
    fn default() -> Self {
        Self {
            fallback_start_hour: saat_search::hours_types::DEFAULT_FALLBACK_START_HOUR,
            utc_offset_minutes: None,
        }
    }
}

/// `[window]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub high_urgency_minutes: i64,
    pub medium_urgency_minutes: i64,
}

impl Default for WindowSection {
    fn default() -> Self {
        let t = WindowThresholds::default();
        Self {
            high_urgency_minutes: t.high_minutes,
            medium_urgency_minutes: t.medium_minutes,
        }
    }
}

/// `[rest_day]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RestDaySection {
    pub harmony_threshold: u8,
    pub low_ratio: f64,
}

impl Default for RestDaySection {
    fn default() -> Self {
        let p = RestDayPolicy::default();
        Self {
            harmony_threshold: p.harmony_threshold,
            low_ratio: p.low_ratio,
        }
    }
}

/// `[riseset]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiseSetSection {
    pub refraction_arcmin: f64,
    pub altitude_correction: bool,
}

impl Default for RiseSetSection {
    fn default() -> Self {
        let c = RiseSetConfig::default();
        Self {
            refraction_arcmin: c.refraction_arcmin,
            altitude_correction: c.altitude_correction,
        }
    }
}

/// `[refresh]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefreshSection {
    pub interval_seconds: u64,
    pub cache_capacity: usize,
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            cache_capacity: saat_search::cache::DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl SaatConfig {
    /// Read and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Apply `SAAT_*` overrides looked up through `lookup`, then revalidate.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SAAT_LATITUDE") {
            self.location.latitude = Some(parse_number("SAAT_LATITUDE", &v)?);
        }
        if let Some(v) = lookup("SAAT_LONGITUDE") {
            self.location.longitude = Some(parse_number("SAAT_LONGITUDE", &v)?);
        }
        if let Some(v) = lookup("SAAT_ELEMENT") {
            self.user.element = v;
        }
        if let Some(v) = lookup("SAAT_LANG") {
            self.user.language = v;
        }
        if let Some(v) = lookup("SAAT_FALLBACK_START_HOUR") {
            self.hours.fallback_start_hour = parse_number("SAAT_FALLBACK_START_HOUR", &v)?;
        }
        if let Some(v) = lookup("SAAT_UTC_OFFSET_MINUTES") {
            self.hours.utc_offset_minutes = Some(parse_number("SAAT_UTC_OFFSET_MINUTES", &v)?);
        }
        self.validate()
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location()?;
        self.user_element()?;
        self.language()?;
        self.hours_config()?;
        if self.hours.fallback_start_hour > 23 {
            return Err(ConfigError::invalid("hours.fallback_start_hour", "must be 0..=23"));
        }
        let w = &self.window;
        if w.high_urgency_minutes < 0 || w.medium_urgency_minutes < w.high_urgency_minutes {
            return Err(ConfigError::invalid(
                "window",
                "need 0 <= high_urgency_minutes <= medium_urgency_minutes",
            ));
        }
        if !(0.0..=1.0).contains(&self.rest_day.low_ratio) {
            return Err(ConfigError::invalid("rest_day.low_ratio", "must be within [0, 1]"));
        }
        if self.rest_day.harmony_threshold > 100 {
            return Err(ConfigError::invalid("rest_day.harmony_threshold", "must be 0..=100"));
        }
        if !self.riseset.refraction_arcmin.is_finite() {
            return Err(ConfigError::invalid("riseset.refraction_arcmin", "must be finite"));
        }
        if self.refresh.interval_seconds == 0 {
            return Err(ConfigError::invalid("refresh.interval_seconds", "must be positive"));
        }
        Ok(())
    }

    /// Configured location, or the default city flagged as inaccurate.
    pub fn location(&self) -> Result<Location, ConfigError> {
        let (lat, lon, accurate) = match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => (lat, lon, true),
            (None, None) => (DEFAULT_LATITUDE, DEFAULT_LONGITUDE, false),
            _ => {
                return Err(ConfigError::invalid(
                    "location",
                    "latitude and longitude must be set together",
                ));
            }
        };
        let city = match &self.location.city_name {
            Some(c) => c.clone(),
            None if !accurate => DEFAULT_CITY.to_string(),
            None => String::new(),
        };
        let coordinates = GeoLocation::try_new(lat, lon, self.location.altitude_m)
            .map_err(|e| ConfigError::invalid("location", e.to_string()))?;
        Ok(Location {
            coordinates,
            city_name: city,
            is_accurate: accurate,
        })
    }

    pub fn user_element(&self) -> Result<Element, ConfigError> {
        self.user
            .element
            .parse()
            .map_err(|e: saat_base::ParseError| ConfigError::invalid("user.element", e.to_string()))
    }

    pub fn language(&self) -> Result<Language, ConfigError> {
        self.user
            .language
            .parse()
            .map_err(|e: saat_base::ParseError| {
                ConfigError::invalid("user.language", e.to_string())
            })
    }

    pub fn hours_config(&self) -> Result<HoursConfig, ConfigError> {
        let utc_offset = match self.hours.utc_offset_minutes {
            Some(m) => Some(
                m.checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| {
                        ConfigError::invalid("hours.utc_offset_minutes", "must be within ±24h")
                    })?,
            ),
            None => None,
        };
        Ok(HoursConfig {
            fallback_start_hour: self.hours.fallback_start_hour,
            utc_offset,
        })
    }

    pub fn window_thresholds(&self) -> WindowThresholds {
        WindowThresholds {
            high_minutes: self.window.high_urgency_minutes,
            medium_minutes: self.window.medium_urgency_minutes,
        }
    }

    pub fn rest_day_policy(&self) -> RestDayPolicy {
        RestDayPolicy {
            harmony_threshold: self.rest_day.harmony_threshold,
            low_ratio: self.rest_day.low_ratio,
        }
    }

    pub fn riseset_config(&self) -> RiseSetConfig {
        RiseSetConfig {
            refraction_arcmin: self.riseset.refraction_arcmin,
            altitude_correction: self.riseset.altitude_correction,
            ..RiseSetConfig::default()
        }
    }

    pub fn provider(&self) -> AnalyticSolarProvider {
        AnalyticSolarProvider::new(self.riseset_config())
    }

    pub fn clock_config(&self) -> Result<ClockConfig, ConfigError> {
        Ok(ClockConfig {
            hours: self.hours_config()?,
            window: self.window_thresholds(),
            rest_day: self.rest_day_policy(),
            language: self.language()?,
            cache_capacity: self.refresh.cache_capacity,
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.interval_seconds)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, format!("not a number: {value:?}")))
}
