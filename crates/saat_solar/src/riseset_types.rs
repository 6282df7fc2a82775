//! Types for sunrise/sunset calculations.
//!
//! Provides geographic location, event types, configuration, and result
//! types used by the rise/set computation module.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SolarError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a geographic location, rejecting out-of-range coordinates.
    pub fn try_new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, SolarError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        };
        loc.validate()?;
        Ok(loc)
    }

    /// Check that all coordinates are finite and in range.
    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(SolarError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(SolarError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(SolarError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Location as supplied by the geolocation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Validated coordinates.
    #[serde(flatten)]
    pub coordinates: GeoLocation,
    /// Display name of the nearest city.
    #[serde(default)]
    pub city_name: String,
    /// Whether the coordinates came from a precise fix rather than a default.
    #[serde(default)]
    pub is_accurate: bool,
}

impl Location {
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        city_name: impl Into<String>,
        is_accurate: bool,
    ) -> Result<Self, SolarError> {
        Ok(Self {
            coordinates: GeoLocation::try_new(latitude_deg, longitude_deg, 0.0)?,
            city_name: city_name.into(),
            is_accurate,
        })
    }
}

/// Rise/set event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears at the horizon.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Fixed solar semidiameter in arcminutes. `None` derives it from the
    /// Earth–Sun distance at the event.
    pub semidiameter_arcmin: Option<f64>,
    /// Whether to apply geometric dip for observer altitude. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: None,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Target altitude of the Sun's centre in degrees (negative = below
    /// the horizon) for a given semidiameter and observer altitude.
    ///
    /// `h0 = -(refraction + semidiameter) / 60 - dip_deg`
    pub fn target_altitude_deg(&self, derived_semidiameter_arcmin: f64, altitude_m: f64) -> f64 {
        let sd = self.semidiameter_arcmin.unwrap_or(derived_semidiameter_arcmin);
        let base = (self.refraction_arcmin + sd) / 60.0;
        let dip = if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        };
        -(base + dip)
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UTC).
    Event { jd_utc: f64, event: RiseSetEvent },
    /// Sun never rises during this solar day (polar night).
    NeverRises,
    /// Sun never sets during this solar day (midnight sun).
    NeverSets,
}

/// Sunrise and sunset for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SolarTimes {
    /// Build from two instants, requiring sunset strictly after sunrise.
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Result<Self, SolarError> {
        if sunset <= sunrise {
            return Err(SolarError::InvalidSpan);
        }
        Ok(Self { sunrise, sunset })
    }

    /// Length of daylight.
    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }
}
