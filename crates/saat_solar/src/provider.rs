//! The solar time provider seam.

use chrono::NaiveDate;

use crate::error::SolarError;
use crate::riseset::solar_times_for_date;
use crate::riseset_types::{GeoLocation, RiseSetConfig, SolarTimes};

/// Source of sunrise/sunset instants for a date and location.
///
/// Implementations must be pure: the same inputs give the same output.
pub trait SolarTimeProvider {
    fn solar_times(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SolarTimes, SolarError>;
}

impl<T: SolarTimeProvider + ?Sized> SolarTimeProvider for &T {
    fn solar_times(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SolarTimes, SolarError> {
        (**self).solar_times(date, location)
    }
}

/// Built-in provider using the analytic solar coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticSolarProvider {
    config: RiseSetConfig,
}

impl AnalyticSolarProvider {
    pub fn new(config: RiseSetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiseSetConfig {
        &self.config
    }
}

impl SolarTimeProvider for AnalyticSolarProvider {
    fn solar_times(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SolarTimes, SolarError> {
        solar_times_for_date(date, location, &self.config)
    }
}
