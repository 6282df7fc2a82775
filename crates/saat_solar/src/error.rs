//! Error types for solar time computation.

use thiserror::Error;

/// Errors from location validation or sunrise/sunset computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SolarError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Sun stays below the horizon for the whole solar day (polar night).
    #[error("sun never rises on this date at this location")]
    NeverRises,
    /// Sun stays above the horizon for the whole solar day (midnight sun).
    #[error("sun never sets on this date at this location")]
    NeverSets,
    /// Iterative algorithm did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// A computed Julian Date cannot be represented as an instant.
    #[error("instant out of range: {0}")]
    InstantOutOfRange(&'static str),
    /// Sunset does not follow sunrise.
    #[error("sunset does not follow sunrise")]
    InvalidSpan,
}

impl SolarError {
    /// Whether this error stems from a polar day or polar night.
    pub fn is_polar(&self) -> bool {
        matches!(self, Self::NeverRises | Self::NeverSets)
    }
}
