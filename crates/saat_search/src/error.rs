//! Error types for the planetary hour engine.

use saat_solar::SolarError;
use thiserror::Error;

/// Errors from hour computation and window derivation.
///
/// Invalid solar times are not errors: they switch the engine into
/// fallback mode. Only invalid input and unresolvable states surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid location or other solar-layer input error.
    #[error("solar error: {0}")]
    Solar(#[from] SolarError),
    /// No hour in the list contains the instant; recompute for the current date.
    #[error("no planetary hour contains the current instant")]
    NoCurrentHour,
    /// Date arithmetic left chrono's supported range.
    #[error("date out of range: {0}")]
    DateOutOfRange(&'static str),
}
