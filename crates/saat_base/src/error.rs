//! Parse errors for table keys.

use thiserror::Error;

/// A string did not name a known table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unknown element: {0}")]
    Element(String),
    #[error("unknown planet: {0}")]
    Planet(String),
    #[error("unknown language tag: {0}")]
    Language(String),
}
