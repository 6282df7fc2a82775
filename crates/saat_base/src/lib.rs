//! Static tables and pure lookups for planetary hours.
//!
//! This crate provides:
//! - The 7 classical planets and their elements
//! - The Chaldean order and the weekday → 24-hour ruler sequence
//! - The element alignment table and its quality tiers
//! - Guidance text per alignment quality
//! - Display-name tables keyed by language tag

pub mod alignment;
pub mod element;
pub mod error;
pub mod guidance;
pub mod lang;
pub mod planet;
pub mod sequence;

pub use alignment::{ALIGNMENT_TABLE, AlignmentQuality, ElementAlignment, align};
pub use element::{ALL_ELEMENTS, Element};
pub use error::ParseError;
pub use guidance::{Guidance, guidance_for};
pub use lang::{Language, element_name, planet_name};
pub use planet::{ALL_PLANETS, Planet, day_ruler};
pub use sequence::{
    CHALDEAN_ORDER, HOURS_PER_DAY, WEEKDAY_SEQUENCES, hour_ruler, planetary_sequence,
};
