//! Current hour resolution.

use chrono::{DateTime, Utc};

use crate::hours_types::PlanetaryHour;

/// The hour flagged as current, if any.
///
/// `None` is a valid outcome: the list was computed for another day or the
/// clock moved outside its span, and the caller should recompute.
pub fn resolve_current(hours: &[PlanetaryHour]) -> Option<&PlanetaryHour> {
    hours.iter().find(|h| h.is_current)
}

/// Index of the hour containing `instant`, evaluated directly.
pub fn hour_index_at(hours: &[PlanetaryHour], instant: DateTime<Utc>) -> Option<usize> {
    hours.iter().position(|h| h.contains(instant))
}

/// Recompute `is_current` for every hour against `now`.
pub fn mark_current(hours: &mut [PlanetaryHour], now: DateTime<Utc>) {
    for h in hours {
        h.is_current = h.contains(now);
    }
}
