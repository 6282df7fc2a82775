//! Day-level outlook: reduce the 24 hourly alignments to a rest-day flag.

use saat_base::{Element, align};
use serde::{Deserialize, Serialize};

use crate::hours_types::PlanetaryHour;

/// Thresholds for flagging a rest day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestDayPolicy {
    /// Hours scoring strictly below this harmony count as low.
    pub harmony_threshold: u8,
    /// Fraction of low hours (0..=1) at or above which the day is a rest day.
    pub low_ratio: f64,
}

impl Default for RestDayPolicy {
    fn default() -> Self {
        Self {
            harmony_threshold: 65,
            low_ratio: 0.7,
        }
    }
}

/// Summary of a day's hours against one user element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOutlook {
    pub total_hours: usize,
    pub low_harmony_hours: usize,
    pub average_harmony: f64,
    pub is_rest_day: bool,
    /// Indices of the hours with the highest harmony score.
    pub best_hours: Vec<u8>,
}

/// Reduce `hours` to a [`DayOutlook`] for `user_element`.
///
/// An empty list yields a zeroed outlook that is not a rest day.
pub fn day_outlook(
    hours: &[PlanetaryHour],
    user_element: Element,
    policy: &RestDayPolicy,
) -> DayOutlook {
    let scores: Vec<(u8, u8)> = hours
        .iter()
        .map(|h| (h.index, align(user_element, h.element()).harmony_score))
        .collect();

    let total_hours = scores.len();
    if total_hours == 0 {
        return DayOutlook {
            total_hours,
            low_harmony_hours: 0,
            average_harmony: 0.0,
            is_rest_day: false,
            best_hours: Vec::new(),
        };
    }

    let low_harmony_hours = scores
        .iter()
        .filter(|(_, s)| *s < policy.harmony_threshold)
        .count();
    let sum: u32 = scores.iter().map(|(_, s)| u32::from(*s)).sum();
    let best = scores.iter().map(|(_, s)| *s).max().unwrap_or(0);

    DayOutlook {
        total_hours,
        low_harmony_hours,
        average_harmony: f64::from(sum) / total_hours as f64,
        is_rest_day: low_harmony_hours as f64 / total_hours as f64 >= policy.low_ratio,
        best_hours: scores
            .iter()
            .filter(|(_, s)| *s == best)
            .map(|(i, _)| *i)
            .collect(),
    }
}
