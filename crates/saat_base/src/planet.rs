//! The 7 classical planets and their elements.
//!
//! Ordered by weekday rulership: Sunday is ruled by the Sun, Monday by the
//! Moon, and so on through Saturday (Saturn).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::ParseError;

/// A classical planet ruling a planetary hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// All 7 planets in weekday order (index 0 = Sunday's ruler).
pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

impl Planet {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// Fixed element of the planet.
    pub const fn element(self) -> Element {
        match self {
            Self::Sun | Self::Mars => Element::Fire,
            Self::Moon => Element::Water,
            Self::Mercury | Self::Jupiter => Element::Air,
            Self::Venus | Self::Saturn => Element::Earth,
        }
    }

    /// 0-based index into [`ALL_PLANETS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
        }
    }
}

/// Ruling planet of a weekday (and of that day's first hour).
pub fn day_ruler(weekday: Weekday) -> Planet {
    ALL_PLANETS[weekday.num_days_from_sunday() as usize]
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PLANETS
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::Planet(s.to_string()))
    }
}
