//! The four classical elements.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Classical element assigned to planets and to a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

/// All 4 elements in table order.
pub const ALL_ELEMENTS: [Element; 4] =
    [Element::Fire, Element::Water, Element::Air, Element::Earth];

impl Element {
    /// 0-based index into [`ALL_ELEMENTS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Fire => 0,
            Self::Water => 1,
            Self::Air => 2,
            Self::Earth => 3,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Air => "Air",
            Self::Earth => "Earth",
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::Element(s.to_string()))
    }
}
