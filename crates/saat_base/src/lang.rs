//! Display names keyed by language tag.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::ParseError;
use crate::planet::Planet;

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
    French,
}

impl Language {
    /// Language tag (`en`, `ar`, `fr`).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
            Self::French => "fr",
        }
    }

    pub(crate) const fn column(self) -> usize {
        match self {
            Self::English => 0,
            Self::Arabic => 1,
            Self::French => 2,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    /// Accepts a tag with optional region (`fr-CA`) or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            "fr" | "french" => Ok(Self::French),
            _ => Err(ParseError::Language(s.to_string())),
        }
    }
}

/// Planet names, `[planet][en, ar, fr]`.
const PLANET_NAMES: [[&str; 3]; 7] = [
    ["Sun", "الشمس", "Soleil"],
    ["Moon", "القمر", "Lune"],
    ["Mars", "المريخ", "Mars"],
    ["Mercury", "عطارد", "Mercure"],
    ["Jupiter", "المشتري", "Jupiter"],
    ["Venus", "الزهرة", "Vénus"],
    ["Saturn", "زحل", "Saturne"],
];

/// Element names, `[element][en, ar, fr]`.
const ELEMENT_NAMES: [[&str; 3]; 4] = [
    ["Fire", "نار", "Feu"],
    ["Water", "ماء", "Eau"],
    ["Air", "هواء", "Air"],
    ["Earth", "تراب", "Terre"],
];

pub fn planet_name(planet: Planet, lang: Language) -> &'static str {
    PLANET_NAMES[planet.index()][lang.column()]
}

pub fn element_name(element: Element, lang: Language) -> &'static str {
    ELEMENT_NAMES[element.index()][lang.column()]
}
