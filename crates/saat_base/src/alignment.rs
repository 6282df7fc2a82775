//! Element alignment between a user profile and a planetary hour.
//!
//! The classical correspondences are a closed table, not a formula:
//! - complementary pairs (Fire↔Air, Water↔Earth) are `Perfect`
//! - the same element is `Strong` ("doubled energy")
//! - Fire↔Earth and Water↔Air are `Moderate`
//! - Air↔Earth is `Weak`, Fire↔Water is `Opposing`

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Qualitative alignment tier, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentQuality {
    Opposing,
    Weak,
    Moderate,
    Strong,
    Perfect,
}

impl AlignmentQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opposing => "opposing",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::Perfect => "perfect",
        }
    }
}

/// Result of aligning a user element with an hour element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementAlignment {
    pub user_element: Element,
    pub hour_element: Element,
    pub quality: AlignmentQuality,
    /// Harmony in [0, 100].
    pub harmony_score: u8,
}

impl ElementAlignment {
    /// Same element on both sides.
    pub fn is_doubled(&self) -> bool {
        self.user_element == self.hour_element
    }
}

use AlignmentQuality::{Moderate, Opposing, Perfect, Strong, Weak};

/// Alignment table indexed `[user][hour]` in [`crate::ALL_ELEMENTS`] order
/// (Fire, Water, Air, Earth). Symmetric.
pub const ALIGNMENT_TABLE: [[(AlignmentQuality, u8); 4]; 4] = [
    // Fire
    [(Strong, 85), (Opposing, 25), (Perfect, 92), (Moderate, 60)],
    // Water
    [(Opposing, 25), (Strong, 85), (Moderate, 60), (Perfect, 92)],
    // Air
    [(Perfect, 92), (Moderate, 60), (Strong, 85), (Weak, 30)],
    // Earth
    [(Moderate, 60), (Perfect, 92), (Weak, 30), (Strong, 85)],
];

/// Align a user element with the element of an hour.
pub fn align(user_element: Element, hour_element: Element) -> ElementAlignment {
    let (quality, harmony_score) = ALIGNMENT_TABLE[user_element.index()][hour_element.index()];
    ElementAlignment {
        user_element,
        hour_element,
        quality,
        harmony_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;
    use proptest::prelude::*;

    fn element() -> impl Strategy<Value = Element> {
        prop::sample::select(ALL_ELEMENTS.to_vec())
    }

    #[test]
    fn same_element_is_strong() {
        for e in ALL_ELEMENTS {
            let a = align(e, e);
            assert_eq!(a.quality, Strong);
            assert!(a.is_doubled());
            assert!(a.harmony_score >= 80);
        }
    }

    #[test]
    fn complementary_pairs_are_high_band() {
        for (a, b) in [(Element::Fire, Element::Air), (Element::Water, Element::Earth)] {
            let r = align(a, b);
            assert_eq!(r.quality, Perfect);
            assert!((85..=95).contains(&r.harmony_score));
        }
    }

    #[test]
    fn opposing_pairs_are_low_band() {
        for (a, b) in [(Element::Fire, Element::Water), (Element::Air, Element::Earth)] {
            let r = align(a, b);
            assert!(r.quality <= Weak);
            assert!((20..=35).contains(&r.harmony_score));
        }
        assert_eq!(align(Element::Water, Element::Fire).quality, Opposing);
    }

    #[test]
    fn remaining_pairs_are_moderate() {
        for (a, b) in [(Element::Fire, Element::Earth), (Element::Water, Element::Air)] {
            let r = align(a, b);
            assert_eq!(r.quality, Moderate);
            assert!((55..=65).contains(&r.harmony_score));
        }
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in element(), b in element()) {
            let ab = align(a, b);
            let ba = align(b, a);
            prop_assert_eq!(ab.quality, ba.quality);
            prop_assert_eq!(ab.harmony_score, ba.harmony_score);
        }

        #[test]
        fn prop_score_monotonic_with_quality(
            a in element(),
            b in element(),
            c in element(),
            d in element(),
        ) {
            let x = align(a, b);
            let y = align(c, d);
            if x.quality > y.quality {
                prop_assert!(x.harmony_score > y.harmony_score);
            }
            prop_assert!(x.harmony_score <= 100);
        }
    }
}
