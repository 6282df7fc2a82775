//! Recommended actions per alignment quality.
//!
//! English and French text; Arabic falls back to English.

use serde::Serialize;

use crate::alignment::AlignmentQuality;
use crate::lang::Language;

/// Guidance for the current alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub quality: AlignmentQuality,
    pub headline: &'static str,
    pub actions: &'static [&'static str],
}

struct Entry {
    headline: &'static str,
    actions: &'static [&'static str],
}

/// `[quality][en, fr]`, quality in ascending tier order.
const GUIDANCE: [[Entry; 2]; 5] = [
    [
        Entry {
            headline: "Opposing energies: hold back",
            actions: &[
                "Postpone important decisions",
                "Avoid confrontation and new commitments",
                "Favour rest, reflection and quiet remembrance",
            ],
        },
        Entry {
            headline: "Énergies opposées : retenez-vous",
            actions: &[
                "Reportez les décisions importantes",
                "Évitez les confrontations et les nouveaux engagements",
                "Privilégiez le repos, la réflexion et le recueillement",
            ],
        },
    ],
    [
        Entry {
            headline: "Weak alignment: keep to routine",
            actions: &[
                "Handle routine tasks only",
                "Prepare rather than launch",
            ],
        },
        Entry {
            headline: "Alignement faible : restez dans la routine",
            actions: &[
                "Ne traitez que les tâches courantes",
                "Préparez plutôt que de lancer",
            ],
        },
    ],
    [
        Entry {
            headline: "Moderate alignment: steady progress",
            actions: &[
                "Continue work already under way",
                "Study, plan and organise",
            ],
        },
        Entry {
            headline: "Alignement modéré : progrès régulier",
            actions: &[
                "Poursuivez le travail en cours",
                "Étudiez, planifiez et organisez",
            ],
        },
    ],
    [
        Entry {
            headline: "Doubled energy: act with focus",
            actions: &[
                "Start work that matches your nature",
                "Have important conversations",
                "Channel the surplus; avoid excess",
            ],
        },
        Entry {
            headline: "Énergie doublée : agissez avec concentration",
            actions: &[
                "Commencez un travail conforme à votre nature",
                "Tenez les conversations importantes",
                "Canalisez le surplus ; évitez l'excès",
            ],
        },
    ],
    [
        Entry {
            headline: "Perfect harmony: the moment to begin",
            actions: &[
                "Launch new projects",
                "Make important decisions",
                "Seek agreements and sign commitments",
            ],
        },
        Entry {
            headline: "Harmonie parfaite : le moment de commencer",
            actions: &[
                "Lancez de nouveaux projets",
                "Prenez les décisions importantes",
                "Recherchez des accords et engagez-vous",
            ],
        },
    ],
];

/// Guidance for an alignment quality in the requested language.
pub fn guidance_for(quality: AlignmentQuality, lang: Language) -> Guidance {
    let column = match lang {
        Language::French => 1,
        Language::English | Language::Arabic => 0,
    };
    let entry = &GUIDANCE[quality as usize][column];
    Guidance {
        quality,
        headline: entry.headline,
        actions: entry.actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_quality_has_actions() {
        for q in [
            AlignmentQuality::Opposing,
            AlignmentQuality::Weak,
            AlignmentQuality::Moderate,
            AlignmentQuality::Strong,
            AlignmentQuality::Perfect,
        ] {
            for lang in [Language::English, Language::French] {
                let g = guidance_for(q, lang);
                assert_eq!(g.quality, q);
                assert!(!g.actions.is_empty());
            }
        }
    }

    #[test]
    fn french_differs_from_english() {
        let en = guidance_for(AlignmentQuality::Perfect, Language::English);
        let fr = guidance_for(AlignmentQuality::Perfect, Language::French);
        assert_ne!(en.headline, fr.headline);
        assert_eq!(fr.actions.len(), en.actions.len());
    }

    #[test]
    fn arabic_falls_back_to_english() {
        let en = guidance_for(AlignmentQuality::Weak, Language::English);
        let ar = guidance_for(AlignmentQuality::Weak, Language::Arabic);
        assert_eq!(en, ar);
    }

    #[test]
    fn opposing_advises_restraint() {
        let g = guidance_for(AlignmentQuality::Opposing, Language::English);
        assert!(g.headline.contains("hold back"));
    }
}
