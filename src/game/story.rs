//! Endings
//!
//! The three endings and the trust bands that select them. The bands leave
//! a gap at 50-69; lookup falls back to the first (good) ending there,
//! matching the shipped behavior.

/// One possible ending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ending {
    /// Stable id recorded in progress when reached.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short summary for the endings gallery.
    pub description: &'static str,
    /// Inclusive trust band that selects this ending.
    pub trust_min: i32,
    /// Inclusive upper bound of the band.
    pub trust_max: i32,
    /// Full ending scene text.
    pub scene: &'static str,
}

/// All endings, best first.
pub static ENDINGS: &[Ending] = &[
    Ending {
        id: "good",
        name: "A New Beginning",
        description: "You and Puro have built a strong, trusting friendship.",
        trust_min: 70,
        trust_max: 100,
        scene: "The library has become a true home. Puro sits beside you, reading peacefully. \
                \"Thank you,\" he says softly, \"for seeing me as more than just... what I am. \
                You've helped me find purpose, and together, we've created something beautiful \
                here.\" He smiles, his eyes reflecting genuine happiness. \"This is where we \
                belong, together.\"",
    },
    Ending {
        id: "purlin-fusion",
        name: "Purlin Fusion",
        description: "Low trust led to a desperate fusion where both minds share one body.",
        trust_min: 30,
        trust_max: 49,
        scene: "Puro's form shifts, uncertainty in his eyes. \"I... I can't survive alone,\" he \
                whispers. \"Please understand.\" Before you can respond, he embraces you, and the \
                transformation begins. But something is different - your consciousness remains, \
                intertwined with his. Two minds, one body. \"We're... together now,\" you both \
                think as one. \"Purlin.\" It's not what either of you wanted, but you'll face \
                this new existence together.",
    },
    Ending {
        id: "complete-assimilation",
        name: "Complete Assimilation",
        description: "Very low trust resulted in Puro forcing complete assimilation.",
        trust_min: 0,
        trust_max: 29,
        scene: "Puro's desperation overwhelms him. \"I need a host to survive,\" he says, his \
                voice trembling with fear and determination. \"I'm sorry, but I have no choice.\" \
                The transformation is swift and absolute. Your consciousness fades as Puro's \
                takes over completely. Colin is gone, absorbed entirely. Puro stands alone in \
                the library, tears streaming down his face. \"I'm sorry... I'm so sorry...\" \
                But it's too late. Survival came at the ultimate cost.",
    },
];

/// Select the ending for a trust level.
///
/// Falls back to the first ending when no band matches (trust 50-69).
pub fn ending_for_trust(trust_level: i32) -> &'static Ending {
    ENDINGS
        .iter()
        .find(|e| trust_level >= e.trust_min && trust_level <= e.trust_max)
        .unwrap_or(&ENDINGS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_trust_good_ending() {
        assert_eq!(ending_for_trust(100).id, "good");
        assert_eq!(ending_for_trust(70).id, "good");
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ending_for_trust(49).id, "purlin-fusion");
        assert_eq!(ending_for_trust(30).id, "purlin-fusion");
        assert_eq!(ending_for_trust(29).id, "complete-assimilation");
        assert_eq!(ending_for_trust(0).id, "complete-assimilation");
    }

    #[test]
    fn test_gap_falls_back_to_good() {
        // 50-69 sits between the defined bands
        assert_eq!(ending_for_trust(50).id, "good");
        assert_eq!(ending_for_trust(69).id, "good");
    }
}
