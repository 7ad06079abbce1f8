//! Memory Moments
//!
//! Unlockable vignettes of time spent with the companion. Activities unlock
//! them; viewing additionally requires enough trust.

/// One unlockable vignette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    /// Stable id.
    pub id: &'static str,
    /// Title (the key activities unlock by).
    pub title: &'static str,
    /// Gallery description.
    pub description: &'static str,
    /// Vignette text.
    pub scene: &'static str,
    /// Minimum trust to view once unlocked.
    pub trust_requirement: i32,
}

/// All moments.
pub static MOMENTS: &[Moment] = &[
    Moment {
        id: "sitting-mat",
        title: "Sitting on the Mat",
        description: "A quiet moment shared with Puro on his favorite mat.",
        scene: "You and Puro sit together on the soft mat, surrounded by books. The dim light \
                creates a peaceful atmosphere. Puro looks content, his tail gently swaying. \
                \"Thank you for being here,\" he says softly.",
        trust_requirement: 30,
    },
    Moment {
        id: "snack-time",
        title: "Snack Time",
        description: "Watching Puro enjoy his favorite snacks.",
        scene: "Puro happily munches on fresh oranges from the bonsai tree. His eyes light up \
                with each bite, and he makes small happy sounds. \"These are so good!\" he \
                exclaims, offering you one with a smile.",
        trust_requirement: 50,
    },
];

/// Look up a moment by its title.
pub fn find_by_title(title: &str) -> Option<&'static Moment> {
    MOMENTS.iter().find(|m| m.title == title)
}

/// Whether a moment can be viewed at the given trust level.
pub fn viewable(moment: &Moment, trust_level: i32) -> bool {
    trust_level >= moment.trust_requirement
}
