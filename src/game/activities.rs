//! Shared Activities
//!
//! Things the player and companion can do together. Completing an activity
//! raises trust and may unlock a memory moment.

use crate::game::state::GameProgress;

/// One entry in the activity menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    /// Stable id.
    pub id: &'static str,
    /// Display name (recorded in progress on completion).
    pub name: &'static str,
    /// Menu description.
    pub description: &'static str,
    /// Trust gained (or lost) on completion.
    pub trust_effect: i32,
    /// Message shown after completing.
    pub completion_message: &'static str,
    /// Moment title unlocked by this activity, if any.
    pub unlocks_moment: Option<&'static str>,
}

/// All activities, in menu order.
pub static ACTIVITIES: &[Activity] = &[
    Activity {
        id: "read",
        name: "Read Together",
        description: "Spend a quiet afternoon reading books with Puro.",
        trust_effect: 10,
        completion_message: "You and Puro enjoyed a peaceful reading session together.",
        unlocks_moment: Some("Sitting on the Mat"),
    },
    Activity {
        id: "stories",
        name: "Listen to Stories",
        description: "Hear Puro share stories about his life in the laboratory.",
        trust_effect: 8,
        completion_message: "Puro opened up and shared some of his memories with you.",
        unlocks_moment: None,
    },
    Activity {
        id: "feed",
        name: "Feed Oranges",
        description: "Pick fresh oranges from the bonsai tree and share them with Puro.",
        trust_effect: 12,
        completion_message: "Puro happily munched on the oranges. He seems very content!",
        unlocks_moment: Some("Snack Time"),
    },
];

/// Look up an activity by id.
pub fn find(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

/// Complete an activity: record it, apply trust, unlock the linked moment.
///
/// Returns the completion message for the caller to display.
pub fn complete(progress: &mut GameProgress, activity: &Activity) -> &'static str {
    progress.complete_activity(activity.name, activity.trust_effect);
    if let Some(moment) = activity.unlocks_moment {
        progress.unlock_moment(moment);
    }
    activity.completion_message
}
