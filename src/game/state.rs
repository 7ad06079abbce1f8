//! Game Progress
//!
//! Central progression state: the trust level, everything the player has
//! unlocked, and the current scene. Owned by the session, serialized
//! whole into the save file.

use serde::{Deserialize, Serialize};

use crate::game::scenes::SceneKind;

/// Trust starts at the midpoint of its range.
pub const INITIAL_TRUST: i32 = 50;

/// Lower trust bound.
pub const TRUST_MIN: i32 = 0;

/// Upper trust bound.
pub const TRUST_MAX: i32 = 100;

/// A letter sent through the vent, with the hive's eventual reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// True for letters the player wrote (replies attach to these).
    pub from_player: bool,
    /// Letter body.
    pub content: String,
    /// Reply from the other side, once generated.
    pub response: Option<String>,
}

/// A decoration the player placed in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCustomization {
    /// Catalog item name.
    pub item_name: String,
    /// Catalog item description, denormalized for display.
    pub description: String,
    /// Placement slot name (resolved to a position by the library scene).
    pub location: String,
}

/// Everything that persists across play sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProgress {
    /// Companion trust, clamped to [0, 100].
    pub trust_level: i32,
    /// Dialogue node the conversation is at, if one is open.
    pub current_dialogue_node: Option<u32>,
    /// Names of completed activities (repeats allowed, in order).
    pub completed_activities: Vec<String>,
    /// Decorations placed in the library.
    pub library_customizations: Vec<PlacedCustomization>,
    /// Titles of unlocked memory moments.
    pub unlocked_moments: Vec<String>,
    /// Letters written and received.
    pub letters: Vec<Letter>,
    /// IDs of endings the player has seen.
    pub endings_unlocked: Vec<String>,
    /// Names of items discovered while exploring.
    pub discovered_items: Vec<String>,
    /// How many times the player has been transfurred in the hive.
    pub transfur_count: u32,
    /// Scene the player is currently in.
    pub current_scene: SceneKind,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            trust_level: INITIAL_TRUST,
            current_dialogue_node: None,
            completed_activities: Vec::new(),
            library_customizations: Vec::new(),
            unlocked_moments: Vec::new(),
            letters: Vec::new(),
            endings_unlocked: Vec::new(),
            discovered_items: Vec::new(),
            transfur_count: 0,
            current_scene: SceneKind::Library,
        }
    }
}

impl GameProgress {
    /// Fresh progress for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set trust directly, clamped to the valid range.
    pub fn set_trust(&mut self, level: i32) {
        self.trust_level = level.clamp(TRUST_MIN, TRUST_MAX);
    }

    /// Adjust trust by a delta, clamped to the valid range.
    pub fn adjust_trust(&mut self, delta: i32) {
        self.set_trust(self.trust_level + delta);
    }

    /// Record a completed activity and apply its trust effect.
    pub fn complete_activity(&mut self, name: &str, trust_delta: i32) {
        self.completed_activities.push(name.to_string());
        self.adjust_trust(trust_delta);
    }

    /// Unlock a memory moment. Repeat unlocks are no-ops.
    pub fn unlock_moment(&mut self, title: &str) {
        if !self.unlocked_moments.iter().any(|m| m == title) {
            self.unlocked_moments.push(title.to_string());
        }
    }

    /// Record that an ending was reached. Repeat unlocks are no-ops.
    pub fn unlock_ending(&mut self, ending_id: &str) {
        if !self.endings_unlocked.iter().any(|e| e == ending_id) {
            self.endings_unlocked.push(ending_id.to_string());
        }
    }

    /// Record a discovered item. Repeat discoveries are no-ops.
    pub fn discover_item(&mut self, item_name: &str) {
        if !self.discovered_items.iter().any(|i| i == item_name) {
            self.discovered_items.push(item_name.to_string());
        }
    }

    /// Append a letter from the player; returns its index for reply lookup.
    pub fn add_letter(&mut self, content: &str) -> usize {
        self.letters.push(Letter {
            from_player: true,
            content: content.to_string(),
            response: None,
        });
        self.letters.len() - 1
    }

    /// Attach a response to a previously sent letter.
    ///
    /// Returns `false` if the index is out of range.
    pub fn add_letter_response(&mut self, index: usize, response: &str) -> bool {
        match self.letters.get_mut(index) {
            Some(letter) => {
                letter.response = Some(response.to_string());
                true
            }
            None => false,
        }
    }

    /// Place a decoration in the library.
    pub fn add_customization(&mut self, item: PlacedCustomization) {
        self.library_customizations.push(item);
    }

    /// Count one more transfur.
    pub fn record_transfur(&mut self) {
        self.transfur_count += 1;
    }

    /// Wipe everything back to a new game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let progress = GameProgress::new();
        assert_eq!(progress.trust_level, INITIAL_TRUST);
        assert_eq!(progress.current_scene, SceneKind::Library);
        assert!(progress.completed_activities.is_empty());
        assert_eq!(progress.transfur_count, 0);
    }

    #[test]
    fn test_trust_clamps_at_both_ends() {
        let mut progress = GameProgress::new();
        progress.adjust_trust(1000);
        assert_eq!(progress.trust_level, TRUST_MAX);
        progress.adjust_trust(-1000);
        assert_eq!(progress.trust_level, TRUST_MIN);
        progress.set_trust(250);
        assert_eq!(progress.trust_level, TRUST_MAX);
    }

    #[test]
    fn test_complete_activity_records_and_adjusts() {
        let mut progress = GameProgress::new();
        progress.complete_activity("Read Together", 10);
        assert_eq!(progress.completed_activities, vec!["Read Together"]);
        assert_eq!(progress.trust_level, 60);
    }

    #[test]
    fn test_unlocks_are_idempotent() {
        let mut progress = GameProgress::new();
        progress.unlock_moment("Snack Time");
        progress.unlock_moment("Snack Time");
        assert_eq!(progress.unlocked_moments.len(), 1);

        progress.unlock_ending("good");
        progress.unlock_ending("good");
        assert_eq!(progress.endings_unlocked.len(), 1);

        progress.discover_item("Old Key");
        progress.discover_item("Old Key");
        assert_eq!(progress.discovered_items.len(), 1);
    }

    #[test]
    fn test_letters_and_responses() {
        let mut progress = GameProgress::new();
        let index = progress.add_letter("Hello out there");
        assert!(progress.add_letter_response(index, "Hello back"));
        assert_eq!(
            progress.letters[index].response.as_deref(),
            Some("Hello back")
        );
        assert!(!progress.add_letter_response(99, "lost"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut progress = GameProgress::new();
        progress.adjust_trust(30);
        progress.record_transfur();
        progress.current_scene = SceneKind::Hive;
        progress.reset();
        assert_eq!(progress, GameProgress::default());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut progress = GameProgress::new();
        progress.complete_activity("Feed Oranges", 12);
        progress.unlock_moment("Snack Time");
        progress.add_letter("A quiet afternoon");
        progress.current_scene = SceneKind::Hive;

        let json = serde_json::to_string(&progress).unwrap();
        let back: GameProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
    }
}
