//! Scenes
//!
//! The two playable spaces: the library (companion, activities, proximity
//! teleport) and the hive (hostile beasts, capture encounters). Scenes own
//! everything with a per-scene lifetime - beasts, proximity triggers,
//! cooldowns - while the session owns the player and camera.

pub mod hive;
pub mod library;

use serde::{Deserialize, Serialize};

pub use hive::{HIVE_HALF_EXTENT, HiveEvent, HiveScene};
pub use library::{LIBRARY_HALF_EXTENT, LibraryEvent, LibraryScene};

/// Which scene the player is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// The cozy library interior.
    Library,
    /// The white latex hive forest.
    Hive,
}

impl Default for SceneKind {
    fn default() -> Self {
        SceneKind::Library
    }
}
