//! Game Module
//!
//! Contains game-specific systems that build on top of the engine: scenes,
//! hostile-entity AI, progression state, content tables, and persistence.

pub mod activities;
pub mod customization;
pub mod dialogue;
pub mod enemies;
pub mod letters;
pub mod minigames;
pub mod moments;
pub mod save;
pub mod scenes;
pub mod session;
pub mod settings;
pub mod state;
pub mod story;
pub mod types;

// Re-exports from core gameplay modules
pub use enemies::{BeastController, BeastPhase};
pub use scenes::{HiveScene, LibraryScene, SceneKind};
pub use session::{GameSession, SessionEvent};
pub use state::GameProgress;

// Re-exports from content modules
pub use activities::{ACTIVITIES, Activity};
pub use dialogue::{DIALOGUE_TREE, DialogueChoice, DialogueNode};
pub use moments::{MOMENTS, Moment};
pub use story::{ENDINGS, Ending, ending_for_trust};

pub use save::{SaveData, SaveFileError, load_game, save_game};
pub use settings::Settings;
pub use types::{DirectionSeq, hash_2d, pick_index};
