//! Hive Scene
//!
//! The white latex forest: an open area ringed by procedurally placed latex
//! trees, patrolled by four beasts. A beast reaching the player starts a
//! "transfur" encounter; while the encounter plays out the whole scene is
//! frozen, and a short cooldown swallows immediate re-captures afterwards.

use glam::Vec3;

use crate::game::enemies::BeastController;
use crate::game::types::{hash_2d, pick_index};
use crate::world::SceneBounds;

/// Half-extent of the hive play area.
pub const HIVE_HALF_EXTENT: f32 = 25.0;

/// Player spawn point when teleporting in.
pub const HIVE_SPAWN: Vec3 = Vec3::ZERO;

/// Seconds after an encounter starts during which new captures are swallowed.
pub const CAPTURE_COOLDOWN: f32 = 3.0;

/// Beast spawn points around the clearing.
pub const BEAST_SPAWNS: [Vec3; 4] = [
    Vec3::new(8.0, 0.0, 8.0),
    Vec3::new(-10.0, 0.0, 6.0),
    Vec3::new(6.0, 0.0, -10.0),
    Vec3::new(-8.0, 0.0, -8.0),
];

/// Narration shown when a beast captures the player.
pub const ENCOUNTER_MESSAGES: [&str; 4] = [
    "The white latex creature envelops you in a warm embrace...",
    "You feel yourself changing as the latex spreads...",
    "The transformation is complete. You are one with the hive now.",
    "The white latex absorbs you into its collective...",
];

// Forest layout: trees on a jittered grid with a clearing around the spawn
const FOREST_EXTENT: f32 = 30.0;
const TREE_SPACING: f32 = 4.0;
const TREE_JITTER: f32 = 1.5;
const SPAWN_CLEARING: f32 = 6.0;

/// Events the hive scene can emit in a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiveEvent {
    /// A beast captured the player; start the encounter overlay.
    CaptureStarted {
        /// Narration line for the encounter.
        message: &'static str,
    },
}

/// Scene state for the hive.
#[derive(Debug, Clone)]
pub struct HiveScene {
    bounds: SceneBounds,
    beasts: Vec<BeastController>,
    capture_cooldown: f32,
    captures_seen: u32,
    layout_seed: u32,
}

impl HiveScene {
    /// Create the hive with its four beasts.
    ///
    /// The seed drives both the forest layout and every beast's wander
    /// sequence, so a whole scene replays identically for the same seed.
    pub fn new(seed: u32) -> Self {
        let beasts = BEAST_SPAWNS
            .iter()
            .enumerate()
            .map(|(i, &spawn)| BeastController::new(spawn, seed.wrapping_mul(131).wrapping_add(i as u32)))
            .collect();
        Self {
            bounds: SceneBounds::new(HIVE_HALF_EXTENT),
            beasts,
            capture_cooldown: 0.0,
            captures_seen: 0,
            layout_seed: seed,
        }
    }

    /// Play-area bounds for the player integrator.
    pub fn bounds(&self) -> SceneBounds {
        self.bounds
    }

    /// All beasts, for the render layer to read positions/phases.
    pub fn beasts(&self) -> &[BeastController] {
        &self.beasts
    }

    /// How many captures this scene has seen.
    pub fn captures_seen(&self) -> u32 {
        self.captures_seen
    }

    /// Step every beast against the player position snapshot.
    ///
    /// The snapshot is taken after the player integrator has run this tick,
    /// so beasts never read a stale position. `encounter_active` freezes all
    /// beasts in place; the capture cooldown still ticks down so the window
    /// ends on schedule after the encounter resolves.
    pub fn update(
        &mut self,
        dt: f32,
        player_position: Vec3,
        encounter_active: bool,
    ) -> Option<HiveEvent> {
        if self.capture_cooldown > 0.0 {
            self.capture_cooldown = (self.capture_cooldown - dt).max(0.0);
        }

        let mut captured = false;
        for beast in &mut self.beasts {
            if beast.update(dt, player_position, encounter_active) {
                captured = true;
            }
        }

        // A capture during the cooldown (or while an encounter is already
        // running) still absorbs the beast, but starts nothing new
        if captured && !encounter_active && self.capture_cooldown <= 0.0 {
            self.capture_cooldown = CAPTURE_COOLDOWN;
            self.captures_seen += 1;
            let index = pick_index(
                self.layout_seed as f32,
                self.captures_seen as f32,
                ENCOUNTER_MESSAGES.len(),
            );
            return Some(HiveEvent::CaptureStarted {
                message: ENCOUNTER_MESSAGES[index],
            });
        }

        None
    }

    /// Generate the latex-tree positions for this scene's seed.
    ///
    /// Trees sit on a square grid with hash-jittered offsets; the area
    /// around the spawn clearing stays empty.
    pub fn tree_layout(&self) -> Vec<Vec3> {
        let seed = self.layout_seed as f32;
        let steps = (FOREST_EXTENT * 2.0 / TREE_SPACING) as i32;
        let mut positions = Vec::new();

        for gx in 0..=steps {
            for gz in 0..=steps {
                let base_x = -FOREST_EXTENT + gx as f32 * TREE_SPACING;
                let base_z = -FOREST_EXTENT + gz as f32 * TREE_SPACING;

                // Keep the center clear for the spawn
                if base_x.abs() < SPAWN_CLEARING && base_z.abs() < SPAWN_CLEARING {
                    continue;
                }

                let jitter_x = (hash_2d(base_x + seed, base_z) - 0.5) * TREE_JITTER;
                let jitter_z = (hash_2d(base_x, base_z + seed) - 0.5) * TREE_JITTER;
                positions.push(Vec3::new(base_x + jitter_x, 0.0, base_z + jitter_z));
            }
        }
        positions
    }
}
