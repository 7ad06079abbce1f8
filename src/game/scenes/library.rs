//! Library Scene
//!
//! A small interior room: the companion stands near the bookshelves and
//! walking up to him triggers the teleport to the hive. The trigger is a
//! one-shot proximity check with hysteresis so brushing the edge of the
//! radius cannot re-fire it every frame.

use glam::Vec3;

use crate::world::SceneBounds;

/// Half-extent of the library play area.
pub const LIBRARY_HALF_EXTENT: f32 = 8.0;

/// Where the companion stands, in world space.
pub const COMPANION_POSITION: Vec3 = Vec3::new(2.0, 0.0, -3.0);

/// Player distance to the companion that fires the teleport trigger.
pub const PROXIMITY_RADIUS: f32 = 1.5;

/// Extra distance beyond the radius the player must reach before the
/// trigger re-arms.
pub const PROXIMITY_HYSTERESIS: f32 = 0.3;

/// Seconds after a trigger during which it cannot fire again.
pub const PROXIMITY_COOLDOWN: f32 = 2.0;

/// Events the library scene can emit in a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryEvent {
    /// The player reached the companion; switch to the hive scene.
    TeleportToHive,
}

/// Scene state for the library.
#[derive(Debug, Clone)]
pub struct LibraryScene {
    bounds: SceneBounds,
    companion_position: Vec3,
    was_in_proximity: bool,
    cooldown_remaining: f32,
    has_teleported: bool,
}

impl Default for LibraryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryScene {
    /// Create the library with the companion at his usual spot.
    pub fn new() -> Self {
        Self {
            bounds: SceneBounds::new(LIBRARY_HALF_EXTENT),
            companion_position: COMPANION_POSITION,
            was_in_proximity: false,
            cooldown_remaining: 0.0,
            has_teleported: false,
        }
    }

    /// Play-area bounds for the player integrator.
    pub fn bounds(&self) -> SceneBounds {
        self.bounds
    }

    /// Where the companion stands.
    pub fn companion_position(&self) -> Vec3 {
        self.companion_position
    }

    /// Render-only idle bob for the companion sprite.
    pub fn companion_bob(&self, elapsed: f32) -> f32 {
        (elapsed * 0.5).sin() * 0.05
    }

    /// Step the proximity trigger against the player's position.
    ///
    /// Fires [`LibraryEvent::TeleportToHive`] at most once per scene visit,
    /// on the tick the player first enters the proximity radius (subject to
    /// the cooldown). The trigger re-arms only after the player moves past
    /// the hysteresis margin.
    pub fn update(&mut self, dt: f32, player_position: Vec3) -> Option<LibraryEvent> {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        }

        let distance = player_position.distance(self.companion_position);
        let in_proximity = distance < PROXIMITY_RADIUS;
        let outside_hysteresis = distance > PROXIMITY_RADIUS + PROXIMITY_HYSTERESIS;

        let mut event = None;
        if in_proximity && !self.was_in_proximity {
            if !self.has_teleported && self.cooldown_remaining <= 0.0 {
                self.has_teleported = true;
                self.cooldown_remaining = PROXIMITY_COOLDOWN;
                event = Some(LibraryEvent::TeleportToHive);
            }
            self.was_in_proximity = true;
        }

        if outside_hysteresis {
            self.was_in_proximity = false;
        }

        event
    }

    /// Re-arm the scene when the player returns from the hive.
    pub fn reset_trigger(&mut self) {
        self.was_in_proximity = false;
        self.has_teleported = false;
        self.cooldown_remaining = 0.0;
    }

    /// Resolve a customization slot name to a world position.
    ///
    /// Unknown slots fall back to the room center, matching how placed
    /// items were always displayed somewhere rather than dropped.
    pub fn slot_position(location: &str) -> Vec3 {
        match location {
            "shelf-1" => Vec3::new(-7.0, 1.0, -7.0),
            "shelf-2" => Vec3::new(-3.0, 1.0, -7.0),
            "corner-left" => Vec3::new(-8.0, 0.5, -8.0),
            "corner-right" => Vec3::new(8.0, 0.5, 8.0),
            _ => Vec3::new(0.0, 0.5, 0.0),
        }
    }
}
