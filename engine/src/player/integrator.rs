//! Player Locomotion Integrator
//!
//! Converts one [`InputFrame`] plus a tick duration into an updated player
//! state: horizontal movement, bounds clamping, gravity, jump impulse, and
//! ground collision. A pure per-tick transform with no failure modes - all
//! inputs arrive pre-clamped from the input layer.
//!
//! # Physics Model
//!
//! - Walk speed: 2.0 m/s
//! - Gravity: -15.0 m/s^2
//! - Jump impulse: 6.0 m/s
//!
//! # Usage
//!
//! ```rust,ignore
//! use cozy_library_engine::player::{PlayerIntegrator, PlayerState};
//! use cozy_library_engine::world::SceneBounds;
//!
//! let integrator = PlayerIntegrator::new(SceneBounds::new(8.0));
//! let mut player = PlayerState::new();
//!
//! // Each frame:
//! integrator.update(&mut player, &frame, delta_time);
//! ```

use glam::Vec3;

use crate::input::InputFrame;
use crate::world::SceneBounds;

/// Horizontal movement speed in meters per second
pub const PLAYER_SPEED: f32 = 2.0;

/// Gravity acceleration in meters per second squared (negative = downward)
pub const GRAVITY: f32 = -15.0;

/// Upward velocity applied when a jump fires, in meters per second
pub const JUMP_IMPULSE: f32 = 6.0;

static_assertions::const_assert!(GRAVITY < 0.0);
static_assertions::const_assert!(JUMP_IMPULSE > 0.0);

/// Kinematic state of the player, owned by the scene driving the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// World-space position (feet).
    pub position: Vec3,
    /// Current vertical velocity in m/s (positive = upward).
    pub vertical_velocity: f32,
    /// Whether the player is standing on the floor.
    pub is_grounded: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            vertical_velocity: 0.0,
            is_grounded: true,
        }
    }
}

impl PlayerState {
    /// Create a grounded player at the scene origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grounded player at a spawn position.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Per-tick locomotion transform for one scene's bounds.
///
/// Holds no mutable state of its own; the scene owns the [`PlayerState`]
/// and passes it in each tick.
#[derive(Debug, Clone, Copy)]
pub struct PlayerIntegrator {
    bounds: SceneBounds,
}

impl PlayerIntegrator {
    /// Create an integrator for the given scene bounds.
    pub fn new(bounds: SceneBounds) -> Self {
        Self { bounds }
    }

    /// Get the scene bounds this integrator clamps to.
    pub fn bounds(&self) -> SceneBounds {
        self.bounds
    }

    /// Integrate one tick.
    ///
    /// Order per tick:
    /// 1. Horizontal movement from the frame's (pre-clamped) movement vector
    /// 2. Unconditional bounds clamp
    /// 3. Jump impulse if requested while grounded
    /// 4. Gravity, then vertical position
    /// 5. Ground collision snap
    ///
    /// After this returns, `position.y >= floor` and `is_grounded` holds
    /// exactly when `position.y == floor`.
    pub fn update(&self, player: &mut PlayerState, frame: &InputFrame, dt: f32) {
        // Clamp delta time to prevent physics explosions on frame hitches
        let dt = dt.clamp(0.0001, 0.1);

        // Horizontal movement
        player.position.x += frame.movement.x * PLAYER_SPEED * dt;
        player.position.z += frame.movement.y * PLAYER_SPEED * dt;

        // Constrain to scene bounds
        player.position = self.bounds.clamp_to_bounds(player.position);

        // Jump: the request was already consumed one-shot by the input
        // layer; it only takes effect from the ground
        if frame.jump_requested && player.is_grounded {
            player.vertical_velocity = JUMP_IMPULSE;
            player.is_grounded = false;
        }

        // Gravity and vertical position
        player.vertical_velocity += GRAVITY * dt;
        player.position.y += player.vertical_velocity * dt;

        // Ground collision
        let floor = self.bounds.floor_height;
        if player.position.y <= floor {
            player.position.y = floor;
            player.vertical_velocity = 0.0;
            player.is_grounded = true;
        }
    }
}
