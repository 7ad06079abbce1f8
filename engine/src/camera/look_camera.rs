//! First-Person Look Camera
//!
//! Accumulates look deltas into yaw/pitch and follows the player at a fixed
//! eye height. The camera position is derived from the player every frame,
//! never simulated independently.
//!
//! Key behavior:
//! - Look deltas scale by `dt` and an adjustable aim sensitivity
//! - Pitch clamped to +/-60 degrees to prevent over-rotation
//! - Yaw unbounded (wraps naturally)

use glam::{Vec2, Vec3};

/// Pitch limit in radians: +/-60 degrees.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_3;

/// Camera height above the player's feet, in meters.
pub const EYE_HEIGHT: f32 = 1.6;

/// First-person camera following the player.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = LookCamera::new();
///
/// // Each frame, after the player integrates:
/// camera.apply_look(frame.look, dt);
/// camera.follow(player.position);
/// ```
#[derive(Clone, Debug)]
pub struct LookCamera {
    /// Camera position in world space (player position + eye height).
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around.
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to +/-[`PITCH_LIMIT`].
    pub pitch: f32,
    /// Aim sensitivity multiplier applied to look deltas (default: 1.0).
    pub aim_sensitivity: f32,
}

impl Default for LookCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, EYE_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            aim_sensitivity: 1.0,
        }
    }
}

impl LookCamera {
    /// Create a camera with default orientation and sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with a custom aim sensitivity.
    pub fn with_sensitivity(aim_sensitivity: f32) -> Self {
        Self {
            aim_sensitivity,
            ..Default::default()
        }
    }

    /// Apply a look delta for this frame.
    ///
    /// Yaw accumulates `look.x * dt * aim_sensitivity`; pitch accumulates
    /// `look.y * dt * aim_sensitivity` and is clamped to +/-60 degrees.
    pub fn apply_look(&mut self, look: Vec2, dt: f32) {
        self.yaw += look.x * dt * self.aim_sensitivity;
        self.pitch += look.y * dt * self.aim_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Place the camera at the player's eye position.
    pub fn follow(&mut self, player_position: Vec3) {
        self.position = player_position + Vec3::new(0.0, EYE_HEIGHT, 0.0);
    }

    /// Get the camera's forward direction vector.
    ///
    /// When yaw=0 and pitch=0, the camera looks toward -Z.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Reset camera orientation to default (looking toward -Z).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
