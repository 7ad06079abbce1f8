//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys and other input.
//! Decoupled from any windowing system via generic key codes.

use glam::Vec2;

/// Generic key codes for game input, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to browser or
/// winit key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys (alternate movement bindings)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,
    Enter,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// This struct maintains which movement keys are currently pressed,
/// allowing smooth continuous movement when keys are held down. WASD and
/// the arrow keys are equivalent bindings for the same four directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / ArrowUp - move forward (toward -Z)
    pub forward: bool,
    /// S / ArrowDown - move backward (toward +Z)
    pub backward: bool,
    /// A / ArrowLeft - strafe left
    pub left: bool,
    /// D / ArrowRight - strafe right
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the lateral movement direction (-1, 0, or 1). Positive = right.
    pub fn x_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    ///
    /// Positive = backward (+Z), matching the world convention where the
    /// camera starts looking toward -Z.
    pub fn z_axis(&self) -> i32 {
        (self.backward as i32) - (self.forward as i32)
    }

    /// Both movement axes as a vector. Components are -1, 0, or 1; the
    /// diagonal case is *not* normalized here - the input collector clamps
    /// the combined keyboard + joystick vector in one place.
    pub fn axes(&self) -> Vec2 {
        Vec2::new(self.x_axis() as f32, self.z_axis() as f32)
    }
}
