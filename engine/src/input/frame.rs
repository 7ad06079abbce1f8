//! Per-Frame Input Assembly
//!
//! Aggregates keyboard edge-state, virtual joystick deflection, accumulated
//! look deltas, and the one-shot jump request into a single [`InputFrame`]
//! sampled once per simulation tick.
//!
//! The combined horizontal movement vector is clamped to magnitude <= 1
//! here, so the player integrator never has to re-validate it. Keyboard and
//! joystick are summed with no priority between the sources.

use glam::Vec2;

use crate::input::joystick::VirtualJoystick;
use crate::input::keyboard::{KeyCode, MovementKeys};

/// One-shot jump flag.
///
/// Set by input handling (`request`), cleared by consumption (`take`) in a
/// single operation, so a jump can never be applied twice for one request
/// even if the consumer runs more than once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpRequest {
    requested: bool,
}

impl JumpRequest {
    /// Create an idle (unrequested) jump flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the jump. Repeated requests before consumption collapse into one.
    pub fn request(&mut self) {
        self.requested = true;
    }

    /// Consume the request: returns whether a jump was pending and clears it.
    pub fn take(&mut self) -> bool {
        let was_requested = self.requested;
        self.requested = false;
        was_requested
    }

    /// Peek at the flag without consuming it.
    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

/// Accumulated look-rotation delta, consumed atomically once per frame.
///
/// Raw deltas (pointer motion, touch drag) accumulate between frames and are
/// drained by `consume`, so multiple events within one frame are summed
/// rather than dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookInput {
    delta_x: f32,
    delta_y: f32,
}

impl LookInput {
    /// Create a look tracker with zero accumulated delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a raw look delta from the host platform.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume(&mut self) -> Vec2 {
        let delta = Vec2::new(self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }
}

/// Normalized input for one simulation tick.
///
/// Produced by [`InputCollector::sample`] and consumed once by the player
/// integrator. `movement` is guaranteed to have magnitude <= 1.
#[derive(Debug, Clone, Copy)]
pub struct InputFrame {
    /// Combined horizontal movement: `x` lateral (positive = right),
    /// `y` along world Z (positive = backward).
    pub movement: Vec2,
    /// Instantaneous look-rotation delta for this tick.
    pub look: Vec2,
    /// Whether a jump was requested since the last sample (one-shot).
    pub jump_requested: bool,
}

impl InputFrame {
    /// An all-zero frame (no movement, no look, no jump).
    pub fn idle() -> Self {
        Self {
            movement: Vec2::ZERO,
            look: Vec2::ZERO,
            jump_requested: false,
        }
    }
}

/// Aggregates all input sources and produces one [`InputFrame`] per tick.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    /// Held movement key state.
    pub keys: MovementKeys,
    /// Virtual joystick deflection (touch overlay).
    pub joystick: VirtualJoystick,
    look: LookInput,
    jump: JumpRequest,
    /// Previous jump-key state, for edge detection on held Space.
    jump_key_held: bool,
}

impl InputCollector {
    /// Create a collector with all sources idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press/release event.
    ///
    /// Movement keys update edge state; the jump key arms the one-shot
    /// request on its rising edge only, so holding Space does not re-trigger.
    /// Returns `true` if the key was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if self.keys.handle_key(key, pressed) {
            return true;
        }
        if key == KeyCode::Space {
            if pressed && !self.jump_key_held {
                self.jump.request();
            }
            self.jump_key_held = pressed;
            return true;
        }
        false
    }

    /// Update the virtual joystick deflection.
    pub fn set_joystick(&mut self, x: f32, y: f32) {
        self.joystick.set(x, y);
    }

    /// Center the virtual joystick (touch released).
    pub fn release_joystick(&mut self) {
        self.joystick.release();
    }

    /// Accumulate a raw look delta.
    pub fn accumulate_look(&mut self, dx: f32, dy: f32) {
        self.look.accumulate(dx, dy);
    }

    /// Arm the jump request directly (touch jump button).
    pub fn request_jump(&mut self) {
        self.jump.request();
    }

    /// Reset all sources to idle (scene change, focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sample one input frame.
    ///
    /// Keyboard axes and joystick offset are vector-summed, then the result
    /// is renormalized only if the combined magnitude exceeds 1 - neither
    /// source takes priority. Look deltas and the jump request are drained.
    pub fn sample(&mut self) -> InputFrame {
        let mut movement = self.keys.axes() + self.joystick.offset();

        let magnitude = movement.length();
        if magnitude > 1.0 {
            movement /= magnitude;
        }

        InputFrame {
            movement,
            look: self.look.consume(),
            jump_requested: self.jump.take(),
        }
    }
}
