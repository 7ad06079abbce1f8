//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard, virtual joystick,
//! and look deltas. This module is decoupled from any specific windowing
//! system or touch overlay to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use cozy_library_engine::input::{InputCollector, KeyCode};
//!
//! let mut input = InputCollector::new();
//!
//! // Forward events from the host platform
//! input.handle_key(KeyCode::W, true);
//! input.set_joystick(0.5, 0.0);
//! input.accumulate_look(12.0, -3.0);
//!
//! // Once per frame, sample a normalized input frame
//! let frame = input.sample();
//! assert!(frame.movement.length() <= 1.0);
//! ```

pub mod frame;
pub mod joystick;
pub mod keyboard;

// Re-export commonly used types at module level
pub use frame::{InputCollector, InputFrame, JumpRequest, LookInput};
pub use joystick::VirtualJoystick;
pub use keyboard::{KeyCode, MovementKeys};
