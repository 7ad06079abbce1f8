//! Camera Module
//!
//! First-person look camera derived from the player each frame.
//! This module is window-system agnostic - it only deals with camera state
//! and math.

pub mod look_camera;

pub use look_camera::{EYE_HEIGHT, LookCamera, PITCH_LIMIT};
