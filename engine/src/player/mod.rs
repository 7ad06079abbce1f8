//! Player Module
//!
//! Provides the player locomotion integrator.
//!
//! # Components
//!
//! - [`PlayerState`] - Position, vertical velocity, and grounded flag, owned by the scene
//! - [`PlayerIntegrator`] - Per-tick transform applying movement, gravity, jump, and bounds

pub mod integrator;

pub use integrator::{GRAVITY, JUMP_IMPULSE, PLAYER_SPEED, PlayerIntegrator, PlayerState};
