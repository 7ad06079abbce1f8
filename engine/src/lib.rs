//! Cozy Library Engine
//!
//! Headless simulation core for a slice-of-life exploration game. The engine
//! owns player locomotion, camera orientation, and input aggregation; the
//! game layer on top adds scenes, hostile-entity AI, and progression state.
//! Rendering, UI panels, audio, and backend sync are external: callers read
//! positions/phases each frame and feed input events in.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic input handling (keyboard, virtual joystick, look deltas)
//! - [`player`] - Player locomotion integrator (gravity, jump, ground collision)
//! - [`camera`] - First-person look camera with pitch clamping
//! - [`world`] - Scene bounds and world-space clamping
//!
//! # Example
//!
//! ```ignore
//! use cozy_library_engine::game::session::GameSession;
//!
//! let mut session = GameSession::new();
//!
//! // Each frame: forward raw input, then step the simulation.
//! session.input.handle_key(KeyCode::W, true);
//! session.input.accumulate_look(4.0, 0.0);
//! let events = session.update(1.0 / 60.0);
//! for event in events {
//!     // Start encounter overlays, switch scene visuals, etc.
//! }
//! ```

pub mod camera;
pub mod input;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types at crate level for convenience
pub use camera::LookCamera;
pub use input::{InputCollector, InputFrame, JumpRequest, KeyCode, MovementKeys, VirtualJoystick};
pub use player::{PlayerIntegrator, PlayerState};
pub use world::SceneBounds;
