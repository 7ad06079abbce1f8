//! World Module
//!
//! Contains world-space configuration shared by every scene: the rectangular
//! play bounds and the floor plane.

pub mod bounds;

pub use bounds::SceneBounds;
