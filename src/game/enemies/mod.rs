//! Hostile Entities
//!
//! The hive's white latex beasts: state-machine-driven agents that wander
//! near their spawn, pause in ambush when the player comes close, then give
//! chase. Capturing the player hands control to the encounter flow.

pub mod beast;

pub use beast::{
    AGGRO_RADIUS, AMBUSH_DURATION, BeastController, BeastPhase, CAPTURE_RADIUS, CHASE_SPEED,
    ESCAPE_DISTANCE, WANDER_CHANGE_INTERVAL, WANDER_RADIUS, WANDER_SPEED,
};
