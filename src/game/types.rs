//! Shared Game Utilities
//!
//! Seeded hash noise and direction sequences used for gameplay-affecting
//! "randomness". Everything here is a pure function of its seed, so wander
//! behavior, layout jitter, and template picks replay identically for the
//! same seed.

use glam::Vec2;

/// Golden angle in radians; successive multiples never repeat a direction.
pub const GOLDEN_ANGLE: f32 = 2.399963;

/// Hash a 2D coordinate to a pseudo-random value in [0, 1).
pub fn hash_2d(x: f32, y: f32) -> f32 {
    let n = (x * 127.1 + y * 311.7).sin() * 43758.5453;
    n.fract().abs()
}

/// Pick an index into a table of `len` entries from a seed/salt pair.
///
/// Returns 0 for an empty table so callers can index a known-non-empty
/// table without a separate guard.
pub fn pick_index(seed: f32, salt: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (hash_2d(seed, salt) * len as f32) as usize % len
}

/// Deterministic sequence of horizontal unit directions.
///
/// Each entity owns one sequence seeded at spawn; stepping it walks the
/// golden-angle spiral, which scatters directions evenly without ever
/// repeating. Used for wander-direction picks so entity behavior is
/// reproducible in tests and replays.
#[derive(Debug, Clone)]
pub struct DirectionSeq {
    counter: f32,
}

impl DirectionSeq {
    /// Create a sequence for the given entity seed.
    pub fn new(seed: u32) -> Self {
        Self {
            counter: seed as f32,
        }
    }

    /// Produce the next unit direction in the horizontal plane.
    ///
    /// Components follow the (x, z) convention: the facing angle of the
    /// returned direction is `atan2(x, z)`.
    pub fn next_direction(&mut self) -> Vec2 {
        self.counter += 1.0;
        let angle = self.counter * GOLDEN_ANGLE;
        Vec2::new(angle.sin(), angle.cos())
    }
}
