//! Hide and Seek Mini-Game
//!
//! Puro hides in one of five spots; the player has 30 seconds to find him.
//! Finding him quickly earns more trust, wrong guesses cost a little, and
//! letting the clock run out still earns a consolation reward (Puro enjoys
//! winning).

use crate::game::state::GameProgress;
use crate::game::types::pick_index;

/// Round length in seconds.
pub const ROUND_SECONDS: f32 = 30.0;

/// Trust lost per wrong guess.
pub const WRONG_GUESS_TRUST: i32 = -1;

/// Trust gained when time runs out without a find.
pub const TIMEOUT_TRUST: i32 = 3;

/// A place Puro can hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidingSpot {
    /// Stable id.
    pub id: u32,
    /// Spot description shown to the player.
    pub name: &'static str,
}

/// All hiding spots.
pub static HIDING_SPOTS: &[HidingSpot] = &[
    HidingSpot { id: 1, name: "Behind the tall bookshelf" },
    HidingSpot { id: 2, name: "Under the reading table" },
    HidingSpot { id: 3, name: "In the corner near the vent" },
    HidingSpot { id: 4, name: "Behind the bonsai tree" },
    HidingSpot { id: 5, name: "In the shadowy alcove" },
];

/// Result of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Found him; `trust_gained` depends on remaining time.
    Found { trust_gained: i32 },
    /// Not that spot.
    Wrong,
    /// The round already ended (found or timed out).
    RoundOver,
}

/// Live state of one hide-and-seek round.
#[derive(Debug, Clone)]
pub struct HideAndSeek {
    time_left: f32,
    found: bool,
    timed_out: bool,
    attempts: u32,
    hiding_spot: HidingSpot,
}

impl HideAndSeek {
    /// Start a round; the seed picks the hiding spot.
    pub fn new(seed: u32) -> Self {
        let index = pick_index(seed as f32, 4.7, HIDING_SPOTS.len());
        Self {
            time_left: ROUND_SECONDS,
            found: false,
            timed_out: false,
            attempts: 0,
            hiding_spot: HIDING_SPOTS[index],
        }
    }

    /// Seconds remaining on the clock.
    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// Guesses made so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the round has ended, either way.
    pub fn is_over(&self) -> bool {
        self.found || self.timed_out
    }

    /// The spot Puro chose; for the reveal after the round ends.
    pub fn hiding_spot(&self) -> HidingSpot {
        self.hiding_spot
    }

    /// Advance the clock. Returns `true` on the tick the round times out
    /// (applying the consolation trust exactly once).
    pub fn update(&mut self, dt: f32, progress: &mut GameProgress) -> bool {
        if self.is_over() {
            return false;
        }
        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            self.timed_out = true;
            progress.adjust_trust(TIMEOUT_TRUST);
            return true;
        }
        false
    }

    /// Guess a hiding spot.
    ///
    /// Finds reward 10/7/5 trust for more than 20/10/0 seconds remaining.
    pub fn guess(&mut self, progress: &mut GameProgress, spot_id: u32) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::RoundOver;
        }
        self.attempts += 1;

        if spot_id == self.hiding_spot.id {
            self.found = true;
            let trust_gained = if self.time_left > 20.0 {
                10
            } else if self.time_left > 10.0 {
                7
            } else {
                5
            };
            progress.adjust_trust(trust_gained);
            GuessOutcome::Found { trust_gained }
        } else {
            progress.adjust_trust(WRONG_GUESS_TRUST);
            GuessOutcome::Wrong
        }
    }
}
