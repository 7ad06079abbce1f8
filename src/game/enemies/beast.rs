//! White Latex Beast Controller
//!
//! A three-phase agent: it wanders near its spawn point, freezes into a
//! telegraphed ambush pause when the player enters the aggro radius, then
//! chases until the player escapes far enough. The ambush beat gives the
//! player a reaction window before the chase starts.
//!
//! The simulation is horizontal-plane only: `position.y` stays pinned to the
//! floor and all distances ignore the vertical axis. The idle bob seen
//! in-game is a render-only offset from [`BeastController::render_height`].

use glam::{Vec2, Vec3};

use crate::game::types::DirectionSeq;

// Movement speeds
/// Wander movement speed in meters per second
pub const WANDER_SPEED: f32 = 1.0;
/// Chase movement speed in meters per second
pub const CHASE_SPEED: f32 = 3.5;

// Detection radii
/// Player distance that triggers the ambush pause
pub const AGGRO_RADIUS: f32 = 8.0;
/// Player distance that triggers a capture
pub const CAPTURE_RADIUS: f32 = 1.2;
/// Distance the player must reach to end a chase
pub const ESCAPE_DISTANCE: f32 = 15.0;

// Behavior timing
/// Seconds between wander direction changes
pub const WANDER_CHANGE_INTERVAL: f32 = 2.0;
/// How far a beast can wander from its spawn point
pub const WANDER_RADIUS: f32 = 15.0;
/// Seconds the ambush pause lasts before the chase begins
pub const AMBUSH_DURATION: f32 = 1.5;

/// Pull speed back toward spawn when wandering beyond the wander radius
pub const SPAWN_RETURN_SPEED: f32 = 2.0;

static_assertions::const_assert!(CAPTURE_RADIUS < AGGRO_RADIUS);
static_assertions::const_assert!(AGGRO_RADIUS < ESCAPE_DISTANCE);
static_assertions::const_assert!(WANDER_SPEED < CHASE_SPEED);

/// Behavior phase of a beast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeastPhase {
    /// Roaming near the spawn point (initial phase).
    Wander,
    /// Stationary pause facing the player before the chase begins.
    Ambush,
    /// Moving straight toward the player.
    Chase,
}

/// Pure phase transition: `(phase, timer, distance) -> next phase`.
///
/// - Wander -> Ambush when the player is strictly inside the aggro radius
/// - Ambush -> Chase when the accumulated timer reaches the ambush duration
/// - Chase -> Wander when the player is strictly beyond the escape distance
pub fn phase_transition(phase: BeastPhase, phase_timer: f32, distance_to_player: f32) -> BeastPhase {
    match phase {
        BeastPhase::Wander if distance_to_player < AGGRO_RADIUS => BeastPhase::Ambush,
        BeastPhase::Ambush if phase_timer >= AMBUSH_DURATION => BeastPhase::Chase,
        BeastPhase::Chase if distance_to_player > ESCAPE_DISTANCE => BeastPhase::Wander,
        phase => phase,
    }
}

/// State-machine controller for one hostile beast.
///
/// The controller reads a snapshot of the player position each tick and
/// writes only its own state, so any number of beasts can update in any
/// order within a frame.
#[derive(Debug, Clone)]
pub struct BeastController {
    position: Vec3,
    spawn_position: Vec3,
    wander_direction: Vec2,
    phase: BeastPhase,
    /// Seconds elapsed in the current phase; doubles as the wander
    /// direction-change cadence and the ambush countdown.
    phase_timer: f32,
    /// Absorbing flag: once set, the controller never updates again.
    capture_triggered: bool,
    /// Yaw the beast faces, as `atan2(x, z)` of its heading.
    facing: f32,
    directions: DirectionSeq,
}

impl BeastController {
    /// Spawn a beast at the given position with a per-entity seed.
    ///
    /// The seed drives every wander-direction pick, so two beasts with the
    /// same seed and inputs behave identically.
    pub fn new(spawn_position: Vec3, seed: u32) -> Self {
        let mut directions = DirectionSeq::new(seed);
        let wander_direction = directions.next_direction();
        Self {
            position: spawn_position,
            spawn_position,
            wander_direction,
            phase: BeastPhase::Wander,
            phase_timer: 0.0,
            capture_triggered: false,
            facing: wander_direction.x.atan2(wander_direction.y),
            directions,
        }
    }

    /// Current world position (y pinned to the spawn floor).
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Immutable wander anchor.
    pub fn spawn_position(&self) -> Vec3 {
        self.spawn_position
    }

    /// Current behavior phase.
    pub fn phase(&self) -> BeastPhase {
        self.phase
    }

    /// Seconds spent in the current phase.
    pub fn phase_timer(&self) -> f32 {
        self.phase_timer
    }

    /// Current wander heading (unit vector).
    pub fn wander_direction(&self) -> Vec2 {
        self.wander_direction
    }

    /// Whether this beast has captured the player (absorbing).
    pub fn capture_triggered(&self) -> bool {
        self.capture_triggered
    }

    /// Yaw angle the beast is facing, in radians.
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Render-only idle bob offset; not part of the physical state.
    pub fn render_height(&self, elapsed: f32) -> f32 {
        (elapsed * 2.0).sin() * 0.05
    }

    /// Step the controller one tick against a player position snapshot.
    ///
    /// Returns `true` exactly once, on the tick the capture fires; the
    /// controller is absorbed from then on. A `disabled` tick (encounter or
    /// cutscene running) freezes phase, timer, and position without
    /// resetting anything, so resuming is seamless.
    pub fn update(&mut self, dt: f32, player_position: Vec3, disabled: bool) -> bool {
        if disabled || self.capture_triggered {
            return false;
        }

        let player = flat(player_position);
        let current = flat(self.position);
        let distance = current.distance(player);

        // Capture check runs before any phase logic, every tick
        if distance < CAPTURE_RADIUS {
            self.capture_triggered = true;
            return true;
        }

        self.phase_timer += dt;

        let next = phase_transition(self.phase, self.phase_timer, distance);
        if next != self.phase {
            self.enter_phase(next);
        }

        match self.phase {
            BeastPhase::Wander => self.wander_step(dt, current),
            BeastPhase::Ambush => self.face_toward(player - current),
            BeastPhase::Chase => self.chase_step(dt, current, player),
        }

        false
    }

    fn enter_phase(&mut self, phase: BeastPhase) {
        self.phase = phase;
        self.phase_timer = 0.0;
        if phase == BeastPhase::Wander {
            self.wander_direction = self.directions.next_direction();
        }
    }

    fn wander_step(&mut self, dt: f32, current: Vec2) {
        if self.phase_timer >= WANDER_CHANGE_INTERVAL {
            self.wander_direction = self.directions.next_direction();
            self.phase_timer = 0.0;
        }

        let mut next = current + self.wander_direction * WANDER_SPEED * dt;

        // Soft containment: blend movement back toward spawn instead of
        // clamping at the radius edge
        let spawn = flat(self.spawn_position);
        if next.distance(spawn) > WANDER_RADIUS {
            let to_spawn = (spawn - next).normalize_or_zero();
            next += to_spawn * SPAWN_RETURN_SPEED * dt;
        }

        self.set_flat_position(next);
        let heading = self.wander_direction;
        self.face_toward(heading);
    }

    fn chase_step(&mut self, dt: f32, current: Vec2, player: Vec2) {
        let direction = (player - current).normalize_or_zero();
        if direction == Vec2::ZERO {
            // Player exactly at the beast's position: no movement this tick
            return;
        }
        let next = current + direction * CHASE_SPEED * dt;
        self.set_flat_position(next);
        self.face_toward(direction);
    }

    fn face_toward(&mut self, heading: Vec2) {
        if heading.length_squared() > 0.0001 {
            self.facing = heading.x.atan2(heading.y);
        }
    }

    fn set_flat_position(&mut self, flat_pos: Vec2) {
        self.position = Vec3::new(flat_pos.x, self.spawn_position.y, flat_pos.y);
    }
}

/// Project a world position onto the horizontal plane.
fn flat(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}
