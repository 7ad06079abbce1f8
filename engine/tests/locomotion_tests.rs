//! Locomotion Tests - Bounds, Jump Arc, and Input Clamping
//!
//! Integration tests for the player locomotion integrator together with the
//! input collector and look camera.

use cozy_library_engine::camera::{EYE_HEIGHT, LookCamera, PITCH_LIMIT};
use cozy_library_engine::input::{InputCollector, InputFrame, KeyCode};
use cozy_library_engine::player::{JUMP_IMPULSE, PlayerIntegrator, PlayerState};
use cozy_library_engine::world::SceneBounds;
use glam::Vec2;

const DT: f32 = 0.016;

fn frame(movement: Vec2, jump: bool) -> InputFrame {
    InputFrame {
        movement,
        look: Vec2::ZERO,
        jump_requested: jump,
    }
}

// ============================================================================
// Bounds Invariant
// ============================================================================

#[test]
fn test_bounds_hold_for_any_unit_movement() {
    // Sweep a fan of directions and a range of tick durations; the clamp
    // invariant must hold every single tick
    let integrator = PlayerIntegrator::new(SceneBounds::new(8.0));
    for direction_index in 0..16 {
        let angle = direction_index as f32 * std::f32::consts::TAU / 16.0;
        let movement = Vec2::new(angle.cos(), angle.sin());
        let mut player = PlayerState::new();

        for tick in 0..5000 {
            let dt = 0.001 + (tick % 7) as f32 * 0.02;
            integrator.update(&mut player, &frame(movement, false), dt);
            assert!(
                player.position.x.abs() <= 8.0 && player.position.z.abs() <= 8.0,
                "escaped bounds at {:?} moving {:?}",
                player.position,
                movement
            );
        }
    }
}

#[test]
fn test_hive_bounds_are_wider() {
    let integrator = PlayerIntegrator::new(SceneBounds::new(25.0));
    let mut player = PlayerState::new();
    for _ in 0..20_000 {
        integrator.update(&mut player, &frame(Vec2::new(1.0, 0.0), false), 0.1);
    }
    assert!((player.position.x - 25.0).abs() < 0.0001);
}

// ============================================================================
// Jump Arc
// ============================================================================

#[test]
fn test_jump_round_trip_restores_ground_state() {
    let integrator = PlayerIntegrator::new(SceneBounds::new(8.0));
    let mut player = PlayerState::new();

    integrator.update(&mut player, &frame(Vec2::ZERO, true), DT);
    assert!(!player.is_grounded);

    let mut ticks = 0;
    while !player.is_grounded {
        integrator.update(&mut player, &frame(Vec2::ZERO, false), DT);
        ticks += 1;
        assert!(ticks < 1000, "never landed");
    }

    assert_eq!(player.vertical_velocity, 0.0);
    assert_eq!(player.position.y, 0.0);

    // Flight time ~ 2 * v0 / g = 0.8s
    let airborne = ticks as f32 * DT;
    assert!(
        (airborne - 0.8).abs() < 0.1,
        "airborne {:.2}s, expected ~0.8s",
        airborne
    );
}

#[test]
fn test_jump_impulse_applied_exactly_once_per_request() {
    let integrator = PlayerIntegrator::new(SceneBounds::new(8.0));
    let mut input = InputCollector::new();
    let mut player = PlayerState::new();

    input.request_jump();

    // First sampled frame carries the request
    let first = input.sample();
    assert!(first.jump_requested);
    integrator.update(&mut player, &first, DT);
    let velocity_after_jump = player.vertical_velocity;
    assert!(velocity_after_jump > 0.0);
    assert!(velocity_after_jump <= JUMP_IMPULSE);

    // Sampling again without a new request yields no second impulse
    let second = input.sample();
    assert!(!second.jump_requested);
    integrator.update(&mut player, &second, DT);
    assert!(player.vertical_velocity < velocity_after_jump);
}

#[test]
fn test_landing_then_new_request_jumps_again() {
    let integrator = PlayerIntegrator::new(SceneBounds::new(8.0));
    let mut input = InputCollector::new();
    let mut player = PlayerState::new();

    input.handle_key(KeyCode::Space, true);
    integrator.update(&mut player, &input.sample(), DT);
    while !player.is_grounded {
        integrator.update(&mut player, &input.sample(), DT);
    }

    // Key release and re-press arms a fresh one-shot
    input.handle_key(KeyCode::Space, false);
    input.handle_key(KeyCode::Space, true);
    integrator.update(&mut player, &input.sample(), DT);
    assert!(!player.is_grounded);
}

// ============================================================================
// Input Clamping
// ============================================================================

#[test]
fn test_combined_sources_never_exceed_unit_magnitude() {
    let mut input = InputCollector::new();
    input.handle_key(KeyCode::W, true);
    input.handle_key(KeyCode::D, true);

    for i in 0..50 {
        let x = (i as f32 * 0.13).sin();
        let y = (i as f32 * 0.29).cos();
        input.set_joystick(x, y);
        let frame = input.sample();
        assert!(
            frame.movement.length() <= 1.0 + 0.0001,
            "movement magnitude {} > 1",
            frame.movement.length()
        );
    }
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn test_camera_tracks_player_at_eye_height() {
    let integrator = PlayerIntegrator::new(SceneBounds::new(8.0));
    let mut player = PlayerState::new();
    let mut camera = LookCamera::new();

    for _ in 0..60 {
        integrator.update(&mut player, &frame(Vec2::new(0.6, -0.4), false), DT);
        camera.follow(player.position);
        assert_eq!(camera.position.x, player.position.x);
        assert_eq!(camera.position.z, player.position.z);
        assert!((camera.position.y - player.position.y - EYE_HEIGHT).abs() < 0.0001);
    }
}

#[test]
fn test_pitch_clamps_at_sixty_degrees_yaw_does_not() {
    let mut camera = LookCamera::new();
    for _ in 0..1000 {
        camera.apply_look(Vec2::new(5.0, 5.0), 0.1);
    }
    assert!((camera.pitch - PITCH_LIMIT).abs() < 0.0001);
    assert!(camera.yaw > std::f32::consts::TAU);
}
