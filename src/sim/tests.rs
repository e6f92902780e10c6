use bevy::math::Vec2;

use super::*;
use crate::common::tunables::Tunables;

const EPS: f32 = 1e-3;

fn assert_vec_near(actual: Vec2, expected: Vec2) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {expected:?}, got {actual:?}"
    );
}

fn aim_at_rim(angle_deg: f32) -> JoystickReading {
    JoystickReading { angle_deg, force: 20.0, radius: 20.0 }
}

// --------------------------------------------------------------------------------------
// Cooldown
// --------------------------------------------------------------------------------------

#[test]
fn cooldown_ticks_down_without_clamping() {
    let mut cd = Cooldown::new(4.0);
    cd.tick(16.0);
    assert_eq!(cd.remaining_ms(), -12.0);
    assert!(cd.is_ready());
}

#[test]
fn cooldown_stops_ticking_once_ready() {
    let mut cd = Cooldown::new(-12.0);
    cd.tick(16.0);
    assert_eq!(cd.remaining_ms(), -12.0);

    let mut zero = Cooldown::default();
    zero.tick(16.0);
    assert_eq!(zero.remaining_ms(), 0.0);
}

#[test]
fn cooldown_ready_iff_not_positive() {
    assert!(Cooldown::new(0.0).is_ready());
    assert!(Cooldown::new(-0.5).is_ready());
    assert!(!Cooldown::new(0.01).is_ready());
}

#[test]
fn cooldown_reset_sets_interval() {
    let mut cd = Cooldown::new(-30.0);
    cd.reset(100.0);
    assert_eq!(cd.remaining_ms(), 100.0);
    assert!(!cd.is_ready());
}

// --------------------------------------------------------------------------------------
// Bullet
// --------------------------------------------------------------------------------------

#[test]
fn spawn_offsets_along_rotation() {
    let t = Tunables::default();
    let b = bullet::spawn(Vec2::new(10.0, 20.0), 90.0, &t);

    assert_vec_near(b.position, Vec2::new(10.0, 70.0));
    assert_eq!(b.rotation_deg, 90.0);
    assert_vec_near(b.velocity, Vec2::new(0.0, 800.0));
    assert_eq!(b.age.age_ms(), 0.0);
    assert!(b.age.is_alive());
}

#[test]
fn spawn_velocity_has_bullet_speed_at_any_angle() {
    let t = Tunables::default();
    for angle in [-135.0_f32, -30.0, 0.0, 45.0, 179.0] {
        let b = bullet::spawn(Vec2::ZERO, angle, &t);
        assert!((b.velocity.length() - t.bullet_speed).abs() < EPS);
        assert!((b.position.length() - t.muzzle_offset).abs() < EPS);
        assert!(b.velocity.normalize().abs_diff_eq(heading(angle), EPS));
    }
}

#[test]
fn bullet_survives_up_to_ttl() {
    let mut b = bullet::spawn(Vec2::ZERO, 0.0, &Tunables::default());
    assert!(!b.advance(1000.0, 1500.0));
    assert!(!b.advance(500.0, 1500.0));
    assert_eq!(b.age.age_ms(), 1500.0);
    assert!(b.age.is_alive());
}

#[test]
fn bullet_expires_exactly_once() {
    let mut b = bullet::spawn(Vec2::ZERO, 0.0, &Tunables::default());

    let mut expirations = 0;
    for _ in 0..1501 {
        if b.advance(1.0, 1500.0) {
            expirations += 1;
        }
    }
    assert_eq!(expirations, 1);
    assert!(!b.age.is_alive());

    // Terminal: further frames neither age it nor report expiry again.
    let age = b.age.age_ms();
    assert!(!b.advance(16.0, 1500.0));
    assert_eq!(b.age.age_ms(), age);
}

// --------------------------------------------------------------------------------------
// Joystick reading
// --------------------------------------------------------------------------------------

#[test]
fn reading_from_offset_is_polar() {
    let r = JoystickReading::from_offset(Vec2::new(0.0, 30.0), 40.0, 0.0);
    assert!((r.angle_deg - 90.0).abs() < EPS);
    assert!((r.force - 30.0).abs() < EPS);
    assert_eq!(r.radius, 40.0);

    let r = JoystickReading::from_offset(Vec2::new(-3.0, -3.0), 40.0, 0.0);
    assert!((r.angle_deg + 135.0).abs() < EPS);
}

#[test]
fn reading_force_is_not_clamped_at_radius() {
    let r = JoystickReading::from_offset(Vec2::new(100.0, 0.0), 20.0, 0.0);
    assert_eq!(r.force, 100.0);
    assert!(r.at_rim());
}

#[test]
fn reading_below_force_min_is_idle() {
    let r = JoystickReading::from_offset(Vec2::new(2.0, 0.0), 40.0, 5.0);
    assert_eq!(r.force, 0.0);
    assert!(!r.is_active());
}

// --------------------------------------------------------------------------------------
// Movement
// --------------------------------------------------------------------------------------

#[test]
fn speed_multiplier_ramps_then_clamps() {
    let r = |force| JoystickReading { angle_deg: 0.0, force, radius: 40.0 };
    assert_eq!(speed_multiplier(&r(10.0)), 0.25);
    assert_eq!(speed_multiplier(&r(40.0)), 1.0);
    assert_eq!(speed_multiplier(&r(90.0)), 1.0);
}

#[test]
fn half_deflection_moves_at_half_speed() {
    let r = JoystickReading { angle_deg: 0.0, force: 20.0, radius: 40.0 };
    assert_vec_near(movement_velocity(&r, 200.0), Vec2::new(100.0, 0.0));
}

#[test]
fn untouched_stick_stops_regardless_of_angle() {
    let r = JoystickReading { angle_deg: 73.0, force: 0.0, radius: 40.0 };
    assert_eq!(movement_velocity(&r, 200.0), Vec2::ZERO);
}

#[test]
fn tiny_force_still_counts_as_touched() {
    let r = JoystickReading { angle_deg: 90.0, force: 1e-4, radius: 40.0 };
    let v = movement_velocity(&r, 200.0);
    assert!(v.y > 0.0);
}

// --------------------------------------------------------------------------------------
// Step
// --------------------------------------------------------------------------------------

#[test]
fn step_fires_at_rim_and_resets_cooldown() {
    let t = Tunables::default();
    let mut state = SimState::default();
    state.player.position = Vec2::new(5.0, 5.0);

    let sticks = StickInputs { aim: aim_at_rim(0.0), ..Default::default() };
    let shot = step(&mut state, &sticks, 16.0, &t).expect("should fire");

    assert_eq!(state.cooldown.remaining_ms(), t.fire_interval_ms);
    assert_vec_near(shot.position, Vec2::new(55.0, 5.0));
    assert_eq!(shot.age.age_ms(), 0.0);
}

#[test]
fn step_below_rim_turns_without_firing() {
    let t = Tunables::default();
    let mut state = SimState::default();
    let sticks = StickInputs {
        aim: JoystickReading { angle_deg: -45.0, force: 19.9, radius: 20.0 },
        ..Default::default()
    };

    assert!(step(&mut state, &sticks, 16.0, &t).is_none());
    assert_eq!(state.player.angle_deg, -45.0);
    assert!(state.cooldown.is_ready());
}

#[test]
fn step_keeps_facing_when_aim_released() {
    let t = Tunables::default();
    let mut state = SimState::default();
    state.player.angle_deg = 120.0;

    let sticks = StickInputs { aim: JoystickReading { angle_deg: 10.0, force: 0.0, radius: 20.0 }, ..Default::default() };
    assert!(step(&mut state, &sticks, 16.0, &t).is_none());
    assert_eq!(state.player.angle_deg, 120.0);
}

#[test]
fn shot_leaves_along_new_facing() {
    let t = Tunables::default();
    let mut state = SimState::default();
    state.player.angle_deg = 0.0;

    let shot = step(&mut state, &StickInputs { aim: aim_at_rim(90.0), ..Default::default() }, 16.0, &t)
        .expect("should fire");
    assert_eq!(shot.rotation_deg, 90.0);
    assert_vec_near(shot.velocity, Vec2::new(0.0, t.bullet_speed));
}

#[test]
fn held_trigger_fires_once_per_interval() {
    let t = Tunables::default();
    let mut state = SimState::default();
    let sticks = StickInputs { aim: aim_at_rim(0.0), ..Default::default() };

    let fired_frames: Vec<usize> = (1..=20)
        .filter(|_| step(&mut state, &sticks, 16.0, &t).is_some())
        .collect();

    // 100 ms at 16 ms/frame: ready again on the 7th tick after a shot.
    assert_eq!(fired_frames, vec![1, 8, 15]);
}

#[test]
fn step_sets_and_clears_velocity() {
    let t = Tunables::default();
    let mut state = SimState::default();

    let moving = StickInputs {
        movement: JoystickReading { angle_deg: 0.0, force: 20.0, radius: 40.0 },
        ..Default::default()
    };
    step(&mut state, &moving, 16.0, &t);
    assert_vec_near(state.player.velocity, Vec2::new(100.0, 0.0));

    let released = StickInputs {
        movement: JoystickReading { angle_deg: 0.0, force: 0.0, radius: 40.0 },
        ..Default::default()
    };
    step(&mut state, &released, 16.0, &t);
    assert_eq!(state.player.velocity, Vec2::ZERO);
}
