//! The per-frame update.

use bevy::math::Vec2;

use super::bullet::{self, BulletBody};
use super::cooldown::Cooldown;
use super::heading;
use super::joystick::JoystickReading;
use crate::common::tunables::Tunables;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerState {
    pub position: Vec2,
    pub angle_deg: f32,
    pub velocity: Vec2,
}

/// Everything the step mutates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimState {
    pub player: PlayerState,
    pub cooldown: Cooldown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickInputs {
    pub aim: JoystickReading,
    pub movement: JoystickReading,
}

/// Linear up to the rim, then 1.
#[inline]
pub fn speed_multiplier(reading: &JoystickReading) -> f32 {
    if reading.force < reading.radius { reading.force / reading.radius } else { 1.0 }
}

/// Player velocity for a movement reading. An untouched stick means a full stop.
pub fn movement_velocity(reading: &JoystickReading, max_speed: f32) -> Vec2 {
    if !reading.is_active() {
        return Vec2::ZERO;
    }
    heading(reading.angle_deg) * max_speed * speed_multiplier(reading)
}

/// Advances one frame.
///
/// Order matters: the cooldown ticks first, the player turns to the aim stick before the
/// firing check (so a shot leaves along the new facing), and movement is applied last.
/// Returns the bullet to spawn, if the player fired this frame.
pub fn step(
    state: &mut SimState,
    sticks: &StickInputs,
    delta_ms: f32,
    tunables: &Tunables,
) -> Option<BulletBody> {
    state.cooldown.tick(delta_ms);

    let mut fired = None;
    if sticks.aim.is_active() {
        state.player.angle_deg = sticks.aim.angle_deg;

        if sticks.aim.at_rim() && state.cooldown.is_ready() {
            fired = Some(bullet::spawn(state.player.position, state.player.angle_deg, tunables));
            state.cooldown.reset(tunables.fire_interval_ms);
        }
    }

    state.player.velocity = movement_velocity(&sticks.movement, tunables.player_speed);

    fired
}
