//! Frame-step simulation core.
//!
//! Plain data plus free functions. Nothing in here knows about entities, sprites or
//! physics bodies; the plugins read ECS components into these records, call [`step`],
//! and project the result back onto the world.
//!
//! ```text
//!   JoystickReading (aim, movement) ──┐
//!   delta_ms ─────────────────────────┼──> step(SimState) ──> Option<BulletBody>
//!   Tunables ─────────────────────────┘         │
//!                                               └──> PlayerState.velocity / angle_deg
//! ```
//!
//! Angles are degrees, y-up, measured counter-clockwise from +X.

use bevy::math::Vec2;

pub mod bullet;
pub mod cooldown;
pub mod joystick;
pub mod step;

pub use bullet::{BulletAge, BulletBody};
pub use cooldown::Cooldown;
pub use joystick::JoystickReading;
pub use step::{PlayerState, SimState, StickInputs, movement_velocity, speed_multiplier, step};

/// Unit vector pointing along `angle_deg`.
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians())
}

#[cfg(test)]
mod tests;
