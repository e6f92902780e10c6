//! Bullet record: spawn pose and lifetime.

use bevy::math::Vec2;

use super::heading;
use crate::common::tunables::Tunables;

/// Age of a live bullet.
///
/// `Alive -> Expired` is one-way. Once expired, [`BulletAge::advance`] is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BulletAge {
    age_ms: f32,
    expired: bool,
}

impl BulletAge {
    #[inline]
    pub fn age_ms(&self) -> f32 {
        self.age_ms
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.expired
    }

    /// Adds `delta_ms` to the age.
    ///
    /// Returns `true` exactly once: on the call that pushes the age past `ttl_ms`.
    pub fn advance(&mut self, delta_ms: f32, ttl_ms: f32) -> bool {
        if self.expired {
            return false;
        }
        self.age_ms += delta_ms;
        if self.age_ms > ttl_ms {
            self.expired = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletBody {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub velocity: Vec2,
    pub age: BulletAge,
}

impl BulletBody {
    /// See [`BulletAge::advance`].
    #[inline]
    pub fn advance(&mut self, delta_ms: f32, ttl_ms: f32) -> bool {
        self.age.advance(delta_ms, ttl_ms)
    }
}

/// Places a fresh bullet `muzzle_offset` units in front of the shooter, flying along its rotation.
pub fn spawn(shooter_position: Vec2, shooter_rotation_deg: f32, tunables: &Tunables) -> BulletBody {
    let dir = heading(shooter_rotation_deg);
    BulletBody {
        position: shooter_position + dir * tunables.muzzle_offset,
        rotation_deg: shooter_rotation_deg,
        velocity: dir * tunables.bullet_speed,
        age: BulletAge::default(),
    }
}
