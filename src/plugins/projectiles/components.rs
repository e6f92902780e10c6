use bevy::prelude::*;

use crate::sim::{BulletAge, BulletBody};

/// Marker for bullets owned by the pool.
#[derive(Component)]
pub struct PooledBullet;

/// Pool slot lifecycle.
///
/// `Inactive -> Active` happens only in the allocator, `Active -> PendingReturn` only when the
/// bullet outlives its TTL, and `PendingReturn -> Inactive` only in the commit.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

/// Per-bullet gameplay data. Pose and velocity live on `Transform` / `LinearVelocity`.
#[derive(Component, Debug, Clone, Default)]
pub struct Bullet {
    pub age: BulletAge,
}

impl Bullet {
    #[inline]
    pub fn reset_for_fire(&mut self, body: &BulletBody) {
        self.age = body.age;
    }
}

/// Entity known to carry the pooled bullet components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletEntity(pub Entity);
