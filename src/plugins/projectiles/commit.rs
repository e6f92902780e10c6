//! Return commit: recycle bullets back into the pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive bullets must be:
//! - hidden
//! - velocity = 0
//!
//! Centralizing these writes here prevents inconsistencies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{BulletEntity, BulletState, PooledBullet};
use super::pool::BulletPool;

pub fn return_to_pool_commit(
    mut pool: ResMut<BulletPool>,
    mut q: Query<(Entity, &mut BulletState, &mut Visibility, &mut LinearVelocity), With<PooledBullet>>,
) {
    for (e, mut state, mut vis, mut vel) in &mut q {
        if *state != BulletState::PendingReturn {
            continue;
        }

        *state = BulletState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;

        pool.push_free(BulletEntity(e));
    }
}
