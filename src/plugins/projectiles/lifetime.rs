//! Bullet aging.
//!
//! Every active bullet gets one tick per rendered frame. A bullet whose age passes the TTL is
//! marked `PendingReturn`; the commit recycles it.

use bevy::prelude::*;

use super::components::{Bullet, BulletState, PooledBullet};
use crate::common::tunables::Tunables;

pub fn age_bullets(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut Bullet, &mut BulletState), With<PooledBullet>>,
) {
    let delta_ms = time.delta_secs() * 1000.0;

    for (mut bullet, mut state) in &mut q {
        if *state != BulletState::Active {
            continue;
        }
        if bullet.age.advance(delta_ms, tunables.bullet_ttl_ms) {
            *state = BulletState::PendingReturn;
        }
    }
}
