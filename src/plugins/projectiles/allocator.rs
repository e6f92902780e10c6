//! Spawn consumer: activate bullets from the pool.
//!
//! # Fail-fast invariants
//! - The pool free list contains only valid pooled bullet entities.
//! - Therefore, a pooled entity must match the bullet query.
//!
//! If this is violated, we `expect()` and crash loudly.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{Bullet, BulletEntity, BulletState, PooledBullet};
use super::messages::SpawnBulletRequest;
use super::pool::{BULLET_Z, BulletPool};

pub fn allocate_bullets_from_pool(
    mut pool: ResMut<BulletPool>,
    mut reader: MessageReader<SpawnBulletRequest>,
    mut q: Query<
        (
            &mut BulletState,
            &mut Bullet,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
        ),
        With<PooledBullet>,
    >,
) {
    for req in reader.read() {
        let Some(BulletEntity(e)) = pool.pop_free() else {
            // Capacity decision, not a correctness failure.
            debug!("Bullet pool exhausted ({} slots); shot dropped", pool.capacity());
            continue;
        };

        let (mut state, mut bullet, mut tf, mut vel, mut vis) =
            q.get_mut(e).expect("BulletPool contained an entity missing pooled bullet components");

        *state = BulletState::Active;
        bullet.reset_for_fire(&req.body);
        tf.translation = req.body.position.extend(BULLET_Z);
        tf.rotation = Quat::from_rotation_z(req.body.rotation_deg.to_radians());
        vel.0 = req.body.velocity;
        *vis = Visibility::Visible;
    }
}
