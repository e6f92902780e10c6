use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Bullet, BulletEntity, BulletState, PooledBullet};

pub const BULLET_Z: f32 = 2.0;

/// Fixed set of pre-spawned bullets. `free` holds the inactive ones.
#[derive(Resource, Debug)]
pub struct BulletPool {
    free: Vec<BulletEntity>,
    capacity: usize,
}

impl BulletPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<BulletEntity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: BulletEntity) {
        debug_assert!(self.free.len() < self.capacity, "BulletPool over capacity");
        self.free.push(e);
    }
}

/// Pre-spawn pooled bullets (inactive).
///
/// Bullets are kinematic and carry no collider: they fly straight until their TTL runs out.
pub fn init_bullet_pool(mut commands: Commands, mut pool: ResMut<BulletPool>) {
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Bullet(Pooled)"),
                PooledBullet,
                BulletState::Inactive,
                Bullet::default(),
                Sprite {
                    color: Color::srgb(1.0, 0.85, 0.3),
                    custom_size: Some(Vec2::new(16.0, 4.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, BULLET_Z),
                Visibility::Hidden,
                RigidBody::Kinematic,
                LinearVelocity(Vec2::ZERO),
            ))
            .id();

        pool.free.push(BulletEntity(e));
    }

    info!("Bullet pool ready: {cap} slots");
}
