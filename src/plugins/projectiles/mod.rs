//! Projectiles plugin: message-based spawning from a fixed bullet pool.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) age_bullets                                                           │
//!│      - Active bullets: age += dt; past TTL -> PendingReturn                │
//!│                                                                            │
//!│  (B) return_to_pool_commit                                                 │
//!│      - PendingReturn -> Inactive, hidden, motionless, back on free list    │
//!│                                                                            │
//!│  (C) Producer: player::drive_player                                        │
//!│      - writes: SpawnBulletRequest message                                  │
//!│                                                                            │
//!│  (D) Consumer: allocate_bullets_from_pool                                  │
//!│      - pops BulletPool.free, writes Transform / LinearVelocity / Bullet    │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate: Avian integrates LinearVelocity of active bullets
//! ```
//!
//! Bullets retired in (B) can be reused by (D) in the same frame.
//!
//! # Where do we still branch?
//! - Capacity: pool can be empty -> allocator drops the request.
//! Everything else is treated as an invariant violation.

pub mod allocator;
pub mod commit;
pub mod components;
pub mod lifetime;
pub mod messages;
pub mod pool;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::drive_player;

/// With a 1.5 s TTL and a 100 ms cooldown at most 15 bullets are alive at once.
pub const POOL_CAPACITY: usize = 64;

pub struct ProjectilesPlugin;

/// Maintain spawn request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_spawn_messages(mut msgs: ResMut<Messages<messages::SpawnBulletRequest>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(pool::BulletPool::new(POOL_CAPACITY))
            .add_systems(Startup, pool::init_bullet_pool);

        app.init_resource::<Messages<messages::SpawnBulletRequest>>();
        app.add_systems(PostUpdate, update_spawn_messages);

        app.add_systems(
            Update,
            (lifetime::age_bullets, commit::return_to_pool_commit)
                .chain()
                .before(drive_player)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            Update,
            allocator::allocate_bullets_from_pool
                .after(drive_player)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
