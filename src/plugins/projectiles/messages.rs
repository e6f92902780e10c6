//! Buffered spawn requests.
//!
//! The player's drive system only decides *that* a bullet is fired and where; the
//! allocator turns that intent into a pooled entity. Producers never borrow the pool.

use bevy::prelude::*;

use crate::sim::BulletBody;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBulletRequest {
    pub body: BulletBody,
}
