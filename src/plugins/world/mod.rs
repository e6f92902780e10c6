//! World plugin: arena bounds.
//!
//! Four static walls just outside the arena rectangle keep the player on screen.
//! The arena is the primary window's size when there is one, `Tunables::arena_size` otherwise.
//! Bullets carry no collider and fly through them until their TTL runs out.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::window::PrimaryWindow;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

const WALL_THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_arena);
}

fn spawn_arena(
    mut commands: Commands,
    tunables: Res<Tunables>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let size = windows
        .single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(tunables.arena_size);
    let half = size * 0.5;
    let t = WALL_THICKNESS;
    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player]);

    let mut spawn_wall = |name: &str, pos: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    let horizontal = Vec2::new(half.x * 2.0 + t * 2.0, t);
    let vertical = Vec2::new(t, half.y * 2.0);

    spawn_wall("WallTop", Vec2::new(0.0, half.y + t * 0.5), horizontal);
    spawn_wall("WallBottom", Vec2::new(0.0, -half.y - t * 0.5), horizontal);
    spawn_wall("WallLeft", Vec2::new(-half.x - t * 0.5, 0.0), vertical);
    spawn_wall("WallRight", Vec2::new(half.x + t * 0.5, 0.0), vertical);
}
