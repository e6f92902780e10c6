//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `twin_stick::game::configure_headless` to install gameplay plugins.
//! - every frame advances exactly `FRAME_MS`, so cooldown and TTL math is deterministic.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use twin_stick::plugins::joystick::{PointerId, StickRole, VirtualJoystick};
use twin_stick::plugins::projectiles::components::BulletState;
use twin_stick::sim::JoystickReading;

pub const FRAME_MS: u64 = 16;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(FRAME_MS)));

    twin_stick::game::configure_headless(&mut app);
    // `App::run` does this before the first frame; plugins (e.g. Avian) register resources here.
    app.finish();
    app.cleanup();
    app
}

/// Boot the app: Startup + OnEnter(InGame) run, entities exist afterwards.
pub fn booted() -> App {
    let mut app = app_headless();
    app.update();
    app
}

/// Pin a stick's reading as if a pointer were holding it there.
pub fn hold_stick(app: &mut App, role: StickRole, angle_deg: f32, force: f32) {
    let mut q = app.world_mut().query::<(&StickRole, &mut VirtualJoystick)>();
    for (r, mut stick) in q.iter_mut(app.world_mut()) {
        if *r == role {
            stick.pointer = Some(PointerId::Mouse);
            stick.reading = JoystickReading { angle_deg, force, radius: stick.config.radius };
        }
    }
}

pub fn release_stick(app: &mut App, role: StickRole) {
    let mut q = app.world_mut().query::<(&StickRole, &mut VirtualJoystick)>();
    for (r, mut stick) in q.iter_mut(app.world_mut()) {
        if *r == role {
            stick.pointer = None;
            stick.reading = JoystickReading::idle(stick.config.radius);
        }
    }
}

pub fn count_bullets(app: &mut App, state: BulletState) -> usize {
    app.world_mut()
        .query::<&BulletState>()
        .iter(app.world())
        .filter(|s| **s == state)
        .count()
}
