//! Player plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the player as a dynamic body confined by the arena walls
//! - Update: read both sticks, run one [`sim::step`], write velocity/facing back and
//!   hand any shot to the projectile allocator as a [`SpawnBulletRequest`]
//! - FixedUpdate (Avian): integrate `LinearVelocity`
//!
//! The ECS components are the storage; the simulation core owns the rules. Each frame the
//! drive system assembles a [`SimState`] from the player's components and projects the
//! result straight back onto them.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::joystick::{self, StickRole, VirtualJoystick};
use crate::plugins::projectiles::messages::SpawnBulletRequest;
use crate::sim::{self, Cooldown, JoystickReading, PlayerState, SimState, StickInputs};

/// Collider radius; the sprite is twice this wide.
pub const PLAYER_RADIUS: f32 = 13.0;

#[derive(Component)]
pub struct Player;

/// Facing in degrees (y-up, counter-clockwise from +X). Mirrored into `Transform::rotation`.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct Heading(pub f32);

#[derive(Component, Debug, Default, Clone, Copy, Deref, DerefMut)]
pub struct FireCooldown(pub Cooldown);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn).add_systems(
        Update,
        drive_player
            .after(joystick::drive_joysticks)
            .run_if(in_state(GameState::InGame)),
    );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Heading::default(),
        FireCooldown::default(),
        Sprite {
            color: Color::srgb(0.2, 0.35, 0.9),
            custom_size: Some(Vec2::splat(PLAYER_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_translation(tunables.player_spawn.extend(1.0)),
        RigidBody::Dynamic,
        Collider::circle(PLAYER_RADIUS),
        LockedAxes::ROTATION_LOCKED,
        layers,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
        // Barrel: shows which way the player faces.
        children![(
            Sprite {
                color: Color::srgb(0.95, 0.95, 0.95),
                custom_size: Some(Vec2::new(14.0, 6.0)),
                ..default()
            },
            Transform::from_xyz(16.0, 0.0, 0.1),
        )],
    ));

    info!("Player spawned at {}", tunables.player_spawn);
}

/// One simulation step per rendered frame.
pub fn drive_player(
    time: Res<Time>,
    tunables: Res<Tunables>,
    sticks: Query<(&StickRole, &VirtualJoystick)>,
    mut q_player: Query<
        (
            &mut Transform,
            &mut Heading,
            &mut FireCooldown,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let Ok((mut tf, mut heading, mut cooldown, mut vel)) = q_player.single_mut() else {
        return;
    };

    let mut inputs = StickInputs {
        aim: JoystickReading::idle(tunables.aim_stick.radius),
        movement: JoystickReading::idle(tunables.movement_stick.radius),
    };
    for (role, stick) in &sticks {
        match role {
            StickRole::Aim => inputs.aim = stick.reading,
            StickRole::Movement => inputs.movement = stick.reading,
        }
    }

    let mut state = SimState {
        player: PlayerState {
            position: tf.translation.truncate(),
            angle_deg: heading.0,
            velocity: vel.0,
        },
        cooldown: cooldown.0,
    };

    let shot = sim::step(&mut state, &inputs, time.delta_secs() * 1000.0, &tunables);

    if state.player.angle_deg != heading.0 {
        heading.0 = state.player.angle_deg;
        tf.rotation = Quat::from_rotation_z(heading.0.to_radians());
    }
    vel.0 = state.player.velocity;
    cooldown.0 = state.cooldown;

    if let Some(body) = shot {
        debug!("Fire at {:.1} deg from {}", body.rotation_deg, state.player.position);
        writer.write(SpawnBulletRequest { body });
    }
}
