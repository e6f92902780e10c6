//! Joystick HUD (render-only).
//!
//! Every [`VirtualJoystick`] gets a base circle and a thumb circle. Visuals are pure
//! projections of the stick state:
//! - position: window-space center / thumb mapped through the main camera,
//! - opacity: brighter while a pointer holds the stick.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::camera::MainCamera;
use crate::plugins::joystick::VirtualJoystick;

const HUD_Z: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StickPart {
    Base,
    Thumb,
}

#[derive(Component, Debug)]
struct StickVisual {
    stick: Entity,
    part: StickPart,
}

#[derive(Resource)]
struct HudPalette {
    base_idle: Handle<ColorMaterial>,
    base_pressed: Handle<ColorMaterial>,
    thumb_idle: Handle<ColorMaterial>,
    thumb_pressed: Handle<ColorMaterial>,
}

impl HudPalette {
    fn pick(&self, part: StickPart, pressed: bool) -> &Handle<ColorMaterial> {
        match (part, pressed) {
            (StickPart::Base, false) => &self.base_idle,
            (StickPart::Base, true) => &self.base_pressed,
            (StickPart::Thumb, false) => &self.thumb_idle,
            (StickPart::Thumb, true) => &self.thumb_pressed,
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_palette)
        .add_systems(Update, attach_visuals.run_if(in_state(GameState::InGame)))
        .add_systems(
            PostUpdate,
            project_sticks
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn setup_palette(mut commands: Commands, mut materials: ResMut<Assets<ColorMaterial>>) {
    let mut grey = |alpha| materials.add(Color::srgba(0.53, 0.53, 0.53, alpha));
    let base_idle = grey(0.25);
    let base_pressed = grey(0.5);
    let white = |alpha| Color::srgba(0.95, 0.95, 0.95, alpha);
    commands.insert_resource(HudPalette {
        base_idle,
        base_pressed,
        thumb_idle: materials.add(white(0.5)),
        thumb_pressed: materials.add(white(1.0)),
    });
}

fn attach_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    palette: Res<HudPalette>,
    q: Query<(Entity, &VirtualJoystick), Added<VirtualJoystick>>,
) {
    for (stick, joystick) in &q {
        let base = meshes.add(Circle::new(joystick.config.base_radius));
        let thumb = meshes.add(Circle::new(joystick.config.thumb_size * 0.5));

        commands.spawn((
            Name::new("StickBase"),
            StickVisual { stick, part: StickPart::Base },
            Mesh2d(base),
            MeshMaterial2d(palette.base_idle.clone()),
            Transform::from_xyz(0.0, 0.0, HUD_Z),
            DespawnOnExit(GameState::InGame),
        ));
        commands.spawn((
            Name::new("StickThumb"),
            StickVisual { stick, part: StickPart::Thumb },
            Mesh2d(thumb),
            MeshMaterial2d(palette.thumb_idle.clone()),
            Transform::from_xyz(0.0, 0.0, HUD_Z + 1.0),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn project_sticks(
    palette: Res<HudPalette>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_sticks: Query<&VirtualJoystick>,
    mut q_visuals: Query<(&StickVisual, &mut Transform, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };

    for (visual, mut tf, mut material) in &mut q_visuals {
        let Ok(stick) = q_sticks.get(visual.stick) else {
            continue;
        };

        let screen = match visual.part {
            StickPart::Base => stick.center,
            StickPart::Thumb => stick.center + stick.thumb,
        };
        let Ok(world) = camera.viewport_to_world_2d(camera_tf, screen) else {
            continue;
        };
        tf.translation.x = world.x;
        tf.translation.y = world.y;

        let wanted = palette.pick(visual.part, stick.is_pressed());
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}
