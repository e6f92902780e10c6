//! Virtual joystick plugin.
//!
//! Two on-screen sticks turn pointer drags into polar [`JoystickReading`]s.
//!
//! ```text
//!   Update (chained)
//!     track_screen_size   Window            -> ScreenSize
//!     gather_pointers     mouse + Touches   -> PointerFrame
//!     drive_joysticks     PointerFrame      -> VirtualJoystick.{center, thumb, pointer, reading}
//! ```
//!
//! Stick centers and pointer positions live in window space (logical pixels, y-down).
//! Readings are flipped to y-up so their angles match world space.
//!
//! Claiming rules:
//! - a press in the left 40% of the screen re-centers the movement stick under it,
//! - a press in the right 40% re-centers the aim stick,
//! - anywhere else, a free stick claims the press only if it lands on its base circle.
//!
//! Each stick follows exactly one pointer until that pointer lifts, so both sticks can be
//! held at once on a touch screen.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::window::PrimaryWindow;

use crate::common::{
    state::GameState,
    tunables::{StickConfig, Tunables},
};
use crate::sim::JoystickReading;

/// Presses at or left of this fraction of the screen width belong to the movement stick.
pub const MOVEMENT_ZONE: f32 = 0.4;
/// Presses at or right of this fraction of the screen width belong to the aim stick.
pub const AIM_ZONE: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Held,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Vec2,
    pub phase: PointerPhase,
}

/// This frame's pointer activity, rebuilt every frame.
#[derive(Resource, Default, Debug)]
pub struct PointerFrame {
    pub samples: Vec<PointerSample>,
}

/// Logical window size. Keeps its default in headless apps.
#[derive(Resource, Debug, Clone, Copy, Deref)]
pub struct ScreenSize(pub Vec2);

impl Default for ScreenSize {
    fn default() -> Self {
        Self(Vec2::new(1280.0, 720.0))
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickRole {
    Movement,
    Aim,
}

impl StickRole {
    /// Whether a press at window x re-centers this stick.
    #[inline]
    pub fn zone_contains(self, x: f32, screen_width: f32) -> bool {
        match self {
            Self::Movement => x <= screen_width * MOVEMENT_ZONE,
            Self::Aim => x >= screen_width * AIM_ZONE,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct VirtualJoystick {
    pub config: StickConfig,
    /// Window-space center.
    pub center: Vec2,
    /// Window-space thumb offset from `center`, never longer than `config.radius`.
    pub thumb: Vec2,
    pub pointer: Option<PointerId>,
    pub reading: JoystickReading,
}

impl VirtualJoystick {
    pub fn new(config: StickConfig, center: Vec2) -> Self {
        Self {
            config,
            center,
            thumb: Vec2::ZERO,
            pointer: None,
            reading: JoystickReading::idle(config.radius),
        }
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pointer.is_some()
    }

    #[inline]
    fn on_base(&self, position: Vec2) -> bool {
        position.distance(self.center) <= self.config.base_radius
    }

    fn claim(&mut self, id: PointerId, position: Vec2) {
        self.pointer = Some(id);
        self.drag(position);
    }

    fn drag(&mut self, position: Vec2) {
        let offset = position - self.center;
        self.thumb = offset.clamp_length_max(self.config.radius);
        self.reading = JoystickReading::from_offset(
            Vec2::new(offset.x, -offset.y),
            self.config.radius,
            self.config.force_min,
        );
    }

    fn release(&mut self) {
        self.pointer = None;
        self.thumb = Vec2::ZERO;
        self.reading = JoystickReading::idle(self.config.radius);
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PointerFrame>()
        .init_resource::<ScreenSize>()
        .add_systems(OnEnter(GameState::InGame), spawn_sticks)
        .add_systems(
            Update,
            (track_screen_size, gather_pointers, drive_joysticks)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

pub(crate) fn spawn_sticks(
    mut commands: Commands,
    tunables: Res<Tunables>,
    screen: Res<ScreenSize>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let size = windows
        .single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(screen.0);

    commands.spawn((
        Name::new("MovementStick"),
        StickRole::Movement,
        VirtualJoystick::new(tunables.movement_stick, Vec2::new(100.0, size.y - 125.0)),
        DespawnOnExit(GameState::InGame),
    ));
    commands.spawn((
        Name::new("AimStick"),
        StickRole::Aim,
        VirtualJoystick::new(tunables.aim_stick, Vec2::new(size.x - 100.0, size.y - 125.0)),
        DespawnOnExit(GameState::InGame),
    ));
}

fn track_screen_size(windows: Query<&Window, With<PrimaryWindow>>, mut screen: ResMut<ScreenSize>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if screen.0 != size {
        screen.0 = size;
    }
}

/// Normalize mouse and touch input into one list of pointer samples.
///
/// Missing input resources (headless apps) simply produce no samples.
pub(crate) fn gather_pointers(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut frame: ResMut<PointerFrame>,
) {
    frame.samples.clear();

    if let Some(mouse) = mouse {
        let cursor = windows.single().ok().and_then(|w| w.cursor_position());

        // A click shorter than a frame shows up as both just-pressed and just-released.
        if mouse.just_pressed(MouseButton::Left) {
            if let Some(position) = cursor {
                frame.samples.push(PointerSample {
                    id: PointerId::Mouse,
                    position,
                    phase: PointerPhase::Pressed,
                });
            }
        } else if mouse.pressed(MouseButton::Left) {
            if let Some(position) = cursor {
                frame.samples.push(PointerSample {
                    id: PointerId::Mouse,
                    position,
                    phase: PointerPhase::Held,
                });
            }
        }

        // A release is honored even when the cursor left the window.
        if mouse.just_released(MouseButton::Left) {
            frame.samples.push(PointerSample {
                id: PointerId::Mouse,
                position: cursor.unwrap_or_default(),
                phase: PointerPhase::Released,
            });
        }
    }

    if let Some(touches) = touches {
        for touch in touches.iter_just_pressed() {
            frame.samples.push(PointerSample {
                id: PointerId::Touch(touch.id()),
                position: touch.position(),
                phase: PointerPhase::Pressed,
            });
        }
        for touch in touches.iter().filter(|t| !touches.just_pressed(t.id())) {
            frame.samples.push(PointerSample {
                id: PointerId::Touch(touch.id()),
                position: touch.position(),
                phase: PointerPhase::Held,
            });
        }
        for touch in touches.iter_just_released().chain(touches.iter_just_canceled()) {
            frame.samples.push(PointerSample {
                id: PointerId::Touch(touch.id()),
                position: touch.position(),
                phase: PointerPhase::Released,
            });
        }
    }
}

pub(crate) fn drive_joysticks(
    frame: Res<PointerFrame>,
    screen: Res<ScreenSize>,
    mut sticks: Query<(&StickRole, &mut VirtualJoystick)>,
) {
    for sample in &frame.samples {
        match sample.phase {
            PointerPhase::Pressed => {
                // A pointer drives at most one stick.
                if sticks.iter().any(|(_, stick)| stick.pointer == Some(sample.id)) {
                    continue;
                }
                for (role, mut stick) in &mut sticks {
                    if stick.is_pressed() {
                        continue;
                    }
                    if role.zone_contains(sample.position.x, screen.x) {
                        stick.center = sample.position;
                    } else if !stick.on_base(sample.position) {
                        continue;
                    }
                    stick.claim(sample.id, sample.position);
                    debug!("{role:?} stick claimed by {:?} at {}", sample.id, sample.position);
                    break;
                }
            }
            PointerPhase::Held => {
                for (_, mut stick) in &mut sticks {
                    if stick.pointer == Some(sample.id) {
                        stick.drag(sample.position);
                    }
                }
            }
            PointerPhase::Released => {
                for (role, mut stick) in &mut sticks {
                    if stick.pointer == Some(sample.id) {
                        stick.release();
                        debug!("{role:?} stick released by {:?}", sample.id);
                    }
                }
            }
        }
    }
}
