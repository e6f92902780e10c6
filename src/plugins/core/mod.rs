//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

/// Grass green, #56ac68.
pub const BACKGROUND: Color = Color::srgb(0.337, 0.675, 0.408);

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.insert_resource(ClearColor(BACKGROUND));
}
