//! Tunable gameplay constants.

use bevy::prelude::*;

/// One virtual stick's shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickConfig {
    /// Deflection that counts as "full".
    pub radius: f32,
    /// Drags shorter than this read as zero force.
    pub force_min: f32,
    /// Drawn base circle; also the press hit area outside the stick's zone.
    pub base_radius: f32,
    /// Drawn thumb diameter.
    pub thumb_size: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Top player speed, reached at full movement-stick deflection.
    pub player_speed: f32,
    pub bullet_speed: f32,
    /// Distance in front of the player where bullets appear.
    pub muzzle_offset: f32,
    pub fire_interval_ms: f32,
    pub bullet_ttl_ms: f32,
    pub arena_size: Vec2,
    pub player_spawn: Vec2,
    pub movement_stick: StickConfig,
    pub aim_stick: StickConfig,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 200.0,
            bullet_speed: 800.0,
            muzzle_offset: 50.0,
            fire_interval_ms: 100.0,
            bullet_ttl_ms: 1500.0,
            arena_size: Vec2::new(1280.0, 720.0),
            player_spawn: Vec2::new(-440.0, 160.0),
            movement_stick: StickConfig { radius: 40.0, force_min: 0.0, base_radius: 60.0, thumb_size: 80.0 },
            aim_stick: StickConfig { radius: 20.0, force_min: 0.0, base_radius: 60.0, thumb_size: 80.0 },
        }
    }
}
