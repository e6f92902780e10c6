//! Polar joystick readings.

use bevy::math::Vec2;

/// What a virtual stick reports each frame.
///
/// `force` is the drag distance from the stick center. It is not clamped at `radius`;
/// callers compare against `radius` themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JoystickReading {
    pub angle_deg: f32,
    pub force: f32,
    pub radius: f32,
}

impl JoystickReading {
    /// Untouched stick of the given radius.
    pub fn idle(radius: f32) -> Self {
        Self { angle_deg: 0.0, force: 0.0, radius }
    }

    /// Reading for a y-up drag offset from the stick center.
    ///
    /// Offsets shorter than `force_min` read as zero force but keep their angle.
    pub fn from_offset(offset: Vec2, radius: f32, force_min: f32) -> Self {
        let distance = offset.length();
        let angle_deg = if distance > 0.0 { offset.y.atan2(offset.x).to_degrees() } else { 0.0 };
        let force = if distance < force_min { 0.0 } else { distance };
        Self { angle_deg, force, radius }
    }

    /// Any nonzero force counts as touched.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.force > 0.0
    }

    /// Deflected to (or past) the rim.
    #[inline]
    pub fn at_rim(&self) -> bool {
        self.force >= self.radius
    }
}
