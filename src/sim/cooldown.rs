//! Fire cooldown gate.

/// Milliseconds left before the next shot may fire.
///
/// The countdown is never clamped at zero: a 16 ms tick on 4 ms remaining leaves -12.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldown {
    remaining_ms: f32,
}

impl Cooldown {
    pub fn new(remaining_ms: f32) -> Self {
        Self { remaining_ms }
    }

    #[inline]
    pub fn remaining_ms(&self) -> f32 {
        self.remaining_ms
    }

    /// Counts down only while positive.
    #[inline]
    pub fn tick(&mut self, delta_ms: f32) {
        if self.remaining_ms > 0.0 {
            self.remaining_ms -= delta_ms;
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.remaining_ms <= 0.0
    }

    /// Called right after a successful shot.
    #[inline]
    pub fn reset(&mut self, interval_ms: f32) {
        self.remaining_ms = interval_ms;
    }
}
