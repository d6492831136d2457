//! Auto-rotation (turntable) state

/// Default angular velocity in radians per second. Matches the historical
/// per-frame increment of 0.01 rad at a 60 Hz refresh rate.
pub const DEFAULT_ANGULAR_VELOCITY: f32 = 0.6;

/// Whether the scene auto-rotates, and how fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turntable {
    pub enabled: bool,
    pub angular_velocity: f32,
}

impl Default for Turntable {
    fn default() -> Self {
        Self {
            enabled: false,
            angular_velocity: DEFAULT_ANGULAR_VELOCITY,
        }
    }
}

impl Turntable {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Yaw increment for a frame of `dt` seconds: zero while disabled.
    pub fn step(&self, dt: f32) -> f32 {
        if self.enabled {
            self.angular_velocity * dt
        } else {
            0.0
        }
    }
}
