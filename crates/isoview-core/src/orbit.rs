//! Orbit navigation state
//!
//! An explicit replacement for the loosely-typed controls helper the viewer
//! used to delegate to. Only the operations the viewer actually consumes are
//! modeled: reset, target assignment, damping configuration, input
//! application, and the per-frame update. Keeping the state pure makes the
//! whole navigation path testable without an engine.

use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::framing::CameraFrame;

/// Pan speed as a fraction of the orbit distance, per pixel of pointer motion.
const PAN_RATE: f32 = 0.002;

/// Keeps the elevation strictly below straight-up so the look-at basis never
/// degenerates.
const ELEVATION_MARGIN: f32 = 1e-3;

/// Fixed navigation parameters, mutated once at setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Damping factor applied per frame at the reference 60 Hz rate.
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Maximum polar angle from the up axis; PI/2 keeps the camera above the
    /// horizon.
    pub max_polar_angle: f32,
    /// When false, panning moves parallel to the ground plane instead of the
    /// camera's screen plane.
    pub screen_space_pan: bool,
    /// Radians of orbit per pixel of pointer motion.
    pub sensitivity: f32,
    /// Fractional zoom per wheel step.
    pub zoom_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping_factor: 0.05,
            min_distance: 0.0,
            max_distance: 5000.0,
            max_polar_angle: FRAC_PI_2,
            screen_space_pan: false,
            sensitivity: 0.005,
            zoom_speed: 0.03,
        }
    }
}

impl OrbitSettings {
    /// Allowed elevation range above the horizon implied by the polar bound.
    fn elevation_range(&self) -> (f32, f32) {
        (FRAC_PI_2 - self.max_polar_angle, FRAC_PI_2 - ELEVATION_MARGIN)
    }
}

/// Mutable orbit state: the point being orbited and the spherical camera
/// offset around it. `target`/`distance` are the damped values applied to the
/// camera; `target_focus`/`target_distance` are where the input wants them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub target: Vec3,
    pub target_focus: Vec3,
    pub distance: f32,
    pub target_distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            target_focus: Vec3::ZERO,
            distance: 1.0,
            target_distance: 1.0,
            azimuth: 0.8,
            elevation: 0.5,
        }
    }
}

impl OrbitState {
    /// Restore defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Assign the orbit target, skipping the damped approach.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.target_focus = target;
    }

    /// Adopt a framing result: reset, orbit around the frame's target, and
    /// derive distance/azimuth/elevation from the frame's camera position.
    pub fn look_from(&mut self, frame: &CameraFrame, settings: &OrbitSettings) {
        self.reset();
        self.set_target(frame.target);

        let offset = frame.position - frame.target;
        let distance = offset
            .length()
            .clamp(settings.min_distance, settings.max_distance);
        self.distance = distance;
        self.target_distance = distance;

        if distance > f32::EPSILON {
            let (min_elevation, max_elevation) = settings.elevation_range();
            self.azimuth = offset.z.atan2(offset.x);
            self.elevation = (offset.y / distance)
                .clamp(-1.0, 1.0)
                .asin()
                .clamp(min_elevation, max_elevation);
        }
    }

    /// Orbit by a pointer motion delta, in pixels.
    pub fn apply_orbit(&mut self, delta: Vec2, settings: &OrbitSettings) {
        let (min_elevation, max_elevation) = settings.elevation_range();
        self.azimuth -= delta.x * settings.sensitivity;
        self.elevation =
            (self.elevation - delta.y * settings.sensitivity).clamp(min_elevation, max_elevation);
    }

    /// Pan the orbit target by a pointer motion delta, in pixels.
    pub fn apply_pan(&mut self, delta: Vec2, settings: &OrbitSettings) {
        let forward = (-self.offset()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        if right == Vec3::ZERO {
            return;
        }
        let up = if settings.screen_space_pan {
            right.cross(forward)
        } else {
            Vec3::Y
        };
        let pan = self.distance * PAN_RATE;
        self.target_focus += right * (delta.x * pan) + up * (delta.y * pan);
    }

    /// Zoom by wheel steps; positive steps zoom in. The distance is clamped to
    /// the configured bounds.
    pub fn apply_zoom(&mut self, steps: f32, settings: &OrbitSettings) {
        let factor = 1.0 - steps * settings.zoom_speed;
        self.target_distance = (self.target_distance * factor)
            .clamp(settings.min_distance, settings.max_distance);
    }

    /// Advance the damping state by one step and return the camera placement
    /// for this frame. The smoothing exponent makes convergence independent of
    /// the refresh rate.
    pub fn update(&mut self, dt: f32, settings: &OrbitSettings) -> CameraFrame {
        let alpha = 1.0 - (-settings.damping_factor * 60.0 * dt).exp();
        self.distance += (self.target_distance - self.distance) * alpha;
        self.target += (self.target_focus - self.target) * alpha;
        CameraFrame {
            position: self.target + self.offset(),
            target: self.target,
        }
    }

    /// Camera offset from the target in Y-up spherical coordinates.
    fn offset(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.elevation.cos() * self.azimuth.cos(),
            self.distance * self.elevation.sin(),
            self.distance * self.elevation.cos() * self.azimuth.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Aabb;
    use crate::framing::frame_isometric;

    #[test]
    fn test_reset_restores_defaults() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        state.apply_orbit(Vec2::new(40.0, -12.0), &settings);
        state.apply_zoom(3.0, &settings);
        state.set_target(Vec3::new(5.0, 1.0, -2.0));
        state.reset();
        assert_eq!(state, OrbitState::default());
    }

    #[test]
    fn test_zoom_clamped_to_bounds() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        for _ in 0..10_000 {
            state.apply_zoom(-50.0, &settings);
        }
        assert!(state.target_distance <= settings.max_distance);
        for _ in 0..10_000 {
            state.apply_zoom(50.0, &settings);
        }
        assert!(state.target_distance >= settings.min_distance);
    }

    #[test]
    fn test_elevation_clamped_below_pole() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        state.apply_orbit(Vec2::new(0.0, -10_000.0), &settings);
        assert!(state.elevation < FRAC_PI_2);
        state.apply_orbit(Vec2::new(0.0, 10_000.0), &settings);
        assert!(state.elevation >= 0.0);
    }

    #[test]
    fn test_update_converges_toward_targets() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        state.target_focus = Vec3::new(2.0, 0.0, 0.0);
        state.target_distance = 4.0;

        let mut last_distance_gap = (state.target_distance - state.distance).abs();
        let mut last_target_gap = state.target_focus.distance(state.target);
        for _ in 0..100 {
            state.update(1.0 / 60.0, &settings);
            let distance_gap = (state.target_distance - state.distance).abs();
            let target_gap = state.target_focus.distance(state.target);
            assert!(distance_gap <= last_distance_gap);
            assert!(target_gap <= last_target_gap);
            last_distance_gap = distance_gap;
            last_target_gap = target_gap;
        }
        assert!(last_distance_gap < 0.1);
        assert!(last_target_gap < 0.1);
    }

    #[test]
    fn test_look_from_reproduces_framing() {
        let settings = OrbitSettings::default();
        let bounds = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 2.0));
        let frame = frame_isometric(Some(bounds)).unwrap();

        let mut state = OrbitState::default();
        state.look_from(&frame, &settings);

        // With damping already settled, the next update must reproduce the
        // framed camera placement exactly.
        let applied = state.update(1.0 / 60.0, &settings);
        assert!(applied.position.distance(frame.position) < 1e-4);
        assert!(applied.target.distance(frame.target) < 1e-6);
    }

    #[test]
    fn test_pan_ground_plane_keeps_height() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        let before = state.target_focus.y;
        state.apply_pan(Vec2::new(25.0, 0.0), &settings);
        assert!((state.target_focus.y - before).abs() < 1e-6);
    }
}
