//! Isometric camera framing
//!
//! Places the camera so that the whole scene is visible from an
//! isometric-like angle, at a distance proportional to the scene's size.

use glam::Vec3;

use crate::bounds::Aabb;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 70.0;

/// Near clip plane.
pub const CAMERA_NEAR: f32 = 0.01;

/// Far clip plane.
pub const CAMERA_FAR: f32 = 10.0;

/// Direction the camera is offset from the scene center, before normalization.
pub const ISO_DIRECTION: Vec3 = Vec3::new(1.0, 1.0, -1.0);

/// Camera distance as a multiple of the scene diagonal.
pub const DISTANCE_FACTOR: f32 = 1.2;

/// A camera placement: where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub position: Vec3,
    pub target: Vec3,
}

/// Compute the isometric framing for a scene bounding volume.
///
/// Returns `None` when no bounding volume is available (empty scene); the
/// caller must make no state change in that case and the camera keeps its
/// prior transform.
pub fn frame_isometric(bounds: Option<Aabb>) -> Option<CameraFrame> {
    let bounds = bounds?;
    let center = bounds.center();
    let distance = bounds.diagonal();
    let position = center + ISO_DIRECTION.normalize() * distance * DISTANCE_FACTOR;
    Some(CameraFrame {
        position,
        target: center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_empty_scene_is_noop() {
        assert_eq!(frame_isometric(None), None);
    }

    #[test]
    fn test_framing_formula() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 2.0));
        let frame = frame_isometric(Some(bounds)).unwrap();
        let center = Vec3::new(1.0, 2.0, 1.0);
        let diagonal = (4.0f32 + 16.0 + 4.0).sqrt();
        let expected = center + Vec3::new(1.0, 1.0, -1.0).normalize() * diagonal * 1.2;
        assert_vec3_eq(frame.target, center);
        assert_vec3_eq(frame.position, expected);
    }

    #[test]
    fn test_framing_scales_with_scene() {
        // Camera distance from the target is proportional to the diagonal,
        // regardless of asset scale.
        for scale in [0.01f32, 1.0, 250.0] {
            let bounds = Aabb::new(Vec3::splat(-scale), Vec3::splat(scale));
            let frame = frame_isometric(Some(bounds)).unwrap();
            let distance = frame.position.distance(frame.target);
            assert!((distance - bounds.diagonal() * DISTANCE_FACTOR).abs() < distance * 1e-5);
        }
    }

    #[test]
    fn test_framing_off_center_box() {
        let bounds = Aabb::new(Vec3::new(10.0, -5.0, 3.0), Vec3::new(12.0, -1.0, 7.0));
        let frame = frame_isometric(Some(bounds)).unwrap();
        assert_vec3_eq(frame.target, Vec3::new(11.0, -3.0, 5.0));
        let direction = (frame.position - frame.target).normalize();
        assert_vec3_eq(direction, Vec3::new(1.0, 1.0, -1.0).normalize());
    }
}
