//! Pointer ray casting and marker hit-testing

use glam::{Vec2, Vec3};

/// A ray in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// A marker hit: which marker in the probed set, and at what distance along
/// the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerHit {
    pub index: usize,
    pub distance: f32,
}

/// Normalize screen coordinates to device coordinates in [-1, 1] on both
/// axes, with y pointing up.
pub fn ndc_from_screen(cursor: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x / viewport.x) * 2.0 - 1.0,
        -(cursor.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Nearest non-negative intersection distance of a ray with a sphere.
pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_discriminant = discriminant.sqrt();
    let near = -b - sqrt_discriminant;
    let far = -b + sqrt_discriminant;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Ray origin inside the sphere.
        Some(far)
    } else {
        None
    }
}

/// Intersect a ray against the marker point set only, returning the nearest
/// hit. Overlapping markers tie-break on distance along the ray.
pub fn pick_marker(ray: &Ray, positions: &[Vec3], radius: f32) -> Option<MarkerHit> {
    let mut best: Option<MarkerHit> = None;
    for (index, &center) in positions.iter().enumerate() {
        if let Some(distance) = ray_sphere_intersection(ray, center, radius) {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(MarkerHit { index, distance });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners_and_center() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(ndc_from_screen(Vec2::ZERO, viewport), Vec2::new(-1.0, 1.0));
        assert_eq!(
            ndc_from_screen(Vec2::new(800.0, 600.0), viewport),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            ndc_from_screen(Vec2::new(400.0, 300.0), viewport),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_ray_hits_sphere_head_on() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let distance = ray_sphere_intersection(&ray, Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
        assert!((distance - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_misses_sphere() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(
            ray_sphere_intersection(&ray, Vec3::new(3.0, 0.0, 5.0), 1.0),
            None
        );
    }

    #[test]
    fn test_sphere_behind_ray_is_ignored() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(
            ray_sphere_intersection(&ray, Vec3::new(0.0, 0.0, -5.0), 1.0),
            None
        );
    }

    #[test]
    fn test_origin_inside_sphere() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let distance = ray_sphere_intersection(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!((distance - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_pick_single_marker() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let positions = [
            Vec3::new(5.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(-5.0, 0.0, 3.0),
        ];
        let hit = pick_marker(&ray, &positions, 0.5).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_pick_nothing() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let positions = [Vec3::new(5.0, 0.0, 3.0)];
        assert_eq!(pick_marker(&ray, &positions, 0.5), None);
    }

    #[test]
    fn test_pick_tie_breaks_on_nearest() {
        // Two markers stacked along the same ray: the nearer one wins.
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let positions = [Vec3::new(0.0, 0.0, 8.0), Vec3::new(0.0, 0.0, 3.0)];
        let hit = pick_marker(&ray, &positions, 0.5).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.distance - 2.5).abs() < 1e-6);
    }
}
