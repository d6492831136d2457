//! Point-of-interest markers
//!
//! Three fixed-semantic markers (top, middle, bottom of the loaded model)
//! positioned relative to the asset's bounding box. The set is computed once
//! per loaded asset and never recomputed on resize.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;

/// Radius of the marker spheres, in scene units.
pub const MARKER_RADIUS: f32 = 0.05;

/// A labeled point of interest on the loaded model.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub position: Vec3,
}

/// Human-readable labels for the marker set, overridable in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerLabels {
    #[serde(default = "default_top")]
    pub top: String,
    #[serde(default = "default_middle")]
    pub middle: String,
    #[serde(default = "default_bottom")]
    pub bottom: String,
}

impl Default for MarkerLabels {
    fn default() -> Self {
        Self {
            top: default_top(),
            middle: default_middle(),
            bottom: default_bottom(),
        }
    }
}

fn default_top() -> String {
    "Top of model".to_string()
}

fn default_middle() -> String {
    "Middle of model".to_string()
}

fn default_bottom() -> String {
    "Bottom of model".to_string()
}

/// Derive the marker set from an asset bounding box:
/// top at (max.x/2, max.y, max.z/2), middle at (max.x/2, max.y/2, max.z/2),
/// bottom at (max.x/2, min.y, max.z/2).
pub fn marker_set(bounds: &Aabb, labels: &MarkerLabels) -> [Marker; 3] {
    let x = bounds.max.x / 2.0;
    let z = bounds.max.z / 2.0;
    [
        Marker {
            label: labels.top.clone(),
            position: Vec3::new(x, bounds.max.y, z),
        },
        Marker {
            label: labels.middle.clone(),
            position: Vec3::new(x, bounds.max.y / 2.0, z),
        },
        Marker {
            label: labels.bottom.clone(),
            position: Vec3::new(x, bounds.min.y, z),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_positions_for_known_box() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 2.0));
        let markers = marker_set(&bounds, &MarkerLabels::default());
        assert_eq!(markers[0].position, Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(markers[1].position, Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(markers[2].position, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_marker_labels() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let labels = MarkerLabels {
            top: "crown top".to_string(),
            middle: "crown middle".to_string(),
            bottom: "crown bottom".to_string(),
        };
        let markers = marker_set(&bounds, &labels);
        assert_eq!(markers[0].label, "crown top");
        assert_eq!(markers[1].label, "crown middle");
        assert_eq!(markers[2].label, "crown bottom");
    }

    #[test]
    fn test_markers_use_bottom_from_min_y() {
        // A box that does not start at the origin: bottom tracks min.y, the
        // horizontal placement still derives from the max corner.
        let bounds = Aabb::new(Vec3::new(-2.0, -1.0, -2.0), Vec3::new(4.0, 3.0, 6.0));
        let markers = marker_set(&bounds, &MarkerLabels::default());
        assert_eq!(markers[0].position, Vec3::new(2.0, 3.0, 3.0));
        assert_eq!(markers[1].position, Vec3::new(2.0, 1.5, 3.0));
        assert_eq!(markers[2].position, Vec3::new(2.0, -1.0, 3.0));
    }
}
