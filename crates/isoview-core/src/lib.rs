//! Isoview Core - Framing, marker, and navigation math for the Isoview 3D viewer
//!
//! This crate provides the engine-independent logic of the viewer:
//! - Axis-aligned bounding volumes for loaded scenes
//! - The isometric camera framing algorithm
//! - Point-of-interest marker placement
//! - Orbit navigation state with damping
//! - Pointer ray casting and marker hit-testing
//! - Auto-rotation (turntable) state
//! - TOML configuration loading

pub mod bounds;
pub mod config;
pub mod framing;
pub mod markers;
pub mod orbit;
pub mod picking;
pub mod turntable;

pub use bounds::Aabb;
pub use config::{ConfigError, ViewerConfig};
pub use framing::{frame_isometric, CameraFrame};
pub use markers::{marker_set, Marker, MarkerLabels, MARKER_RADIUS};
pub use orbit::{OrbitSettings, OrbitState};
pub use picking::{ndc_from_screen, pick_marker, ray_sphere_intersection, MarkerHit, Ray};
pub use turntable::Turntable;
