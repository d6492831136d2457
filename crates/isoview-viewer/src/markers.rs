//! Point-of-interest markers and hover hit-testing

use bevy::prelude::*;

use isoview_core::{marker_set, ndc_from_screen, pick_marker, Ray, MARKER_RADIUS};

use crate::app::{HoverLabel, HoveredMarker, PointerState, Settings, ViewportSize};
use crate::models::{ModelRoot, SceneBounds};
use crate::scene::MainCamera;

/// A labeled marker sphere on the loaded model.
#[derive(Component)]
pub struct MarkerPoint {
    pub label: String,
}

pub struct MarkersPlugin;

impl Plugin for MarkersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_markers, hover_markers).chain());
    }
}

/// Spawn the marker set once the asset bounds are known. The markers are
/// children of the model root so auto-rotation moves them with the model.
fn spawn_markers(
    mut commands: Commands,
    settings: Res<Settings>,
    bounds: Option<Res<SceneBounds>>,
    roots: Query<Entity, With<ModelRoot>>,
    existing: Query<(), With<MarkerPoint>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !settings.0.viewer.points_of_interest {
        return;
    }
    let Some(bounds) = bounds else {
        return;
    };
    if !existing.is_empty() {
        return;
    }
    let Ok(root) = roots.single() else {
        return;
    };

    let sphere = meshes.add(Sphere::new(MARKER_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 0.0),
        unlit: true,
        ..default()
    });

    for marker in marker_set(&bounds.0, &settings.0.markers) {
        let child = commands
            .spawn((
                Mesh3d(sphere.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(marker.position),
                MarkerPoint {
                    label: marker.label,
                },
            ))
            .id();
        commands.entity(root).add_child(child);
    }
    tracing::info!("Spawned point-of-interest markers");
}

/// Cast a ray through the recorded pointer position and intersect it against
/// the marker set only. The hover result is fully overwritten every frame.
fn hover_markers(
    pointer: Res<PointerState>,
    viewport: Res<ViewportSize>,
    mut hovered: ResMut<HoveredMarker>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    marker_query: Query<(&MarkerPoint, &GlobalTransform)>,
    mut contexts: bevy_egui::EguiContexts,
) {
    hovered.0 = None;

    let Some(cursor) = pointer.0 else {
        return;
    };
    if marker_query.is_empty() {
        return;
    }
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);
    if egui_wants_pointer {
        return;
    }
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    // Pointer position in device coordinates, then a world-space ray through
    // the near and far planes of that pixel.
    let ndc = ndc_from_screen(cursor, viewport.as_vec2());
    let Some(near) = camera.ndc_to_world(camera_transform, ndc.extend(1.0)) else {
        return;
    };
    let Some(far) = camera.ndc_to_world(camera_transform, ndc.extend(f32::EPSILON)) else {
        return;
    };
    let direction = far - near;
    if direction.length_squared() <= f32::EPSILON {
        return;
    }
    let ray = Ray::new(near, direction);

    let mut labels = Vec::new();
    let mut positions = Vec::new();
    for (marker, global) in marker_query.iter() {
        labels.push(marker.label.as_str());
        positions.push(global.translation());
    }

    if let Some(hit) = pick_marker(&ray, &positions, MARKER_RADIUS) {
        hovered.0 = Some(HoverLabel {
            label: labels[hit.index].to_string(),
            screen_pos: cursor,
        });
    }
}
