//! Scene bootstrap and per-frame navigation
//!
//! Constructs the camera and lighting once at startup, then drives the orbit
//! navigation state, auto-rotation, and pointer/viewport tracking every frame.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use isoview_core::framing::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

use crate::app::{AutoRotate, Navigation, PointerState, Settings, ViewportSize};
use crate::models::ModelRoot;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (
                track_viewport,
                track_pointer,
                orbit_input,
                apply_camera,
                rotate_model,
            )
                .chain(),
        );
    }
}

fn setup_scene(mut commands: Commands, settings: Res<Settings>, asset_server: Res<AssetServer>) {
    let camera = commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: CAMERA_FOV_DEGREES.to_radians(),
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                ..default()
            }),
            Tonemapping::AcesFitted,
            Transform::from_xyz(0.7, 0.5, 0.7).looking_at(Vec3::ZERO, Vec3::Y),
            MainCamera,
        ))
        .id();

    // Image-based environment lighting when both maps are configured.
    let asset = &settings.0.asset;
    if let (Some(diffuse), Some(specular)) = (
        asset.environment_diffuse.as_ref(),
        asset.environment_specular.as_ref(),
    ) {
        commands.entity(camera).insert(EnvironmentMapLight {
            diffuse_map: asset_server.load(diffuse),
            specular_map: asset_server.load(specular),
            intensity: 900.0,
            ..default()
        });
    }

    // Soft ambient fill so unlit areas stay readable without environment maps.
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.95, 1.0),
        brightness: 200.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 5000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Keep the tracked viewport dimensions synchronized with the window.
fn track_viewport(windows: Query<&Window>, mut viewport: ResMut<ViewportSize>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    if (viewport.width - width).abs() > f32::EPSILON
        || (viewport.height - height).abs() > f32::EPSILON
    {
        viewport.width = width;
        viewport.height = height;
    }
}

/// Record the latest pointer position for per-frame consumption.
fn track_pointer(mut cursor_moved: EventReader<CursorMoved>, mut pointer: ResMut<PointerState>) {
    for cursor in cursor_moved.read() {
        pointer.0 = Some(cursor.position);
    }
}

/// Translate pointer/touch/wheel input into orbit state mutations.
fn orbit_input(
    mut nav: ResMut<Navigation>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut contexts: bevy_egui::EguiContexts,
) {
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    if egui_wants_pointer {
        // Drain scroll events even when the UI consumes the pointer.
        for _ in mouse_wheel.read() {}
        return;
    }

    let settings = nav.settings;

    if mouse_button.pressed(MouseButton::Left) && total_motion != Vec2::ZERO {
        nav.state.apply_orbit(total_motion, &settings);
    }

    if mouse_button.pressed(MouseButton::Right) && total_motion != Vec2::ZERO {
        nav.state.apply_pan(total_motion, &settings);
    }

    for scroll in mouse_wheel.read() {
        nav.state.apply_zoom(scroll.y, &settings);
    }

    // Single-finger orbit on touch screens.
    if touch_input.iter().count() == 1 {
        for touch in touch_input.iter() {
            let delta = touch.delta();
            if delta != Vec2::ZERO {
                nav.state.apply_orbit(delta, &settings);
            }
        }
    }

    // Pinch to zoom.
    if touch_input.iter().count() == 2 {
        let touches: Vec<_> = touch_input.iter().collect();
        if let (Some(t1), Some(t2)) = (touches.first(), touches.get(1)) {
            let curr_dist = t1.position().distance(t2.position());
            let prev_dist = (t1.position() - t1.delta()).distance(t2.position() - t2.delta());
            if curr_dist > 1.0 {
                let steps = (curr_dist - prev_dist) * 0.1;
                nav.state.apply_zoom(steps, &settings);
            }
        }
    }
}

/// Advance the damping state by one step and place the camera.
fn apply_camera(
    time: Res<Time>,
    mut nav: ResMut<Navigation>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let settings = nav.settings;
    let frame = nav.state.update(time.delta_secs(), &settings);
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    transform.translation = frame.position;
    transform.look_at(frame.target, Vec3::Y);
}

/// Yaw the loaded model while auto-rotation is enabled. The increment is
/// time-based so the visual speed is independent of the refresh rate.
fn rotate_model(
    time: Res<Time>,
    auto_rotate: Res<AutoRotate>,
    mut roots: Query<&mut Transform, With<ModelRoot>>,
) {
    let yaw = auto_rotate.0.step(time.delta_secs());
    if yaw == 0.0 {
        return;
    }
    for mut transform in roots.iter_mut() {
        transform.rotate_y(yaw);
    }
}
