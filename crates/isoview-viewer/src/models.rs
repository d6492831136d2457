//! glTF asset loading, framing, and load lifecycle

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::camera::primitives::MeshAabb;
use bevy::scene::SceneInstance;

use isoview_core::{frame_isometric, Aabb};

use crate::app::{Navigation, Settings};

/// Marker component for the root entity of the loaded asset. Markers are
/// parented under it so auto-rotation carries them along.
#[derive(Component)]
pub struct ModelRoot;

/// Load lifecycle of the configured asset. Exactly one load is issued per
/// viewer instance.
#[derive(Debug, Resource)]
pub enum ModelLoad {
    /// Load in flight. The handle keeps the request alive; dropping it on
    /// teardown aborts the load.
    Loading(Handle<Gltf>),
    /// Scene spawned, waiting for mesh data before framing the camera.
    Spawning,
    Ready,
    /// Surfaced to the UI layer; the viewer does not retry.
    Failed(String),
}

/// Bounding box of the loaded asset, computed once per load and never
/// recomputed on resize.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SceneBounds(pub Aabb);

pub struct ModelsPlugin;

impl Plugin for ModelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, begin_load)
            .add_systems(Update, (poll_load, frame_scene).chain());
    }
}

/// Issue the single asynchronous asset load.
fn begin_load(mut commands: Commands, settings: Res<Settings>, asset_server: Res<AssetServer>) {
    let path = settings.0.asset.path.clone();
    tracing::info!(path = %path, "Loading model");
    let handle: Handle<Gltf> = asset_server.load(&path);
    commands.insert_resource(ModelLoad::Loading(handle));
}

/// Poll the in-flight load; spawn the scene on success, record the failure
/// otherwise.
fn poll_load(
    mut commands: Commands,
    mut load: ResMut<ModelLoad>,
    asset_server: Res<AssetServer>,
    gltf_assets: Res<Assets<Gltf>>,
) {
    let ModelLoad::Loading(handle) = &*load else {
        return;
    };

    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => {
            let Some(gltf) = gltf_assets.get(handle) else {
                return;
            };
            let scene_handle = gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned());
            match scene_handle {
                Some(scene) => {
                    tracing::info!("Model loaded, spawning scene");
                    commands.spawn((
                        SceneRoot(scene),
                        Transform::default(),
                        Visibility::default(),
                        ModelRoot,
                    ));
                    *load = ModelLoad::Spawning;
                }
                None => {
                    tracing::error!("Loaded asset contains no scenes");
                    *load = ModelLoad::Failed("asset contains no scenes".to_string());
                }
            }
        }
        Some(LoadState::Failed(err)) => {
            tracing::error!(error = %err, "Failed to load model");
            *load = ModelLoad::Failed(err.to_string());
        }
        _ => {
            // Still loading.
        }
    }
}

/// Unit-cube corner offsets used to expand a local mesh box into world space.
const CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Once the spawned scene is ready, compute its bounding volume and frame the
/// isometric view. Runs exactly once per load.
fn frame_scene(
    mut commands: Commands,
    mut load: ResMut<ModelLoad>,
    mut nav: ResMut<Navigation>,
    scene_spawner: Res<SceneSpawner>,
    instances: Query<&SceneInstance, With<ModelRoot>>,
    mesh_query: Query<(&Mesh3d, &GlobalTransform)>,
    meshes: Res<Assets<Mesh>>,
    mut settle_frames: Local<u32>,
) {
    if !matches!(*load, ModelLoad::Spawning) {
        return;
    }
    let Ok(instance) = instances.single() else {
        return;
    };
    if !scene_spawner.instance_is_ready(**instance) {
        *settle_frames = 0;
        return;
    }
    // Global transforms propagate the frame after the instance spawns; wait
    // one extra frame so the corner points below are in world space.
    *settle_frames += 1;
    if *settle_frames < 2 {
        return;
    }

    let mut points = Vec::new();
    for (mesh3d, global) in mesh_query.iter() {
        let Some(mesh) = meshes.get(&mesh3d.0) else {
            continue;
        };
        let Some(aabb) = mesh.compute_aabb() else {
            continue;
        };
        let center = Vec3::from(aabb.center);
        let half = Vec3::from(aabb.half_extents);
        for corner in CORNERS {
            points.push(global.transform_point(center + half * corner));
        }
    }

    let bounds = Aabb::from_points(points);
    match frame_isometric(bounds) {
        Some(frame) => {
            let settings = nav.settings;
            nav.state.look_from(&frame, &settings);
            tracing::info!(center = ?frame.target, "Model framed");
        }
        None => {
            // Empty bounding volume: framing is a no-op and the camera keeps
            // its prior transform.
            tracing::warn!("Loaded scene has no mesh bounds, skipping framing");
        }
    }
    if let Some(bounds) = bounds {
        commands.insert_resource(SceneBounds(bounds));
    }
    *load = ModelLoad::Ready;
}
