//! Bevy application setup

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_picking::{prelude::MeshPickingPlugin, DefaultPickingPlugins};

use isoview_core::{OrbitSettings, OrbitState, Turntable, ViewerConfig};

use crate::markers::MarkersPlugin;
use crate::models::ModelsPlugin;
use crate::scene::ScenePlugin;
use crate::ui::UiPlugin;

/// Viewer configuration made available to systems.
#[derive(Debug, Clone, Resource)]
pub struct Settings(pub ViewerConfig);

/// Orbit navigation state and its fixed parameters.
#[derive(Debug, Clone, Copy, Resource, Default)]
pub struct Navigation {
    pub state: OrbitState,
    pub settings: OrbitSettings,
}

/// Auto-rotation toggle state.
#[derive(Debug, Clone, Copy, Resource, Default)]
pub struct AutoRotate(pub Turntable);

/// Last known pointer position in window coordinates. Overwritten on every
/// pointer-move, consumed once per frame by the hover hit-test.
#[derive(Debug, Clone, Copy, Resource, Default)]
pub struct PointerState(pub Option<Vec2>);

/// Window dimensions tracked explicitly so the pointer normalization math
/// stays a pure function of recorded state.
#[derive(Debug, Clone, Copy, Resource)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl ViewportSize {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// The marker under the pointer this frame, if any. Fully overwritten every
/// frame so at most one label ever exists.
#[derive(Debug, Clone, Resource, Default)]
pub struct HoveredMarker(pub Option<HoverLabel>);

#[derive(Debug, Clone)]
pub struct HoverLabel {
    pub label: String,
    pub screen_pos: Vec2,
}

/// Run the viewer application.
pub fn run(config: ViewerConfig) {
    let [r, g, b] = config.viewer.background;
    App::new()
        .insert_resource(ClearColor(Color::srgb(r, g, b)))
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Isoview".to_string(),
                    canvas: Some("#viewer-canvas".to_string()),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            }),
        )
        // DefaultPickingPlugins provides core picking, MeshPickingPlugin the 3D
        // mesh raycasting backend. Both must be added BEFORE EguiPlugin so it
        // can detect PickingPlugin.
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(MeshPickingPlugin)
        .add_plugins(EguiPlugin::default())
        .insert_resource(AutoRotate(Turntable {
            enabled: config.viewer.auto_rotate,
            ..default()
        }))
        .insert_resource(Settings(config))
        .init_resource::<Navigation>()
        .init_resource::<PointerState>()
        .init_resource::<ViewportSize>()
        .init_resource::<HoveredMarker>()
        .add_plugins(ScenePlugin)
        .add_plugins(ModelsPlugin)
        .add_plugins(MarkersPlugin)
        .add_plugins(UiPlugin)
        .run();
}
