//! UI overlays using bevy_egui
//!
//! One floating rotation toggle, the hover label that follows the pointer,
//! and the load lifecycle indicator. Everything is immediate mode, so labels
//! never outlive the frame that produced them.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::app::{AutoRotate, HoveredMarker};
use crate::models::ModelLoad;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, ui_system);
    }
}

fn ui_system(
    mut contexts: EguiContexts,
    mut auto_rotate: ResMut<AutoRotate>,
    hovered: Res<HoveredMarker>,
    load: Res<ModelLoad>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    // Floating rotation toggle; the fill reflects the current state.
    egui::Area::new(egui::Id::new("rotate_toggle"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            let fill = if auto_rotate.0.enabled {
                egui::Color32::from_rgb(227, 227, 227)
            } else {
                egui::Color32::from_rgb(150, 150, 150)
            };
            let button = egui::Button::new(
                egui::RichText::new("⟳")
                    .size(20.0)
                    .color(egui::Color32::BLACK),
            )
            .fill(fill)
            .min_size(egui::vec2(40.0, 40.0));
            if ui.add(button).clicked() {
                auto_rotate.0.toggle();
            }
        });

    // Hover label pinned next to the pointer.
    if let Some(hover) = &hovered.0 {
        egui::Area::new(egui::Id::new("marker_label"))
            .fixed_pos(egui::pos2(hover.screen_pos.x + 12.0, hover.screen_pos.y + 12.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(&hover.label);
                });
            });
    }

    // Load lifecycle: spinner while loading, banner on failure.
    match &*load {
        ModelLoad::Loading(_) | ModelLoad::Spawning => {
            egui::Area::new(egui::Id::new("load_state"))
                .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading model…");
                    });
                });
        }
        ModelLoad::Failed(error) => {
            egui::TopBottomPanel::top("load_error").show(ctx, |ui| {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 100, 100),
                    format!("Failed to load model: {error}"),
                );
            });
        }
        ModelLoad::Ready => {}
    }
}
