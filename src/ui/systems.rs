//! UI systems for the egui interface

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::BodyRegistry;
use crate::orbital::SimulationClock;
use crate::ui::panels::{render_control_panel, render_info_panel};
use crate::ui::state::{Selection, SettingUpdate, SimulationSettings, UIState};

const CONTROL_PANEL_WIDTH: f32 = 260.0;
const INFO_PANEL_WIDTH: f32 = 300.0;

/// Main UI system that renders all the egui panels.
///
/// Settings are never written here: the panel edits a copy and the
/// differences go out as [`SettingUpdate`] messages.
pub fn ui_system(
    mut contexts: EguiContexts,
    registry: Res<BodyRegistry>,
    settings: Res<SimulationSettings>,
    clock: Res<SimulationClock>,
    mut state: ResMut<UIState>,
    mut selection: ResMut<Selection>,
    mut updates: MessageWriter<SettingUpdate>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let mut edited = settings.clone();
    if state.show_control_panel {
        egui::SidePanel::left("control_panel")
            .resizable(false)
            .default_width(CONTROL_PANEL_WIDTH)
            .show(ctx, |ui| {
                render_control_panel(
                    ui,
                    registry.name(),
                    registry.description(),
                    &mut edited,
                    &mut state,
                    &clock,
                );
            });
    }
    updates.write_batch(settings.diff(&edited));

    let mut dismissed = false;
    if let Some(body) = selection.body() {
        egui::SidePanel::right("info_panel")
            .resizable(false)
            .default_width(INFO_PANEL_WIDTH)
            .show(ctx, |ui| {
                dismissed = render_info_panel(ui, body);
            });
    }
    if dismissed {
        info!("Selection cleared");
        selection.clear();
    }
}

/// Keyboard shortcuts: O orbits, L labels, Space pause, Escape deselect,
/// H control panel
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<SimulationSettings>,
    mut state: ResMut<UIState>,
    mut selection: ResMut<Selection>,
    mut updates: MessageWriter<SettingUpdate>,
) {
    if keys.just_pressed(KeyCode::KeyO) {
        updates.write(SettingUpdate::ShowOrbits(!settings.show_orbits));
    }
    if keys.just_pressed(KeyCode::KeyL) {
        updates.write(SettingUpdate::ShowLabels(!settings.show_labels));
    }
    if keys.just_pressed(KeyCode::Space) {
        let speed = state.toggle_pause(settings.time_speed);
        updates.write(SettingUpdate::TimeSpeed(speed));
    }
    if keys.just_pressed(KeyCode::Escape) && selection.body().is_some() {
        info!("Selection cleared");
        selection.clear();
    }
    if keys.just_pressed(KeyCode::KeyH) {
        state.show_control_panel = !state.show_control_panel;
    }
}
