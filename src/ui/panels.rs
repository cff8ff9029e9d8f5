//! UI panel components and utilities
use bevy::prelude::*;
use bevy_egui::egui::{self, Color32};

use crate::bodies::Body;
use crate::orbital::SimulationClock;
use crate::ui::state::{SimulationSettings, UIState};

const TIME_SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.0..=5.0;
const TIME_SPEED_STEP: f64 = 0.1;
const CAMERA_DISTANCE_RANGE: std::ops::RangeInclusive<f32> = 10.0..=300.0;

/// Convert Bevy Color to egui Color32
fn bevy_to_egui_color(color: Color) -> Color32 {
    let srgba = color.to_srgba();
    Color32::from_rgb(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
    )
}

/// Settings controls. Edits go into `settings`, which the caller diffs
/// against the live resource.
pub fn render_control_panel(
    ui: &mut egui::Ui,
    system_name: &str,
    system_description: &str,
    settings: &mut SimulationSettings,
    state: &mut UIState,
    clock: &SimulationClock,
) {
    ui.heading(system_name);
    if !system_description.is_empty() {
        ui.label(egui::RichText::new(system_description).small());
    }

    ui.separator();
    ui.heading("Time");
    ui.add(
        egui::Slider::new(&mut settings.time_speed, TIME_SPEED_RANGE)
            .step_by(TIME_SPEED_STEP)
            .text("Speed"),
    );
    ui.horizontal(|ui| {
        let label = if settings.time_speed == 0.0 {
            "Resume"
        } else {
            "Pause"
        };
        if ui.button(label).clicked() {
            settings.time_speed = state.toggle_pause(settings.time_speed);
        }
        if ui.button("1x").clicked() {
            settings.time_speed = 1.0;
        }
    });
    ui.label(format!("t = {:.0} (frame {})", clock.time(), clock.frames()));

    ui.separator();
    ui.heading("Display");
    ui.checkbox(&mut settings.show_orbits, "Show orbits (O)");
    ui.checkbox(&mut settings.show_labels, "Show labels (L)");
    ui.add(
        egui::Slider::new(&mut settings.camera_distance, CAMERA_DISTANCE_RANGE)
            .text("Camera distance"),
    );

    ui.separator();
    ui.heading("Lighting");
    ui.add(egui::Slider::new(&mut settings.ambient_light_intensity, 0.0..=1.0).text("Ambient"));
    ui.add(egui::Slider::new(&mut settings.point_light_intensity, 0.0..=5.0).text("Sun"));

    ui.separator();
    ui.label(egui::RichText::new("Space: pause  Esc: deselect  H: hide panel").weak());
}

/// Details for the selected body. Returns true when the user closed it.
pub fn render_info_panel(ui: &mut egui::Ui, body: &Body) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("●")
                .color(bevy_to_egui_color(body.color))
                .size(18.0),
        );
        ui.heading(&body.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").clicked() {
                close = true;
            }
        });
    });
    ui.label(egui::RichText::new(body.kind.label()).weak());

    ui.separator();
    if !body.description.is_empty() {
        ui.label(&body.description);
    }

    if !body.facts.is_empty() {
        ui.add_space(6.0);
        ui.strong("Facts");
        for fact in &body.facts {
            ui.label(format!("• {}", fact));
        }
    }
    close
}
