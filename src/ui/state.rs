//! Settings and selection state

use bevy::prelude::*;
use serde::Deserialize;

use crate::bodies::Body;

/// Display and simulation settings resource.
///
/// Written only by [`SettingUpdate`] messages, read every frame by the clock
/// and the scene composer.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Multiplier on simulation time per frame
    pub time_speed: f32,
    pub show_orbits: bool,
    pub show_labels: bool,
    pub camera_distance: f32,
    pub ambient_light_intensity: f32,
    pub point_light_intensity: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            time_speed: 1.0,
            show_orbits: true,
            show_labels: true,
            camera_distance: 80.0,
            ambient_light_intensity: 0.2,
            point_light_intensity: 1.5,
        }
    }
}

/// A change to exactly one settings field
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum SettingUpdate {
    TimeSpeed(f32),
    ShowOrbits(bool),
    ShowLabels(bool),
    CameraDistance(f32),
    AmbientLightIntensity(f32),
    PointLightIntensity(f32),
}

impl SimulationSettings {
    /// Merge one field. Values are taken as given, including zero or negative
    /// time speeds.
    pub fn apply(&mut self, update: SettingUpdate) {
        match update {
            SettingUpdate::TimeSpeed(v) => self.time_speed = v,
            SettingUpdate::ShowOrbits(v) => self.show_orbits = v,
            SettingUpdate::ShowLabels(v) => self.show_labels = v,
            SettingUpdate::CameraDistance(v) => self.camera_distance = v,
            SettingUpdate::AmbientLightIntensity(v) => self.ambient_light_intensity = v,
            SettingUpdate::PointLightIntensity(v) => self.point_light_intensity = v,
        }
    }

    /// Updates that turn `self` into `edited`, one per changed field
    pub fn diff(&self, edited: &SimulationSettings) -> Vec<SettingUpdate> {
        let mut updates = Vec::new();
        if self.time_speed != edited.time_speed {
            updates.push(SettingUpdate::TimeSpeed(edited.time_speed));
        }
        if self.show_orbits != edited.show_orbits {
            updates.push(SettingUpdate::ShowOrbits(edited.show_orbits));
        }
        if self.show_labels != edited.show_labels {
            updates.push(SettingUpdate::ShowLabels(edited.show_labels));
        }
        if self.camera_distance != edited.camera_distance {
            updates.push(SettingUpdate::CameraDistance(edited.camera_distance));
        }
        if self.ambient_light_intensity != edited.ambient_light_intensity {
            updates.push(SettingUpdate::AmbientLightIntensity(edited.ambient_light_intensity));
        }
        if self.point_light_intensity != edited.point_light_intensity {
            updates.push(SettingUpdate::PointLightIntensity(edited.point_light_intensity));
        }
        updates
    }
}

/// The body currently shown in the info panel
#[derive(Resource, Default, Debug, Clone)]
pub struct Selection {
    body: Option<Body>,
}

impl Selection {
    /// Replace the selection
    pub fn select(&mut self, body: Option<Body>) {
        self.body = body;
    }

    /// Dismiss the info panel
    pub fn clear(&mut self) {
        self.body = None;
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }
}

/// Panel visibility and pause bookkeeping
#[derive(Resource)]
pub struct UIState {
    pub show_control_panel: bool,
    /// Time speed restored when resuming from pause
    pub resume_speed: f32,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            show_control_panel: true,
            resume_speed: 1.0,
        }
    }
}

impl UIState {
    /// Time speed that toggles pause from `current`.
    ///
    /// Pausing remembers the running speed so resuming restores it.
    pub fn toggle_pause(&mut self, current: f32) -> f32 {
        if current != 0.0 {
            self.resume_speed = current;
            0.0
        } else if self.resume_speed != 0.0 {
            self.resume_speed
        } else {
            1.0
        }
    }
}

/// Apply queued setting updates before the frame's systems run
pub fn apply_setting_updates(
    mut updates: MessageReader<SettingUpdate>,
    mut settings: ResMut<SimulationSettings>,
) {
    for update in updates.read() {
        debug!("Applying setting update: {:?}", update);
        settings.apply(*update);
    }
}

/// Plugin for settings and selection state
pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationSettings>()
            .init_resource::<Selection>()
            .init_resource::<UIState>()
            .add_message::<SettingUpdate>()
            .add_systems(PreUpdate, apply_setting_updates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::registry::test_support::body;

    #[test]
    fn test_apply_merges_single_field() {
        let mut settings = SimulationSettings::default();
        settings.apply(SettingUpdate::ShowOrbits(false));
        assert!(!settings.show_orbits);
        assert_eq!(
            settings,
            SimulationSettings {
                show_orbits: false,
                ..SimulationSettings::default()
            }
        );
    }

    #[test]
    fn test_apply_accepts_unusual_time_speed() {
        let mut settings = SimulationSettings::default();
        settings.apply(SettingUpdate::TimeSpeed(0.0));
        assert_eq!(settings.time_speed, 0.0);
        settings.apply(SettingUpdate::TimeSpeed(-2.0));
        assert_eq!(settings.time_speed, -2.0);
    }

    #[test]
    fn test_diff_round_trips_edits() {
        let base = SimulationSettings::default();
        let edited = SimulationSettings {
            time_speed: 3.0,
            show_labels: false,
            point_light_intensity: 0.5,
            ..base.clone()
        };
        let updates = base.diff(&edited);
        assert_eq!(
            updates,
            vec![
                SettingUpdate::TimeSpeed(3.0),
                SettingUpdate::ShowLabels(false),
                SettingUpdate::PointLightIntensity(0.5),
            ]
        );

        let mut patched = base.clone();
        for update in updates {
            patched.apply(update);
        }
        assert_eq!(patched, edited);
        assert!(edited.diff(&edited).is_empty());
    }

    #[test]
    fn test_selection_replace_and_clear() {
        let mut selection = Selection::default();
        assert!(selection.body().is_none());

        selection.select(Some(body("mercury")));
        assert_eq!(selection.body().map(|b| b.id.as_str()), Some("mercury"));

        selection.select(Some(body("venus")));
        assert_eq!(selection.body().map(|b| b.id.as_str()), Some("venus"));

        selection.clear();
        assert!(selection.body().is_none());
    }

    #[test]
    fn test_pause_toggle_restores_speed() {
        let mut ui_state = UIState::default();
        let paused = ui_state.toggle_pause(2.5);
        assert_eq!(paused, 0.0);
        assert_eq!(ui_state.toggle_pause(paused), 2.5);
    }

    #[test]
    fn test_setting_messages_applied_in_pre_update() {
        let mut app = App::new();
        app.add_plugins(StatePlugin);
        app.world_mut().write_message(SettingUpdate::ShowLabels(false));
        app.world_mut().write_message(SettingUpdate::TimeSpeed(4.0));
        app.update();

        let settings = app.world().resource::<SimulationSettings>();
        assert!(!settings.show_labels);
        assert_eq!(settings.time_speed, 4.0);
    }
}
