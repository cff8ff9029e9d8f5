//! User interface module
//!
//! This module handles settings and selection state, panels, and systems for
//! the egui-based user interface.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub mod panels;
pub mod state;
pub mod systems;

pub use state::StatePlugin;

use crate::scene::FrameSystems;

/// Plugin for the egui panels and keyboard shortcuts
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, systems::ui_system)
            .add_systems(Update, systems::keyboard_shortcuts.before(FrameSystems::Advance));
    }
}
