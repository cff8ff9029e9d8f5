//! Scene composition module
//!
//! Builds the per-frame [`SceneFrame`] from the registry, the simulation clock
//! and the display settings, and fixes the order of the frame's systems.

use bevy::prelude::*;

pub mod frame;
pub mod starfield;

pub use frame::{BodyInstance, SceneFrame, compose_frame};
pub use starfield::Starfield;

use crate::bodies::BodyRegistry;
use crate::orbital::SimulationClock;
use crate::ui::state::SimulationSettings;

/// Ordering of the per-frame work inside `Update`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSystems {
    /// Advance the simulation clock
    Advance,
    /// Build the frame's [`SceneFrame`]
    Compose,
    /// Push the frame onto entities, gizmos and UI
    Sync,
}

/// Plugin for scene composition
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSystems::Advance,
                FrameSystems::Compose,
                FrameSystems::Sync,
            )
                .chain(),
        )
        .init_resource::<SceneFrame>()
        .init_resource::<Starfield>()
        .add_systems(Startup, compose_scene)
        .add_systems(Update, compose_scene.in_set(FrameSystems::Compose));
    }
}

/// System to rebuild the scene frame from the current clock and settings
pub fn compose_scene(
    registry: Res<BodyRegistry>,
    clock: Res<SimulationClock>,
    settings: Res<SimulationSettings>,
    mut frame: ResMut<SceneFrame>,
) {
    *frame = compose_frame(&registry, clock.time(), &settings);
}
