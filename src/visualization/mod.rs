//! Visualization module
//!
//! This module spawns the renderable entities (bodies, labels, lights,
//! starfield) and keeps them in step with the current scene frame.

use bevy::prelude::*;

pub mod bodies;
pub mod labels;
pub mod lighting;
pub mod orbits;
pub mod starfield;

pub use bodies::CelestialBody;

use crate::scene::{FrameSystems, compose_scene};

/// Plugin for rendering the composed scene
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                bodies::spawn_bodies.after(compose_scene),
                labels::spawn_labels,
                lighting::spawn_lights,
                starfield::spawn_starfield,
            ),
        )
        .add_systems(
            Update,
            (
                bodies::sync_body_transforms,
                labels::sync_labels,
                orbits::draw_orbit_guides,
                lighting::apply_lighting,
            )
                .in_set(FrameSystems::Sync),
        );
    }
}
