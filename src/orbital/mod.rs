//! Orbital mechanics module
//!
//! This module handles the closed-form orbit model and the simulation clock
//! that drives it.

use bevy::prelude::*;

pub mod kinematics;
pub mod time;

pub use kinematics::{resolve_position, spin_angle};
pub use time::SimulationClock;

use crate::scene::FrameSystems;

/// Plugin for the simulation clock
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, time::advance_simulation_clock.in_set(FrameSystems::Advance));
    }
}
