//! Simulation clock

use bevy::prelude::*;

use crate::ui::state::SimulationSettings;

/// Simulation time added per rendered frame at a time speed of 1.0
pub const FRAME_INCREMENT: f64 = 1.0;

/// Simulation clock resource.
///
/// Advances once per rendered frame by `time_speed * frame_increment`. It is
/// never reset during a session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationClock {
    time: f64,
    frames: u64,
    frame_increment: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::with_frame_increment(FRAME_INCREMENT)
    }
}

impl SimulationClock {
    pub fn with_frame_increment(frame_increment: f64) -> Self {
        Self {
            time: 0.0,
            frames: 0,
            frame_increment,
        }
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of frames advanced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance by one frame at `time_speed`.
    ///
    /// Negative speeds are applied as given and run time backwards.
    pub fn advance(&mut self, time_speed: f32) {
        self.time += f64::from(time_speed) * self.frame_increment;
        self.frames += 1;
    }
}

/// System to advance the simulation clock by one frame
pub fn advance_simulation_clock(
    settings: Res<SimulationSettings>,
    mut clock: ResMut<SimulationClock>,
) {
    clock.advance(settings.time_speed);
}
