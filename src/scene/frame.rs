//! Per-frame scene description.
//!
//! [`compose_frame`] turns the registry, the current simulation time and the
//! display settings into a [`SceneFrame`]: positioned body instances, labels,
//! orbit guides and light levels. Rendering systems only ever read it.

use std::collections::HashMap;
use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::bodies::BodyRegistry;
use crate::orbital::{resolve_position, spin_angle};
use crate::ui::state::SimulationSettings;

/// Vertical clearance between a body's surface and its label
pub const LABEL_GAP: f32 = 1.0;
/// Line segments in one orbit guide
pub const ORBIT_SEGMENTS: usize = 64;

/// One visual instance per body
#[derive(Clone, Debug, PartialEq)]
pub struct BodyInstance {
    pub body_id: String,
    pub position: Vec3,
    /// Rotation about the vertical axis, radians
    pub spin: f32,
    pub radius: f32,
    pub color: Color,
    pub luminous: bool,
    pub has_atmosphere: bool,
    pub has_flares: bool,
}

impl BodyInstance {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(Quat::from_rotation_y(self.spin))
    }
}

/// Text label floating above a body
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub body_id: String,
    pub text: String,
    /// World-space point the label is pinned to
    pub anchor: Vec3,
}

/// Closed circular guide lying flat in the horizontal plane
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitGuide {
    pub body_id: String,
    pub center: Vec3,
    pub radius: f32,
    pub segments: usize,
}

impl OrbitGuide {
    /// Polyline vertices; the last point repeats the first to close the loop.
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..=self.segments).map(move |i| {
            let angle = TAU * i as f32 / self.segments as f32;
            self.center + Vec3::new(angle.cos() * self.radius, 0.0, angle.sin() * self.radius)
        })
    }
}

/// Light levels for the frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub point_intensity: f32,
}

/// Everything the renderer needs for one frame
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct SceneFrame {
    /// Simulation time every position in this frame was resolved at
    pub time: f64,
    pub instances: Vec<BodyInstance>,
    pub labels: Vec<Label>,
    pub orbits: Vec<OrbitGuide>,
    pub lighting: Lighting,
}

impl SceneFrame {
    pub fn instance(&self, body_id: &str) -> Option<&BodyInstance> {
        self.instances.iter().find(|i| i.body_id == body_id)
    }

    pub fn label(&self, body_id: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.body_id == body_id)
    }
}

/// Compose the scene for simulation time `t`.
///
/// All positions come from the same `t`. Root orbit guides are centered on
/// the vertical axis at the body's base height; child guides follow the
/// parent's position in this frame.
pub fn compose_frame(registry: &BodyRegistry, t: f64, settings: &SimulationSettings) -> SceneFrame {
    let positions: HashMap<&str, Vec3> = registry
        .iter()
        .map(|body| (body.id.as_str(), resolve_position(t, body, registry)))
        .collect();

    let mut frame = SceneFrame {
        time: t,
        lighting: Lighting {
            ambient_intensity: settings.ambient_light_intensity,
            point_intensity: settings.point_light_intensity,
        },
        ..default()
    };

    for body in registry.iter() {
        let position = positions[body.id.as_str()];

        frame.instances.push(BodyInstance {
            body_id: body.id.clone(),
            position,
            spin: spin_angle(t, body),
            radius: body.radius,
            color: body.color,
            luminous: body.emissive,
            has_atmosphere: body.has_atmosphere,
            has_flares: body.has_flares,
        });

        if settings.show_labels {
            frame.labels.push(Label {
                body_id: body.id.clone(),
                text: body.name.clone(),
                anchor: position + Vec3::Y * (body.radius + LABEL_GAP),
            });
        }

        if settings.show_orbits
            && let Some(radius) = body.orbit_radius
        {
            let center = match body.parent.as_deref() {
                Some(parent) => positions.get(parent).copied().unwrap_or(Vec3::ZERO),
                None => Vec3::new(0.0, body.base_position.y, 0.0),
            };
            frame.orbits.push(OrbitGuide {
                body_id: body.id.clone(),
                center,
                radius,
                segments: ORBIT_SEGMENTS,
            });
        }
    }

    frame
}
