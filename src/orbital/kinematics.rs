//! Closed-form circular orbit kinematics.
//!
//! Every function here is pure: the same simulation time and body always
//! resolve to the same position and spin.

use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::bodies::{Body, BodyRegistry};

/// Orbit angle in radians at simulation time `t`
pub fn orbit_angle(t: f64, body: &Body) -> f64 {
    t * f64::from(body.orbit_speed.unwrap_or(0.0))
}

/// Horizontal offset of `body` from its orbit center at time `t`.
///
/// Zero for bodies without an orbit radius.
pub fn orbit_offset(t: f64, body: &Body) -> Vec3 {
    let Some(radius) = body.orbit_radius else {
        return Vec3::ZERO;
    };
    let (sin, cos) = orbit_angle(t, body).sin_cos();
    let radius = f64::from(radius);
    Vec3::new((cos * radius) as f32, 0.0, (sin * radius) as f32)
}

/// Position of a body that has no parent.
///
/// Stationary bodies stay at their base position. Root orbits circle the
/// origin in the horizontal plane, lifted to the base position's height.
pub fn root_position(t: f64, body: &Body) -> Vec3 {
    if body.orbit_radius.is_none() {
        return body.base_position;
    }
    let offset = orbit_offset(t, body);
    Vec3::new(offset.x, body.base_position.y, offset.z)
}

/// Resolve the world position of `body` at simulation time `t`.
///
/// Child bodies orbit the resolved position of their parent. Registry
/// validation guarantees the parent exists and has no parent of its own.
pub fn resolve_position(t: f64, body: &Body, registry: &BodyRegistry) -> Vec3 {
    let Some(parent_id) = body.parent.as_deref() else {
        return root_position(t, body);
    };
    let center = registry
        .get(parent_id)
        .map_or(Vec3::ZERO, |parent| root_position(t, parent));
    center + orbit_offset(t, body)
}

/// Spin angle about the vertical axis at simulation time `t`, in `[0, TAU)`.
///
/// Spin follows simulation time, so it freezes together with the orbits when
/// the time speed is zero.
pub fn spin_angle(t: f64, body: &Body) -> f32 {
    (t * f64::from(body.rotation_speed)).rem_euclid(TAU) as f32
}
