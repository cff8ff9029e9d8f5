//! Pointer interaction with body instances
//!
//! Clicks resolve the hit entity (or its nearest [`CelestialBody`] ancestor,
//! for atmosphere and corona shells) to a registry id. The full record is put
//! into [`Selection`] and broadcast as [`BodySelected`]. Only primary-button
//! clicks select; the other buttons drive the orbit camera.

use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};

use crate::bodies::{Body, BodyRegistry};
use crate::scene::FrameSystems;
use crate::ui::state::Selection;
use crate::visualization::CelestialBody;

/// A body instance was clicked
#[derive(Message, Clone, Debug, PartialEq)]
pub struct BodyClicked(pub String);

/// A body became the current selection
#[derive(Message, Clone, Debug)]
pub struct BodySelected(pub Body);

/// Plugin for click selection and hover feedback
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BodyClicked>()
            .add_message::<BodySelected>()
            .add_systems(
                Update,
                (
                    (forward_pointer_clicks, apply_body_clicks, log_body_selection).chain(),
                    update_hover_cursor,
                )
                    .before(FrameSystems::Advance),
            );
    }
}

/// Walk up the hierarchy from `entity` to the body it belongs to
fn body_id_for_entity<'a>(
    entity: Entity,
    bodies: &'a Query<&CelestialBody>,
    parents: &Query<&ChildOf>,
) -> Option<&'a str> {
    let mut entity = entity;
    loop {
        if let Ok(body) = bodies.get(entity) {
            return Some(body.id.as_str());
        }
        match parents.get(entity) {
            Ok(parent) => entity = parent.parent(),
            Err(_) => return None,
        }
    }
}

/// Turn primary-button picking clicks on body meshes into [`BodyClicked`]
/// messages
pub fn forward_pointer_clicks(
    mut click_events: MessageReader<Pointer<Click>>,
    bodies: Query<&CelestialBody>,
    parents: Query<&ChildOf>,
    mut clicked: MessageWriter<BodyClicked>,
) {
    for ev in click_events.read() {
        if ev.button != PointerButton::Primary {
            continue;
        }
        if let Some(id) = body_id_for_entity(ev.entity, &bodies, &parents) {
            clicked.write(BodyClicked(id.to_string()));
        }
    }
}

/// Select the clicked body and announce it
pub fn apply_body_clicks(
    mut clicked: MessageReader<BodyClicked>,
    registry: Res<BodyRegistry>,
    mut selection: ResMut<Selection>,
    mut selected: MessageWriter<BodySelected>,
) {
    for BodyClicked(id) in clicked.read() {
        let Some(body) = registry.get(id) else {
            warn!("Clicked body {} is not in the registry", id);
            continue;
        };
        selection.select(Some(body.clone()));
        selected.write(BodySelected(body.clone()));
    }
}

pub fn log_body_selection(mut selected: MessageReader<BodySelected>) {
    for BodySelected(body) in selected.read() {
        info!("Selected {} ({})", body.name, body.kind.label());
    }
}

/// Show a pointer cursor while hovering a body
pub fn update_hover_cursor(
    mut over_events: MessageReader<Pointer<Over>>,
    mut out_events: MessageReader<Pointer<Out>>,
    bodies: Query<&CelestialBody>,
    parents: Query<&ChildOf>,
    window: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
) {
    let mut icon = None;
    for ev in out_events.read() {
        if body_id_for_entity(ev.entity, &bodies, &parents).is_some() {
            icon = Some(SystemCursorIcon::Default);
        }
    }
    for ev in over_events.read() {
        if body_id_for_entity(ev.entity, &bodies, &parents).is_some() {
            icon = Some(SystemCursorIcon::Pointer);
        }
    }

    let Some(icon) = icon else { return };
    let Ok(window) = window.single() else {
        return;
    };
    commands.entity(window).insert(CursorIcon::from(icon));
}
