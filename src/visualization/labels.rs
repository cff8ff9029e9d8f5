//! Screen-space name labels pinned above each body.

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::bodies::BodyRegistry;
use crate::camera::MainCamera;
use crate::scene::SceneFrame;

const LABEL_FONT_SIZE: f32 = 14.0;
/// Rough glyph width used to center a label over its anchor
const LABEL_CHAR_WIDTH: f32 = LABEL_FONT_SIZE * 0.5;

/// UI text node naming one body
#[derive(Component, Debug)]
pub struct BodyLabel {
    pub body_id: String,
    half_width: f32,
}

pub fn spawn_labels(mut commands: Commands, registry: Res<BodyRegistry>) {
    for body in registry.iter() {
        commands.spawn((
            Text::new(body.name.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::srgba(0.85, 0.9, 1.0, 0.9)),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            Pickable::IGNORE,
            BodyLabel {
                body_id: body.id.clone(),
                half_width: body.name.chars().count() as f32 * LABEL_CHAR_WIDTH * 0.5,
            },
            Name::new(format!("{} label", body.name)),
        ));
    }
}

/// Project label anchors to the screen; hide labels that are switched off or
/// behind the camera
pub fn sync_labels(
    frame: Res<SceneFrame>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut labels: Query<(&BodyLabel, &mut Text, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut text, mut node, mut visibility) in &mut labels {
        let Some(anchor) = frame.label(&label.body_id) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };
        let Ok(screen) = camera.world_to_viewport(camera_transform, anchor.anchor) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        if text.0 != anchor.text {
            text.0.clone_from(&anchor.text);
        }

        node.left = Val::Px(screen.x - label.half_width);
        node.top = Val::Px(screen.y - LABEL_FONT_SIZE);
        visibility.set_if_neq(Visibility::Inherited);
    }
}
