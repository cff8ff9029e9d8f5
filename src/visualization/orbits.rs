//! Orbit guide rendering with gizmo line strips

use bevy::prelude::*;

use crate::scene::SceneFrame;
use crate::ui::state::Selection;

const ORBIT_COLOR: Color = Color::srgba(0.55, 0.65, 0.85, 0.35);
const SELECTED_ORBIT_COLOR: Color = Color::srgba(1.0, 0.85, 0.4, 0.9);

/// Draw every orbit guide in the current frame; the selected body's orbit is
/// highlighted
pub fn draw_orbit_guides(frame: Res<SceneFrame>, selection: Res<Selection>, mut gizmos: Gizmos) {
    let selected = selection.body().map(|b| b.id.as_str());
    for guide in &frame.orbits {
        let color = if selected == Some(guide.body_id.as_str()) {
            SELECTED_ORBIT_COLOR
        } else {
            ORBIT_COLOR
        };
        gizmos.linestrip(guide.points(), color);
    }
}
