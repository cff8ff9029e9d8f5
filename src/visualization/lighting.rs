//! Lighting configuration systems

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::scene::SceneFrame;
use crate::ui::state::SimulationSettings;

/// Ambient brightness per unit of the ambient intensity setting
const AMBIENT_BRIGHTNESS_SCALE: f32 = 400.0;
/// Point light lumens per unit of the point intensity setting
const POINT_LIGHT_LUMENS_SCALE: f32 = 2.0e8;
/// Far enough to reach the outermost orbit
const POINT_LIGHT_RANGE: f32 = 1_000.0;

/// Marker component for the point light at the center of the system
#[derive(Component)]
pub struct SunLight;

pub fn ambient_brightness(intensity: f32) -> f32 {
    intensity.max(0.0) * AMBIENT_BRIGHTNESS_SCALE
}

pub fn point_light_lumens(intensity: f32) -> f32 {
    intensity.max(0.0) * POINT_LIGHT_LUMENS_SCALE
}

pub fn spawn_lights(mut commands: Commands, settings: Res<SimulationSettings>) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: ambient_brightness(settings.ambient_light_intensity),
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: point_light_lumens(settings.point_light_intensity),
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        SunLight,
        Name::new("Sun Light"),
    ));
}

/// Update light levels from the current scene frame
pub fn apply_lighting(
    frame: Res<SceneFrame>,
    mut ambient: ResMut<GlobalAmbientLight>,
    mut lights: Query<&mut PointLight, With<SunLight>>,
) {
    let brightness = ambient_brightness(frame.lighting.ambient_intensity);
    if ambient.brightness != brightness {
        ambient.brightness = brightness;
    }

    let lumens = point_light_lumens(frame.lighting.point_intensity);
    for mut light in &mut lights {
        if light.intensity != lumens {
            light.intensity = lumens;
        }
    }
}
