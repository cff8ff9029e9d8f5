//! Orbit camera around the center of the system

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::ui::state::SimulationSettings;

/// Marker for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Initial elevation above the orbital plane
const INITIAL_PITCH: f32 = 0.45;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, follow_camera_distance);
    }
}

pub fn spawn_camera(mut commands: Commands, settings: Res<SimulationSettings>) {
    let distance = settings.camera_distance;

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(distance),
        yaw: Some(0.0),
        pitch: Some(INITIAL_PITCH),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            // The starfield shell reaches 450 units out.
            near: 0.1,
            far: 2_000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Zoom the camera when the camera distance setting changes. Mouse-wheel zoom
/// is left alone between changes.
pub fn follow_camera_distance(
    settings: Res<SimulationSettings>,
    mut last_distance: Local<Option<f32>>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    let distance = settings.camera_distance;
    if *last_distance == Some(distance) {
        return;
    }
    let first_run = last_distance.is_none();
    *last_distance = Some(distance);
    if first_run {
        return;
    }

    let Ok(mut camera) = cameras.single_mut() else {
        warn!("follow_camera_distance: main camera not found");
        return;
    };
    camera.target_radius = distance;
    debug!("Camera distance set to {}", distance);
}
