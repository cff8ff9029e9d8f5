use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod camera;
mod interaction;
mod orbital;
mod scene;
mod ui;
mod visualization;

use bodies::{BodyRegistry, SystemSource, load_system};
use camera::CameraPlugin;
use interaction::InteractionPlugin;
use orbital::OrbitalPlugin;
use scene::ScenePlugin;
use ui::{StatePlugin, UiPlugin};
use visualization::VisualizationPlugin;

fn log_system_summary(registry: Res<BodyRegistry>, source: Res<SystemSource>) {
    info!(
        "Loaded \"{}\" with {} bodies from {}",
        registry.name(),
        registry.len(),
        *source
    );
    if let Some(center) = registry.center() {
        info!("Center body: {}", center.name);
    }
}

fn main() -> anyhow::Result<()> {
    // Fail before opening a window if the system description is invalid.
    let loaded = load_system()?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: format!("Solar Explorer: {}", loaded.registry.name()),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.insert_resource(loaded.registry)
        .insert_resource(loaded.settings)
        .insert_resource(loaded.source);

    app.add_plugins(EguiPlugin::default());
    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    app.add_plugins(StatePlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(InteractionPlugin);
    app.add_plugins(CameraPlugin);
    app.add_plugins(UiPlugin);

    app.add_systems(Startup, log_system_summary);

    app.run();
    Ok(())
}
