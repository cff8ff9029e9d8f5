//! Body meshes and per-frame transforms.

use bevy::prelude::*;

use crate::bodies::{Body, BodyRegistry};
use crate::scene::{BodyInstance, SceneFrame};

const SPHERE_SECTORS: u32 = 48;
const SPHERE_STACKS: u32 = 24;
const EMISSIVE_STRENGTH: f32 = 8.0;
const ATMOSPHERE_SCALE: f32 = 1.08;
const CORONA_SCALE: f32 = 1.35;

/// Visual instance of a registry body
#[derive(Component, Debug, Clone)]
pub struct CelestialBody {
    pub id: String,
}

/// Translucent shell around bodies with an atmosphere
#[derive(Component)]
pub struct Atmosphere;

/// Glow around bodies with flares
#[derive(Component)]
pub struct Corona;

/// Spawn one sphere per instance of the startup frame, with atmosphere and
/// corona shells as children
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    registry: Res<BodyRegistry>,
    frame: Res<SceneFrame>,
) {
    for instance in &frame.instances {
        let Some(body) = registry.get(&instance.body_id) else {
            warn!("spawn_bodies: unknown body {}", instance.body_id);
            continue;
        };
        let mesh = meshes.add(
            Sphere::new(instance.radius)
                .mesh()
                .uv(SPHERE_SECTORS, SPHERE_STACKS),
        );
        let material = materials.add(surface_material(instance, body, &asset_server));
        let atmosphere = instance.has_atmosphere.then(|| {
            (
                meshes.add(
                    Sphere::new(instance.radius * ATMOSPHERE_SCALE)
                        .mesh()
                        .uv(SPHERE_SECTORS, SPHERE_STACKS),
                ),
                materials.add(StandardMaterial {
                    base_color: Color::srgba(0.55, 0.75, 1.0, 0.18),
                    alpha_mode: AlphaMode::Blend,
                    perceptual_roughness: 1.0,
                    ..default()
                }),
            )
        });
        let corona = instance.has_flares.then(|| {
            (
                meshes.add(
                    Sphere::new(instance.radius * CORONA_SCALE)
                        .mesh()
                        .uv(SPHERE_SECTORS, SPHERE_STACKS),
                ),
                materials.add(StandardMaterial {
                    base_color: instance.color.with_alpha(0.12),
                    emissive: instance.color.to_linear() * 2.0,
                    alpha_mode: AlphaMode::Add,
                    unlit: true,
                    ..default()
                }),
            )
        });

        commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                instance.transform(),
                Visibility::Visible,
                CelestialBody {
                    id: body.id.clone(),
                },
                Name::new(body.name.clone()),
            ))
            .with_children(|parent| {
                if let Some((mesh, material)) = atmosphere {
                    parent.spawn((Mesh3d(mesh), MeshMaterial3d(material), Atmosphere));
                }
                if let Some((mesh, material)) = corona {
                    parent.spawn((Mesh3d(mesh), MeshMaterial3d(material), Corona));
                }
            });
    }

    info!("Spawned {} celestial bodies", frame.instances.len());
}

fn surface_material(
    instance: &BodyInstance,
    body: &Body,
    asset_server: &AssetServer,
) -> StandardMaterial {
    let emissive = if instance.luminous {
        instance.color.to_linear() * EMISSIVE_STRENGTH
    } else {
        LinearRgba::BLACK
    };

    StandardMaterial {
        // Textures carry their own color.
        base_color: if body.texture.is_some() {
            Color::WHITE
        } else {
            instance.color
        },
        base_color_texture: body.texture.clone().map(|path| asset_server.load(path)),
        emissive,
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    }
}

/// Move and spin every body to its place in the current scene frame
pub fn sync_body_transforms(
    frame: Res<SceneFrame>,
    mut bodies: Query<(&CelestialBody, &mut Transform)>,
) {
    for (body, mut transform) in &mut bodies {
        let Some(instance) = frame.instance(&body.id) else {
            warn!("sync_body_transforms: no instance for body {}", body.id);
            continue;
        };
        *transform = instance.transform();
    }
}
