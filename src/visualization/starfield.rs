//! Background starfield mesh

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::scene::Starfield;

/// Unit octahedron: +X, -X, +Y, -Y, +Z, -Z
const STAR_VERTICES: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Outward-facing (counter-clockwise) triangles of the octahedron
const STAR_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
];

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    starfield: Res<Starfield>,
) {
    let mesh = meshes.add(build_starfield_mesh(&starfield));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Pickable::IGNORE,
        Name::new("Starfield"),
    ));
}

/// Merge every star into one mesh of tiny octahedra, brightness in the
/// vertex colors
pub fn build_starfield_mesh(starfield: &Starfield) -> Mesh {
    let vertex_count = starfield.stars.len() * STAR_VERTICES.len();
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(starfield.stars.len() * STAR_FACES.len() * 3);

    for (i, star) in starfield.stars.iter().enumerate() {
        let base = (i * STAR_VERTICES.len()) as u32;
        let b = star.brightness;
        for dir in STAR_VERTICES {
            positions.push((star.position + dir * star.size).to_array());
            normals.push(dir.to_array());
            colors.push([b, b, b, 1.0]);
        }
        for face in STAR_FACES {
            indices.extend(face.map(|v| base + v));
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_indices(Indices::U32(indices));
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starfield_mesh_sizes() {
        let starfield = Starfield::generate(10, 300.0, 150.0, 1);
        let mesh = build_starfield_mesh(&starfield);
        assert_eq!(mesh.count_vertices(), 60);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(240));
    }

    #[test]
    fn test_octahedron_faces_point_outward() {
        for [a, b, c] in STAR_FACES {
            let (a, b, c) = (
                STAR_VERTICES[a as usize],
                STAR_VERTICES[b as usize],
                STAR_VERTICES[c as usize],
            );
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }
}
