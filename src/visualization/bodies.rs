//! Planet geometry: lit wireframe plus an invisible pick target

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::body::BodyMesh;
use crate::visualization::geometry::{IcoSphere, icosphere};

/// Subdivision level of the planet icosphere
pub const BODY_SUBDIVISIONS: u32 = 1;

/// Shared unit icosphere all planets are scaled from
#[derive(Resource)]
pub struct BodyGeometry(pub IcoSphere);

impl Default for BodyGeometry {
    fn default() -> Self {
        Self(icosphere(BODY_SUBDIVISIONS))
    }
}

/// Attach meshes to newly spawned bodies.
///
/// The body entity itself carries a transparent triangle mesh so mesh picking
/// can hit it; the visible wireframe is a child that ignores picking.
pub fn attach_body_meshes(
    mut commands: Commands,
    geometry: Res<BodyGeometry>,
    bodies: Query<(Entity, &BodyMesh), Without<Mesh3d>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, body) in bodies.iter() {
        let hit_mesh = meshes.add(geometry.0.triangle_mesh(body.size));
        let wire_mesh = meshes.add(geometry.0.wireframe_mesh(body.size));

        let hit_material = materials.add(StandardMaterial {
            base_color: Color::NONE,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        // Matte, non-metallic: close to a Lambert surface.
        let wire_material = materials.add(StandardMaterial {
            base_color: body.color,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            reflectance: 0.0,
            ..default()
        });

        commands
            .entity(entity)
            .insert((Mesh3d(hit_mesh), MeshMaterial3d(hit_material)))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(wire_mesh),
                    MeshMaterial3d(wire_material),
                    Transform::default(),
                    Pickable::IGNORE,
                ));
            });
    }
}
