//! Central star

use bevy::picking::Pickable;
use bevy::prelude::*;

pub const SUN_RADIUS: f32 = 5.0;
const SUN_SEGMENTS: u32 = 32;
const SUN_GLOW: f32 = 4.0;

pub fn sun_color() -> Color {
    Color::srgb_u8(0xFD, 0xB8, 0x13)
}

/// Spawn the static, unlit sun at the origin. Its emissive term feeds bloom.
pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let color = sun_color();
    let material = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * SUN_GLOW,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(SUN_SEGMENTS, SUN_SEGMENTS))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Pickable::IGNORE,
        Name::new("Sun"),
    ));
}
