//! Drifting particle fields
//!
//! A field is a point cloud scattered uniformly in a box. Each particle wobbles
//! around its rest position on a bounded sine path; positions are rewritten
//! into the mesh every frame.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::Rng;

use crate::body::PlacementRng;
use crate::config::SceneConfig;

const ORBIT_SPARKLE_COUNT: usize = 50;
const ORBIT_SPARKLE_HEIGHT: f32 = 0.5;
const ORBIT_SPARKLE_SIZE: f32 = 0.5;
const SCENE_SPARKLE_EXTENT: f32 = 300.0;
const SCENE_SPARKLE_SIZE: f32 = 1.0;
const SPARKLE_SPEED: f32 = 0.3;
const SPARKLE_GLOW: f32 = 2.0;

/// Description of a particle field. Geometry is attached by `attach_sparkle_meshes`.
#[derive(Component, Clone, Debug)]
pub struct SparkleField {
    pub count: usize,
    /// Full extents of the box the particles are scattered in
    pub scale: Vec3,
    /// Drift amplitude
    pub size: f32,
    /// Drift rate
    pub speed: f32,
    pub color: Color,
}

impl SparkleField {
    /// Thin disc of particles covering a body's orbit.
    pub fn orbit_ring(orbit_radius: f32, color: Color) -> Self {
        Self {
            count: ORBIT_SPARKLE_COUNT,
            scale: Vec3::new(orbit_radius * 2.0, ORBIT_SPARKLE_HEIGHT, orbit_radius * 2.0),
            size: ORBIT_SPARKLE_SIZE,
            speed: SPARKLE_SPEED,
            color,
        }
    }

    /// Backdrop cube spanning the whole scene.
    pub fn backdrop(count: usize) -> Self {
        Self {
            count,
            scale: Vec3::splat(SCENE_SPARKLE_EXTENT),
            size: SCENE_SPARKLE_SIZE,
            speed: SPARKLE_SPEED,
            color: Color::WHITE,
        }
    }
}

/// Rest positions and phases, filled in when the mesh is attached.
#[derive(Component)]
pub struct SparkleMotion {
    rest: Vec<Vec3>,
    phases: Vec<f32>,
}

/// Scatter `count` points uniformly inside a box of extents `scale`.
pub fn scatter_particles<R: Rng + ?Sized>(rng: &mut R, count: usize, scale: Vec3) -> Vec<Vec3> {
    let half = scale.abs() * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                sample_axis(rng, half.x),
                sample_axis(rng, half.y),
                sample_axis(rng, half.z),
            )
        })
        .collect()
}

/// Zero for flat, negative or non-finite extents.
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    if half.is_finite() && half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}

/// Offset from a particle's rest position at time `t`. Each axis stays within `size / 2`.
pub fn drift_offset(phase: f32, t: f32, speed: f32, size: f32) -> Vec3 {
    let w = t * speed;
    Vec3::new(
        (w + phase).sin(),
        (w * 1.3 + phase * 2.0).sin(),
        (w * 0.7 + phase * 3.0).cos(),
    ) * (size * 0.5)
}

fn point_mesh(positions: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions.to_vec());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![Vec3::Y; positions.len()]);
    mesh
}

/// Spawn the scene-wide backdrop field.
pub fn spawn_backdrop_sparkles(mut commands: Commands, scene: Res<SceneConfig>) {
    commands.spawn((
        SparkleField::backdrop(scene.particle_count),
        Transform::default(),
        Visibility::default(),
        Name::new("Backdrop sparkles"),
    ));
}

/// Give every new field its point mesh and motion state.
pub fn attach_sparkle_meshes(
    mut commands: Commands,
    fields: Query<(Entity, &SparkleField), Without<SparkleMotion>>,
    mut rng: ResMut<PlacementRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, field) in fields.iter() {
        let rest = scatter_particles(&mut rng.0, field.count, field.scale);
        let phases = (0..field.count)
            .map(|_| rng.0.gen_range(0.0..std::f32::consts::TAU))
            .collect();

        let material = materials.add(StandardMaterial {
            base_color: field.color,
            emissive: field.color.to_linear() * SPARKLE_GLOW,
            unlit: true,
            ..default()
        });

        commands.entity(entity).insert((
            Mesh3d(meshes.add(point_mesh(&rest))),
            MeshMaterial3d(material),
            SparkleMotion { rest, phases },
            Pickable::IGNORE,
        ));
    }
}

/// Rewrite particle positions for the current time.
pub fn animate_sparkles(
    time: Res<Time>,
    fields: Query<(&SparkleField, &SparkleMotion, &Mesh3d)>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let t = time.elapsed_secs();
    for (field, motion, mesh3d) in fields.iter() {
        if field.speed == 0.0 {
            continue;
        }
        let Some(mesh) = meshes.get_mut(&mesh3d.0) else {
            continue;
        };
        let positions: Vec<Vec3> = motion
            .rest
            .iter()
            .zip(motion.phases.iter())
            .map(|(rest, phase)| *rest + drift_offset(*phase, t, field.speed, field.size))
            .collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scatter_stays_in_box() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let scale = Vec3::new(40.0, 0.5, 40.0);
        let points = scatter_particles(&mut rng, 500, scale);
        assert_eq!(points.len(), 500);
        for p in points {
            assert!(p.x.abs() <= 20.0 && p.y.abs() <= 0.25 && p.z.abs() <= 20.0);
        }
    }

    #[test]
    fn test_scatter_handles_flat_or_negative_scale() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = scatter_particles(&mut rng, 10, Vec3::new(-4.0, 0.0, 4.0));
        for p in points {
            assert_eq!(p.y, 0.0);
            assert!(p.x.abs() <= 2.0);
        }
    }

    #[test]
    fn test_scatter_survives_overflowing_orbit() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ring = SparkleField::orbit_ring(f32::MAX, Color::WHITE);
        assert!(ring.scale.x.is_infinite());

        let points = scatter_particles(&mut rng, ring.count, ring.scale);
        assert_eq!(points.len(), 50);
        for p in points {
            assert_eq!(p.x, 0.0);
            assert_eq!(p.z, 0.0);
            assert!(p.y.abs() <= 0.25);
        }

        let nan = scatter_particles(&mut rng, 5, Vec3::new(f32::NAN, 1.0, f32::INFINITY));
        assert!(nan.iter().all(|p| p.x == 0.0 && p.z == 0.0));
    }

    #[test]
    fn test_drift_is_bounded() {
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let offset = drift_offset(i as f32, t, SPARKLE_SPEED, 1.0);
            assert!(offset.abs().max_element() <= 0.5 + 1e-6);
        }
        assert_eq!(drift_offset(1.0, 5.0, 0.3, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_field_presets() {
        let ring = SparkleField::orbit_ring(25.0, Color::WHITE);
        assert_eq!(ring.count, 50);
        assert_eq!(ring.scale, Vec3::new(50.0, 0.5, 50.0));

        let backdrop = SparkleField::backdrop(10_000);
        assert_eq!(backdrop.count, 10_000);
        assert_eq!(backdrop.scale, Vec3::splat(300.0));
    }
}
