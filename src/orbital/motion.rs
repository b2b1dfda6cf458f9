//! Per-frame orbit systems

use bevy::prelude::*;

use crate::body::{BodyMesh, BodyParts, OrbitingBody};
use crate::config::SceneConfig;

/// Rotate each orbit group to `elapsed * orbit_speed` about +Y.
///
/// Driven by the monotonic elapsed clock rather than frame deltas, so the
/// angle never drifts with frame rate.
pub fn revolve_orbit_groups(
    time: Res<Time>,
    mut groups: Query<(&OrbitingBody, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs_f64();
    for (body, mut transform) in groups.iter_mut() {
        transform.rotation = body.state.revolution_rotation(elapsed);
    }
}

/// Advance each body's spin by one tick and apply it to the body mesh.
pub fn spin_bodies(
    time: Res<Time>,
    scene: Res<SceneConfig>,
    mut bodies: Query<(&mut OrbitingBody, &BodyParts)>,
    mut meshes: Query<&mut Transform, With<BodyMesh>>,
) {
    let elapsed = time.elapsed_secs_f64();
    for (mut body, parts) in bodies.iter_mut() {
        body.state.tick();
        if let Ok(mut transform) = meshes.get_mut(parts.mesh) {
            transform.rotation = body.state.spin_rotation(scene.spin_mode, elapsed);
        }
    }
}
