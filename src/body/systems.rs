//! Body lifecycle systems

use bevy::prelude::*;
use rand::Rng;

use crate::body::components::{BodyMesh, BodyOverlay, BodyParts, Disclosure, OrbitingBody};
use crate::body::resources::PlacementRng;
use crate::orbital::{BodyDescriptor, Catalog, OrbitState};
use crate::ui::{spawn_label, spawn_overlay};
use crate::visualization::SparkleField;

/// Respawn every body whenever the catalog resource is inserted or changed.
///
/// Existing groups are torn down first (meshes, sparkles, label, overlay), so
/// running frames never duplicates bodies and each rebuild redraws placement.
pub fn rebuild_bodies(
    mut commands: Commands,
    catalog: Res<Catalog>,
    mut rng: ResMut<PlacementRng>,
    existing: Query<(Entity, &BodyParts), With<OrbitingBody>>,
) {
    if !catalog.is_changed() {
        return;
    }

    let mut removed = 0;
    for (entity, parts) in existing.iter() {
        commands.entity(parts.label).despawn();
        commands.entity(parts.overlay).despawn();
        commands.entity(entity).despawn();
        removed += 1;
    }

    for (index, descriptor) in catalog.iter().enumerate() {
        spawn_body(&mut commands, index, descriptor, &mut rng.0);
    }

    info!(
        "Built {} orbiting bodies (removed {})",
        catalog.len(),
        removed
    );
}

/// Spawn one orbit group with its body mesh, sparkle ring, label and overlay.
pub fn spawn_body<R: Rng + ?Sized>(
    commands: &mut Commands,
    index: usize,
    descriptor: &BodyDescriptor,
    rng: &mut R,
) -> Entity {
    let state = OrbitState::new(descriptor, rng);
    let color = descriptor.color();

    let label = spawn_label(commands, descriptor);
    let overlay = spawn_overlay(commands, descriptor);

    let mut mesh = Entity::PLACEHOLDER;
    let group = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Disclosure::default(),
            Name::new(format!("{} orbit", descriptor.name)),
        ))
        .with_children(|parent| {
            mesh = parent
                .spawn((
                    BodyMesh {
                        size: descriptor.size,
                        color,
                    },
                    Transform::from_translation(state.local_position()),
                    Visibility::default(),
                    Name::new(descriptor.name.clone()),
                ))
                .id();
            parent.spawn((
                SparkleField::orbit_ring(descriptor.orbit_radius, color),
                Transform::default(),
                Visibility::default(),
                Name::new(format!("{} sparkles", descriptor.name)),
            ));
        })
        .id();

    commands.entity(group).insert((
        OrbitingBody {
            index,
            descriptor: descriptor.clone(),
            state,
        },
        BodyParts {
            mesh,
            label,
            overlay,
        },
    ));

    group
}

/// Show or hide overlays when a body's disclosure flag changes.
pub fn sync_overlay_visibility(
    bodies: Query<(&Disclosure, &BodyParts), Changed<Disclosure>>,
    mut overlays: Query<&mut Visibility, With<BodyOverlay>>,
) {
    for (disclosure, parts) in bodies.iter() {
        let Ok(mut visibility) = overlays.get_mut(parts.overlay) else {
            continue;
        };
        *visibility = if disclosure.is_disclosed() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
