//! Orbiting body management
//!
//! Instantiates one orbit group per catalog entry and keeps each body's
//! disclosure overlay in sync with its local state.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{BodyLabel, BodyMesh, BodyOverlay, BodyParts, Disclosure, OrbitingBody};
pub use resources::PlacementRng;
pub use systems::{rebuild_bodies, sync_overlay_visibility};

/// Plugin for body lifecycle and disclosure state
pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementRng>().add_systems(
            Update,
            (
                rebuild_bodies,
                sync_overlay_visibility.after(rebuild_bodies),
            ),
        );
    }
}
