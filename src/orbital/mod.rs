//! Orbit model
//!
//! This module holds the body catalog, the per-body orbit/spin state and the
//! per-frame systems that turn that state into transforms.

use bevy::prelude::*;

pub mod catalog;
pub mod motion;
pub mod state;

pub use catalog::{BodyDescriptor, Catalog, default_catalog, parse_hex_color, validate_catalog};
pub use motion::{revolve_orbit_groups, spin_bodies};
pub use state::{OrbitState, SpinMode};

use crate::body::rebuild_bodies;

/// Plugin driving revolution and spin every frame
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                revolve_orbit_groups.after(rebuild_bodies),
                spin_bodies.after(rebuild_bodies),
            ),
        );
    }
}
