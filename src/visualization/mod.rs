//! Visualization module
//!
//! Sun, lights, planet geometry, particle fields and post-processing. None of
//! it owns simulation state; it decorates entities spawned by the body plugin.

use bevy::prelude::*;

pub mod bodies;
pub mod effects;
pub mod geometry;
pub mod lighting;
pub mod sparkles;
pub mod sun;

pub use bodies::{BodyGeometry, attach_body_meshes};
pub use effects::{bloom_settings, refresh_film_noise, spawn_film_noise};
pub use lighting::{apply_light_config, spawn_sun_light};
pub use sparkles::{
    SparkleField, animate_sparkles, attach_sparkle_meshes, spawn_backdrop_sparkles,
};
pub use sun::spawn_sun;

use crate::body::rebuild_bodies;

/// Plugin for scene decoration
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyGeometry>()
            .add_systems(
                Startup,
                (spawn_sun, spawn_sun_light, spawn_backdrop_sparkles, spawn_film_noise),
            )
            .add_systems(
                Update,
                (
                    apply_light_config,
                    attach_body_meshes.after(rebuild_bodies),
                    attach_sparkle_meshes.after(rebuild_bodies),
                    animate_sparkles.after(attach_sparkle_meshes),
                    refresh_film_noise,
                ),
            );
    }
}
