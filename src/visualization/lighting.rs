//! Lighting setup systems

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::config::SceneConfig;

/// Converts the config's relative ambient intensity into Bevy brightness.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 1_000.0;
/// Converts the config's relative point-light intensity into lumens.
pub const POINT_LUMENS_PER_UNIT: f32 = 4_000_000.0;
/// Point light reach; comfortably past the outermost orbit.
const POINT_LIGHT_RANGE: f32 = 400.0;

/// Marker component for the light at the sun's position
#[derive(Component)]
pub struct SunLight;

pub fn ambient_brightness(scene: &SceneConfig) -> f32 {
    scene.ambient_intensity.max(0.0) * AMBIENT_BRIGHTNESS_PER_UNIT
}

pub fn point_light_lumens(scene: &SceneConfig) -> f32 {
    scene.point_light_intensity.max(0.0) * POINT_LUMENS_PER_UNIT
}

/// Spawn the point light at the origin
pub fn spawn_sun_light(mut commands: Commands, scene: Res<SceneConfig>) {
    commands.spawn((
        PointLight {
            intensity: point_light_lumens(&scene),
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        SunLight,
        Name::new("Sun light"),
    ));
}

/// Keep ambient fill and the point light in step with the scene config
pub fn apply_light_config(
    mut commands: Commands,
    scene: Res<SceneConfig>,
    mut lights: Query<&mut PointLight, With<SunLight>>,
) {
    if !scene.is_changed() {
        return;
    }

    commands.insert_resource(GlobalAmbientLight {
        brightness: ambient_brightness(&scene),
        ..default()
    });

    for mut light in lights.iter_mut() {
        light.intensity = point_light_lumens(&scene);
    }
}
