//! Pan/orbit/zoom camera rig
//!
//! `bevy_panorbit_camera` does all pointer-to-camera math; this module only
//! derives its initial pose from the configured position and maps the enable
//! flags onto sensitivities.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::config::SceneConfig;
use crate::visualization::bloom_settings;

/// Marker for the camera that labels and overlays are projected through
#[derive(Component)]
pub struct MainCamera;

/// Initial rig pose around the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigPose {
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Pose that puts a camera focused on the origin at `position`.
pub fn rig_pose(position: Vec3) -> RigPose {
    let radius = position.length();
    if radius <= f32::EPSILON {
        return RigPose {
            radius: 1.0,
            yaw: 0.0,
            pitch: 0.0,
        };
    }
    RigPose {
        radius,
        yaw: position.x.atan2(position.z),
        pitch: (position.y / radius).clamp(-1.0, 1.0).asin(),
    }
}

fn sensitivity(enabled: bool) -> f32 {
    if enabled { 1.0 } else { 0.0 }
}

/// Build the pan-orbit controller for the scene config.
pub fn pan_orbit_for(scene: &SceneConfig) -> PanOrbitCamera {
    let pose = rig_pose(scene.camera_translation());
    PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(pose.radius),
        yaw: Some(pose.yaw),
        pitch: Some(pose.pitch),
        orbit_sensitivity: sensitivity(scene.enable_rotate),
        pan_sensitivity: sensitivity(scene.enable_pan),
        zoom_sensitivity: sensitivity(scene.enable_zoom),
        force_update: true,
        ..default()
    }
}

pub fn spawn_camera(mut commands: Commands, scene: Res<SceneConfig>) {
    let position = scene.camera_translation();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: scene.camera_fov.to_radians(),
            ..default()
        }),
        Camera {
            clear_color: ClearColorConfig::Custom(scene.background()),
            ..default()
        },
        Hdr,
        bloom_settings(&scene),
        Tonemapping::TonyMcMapface,
        pan_orbit_for(&scene),
        MainCamera,
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    info!(
        "Camera at {:?}, fov {} deg",
        position, scene.camera_fov
    );
}

/// Spawns the main camera
pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}
