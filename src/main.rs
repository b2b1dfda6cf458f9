use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod body;
mod config;
mod core;
mod orbital;
mod ui;
mod visualization;

use body::BodyPlugin;
use config::ConfigPlugin;
use crate::core::CameraRigPlugin;
use orbital::OrbitalPlugin;
use ui::UiPlugin;
use visualization::VisualizationPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Solar Orrery".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Config first: the other plugins read the resources it inserts.
    app.add_plugins(ConfigPlugin);

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    app.add_plugins(CameraRigPlugin);
    app.add_plugins(BodyPlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);

    app.run();
}
