//! Screen-space UI: body labels, info overlays and click handling

use bevy::prelude::*;
use bevy::transform::TransformSystems;
use bevy::ui::UiSystems;
use bevy_panorbit_camera::PanOrbitCameraSystemSet;

pub mod interaction;
pub mod labels;
pub mod overlay;

pub use interaction::handle_body_clicks;
pub use labels::{position_body_widgets, spawn_label};
pub use overlay::spawn_overlay;

use crate::body::sync_overlay_visibility;

/// Plugin for labels, overlays and pointer interaction
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_body_clicks.before(sync_overlay_visibility))
            .add_systems(
                PostUpdate,
                position_body_widgets
                    .after(PanOrbitCameraSystemSet)
                    .before(UiSystems::Layout)
                    .before(TransformSystems::Propagate),
            );
    }
}
