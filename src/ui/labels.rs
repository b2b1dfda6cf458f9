//! Floating name labels and overlay placement
//!
//! Labels and overlays are screen-space UI nodes. Each frame their anchor is
//! taken from the body's orbit group and projected through the main camera.

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::body::{BodyLabel, BodyParts, OrbitingBody};
use crate::core::orbit_camera::MainCamera;
use crate::orbital::BodyDescriptor;

const LABEL_FONT_SIZE: f32 = 16.0;

/// Spawn a name label tinted with the body color.
pub fn spawn_label(commands: &mut Commands, descriptor: &BodyDescriptor) -> Entity {
    commands
        .spawn((
            Text::new(descriptor.name.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(descriptor.color()),
            Node {
                position_type: PositionType::Absolute,
                display: Display::None,
                ..default()
            },
            Pickable::IGNORE,
            BodyLabel,
            Name::new(format!("{} label", descriptor.name)),
        ))
        .id()
}

/// Whether `world` lies in front of the camera.
pub fn in_front_of_camera(camera_transform: &GlobalTransform, world: Vec3) -> bool {
    let to_point = world - camera_transform.translation();
    camera_transform.forward().dot(to_point) > 0.0
}

/// Top-left corner that centres a node of `size` on `anchor`.
pub fn centered_corner(anchor: Vec2, size: Vec2) -> Vec2 {
    anchor - size * 0.5
}

/// Move labels and overlays to follow their bodies.
///
/// Runs after the camera controller has written this frame's pose but before
/// transform propagation, so the camera pose is read from its root `Transform`.
pub fn position_body_widgets(
    camera_query: Query<(&Camera, &Transform), With<MainCamera>>,
    bodies: Query<(&OrbitingBody, &Transform, &BodyParts)>,
    mut nodes: Query<(&mut Node, &ComputedNode, Has<BodyLabel>)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let camera_transform = GlobalTransform::from(*camera_transform);

    for (body, group_transform, parts) in bodies.iter() {
        let size = body.descriptor.size;
        let anchors = [
            (parts.label, body.state.label_anchor(size)),
            (parts.overlay, body.state.overlay_anchor(size)),
        ];

        for (entity, local_anchor) in anchors {
            let Ok((mut node, computed, is_label)) = nodes.get_mut(entity) else {
                continue;
            };
            let world = group_transform.transform_point(local_anchor);
            if !in_front_of_camera(&camera_transform, world) {
                node.display = Display::None;
                continue;
            }
            // Camera target not sized yet
            let Ok(screen) = camera.world_to_viewport(&camera_transform, world) else {
                continue;
            };

            let corner = if is_label {
                let logical_size = computed.size() * computed.inverse_scale_factor();
                centered_corner(screen, logical_size)
            } else {
                screen
            };

            node.display = Display::Flex;
            node.left = Val::Px(corner.x);
            node.top = Val::Px(corner.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::picking::events::{Click, Pointer};
    use bevy_panorbit_camera::PanOrbitCameraSystemSet;
    use std::f32::consts::PI;

    use crate::body::BodyOverlay;
    use crate::orbital::{OrbitState, default_catalog};
    use crate::ui::UiPlugin;

    fn turn_camera_around(mut cameras: Query<&mut Transform, With<MainCamera>>) {
        for mut transform in cameras.iter_mut() {
            transform.rotate_y(PI);
        }
    }

    #[test]
    fn test_in_front_of_camera() {
        let camera = GlobalTransform::from(Transform::default());
        assert!(in_front_of_camera(&camera, Vec3::new(0.0, 0.0, -10.0)));
        assert!(!in_front_of_camera(&camera, Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_widgets_use_this_frames_camera_pose() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<Pointer<Click>>()
            .add_plugins(UiPlugin)
            .add_systems(
                PostUpdate,
                turn_camera_around.in_set(PanOrbitCameraSystemSet),
            );

        let earth = default_catalog()[2].clone();
        let state = OrbitState::with_placement(&earth, 0.0, 0.0);

        // Last frame's propagated pose still faces the body.
        let facing = Transform::default().looking_at(state.label_anchor(earth.size), Vec3::Y);
        app.world_mut().spawn((
            Camera::default(),
            facing,
            GlobalTransform::from(facing),
            MainCamera,
        ));

        let visible = Node {
            position_type: PositionType::Absolute,
            display: Display::Flex,
            ..default()
        };
        let label = app.world_mut().spawn((visible.clone(), BodyLabel)).id();
        let overlay = app.world_mut().spawn((visible, BodyOverlay)).id();
        let mesh = app.world_mut().spawn(Transform::default()).id();
        app.world_mut().spawn((
            OrbitingBody {
                index: 2,
                descriptor: earth,
                state,
            },
            Transform::default(),
            BodyParts {
                mesh,
                label,
                overlay,
            },
        ));

        app.update();

        for node in [label, overlay] {
            let display = app.world().get::<Node>(node).map(|n| n.display);
            assert_eq!(display, Some(Display::None));
        }
    }

    #[test]
    fn test_centered_corner() {
        let corner = centered_corner(Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0));
        assert_eq!(corner, Vec2::new(80.0, 40.0));
    }

    #[test]
    fn test_spawned_label_uses_name_and_color() {
        let mut world = World::new();
        let saturn = crate::orbital::default_catalog()[5].clone();

        let label = {
            let mut commands = world.commands();
            spawn_label(&mut commands, &saturn)
        };
        world.flush();

        assert_eq!(world.get::<Text>(label).map(|t| t.0.as_str()), Some("Saturn"));
        assert_eq!(
            world.get::<TextColor>(label).map(|c| c.0),
            Some(saturn.color())
        );
    }
}
