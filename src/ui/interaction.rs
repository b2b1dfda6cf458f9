//! Pointer interaction with bodies

use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use crate::body::{Disclosure, OrbitingBody};

/// Walk up the hierarchy from `entity` until an entity matching `is_body` is found.
pub fn find_owning_body(
    mut entity: Entity,
    is_body: impl Fn(Entity) -> bool,
    parents: &Query<&ChildOf>,
) -> Option<Entity> {
    loop {
        if is_body(entity) {
            return Some(entity);
        }
        let Ok(parent) = parents.get(entity) else {
            return None;
        };
        entity = parent.parent();
    }
}

/// Toggle disclosure on the body that was clicked. Nothing else changes.
pub fn handle_body_clicks(
    mut click_events: MessageReader<Pointer<Click>>,
    parents: Query<&ChildOf>,
    mut bodies: Query<(&OrbitingBody, &mut Disclosure)>,
) {
    for click in click_events.read() {
        if click.event.button != PointerButton::Primary {
            continue;
        }
        let Some(owner) = find_owning_body(click.entity, |e| bodies.contains(e), &parents) else {
            continue;
        };
        if let Ok((body, mut disclosure)) = bodies.get_mut(owner) {
            let shown = disclosure.toggle();
            info!(
                "{} (#{}) info {}",
                body.descriptor.name,
                body.index,
                if shown { "shown" } else { "hidden" }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::camera::NormalizedRenderTarget;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::picking::backend::HitData;
    use bevy::picking::pointer::{Location, PointerId};
    use std::time::Duration;

    use crate::body::{BodyPlugin, BodyParts, PlacementRng, rebuild_bodies};
    use crate::config::SceneConfig;
    use crate::orbital::Catalog;

    fn clickable_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<Pointer<Click>>()
            .insert_resource(SceneConfig::default())
            .insert_resource(Catalog::default())
            .insert_resource(PlacementRng::seeded(5))
            .add_plugins(BodyPlugin)
            .add_systems(Update, handle_body_clicks.after(rebuild_bodies));
        app.update();
        app
    }

    fn click(entity: Entity, button: PointerButton) -> Pointer<Click> {
        Pointer::new(
            PointerId::Mouse,
            Location {
                target: NormalizedRenderTarget::None {
                    width: 800,
                    height: 600,
                },
                position: Vec2::new(400.0, 300.0),
            },
            Click {
                button,
                hit: HitData::new(Entity::PLACEHOLDER, 1.0, None, None),
                duration: Duration::from_millis(80),
            },
            entity,
        )
    }

    fn bodies(app: &mut App) -> Vec<(Entity, String, BodyParts)> {
        let world = app.world_mut();
        let mut query = world.query::<(Entity, &OrbitingBody, &BodyParts)>();
        let mut bodies: Vec<_> = query
            .iter(world)
            .map(|(e, body, parts)| (e, body.descriptor.name.clone(), *parts))
            .collect();
        bodies.sort_by(|a, b| a.1.cmp(&b.1));
        bodies
    }

    fn disclosed(app: &App, entity: Entity) -> bool {
        app.world()
            .get::<Disclosure>(entity)
            .is_some_and(Disclosure::is_disclosed)
    }

    fn send(app: &mut App, message: Pointer<Click>) {
        app.world_mut().write_message(message);
        app.update();
    }

    #[test]
    fn test_clicking_mesh_toggles_only_that_body() {
        let mut app = clickable_app();
        let bodies = bodies(&mut app);
        assert_eq!(bodies.len(), 8);
        let Some(&(earth, _, earth_parts)) = bodies.iter().find(|(_, name, _)| name == "Earth")
        else {
            panic!("Earth missing from the catalog");
        };

        for expected in [true, false, true] {
            send(&mut app, click(earth_parts.mesh, PointerButton::Primary));
            assert_eq!(disclosed(&app, earth), expected);
            for (other, name, _) in &bodies {
                if *other != earth {
                    assert!(!disclosed(&app, *other), "{name} changed with Earth");
                }
            }
        }
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut app = clickable_app();
        let bodies = bodies(&mut app);
        let (mars, _, mars_parts) = bodies[2].clone();

        send(&mut app, click(mars_parts.mesh, PointerButton::Secondary));
        send(&mut app, click(mars_parts.mesh, PointerButton::Middle));
        assert!(!disclosed(&app, mars));
        assert!(bodies.iter().all(|(e, _, _)| !disclosed(&app, *e)));
    }

    #[test]
    fn test_click_outside_any_body_changes_nothing() {
        let mut app = clickable_app();
        let stray = app.world_mut().spawn(Transform::default()).id();
        let stray_child = app.world_mut().spawn(ChildOf(stray)).id();

        let owner = app
            .world_mut()
            .run_system_once(
                move |parents: Query<&ChildOf>, bodies: Query<(), With<OrbitingBody>>| {
                    find_owning_body(stray_child, |e| bodies.contains(e), &parents)
                },
            )
            .unwrap();
        assert_eq!(owner, None);

        send(&mut app, click(stray_child, PointerButton::Primary));
        let bodies = bodies(&mut app);
        assert!(bodies.iter().all(|(e, _, _)| !disclosed(&app, *e)));
    }

    #[test]
    fn test_find_owning_body_walks_up_to_group() {
        let mut app = clickable_app();
        let bodies = bodies(&mut app);
        let (group, _, parts) = bodies[0].clone();

        let owner = app
            .world_mut()
            .run_system_once(
                move |parents: Query<&ChildOf>, bodies: Query<(), With<OrbitingBody>>| {
                    find_owning_body(parts.mesh, |e| bodies.contains(e), &parents)
                },
            )
            .unwrap();
        assert_eq!(owner, Some(group));
    }
}
