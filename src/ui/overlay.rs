//! Info overlay shown above a disclosed body

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::body::BodyOverlay;
use crate::orbital::BodyDescriptor;

const OVERLAY_WIDTH_PX: f32 = 200.0;
const OVERLAY_PADDING_PX: f32 = 10.0;
const OVERLAY_TITLE_SIZE: f32 = 18.0;
const OVERLAY_TEXT_SIZE: f32 = 14.0;
const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);

/// Text shown in a body's overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayContent {
    pub title: String,
    pub body: String,
}

impl OverlayContent {
    pub fn for_body(descriptor: &BodyDescriptor) -> Self {
        Self {
            title: descriptor.name.clone(),
            body: descriptor.facts.clone(),
        }
    }
}

/// Spawn a hidden overlay panel for `descriptor`. Positioned every frame by
/// `position_body_widgets`, shown by `sync_overlay_visibility`.
pub fn spawn_overlay(commands: &mut Commands, descriptor: &BodyDescriptor) -> Entity {
    let content = OverlayContent::for_body(descriptor);
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(OVERLAY_WIDTH_PX),
                padding: UiRect::all(Val::Px(OVERLAY_PADDING_PX)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(OVERLAY_BACKGROUND),
            Visibility::Hidden,
            Pickable::IGNORE,
            BodyOverlay,
            Name::new(format!("{} overlay", descriptor.name)),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(content.title),
                TextFont {
                    font_size: OVERLAY_TITLE_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Pickable::IGNORE,
            ));
            panel.spawn((
                Text::new(content.body),
                TextFont {
                    font_size: OVERLAY_TEXT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Pickable::IGNORE,
            ));
        })
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::default_catalog;

    #[test]
    fn test_overlay_content_is_own_body_only() {
        let catalog = default_catalog();
        for (i, body) in catalog.iter().enumerate() {
            let content = OverlayContent::for_body(body);
            assert_eq!(content.title, body.name);
            assert_eq!(content.body, body.facts);

            for (j, other) in catalog.iter().enumerate() {
                if i != j {
                    assert!(!content.title.contains(&other.name));
                    assert_ne!(content.body, other.facts);
                }
            }
        }
    }

    #[test]
    fn test_spawned_overlay_holds_name_and_facts() {
        let mut world = World::new();
        let mars = default_catalog()[3].clone();

        let overlay = {
            let mut commands = world.commands();
            spawn_overlay(&mut commands, &mars)
        };
        world.flush();

        let children: Vec<Entity> = world
            .get::<Children>(overlay)
            .map(|c| c.to_vec())
            .unwrap_or_default();
        let texts: Vec<String> = children
            .iter()
            .filter_map(|child| world.get::<Text>(*child))
            .map(|text| text.0.clone())
            .collect();

        assert_eq!(texts, vec![mars.name.clone(), mars.facts.clone()]);
        assert_eq!(world.get::<Visibility>(overlay), Some(&Visibility::Hidden));
    }
}
