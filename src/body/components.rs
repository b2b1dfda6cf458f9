//! Components making up one orbiting body in the ECS

use bevy::prelude::*;

use crate::orbital::{BodyDescriptor, OrbitState};

/// Lives on the orbit group entity. The group is rotated about the origin to
/// revolve the body; the body mesh is a child at a fixed local position.
#[derive(Component, Clone, Debug)]
pub struct OrbitingBody {
    /// Position in the catalog
    pub index: usize,
    pub descriptor: BodyDescriptor,
    pub state: OrbitState,
}

/// Whether the body's info overlay is shown. Toggled by clicking the body.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    disclosed: bool,
}

impl Disclosure {
    pub fn is_disclosed(&self) -> bool {
        self.disclosed
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.disclosed = !self.disclosed;
        self.disclosed
    }
}

/// Entities owned by an orbit group that live outside its hierarchy (UI) or
/// need direct access (the spinning mesh).
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyParts {
    pub mesh: Entity,
    pub label: Entity,
    pub overlay: Entity,
}

/// The spinning, clickable body. Geometry is attached by the visualization plugin.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyMesh {
    pub size: f32,
    pub color: Color,
}

/// Marker for a body's floating name label
#[derive(Component)]
pub struct BodyLabel;

/// Marker for a body's info panel
#[derive(Component)]
pub struct BodyOverlay;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_alternates() {
        let mut disclosure = Disclosure::default();
        assert!(!disclosure.is_disclosed());
        assert!(disclosure.toggle());
        assert!(!disclosure.toggle());
        assert!(disclosure.toggle());
        assert!(disclosure.is_disclosed());
    }

    #[test]
    fn test_disclosure_is_per_instance() {
        let mut a = Disclosure::default();
        let b = Disclosure::default();
        a.toggle();
        assert!(a.is_disclosed());
        assert!(!b.is_disclosed());
    }
}
