//! Body catalog: the fixed, ordered list of planets shown in the orrery.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Static description of one orbiting body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    /// `#RRGGBB`, used for both the wireframe tint and the label tint
    pub color: String,
    pub size: f32,
    pub orbit_radius: f32,
    /// Radians per second of elapsed time; sign gives direction
    pub orbit_speed: f32,
    /// Radians added to the body's spin each tick
    pub rotation_speed: f32,
    pub facts: String,
}

impl BodyDescriptor {
    /// Parsed display color. Unparsable hex falls back to white.
    pub fn color(&self) -> Color {
        parse_hex_color(&self.color).unwrap_or(Color::WHITE)
    }
}

/// Parse a `#RRGGBB` (or `RRGGBB`) string into a Bevy color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    Srgba::hex(hex.trim()).ok().map(Color::Srgba)
}

/// Resource holding the catalog the scene is built from.
///
/// Replacing or mutating it triggers a full rebuild of the bodies.
#[derive(Resource, Clone, Debug, Deref)]
pub struct Catalog(pub Vec<BodyDescriptor>);

impl Default for Catalog {
    fn default() -> Self {
        Self(default_catalog())
    }
}

fn body(
    name: &str,
    color: &str,
    size: f32,
    orbit_radius: f32,
    orbit_speed: f32,
    rotation_speed: f32,
    facts: &str,
) -> BodyDescriptor {
    BodyDescriptor {
        name: name.to_string(),
        color: color.to_string(),
        size,
        orbit_radius,
        orbit_speed,
        rotation_speed,
        facts: facts.to_string(),
    }
}

/// The eight planets, Mercury through Neptune.
pub fn default_catalog() -> Vec<BodyDescriptor> {
    vec![
        body(
            "Mercury",
            "#FFD700",
            0.4,
            10.0,
            0.01,
            0.005,
            "Mercury is the smallest planet in our Solar System and the closest to the Sun.",
        ),
        body(
            "Venus",
            "#FFA500",
            0.9,
            15.0,
            0.007,
            0.002,
            "Venus is often called Earth's twin because of their similar size, mass, and proximity to the Sun.",
        ),
        body(
            "Earth",
            "#00BFFF",
            1.0,
            20.0,
            0.005,
            0.02,
            "Earth is the only planet known to harbor life and has a unique atmosphere composed mostly of nitrogen and oxygen.",
        ),
        body(
            "Mars",
            "#FF4500",
            0.5,
            25.0,
            0.003,
            0.018,
            "Mars is known as the Red Planet due to its reddish appearance, caused by iron oxide on its surface.",
        ),
        body(
            "Jupiter",
            "#DEB887",
            2.2,
            35.0,
            0.002,
            0.04,
            "Jupiter is the largest planet in our Solar System and has a Great Red Spot, a giant storm that has lasted for hundreds of years.",
        ),
        body(
            "Saturn",
            "#F4A460",
            2.0,
            45.0,
            0.0009,
            0.038,
            "Saturn is known for its prominent ring system, composed mainly of ice particles with a smaller amount of rocky debris and dust.",
        ),
        body(
            "Uranus",
            "#40E0D0",
            1.6,
            55.0,
            0.0004,
            0.03,
            "Uranus is tilted on its side, causing extreme seasonal variations. It also has a blue-green color due to methane in its atmosphere.",
        ),
        body(
            "Neptune",
            "#4169E1",
            1.5,
            65.0,
            0.0001,
            0.032,
            "Neptune has the strongest winds in the Solar System, with speeds reaching up to 2,100 km/h (1,300 mph).",
        ),
    ]
}

/// Sanity-check a catalog. Problems are reported, never fatal: a bad
/// descriptor just renders as degenerate geometry.
pub fn validate_catalog(bodies: &[BodyDescriptor]) -> Vec<String> {
    let mut problems = Vec::new();

    for (i, body) in bodies.iter().enumerate() {
        let numbers = [
            ("size", body.size),
            ("orbit radius", body.orbit_radius),
            ("orbit speed", body.orbit_speed),
            ("rotation speed", body.rotation_speed),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                problems.push(format!("{}: non-finite {} {}", body.name, field, value));
            }
        }
        // Doubled for the sparkle ring extents
        if body.orbit_radius.is_finite() && !(body.orbit_radius * 2.0).is_finite() {
            problems.push(format!(
                "{}: orbit radius {} too large",
                body.name, body.orbit_radius
            ));
        }
        if body.size <= 0.0 {
            problems.push(format!("{}: non-positive size {}", body.name, body.size));
        }
        if body.orbit_radius <= 0.0 {
            problems.push(format!(
                "{}: non-positive orbit radius {}",
                body.name, body.orbit_radius
            ));
        }
        if parse_hex_color(&body.color).is_none() {
            problems.push(format!("{}: unparsable color {:?}", body.name, body.color));
        }
        if bodies[..i].iter().any(|other| other.name == body.name) {
            problems.push(format!("duplicate body name {}", body.name));
        }
    }

    problems
}
