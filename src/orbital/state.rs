//! Per-body orbit and spin state.
//!
//! Placement on the orbit ring is drawn once when a body is created. The body
//! never moves along its ring; instead the enclosing orbit group is rotated by
//! `elapsed * orbit_speed`, which sweeps the fixed point around the origin.
//! Spin is counted in ticks so the accumulated angle stays exact.

use std::f64::consts::TAU;

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::orbital::catalog::BodyDescriptor;

/// Vertical gap between the body surface and its name label.
pub const LABEL_GAP: f32 = 0.5;
/// Vertical gap between the body surface and its info overlay.
pub const OVERLAY_GAP: f32 = 1.0;
/// Bound of the random vertical offset, in world units.
pub const MAX_VERTICAL_OFFSET: f32 = 1.0;
/// Frame rate used to convert per-tick spin into per-second spin.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// How self-rotation advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinMode {
    /// `rotation_speed` radians per rendered frame (frame-rate dependent).
    #[default]
    PerFrame,
    /// `rotation_speed * REFERENCE_FRAME_RATE` radians per second of elapsed time.
    PerSecond,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    initial_angle: f32,
    vertical_offset: f32,
    orbit_radius: f32,
    orbit_speed: f32,
    rotation_speed: f32,
    spin_ticks: u64,
}

impl OrbitState {
    /// Draw a fresh placement for `descriptor`.
    pub fn new<R: Rng + ?Sized>(descriptor: &BodyDescriptor, rng: &mut R) -> Self {
        let initial_angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let vertical_offset = rng.gen_range(-MAX_VERTICAL_OFFSET..MAX_VERTICAL_OFFSET);
        Self::with_placement(descriptor, initial_angle, vertical_offset)
    }

    /// Build a state from an explicit placement.
    pub fn with_placement(
        descriptor: &BodyDescriptor,
        initial_angle: f32,
        vertical_offset: f32,
    ) -> Self {
        Self {
            initial_angle,
            vertical_offset,
            orbit_radius: descriptor.orbit_radius,
            orbit_speed: descriptor.orbit_speed,
            rotation_speed: descriptor.rotation_speed,
            spin_ticks: 0,
        }
    }

    pub fn initial_angle(&self) -> f32 {
        self.initial_angle
    }

    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    /// Fixed position of the body inside its orbit group.
    pub fn local_position(&self) -> Vec3 {
        Vec3::new(
            self.initial_angle.cos() * self.orbit_radius,
            self.vertical_offset,
            self.initial_angle.sin() * self.orbit_radius,
        )
    }

    /// Where the name label sits, relative to the orbit group.
    pub fn label_anchor(&self, size: f32) -> Vec3 {
        self.local_position() + Vec3::Y * (size + LABEL_GAP)
    }

    /// Where the info overlay sits, relative to the orbit group.
    pub fn overlay_anchor(&self, size: f32) -> Vec3 {
        self.local_position() + Vec3::Y * (size + OVERLAY_GAP)
    }

    /// Unwrapped revolution angle after `elapsed_secs`.
    pub fn revolution_angle(&self, elapsed_secs: f64) -> f64 {
        elapsed_secs * f64::from(self.orbit_speed)
    }

    /// Orbit group rotation about +Y after `elapsed_secs`.
    pub fn revolution_rotation(&self, elapsed_secs: f64) -> Quat {
        Quat::from_rotation_y(wrap_angle(self.revolution_angle(elapsed_secs)))
    }

    /// Advance spin by one frame.
    pub fn tick(&mut self) {
        self.spin_ticks = self.spin_ticks.saturating_add(1);
    }

    pub fn spin_ticks(&self) -> u64 {
        self.spin_ticks
    }

    /// Unwrapped spin angle.
    pub fn spin_angle(&self, mode: SpinMode, elapsed_secs: f64) -> f64 {
        let speed = f64::from(self.rotation_speed);
        match mode {
            SpinMode::PerFrame => self.spin_ticks as f64 * speed,
            SpinMode::PerSecond => elapsed_secs * speed * REFERENCE_FRAME_RATE,
        }
    }

    /// Body rotation about its own +Y axis.
    pub fn spin_rotation(&self, mode: SpinMode, elapsed_secs: f64) -> Quat {
        Quat::from_rotation_y(wrap_angle(self.spin_angle(mode, elapsed_secs)))
    }
}

/// Reduce an angle into `[0, 2π)` before it reaches f32 transforms.
pub fn wrap_angle(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}
