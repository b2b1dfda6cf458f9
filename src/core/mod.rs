//! Core scene plumbing: the camera rig

pub mod orbit_camera;

pub use orbit_camera::{CameraRigPlugin, MainCamera};
