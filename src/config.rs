//! Orrery configuration
//!
//! Everything has a built-in default. An optional JSON file can override any
//! subset of fields:
//! - `$ORRERY_CONFIG` if set
//! - otherwise `orrery.json` in the platform config directory
//!   (e.g. `~/.config/solar_orrery/orrery.json` on Linux)
//!
//! A missing file is not an error. A broken file is logged and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::body::PlacementRng;
use crate::orbital::{
    BodyDescriptor, Catalog, SpinMode, default_catalog, parse_hex_color, validate_catalog,
};

pub const CONFIG_ENV_VAR: &str = "ORRERY_CONFIG";
const CONFIG_FILE_NAME: &str = "orrery.json";

/// Scene-wide settings
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub background_color: String,
    pub ambient_intensity: f32,
    pub point_light_intensity: f32,
    pub particle_count: usize,
    pub camera_position: [f32; 3],
    /// Vertical field of view in degrees
    pub camera_fov: f32,
    pub bloom_threshold: f32,
    pub bloom_smoothing: f32,
    pub noise_opacity: f32,
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    pub spin_mode: SpinMode,
    /// Fixed seed for placement and particles; random when absent
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background_color: "#000000".to_string(),
            ambient_intensity: 0.1,
            point_light_intensity: 1.5,
            particle_count: 10_000,
            camera_position: [0.0, 30.0, 100.0],
            camera_fov: 60.0,
            bloom_threshold: 0.0,
            bloom_smoothing: 0.9,
            noise_opacity: 0.02,
            enable_pan: true,
            enable_zoom: true,
            enable_rotate: true,
            spin_mode: SpinMode::PerFrame,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn background(&self) -> Color {
        parse_hex_color(&self.background_color).unwrap_or(Color::BLACK)
    }

    pub fn camera_translation(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }
}

/// Top-level config file layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub scene: SceneConfig,
    pub bodies: Vec<BodyDescriptor>,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            bodies: default_catalog(),
        }
    }
}

impl OrreryConfig {
    /// Non-fatal problems worth logging.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = validate_catalog(&self.bodies);
        if parse_hex_color(&self.scene.background_color).is_none() {
            warnings.push(format!(
                "unparsable background color {:?}",
                self.scene.background_color
            ));
        }
        if self.scene.camera_fov <= 0.0 || self.scene.camera_fov >= 180.0 {
            warnings.push(format!("camera fov {} out of range", self.scene.camera_fov));
        }
        if !(0.0..=1.0).contains(&self.scene.noise_opacity) {
            warnings.push(format!(
                "noise opacity {} outside 0..=1",
                self.scene.noise_opacity
            ));
        }
        warnings
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<OrreryConfig> {
    serde_json::from_str(contents).context("invalid orrery config json")
}

/// Read a config file. `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> anyhow::Result<Option<OrreryConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse_config(&contents).with_context(|| format!("in {}", path.display()))?;
    Ok(Some(config))
}

/// Resolve where the config file should live.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("", "", "solar_orrery")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load the config, falling back to defaults on any problem.
pub fn load_config() -> OrreryConfig {
    let Some(path) = config_path() else {
        warn!("Could not resolve a config directory; using built-in defaults");
        return OrreryConfig::default();
    };

    let config = match load_config_file(&path) {
        Ok(Some(config)) => {
            info!("Loaded orrery config from {}", path.display());
            config
        }
        Ok(None) => {
            debug!("No config at {}; using built-in defaults", path.display());
            OrreryConfig::default()
        }
        Err(err) => {
            warn!("Ignoring orrery config: {:#}", err);
            OrreryConfig::default()
        }
    };

    for warning in config.warnings() {
        warn!("Config: {}", warning);
    }

    config
}

/// Loads configuration and inserts the scene, catalog and RNG resources.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = load_config();
        app.insert_resource(PlacementRng::from_seed_option(config.scene.seed))
            .insert_resource(ClearColor(config.scene.background()))
            .insert_resource(Catalog(config.bodies))
            .insert_resource(config.scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_path(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "solar-orrery-{}-{}-{}.json",
            test_name,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, OrreryConfig::default());
        assert_eq!(config.bodies.len(), 8);
    }

    #[test]
    fn test_partial_scene_override() {
        let config = parse_config(
            r#"{ "scene": { "particle_count": 500, "spin_mode": "per_second", "seed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(config.scene.particle_count, 500);
        assert_eq!(config.scene.spin_mode, SpinMode::PerSecond);
        assert_eq!(config.scene.seed, Some(7));
        // Untouched fields keep their defaults.
        assert_eq!(config.scene.camera_fov, 60.0);
        assert_eq!(config.bodies, default_catalog());
    }

    #[test]
    fn test_body_override() {
        let config = parse_config(
            r##"{ "bodies": [ {
                "name": "Vulcan", "color": "#ff0000", "size": 0.3,
                "orbit_radius": 6.0, "orbit_speed": 0.02, "rotation_speed": 0.01,
                "facts": "Hypothetical."
            } ] }"##,
        )
        .unwrap();
        assert_eq!(config.bodies.len(), 1);
        assert_eq!(config.bodies[0].name, "Vulcan");
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_config("{ not json").is_err());
        assert!(parse_config(r#"{ "scene": { "camera_fov": "wide" } }"#).is_err());
    }

    #[test]
    fn test_warnings_for_bad_scene_values() {
        let mut config = OrreryConfig::default();
        config.scene.background_color = "black-ish".to_string();
        config.scene.camera_fov = 0.0;
        config.scene.noise_opacity = 2.0;
        assert_eq!(config.warnings().len(), 3);
        assert_eq!(config.scene.background(), Color::BLACK);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = unique_temp_path("missing");
        assert!(load_config_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let path = unique_temp_path("roundtrip");
        let mut config = OrreryConfig::default();
        config.scene.noise_opacity = 0.05;
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = load_config_file(&path).unwrap().unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }
}
