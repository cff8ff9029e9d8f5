//! Planetary system configuration loading
//!
//! The system description is JSON. It is read from, in order:
//! - the path in `SOLAR_EXPLORER_SYSTEM`
//! - `solar_system.json` in the platform config directory
//!   (e.g. `~/.config/solar-explorer/` on Linux)
//! - the default system compiled into the binary

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::Deserialize;

use super::registry::{Body, BodyKind, BodyRegistry, RegistryError};
use crate::ui::state::SimulationSettings;

const DEFAULT_SYSTEM_JSON: &str = include_str!("../../assets/solar_system.json");
const SYSTEM_FILE_NAME: &str = "solar_system.json";
pub const SYSTEM_PATH_ENV: &str = "SOLAR_EXPLORER_SYSTEM";

/// Spin rate applied when a body does not configure one
const DEFAULT_ROTATION_SPEED: f32 = 0.001;

/// Serialized planetary system document
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetarySystemConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub bodies: Vec<BodyConfig>,
    /// Initial simulation settings; missing fields fall back to defaults
    #[serde(default)]
    pub settings: Option<SimulationSettings>,
}

/// Serialized body entry
#[derive(Debug, Clone, Deserialize)]
pub struct BodyConfig {
    pub id: String,
    pub name: String,
    pub radius: f32,
    /// Hex color, e.g. `#6B93D6`
    pub color: String,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub facts: Vec<String>,
    pub texture: Option<String>,
    #[serde(default)]
    pub emissive: bool,
    #[serde(default)]
    pub has_flares: bool,
    #[serde(default)]
    pub has_atmosphere: bool,
    pub orbit_radius: Option<f32>,
    pub orbit_speed: Option<f32>,
    pub parent: Option<String>,
    #[serde(default, rename = "body_type")]
    pub kind: BodyKind,
}

fn default_rotation_speed() -> f32 {
    DEFAULT_ROTATION_SPEED
}

impl TryFrom<BodyConfig> for Body {
    type Error = RegistryError;

    fn try_from(cfg: BodyConfig) -> Result<Self, Self::Error> {
        let color = Srgba::hex(&cfg.color)
            .map(Color::from)
            .map_err(|_| RegistryError::InvalidColor {
                id: cfg.id.clone(),
                color: cfg.color.clone(),
            })?;

        Ok(Body {
            id: cfg.id,
            name: cfg.name,
            kind: cfg.kind,
            radius: cfg.radius,
            color,
            base_position: Vec3::from_array(cfg.position),
            rotation_speed: cfg.rotation_speed,
            orbit_radius: cfg.orbit_radius,
            orbit_speed: cfg.orbit_speed,
            parent: cfg.parent,
            emissive: cfg.emissive,
            has_atmosphere: cfg.has_atmosphere,
            has_flares: cfg.has_flares,
            texture: cfg.texture,
            description: cfg.description,
            facts: cfg.facts,
        })
    }
}

/// Where the loaded system came from
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum SystemSource {
    Environment(PathBuf),
    UserConfig(PathBuf),
    Embedded,
}

impl fmt::Display for SystemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemSource::Environment(path) => {
                write!(f, "{} (from ${SYSTEM_PATH_ENV})", path.display())
            }
            SystemSource::UserConfig(path) => write!(f, "{}", path.display()),
            SystemSource::Embedded => write!(f, "built-in default"),
        }
    }
}

/// A validated system ready to hand to the app
#[derive(Debug, Clone)]
pub struct LoadedSystem {
    pub registry: BodyRegistry,
    pub settings: SimulationSettings,
    pub source: SystemSource,
}

/// Load the planetary system from the first available source.
///
/// An explicitly provided file that is missing, malformed or fails registry
/// validation is an error; there is no silent fallback to the default.
pub fn load_system() -> Result<LoadedSystem> {
    if let Some(path) = std::env::var_os(SYSTEM_PATH_ENV) {
        return load_file(PathBuf::from(path), SystemSource::Environment);
    }

    if let Some(path) = user_config_path()
        && path.exists()
    {
        return load_file(path, SystemSource::UserConfig);
    }

    default_system()
}

/// The system compiled into the binary
pub fn default_system() -> Result<LoadedSystem> {
    parse_system(DEFAULT_SYSTEM_JSON, SystemSource::Embedded)
}

/// Platform-specific location of the user's system file
///
/// - macOS: ~/Library/Application Support/solar-explorer/
/// - Linux: ~/.config/solar-explorer/
/// - Windows: %APPDATA%\solar-explorer\config\
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "solar-explorer")
        .map(|dirs| dirs.config_dir().join(SYSTEM_FILE_NAME))
}

/// Read and parse an explicitly chosen system file
fn load_file(path: PathBuf, source: fn(PathBuf) -> SystemSource) -> Result<LoadedSystem> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read planetary system file {}", path.display()))?;
    parse_system(&text, source(path))
}

/// Parse and validate a system document.
pub fn parse_system(text: &str, source: SystemSource) -> Result<LoadedSystem> {
    let config: PlanetarySystemConfig = serde_json::from_str(text)
        .with_context(|| format!("invalid planetary system json in {source}"))?;

    let bodies = config
        .bodies
        .into_iter()
        .map(Body::try_from)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid body in {source}"))?;
    let registry = BodyRegistry::new(bodies)
        .with_context(|| format!("invalid planetary system in {source}"))?
        .with_system_info(config.name, config.description);

    Ok(LoadedSystem {
        registry,
        settings: config.settings.unwrap_or_default(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_system_is_valid() {
        let system = default_system().expect("embedded system should load");
        let registry = &system.registry;

        assert_eq!(system.source, SystemSource::Embedded);
        assert_eq!(registry.name(), "Solar System");
        assert_eq!(registry.center().map(|b| b.id.as_str()), Some("sun"));

        let moon = registry.get("moon").expect("moon present");
        assert_eq!(moon.parent.as_deref(), Some("earth"));
        assert_eq!(moon.kind, BodyKind::Moon);

        let iss = registry.get("iss").expect("iss present");
        assert_eq!(iss.kind, BodyKind::Satellite);
        assert_eq!(iss.rotation_speed, DEFAULT_ROTATION_SPEED);

        assert!(registry.get("sun").is_some_and(|sun| sun.emissive && sun.has_flares));

        let mut satellites: Vec<_> = registry
            .iter()
            .filter(|b| b.parent.as_deref() == Some("earth") && b.kind == BodyKind::Satellite)
            .map(|b| b.id.as_str())
            .collect();
        satellites.sort_unstable();
        assert_eq!(satellites, ["gps", "hubble", "iss"]);

        let hubble = registry.get("hubble").expect("hubble present");
        assert_eq!(hubble.orbit_radius, Some(7.2));
        assert_eq!(hubble.orbit_speed, Some(0.06));
    }

    #[test]
    fn test_inner_planets_use_seed_values() {
        let system = default_system().unwrap();
        let mercury = system.registry.get("mercury").unwrap();
        assert_eq!(mercury.radius, 0.8);
        assert_eq!(mercury.orbit_radius, Some(15.0));
        assert_eq!(mercury.orbit_speed, Some(0.02));
        assert_eq!(mercury.rotation_speed, 0.005);

        let venus = system.registry.get("venus").unwrap();
        assert_eq!(venus.orbit_radius, Some(22.0));
        assert_eq!(venus.rotation_speed, -0.002);
    }

    /// Write `contents` to a fresh file under the system temp dir
    fn temp_system_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("solar-explorer-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_user_file_loaded_with_its_source() {
        let json = r##"{
            "name": "Binary",
            "description": "Two bodies",
            "bodies": [
                { "id": "sun", "name": "Sun", "radius": 5.0, "color": "#FDB813" },
                { "id": "rock", "name": "Rock", "radius": 1.0, "color": "#888888", "orbit_radius": 10.0 }
            ]
        }"##;
        let path = temp_system_file("binary.json", json);

        let system = load_file(path.clone(), SystemSource::UserConfig).unwrap();
        assert_eq!(system.source, SystemSource::UserConfig(path.clone()));
        assert_eq!(system.registry.name(), "Binary");
        assert_eq!(system.registry.len(), 2);
        assert_eq!(system.settings, SimulationSettings::default());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("solar-explorer-does-not-exist/solar_system.json");
        let err = load_file(path.clone(), SystemSource::Environment).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains(&path.display().to_string()), "{chain}");
    }

    #[test]
    fn test_invalid_user_file_does_not_fall_back() {
        let json = r##"{
            "name": "Broken",
            "bodies": [
                { "id": "sun", "name": "Sun", "radius": 5.0, "color": "#FDB813" },
                { "id": "moon", "name": "Moon", "radius": 0.3, "color": "#D3D3D3", "orbit_radius": 4.0, "parent": "earth" }
            ]
        }"##;
        let path = temp_system_file("broken.json", json);

        let err = load_file(path.clone(), SystemSource::UserConfig).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::UnknownParent { .. })
        ));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_default_settings_match_document() {
        let system = default_system().unwrap();
        assert_eq!(system.settings, SimulationSettings::default());
    }

    #[test]
    fn test_color_parsed_from_hex() {
        let system = default_system().unwrap();
        let earth = system.registry.get("earth").unwrap();
        assert_eq!(earth.color, Color::from(Srgba::hex("6B93D6").unwrap()));
    }

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let json = r##"{
            "name": "Tiny",
            "settings": { "time_speed": 2.5, "show_labels": false },
            "bodies": [
                { "id": "sun", "name": "Sun", "radius": 5.0, "color": "#FDB813" },
                { "id": "rock", "name": "Rock", "radius": 1.0, "color": "#888888", "orbit_radius": 10.0, "orbit_speed": 0.02 }
            ]
        }"##;
        let system = parse_system(json, SystemSource::Embedded).unwrap();
        assert_eq!(system.settings.time_speed, 2.5);
        assert!(!system.settings.show_labels);
        assert!(system.settings.show_orbits);
        assert_eq!(
            system.settings.camera_distance,
            SimulationSettings::default().camera_distance
        );
        assert_eq!(system.registry.get("rock").unwrap().kind, BodyKind::Planet);
    }

    #[test]
    fn test_unknown_parent_fails_fast() {
        let json = r##"{
            "name": "Broken",
            "bodies": [
                { "id": "sun", "name": "Sun", "radius": 5.0, "color": "#FDB813" },
                { "id": "moon", "name": "Moon", "radius": 0.3, "color": "#D3D3D3", "orbit_radius": 4.0, "parent": "earth" }
            ]
        }"##;
        let err = parse_system(json, SystemSource::Embedded).unwrap_err();
        let registry_err = err.downcast_ref::<RegistryError>().expect("registry error in chain");
        assert!(matches!(registry_err, RegistryError::UnknownParent { .. }));
    }

    #[test]
    fn test_bad_color_rejected() {
        let json = r##"{
            "name": "Broken",
            "bodies": [ { "id": "sun", "name": "Sun", "radius": 5.0, "color": "yellowish" } ]
        }"##;
        let err = parse_system(json, SystemSource::Embedded).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse_system("{ not json", SystemSource::Embedded).is_err());
    }
}
