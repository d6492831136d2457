//! Viewer configuration loading

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::markers::MarkerLabels;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level viewer configuration. Every field has a default so a partial or
/// absent file still yields a working viewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub asset: AssetConfig,
    #[serde(default)]
    pub viewer: ViewerSettings,
    #[serde(default)]
    pub markers: MarkerLabels,
}

/// Which asset to load and which environment maps light it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Path to the glTF scene, relative to the asset root.
    #[serde(default = "default_asset_path")]
    pub path: String,
    /// Diffuse environment lighting map (KTX2). Environment lighting is
    /// skipped when either map is absent.
    #[serde(default)]
    pub environment_diffuse: Option<String>,
    /// Specular environment lighting map (KTX2).
    #[serde(default)]
    pub environment_specular: Option<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            path: default_asset_path(),
            environment_diffuse: None,
            environment_specular: None,
        }
    }
}

/// Presentation and capability flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Background color as linear-ish sRGB components.
    #[serde(default = "default_background")]
    pub background: [f32; 3],
    /// Whether the point-of-interest markers and hover labels are enabled.
    #[serde(default = "default_true")]
    pub points_of_interest: bool,
    /// Initial auto-rotation state.
    #[serde(default)]
    pub auto_rotate: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            background: default_background(),
            points_of_interest: true,
            auto_rotate: false,
        }
    }
}

fn default_asset_path() -> String {
    "models/scene.gltf".to_string()
}

fn default_background() -> [f32; 3] {
    // Neutral gray, 0x777777.
    [0.466, 0.466, 0.466]
}

fn default_true() -> bool {
    true
}

impl ViewerConfig {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Parse a configuration file, falling back to defaults when the file
    /// does not exist. A present-but-malformed file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.asset.path, "models/scene.gltf");
        assert!(config.viewer.points_of_interest);
        assert!(!config.viewer.auto_rotate);
        assert_eq!(config.asset.environment_diffuse, None);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: ViewerConfig = toml::from_str(
            r#"
            [asset]
            path = "models/crown.glb"

            [viewer]
            auto_rotate = true
            "#,
        )
        .unwrap();
        assert_eq!(config.asset.path, "models/crown.glb");
        assert!(config.viewer.auto_rotate);
        // Unspecified sections keep their defaults.
        assert!(config.viewer.points_of_interest);
        assert_eq!(config.markers.top, "Top of model");
    }

    #[test]
    fn test_parse_marker_labels() {
        let config: ViewerConfig = toml::from_str(
            r#"
            [markers]
            top = "This is top of crown"
            middle = "This is middle of crown"
            bottom = "This is bottom of crown"
            "#,
        )
        .unwrap();
        assert_eq!(config.markers.top, "This is top of crown");
        assert_eq!(config.markers.bottom, "This is bottom of crown");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let result: Result<ViewerConfig, _> = toml::from_str("[viewer]\nbackground = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ViewerConfig::load_or_default(Path::new("/nonexistent/isoview.toml")).unwrap();
        assert_eq!(config.asset.path, "models/scene.gltf");
    }
}
