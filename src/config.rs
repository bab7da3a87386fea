use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tool::{PenSize, ToolProfile, ToolState};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "SKETCHBOOK_CONFIG";

/// Startup settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Directory the per-session journal databases are written to
    pub journal_dir: PathBuf,
    pub background: [u8; 3],
    pub default_color: [u8; 3],
    pub default_pen_size: i64,
    pub tool_profile: ToolProfile,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            journal_dir: PathBuf::from("."),
            background: [255, 255, 255],
            default_color: [0, 0, 0],
            default_pen_size: 2,
            tool_profile: ToolProfile::Standard,
        }
    }
}

impl SketchConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.pen_size()?;
        Ok(config)
    }

    /// Load from the file named by `SKETCHBOOK_CONFIG`, or use defaults if unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                log::info!("Loading config from {:?}", path);
                Self::load(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    pub fn pen_size(&self) -> Result<PenSize, ConfigError> {
        Ok(PenSize::new(self.default_pen_size)?)
    }

    /// Tool state a new session starts with
    pub fn initial_tools(&self) -> Result<ToolState, ConfigError> {
        let [r, g, b] = self.default_color;
        Ok(ToolState::new(
            self.tool_profile,
            Color32::from_rgb(r, g, b),
            self.pen_size()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SketchConfig::from_json(r#"{ "tool_profile": "restricted" }"#)
            .expect("valid config");
        assert_eq!(config.tool_profile, ToolProfile::Restricted);
        assert_eq!(config.background, [255, 255, 255]);
        assert_eq!(config.default_pen_size, 2);
    }

    #[test]
    fn test_out_of_range_pen_size_rejected() {
        let result = SketchConfig::from_json(r#"{ "default_pen_size": 300 }"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            SketchConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_initial_tools() {
        let config = SketchConfig {
            default_color: [1, 2, 3],
            default_pen_size: 9,
            ..SketchConfig::default()
        };
        let tools = config.initial_tools().expect("valid tools");
        assert_eq!(tools.color(), Color32::from_rgb(1, 2, 3));
        assert_eq!(tools.size().get(), 9);
    }
}
