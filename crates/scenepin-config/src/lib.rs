//! Host configuration for scenepin: where storyboard assets live, plus
//! the matching tunables the anchoring engine takes as [`MatchConfig`].
//! Stored as TOML under `~/.config/scenepin/`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use scenepin_engine::anchoring::MatchConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Matching tunables, mirrored from the engine defaults so behavior can
/// be retuned from the config file without touching algorithm code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub context_window: usize,
    pub acceptance_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        let engine = MatchConfig::default();
        Self {
            context_window: engine.context_window,
            acceptance_threshold: engine.acceptance_threshold,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for storyboard image assets.
    pub assets_path: PathBuf,
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded assets path
        config.assets_path = Self::expand_path(&config.assets_path).unwrap_or(config.assets_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/scenepin");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The engine-facing view of the matching tunables.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            context_window: self.matching.context_window,
            acceptance_threshold: self.matching.acceptance_threshold,
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config() -> Config {
        Config {
            assets_path: PathBuf::from("/tmp/test-boards"),
            matching: MatchingConfig::default(),
        }
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/scenepin/config.toml"));
    }

    #[test]
    fn test_matching_defaults_follow_the_engine() {
        let engine = MatchConfig::default();
        let matching = MatchingConfig::default();
        assert_eq!(matching.context_window, engine.context_window);
        assert_eq!(matching.acceptance_threshold, engine.acceptance_threshold);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = test_config();

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(deserialized.assets_path, original.assets_path);
        assert_eq!(deserialized.matching, original.matching);
    }

    #[test]
    fn test_matching_section_is_optional() {
        let config_content = r#"
assets_path = "/tmp/boards"
"#;
        let config: Config = toml::from_str(config_content).unwrap();
        assert_eq!(config.matching, MatchingConfig::default());
    }

    #[test]
    fn test_matching_can_be_retuned_from_toml() {
        let config_content = r#"
assets_path = "/tmp/boards"

[matching]
context_window = 80
acceptance_threshold = 3.5
"#;
        let config: Config = toml::from_str(config_content).unwrap();
        let match_config = config.match_config();
        assert_eq!(match_config.context_window, 80);
        assert_eq!(match_config.acceptance_threshold, 3.5);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let original = test_config();

        original.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded.assets_path, original.assets_path);
        assert_eq!(loaded.matching, original.matching);
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config_content = r#"
assets_path = "~/boards"
"#;

        let mut config: Config = toml::from_str(config_content).unwrap();
        config.assets_path = Config::expand_path(&config.assets_path).unwrap_or(config.assets_path);

        let expanded_path = config.assets_path.to_string_lossy();
        assert!(!expanded_path.starts_with('~'));
        assert!(expanded_path.contains("boards"));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "not valid toml [[[").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
