use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

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

/// One HTML attribute added to the opening tag of every editor wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperAttribute {
    pub name: String,
    pub value: String,
}

/// CLI configuration: the attributes stamped onto editor wrapper blocks.
///
/// Stored as an array of tables so the order in the file is the order the
/// attributes are rendered in:
///
/// ```toml
/// [[wrapper_attributes]]
/// name = "data-load-content"
/// value = "false"
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wrapper_attributes: Vec<WrapperAttribute>,
}

impl Default for Config {
    fn default() -> Self {
        // The attribute the rich-text editor integration historically passes.
        Self {
            wrapper_attributes: vec![WrapperAttribute {
                name: "data-load-content".to_string(),
                value: "false".to_string(),
            }],
        }
    }
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

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/macro-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The attribute list as plain pairs, the shape the engine codec takes.
    pub fn wrapper_attribute_pairs(&self) -> Vec<(String, String)> {
        self.wrapper_attributes
            .iter()
            .map(|a| (a.name.clone(), a.value.clone()))
            .collect()
    }
}
