use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LENGTH, DEFAULT_VARIANT_COUNT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gemini model settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Draft generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model to use (default: gemini-flash-lite-latest)
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens for one completion
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of draft variants generated per batch
    #[serde(default = "default_variant_count")]
    pub variant_count: usize,
    /// Default lower bound of the body-length hint, in characters
    #[serde(default = "default_length_min")]
    pub default_length_min: u32,
    /// Default upper bound of the body-length hint, in characters
    #[serde(default = "default_length_max")]
    pub default_length_max: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            variant_count: default_variant_count(),
            default_length_min: default_length_min(),
            default_length_max: default_length_max(),
        }
    }
}

fn default_model() -> String {
    "gemini-flash-lite-latest".to_string()
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_variant_count() -> usize {
    DEFAULT_VARIANT_COUNT
}

fn default_length_min() -> u32 {
    DEFAULT_LENGTH.0
}

fn default_length_max() -> u32 {
    DEFAULT_LENGTH.1
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("eigyo");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path.parent().unwrap();

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs() -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.llm.model, "gemini-flash-lite-latest");
        assert_eq!(config.llm.max_output_tokens, 2048);
        assert_eq!(config.generation.variant_count, 3);
        assert_eq!(config.generation.default_length_min, 200);
        assert_eq!(config.generation.default_length_max, 300);
    }

    #[test]
    fn test_partial_config_overrides_only_named_keys() {
        let toml = r#"
            [llm]
            model = "gemini-2.0-flash"

            [generation]
            variant_count = 5
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.max_output_tokens, 2048);
        assert_eq!(config.generation.variant_count, 5);
        assert_eq!(config.generation.default_length_min, 200);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let reparsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.llm.model, config.llm.model);
        assert_eq!(
            reparsed.generation.variant_count,
            config.generation.variant_count
        );
    }
}
