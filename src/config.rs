//! `patterns.toml` configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatternsConfig {
    pub output: OutputConfig,
    pub data: DataConfig,
    pub factory: FactoryConfig,
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl OutputConfig {
    /// Only a config that turns color off forces it; otherwise terminal
    /// detection and `NO_COLOR` decide.
    pub fn color_override(&self) -> Option<bool> {
        (!self.color).then_some(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Alternate capitals file for the configurable record finder. The
    /// bundled file is compiled into the singleton either way.
    pub capitals: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FactoryConfig {
    pub init_delay_ms: u64,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self { init_delay_ms: 1000 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateConfig {
    pub max_turns: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self { max_turns: 10 }
    }
}

impl PatternsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Config used by tests and quick runs: no color, no artificial delays.
    pub fn quiet() -> Self {
        Self {
            output: OutputConfig { color: false },
            factory: FactoryConfig { init_delay_ms: 0 },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = PatternsConfig::from_toml_str("").unwrap();
        assert_eq!(config, PatternsConfig::default());
        assert!(config.output.color);
        assert_eq!(config.factory.init_delay_ms, 1000);
        assert_eq!(config.template.max_turns, 10);
        assert!(config.data.capitals.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = PatternsConfig::from_toml_str(
            r#"
            [factory]
            init_delay_ms = 5

            [data]
            capitals = "data/capitals.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.factory.init_delay_ms, 5);
        assert_eq!(config.data.capitals, Some(PathBuf::from("data/capitals.txt")));
        assert!(config.output.color);
    }

    #[test]
    fn test_color_override_only_disables() {
        assert_eq!(PatternsConfig::default().output.color_override(), None);
        assert_eq!(PatternsConfig::quiet().output.color_override(), Some(false));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(PatternsConfig::from_toml_str("[output\ncolor = ").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[template]\nmax_turns = 4").unwrap();
        let config = PatternsConfig::load(file.path()).unwrap();
        assert_eq!(config.template.max_turns, 4);
    }
}
