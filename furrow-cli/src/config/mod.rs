//! Configuration module

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Reading configuration
    #[serde(default)]
    pub read: ReadConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Reading-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ReadConfig {
    /// Scan buffer capacity in bytes
    ///
    /// Also the upper bound on a single cell plus its trailing delimiter.
    pub buffer_capacity: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: furrow_core::DEFAULT_BUFFER_CAPACITY,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        let config = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Commented configuration template for `generate-config`
    pub fn template() -> String {
        format!(
            r#"# Furrow CLI configuration

[read]
# Scan buffer capacity in bytes. The buffer is allocated once per cursor
# and also bounds the longest single cell plus its trailing delimiter.
buffer_capacity = {}

[output]
# Pretty print JSON output
pretty_json = true
"#,
            furrow_core::DEFAULT_BUFFER_CAPACITY
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let config = CliConfig::default();
        assert_eq!(config.read.buffer_capacity, 8 * 1024);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("furrow.toml");
        fs::write(&path, "[read]\nbuffer_capacity = 1024\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.read.buffer_capacity, 1024);
        // untouched section keeps its defaults
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[read\nbuffer_capacity = ").unwrap();

        let result = CliConfig::load(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Configuration error"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = CliConfig::load(Path::new("/nonexistent/furrow.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_template_is_valid_toml() {
        let config: CliConfig = toml::from_str(&CliConfig::template()).unwrap();
        assert_eq!(config.read.buffer_capacity, 8 * 1024);
    }
}
