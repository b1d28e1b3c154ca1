use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseNoteError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "releasenote.toml";

/// File name looked up in the user's config directory.
pub const USER_CONFIG_FILE: &str = ".releasenote.toml";

/// Represents the complete configuration for git-release-note.
///
/// Contains the version inference defaults and output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_initial_version() -> String {
    "v0.0.0".to_string()
}

fn default_fallback_version() -> String {
    "v0.1.0".to_string()
}

/// Version inference defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    /// Prior version assumed when the repository has no tag yet.
    #[serde(default = "default_initial_version")]
    pub initial: String,

    /// Next version proposed when the prior tag cannot be parsed.
    #[serde(default = "default_fallback_version")]
    pub fallback: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            initial: default_initial_version(),
            fallback: default_fallback_version(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_summary_placeholder() -> String {
    "[summary of the changes]".to_string()
}

fn default_show_instructions() -> bool {
    true
}

/// Output options.
///
/// Controls how the release note and the command template are rendered without
/// affecting classification or version inference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_summary_placeholder")]
    pub summary_placeholder: String,

    #[serde(default = "default_show_instructions")]
    pub show_instructions: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            remote: default_remote(),
            summary_placeholder: default_summary_placeholder(),
            show_instructions: default_show_instructions(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasenote.toml` in current directory
/// 3. `.releasenote.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ReleaseNoteError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_tables_keep_defaults() {
        let config = parse_config("[output]\nremote = \"upstream\"\n").unwrap();
        assert_eq!(config.output.remote, "upstream");
        assert!(config.output.show_instructions);
        assert_eq!(config.version, VersionConfig::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = parse_config("[version\ninitial = 1").unwrap_err();
        assert!(matches!(err, ReleaseNoteError::Config(_)));
    }
}
