//! Configuration file support
//!
//! Loads settings from ~/.snippets.toml (or %USERPROFILE%\.snippets.toml on Windows)
//!
//! Example:
//! ```toml
//! # snippets configuration
//! default-language = "rust"
//! default-style = "monokai"
//! store-path = "/var/lib/snippets/snippets.toml"
//! source = "builtin"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};
use crate::highlight::SourceKind;
use crate::snippet::{Defaults, DEFAULT_LANGUAGE, DEFAULT_STYLE};

const CONFIG_FILE: &str = ".snippets.toml";
const STORE_FILE: &str = "snippets.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Language applied when a submission names none
    pub default_language: String,
    /// Style applied when a submission names none
    pub default_style: String,
    /// Where the snippet store lives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    /// Which highlighting catalog to validate against
    pub source: SourceKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            default_style: DEFAULT_STYLE.to_string(),
            store_path: None,
            source: SourceKind::default(),
        }
    }
}

/// Home directory, per platform
fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(CONFIG_FILE))
    }

    /// Load configuration from the default path; a missing file yields defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|source| SnippetError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config file contents
    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Field defaults for new snippets
    pub fn defaults(&self) -> Defaults {
        Defaults {
            language: self.default_language.clone(),
            style: self.default_style.clone(),
        }
    }

    /// Resolved store location: configured path, else under the home
    /// directory, else the working directory
    pub fn store_path(&self) -> PathBuf {
        if let Some(path) = &self.store_path {
            return path.clone();
        }
        match home_dir() {
            Some(home) => home.join(".snippets").join(STORE_FILE),
            None => PathBuf::from(STORE_FILE),
        }
    }

    /// Save current configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = format!(
            "# snippets configuration\n# Generated automatically\n\n{}",
            toml::to_string_pretty(self)?
        );
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
default-language = "rust"
default-style = "monokai"
store-path = "/tmp/snippets.toml"
source = "syntect"
        "#;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.default_language, "rust");
        assert_eq!(config.default_style, "monokai");
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/snippets.toml")));
        assert_eq!(config.source, SourceKind::Syntect);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse("default-style = \"vim\"").unwrap();

        assert_eq!(config.default_language, "python");
        assert_eq!(config.default_style, "vim");
        assert_eq!(config.source, SourceKind::Builtin);
        assert_eq!(
            config.defaults(),
            Defaults {
                language: "python".to_string(),
                style: "vim".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("line-numbers = true").is_err());
        assert!(Config::parse("source = \"pygments\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            default_language: "go".to_string(),
            store_path: Some(dir.path().join("store.toml")),
            ..Default::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_store_path_override() {
        let config = Config {
            store_path: Some(PathBuf::from("here.toml")),
            ..Default::default()
        };
        assert_eq!(config.store_path(), PathBuf::from("here.toml"));
    }
}
