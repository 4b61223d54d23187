//! `j2pc.toml` loading, grounded on `faxt::config::Config`'s
//! load/load_from_path/find_config_file shape (spec §4.7): current
//! directory, then `$HOME/.config/j2pc/`, then the platform config
//! directory, with CLI flags taking precedence over whatever a config
//! file supplies.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use j2p_drv::Options;

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "j2pc.toml";

/// What `j2pc translate` should print: raw lexemes, the parsed Class
/// Model, or (the default) the emitted *P* source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmitKind {
    Tokens,
    Ast,
    #[default]
    Source,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub fatal: bool,
    pub private: bool,
    pub emit: EmitKind,
}

impl Default for Config {
    fn default() -> Self {
        let options = Options::default();
        Self {
            fatal: options.fatal,
            private: options.private,
            emit: EmitKind::default(),
        }
    }
}

impl Config {
    pub fn options(&self) -> Options {
        Options {
            fatal: self.fatal,
            private: self.private,
        }
    }

    /// Search the standard locations, falling back to defaults if none
    /// carry a config file.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        dirs::home_dir()
            .map(|dir| dir.join(".config").join("j2pc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("j2pc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_driver_defaults() {
        let config = Config::default();
        assert!(config.fatal);
        assert!(!config.private);
        assert_eq!(config.emit, EmitKind::Source);
    }

    #[test]
    fn loads_a_config_file_from_a_specific_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "fatal = false\nprivate = true\nemit = \"ast\"\n").unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert!(!config.fatal);
        assert!(config.private);
        assert_eq!(config.emit, EmitKind::Ast);
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "fatal = not-a-bool").unwrap();
        assert!(Config::load_from_path(&path).is_err());
    }
}
