//! Build and query configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment override for [`Config::artifact_dir`]
pub const ARTIFACT_DIR_ENV: &str = "COURSEFINDER_ARTIFACT_DIR";

const LOCAL_CONFIG_FILE: &str = "coursefinder.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vocabulary bound for the count vectorizer
    pub max_features: usize,

    /// Recommendations returned when the caller gives no `k`
    pub default_k: usize,

    /// Directory holding the item table and similarity matrix
    pub artifact_dir: PathBuf,

    /// Raw CSV dataset
    pub dataset: PathBuf,

    /// Compute similarity rows on the rayon pool
    pub parallel: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            max_features: 5000,
            default_k: 6,
            artifact_dir: PathBuf::from("models"),
            dataset: PathBuf::from("Data/Coursera.csv"),
            parallel: true,
        }
    }

    /// Parse a TOML file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Resolve configuration: `explicit` path, then `./coursefinder.toml`,
    /// then the user config dir, then defaults. The artifact dir env
    /// override is applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "using config file");
                    Self::from_file(&path)?
                }
                None => Self::new(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let user = dirs::config_dir()?.join("coursefinder").join("config.toml");
        user.is_file().then_some(user)
    }

    fn apply_env(&mut self) {
        if let Some(dir) = std::env::var_os(ARTIFACT_DIR_ENV) {
            if !dir.is_empty() {
                self.artifact_dir = PathBuf::from(dir);
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.max_features, 5000);
        assert_eq!(config.default_k, 6);
        assert_eq!(config.artifact_dir, PathBuf::from("models"));
        assert!(config.parallel);
    }

    #[test]
    fn test_from_file_partial_keeps_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("coursefinder.toml");
        std::fs::write(&path, "max_features = 100\nparallel = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.max_features, 100);
        assert!(!config.parallel);
        assert_eq!(config.default_k, 6);
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "max_features = \"lots\"").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/coursefinder.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    #[serial]
    fn test_env_overrides_artifact_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("coursefinder.toml");
        std::fs::write(&path, "artifact_dir = \"from-file\"\n").unwrap();

        std::env::set_var(ARTIFACT_DIR_ENV, "/srv/coursefinder");
        let config = Config::load(Some(&path));
        std::env::remove_var(ARTIFACT_DIR_ENV);

        assert_eq!(
            config.unwrap().artifact_dir,
            PathBuf::from("/srv/coursefinder")
        );
    }

    #[test]
    #[serial]
    fn test_explicit_file_without_env() {
        std::env::remove_var(ARTIFACT_DIR_ENV);
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("coursefinder.toml");
        std::fs::write(&path, "artifact_dir = \"from-file\"\ndefault_k = 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.artifact_dir, PathBuf::from("from-file"));
        assert_eq!(config.default_k, 3);
    }
}
