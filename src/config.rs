use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ConfigError;
use crate::flash::FEEDBACK_WINDOW_MS;
use crate::session::{SessionConfig, SESSION_SECS, SIGN_SECS};
use crate::sign::Difficulty;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub difficulty: Difficulty,
    pub session_secs: u32,
    pub sign_secs: u32,
    pub feedback_ms: u64,
    pub mute: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            session_secs: SESSION_SECS,
            sign_secs: SIGN_SECS,
            feedback_ms: FEEDBACK_WINDOW_MS,
            mute: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_secs == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "session_secs",
            });
        }
        if self.sign_secs == 0 {
            return Err(ConfigError::InvalidDuration { field: "sign_secs" });
        }
        if self.feedback_ms == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "feedback_ms",
            });
        }
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            session_secs: self.session_secs,
            sign_secs: self.sign_secs,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "reflex") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("reflex_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files fall back to defaults.
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        assert_eq!(store.path(), path.as_path());
        let cfg = Config {
            difficulty: Difficulty::Hard,
            session_secs: 30,
            sign_secs: 5,
            feedback_ms: 150,
            mute: true,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn garbage_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "difficulty": "hard" }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.session_secs, 60);
        assert_eq!(cfg.sign_secs, 10);
    }

    #[test]
    fn zero_durations_are_rejected() {
        let cfg = Config {
            sign_secs: 0,
            ..Config::default()
        };
        assert_matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDuration { field: "sign_secs" })
        );
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn session_config_mirrors_durations() {
        let cfg = Config {
            session_secs: 45,
            sign_secs: 3,
            ..Config::default()
        };
        assert_eq!(
            cfg.session_config(),
            SessionConfig {
                session_secs: 45,
                sign_secs: 3
            }
        );
    }
}
