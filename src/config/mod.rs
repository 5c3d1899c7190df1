//! Persisted user preferences for the booking shell.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{core::BookingFlow, domain::DEFAULT_BUDGET_CEILING, errors::BookingError};

/// Overrides the base directory used for configuration.
pub const HOME_ENV: &str = "SPACEBOOK_HOME";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_budget_ceiling")]
    pub budget_ceiling: f64,
    #[serde(default)]
    pub default_flow: BookingFlow,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget_ceiling: Self::default_budget_ceiling(),
            default_flow: BookingFlow::default(),
            plain_output: false,
            high_contrast: false,
        }
    }
}

impl Config {
    pub fn default_budget_ceiling() -> f64 {
        DEFAULT_BUDGET_CEILING
    }

    /// Replaces values that would break the booking form with defaults.
    pub fn sanitized(mut self) -> Self {
        if !(self.budget_ceiling.is_finite() && self.budget_ceiling > 0.0) {
            warn!(
                ceiling = self.budget_ceiling,
                "ignoring invalid budget ceiling"
            );
            self.budget_ceiling = Self::default_budget_ceiling();
        }
        self
    }
}

/// Loads and saves [`Config`] under a base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Uses `$SPACEBOOK_HOME`, falling back to the platform config directory.
    pub fn from_env() -> Result<Self, BookingError> {
        let base = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("spacebook")))
            .unwrap_or_else(|| PathBuf::from(".spacebook"));
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BookingError> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join("config.json")))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, BookingError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| BookingError::Config(format!("{}: {}", self.config_path.display(), err)))?;
        Ok(config.sanitized())
    }

    pub fn save(&self, config: &Config) -> Result<(), BookingError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BookingError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            budget_ceiling: 350.0,
            default_flow: BookingFlow::MatchRequest,
            plain_output: true,
            ..Config::default()
        };
        manager.save(&config).unwrap();
        assert!(!tmp_path(manager.config_path()).exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn invalid_ceiling_is_replaced() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), r#"{"budget_ceiling": -1}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.budget_ceiling, DEFAULT_BUDGET_CEILING);
        assert_eq!(config.default_flow, BookingFlow::InstantBooking);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(BookingError::Config(_))));
    }
}
