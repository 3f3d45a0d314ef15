use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{app_data_dir, config_file_in, ensure_dir, records_dir_in, write_atomic};
use crate::domain::summary::{SummaryPolicy, DEFAULT_CAUTION_PERCENT};
use crate::errors::{LedgerError, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    pub locale: String,
    /// Budget utilization (percent) at which health turns to caution.
    #[serde(default = "default_caution_percent")]
    pub caution_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_caution_percent() -> f64 {
    DEFAULT_CAUTION_PERCENT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "INR".into(),
            locale: "en-IN".into(),
            caution_percent: DEFAULT_CAUTION_PERCENT,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.caution_percent.is_finite()
            || self.caution_percent <= 0.0
            || self.caution_percent > 100.0
        {
            return Err(ValidationError::new(
                "caution_percent",
                "must be within (0, 100]",
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(ValidationError::new("currency", "must not be empty"));
        }
        Ok(())
    }

    pub fn summary_policy(&self) -> SummaryPolicy {
        SummaryPolicy {
            caution_percent: self.caution_percent,
        }
    }

    /// Directory the JSON record store should use.
    pub fn records_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| records_dir_in(base))
    }
}

/// Loads and saves [`Config`] under the application data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `FINTRACK_HOME` or `~/.fintrack`.
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns defaults when no config file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            currency: "EUR".into(),
            locale: "de-DE".into(),
            caution_percent: 85.0,
            data_dir: None,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = Config {
            caution_percent: 120.0,
            ..Config::default()
        };
        let err = config.validate().expect_err("threshold above 100 must fail");
        assert_eq!(err.field, "caution_percent");
        assert!(Config {
            caution_percent: f64::NAN,
            ..Config::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn missing_threshold_uses_default() {
        let config: Config =
            serde_json::from_str(r#"{"currency":"INR","locale":"en-IN"}"#).unwrap();
        assert_eq!(config.caution_percent, DEFAULT_CAUTION_PERCENT);
        assert_eq!(config.summary_policy(), SummaryPolicy::default());
    }
}
