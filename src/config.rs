//! Site configuration.
//!
//! Read from an optional `portfolio.json` (path overridable with
//! `PORTFOLIO_CONFIG`), then adjusted by environment variables. Anything
//! missing falls back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::DEFAULT_FRAME_RATE;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.json";
pub const CONFIG_PATH_VAR: &str = "PORTFOLIO_CONFIG";
pub const API_ORIGIN_VAR: &str = "PORTFOLIO_API_ORIGIN";
pub const REDUCED_MOTION_VAR: &str = "PORTFOLIO_REDUCED_MOTION";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("frame rate must be positive, got {0}")]
    InvalidFrameRate(f64),
    #[error("api origin must start with http:// or https://, got `{0}`")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin of the contact API, e.g. `http://localhost:8000`.
    pub api_origin: String,
    /// Forces reduced motion on or off regardless of the platform setting.
    pub reduced_motion: Option<bool>,
    pub frame_rate: f64,
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_origin: "http://localhost:8000".to_string(),
            reduced_motion: None,
            frame_rate: DEFAULT_FRAME_RATE,
            window_title: "Vinod Raja | ML Engineer & Django Developer".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl SiteConfig {
    /// Load from the default location and the process environment. Errors
    /// are logged and the defaults used instead.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("{}; using defaults", err);
                Self::default()
            }
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        if let Err(err) = config.validate() {
            log::warn!("{}; using defaults", err);
            return Self::default();
        }
        config
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(Some(config))
    }

    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(origin) = var(API_ORIGIN_VAR) {
            let origin = origin.trim();
            if !origin.is_empty() {
                self.api_origin = origin.to_string();
            }
        }
        if let Some(flag) = var(REDUCED_MOTION_VAR) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.reduced_motion = Some(true),
                "0" | "false" | "no" | "off" => self.reduced_motion = Some(false),
                other => log::warn!("ignoring {}={}", REDUCED_MOTION_VAR, other),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        if !(self.api_origin.starts_with("http://") || self.api_origin.starts_with("https://")) {
            return Err(ConfigError::InvalidOrigin(self.api_origin.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("portfolio-{}-{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("portfolio-does-not-exist.json");
        assert!(SiteConfig::load_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_config("partial", r#"{ "api_origin": "https://api.example.com", "frame_rate": 120 }"#);
        let config = SiteConfig::load_from(&path).unwrap().unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.api_origin, "https://api.example.com");
        assert_eq!(config.frame_rate, 120.0);
        assert_eq!(config.window_width, 1280.0);
        assert_eq!(config.reduced_motion, None);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let path = temp_config("broken", "{ not json");
        let result = SiteConfig::load_from(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let path = temp_config("zero-rate", r#"{ "frame_rate": 0 }"#);
        let result = SiteConfig::load_from(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::InvalidFrameRate(_))));

        let config = SiteConfig { api_origin: "localhost:8000".to_string(), ..SiteConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidOrigin(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let vars: HashMap<&str, &str> = [(API_ORIGIN_VAR, "https://prod.example.com"), (REDUCED_MOTION_VAR, "TRUE")]
            .into_iter()
            .collect();
        let mut config = SiteConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.api_origin, "https://prod.example.com");
        assert_eq!(config.reduced_motion, Some(true));

        let mut config = SiteConfig::default();
        config.apply_overrides(|name| (name == REDUCED_MOTION_VAR).then(|| "maybe".to_string()));
        assert_eq!(config.reduced_motion, None);
    }
}
