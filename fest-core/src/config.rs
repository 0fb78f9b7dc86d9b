//! Global fest configuration.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{FestError, FestResult};
use crate::preload::{DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE};

static DEFAULT_FESTIVAL_DURATION: &str = "2days";
static DEFAULT_LOG_LEVEL: &str = "warn";
static ENV_PREFIX: &str = "FEST";

fn default_festival_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 11)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

fn default_festival_duration() -> String {
    DEFAULT_FESTIVAL_DURATION.to_string()
}

fn default_preload_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_preload_delay() -> String {
    humantime::format_duration(DEFAULT_BATCH_DELAY).to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/fest/config.toml
///
/// Every key can also be set through a `FEST_<KEY>` environment variable,
/// which takes precedence over the file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FestConfig {
    /// Where the cart, registrations, visited list and profile are saved.
    /// Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_festival_start")]
    pub festival_start: NaiveDateTime,

    /// Length of the live window, e.g. "2days"
    #[serde(default = "default_festival_duration")]
    pub festival_duration: String,

    /// Replaces the built-in event catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_dir: Option<PathBuf>,

    #[serde(default = "default_preload_batch_size")]
    pub preload_batch_size: usize,

    #[serde(default = "default_preload_delay")]
    pub preload_delay: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FestConfig {
    fn default() -> Self {
        FestConfig {
            data_dir: None,
            festival_start: default_festival_start(),
            festival_duration: default_festival_duration(),
            catalog_path: None,
            gallery_dir: None,
            preload_batch_size: default_preload_batch_size(),
            preload_delay: default_preload_delay(),
            log_level: default_log_level(),
        }
    }
}

impl FestConfig {
    pub fn config_path() -> FestResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FestError::Config("Could not determine config directory".into()))?
            .join("fest");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/fest/config.toml, creating a commented-out default
    /// on first run.
    pub fn load() -> FestResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> FestResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| FestError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FestError::Config(e.to_string()))
    }

    /// Resolved data directory with `~` expanded.
    pub fn data_path(&self) -> FestResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => {
                let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
                Ok(PathBuf::from(expanded))
            }
            None => dirs::data_dir()
                .map(|dir| dir.join("fest"))
                .ok_or_else(|| FestError::Config("Could not determine data directory".into())),
        }
    }

    pub fn gallery_path(&self) -> Option<PathBuf> {
        self.gallery_dir
            .as_ref()
            .map(|dir| PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned()))
    }

    /// The live window length. It must fit after `festival_start` on the calendar.
    pub fn festival_duration(&self) -> FestResult<chrono::Duration> {
        let std_duration = parse_duration("festival_duration", &self.festival_duration)?;
        let duration = chrono::Duration::from_std(std_duration)
            .map_err(|e| FestError::Config(format!("festival_duration: {e}")))?;

        match self.festival_start.checked_add_signed(duration) {
            Some(_) => Ok(duration),
            None => Err(FestError::Config(format!(
                "festival_duration '{}' runs past the end of the calendar",
                self.festival_duration
            ))),
        }
    }

    pub fn preload_delay(&self) -> FestResult<std::time::Duration> {
        parse_duration("preload_delay", &self.preload_delay)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FestResult<()> {
        let contents = format!(
            "\
# fest configuration

# Where your cart, registrations and profile are saved:
# data_dir = \"~/.local/share/fest\"

# When the festival opens, and how long it stays live:
# festival_start = \"{}\"
# festival_duration = \"{}\"

# Use your own event catalog instead of the built-in one:
# catalog_path = \"~/fest/catalog.toml\"

# Folder with gallery images:
# gallery_dir = \"~/fest/gallery\"

# Image warm-up batching:
# preload_batch_size = {}
# preload_delay = \"{}\"

# error, warn, info, debug or trace:
# log_level = \"{}\"
",
            default_festival_start().format("%Y-%m-%dT%H:%M:%S"),
            DEFAULT_FESTIVAL_DURATION,
            DEFAULT_BATCH_SIZE,
            default_preload_delay(),
            DEFAULT_LOG_LEVEL,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FestError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FestError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn parse_duration(key: &str, value: &str) -> FestResult<std::time::Duration> {
    humantime::parse_duration(value)
        .map_err(|e| FestError::Config(format!("Invalid {key} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fest/config.toml");
        FestConfig::create_default_config(&path).unwrap();

        let config = FestConfig::load_from(&path).unwrap();
        assert_eq!(config.festival_start, default_festival_start());
        assert_eq!(config.festival_duration().unwrap(), chrono::Duration::days(2));
        assert_eq!(config.preload_batch_size, 5);
        assert_eq!(
            config.preload_delay().unwrap(),
            std::time::Duration::from_millis(100)
        );
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "festival_start = \"2027-03-10T10:30:00\"\nfestival_duration = \"3days\"\ndata_dir = \"/tmp/fest-data\"\n",
        )
        .unwrap();

        let config = FestConfig::load_from(&path).unwrap();
        assert_eq!(
            config.festival_start,
            NaiveDate::from_ymd_opt(2027, 3, 10)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
        assert_eq!(config.festival_duration().unwrap(), chrono::Duration::days(3));
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/fest-data"));
    }

    #[test]
    fn invalid_duration_is_a_config_error() {
        let config = FestConfig {
            festival_duration: "a while".into(),
            ..FestConfig::default()
        };
        assert!(matches!(
            config.festival_duration(),
            Err(FestError::Config(_))
        ));
    }

    #[test]
    fn duration_past_the_calendar_is_a_config_error() {
        let config = FestConfig {
            festival_duration: "1000000years".into(),
            ..FestConfig::default()
        };
        assert!(matches!(
            config.festival_duration(),
            Err(FestError::Config(_))
        ));
    }
}
