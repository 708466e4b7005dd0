use crate::domain::timer::{DEFAULT_BREAK_SECS, DEFAULT_WORK_SECS};
use crate::domain::Durations;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::warn;

/// Longest duration that still fits the "MM:SS" clock (99:59)
pub const MAX_DURATION_SECS: u32 = 99 * 60 + 59;

const CONFIG_DIR_NAME: &str = "focusflow";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unable to determine config directory")]
    NoConfigDir,
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{field} must be between 1 and {max} seconds, got {value}")]
    InvalidDuration {
        field: &'static str,
        value: u32,
        max: u32,
    },
    #[error("settings file '{0}' already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("failed to write settings file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Startup defaults stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub work_secs: u32,
    pub break_secs: u32,
    pub dark_mode: bool,
    pub seed_tasks: bool,
    pub use_emoji: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            dark_mode: true,
            seed_tasks: true,
            use_emoji: true,
        }
    }
}

/// Command-line values that take precedence over the settings file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub work_minutes: Option<u32>,
    pub break_minutes: Option<u32>,
    pub light: bool,
    pub no_seed: bool,
    pub ascii: bool,
}

impl Settings {
    /// Default location: <config_dir>/focusflow/config.json
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(settings) => settings,
            Err(error) => {
                warn!("{}; using default settings", error);
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON via a temp file in the same directory
    pub fn save_to_path(&self, path: &Path, overwrite: bool) -> Result<(), SettingsError> {
        self.validate()?;
        if path.exists() && !overwrite {
            return Err(SettingsError::AlreadyExists(path.to_path_buf()));
        }

        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let json = serde_json::to_string_pretty(self).map_err(|e| write_err(e.into()))?;
        let mut temp_file = NamedTempFile::new_in(dir).map_err(write_err)?;
        temp_file.write_all(json.as_bytes()).map_err(write_err)?;
        temp_file.as_file().sync_all().map_err(write_err)?;
        temp_file.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        check_duration("work_secs", self.work_secs)?;
        check_duration("break_secs", self.break_secs)?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, SettingsError> {
        if let Some(minutes) = overrides.work_minutes {
            self.work_secs = minutes.saturating_mul(60);
        }
        if let Some(minutes) = overrides.break_minutes {
            self.break_secs = minutes.saturating_mul(60);
        }
        if overrides.light {
            self.dark_mode = false;
        }
        if overrides.no_seed {
            self.seed_tasks = false;
        }
        if overrides.ascii {
            self.use_emoji = false;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn durations(&self) -> Durations {
        Durations {
            work_secs: self.work_secs,
            break_secs: self.break_secs,
        }
    }
}

fn check_duration(field: &'static str, value: u32) -> Result<(), SettingsError> {
    if value == 0 || value > MAX_DURATION_SECS {
        return Err(SettingsError::InvalidDuration {
            field,
            value,
            max: MAX_DURATION_SECS,
        });
    }
    Ok(())
}
