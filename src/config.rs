//! Configuration handling for the booking desk

use crate::calendar::{DEFAULT_DAYS_AHEAD, DEFAULT_WORKING_DAYS};
use crate::form::FormConfig;
use anyhow::Result;
use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the booking store location
pub const STORE_ENV: &str = "BOOKING_DESK_STORE";

/// User configuration; every field is optional and falls back to a default
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeskConfig {
    /// Days after today offered for booking
    pub advance_booking_days: Option<u32>,
    /// Bookable weekdays, e.g. `["Mon", "Tue"]`
    pub working_days: Option<Vec<Weekday>>,
    pub validate_on_change: Option<bool>,
    pub validate_on_blur: Option<bool>,
    pub show_success_message: Option<bool>,
    pub success_message_duration_ms: Option<u64>,
    /// Where bookings are persisted
    pub store_path: Option<PathBuf>,
}

impl DeskConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "booking-desk", "booking-desk")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for data and logs
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: DeskConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn days_ahead(&self) -> u32 {
        self.advance_booking_days.unwrap_or(DEFAULT_DAYS_AHEAD)
    }

    pub fn working_days(&self) -> Vec<Weekday> {
        self.working_days
            .clone()
            .unwrap_or_else(|| DEFAULT_WORKING_DAYS.to_vec())
    }

    pub fn form_config(&self) -> FormConfig {
        let defaults = FormConfig::default();
        FormConfig {
            enable_validation: true,
            validate_on_change: self
                .validate_on_change
                .unwrap_or(defaults.validate_on_change),
            validate_on_blur: self.validate_on_blur.unwrap_or(defaults.validate_on_blur),
            show_success_message: self
                .show_success_message
                .unwrap_or(defaults.show_success_message),
            success_message_duration: self
                .success_message_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.success_message_duration),
        }
    }

    /// Store location: environment, then config file, then the data directory
    pub fn store_path(&self) -> PathBuf {
        self.resolve_store_path(std::env::var_os(STORE_ENV), Self::data_dir())
    }

    fn resolve_store_path(&self, env: Option<OsString>, data_dir: Option<PathBuf>) -> PathBuf {
        env.map(PathBuf::from)
            .or_else(|| self.store_path.clone())
            .or_else(|| data_dir.map(|dir| dir.join("bookings.json")))
            .unwrap_or_else(|| PathBuf::from("bookings.json"))
    }
}
