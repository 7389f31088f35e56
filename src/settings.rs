//! Persistent annotator settings
//!
//! Loaded from `config/courtlog.toml`. A missing or malformed file falls
//! back to defaults so the tools always start.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::constants::{DEFAULT_LINEUP_SIZE, DEFAULT_TEAM_A_NAME, DEFAULT_TEAM_B_NAME, SETTINGS_FILE};
use crate::error::SettingsError;
use crate::events::Team;
use crate::header::Header;

/// Preferences that survive between annotation sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorSettings {
    /// Team A name used when a log header leaves it blank
    pub team_a_name: String,
    /// Team B name used when a log header leaves it blank
    pub team_b_name: String,
    /// Players expected in a lineup record
    pub lineup_size: usize,
    /// Insert a clock stop before fouls and violations in stopped-clock games
    pub auto_stop: bool,
}

impl Default for AnnotatorSettings {
    fn default() -> Self {
        Self {
            team_a_name: DEFAULT_TEAM_A_NAME.to_string(),
            team_b_name: DEFAULT_TEAM_B_NAME.to_string(),
            lineup_size: DEFAULT_LINEUP_SIZE,
            auto_stop: true,
        }
    }
}

impl AnnotatorSettings {
    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load settings from `path`, or return defaults if it is missing or invalid
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Self::default();
        }

        match Self::read(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Strict load that reports why the file was rejected
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(SETTINGS_FILE)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)?;

        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, text).map_err(io_err)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Team name from the header, or the configured fallback
    pub fn team_name<'a>(&'a self, header: &'a Header, team: Team) -> &'a str {
        let name = header.team(team).name.as_str();
        if !name.trim().is_empty() {
            return name;
        }
        match team {
            Team::A => self.team_a_name.as_str(),
            Team::B => self.team_b_name.as_str(),
        }
    }
}
