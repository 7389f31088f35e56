//! Error types surfaced at the crate's edges

use std::path::PathBuf;

use thiserror::Error;

/// A candidate line rejected at the editing boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty line")]
    Empty,
    #[error("line has no leading wall clock: {line:?}")]
    MissingWallClock { line: String },
}

/// Failure reading or writing a game log file
#[derive(Debug, Error)]
pub enum LogFileError {
    #[error("failed to read game log {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write game log {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure loading or saving annotator settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
