//! courtlog - basketball game video annotation
//!
//! Parses, describes and regenerates `.court` game logs, and reconstructs the
//! game clock and score at any point of the video.

pub mod analytics;
pub mod constants;
pub mod error;
pub mod events;
pub mod gamelog;
pub mod header;
pub mod replay;
pub mod settings;

// Re-export commonly used types for convenience
pub use analytics::{BoxScore, EditWarning, GameSummary, summarize_dir, validate_event};
pub use constants::*;
pub use error::{DecodeError, LogFileError, SettingsError};
pub use events::{
    ClockKind, EventCategory, EventRecord, FoulKind, GameClockTag, GameEvent, RegionCode,
    ShootingFoulKind, ShotAttempt, ShotFoul, ShotKind, ShotZone, Team, TeamNames, TeamPlayer,
    ViolationKind, decode_line, decode_record, describe, format_wall_clock, parse_wall_clock,
};
pub use gamelog::GameLog;
pub use header::{Header, PeriodStructure, TeamInfo};
pub use replay::{ClockAnchor, GameState, format_game_clock, reconstruct};
pub use settings::AnnotatorSettings;
