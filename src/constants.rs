//! Format defaults and file locations

/// Regulation periods when the header omits PERIODS
pub const DEFAULT_PERIOD_COUNT: u32 = 4;
/// Regulation period length in minutes
pub const DEFAULT_PERIOD_MINUTES: u32 = 10;
/// Overtime period length in minutes
pub const DEFAULT_OVERTIME_MINUTES: u32 = 5;

pub const DEFAULT_TEAM_A_NAME: &str = "Team A";
pub const DEFAULT_TEAM_B_NAME: &str = "Team B";

/// Players expected in a lineup record
pub const DEFAULT_LINEUP_SIZE: usize = 5;

/// File extension for game logs
pub const GAME_LOG_EXTENSION: &str = "court";

/// Path to the annotator settings file
pub const SETTINGS_FILE: &str = "config/courtlog.toml";
