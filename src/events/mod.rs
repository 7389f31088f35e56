//! Game event annotation format
//!
//! Compact, human-writable text records of what happened in a game video.
//! Each detail line is `<wallclock> [P<n>T<mm:ss>] <type> <payload>  # comment`.

mod clock;
pub mod decoder;
mod describe;
mod format;
mod region;
pub mod tokenizer;
mod types;

pub use clock::{format_game_clock_tag, format_wall_clock, parse_game_clock_tag, parse_wall_clock};
pub use decoder::{decode_event, decode_line, decode_record, parse_team_player};
pub use describe::{TeamNames, describe};
pub use format::{serialize_event, serialize_record};
pub use region::{RegionCode, ShotZone};
pub use types::{
    ClockKind, EventCategory, EventRecord, FoulKind, GameClockTag, GameEvent, ShootingFoulKind,
    ShotAttempt, ShotFoul, ShotKind, Team, TeamPlayer, ViolationKind,
};
