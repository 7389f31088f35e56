//! Game state reconstruction for video playback.
//!
//! Given the decoded records of a game log and a wall-clock position in the
//! video, rebuilds the game clock and score as they stood at that moment.

mod engine;
mod state;

pub use engine::{ClockAnchor, anchor_at, reconstruct};
pub use state::{GameState, format_game_clock};
