//! Analytics over annotated games
//!
//! Box scores, edit validation, and batch summaries of a directory of logs.

mod box_score;
mod validation;

pub use box_score::{BoxScore, ShootingLine, TeamTotals};
pub use validation::{EditWarning, validate_event};

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::constants::GAME_LOG_EXTENSION;
use crate::events::Team;
use crate::gamelog::GameLog;

/// One game's headline numbers
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub path: PathBuf,
    pub game: String,
    pub date: String,
    pub team_a: String,
    pub team_b: String,
    pub events: usize,
    /// Score after the last record, including overrides
    pub final_score_a: u32,
    pub final_score_b: u32,
    pub box_score: BoxScore,
}

impl GameSummary {
    pub fn from_log(path: impl Into<PathBuf>, log: &GameLog) -> Self {
        let end = log
            .records
            .iter()
            .map(|r| r.wall_clock)
            .fold(0.0, f64::max);
        let final_state = log.state_at(end);

        Self {
            path: path.into(),
            game: log.header.game.clone(),
            date: log.header.date.clone(),
            team_a: log.team_name(Team::A).to_string(),
            team_b: log.team_name(Team::B).to_string(),
            events: log.event_count(),
            final_score_a: final_state.score_a,
            final_score_b: final_state.score_b,
            box_score: BoxScore::from_records(&log.records),
        }
    }

    /// Winning team name, `None` when tied
    pub fn winner(&self) -> Option<&str> {
        match self.final_score_a.cmp(&self.final_score_b) {
            std::cmp::Ordering::Greater => Some(self.team_a.as_str()),
            std::cmp::Ordering::Less => Some(self.team_b.as_str()),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Game log files directly inside `dir`, sorted by path
pub fn find_game_logs<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = match fs::read_dir(dir.as_ref()) {
        Ok(entries) => entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == GAME_LOG_EXTENSION))
            .collect(),
        Err(e) => {
            warn!("Cannot read directory {}: {}", dir.as_ref().display(), e);
            Vec::new()
        }
    };
    paths.sort();
    paths
}

/// Parse every game log in `dir` in parallel and summarize each.
///
/// Unreadable files are skipped with a warning.
pub fn summarize_dir<P: AsRef<Path>>(dir: P) -> Vec<GameSummary> {
    find_game_logs(dir)
        .par_iter()
        .filter_map(|path| match GameLog::load(path) {
            Ok(log) => Some(GameSummary::from_log(path.clone(), &log)),
            Err(e) => {
                warn!("Skipping {}", e);
                None
            }
        })
        .collect()
}

/// Plain-text table of summaries
pub fn format_summaries(summaries: &[GameSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<28} {:<10} {:>6}  {}\n",
        "GAME", "DATE", "EVENTS", "RESULT"
    ));
    for s in summaries {
        let name = if s.game.is_empty() {
            s.path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            s.game.clone()
        };
        out.push_str(&format!(
            "{:<28} {:<10} {:>6}  {} {} – {} {}\n",
            name, s.date, s.events, s.team_a, s.final_score_a, s.final_score_b, s.team_b
        ));
    }
    out
}
