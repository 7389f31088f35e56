//! Reconstructed game state at a point in video time

use serde::{Deserialize, Serialize};

use crate::events::Team;
use crate::header::PeriodStructure;

/// Game clock and score as of a query time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub period: u32,
    /// `None` until some line has anchored the game clock
    pub seconds_remaining: Option<f64>,
    pub clock_running: bool,
    pub score_a: u32,
    pub score_b: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            period: 1,
            seconds_remaining: None,
            clock_running: false,
            score_a: 0,
            score_b: 0,
        }
    }
}

impl GameState {
    pub fn score_for(&self, team: Team) -> u32 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }

    /// Leading team, `None` when tied
    pub fn leader(&self) -> Option<Team> {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Some(Team::A),
            std::cmp::Ordering::Less => Some(Team::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Clock display such as `P2 07:45`, `OT 03:10`, `OT2 --:--`
    pub fn clock_label(&self, periods: &PeriodStructure) -> String {
        format_game_clock(self.period, self.seconds_remaining, periods.count)
    }

    /// `Lakers 54 – 51 Celtics`
    pub fn score_label(&self, team_a: &str, team_b: &str) -> String {
        format!("{} {} – {} {}", team_a, self.score_a, self.score_b, team_b)
    }
}

/// Format a period and remaining time for display.
///
/// Periods past `regulation_periods` are labelled overtime.
pub fn format_game_clock(period: u32, seconds: Option<f64>, regulation_periods: u32) -> String {
    let label = if regulation_periods > 0 && period > regulation_periods {
        match period - regulation_periods {
            1 => "OT".to_string(),
            n => format!("OT{}", n),
        }
    } else {
        format!("P{}", period)
    };

    match seconds {
        Some(secs) => {
            let whole = secs.max(0.0).floor() as u64;
            format!("{} {:02}:{:02}", label, whole / 60, whole % 60)
        }
        None => format!("{} --:--", label),
    }
}
