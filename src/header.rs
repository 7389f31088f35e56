//! Game log header: match metadata from the leading `TAG: value` lines
//!
//! ```text
//! GAME: Regional Final
//! DATE: 2026-03-14
//! VIDEO: https://example.com/final.mp4
//! PERIODS: 4x10+5
//! A: Lakers,purple
//! B: Celtics,green
//! RUNNINGCLOCK: false
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_OVERTIME_MINUTES, DEFAULT_PERIOD_COUNT, DEFAULT_PERIOD_MINUTES, DEFAULT_TEAM_A_NAME,
    DEFAULT_TEAM_B_NAME,
};
use crate::events::tokenizer::{escape_comment_marker, strip_comment};
use crate::events::Team;

/// Team name and colour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub colour: String,
}

impl TeamInfo {
    /// Parse `name[,colour]`
    pub fn parse(value: &str) -> Self {
        let (name, colour) = value.split_once(',').unwrap_or((value, ""));
        Self {
            name: name.trim().to_string(),
            colour: colour.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.colour.is_empty()
    }
}

/// `name[,colour]`
impl std::fmt::Display for TeamInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.colour.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{},{}", self.name, self.colour)
        }
    }
}

/// Regulation and overtime period structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStructure {
    /// Number of regulation periods
    pub count: u32,
    /// Regulation period length in minutes
    pub duration: u32,
    /// Overtime period length in minutes
    pub overtime: u32,
}

impl Default for PeriodStructure {
    fn default() -> Self {
        Self {
            count: DEFAULT_PERIOD_COUNT,
            duration: DEFAULT_PERIOD_MINUTES,
            overtime: DEFAULT_OVERTIME_MINUTES,
        }
    }
}

impl PeriodStructure {
    /// Parse `<count>x<duration>[+<overtime>]`, ignoring whitespace.
    /// Zero counts or durations are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        let (count, rest) = compact.split_once(['x', 'X'])?;
        let (duration, overtime) = match rest.split_once('+') {
            Some((duration, overtime)) => (duration, Some(overtime)),
            None => (rest, None),
        };

        let parsed = Self {
            count: count.parse().ok()?,
            duration: duration.parse().ok()?,
            overtime: match overtime {
                Some(ot) => ot.parse().ok()?,
                None => DEFAULT_OVERTIME_MINUTES,
            },
        };
        (parsed.count >= 1 && parsed.duration > 0 && parsed.overtime > 0).then_some(parsed)
    }

    /// Length of a period in seconds (overtime past the regulation count)
    pub fn period_seconds(&self, period: u32) -> f64 {
        let minutes = if period > self.count {
            self.overtime
        } else {
            self.duration
        };
        f64::from(minutes * 60)
    }

    pub fn is_overtime(&self, period: u32) -> bool {
        period > self.count
    }
}

/// `4x10+5`
impl std::fmt::Display for PeriodStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}", self.count, self.duration, self.overtime)
    }
}

/// Match metadata, fully populated with defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub game: String,
    pub game_id: String,
    pub date: String,
    pub video: String,
    pub team_a: TeamInfo,
    pub team_b: TeamInfo,
    pub periods: PeriodStructure,
    pub running_clock: bool,
}

/// Split a `TAG: value` line. Tags are letters and underscores.
fn split_tag(line: &str) -> Option<(String, &str)> {
    let (tag, value) = line.split_once(':')?;
    let tag = tag.trim();
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }
    Some((tag.to_ascii_uppercase(), value.trim()))
}

impl Header {
    /// Parse the leading header lines.
    ///
    /// Returns the header and the index of the first detail line. Blank and
    /// comment-only lines are skipped; the first other line that is not a
    /// `TAG: value` pair ends the header.
    pub fn parse_lines(lines: &[&str]) -> (Self, usize) {
        let mut header = Self::default();

        for (idx, raw) in lines.iter().enumerate() {
            let clean = strip_comment(raw);
            let line = clean.trim();
            if line.is_empty() {
                continue;
            }
            let Some((tag, value)) = split_tag(line) else {
                return (header, idx);
            };
            header.apply_tag(&tag, value);
        }

        (header, lines.len())
    }

    /// Parse header fields from a whole log text
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self::parse_lines(&lines).0
    }

    fn apply_tag(&mut self, tag: &str, value: &str) {
        match tag {
            "GAME" | "GAME_NAME" => self.game = value.to_string(),
            "GAME_ID" => self.game_id = value.to_string(),
            "DATE" => self.date = value.to_string(),
            "VIDEO" | "VIDEO_URL" => self.video = value.to_string(),
            "A" | "TEAM_A" | "TEAMA" => self.team_a = TeamInfo::parse(value),
            "B" | "TEAM_B" | "TEAMB" => self.team_b = TeamInfo::parse(value),
            "PERIODS" => {
                self.periods = PeriodStructure::parse(value).unwrap_or_else(|| {
                    debug!("Unparseable PERIODS {:?}, using defaults", value);
                    PeriodStructure::default()
                });
            }
            "RUNNINGCLOCK" | "RUNNING_CLOCK" => {
                self.running_clock = ["true", "yes", "1"]
                    .iter()
                    .any(|v| v.eq_ignore_ascii_case(value));
            }
            _ => debug!("Ignoring unknown header tag {}", tag),
        }
    }

    /// Render the header as tagged lines (PERIODS is always written)
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut push = |tag: &str, value: &str| {
            lines.push(format!("{}: {}", tag, escape_comment_marker(value)));
        };

        if !self.game.is_empty() {
            push("GAME", &self.game);
        }
        if !self.game_id.is_empty() {
            push("GAME_ID", &self.game_id);
        }
        if !self.date.is_empty() {
            push("DATE", &self.date);
        }
        if !self.video.is_empty() {
            push("VIDEO", &self.video);
        }
        push("PERIODS", &self.periods.to_string());
        if !self.team_a.is_empty() {
            push("A", &self.team_a.to_string());
        }
        if !self.team_b.is_empty() {
            push("B", &self.team_b.to_string());
        }
        if self.running_clock {
            push("RUNNINGCLOCK", "true");
        }
        lines
    }

    pub fn team(&self, team: Team) -> &TeamInfo {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    /// Display name for a team, with "Team A" / "Team B" fallbacks
    pub fn team_name(&self, team: Team) -> &str {
        let name = self.team(team).name.as_str();
        match team {
            _ if !name.is_empty() => name,
            Team::A => DEFAULT_TEAM_A_NAME,
            Team::B => DEFAULT_TEAM_B_NAME,
        }
    }

    /// DATE as a calendar date, when written as `YYYY-MM-DD`
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
GAME: Regional Final
date: 2026-03-14
VIDEO: https://example.com/final.mp4

# teams
A: Lakers, purple
B: Celtics
PERIODS: 2 X 20
RUNNINGCLOCK: Yes
0:00 P1T20:00 start
GAME: not a header any more
";

    #[test]
    fn test_parse_header() {
        let lines: Vec<&str> = SAMPLE.lines().collect();
        let (header, first_record) = Header::parse_lines(&lines);

        assert_eq!(header.game, "Regional Final");
        assert_eq!(header.date, "2026-03-14");
        assert_eq!(header.video, "https://example.com/final.mp4");
        assert_eq!(header.team_a.name, "Lakers");
        assert_eq!(header.team_a.colour, "purple");
        assert_eq!(header.team_b.name, "Celtics");
        assert_eq!(header.team_b.colour, "");
        assert_eq!(
            header.periods,
            PeriodStructure {
                count: 2,
                duration: 20,
                overtime: 5,
            }
        );
        assert!(header.running_clock);
        assert_eq!(lines[first_record], "0:00 P1T20:00 start");
    }

    #[test]
    fn test_defaults_when_absent() {
        let header = Header::parse("0:00 start\n");
        assert_eq!(header, Header::default());
        assert_eq!(header.periods.to_string(), "4x10+5");
        assert_eq!(header.team_name(Team::A), "Team A");
        assert!(!header.running_clock);
    }

    #[test]
    fn test_bad_periods_fall_back() {
        assert_eq!(Header::parse("PERIODS: four quarters").periods, PeriodStructure::default());
        assert_eq!(Header::parse("PERIODS: 0x10").periods, PeriodStructure::default());
        assert_eq!(
            Header::parse("PERIODS: 4x12+3").periods,
            PeriodStructure {
                count: 4,
                duration: 12,
                overtime: 3,
            }
        );
    }

    #[test]
    fn test_aliases_and_escaped_colour() {
        let header = Header::parse("GAME_ID: g-17\nTEAM_A: Lakers,\\#552583\n");
        assert_eq!(header.game_id, "g-17");
        assert_eq!(header.team_a.colour, "#552583");

        let lines = header.to_lines();
        assert!(lines.contains(&"A: Lakers,\\#552583".to_string()));
        assert_eq!(Header::parse(&lines.join("\n")).team_a, header.team_a);
    }

    #[test]
    fn test_to_lines_order() {
        let header = Header {
            game: "Final".into(),
            date: "2026-03-14".into(),
            team_a: TeamInfo::parse("Lakers,purple"),
            team_b: TeamInfo::parse("Celtics"),
            running_clock: true,
            ..Header::default()
        };
        assert_eq!(
            header.to_lines(),
            vec![
                "GAME: Final",
                "DATE: 2026-03-14",
                "PERIODS: 4x10+5",
                "A: Lakers,purple",
                "B: Celtics",
                "RUNNINGCLOCK: true",
            ]
        );
    }

    #[test]
    fn test_period_seconds() {
        let periods = PeriodStructure::default();
        assert_eq!(periods.period_seconds(1), 600.0);
        assert_eq!(periods.period_seconds(5), 300.0);
        assert!(periods.is_overtime(5));
    }

    #[test]
    fn test_parsed_date() {
        let header = Header::parse("DATE: 2026-03-14");
        assert_eq!(header.parsed_date(), NaiveDate::from_ymd_opt(2026, 3, 14));
        assert_eq!(Header::parse("DATE: March").parsed_date(), None);
    }
}
