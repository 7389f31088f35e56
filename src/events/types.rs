//! Event type definitions for the annotation format

use serde::{Deserialize, Serialize};

use super::region::RegionCode;

/// Team identifier (A or B, as written in the log)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Parse a team letter (case-insensitive)
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Team::A),
            'B' => Some(Team::B),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "A"),
            Team::B => write!(f, "B"),
        }
    }
}

/// A team letter plus optional jersey number.
///
/// Jersey is absent for bench, coach or team-only references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub team: Team,
    pub jersey: Option<String>,
}

impl TeamPlayer {
    pub fn new(team: Team, jersey: impl Into<String>) -> Self {
        Self {
            team,
            jersey: Some(jersey.into()),
        }
    }

    pub fn team_only(team: Team) -> Self {
        Self { team, jersey: None }
    }
}

/// Format token: `A15`, `B`
impl std::fmt::Display for TeamPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.jersey {
            Some(jersey) => write!(f, "{}{}", self.team, jersey),
            None => write!(f, "{}", self.team),
        }
    }
}

/// Explicit game-clock anchor carried by a line (`P2T07:45`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameClockTag {
    pub period: u32,
    pub seconds_remaining: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockKind {
    Start,
    Stop,
    Sync,
}

impl ClockKind {
    pub const ALL: [ClockKind; 3] = [ClockKind::Start, ClockKind::Stop, ClockKind::Sync];

    pub fn code(self) -> &'static str {
        match self {
            ClockKind::Start => "start",
            ClockKind::Stop => "stop",
            ClockKind::Sync => "sync",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    Travel,
    OutOfBounds,
    Backcourt,
    DoubleDribble,
    ShotClock,
    ThreeSeconds,
    FiveSeconds,
    EightSeconds,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 8] = [
        ViolationKind::Travel,
        ViolationKind::OutOfBounds,
        ViolationKind::Backcourt,
        ViolationKind::DoubleDribble,
        ViolationKind::ShotClock,
        ViolationKind::ThreeSeconds,
        ViolationKind::FiveSeconds,
        ViolationKind::EightSeconds,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::Travel => "travel",
            ViolationKind::OutOfBounds => "out",
            ViolationKind::Backcourt => "back",
            ViolationKind::DoubleDribble => "double",
            ViolationKind::ShotClock => "shotclock",
            ViolationKind::ThreeSeconds => "3s",
            ViolationKind::FiveSeconds => "5s",
            ViolationKind::EightSeconds => "8s",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViolationKind::Travel => "Travelling",
            ViolationKind::OutOfBounds => "Out of Bounds",
            ViolationKind::Backcourt => "Backcourt Violation",
            ViolationKind::DoubleDribble => "Double Dribble",
            ViolationKind::ShotClock => "Shot Clock Violation",
            ViolationKind::ThreeSeconds => "3-Second Violation",
            ViolationKind::FiveSeconds => "5-Second Violation",
            ViolationKind::EightSeconds => "8-Second Violation",
        }
    }
}

/// Non-shooting fouls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoulKind {
    Defensive,
    Offensive,
    Technical,
    Unsportsmanlike,
    Disqualifying,
}

impl FoulKind {
    pub const ALL: [FoulKind; 5] = [
        FoulKind::Defensive,
        FoulKind::Offensive,
        FoulKind::Technical,
        FoulKind::Unsportsmanlike,
        FoulKind::Disqualifying,
    ];

    pub fn code(self) -> &'static str {
        match self {
            FoulKind::Defensive => "df",
            FoulKind::Offensive => "of",
            FoulKind::Technical => "tf",
            FoulKind::Unsportsmanlike => "uf",
            FoulKind::Disqualifying => "dq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FoulKind::Defensive => "Defensive Foul",
            FoulKind::Offensive => "Offensive Foul",
            FoulKind::Technical => "Technical Foul",
            FoulKind::Unsportsmanlike => "Unsportsmanlike Foul",
            FoulKind::Disqualifying => "Disqualifying Foul",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotKind {
    TwoPoint,
    ThreePoint,
    Dunk,
    PutBack,
    FreeThrow,
}

impl ShotKind {
    pub const ALL: [ShotKind; 5] = [
        ShotKind::TwoPoint,
        ShotKind::ThreePoint,
        ShotKind::Dunk,
        ShotKind::PutBack,
        ShotKind::FreeThrow,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ShotKind::TwoPoint => "2pt",
            ShotKind::ThreePoint => "3pt",
            ShotKind::Dunk => "dunk",
            ShotKind::PutBack => "pb",
            ShotKind::FreeThrow => "ft",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShotKind::TwoPoint => "2 Point",
            ShotKind::ThreePoint => "3 Point",
            ShotKind::Dunk => "Dunk",
            ShotKind::PutBack => "Put Back",
            ShotKind::FreeThrow => "Free Throw",
        }
    }

    /// Points awarded when the shot is made
    pub fn points(self) -> u32 {
        match self {
            ShotKind::FreeThrow => 1,
            ShotKind::TwoPoint | ShotKind::Dunk | ShotKind::PutBack => 2,
            ShotKind::ThreePoint => 3,
        }
    }

    pub fn is_field_goal(self) -> bool {
        self != ShotKind::FreeThrow
    }
}

/// Foul committed on a shot attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShootingFoulKind {
    Shooting,
    Unsportsmanlike,
    Disqualifying,
}

impl ShootingFoulKind {
    pub const ALL: [ShootingFoulKind; 3] = [
        ShootingFoulKind::Shooting,
        ShootingFoulKind::Unsportsmanlike,
        ShootingFoulKind::Disqualifying,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ShootingFoulKind::Shooting => "SF",
            ShootingFoulKind::Unsportsmanlike => "UF",
            ShootingFoulKind::Disqualifying => "DQ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShootingFoulKind::Shooting => "Shooting Foul",
            ShootingFoulKind::Unsportsmanlike => "Unsportsmanlike Foul",
            ShootingFoulKind::Disqualifying => "Disqualifying Foul",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotFoul {
    pub kind: ShootingFoulKind,
    pub fouler: TeamPlayer,
}

/// Shot attempt with its nested details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotAttempt {
    pub kind: ShotKind,
    pub made: bool,
    pub shooter: Option<TeamPlayer>,
    /// Jersey of the assisting teammate
    pub assist: Option<String>,
    pub foul: Option<ShotFoul>,
    pub blocker: Option<TeamPlayer>,
    pub region: Option<RegionCode>,
}

impl ShotAttempt {
    pub fn new(kind: ShotKind, made: bool) -> Self {
        Self {
            kind,
            made,
            shooter: None,
            assist: None,
            foul: None,
            blocker: None,
            region: None,
        }
    }

    pub fn by(mut self, shooter: TeamPlayer) -> Self {
        self.shooter = Some(shooter);
        self
    }

    pub fn assisted_by(mut self, jersey: impl Into<String>) -> Self {
        self.assist = Some(jersey.into());
        self
    }

    pub fn fouled(mut self, kind: ShootingFoulKind, fouler: TeamPlayer) -> Self {
        self.foul = Some(ShotFoul { kind, fouler });
        self
    }

    pub fn blocked_by(mut self, blocker: TeamPlayer) -> Self {
        self.blocker = Some(blocker);
        self
    }

    pub fn at(mut self, region: RegionCode) -> Self {
        self.region = Some(region);
        self
    }

    /// Points this attempt adds to the shooting team's score
    pub fn points_scored(&self) -> u32 {
        if self.made { self.kind.points() } else { 0 }
    }
}

/// Broad grouping used for labels and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Clock,
    Lineup,
    Violation,
    Foul,
    Turnover,
    Rebound,
    Score,
    Shot,
    Unknown,
}

/// All events that can appear in a game log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Clock Events ===
    Clock(ClockKind),

    // === Roster Events ===
    /// Players on court for one team
    Lineup { team: Team, players: Vec<String> },

    // === Stoppages ===
    Violation {
        kind: ViolationKind,
        actor: Option<TeamPlayer>,
    },
    /// Non-shooting foul
    Foul {
        kind: FoulKind,
        actor: Option<TeamPlayer>,
    },

    // === Possession Events ===
    Turnover {
        actor: Option<TeamPlayer>,
        stealer: Option<TeamPlayer>,
    },
    Steal { actor: Option<TeamPlayer> },
    Deflection { actor: Option<TeamPlayer> },
    Rebound { actor: Option<TeamPlayer> },

    // === Scoring Events ===
    /// Absolute score correction
    ScoreOverride { score_a: u32, score_b: u32 },
    Shot(ShotAttempt),

    /// Unrecognized type or payload, kept verbatim
    Unknown { raw: String },
}

impl GameEvent {
    /// Event type keyword as written in the log
    pub fn type_code(&self) -> &str {
        match self {
            GameEvent::Clock(kind) => kind.code(),
            GameEvent::Lineup { team: Team::A, .. } => "la",
            GameEvent::Lineup { team: Team::B, .. } => "lb",
            GameEvent::Violation { kind, .. } => kind.code(),
            GameEvent::Foul { kind, .. } => kind.code(),
            GameEvent::Turnover { .. } => "to",
            GameEvent::Steal { .. } => "stl",
            GameEvent::Deflection { .. } => "def",
            GameEvent::Rebound { .. } => "rebound",
            GameEvent::ScoreOverride { .. } => "score",
            GameEvent::Shot(shot) => shot.kind.code(),
            GameEvent::Unknown { raw } => raw.split_whitespace().next().unwrap_or(""),
        }
    }

    pub fn category(&self) -> EventCategory {
        match self {
            GameEvent::Clock(_) => EventCategory::Clock,
            GameEvent::Lineup { .. } => EventCategory::Lineup,
            GameEvent::Violation { .. } => EventCategory::Violation,
            GameEvent::Foul { .. } => EventCategory::Foul,
            GameEvent::Turnover { .. } | GameEvent::Steal { .. } | GameEvent::Deflection { .. } => {
                EventCategory::Turnover
            }
            GameEvent::Rebound { .. } => EventCategory::Rebound,
            GameEvent::ScoreOverride { .. } => EventCategory::Score,
            GameEvent::Shot(_) => EventCategory::Shot,
            GameEvent::Unknown { .. } => EventCategory::Unknown,
        }
    }

    /// Short label for pickers and badges
    pub fn label(&self) -> &'static str {
        match self {
            GameEvent::Clock(ClockKind::Start) => "Clock Start",
            GameEvent::Clock(ClockKind::Stop) => "Clock Stop",
            GameEvent::Clock(ClockKind::Sync) => "Clock Sync",
            GameEvent::Lineup { team: Team::A, .. } => "Team A Lineup",
            GameEvent::Lineup { team: Team::B, .. } => "Team B Lineup",
            GameEvent::Violation { kind, .. } => kind.label(),
            GameEvent::Foul { kind, .. } => kind.label(),
            GameEvent::Turnover { .. } => "Turnover",
            GameEvent::Steal { .. } => "Steal",
            GameEvent::Deflection { .. } => "Deflection",
            GameEvent::Rebound { .. } => "Rebound",
            GameEvent::ScoreOverride { .. } => "Score Override",
            GameEvent::Shot(shot) => match shot.kind {
                ShotKind::TwoPoint => "2pt Shot",
                ShotKind::ThreePoint => "3pt Shot",
                ShotKind::Dunk => "Dunk",
                ShotKind::PutBack => "Put Back",
                ShotKind::FreeThrow => "Free Throw",
            },
            GameEvent::Unknown { .. } => "Unknown",
        }
    }

    /// Whether the event normally stops the game clock
    pub fn is_stoppage(&self) -> bool {
        matches!(
            self.category(),
            EventCategory::Foul | EventCategory::Violation
        )
    }
}

/// A decoded line: event plus its timeline coordinates and source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Seconds since the start of the video
    pub wall_clock: f64,
    /// Explicit game-clock anchor, if the line carried one
    pub game_clock: Option<GameClockTag>,
    pub event: GameEvent,
    /// Original line, regenerated verbatim on save
    pub raw: String,
}

impl EventRecord {
    /// Build a record in code; the raw line is synthesized from the event.
    pub fn new(wall_clock: f64, game_clock: Option<GameClockTag>, event: GameEvent) -> Self {
        let wall_clock = if wall_clock.is_finite() {
            wall_clock.max(0.0)
        } else {
            0.0
        };
        let raw = super::format::serialize_record(wall_clock, game_clock.as_ref(), &event);
        Self {
            wall_clock,
            game_clock,
            event,
            raw,
        }
    }

    /// Attach an explicit game-clock tag, rewriting the raw line
    pub fn with_game_clock(self, tag: GameClockTag) -> Self {
        Self::new(self.wall_clock, Some(tag), self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_player_display() {
        assert_eq!(TeamPlayer::new(Team::A, "15").to_string(), "A15");
        assert_eq!(TeamPlayer::team_only(Team::B).to_string(), "B");
    }

    #[test]
    fn test_shot_points() {
        assert_eq!(ShotKind::FreeThrow.points(), 1);
        assert_eq!(ShotKind::Dunk.points(), 2);
        assert_eq!(ShotKind::PutBack.points(), 2);
        assert_eq!(ShotKind::ThreePoint.points(), 3);
        assert_eq!(ShotAttempt::new(ShotKind::ThreePoint, false).points_scored(), 0);
    }

    #[test]
    fn test_type_codes() {
        let lineup = GameEvent::Lineup {
            team: Team::B,
            players: vec![],
        };
        assert_eq!(lineup.type_code(), "lb");
        let unknown = GameEvent::Unknown {
            raw: "foobar xyz".to_string(),
        };
        assert_eq!(unknown.type_code(), "foobar");
        assert_eq!(unknown.category(), EventCategory::Unknown);
    }

    #[test]
    fn test_stoppage_categories() {
        let foul = GameEvent::Foul {
            kind: FoulKind::Defensive,
            actor: None,
        };
        assert!(foul.is_stoppage());
        assert!(!GameEvent::Clock(ClockKind::Stop).is_stoppage());
    }

    #[test]
    fn test_record_new_synthesizes_raw() {
        let record = EventRecord::new(83.0, None, GameEvent::Clock(ClockKind::Start));
        assert_eq!(record.raw, "1:23 start");

        let negative = EventRecord::new(-4.0, None, GameEvent::Clock(ClockKind::Stop));
        assert_eq!(negative.wall_clock, 0.0);
    }
}
