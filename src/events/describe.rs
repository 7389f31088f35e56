//! Natural-language rendering of events
//!
//! Pure presentation: every event the decoder can produce has a description.

use super::types::{ClockKind, GameEvent, ShotAttempt, Team, TeamPlayer};
use crate::constants::{DEFAULT_TEAM_A_NAME, DEFAULT_TEAM_B_NAME};

/// Team names used when rendering actors
#[derive(Debug, Clone, Copy)]
pub struct TeamNames<'a> {
    pub a: &'a str,
    pub b: &'a str,
}

impl<'a> TeamNames<'a> {
    pub fn new(a: &'a str, b: &'a str) -> Self {
        Self { a, b }
    }

    /// Display name for a team, falling back to "Team A" / "Team B"
    pub fn name(&self, team: Team) -> &'a str {
        match team {
            Team::A if !self.a.trim().is_empty() => self.a,
            Team::B if !self.b.trim().is_empty() => self.b,
            Team::A => DEFAULT_TEAM_A_NAME,
            Team::B => DEFAULT_TEAM_B_NAME,
        }
    }

    /// `Lakers #15`, or just `Lakers` for team-only references
    pub fn player(&self, player: &TeamPlayer) -> String {
        match &player.jersey {
            Some(jersey) => format!("{} #{}", self.name(player.team), jersey),
            None => self.name(player.team).to_string(),
        }
    }
}

fn with_actor(label: &str, actor: Option<&TeamPlayer>, names: TeamNames<'_>) -> String {
    match actor {
        Some(actor) => format!("{} — {}", label, names.player(actor)),
        None => label.to_string(),
    }
}

fn describe_shot(shot: &ShotAttempt, names: TeamNames<'_>) -> String {
    let mut parts = vec![
        shot.kind.label().to_string(),
        if shot.made { "Made" } else { "Missed" }.to_string(),
    ];
    if let Some(shooter) = &shot.shooter {
        parts.push(format!("— {}", names.player(shooter)));
    }
    if let Some(assist) = &shot.assist {
        parts.push(format!("(Assisted by #{})", assist));
    }
    if let Some(foul) = &shot.foul {
        parts.push(format!("{} on {}", foul.kind.label(), names.player(&foul.fouler)));
    }
    if let Some(blocker) = &shot.blocker {
        parts.push(format!("Blocked by {}", names.player(blocker)));
    }
    if let Some(region) = shot.region {
        parts.push(format!("@ {}", region.label()));
    }
    parts.join(" ")
}

/// Render an event as a sentence using the given team names
pub fn describe(event: &GameEvent, team_a: &str, team_b: &str) -> String {
    let names = TeamNames::new(team_a, team_b);

    match event {
        GameEvent::Clock(ClockKind::Start) => "Game Clock Started".to_string(),
        GameEvent::Clock(ClockKind::Stop) => "Game Clock Stopped".to_string(),
        GameEvent::Clock(ClockKind::Sync) => "Clock Sync".to_string(),
        GameEvent::Lineup { team, players } => {
            let listed = if players.is_empty() {
                "(none)".to_string()
            } else {
                players
                    .iter()
                    .map(|p| format!("#{}", p))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            format!("{} Lineup: {}", names.name(*team), listed)
        }
        GameEvent::Violation { kind, actor } => with_actor(kind.label(), actor.as_ref(), names),
        GameEvent::Foul { kind, actor } => with_actor(kind.label(), actor.as_ref(), names),
        GameEvent::Turnover { actor, stealer } => {
            let turnover = with_actor("Turnover", actor.as_ref(), names);
            match stealer {
                Some(stealer) => format!("{}; Steal — {}", turnover, names.player(stealer)),
                None => turnover,
            }
        }
        GameEvent::Steal { actor } => with_actor("Steal", actor.as_ref(), names),
        GameEvent::Deflection { actor } => with_actor("Deflection", actor.as_ref(), names),
        GameEvent::Rebound { actor } => with_actor("Rebound", actor.as_ref(), names),
        GameEvent::ScoreOverride { score_a, score_b } => format!(
            "Score Override: {} {} – {} {}",
            names.name(Team::A),
            score_a,
            score_b,
            names.name(Team::B)
        ),
        GameEvent::Shot(shot) => describe_shot(shot, names),
        GameEvent::Unknown { raw } => raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::decoder::decode_record;

    fn describe_line(line: &str, a: &str, b: &str) -> String {
        describe(&decode_record(line).unwrap().event, a, b)
    }

    #[test]
    fn test_describe_shot() {
        assert_eq!(
            describe_line("0:10 2pt+A15+8SFB19 @LC", "Lakers", "Celtics"),
            "2 Point Made — Lakers #15 (Assisted by #8) Shooting Foul on Celtics #19 @ Left Corner"
        );
        assert_eq!(
            describe_line("0:10 3pt-B9BLA3", "", ""),
            "3 Point Missed — Team B #9 Blocked by Team A #3"
        );
    }

    #[test]
    fn test_describe_actors() {
        assert_eq!(
            describe_line("0:05 travel A5", "Lakers", "Celtics"),
            "Travelling — Lakers #5"
        );
        assert_eq!(describe_line("0:05 df", "Lakers", "Celtics"), "Defensive Foul");
        assert_eq!(
            describe_line("0:05 to B43 STL A1", "Lakers", "Celtics"),
            "Turnover — Celtics #43; Steal — Lakers #1"
        );
        assert_eq!(
            describe_line("0:05 rebound B", "Lakers", "Celtics"),
            "Rebound — Celtics"
        );
    }

    #[test]
    fn test_describe_lineup_and_clock() {
        assert_eq!(
            describe_line("0:00 la 4,5,6", "Lakers", "Celtics"),
            "Lakers Lineup: #4, #5, #6"
        );
        assert_eq!(describe_line("0:00 lb", "", ""), "Team B Lineup: (none)");
        assert_eq!(describe_line("0:00 start", "", ""), "Game Clock Started");
    }

    #[test]
    fn test_describe_score_override() {
        assert_eq!(
            describe_line("9:00 score 18-10", "Lakers", "Celtics"),
            "Score Override: Lakers 18 – 10 Celtics"
        );
    }

    #[test]
    fn test_describe_unknown_is_raw_payload() {
        assert_eq!(describe_line("1:23 foobar xyz", "Lakers", "Celtics"), "foobar xyz");
        assert_eq!(describe_line("1:23", "Lakers", "Celtics"), "");
    }
}
