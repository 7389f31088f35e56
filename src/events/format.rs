//! Compact text form of events, the inverse of the decoder
//!
//! Used when an event is built in code rather than read from a line:
//! ```text
//! 0:10 2pt+A15+8SFB19 @LC
//! 2:00 to B43 STL A1
//! 5:00 P2T10:00 start
//! 7:30 score 18-10
//! ```

use super::clock::{format_game_clock_tag, format_wall_clock};
use super::types::{GameClockTag, GameEvent, ShotAttempt, TeamPlayer};

fn push_actor(out: &mut String, actor: Option<&TeamPlayer>) {
    if let Some(actor) = actor {
        out.push(' ');
        out.push_str(&actor.to_string());
    }
}

fn serialize_shot(out: &mut String, shot: &ShotAttempt) {
    out.push(if shot.made { '+' } else { '-' });
    if let Some(shooter) = &shot.shooter {
        out.push_str(&shooter.to_string());
    }
    if let Some(assist) = &shot.assist {
        out.push('+');
        out.push_str(assist);
    }
    if let Some(foul) = &shot.foul {
        out.push_str(foul.kind.code());
        out.push_str(&foul.fouler.to_string());
    }
    if let Some(blocker) = &shot.blocker {
        out.push_str("BL");
        out.push_str(&blocker.to_string());
    }
    if let Some(region) = shot.region {
        out.push_str(" @");
        out.push_str(region.code());
    }
}

/// Serialize an event to `<type> <payload>` text
pub fn serialize_event(event: &GameEvent) -> String {
    let mut out = event.type_code().to_string();

    match event {
        GameEvent::Clock(_) => {}
        GameEvent::Lineup { players, .. } => {
            if !players.is_empty() {
                out.push(' ');
                out.push_str(&players.join(","));
            }
        }
        GameEvent::Violation { actor, .. }
        | GameEvent::Foul { actor, .. }
        | GameEvent::Steal { actor }
        | GameEvent::Deflection { actor }
        | GameEvent::Rebound { actor } => push_actor(&mut out, actor.as_ref()),
        GameEvent::Turnover { actor, stealer } => {
            push_actor(&mut out, actor.as_ref());
            if let Some(stealer) = stealer {
                out.push_str(" STL ");
                out.push_str(&stealer.to_string());
            }
        }
        GameEvent::ScoreOverride { score_a, score_b } => {
            out.push_str(&format!(" {}-{}", score_a, score_b));
        }
        GameEvent::Shot(shot) => serialize_shot(&mut out, shot),
        GameEvent::Unknown { raw } => return raw.clone(),
    }

    out
}

/// Serialize a full detail line: wall clock, optional game clock, event
pub fn serialize_record(
    wall_clock: f64,
    game_clock: Option<&GameClockTag>,
    event: &GameEvent,
) -> String {
    let mut line = format_wall_clock(wall_clock);
    if let Some(tag) = game_clock {
        line.push(' ');
        line.push_str(&format_game_clock_tag(tag));
    }
    let body = serialize_event(event);
    if !body.is_empty() {
        line.push(' ');
        line.push_str(&body);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::decoder::decode_record;
    use crate::events::region::RegionCode;
    use crate::events::types::{
        ClockKind, EventRecord, ShootingFoulKind, ShotKind, Team, ViolationKind,
    };

    #[test]
    fn test_serialize_shot_matches_grammar() {
        let shot = ShotAttempt::new(ShotKind::TwoPoint, true)
            .by(TeamPlayer::new(Team::A, "15"))
            .assisted_by("8")
            .fouled(ShootingFoulKind::Shooting, TeamPlayer::new(Team::B, "19"))
            .at(RegionCode::LeftCorner);
        assert_eq!(
            serialize_event(&GameEvent::Shot(shot)),
            "2pt+A15+8SFB19 @LC"
        );
    }

    #[test]
    fn test_serialize_record_with_game_clock() {
        let tag = GameClockTag {
            period: 2,
            seconds_remaining: 600.0,
        };
        let line = serialize_record(300.0, Some(&tag), &GameEvent::Clock(ClockKind::Start));
        assert_eq!(line, "5:00 P2T10:00 start");
    }

    #[test]
    fn test_synthesized_lines_reparse() {
        let events = vec![
            GameEvent::Shot(
                ShotAttempt::new(ShotKind::ThreePoint, false)
                    .by(TeamPlayer::team_only(Team::B))
                    .blocked_by(TeamPlayer::new(Team::A, "3"))
                    .at(RegionCode::TopCentre),
            ),
            GameEvent::Shot(ShotAttempt::new(ShotKind::FreeThrow, true)),
            GameEvent::Shot(
                ShotAttempt::new(ShotKind::TwoPoint, false).blocked_by(TeamPlayer::new(Team::A, "3")),
            ),
            GameEvent::Turnover {
                actor: Some(TeamPlayer::new(Team::B, "43")),
                stealer: Some(TeamPlayer::new(Team::A, "1")),
            },
            GameEvent::Violation {
                kind: ViolationKind::EightSeconds,
                actor: None,
            },
            GameEvent::Lineup {
                team: Team::A,
                players: vec!["4".into(), "5".into(), "11".into()],
            },
            GameEvent::ScoreOverride {
                score_a: 18,
                score_b: 10,
            },
        ];

        for event in events {
            let record = EventRecord::new(125.5, None, event.clone());
            let reparsed = decode_record(&record.raw).unwrap();
            assert_eq!(reparsed.event, event, "line: {}", record.raw);
            assert_eq!(reparsed.wall_clock, 125.5);
        }
    }

    #[test]
    fn test_unknown_serializes_verbatim() {
        let event = GameEvent::Unknown {
            raw: "foobar xyz".to_string(),
        };
        assert_eq!(serialize_record(83.0, None, &event), "1:23 foobar xyz");
    }
}
