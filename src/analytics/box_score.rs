//! Per-team counting stats from a game's records

use serde::Serialize;

use crate::events::{EventRecord, GameEvent, ShotKind, Team, TeamPlayer};

/// Made / attempted pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShootingLine {
    pub made: u32,
    pub attempted: u32,
}

impl ShootingLine {
    fn record(&mut self, made: bool) {
        self.attempted += 1;
        if made {
            self.made += 1;
        }
    }

    /// Make percentage (0.0 - 1.0)
    pub fn percentage(&self) -> f32 {
        if self.attempted == 0 {
            0.0
        } else {
            self.made as f32 / self.attempted as f32
        }
    }
}

/// Counting stats for one team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamTotals {
    /// Points from made shots (score overrides are not attributed)
    pub points: u32,
    pub two_point: ShootingLine,
    pub three_point: ShootingLine,
    pub dunks: ShootingLine,
    pub put_backs: ShootingLine,
    pub free_throws: ShootingLine,
    pub assists: u32,
    pub rebounds: u32,
    pub turnovers: u32,
    pub steals: u32,
    pub deflections: u32,
    pub blocks: u32,
    /// Personal fouls including shooting fouls
    pub fouls: u32,
    pub violations: u32,
}

impl TeamTotals {
    fn shooting_line(&mut self, kind: ShotKind) -> &mut ShootingLine {
        match kind {
            ShotKind::TwoPoint => &mut self.two_point,
            ShotKind::ThreePoint => &mut self.three_point,
            ShotKind::Dunk => &mut self.dunks,
            ShotKind::PutBack => &mut self.put_backs,
            ShotKind::FreeThrow => &mut self.free_throws,
        }
    }

    /// All non-free-throw attempts
    pub fn field_goals(&self) -> ShootingLine {
        [self.two_point, self.three_point, self.dunks, self.put_backs]
            .iter()
            .fold(ShootingLine::default(), |acc, line| ShootingLine {
                made: acc.made + line.made,
                attempted: acc.attempted + line.attempted,
            })
    }
}

/// Totals for both teams
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoxScore {
    pub team_a: TeamTotals,
    pub team_b: TeamTotals,
    /// Events that could not be credited to a team
    pub unattributed: u32,
}

impl BoxScore {
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut box_score = Self::default();
        for record in records {
            box_score.add(&record.event);
        }
        box_score
    }

    pub fn team(&self, team: Team) -> &TeamTotals {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    fn team_mut(&mut self, team: Team) -> &mut TeamTotals {
        match team {
            Team::A => &mut self.team_a,
            Team::B => &mut self.team_b,
        }
    }

    /// Credit `apply` to the actor's team, or count it as unattributed
    fn credit(&mut self, actor: Option<&TeamPlayer>, apply: impl FnOnce(&mut TeamTotals)) {
        match actor {
            Some(player) => apply(self.team_mut(player.team)),
            None => self.unattributed += 1,
        }
    }

    fn add(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Shot(shot) => {
                self.credit(shot.shooter.as_ref(), |totals| {
                    totals.shooting_line(shot.kind).record(shot.made);
                    totals.points += shot.points_scored();
                    if shot.made && shot.assist.is_some() {
                        totals.assists += 1;
                    }
                });
                if let Some(foul) = &shot.foul {
                    self.team_mut(foul.fouler.team).fouls += 1;
                }
                if let Some(blocker) = &shot.blocker {
                    self.team_mut(blocker.team).blocks += 1;
                }
            }
            GameEvent::Foul { actor, .. } => self.credit(actor.as_ref(), |t| t.fouls += 1),
            GameEvent::Violation { actor, .. } => {
                self.credit(actor.as_ref(), |t| t.violations += 1)
            }
            GameEvent::Turnover { actor, stealer } => {
                self.credit(actor.as_ref(), |t| t.turnovers += 1);
                if let Some(stealer) = stealer {
                    self.team_mut(stealer.team).steals += 1;
                }
            }
            GameEvent::Steal { actor } => self.credit(actor.as_ref(), |t| t.steals += 1),
            GameEvent::Deflection { actor } => {
                self.credit(actor.as_ref(), |t| t.deflections += 1)
            }
            GameEvent::Rebound { actor } => self.credit(actor.as_ref(), |t| t.rebounds += 1),
            GameEvent::Clock(_)
            | GameEvent::Lineup { .. }
            | GameEvent::ScoreOverride { .. }
            | GameEvent::Unknown { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::decode_record;

    fn box_score(lines: &[&str]) -> BoxScore {
        let records: Vec<EventRecord> = lines.iter().filter_map(|l| decode_record(l)).collect();
        BoxScore::from_records(&records)
    }

    #[test]
    fn test_shooting_totals() {
        let score = box_score(&[
            "0:10 2pt+A5+8 @tc",
            "0:20 3pt-A9 @lc",
            "0:30 3pt+B4 @rw",
            "0:40 ft+A5",
            "0:41 ft-A5",
            "0:50 dunk+B12",
        ]);

        assert_eq!(score.team_a.points, 3);
        assert_eq!(score.team_a.assists, 1);
        assert_eq!(score.team_a.field_goals(), ShootingLine { made: 1, attempted: 2 });
        assert_eq!(score.team_a.free_throws, ShootingLine { made: 1, attempted: 2 });
        assert_eq!(score.team_a.free_throws.percentage(), 0.5);
        assert_eq!(score.team_b.points, 5);
        assert_eq!(score.team_b.dunks.made, 1);
    }

    #[test]
    fn test_defensive_credits() {
        let score = box_score(&[
            "0:10 2pt-A5 BLB11",
            "0:20 2pt+A5 SFB19",
            "0:30 to A7 STL B3",
            "0:40 rebound B11",
            "0:50 df A4",
        ]);

        assert_eq!(score.team_b.blocks, 1);
        assert_eq!(score.team_b.fouls, 1);
        assert_eq!(score.team_b.steals, 1);
        assert_eq!(score.team_b.rebounds, 1);
        assert_eq!(score.team_a.turnovers, 1);
        assert_eq!(score.team_a.fouls, 1);
    }

    #[test]
    fn test_unattributed_events() {
        let score = box_score(&["0:10 2pt+", "0:20 rebound", "0:30 score 10-8", "0:40 foobar"]);
        assert_eq!(score.unattributed, 2);
        assert_eq!(score.team_a, TeamTotals::default());
        assert_eq!(score.team_b, TeamTotals::default());
    }
}
