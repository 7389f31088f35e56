//! Temporal reconstruction: replay events up to a query time
//!
//! Stateless and allocation-free for time-ordered input, so it can be called
//! once per rendered video frame.

use crate::events::{ClockKind, EventRecord, GameEvent, Team};

use super::state::GameState;

/// Most recent game-clock reference point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAnchor {
    /// Wall clock the anchor was taken at
    pub wall_clock: f64,
    pub period: u32,
    pub seconds_remaining: f64,
    pub running: bool,
}

impl ClockAnchor {
    /// Remaining game time at `wall_clock`, floored at zero
    pub fn project(&self, wall_clock: f64) -> f64 {
        if self.running {
            (self.seconds_remaining - (wall_clock - self.wall_clock)).max(0.0)
        } else {
            self.seconds_remaining
        }
    }

    /// Move the anchor to `wall_clock`, carrying the projected time with it
    fn advance_to(&mut self, wall_clock: f64) {
        self.seconds_remaining = self.project(wall_clock);
        self.wall_clock = wall_clock;
    }
}

/// Fold state while replaying
#[derive(Debug, Default)]
struct Replay {
    anchor: Option<ClockAnchor>,
    score_a: u32,
    score_b: u32,
}

impl Replay {
    fn apply(&mut self, record: &EventRecord) {
        let at = record.wall_clock;

        // An explicit tag is authoritative and the only way the period changes
        if let Some(tag) = record.game_clock {
            let running = self.anchor.is_some_and(|a| a.running);
            self.anchor = Some(ClockAnchor {
                wall_clock: at,
                period: tag.period,
                seconds_remaining: tag.seconds_remaining,
                running,
            });
        }

        match &record.event {
            // Moves the anchor to this line; remaining time stays as last recorded
            GameEvent::Clock(ClockKind::Start | ClockKind::Sync) => {
                if let Some(anchor) = self.anchor.as_mut() {
                    anchor.wall_clock = at;
                    anchor.running = true;
                }
            }
            GameEvent::Clock(ClockKind::Stop) => {
                if let Some(anchor) = self.anchor.as_mut() {
                    anchor.advance_to(at);
                    anchor.running = false;
                }
            }
            GameEvent::Shot(shot) => {
                if let Some(shooter) = &shot.shooter {
                    match shooter.team {
                        Team::A => self.score_a = self.score_a.saturating_add(shot.points_scored()),
                        Team::B => self.score_b = self.score_b.saturating_add(shot.points_scored()),
                    }
                }
            }
            GameEvent::ScoreOverride { score_a, score_b } => {
                self.score_a = *score_a;
                self.score_b = *score_b;
            }
            _ => {}
        }
    }

    fn finish(self, t: f64) -> GameState {
        match self.anchor {
            Some(anchor) => GameState {
                period: anchor.period,
                seconds_remaining: Some(anchor.project(t)),
                clock_running: anchor.running,
                score_a: self.score_a,
                score_b: self.score_b,
            },
            None => GameState {
                score_a: self.score_a,
                score_b: self.score_b,
                ..GameState::default()
            },
        }
    }
}

/// Reconstruct game clock and score as of wall-clock time `t` (seconds).
///
/// Records do not need to be sorted. Time-ordered input is scanned in place;
/// anything else falls back to a stable sort of the records at or before `t`.
pub fn reconstruct(records: &[EventRecord], t: f64) -> GameState {
    let mut replay = Replay::default();

    if records.is_sorted_by(|a, b| a.wall_clock <= b.wall_clock) {
        let cutoff = records.partition_point(|r| r.wall_clock <= t);
        for record in &records[..cutoff] {
            replay.apply(record);
        }
    } else {
        let mut due: Vec<&EventRecord> = records.iter().filter(|r| r.wall_clock <= t).collect();
        due.sort_by(|a, b| a.wall_clock.total_cmp(&b.wall_clock));
        for record in due {
            replay.apply(record);
        }
    }

    replay.finish(t)
}

/// The clock anchor in effect at `t`, if any line has established one
pub fn anchor_at(records: &[EventRecord], t: f64) -> Option<ClockAnchor> {
    let state = reconstruct(records, t);
    state.seconds_remaining.map(|seconds_remaining| ClockAnchor {
        wall_clock: t,
        period: state.period,
        seconds_remaining,
        running: state.clock_running,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::decode_record;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn records(lines: &[&str]) -> Vec<EventRecord> {
        lines.iter().filter_map(|l| decode_record(l)).collect()
    }

    const GAME: &[&str] = &[
        "0:05 P1T10:00 start",
        "0:10 2pt+A5 @tc",
        "0:20 3pt+B9 @lc",
        "0:30 df B4",
        "0:31 stop",
        "0:50 ft+A5",
        "0:52 ft-A5",
        "1:00 start",
        "1:30 dunk+B12",
        "2:00 score 18-10",
        "2:10 2pt+A5",
        "3:00 P2T10:00 sync",
    ];

    #[test]
    fn test_before_first_event() {
        let recs = records(GAME);
        assert_eq!(reconstruct(&recs, 1.0), GameState::default());
        assert_eq!(reconstruct(&[], 100.0), GameState::default());
    }

    #[test]
    fn test_score_accumulation() {
        let recs = records(&["0:10 2pt+A5 @tc", "0:20 3pt+B9 @lc"]);
        let state = reconstruct(&recs, 25.0);
        assert_eq!(state.score_a, 2);
        assert_eq!(state.score_b, 3);
        // No anchor was ever established
        assert_eq!(state.period, 1);
        assert_eq!(state.seconds_remaining, None);
    }

    #[test]
    fn test_made_shot_without_shooter_scores_nothing() {
        let recs = records(&["0:10 2pt+", "0:20 ft+B"]);
        let state = reconstruct(&recs, 30.0);
        assert_eq!(state.score_a, 0);
        assert_eq!(state.score_b, 1);
    }

    #[test]
    fn test_score_override_precedence() {
        let recs = records(GAME);
        let state = reconstruct(&recs, 125.0);
        assert_eq!((state.score_a, state.score_b), (18, 10));
        let state = reconstruct(&recs, 135.0);
        assert_eq!((state.score_a, state.score_b), (20, 10));
    }

    #[test]
    fn test_clock_runs_and_freezes() {
        let recs = records(GAME);

        let running = reconstruct(&recs, 20.0);
        assert!(running.clock_running);
        assert_eq!(running.seconds_remaining, Some(585.0));

        // Stop at 0:31 after 26s of running
        for t in [31.0, 40.0, 59.9] {
            let frozen = reconstruct(&recs, t);
            assert!(!frozen.clock_running);
            assert_eq!(frozen.seconds_remaining, Some(574.0));
        }

        // Restarted at 1:00
        let restarted = reconstruct(&recs, 70.0);
        assert!(restarted.clock_running);
        assert_eq!(restarted.seconds_remaining, Some(564.0));
    }

    #[test]
    fn test_clock_freeze_property() {
        let (t0, remaining, t1) = (12.0, 30.0, 50.0);
        let recs = vec![
            EventRecord::new(
                t0,
                Some(crate::events::GameClockTag {
                    period: 4,
                    seconds_remaining: remaining,
                }),
                GameEvent::Clock(ClockKind::Start),
            ),
            EventRecord::new(t1, None, GameEvent::Clock(ClockKind::Stop)),
        ];
        for t in [t1, t1 + 5.0, t1 + 500.0] {
            let state = reconstruct(&recs, t);
            assert_eq!(state.seconds_remaining, Some(f64::max(0.0, remaining - (t1 - t0))));
            assert!(!state.clock_running);
            assert_eq!(state.period, 4);
        }
    }

    #[test]
    fn test_clock_floors_at_zero_while_running() {
        let recs = records(&["0:00 P1T00:10 start"]);
        let state = reconstruct(&recs, 60.0);
        assert_eq!(state.seconds_remaining, Some(0.0));
        assert!(state.clock_running);
    }

    #[test]
    fn test_tag_changes_period() {
        let recs = records(GAME);
        let state = reconstruct(&recs, 190.0);
        assert_eq!(state.period, 2);
        assert_eq!(state.seconds_remaining, Some(590.0));
        assert!(state.clock_running);
    }

    #[test]
    fn test_bare_sync_and_start_without_anchor() {
        let recs = records(&["0:05 sync", "0:06 start", "0:07 stop"]);
        let state = reconstruct(&recs, 10.0);
        assert_eq!(state.seconds_remaining, None);
        assert!(!state.clock_running);
    }

    #[test]
    fn test_tag_on_non_clock_event_keeps_running_flag() {
        let recs = records(&["0:00 P1T10:00 start", "0:30 P1T09:45 2pt+A4"]);
        let state = reconstruct(&recs, 40.0);
        assert!(state.clock_running);
        assert_eq!(state.seconds_remaining, Some(575.0));
        assert_eq!(state.score_a, 2);

        let stopped = records(&["0:30 P1T09:45 2pt+A4"]);
        let state = reconstruct(&stopped, 40.0);
        assert!(!state.clock_running);
        assert_eq!(state.seconds_remaining, Some(585.0));
    }

    #[test]
    fn test_untagged_start_repositions_anchor() {
        let recs = records(&["0:00 P1T10:00 start", "0:20 start"]);
        let state = reconstruct(&recs, 30.0);
        assert_eq!(state.seconds_remaining, Some(590.0));

        let recs = records(&["0:00 P1T10:00 start", "0:20 sync"]);
        assert_eq!(reconstruct(&recs, 30.0).seconds_remaining, Some(590.0));
    }

    #[test]
    fn test_score_saturates_after_huge_override() {
        let recs = records(&["0:10 score 4294967295-0", "0:20 2pt+A5", "0:25 3pt+B9"]);
        let state = reconstruct(&recs, 30.0);
        assert_eq!(state.score_a, u32::MAX);
        assert_eq!(state.score_b, 3);
    }

    #[test]
    fn test_unsorted_input_matches_sorted() {
        let sorted = records(GAME);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut shuffled = sorted.clone();
            shuffled.shuffle(&mut rng);
            for t in [0.0, 10.0, 31.0, 75.0, 125.0, 200.0] {
                assert_eq!(reconstruct(&shuffled, t), reconstruct(&sorted, t), "t = {}", t);
            }
        }
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        // Stop is written before the tagged start at the same instant
        let recs = records(&["0:00 P1T10:00 start", "0:10 stop", "0:10 P1T09:50 start", "0:05 rebound"]);
        let state = reconstruct(&recs, 20.0);
        assert!(state.clock_running);
        assert_eq!(state.seconds_remaining, Some(580.0));
    }

    #[test]
    fn test_anchor_at() {
        let recs = records(GAME);
        assert_eq!(anchor_at(&recs, 1.0), None);
        let anchor = anchor_at(&recs, 40.0).unwrap();
        assert_eq!(anchor.period, 1);
        assert!(!anchor.running);
        assert_eq!(anchor.seconds_remaining, 574.0);
    }
}
