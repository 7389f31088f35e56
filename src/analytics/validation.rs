//! Soft checks on edited events
//!
//! Warnings never block an edit; they are shown so the annotator can fix a
//! likely typo.

use std::fmt;

use crate::events::{GameEvent, RegionCode, ShotKind, ShotZone};

/// A suspicious but accepted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditWarning {
    /// Shot value disagrees with the zone it was recorded in
    ZoneMismatch { kind: ShotKind, region: RegionCode },
    /// Lineup with other than the expected number of players
    LineupSize { found: usize, expected: usize },
}

impl fmt::Display for EditWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditWarning::ZoneMismatch { kind, region } => match region.zone() {
                ShotZone::TwoPoint => write!(
                    f,
                    "{} shot recorded in a 2pt zone ({})",
                    kind.code(),
                    region.code()
                ),
                ShotZone::ThreePoint => write!(
                    f,
                    "{} shot recorded in a 3pt zone ({})",
                    kind.code(),
                    region.code()
                ),
            },
            EditWarning::LineupSize { found, expected } if found < expected => write!(
                f,
                "Lineup has only {} player{} (expected {})",
                found,
                if *found == 1 { "" } else { "s" },
                expected
            ),
            EditWarning::LineupSize { found, expected } => {
                write!(f, "Lineup has {} players (expected {})", found, expected)
            }
        }
    }
}

/// Check an event for likely annotation mistakes
pub fn validate_event(event: &GameEvent, expected_lineup: usize) -> Vec<EditWarning> {
    let mut warnings = Vec::new();

    match event {
        GameEvent::Shot(shot) => {
            if let Some(region) = shot.region {
                let mismatch = match (shot.kind, region.zone()) {
                    (ShotKind::ThreePoint, ShotZone::TwoPoint) => true,
                    (ShotKind::TwoPoint | ShotKind::Dunk | ShotKind::PutBack, ShotZone::ThreePoint) => {
                        true
                    }
                    _ => false,
                };
                if mismatch {
                    warnings.push(EditWarning::ZoneMismatch {
                        kind: shot.kind,
                        region,
                    });
                }
            }
        }
        GameEvent::Lineup { players, .. } if players.len() != expected_lineup => {
            warnings.push(EditWarning::LineupSize {
                found: players.len(),
                expected: expected_lineup,
            });
        }
        _ => {}
    }

    warnings
}
