//! Court regions used to annotate shot locations

use serde::{Deserialize, Serialize};

/// Scoring zone a region belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotZone {
    TwoPoint,
    ThreePoint,
}

impl ShotZone {
    pub fn points(self) -> u32 {
        match self {
            ShotZone::TwoPoint => 2,
            ShotZone::ThreePoint => 3,
        }
    }
}

/// Fixed court-zone identifier (`@LC`, `@RIM`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionCode {
    LeftCorner,
    LeftWing,
    TopCentre,
    RightWing,
    RightCorner,
    LeftElbow,
    TopMid,
    TopPaint,
    RightMid,
    RightElbow,
    LeftPaint,
    Rim,
    RightPaint,
}

struct RegionInfo {
    region: RegionCode,
    code: &'static str,
    label: &'static str,
    zone: ShotZone,
}

// Order matches the on-court entry grid: arc first, then inside the arc.
const REGIONS: [RegionInfo; 13] = [
    RegionInfo { region: RegionCode::LeftCorner, code: "LC", label: "Left Corner", zone: ShotZone::ThreePoint },
    RegionInfo { region: RegionCode::LeftWing, code: "LW", label: "Left Wing", zone: ShotZone::ThreePoint },
    RegionInfo { region: RegionCode::TopCentre, code: "TC", label: "Top Centre", zone: ShotZone::ThreePoint },
    RegionInfo { region: RegionCode::RightWing, code: "RW", label: "Right Wing", zone: ShotZone::ThreePoint },
    RegionInfo { region: RegionCode::RightCorner, code: "RC", label: "Right Corner", zone: ShotZone::ThreePoint },
    RegionInfo { region: RegionCode::LeftElbow, code: "LE", label: "Left Elbow", zone: ShotZone::TwoPoint },
    RegionInfo { region: RegionCode::TopMid, code: "TM", label: "Top Mid", zone: ShotZone::TwoPoint },
    RegionInfo { region: RegionCode::TopPaint, code: "TP", label: "Top Paint", zone: ShotZone::TwoPoint },
    RegionInfo { region: RegionCode::RightMid, code: "RM", label: "Right Mid", zone: ShotZone::TwoPoint },
    RegionInfo { region: RegionCode::RightElbow, code: "RE", label: "Right Elbow", zone: ShotZone::TwoPoint },
    RegionInfo { region: RegionCode::LeftPaint, code: "LP", label: "Left Paint", zone: ShotZone::TwoPoint },
    RegionInfo { region: RegionCode::Rim, code: "RIM", label: "Rim", zone: ShotZone::TwoPoint },
    RegionInfo { region: RegionCode::RightPaint, code: "RP", label: "Right Paint", zone: ShotZone::TwoPoint },
];

impl RegionCode {
    pub fn all() -> impl Iterator<Item = RegionCode> {
        REGIONS.iter().map(|info| info.region)
    }

    fn info(self) -> &'static RegionInfo {
        // REGIONS holds one entry per variant
        &REGIONS[self as usize]
    }

    /// Parse a region code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        REGIONS
            .iter()
            .find(|info| info.code.eq_ignore_ascii_case(code))
            .map(|info| info.region)
    }

    pub fn code(self) -> &'static str {
        self.info().code
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn zone(self) -> ShotZone {
        self.info().zone
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
