//! Event decoder: maps (event type, payload) to a typed [`GameEvent`]
//!
//! Dispatch is a static table of keyword sets, each paired with the
//! sub-grammar for its category. Decoding never fails: anything the table
//! cannot place becomes [`GameEvent::Unknown`].

use super::region::RegionCode;
use super::tokenizer::tokenize;
use super::types::{
    ClockKind, EventCategory, EventRecord, FoulKind, GameEvent, ShootingFoulKind, ShotAttempt,
    ShotFoul, ShotKind, Team, TeamPlayer, ViolationKind,
};
use crate::error::DecodeError;

/// One row of the dispatch table
pub struct Grammar {
    pub category: EventCategory,
    pub keywords: &'static [&'static str],
    decode: fn(&str, &str) -> Option<GameEvent>,
}

/// Category dispatch table, first match wins
pub const GRAMMAR: &[Grammar] = &[
    Grammar {
        category: EventCategory::Clock,
        keywords: &["start", "stop", "sync"],
        decode: decode_clock,
    },
    Grammar {
        category: EventCategory::Lineup,
        keywords: &["la", "lb"],
        decode: decode_lineup,
    },
    Grammar {
        category: EventCategory::Violation,
        keywords: &["travel", "out", "back", "double", "shotclock", "3s", "5s", "8s"],
        decode: decode_violation,
    },
    Grammar {
        category: EventCategory::Foul,
        keywords: &["df", "of", "tf", "uf", "dq"],
        decode: decode_foul,
    },
    Grammar {
        category: EventCategory::Turnover,
        keywords: &["to"],
        decode: decode_turnover,
    },
    Grammar {
        category: EventCategory::Turnover,
        keywords: &["stl", "def"],
        decode: decode_steal_or_deflection,
    },
    Grammar {
        category: EventCategory::Rebound,
        keywords: &["rebound", "reb"],
        decode: decode_rebound,
    },
    Grammar {
        category: EventCategory::Score,
        keywords: &["score"],
        decode: decode_score,
    },
    Grammar {
        category: EventCategory::Shot,
        keywords: &["2pt", "3pt", "dunk", "pb", "ft"],
        decode: decode_shot,
    },
];

/// Find the table row for an event keyword
pub fn grammar_for(event_type: &str) -> Option<&'static Grammar> {
    GRAMMAR
        .iter()
        .find(|g| g.keywords.iter().any(|kw| kw.eq_ignore_ascii_case(event_type)))
}

/// Decode an event from its keyword and payload.
///
/// `body` is the comment-free text after the clock tokens, kept as the raw
/// payload of [`GameEvent::Unknown`].
pub fn decode_event(event_type: &str, payload: &str, body: &str) -> GameEvent {
    let keyword = event_type.to_ascii_lowercase();
    grammar_for(&keyword)
        .and_then(|g| (g.decode)(&keyword, payload))
        .unwrap_or_else(|| GameEvent::Unknown {
            raw: body.trim().to_string(),
        })
}

/// Decode one detail line. `None` when the line has no leading wall clock.
pub fn decode_record(line: &str) -> Option<EventRecord> {
    let tokens = tokenize(line)?;
    let event = decode_event(&tokens.event_type, &tokens.payload, &tokens.body);
    Some(EventRecord {
        wall_clock: tokens.wall_clock,
        game_clock: tokens.game_clock,
        event,
        raw: line.trim_end_matches(['\r', '\n']).to_string(),
    })
}

/// Decode a candidate line from an edit, reporting why it was rejected
pub fn decode_line(line: &str) -> Result<EventRecord, DecodeError> {
    if line.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    decode_record(line).ok_or_else(|| DecodeError::MissingWallClock {
        line: line.trim().to_string(),
    })
}

/// Parse a `[A|B]<jersey>?` reference at the start of `s`
pub fn parse_team_player(s: &str) -> Option<TeamPlayer> {
    Cursor::new(s.trim_start()).eat_team_player()
}

// =============================================================================
// CURSOR
// =============================================================================

/// Left-to-right scanner over a payload
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Consume an ASCII keyword, case-insensitive
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let matches = self
            .rest
            .get(..keyword.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(keyword));
        if matches {
            self.rest = &self.rest[keyword.len()..];
        }
        matches
    }

    fn eat_digits(&mut self) -> Option<&'a str> {
        let len = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if len == 0 {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(digits)
    }

    /// `A15`, `b 27`, `A`
    fn eat_team_player(&mut self) -> Option<TeamPlayer> {
        let team = Team::from_letter(self.rest.chars().next()?)?;
        self.rest = &self.rest[1..];

        // Whitespace between letter and jersey is only consumed when a jersey follows
        let checkpoint = self.rest;
        self.skip_ws();
        let jersey = self.eat_digits().map(str::to_string);
        if jersey.is_none() {
            self.rest = checkpoint;
        }
        Some(TeamPlayer { team, jersey })
    }

    /// Whether the input starts with one of `keywords`, case-insensitive
    fn at_keyword(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| {
            self.rest
                .get(..kw.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(kw))
        })
    }

    /// Skip one whitespace-delimited token
    fn skip_token(&mut self) {
        let len = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        self.rest = &self.rest[len..];
    }

    /// Run a sub-parser, rewinding if it does not match
    fn attempt<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.rest;
        let result = parse(self);
        if result.is_none() {
            self.rest = checkpoint;
        }
        result
    }
}

// =============================================================================
// CATEGORY GRAMMARS
// =============================================================================

fn decode_clock(keyword: &str, _payload: &str) -> Option<GameEvent> {
    ClockKind::ALL
        .into_iter()
        .find(|k| k.code() == keyword)
        .map(GameEvent::Clock)
}

fn decode_lineup(keyword: &str, payload: &str) -> Option<GameEvent> {
    let team = if keyword == "la" { Team::A } else { Team::B };
    let players = payload
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    Some(GameEvent::Lineup { team, players })
}

fn decode_violation(keyword: &str, payload: &str) -> Option<GameEvent> {
    let kind = ViolationKind::ALL.into_iter().find(|k| k.code() == keyword)?;
    Some(GameEvent::Violation {
        kind,
        actor: parse_team_player(payload),
    })
}

fn decode_foul(keyword: &str, payload: &str) -> Option<GameEvent> {
    let kind = FoulKind::ALL.into_iter().find(|k| k.code() == keyword)?;
    Some(GameEvent::Foul {
        kind,
        actor: parse_team_player(payload),
    })
}

/// `to B43 STL A1`; the steal marker may appear anywhere
fn decode_turnover(_keyword: &str, payload: &str) -> Option<GameEvent> {
    let mut actor = None;
    let mut stealer = None;
    let mut cur = Cursor::new(payload);

    loop {
        cur.skip_ws();
        if cur.is_empty() {
            break;
        }
        if cur.eat_keyword("stl") {
            cur.skip_ws();
            let player = cur.eat_team_player();
            if stealer.is_none() {
                stealer = player;
            }
            continue;
        }
        if actor.is_none()
            && let Some(player) = cur.eat_team_player()
        {
            actor = Some(player);
            continue;
        }
        cur.skip_token();
    }

    Some(GameEvent::Turnover { actor, stealer })
}

fn decode_steal_or_deflection(keyword: &str, payload: &str) -> Option<GameEvent> {
    let actor = parse_team_player(payload);
    match keyword {
        "stl" => Some(GameEvent::Steal { actor }),
        _ => Some(GameEvent::Deflection { actor }),
    }
}

fn decode_rebound(_keyword: &str, payload: &str) -> Option<GameEvent> {
    Some(GameEvent::Rebound {
        actor: parse_team_player(payload),
    })
}

/// `18-10`, `18 - 10`
fn decode_score(_keyword: &str, payload: &str) -> Option<GameEvent> {
    let (a, b) = payload.split_once('-')?;
    Some(GameEvent::ScoreOverride {
        score_a: a.trim().parse().ok()?,
        score_b: b.trim().parse().ok()?,
    })
}

/// Pull `@<code>` out of a payload wherever it sits.
///
/// Returns the payload with the marker removed and the region if the code is known.
fn split_region(payload: &str) -> (String, Option<RegionCode>) {
    let Some(at) = payload.find('@') else {
        return (payload.to_string(), None);
    };
    let after = &payload[at + 1..];
    let code_len = after
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(after.len());
    let region = RegionCode::from_code(&after[..code_len]);

    let mut remainder = String::with_capacity(payload.len());
    remainder.push_str(&payload[..at]);
    remainder.push_str(&after[code_len..]);
    (remainder, region)
}

/// `[+|-] <shooter> [+<assist>] [SF|UF|DQ <fouler>] [BL <blocker>]`, plus `@<region>` anywhere
/// Keywords that may follow the made/missed sign in place of a shooter
const SHOT_MARKERS: &[&str] = &["BL", "SF", "UF", "DQ"];

fn decode_shot(keyword: &str, payload: &str) -> Option<GameEvent> {
    let kind = ShotKind::ALL.into_iter().find(|k| k.code() == keyword)?;
    let (body, region) = split_region(payload);
    let mut cur = Cursor::new(&body);

    cur.skip_ws();
    let made = if cur.eat('+') {
        true
    } else {
        cur.eat('-');
        false
    };

    // `-BLA3` is a blocked shot with no shooter, not shooter `B`
    cur.skip_ws();
    let shooter = if cur.at_keyword(SHOT_MARKERS) {
        None
    } else {
        cur.eat_team_player()
    };

    cur.skip_ws();
    let assist = cur.attempt(|c| {
        if !c.eat('+') {
            return None;
        }
        c.skip_ws();
        c.eat_digits().map(str::to_string)
    });

    cur.skip_ws();
    let foul = cur.attempt(|c| {
        let kind = ShootingFoulKind::ALL
            .into_iter()
            .find(|k| c.eat_keyword(k.code()))?;
        c.skip_ws();
        let fouler = c.eat_team_player()?;
        Some(ShotFoul { kind, fouler })
    });

    cur.skip_ws();
    let blocker = cur.attempt(|c| {
        if !c.eat_keyword("BL") {
            return None;
        }
        c.skip_ws();
        c.eat_team_player()
    });

    Some(GameEvent::Shot(ShotAttempt {
        kind,
        made,
        shooter,
        assist,
        foul,
        blocker,
        region,
    }))
}
