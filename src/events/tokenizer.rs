//! Record tokenizer: splits one detail line into its clock tokens, event type and payload
//!
//! ```text
//! 12:04.5 P2T07:45 2pt+A15+8 @LC   # fast break
//! ^wall   ^game    ^type^payload    ^comment (dropped)
//! ```

use std::borrow::Cow;

use super::clock::{parse_game_clock_tag, parse_wall_clock};
use super::types::GameClockTag;

/// Comment marker; `\#` escapes a literal `#`
pub const COMMENT_MARKER: char = '#';

/// Tokens of a detail line that carried a valid wall clock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTokens {
    pub wall_clock: f64,
    pub game_clock: Option<GameClockTag>,
    /// Comment-free text after the clock tokens
    pub body: String,
    /// Lowercased event keyword (may be empty)
    pub event_type: String,
    pub payload: String,
}

/// Remove an inline comment, unescaping `\#`
pub fn strip_comment(line: &str) -> Cow<'_, str> {
    if !line.contains(COMMENT_MARKER) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&COMMENT_MARKER) => {
                out.push(COMMENT_MARKER);
                chars.next();
            }
            COMMENT_MARKER => break,
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape `#` so a value survives [`strip_comment`]
pub fn escape_comment_marker(value: &str) -> Cow<'_, str> {
    if value.contains(COMMENT_MARKER) {
        Cow::Owned(value.replace(COMMENT_MARKER, "\\#"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Split off the first whitespace-delimited token
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], &s[idx..]),
        None => (s, ""),
    }
}

/// Split body text into (event type, payload).
///
/// The type is the leading alphanumeric run so compact shot lines such as
/// `2pt+A5` split into `2pt` / `+A5`.
pub fn split_event_type(body: &str) -> (String, String) {
    let body = body.trim();
    let type_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    (
        body[..type_len].to_ascii_lowercase(),
        body[type_len..].trim().to_string(),
    )
}

/// Tokenize a detail line. Returns `None` when the line has no leading wall clock.
pub fn tokenize(line: &str) -> Option<RecordTokens> {
    let clean = strip_comment(line);

    let (wall_token, mut rest) = next_token(&clean);
    let wall_clock = parse_wall_clock(wall_token)?;

    let (clock_token, after_clock) = next_token(rest);
    let game_clock = parse_game_clock_tag(clock_token);
    if game_clock.is_some() {
        rest = after_clock;
    }

    let body = rest.trim().to_string();
    let (event_type, payload) = split_event_type(&body);

    Some(RecordTokens {
        wall_clock,
        game_clock,
        body,
        event_type,
        payload,
    })
}
