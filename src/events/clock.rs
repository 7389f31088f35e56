//! Wall-clock and game-clock token grammar
//!
//! Wall clock: `[H:]MM:SS[.fraction]`, seconds since the start of the video.
//! Game clock tag: `P<period>T<MM:SS[.fraction]>` (case-insensitive).

use super::types::GameClockTag;

/// Parse a run of `min_len..=max_len` ASCII digits
fn digits(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse `[H:]MM:SS[.fraction]`, optionally refusing the hour field
fn parse_clock(token: &str, allow_hours: bool) -> Option<f64> {
    let (whole, frac) = match token.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (token, None),
    };

    let mut fields = whole.split(':');
    let first = fields.next()?;
    let second = fields.next()?;
    let third = fields.next();
    if fields.next().is_some() {
        return None;
    }

    let (hours, minutes, seconds) = match third {
        None => (0, digits(first, 1, 2)?, digits(second, 2, 2)?),
        Some(third) if allow_hours => (digits(first, 1, 2)?, digits(second, 1, 2)?, digits(third, 2, 2)?),
        Some(_) => return None,
    };
    if seconds >= 60 {
        return None;
    }

    let fraction = match frac {
        Some(f) if !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
            format!("0.{}", f).parse::<f64>().ok()?
        }
        Some(_) => return None,
        None => 0.0,
    };

    Some(f64::from(hours * 3600 + minutes * 60 + seconds) + fraction)
}

/// Parse a wall-clock token into seconds
pub fn parse_wall_clock(token: &str) -> Option<f64> {
    parse_clock(token.trim(), true)
}

/// Parse a `P<n>T<MM:SS>` game-clock token
pub fn parse_game_clock_tag(token: &str) -> Option<GameClockTag> {
    let token = token.trim();
    let rest = token.strip_prefix(['P', 'p'])?;
    let t_idx = rest.find(['T', 't'])?;
    let period = digits(&rest[..t_idx], 1, 9)?;
    let seconds_remaining = parse_clock(&rest[t_idx + 1..], false)?;
    Some(GameClockTag {
        period,
        seconds_remaining,
    })
}

/// Split seconds into whole units and hundredths, rounding to the nearest hundredth
fn split_hundredths(secs: f64) -> (u64, u64) {
    let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    let hundredths = (secs * 100.0).round() as u64;
    (hundredths / 100, hundredths % 100)
}

fn push_fraction(out: &mut String, hundredths: u64) {
    if hundredths > 0 {
        let frac = format!("{:02}", hundredths);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
}

/// Format seconds as a wall-clock token: `M:SS`, `H:MM:SS`, with `.ff` when fractional
pub fn format_wall_clock(secs: f64) -> String {
    let (whole, hundredths) = split_hundredths(secs);
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let seconds = whole % 60;

    let mut out = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    };
    push_fraction(&mut out, hundredths);
    out
}

/// Format a game-clock tag: `P2T07:45`
pub fn format_game_clock_tag(tag: &GameClockTag) -> String {
    let (whole, hundredths) = split_hundredths(tag.seconds_remaining);
    let mut out = format!("P{}T{:02}:{:02}", tag.period, whole / 60, whole % 60);
    push_fraction(&mut out, hundredths);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wall_clock() {
        assert_eq!(parse_wall_clock("1:23"), Some(83.0));
        assert_eq!(parse_wall_clock("01:23"), Some(83.0));
        assert_eq!(parse_wall_clock("1:02:03"), Some(3723.0));
        assert_eq!(parse_wall_clock("0:10.5"), Some(10.5));
        assert_eq!(parse_wall_clock("0:10.25"), Some(10.25));
    }

    #[test]
    fn test_parse_wall_clock_rejects() {
        assert_eq!(parse_wall_clock("123"), None);
        assert_eq!(parse_wall_clock("1:2"), None);
        assert_eq!(parse_wall_clock("1:75"), None);
        assert_eq!(parse_wall_clock("1:23."), None);
        assert_eq!(parse_wall_clock("a:23"), None);
        assert_eq!(parse_wall_clock("1:2:3:4"), None);
        assert_eq!(parse_wall_clock(""), None);
    }

    #[test]
    fn test_parse_game_clock_tag() {
        let tag = parse_game_clock_tag("P2T07:45").unwrap();
        assert_eq!(tag.period, 2);
        assert_eq!(tag.seconds_remaining, 465.0);

        let tag = parse_game_clock_tag("p1t9:59.5").unwrap();
        assert_eq!(tag.period, 1);
        assert_eq!(tag.seconds_remaining, 599.5);

        assert!(parse_game_clock_tag("P1T1:02:03").is_none());
        assert!(parse_game_clock_tag("PT10:00").is_none());
        assert!(parse_game_clock_tag("start").is_none());
    }

    #[test]
    fn test_format_wall_clock() {
        assert_eq!(format_wall_clock(83.0), "1:23");
        assert_eq!(format_wall_clock(3723.0), "1:02:03");
        assert_eq!(format_wall_clock(10.5), "0:10.5");
        assert_eq!(format_wall_clock(10.25), "0:10.25");
        assert_eq!(format_wall_clock(-3.0), "0:00");
    }

    #[test]
    fn test_format_game_clock_tag() {
        let tag = GameClockTag {
            period: 3,
            seconds_remaining: 600.0,
        };
        assert_eq!(format_game_clock_tag(&tag), "P3T10:00");
        let reparsed = parse_game_clock_tag(&format_game_clock_tag(&tag)).unwrap();
        assert_eq!(reparsed, tag);
    }
}
