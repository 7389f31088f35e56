//! Whole game log files: header plus detail records
//!
//! Parsing keeps each record's source line so that saving an unedited log
//! reproduces it byte for byte.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LogFileError;
use crate::events::{ClockKind, EventRecord, GameEvent, Team, decode_record, describe};
use crate::header::Header;
use crate::replay::{GameState, reconstruct};

/// A parsed game log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameLog {
    pub header: Header,
    /// Detail records in file order
    pub records: Vec<EventRecord>,
}

impl GameLog {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    /// Parse log text. Never fails: header fields fall back to defaults and
    /// detail lines without a wall clock are dropped.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let (header, first_record) = Header::parse_lines(&lines);

        let mut records = Vec::with_capacity(lines.len().saturating_sub(first_record));
        for (idx, line) in lines.iter().enumerate().skip(first_record) {
            match decode_record(line) {
                Some(record) => records.push(record),
                None => {
                    let content = crate::events::tokenizer::strip_comment(line);
                    if !content.trim().is_empty() {
                        debug!("Dropping line {} without wall clock: {:?}", idx + 1, line);
                    }
                }
            }
        }

        Self { header, records }
    }

    /// Render the log as text: header, blank separator, one line per record
    pub fn generate(&self) -> String {
        let mut out = String::new();
        for line in self.header.to_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        for record in &self.records {
            out.push_str(&record.raw);
            out.push('\n');
        }
        out
    }

    /// Read and parse a log file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LogFileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LogFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let log = Self::parse(&text);
        debug!("Loaded {} records from {}", log.records.len(), path.display());
        Ok(log)
    }

    /// Write the generated text to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LogFileError> {
        let path = path.as_ref();
        fs::write(path, self.generate()).map_err(|source| LogFileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn event_count(&self) -> usize {
        self.records.len()
    }

    /// Game state at wall-clock second `t`
    pub fn state_at(&self, t: f64) -> GameState {
        reconstruct(&self.records, t)
    }

    pub fn team_name(&self, team: Team) -> &str {
        self.header.team_name(team)
    }

    /// Describe a record's event with this log's team names
    pub fn describe_record(&self, record: &EventRecord) -> String {
        describe(
            &record.event,
            &self.header.team_a.name,
            &self.header.team_b.name,
        )
    }

    /// Insert after every record at or before its wall clock; returns the index
    pub fn insert(&mut self, record: EventRecord) -> usize {
        let idx = self
            .records
            .iter()
            .position(|r| r.wall_clock > record.wall_clock)
            .unwrap_or(self.records.len());
        self.records.insert(idx, record);
        idx
    }

    /// Insert a record, first stopping a running clock when the event is a
    /// foul or violation in a stopped-clock game.
    ///
    /// Returns true when a `stop` was synthesized.
    pub fn insert_with_auto_stop(&mut self, record: EventRecord) -> bool {
        let needs_stop = !self.header.running_clock
            && record.event.is_stoppage()
            && self.state_at(record.wall_clock).clock_running;

        if needs_stop {
            debug!("Auto-inserting clock stop at {:.2}s", record.wall_clock);
            self.insert(EventRecord::new(
                record.wall_clock,
                None,
                GameEvent::Clock(ClockKind::Stop),
            ));
        }
        self.insert(record);
        needs_stop
    }

    /// Remove and return the record at `idx`
    pub fn remove(&mut self, idx: usize) -> Option<EventRecord> {
        (idx < self.records.len()).then(|| self.records.remove(idx))
    }
}
