//! courtlog - command-line tools for `.court` game logs
//!
//! Usage:
//!   courtlog state final.court --at 12:34
//!   courtlog describe final.court
//!   courtlog check final.court
//!   courtlog fmt final.court -o final.court
//!   courtlog add final.court "12:40 df B4"
//!   courtlog summary games/ --json

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use courtlog::analytics::format_summaries;
use courtlog::{
    AnnotatorSettings, GameLog, Team, decode_line, describe, format_wall_clock, parse_wall_clock,
    summarize_dir, validate_event,
};

#[derive(Parser)]
#[command(name = "courtlog")]
#[command(about = "Basketball game video annotation tools")]
struct Cli {
    /// Settings file (defaults to config/courtlog.toml)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Game clock and score at a point in the video
    State {
        file: PathBuf,
        /// Video position as [H:]MM:SS[.ff] or seconds
        #[arg(long)]
        at: String,
        #[arg(long)]
        json: bool,
    },

    /// Print every event as a sentence
    Describe { file: PathBuf },

    /// Report likely annotation mistakes
    Check { file: PathBuf },

    /// Regenerate the log in canonical form
    Fmt {
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Insert a detail line into a log, keeping it sorted
    Add {
        file: PathBuf,
        line: String,
        /// Never insert an automatic clock stop
        #[arg(long)]
        no_auto_stop: bool,
    },

    /// Summarize every game log in a directory
    Summary {
        dir: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => AnnotatorSettings::load_from(path),
        None => AnnotatorSettings::load(),
    };

    match cli.command {
        Commands::State { file, at, json } => show_state(&file, &at, json, &settings),
        Commands::Describe { file } => describe_log(&file, &settings),
        Commands::Check { file } => check_log(&file, &settings),
        Commands::Fmt { file, output } => format_log(&file, output),
        Commands::Add {
            file,
            line,
            no_auto_stop,
        } => add_line(&file, &line, !no_auto_stop && settings.auto_stop, &settings),
        Commands::Summary { dir, json } => show_summary(&dir, json),
    }
}

/// Accept `12:34`, `1:02:03.5` or plain seconds
fn parse_position(text: &str) -> Result<f64> {
    if let Some(secs) = parse_wall_clock(text) {
        return Ok(secs);
    }
    match text.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs),
        _ => bail!("invalid video position {:?}", text),
    }
}

fn show_state(file: &Path, at: &str, json: bool, settings: &AnnotatorSettings) -> Result<()> {
    let log = GameLog::load(file)?;
    let t = parse_position(at)?;
    let state = log.state_at(t);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!(
        "{}  {}  ({})",
        state.clock_label(&log.header.periods),
        state.score_label(
            settings.team_name(&log.header, Team::A),
            settings.team_name(&log.header, Team::B),
        ),
        if state.clock_running { "running" } else { "stopped" }
    );
    Ok(())
}

fn describe_log(file: &Path, settings: &AnnotatorSettings) -> Result<()> {
    let log = GameLog::load(file)?;
    let team_a = settings.team_name(&log.header, Team::A);
    let team_b = settings.team_name(&log.header, Team::B);

    for record in &log.records {
        println!(
            "{:>9}  {}",
            format_wall_clock(record.wall_clock),
            describe(&record.event, team_a, team_b)
        );
    }
    Ok(())
}

fn check_log(file: &Path, settings: &AnnotatorSettings) -> Result<()> {
    let log = GameLog::load(file)?;
    let mut count = 0;

    for record in &log.records {
        for warning in validate_event(&record.event, settings.lineup_size) {
            println!("{}: {}", format_wall_clock(record.wall_clock), warning);
            count += 1;
        }
    }

    info!("{} warning(s) in {} events", count, log.event_count());
    Ok(())
}

fn format_log(file: &Path, output: Option<PathBuf>) -> Result<()> {
    let log = GameLog::load(file)?;
    match output {
        Some(path) => {
            log.save(&path)?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", log.generate()),
    }
    Ok(())
}

fn add_line(file: &Path, line: &str, auto_stop: bool, settings: &AnnotatorSettings) -> Result<()> {
    let mut log = if file.exists() {
        GameLog::load(file)?
    } else {
        GameLog::default()
    };

    let record = decode_line(line).with_context(|| format!("cannot add {:?}", line))?;
    for warning in validate_event(&record.event, settings.lineup_size) {
        warn!("{}", warning);
    }

    if !auto_stop {
        log.insert(record);
    } else if log.insert_with_auto_stop(record) {
        info!("Stopped the clock before a stoppage");
    }

    log.save(file)?;
    Ok(())
}

fn show_summary(dir: &Path, json: bool) -> Result<()> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }
    let summaries = summarize_dir(dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", format_summaries(&summaries));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("12:34").unwrap(), 754.0);
        assert_eq!(parse_position("1:02:03.5").unwrap(), 3723.5);
        assert_eq!(parse_position("25").unwrap(), 25.0);
        assert!(parse_position("-3").is_err());
        assert!(parse_position("soon").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_line_creates_sorted_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.court");
        let settings = AnnotatorSettings::default();

        add_line(&path, "0:05 P1T10:00 start", true, &settings).unwrap();
        add_line(&path, "0:30 df B4", true, &settings).unwrap();
        add_line(&path, "0:10 2pt+A5", true, &settings).unwrap();
        assert!(add_line(&path, "no clock here", true, &settings).is_err());

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "PERIODS: 4x10+5\n\n0:05 P1T10:00 start\n0:10 2pt+A5\n0:30 stop\n0:30 df B4\n"
        );
    }
}
