//! `duty-dial` CLI: convert dial angles and resolve duty-window edits from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Angle at which 9 o'clock is drawn
//! duty-dial angle 9
//!
//! # Hour under a pointer at -45 degrees
//! duty-dial hour -45
//!
//! # Commit a session config moved to 08:00 ~ 15:00, approving any merge
//! duty-dial resolve -i session.json --start 8 --end 15 --yes
//!
//! # Replay recorded pointer events through a session
//! duty-dial replay -i gesture.json --yes
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod logging;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use duty_dial::interval::HOURS_PER_DAY;
use duty_dial::{
    angle_to_hour, hour_to_angle, CommitOutcome, DragSession, EditConfig, EditSession, Handles,
    Hour, PointerEvent, TickCounter,
};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "duty-dial",
    version,
    about = "Circular 24-hour duty window editor"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dial angle at which an hour is drawn
    Angle {
        /// Hour of the day (0-24)
        hour: Hour,
    },
    /// Print the hour a pointer angle quantises to
    Hour {
        /// Angle in degrees, clockwise from 3 o'clock
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Commit a session config and print the outcome as JSON
    Resolve {
        /// Session config file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Final start handle (defaults to the config's start)
        #[arg(long)]
        start: Option<Hour>,
        /// Final end handle (defaults to the config's end)
        #[arg(long)]
        end: Option<Hour>,
        /// Approve a pending merge and print the resulting records
        #[arg(long)]
        yes: bool,
    },
    /// Replay pointer events through a session and commit the result
    Replay {
        /// Replay file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Approve a pending merge
        #[arg(long, conflicts_with = "no")]
        yes: bool,
        /// Decline a pending merge
        #[arg(long)]
        no: bool,
    },
}

/// Input of the `replay` subcommand.
#[derive(Deserialize)]
struct Replay {
    config: EditConfig,
    events: Vec<PointerEvent>,
}

/// Output of the `replay` subcommand.
#[derive(Serialize)]
struct ReplayReport {
    /// Every pair the session accepted, in order.
    updates: Vec<Handles>,
    ticks: u32,
    /// The pair the session ended on.
    handles: Handles,
    /// `null` when a pending merge was declined and the session went back
    /// to editing.
    outcome: Option<CommitOutcome>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Angle { hour } => {
            if hour > HOURS_PER_DAY {
                bail!("Hour must be between 0 and 24, got {}", hour);
            }
            println!("{}", hour_to_angle(hour));
        }
        Commands::Hour { degrees } => {
            println!("{}", angle_to_hour(degrees));
        }
        Commands::Resolve {
            input,
            start,
            end,
            yes,
        } => {
            let config: EditConfig = parse_json(&read_input(input.as_deref())?)
                .context("Failed to parse session config")?;
            let outcome = resolve(&config, start, end, yes)?;
            print_json(&outcome)?;
        }
        Commands::Replay { input, yes, no } => {
            let replay: Replay = parse_json(&read_input(input.as_deref())?)
                .context("Failed to parse replay file")?;
            let report = replay_events(replay, yes, no)?;
            print_json(&report)?;
        }
    }

    Ok(())
}

fn resolve(
    config: &EditConfig,
    start: Option<Hour>,
    end: Option<Hour>,
    approve: bool,
) -> Result<CommitOutcome> {
    config.validate().context("Invalid session config")?;
    let current = Handles::new(start.unwrap_or(config.start), end.unwrap_or(config.end));
    if current.start > HOURS_PER_DAY || current.end > HOURS_PER_DAY {
        bail!("Handles must be between 0 and 24, got {}", current);
    }
    info!(%current, "resolving commit");

    let outcome = config.commit_resolver().resolve(current);
    match outcome {
        CommitOutcome::Pending(conflict) if approve => {
            debug!(description = %conflict.description, "merge approved");
            Ok(CommitOutcome::Ready {
                records: conflict.into_records(),
            })
        }
        other => Ok(other),
    }
}

fn replay_events(replay: Replay, approve: bool, decline: bool) -> Result<ReplayReport> {
    let mut session = EditSession::new(&replay.config).context("Invalid session config")?;
    let mut drag = DragSession::new(session.geometry());
    let mut ticks = TickCounter::default();

    let updates: Vec<Handles> = replay
        .events
        .into_iter()
        .filter_map(|event| drag.handle_event(event, &mut session, &mut ticks))
        .collect();
    info!(updates = updates.len(), handles = %session.handles(), "replay finished");

    let mut outcome = Some(session.commit()?);
    if session.is_pending() && (approve || decline) {
        outcome = session
            .confirm(approve)?
            .map(|records| CommitOutcome::Ready { records });
    }

    Ok(ReplayReport {
        updates,
        ticks: ticks.take(),
        handles: session.handles(),
        outcome,
    })
}

fn parse_json<T: for<'de> Deserialize<'de>>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to serialise output")?;
    println!("{}", pretty);
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
