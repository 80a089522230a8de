//! Headless Match Runner
//!
//! Replays a recorded referee transcript through the decision engine and
//! reports the command chosen for every hero on every turn. Record a
//! transcript by teeing the referee's stdout, then rerun it here to
//! compare doctrines without a live match.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use lane_warden::core::Result;
use lane_warden::protocol::ProtocolReader;
use lane_warden::tactics::commander::{draft_pick, TurnCommander};
use lane_warden::tactics::doctrine::{load_doctrine, Doctrine};

/// Headless Match Runner - replay recorded matches for doctrine tuning
#[derive(Parser, Debug)]
#[command(name = "match_runner")]
#[command(about = "Replay a recorded referee transcript and report the chosen commands")]
struct Args {
    /// Path to a recorded transcript: the setup block followed by turn blocks
    transcript: PathBuf,

    /// Doctrine name (loaded from data/doctrines/)
    #[arg(long, default_value = "default")]
    doctrine: String,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// One decision turn of the replay
#[derive(Serialize)]
struct TurnReport {
    turn: u32,
    gold: i32,
    commands: Vec<String>,
}

/// JSON output structure
#[derive(Serialize)]
struct MatchReport {
    doctrine: String,
    turns: u32,
    draft_picks: Vec<String>,
    rounds: Vec<TurnReport>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let doctrine = load_doctrine(&args.doctrine).unwrap_or_else(|e| {
        eprintln!("Warning: failed to load doctrine '{}': {}", args.doctrine, e);
        eprintln!("Using default doctrine");
        Doctrine::default()
    });
    let commander = TurnCommander::new(doctrine);

    let file = File::open(&args.transcript)?;
    let mut reader = ProtocolReader::new(BufReader::new(file));
    let setup = reader.read_setup()?;

    let mut turn = 0u32;
    let mut draft_picks = Vec::new();
    let mut rounds = Vec::new();
    while let Some(snapshot) = reader.read_turn(setup.my_team)? {
        turn += 1;
        if snapshot.round_type < 0 {
            draft_picks.push(draft_pick(turn).token().to_string());
            continue;
        }
        let commands = commander
            .decide_turn(turn, &snapshot, &setup.catalog)
            .iter()
            .map(|command| command.to_string())
            .collect();
        rounds.push(TurnReport {
            turn,
            gold: snapshot.gold,
            commands,
        });
    }

    let report = MatchReport {
        doctrine: commander.doctrine().name.clone(),
        turns: turn,
        draft_picks,
        rounds,
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!("Match Replay");
            println!("============");
            println!("Doctrine: {}", report.doctrine);
            println!("Turns: {}", report.turns);
            if !report.draft_picks.is_empty() {
                println!("Draft: {}", report.draft_picks.join(", "));
            }
            for round in &report.rounds {
                println!();
                println!("Turn {} (gold {})", round.turn, round.gold);
                for command in &round.commands {
                    println!("  {}", command);
                }
            }
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
