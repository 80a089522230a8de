//! Lane Warden - entry point
//!
//! Reads the referee protocol from stdin, decides one command per
//! controlled hero per turn and writes the command lines to stdout.
//! Stdout belongs to the referee; every diagnostic goes to stderr.

use std::io;

use tracing_subscriber::EnvFilter;

use lane_warden::core::error::Result;
use lane_warden::protocol::{CommandWriter, ProtocolReader};
use lane_warden::tactics::commander::{draft_pick, TurnCommander};
use lane_warden::tactics::doctrine::{load_doctrine, Doctrine};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lane_warden=info")),
        )
        .with_writer(io::stderr)
        .init();

    let doctrine = load_doctrine("default").unwrap_or_else(|e| {
        tracing::warn!("doctrine load failed ({}), using built-in defaults", e);
        Doctrine::default()
    });
    tracing::info!(doctrine = %doctrine.name, "engine up");
    let commander = TurnCommander::new(doctrine);

    let stdin = io::stdin();
    let mut reader = ProtocolReader::new(stdin.lock());
    let mut writer = CommandWriter::new(io::stdout());

    let setup = reader.read_setup()?;
    tracing::info!(
        team = setup.my_team,
        items = setup.catalog.len(),
        "match start"
    );

    let mut turn = 0u32;
    while let Some(snapshot) = reader.read_turn(setup.my_team)? {
        turn += 1;
        if snapshot.round_type < 0 {
            writer.draft_line(draft_pick(turn))?;
            continue;
        }
        for command in commander.decide_turn(turn, &snapshot, &setup.catalog) {
            writer.command_line(&command)?;
        }
    }
    tracing::info!(turns = turn, "referee closed the stream");
    Ok(())
}
