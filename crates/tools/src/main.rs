use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{InputJournal, ReplayResult, ScenarioConfig, replay_to_end};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Scenario TOML to replay against; the built-in scenario when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.scenario {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("Failed to load scenario: {}", path.display()))?,
        None => ScenarioConfig::default(),
    };

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;
    info!("replaying {} inputs", journal.inputs.len());

    let result: ReplayResult =
        replay_to_end(&config, &journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Final Turn: {}", result.final_turn);
    println!("Outcome: {:?}", result.final_outcome);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
