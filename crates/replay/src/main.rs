//! Replay CLI
//!
//! Replays a recorded game file and prints the move list and result.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use replay::{GameFile, logger::setup_logger, replay_game};

#[derive(Parser, Debug)]
#[command(about = "Replay a recorded chess game through the rules engine.")]
struct Args {
    /// TOML game file with a `moves` list such as ["e2e4", "e7e5"]
    game: PathBuf,

    /// Write the replay summary as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the final board diagram
    #[arg(long)]
    board: bool,
}

fn main() -> Result<()> {
    setup_logger();
    let args = Args::parse();

    let game = GameFile::load(&args.game)?;
    let replay = replay_game(&game)?;

    replay.summary.print_report();
    if args.board {
        println!("{}", replay.board);
    }

    if let Some(path) = &args.json {
        replay.summary.save(path)?;
        info!(path = %path.display(), "summary written");
    }
    Ok(())
}
