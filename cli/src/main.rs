// SPDX-License-Identifier: MIT OR Apache-2.0

//! goban CLI - play Go in the terminal
//!
//! Reads commands from stdin, one per line, and prints the board after each
//! move. Every move can be taken back with `undo`.

use anyhow::{anyhow, Result};
use clap::Parser;
use goban_cli::{config, run_session};
use goban_core::GameSession;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "goban-cli", about = "Go in the terminal with full move history", version)]
struct Args {
    /// Board size (9, 13, or 19)
    #[clap(short, long)]
    size: Option<u8>,

    /// Name of the black player
    #[clap(long)]
    black: Option<String>,

    /// Name of the white player
    #[clap(long)]
    white: Option<String>,

    /// Path to a TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Print game events as JSON lines
    #[clap(long)]
    json: bool,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut cli_config = config::load_config(args.config.as_deref())?;
    if let Some(size) = args.size {
        cli_config.board_size = size;
    }
    if let Some(black) = args.black {
        cli_config.black_name = black;
    }
    if let Some(white) = args.white {
        cli_config.white_name = white;
    }
    cli_config.json |= args.json;

    // Validate board size
    if ![9, 13, 19].contains(&cli_config.board_size) {
        return Err(anyhow!("Invalid board size. Must be 9, 13, or 19."));
    }

    let mut game = GameSession::new(&cli_config.game_config())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut game, cli_config.json, stdin.lock(), &mut stdout)?;

    tracing::info!("Session ended after {} moves", game.chain().len());
    Ok(())
}
