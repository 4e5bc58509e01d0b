//! Strictly Tris - CLI entry point

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_tris::{Cli, Command, LogFilter, TrisConfig, render, replay_file, run};
use strictly_tris_core::GameSession;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let log_filter = LogFilter::init();
    let cli = Cli::parse();
    let config = TrisConfig::load(cli.config.as_deref())?;
    log_filter.apply_config(&config)?;

    match cli.command {
        Command::Play { x_name, o_name } => play(config.with_overrides(x_name, o_name)),
        Command::Replay { file } => replay(&config, &file),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn play(config: TrisConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut session = GameSession::with_registry(config.registry());
    let stdin = std::io::stdin();
    run(&mut session, stdin.lock(), std::io::stdout().lock())?;
    Ok(())
}

/// Print the board and outcome of a saved history
#[instrument(skip(config))]
fn replay(config: &TrisConfig, file: &std::path::Path) -> Result<()> {
    let registry = config.registry();
    let (history, outcome) = replay_file(file, &registry)?;

    print!("{}", render::screen(&outcome, &registry));
    println!();
    for entry in history.iter() {
        println!("{entry}");
    }
    if !outcome.is_over() {
        println!("{outcome}");
    }
    Ok(())
}
