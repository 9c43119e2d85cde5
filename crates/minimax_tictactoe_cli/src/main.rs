//! Minimax Tic-Tac-Toe - command-line front end
//!
//! Play against the engine, watch it play itself, or analyze a position.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { human, analysis } => run_play(config.with_overrides(human, analysis)),
        Command::Selfplay => run_selfplay(config),
        Command::Analyze { board, json } => play::analyze_position(&board, json, io::stdout().lock()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: PlayConfig) -> Result<()> {
    info!(human = %config.human(), "Starting interactive play");
    let outcome = play::play(&config, io::stdin().lock(), io::stdout().lock())?;
    info!(%outcome, "Session ended");
    Ok(())
}

/// Run engine self-play
#[instrument(skip(config))]
fn run_selfplay(config: PlayConfig) -> Result<()> {
    let outcome = play::selfplay(&config, io::stdout().lock())?;
    info!(%outcome, "Self-play finished");
    Ok(())
}
