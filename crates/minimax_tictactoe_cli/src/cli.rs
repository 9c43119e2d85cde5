//! Command-line interface for minimax-tictactoe.

use clap::{Parser, Subcommand};
use minimax_tictactoe::{Board, Mark};
use std::path::PathBuf;

/// Minimax Tic-Tac-Toe - perfect play by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "minimax-tictactoe")]
#[command(about = "Play or analyze tic-tac-toe against a perfect minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./minimax-tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine on the terminal
    Play {
        /// Side the human plays (x or o); overrides the config file
        #[arg(long)]
        human: Option<Mark>,

        /// Show the engine's evaluation before each human move
        #[arg(long)]
        analysis: bool,
    },

    /// Let the engine play both sides from the empty board
    Selfplay,

    /// Evaluate a position given in notation, e.g. "XOX/XOO/..."
    Analyze {
        /// Board in notation: three rows of X, O or '.' separated by '/'
        board: Board,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
