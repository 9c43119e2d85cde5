//! Terminal front ends: interactive play, self-play and analysis.

use crate::config::PlayConfig;
use anyhow::{Context, Result};
use minimax_tictactoe::{
    Analysis, Board, Game, Mark, Move, Outcome, Position, analyze, best_move_with_stats,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// What a line of human input asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Move(Move),
    Undo,
    Quit,
}

/// Reads a keypad number, a position label, `row,col`, `undo` or `quit`.
fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Input::Quit),
        "u" | "undo" => return Some(Input::Undo),
        _ => {}
    }
    Position::from_label_or_number(line)
        .map(Position::to_move)
        .or_else(|| line.parse::<Move>().ok())
        .map(Input::Move)
}

fn render<W: Write>(out: &mut W, board: &Board, config: &PlayConfig) -> Result<()> {
    writeln!(out, "\n{board}")?;
    if *config.notation() {
        writeln!(out, "[{}]", board.notation())?;
    }
    Ok(())
}

fn render_analysis<W: Write>(out: &mut W, analysis: &Analysis) -> Result<()> {
    let moves: Vec<String> = analysis
        .optimal_moves
        .iter()
        .map(|mv| describe(*mv))
        .collect();
    writeln!(
        out,
        "{} to move, value {} ({} with best play); optimal: {}",
        analysis.to_move,
        analysis.value,
        analysis.forecast(),
        moves.join(", ")
    )?;
    Ok(())
}

fn describe(mv: Move) -> String {
    match Position::from_move(mv) {
        Some(pos) => format!("{pos} {mv}"),
        None => mv.to_string(),
    }
}

/// Human against the engine. Returns the outcome when the game ends or the
/// player quits (`InProgress` if they quit early or input runs out).
#[instrument(skip_all, fields(human = %config.human()))]
pub fn play<R: BufRead, W: Write>(config: &PlayConfig, input: R, mut out: W) -> Result<Outcome> {
    let human = *config.human();
    // Plies played before the human's first move.
    let engine_opening = usize::from(human == Mark::O);
    let mut game = Game::new();
    let mut lines = input.lines();
    info!("Starting interactive game");

    writeln!(
        out,
        "You are {human}. Enter 1-9, a name like \"center\", or row,col. \"undo\" takes back, \"quit\" leaves."
    )?;

    while !game.outcome().is_finished() {
        if game.to_move() != human {
            let (mv, stats) = best_move_with_stats(game.board());
            let Some(mv) = mv else { break };
            debug!(nodes = stats.nodes, "Engine searched");
            game.play(mv)?;
            writeln!(out, "Engine plays {}", describe(mv))?;
            continue;
        }

        render(&mut out, game.board(), config)?;
        if *config.show_analysis()
            && let Some(analysis) = analyze(game.board())
        {
            render_analysis(&mut out, &analysis)?;
        }
        write!(out, "{human}> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(game.outcome());
        };
        let line = line.context("Failed to read input")?;

        match parse_input(&line) {
            Some(Input::Quit) => return Ok(game.outcome()),
            Some(Input::Undo) if game.history().len() <= engine_opening => {
                writeln!(out, "Nothing to take back")?;
            }
            Some(Input::Undo) => {
                // Back to the previous position with the human to move.
                let mut undone = 0;
                while game.undo().is_some() {
                    undone += 1;
                    if game.to_move() == human {
                        break;
                    }
                }
                writeln!(out, "Took back {undone} move(s)")?;
            }
            Some(Input::Move(mv)) => {
                if let Err(err) = game.play(mv) {
                    warn!(%err, "Rejected human move");
                    writeln!(out, "{err}")?;
                }
            }
            None => writeln!(out, "Could not read {:?} as a move", line.trim())?,
        }
    }

    render(&mut out, game.board(), config)?;
    let outcome = game.outcome();
    writeln!(out, "{outcome}")?;
    Ok(outcome)
}

/// Engine against itself from the empty board.
#[instrument(skip_all)]
pub fn selfplay<W: Write>(config: &PlayConfig, mut out: W) -> Result<Outcome> {
    let mut game = Game::new();
    while let Some(mv) = game.play_engine_move() {
        writeln!(out, "{} plays {}", game.board().player_to_move().opponent(), describe(mv))?;
        render(&mut out, game.board(), config)?;
    }
    let outcome = game.outcome();
    writeln!(out, "\n{outcome}")?;
    Ok(outcome)
}

/// Prints the evaluation of a position, as text or JSON.
#[instrument(skip(out))]
pub fn analyze_position<W: Write>(board: &Board, json: bool, mut out: W) -> Result<()> {
    let analysis = analyze(board);
    if json {
        let value = serde_json::json!({
            "board": board,
            "outcome": board.outcome(),
            "analysis": analysis,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "{board}")?;
    match analysis {
        None => writeln!(out, "Game over: {}", board.outcome())?,
        Some(analysis) => {
            render_analysis(&mut out, &analysis)?;
            if let Some(mv) = analysis.best_move() {
                writeln!(out, "Best move: {}", describe(mv))?;
            }
            for scored in &analysis.scored_moves {
                writeln!(out, "  {:<22} {:>2}", describe(scored.mv), scored.value)?;
            }
            debug!(nodes = analysis.stats.nodes, "Analysis complete");
        }
    }
    Ok(())
}
