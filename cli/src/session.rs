// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive loop: read commands, drive the game session, print results

use crate::command::{format_vertex, parse_command, Command, HELP};
use crate::render::{render_board, render_history};
use anyhow::{Context, Result};
use goban_core::{game::EndReason, GameError, GameEvent, GameSession, MoveKind};
use std::io::{BufRead, Write};

/// Run commands from `input` against `game` until `quit` or end of input.
///
/// Rejected moves are reported and the loop continues; only I/O failures
/// end the session early.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut GameSession,
    json: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    if !json {
        print_board(game, out)?;
        prompt(game, out)?;
    }

    for line in input.lines() {
        let line = line.context("Error reading input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line, game.board().size()) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "Invalid input: {}", e)?;
                continue;
            }
        };
        tracing::debug!("Command: {:?}", command);

        let outcome: Result<Vec<GameEvent>, GameError> = match command {
            Command::Play(coord) => game.play(coord).map(|event| vec![event]),
            Command::Pass => game.pass(),
            Command::Resign => game.resign(),
            Command::Undo => game.undo().map(|event| vec![event]),
            Command::Show => {
                print_board(game, out)?;
                continue;
            }
            Command::History => {
                write!(out, "{}", render_history(game.chain()))?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        };

        match outcome {
            Ok(events) => {
                for event in &events {
                    report(event, json, out)?;
                }
                if !json {
                    print_board(game, out)?;
                }
            }
            Err(e) => {
                tracing::warn!("Rejected {:?}: {}", command, e);
                writeln!(out, "Rejected: {}", e)?;
            }
        }

        if !json {
            prompt(game, out)?;
        }
    }

    Ok(())
}

fn report<W: Write>(event: &GameEvent, json: bool, out: &mut W) -> Result<()> {
    if json {
        let line = serde_json::to_string(event).context("Failed to serialize event")?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }
    writeln!(out, "{}", describe(event))?;
    Ok(())
}

/// Human readable form of an event
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::MoveMade {
            number,
            kind,
            by,
            coord,
            captured,
        } => {
            let mut text = match (kind, coord) {
                (MoveKind::Play, Some(coord)) => format!("{}. {} plays {}", number, by, format_vertex(*coord)),
                (MoveKind::Resign, _) => format!("{}. {} resigns", number, by),
                _ => format!("{}. {} passes", number, by),
            };
            if !captured.is_empty() {
                text.push_str(&format!(", capturing {}", captured.len()));
            }
            text
        }
        GameEvent::MoveUndone {
            number,
            kind,
            by,
            restored,
            ..
        } => {
            let mut text = format!("Took back move {} ({} {})", number, by, kind);
            if !restored.is_empty() {
                text.push_str(&format!(", {} stone(s) restored", restored.len()));
            }
            text
        }
        GameEvent::GameEnded(EndReason::Resignation(color)) => {
            format!("Game over: {} resigned, {} wins", color, color.opposite())
        }
        GameEvent::GameEnded(EndReason::TwoPasses) => "Game over: both players passed".to_string(),
    }
}

fn print_board<W: Write>(game: &GameSession, out: &mut W) -> Result<()> {
    let last_played = game.chain().last_move().and_then(|mv| mv.location());
    writeln!(out)?;
    write!(out, "{}", render_board(game.board(), last_played))?;
    writeln!(
        out,
        "Captures: Black {} - White {}",
        game.prisoners(goban_core::Color::Black),
        game.prisoners(goban_core::Color::White)
    )?;
    Ok(())
}

fn prompt<W: Write>(game: &GameSession, out: &mut W) -> Result<()> {
    if game.is_over() {
        writeln!(out, "Game over. 'undo' to take back the last move, 'quit' to leave.")?;
    } else {
        writeln!(out, "{} to move. Enter a move (e.g., 'D4'), 'pass', 'resign' or 'undo':", game.next_player())?;
    }
    out.flush()?;
    Ok(())
}
