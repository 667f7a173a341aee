// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line commands understood by the CLI

use anyhow::{anyhow, Result};
use goban_core::Coord;

/// A parsed user command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a stone at the coordinate
    Play(Coord),
    Pass,
    Resign,
    /// Take back the last move
    Undo,
    /// Print the board
    Show,
    /// Print the move list
    History,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  play <vertex> | <vertex>   place a stone, e.g. 'D4'
  pass                       pass the turn
  resign                     resign the game
  undo                       take back the last move
  show                       print the board
  history                    list the moves played
  help                       show this message
  quit                       leave";

/// Parse one input line for a board of `board_size`
pub fn parse_command(input: &str, board_size: u8) -> Result<Command> {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();
    let first = words.next().ok_or_else(|| anyhow!("Empty command. Type 'help' for a list."))?;
    let arg = words.next();

    if words.next().is_some() {
        return Err(anyhow!("Too many arguments in '{}'.", input));
    }

    let command = match (first, arg) {
        ("play", Some(vertex)) => Command::Play(parse_vertex(vertex, board_size)?),
        ("play", None) => return Err(anyhow!("'play' needs a vertex, e.g. 'play D4'.")),
        ("pass", None) => Command::Pass,
        ("resign", None) => Command::Resign,
        ("undo", None) => Command::Undo,
        ("show", None) => Command::Show,
        ("history", None) => Command::History,
        ("help", None) | ("?", None) => Command::Help,
        ("quit", None) | ("exit", None) => Command::Quit,
        (vertex, None) => Command::Play(parse_vertex(vertex, board_size)?),
        (other, Some(_)) => return Err(anyhow!("'{}' takes no argument.", other)),
    };
    Ok(command)
}

/// Parse a vertex like "D4" (columns A-T skipping I, rows from 1)
pub fn parse_vertex(input: &str, board_size: u8) -> Result<Coord> {
    let input = input.to_lowercase();
    let mut chars = input.chars();
    let col_char = chars
        .next()
        .ok_or_else(|| anyhow!("Invalid move format. Examples: 'D4', 'pass', 'resign'."))?;
    let row_str = chars.as_str();

    // Parse column (A-T, skipping I)
    let col = if ('a'..='h').contains(&col_char) {
        col_char as u8 - b'a'
    } else if ('j'..='t').contains(&col_char) {
        col_char as u8 - b'a' - 1
    } else {
        return Err(anyhow!("Invalid column '{}'. Must be A-T (excluding I).", col_char));
    };

    if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("Invalid row. Must be between 1 and {}.", board_size));
    }
    let row = match row_str.parse::<u8>() {
        Ok(r) if r > 0 && r <= board_size => r - 1,
        _ => return Err(anyhow!("Invalid row. Must be between 1 and {}.", board_size)),
    };

    if col >= board_size {
        return Err(anyhow!("Column '{}' is outside a {}x{} board.", col_char, board_size, board_size));
    }
    Ok(Coord::new(col, row))
}

/// Convert a column index to a column character (A-T, skipping I)
pub fn column_char(col: u8) -> char {
    if col < 8 {
        (b'A' + col) as char
    } else {
        (b'A' + col + 1) as char
    }
}

/// Format a coordinate the way `parse_vertex` reads it
pub fn format_vertex(coord: Coord) -> String {
    format!("{}{}", column_char(coord.x), coord.y + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vertex() {
        assert_eq!(parse_vertex("A1", 9).unwrap(), Coord::new(0, 0));
        assert_eq!(parse_vertex("d4", 9).unwrap(), Coord::new(3, 3));
        assert_eq!(parse_vertex("J9", 9).unwrap(), Coord::new(8, 8));
        assert_eq!(parse_vertex("T19", 19).unwrap(), Coord::new(18, 18));

        assert!(parse_vertex("I5", 9).is_err());
        assert!(parse_vertex("K1", 9).is_err());
        assert!(parse_vertex("A10", 9).is_err());
        assert!(parse_vertex("A0", 9).is_err());
        assert!(parse_vertex("", 9).is_err());
        assert!(parse_vertex("A+1", 9).is_err());
        assert!(parse_vertex("A 1", 9).is_err());
        assert!(parse_vertex("A-1", 9).is_err());
    }

    #[test]
    fn test_format_vertex_round_trip() {
        for coord in [Coord::new(0, 0), Coord::new(7, 3), Coord::new(8, 8), Coord::new(18, 0)] {
            assert_eq!(parse_vertex(&format_vertex(coord), 19).unwrap(), coord);
        }
        assert_eq!(format_vertex(Coord::new(8, 0)), "J1");
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("pass", 9).unwrap(), Command::Pass);
        assert_eq!(parse_command("  RESIGN ", 9).unwrap(), Command::Resign);
        assert_eq!(parse_command("undo", 9).unwrap(), Command::Undo);
        assert_eq!(parse_command("play c3", 9).unwrap(), Command::Play(Coord::new(2, 2)));
        assert_eq!(parse_command("C3", 9).unwrap(), Command::Play(Coord::new(2, 2)));
        assert_eq!(parse_command("exit", 9).unwrap(), Command::Quit);

        assert!(parse_command("", 9).is_err());
        assert!(parse_command("play", 9).is_err());
        assert!(parse_command("pass now", 9).is_err());
        assert!(parse_command("play c3 d4", 9).is_err());
    }

    #[test]
    fn test_column_char() {
        assert_eq!(column_char(0), 'A');
        assert_eq!(column_char(7), 'H');
        assert_eq!(column_char(8), 'J');
        assert_eq!(column_char(18), 'T');
    }
}
