// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use crate::command::{column_char, format_vertex};
use goban_core::{Board, Color, Coord, MoveChain, MoveKind};

/// Render the board as ASCII art, marking the last stone played
pub fn render_board(board: &Board, last_played: Option<Coord>) -> String {
    let size = board.size();
    let mut output = String::new();

    let column_labels = column_labels(size);
    output.push_str(&column_labels);

    for row in 0..size {
        // Row number (1-indexed)
        output.push_str(&format!("{:2} ", row + 1));

        for col in 0..size {
            let coord = Coord::new(col, row);
            let symbol = match (board.get(coord), last_played == Some(coord)) {
                (Some(Color::Black), false) => "●",
                (Some(Color::White), false) => "○",
                (Some(Color::Black), true) => "◆",
                (Some(Color::White), true) => "◇",
                (None, _) if is_star_point(coord, size) => "*",
                (None, _) => "+",
            };
            output.push_str(&format!(" {}", symbol));
        }

        output.push_str(&format!(" {}", row + 1));
        output.push('\n');
    }

    output.push_str(&column_labels);
    output
}

/// One line per move, oldest first
pub fn render_history(chain: &MoveChain) -> String {
    let mut output = String::new();
    for mv in chain.iter() {
        let action = match (mv.kind(), mv.location()) {
            (MoveKind::Play, Some(coord)) => format_vertex(coord),
            (kind, _) => kind.to_string(),
        };
        output.push_str(&format!("{:3}. {:<5} {}", mv.number(), mv.color(), action));
        if let Some(captured) = mv.captured().filter(|c| !c.is_empty()) {
            output.push_str(&format!(" (captures {})", captured.len()));
        }
        output.push('\n');
    }
    output
}

fn column_labels(size: u8) -> String {
    let mut line = String::from("   ");
    for col in 0..size {
        line.push_str(&format!(" {}", column_char(col)));
    }
    line.push('\n');
    line
}

/// Check if a coordinate is a star point on the board
fn is_star_point(coord: Coord, board_size: u8) -> bool {
    let (x, y) = (coord.x, coord.y);

    match board_size {
        9 => matches!((x, y), (2, 2) | (2, 6) | (4, 4) | (6, 2) | (6, 6)),
        13 => matches!((x, y), (3, 3) | (3, 9) | (6, 6) | (9, 3) | (9, 9)),
        19 => matches!(
            (x, y),
            (3, 3) | (3, 9) | (3, 15) |
            (9, 3) | (9, 9) | (9, 15) |
            (15, 3) | (15, 9) | (15, 15)
        ),
        _ => false,
    }
}
