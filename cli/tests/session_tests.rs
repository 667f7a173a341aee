// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted sessions through the CLI loop

use goban_cli::{run_session, session::describe};
use goban_core::{Color, Coord, GameConfig, GameEvent, GameSession, MoveKind};
use std::io::Cursor;

fn new_game() -> GameSession {
    GameSession::new(&GameConfig {
        board_size: 9,
        ..GameConfig::default()
    })
    .unwrap()
}

fn run(game: &mut GameSession, json: bool, script: &str) -> String {
    let mut out = Vec::new();
    run_session(game, json, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn scripted_game_with_capture_and_undo() {
    let mut game = new_game();
    let script = "B1\nB2\nA2\nJ9\nC2\nJ8\nplay B3\nundo\nquit\nD5\n";
    let output = run(&mut game, false, script);

    assert!(output.contains("7. Black plays B3, capturing 1"));
    assert!(output.contains("Took back move 7 (Black play), 1 stone(s) restored"));

    // Quit stops before D5
    assert_eq!(game.chain().len(), 6);
    assert_eq!(game.board().get(Coord::new(1, 1)), Some(Color::White));
}

#[test]
fn rejected_input_keeps_session_running() {
    let mut game = new_game();
    let output = run(&mut game, false, "E5\nE5\nZ1\nfly\nF6\n");

    assert!(output.contains("Rejected: illegal placement"));
    assert!(output.contains("Invalid input"));
    assert_eq!(game.chain().len(), 2);
}

#[test]
fn json_events_are_one_per_line() {
    let mut game = new_game();
    let output = run(&mut game, true, "C3\npass\npass\n");

    let events: Vec<GameEvent> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events.len(), 4);
    assert!(matches!(
        events[0],
        GameEvent::MoveMade { kind: MoveKind::Play, by: Color::Black, .. }
    ));
    assert!(matches!(events[3], GameEvent::GameEnded(_)));
    assert!(game.is_over());
}

#[test]
fn history_lists_moves() {
    let mut game = new_game();
    let output = run(&mut game, false, "D4\npass\nhistory\n");
    assert!(output.contains("  1. Black D4"));
    assert!(output.contains("  2. White pass"));
}

#[test]
fn describe_resignation() {
    let mut game = new_game();
    let events = game.resign().unwrap();
    assert_eq!(describe(&events[1]), "Game over: Black resigned, White wins");
}
