// SPDX-License-Identifier: MIT OR Apache-2.0

use goban_core::{board::Board, rules::RuleValidator, BoardState, Color, Coord, PlacementError};

#[test]
fn self_capture() {
    // White stones surrounding an empty point
    let board = Board::with_stones(
        9,
        &[
            (Coord::new(0, 0), Color::White),
            (Coord::new(1, 0), Color::White),
            (Coord::new(0, 1), Color::White),
            (Coord::new(2, 1), Color::White),
            (Coord::new(1, 2), Color::White),
            (Coord::new(2, 2), Color::White),
        ],
    );

    let validator = RuleValidator::new(&board);

    // Black can't play (self-capture), but White can play
    assert_eq!(
        validator.check_move(Coord::new(1, 1), Color::Black),
        Err(PlacementError::Suicide(Coord::new(1, 1)))
    );
    assert!(validator.check_move(Coord::new(1, 1), Color::White).is_ok());
}

#[test]
fn suicide_leaves_board_untouched() {
    let mut board = Board::with_stones(
        9,
        &[(Coord::new(1, 0), Color::White), (Coord::new(0, 1), Color::White)],
    );
    let before = board.clone();

    assert_eq!(
        board.place_stone(Coord::new(0, 0), Color::Black),
        Err(PlacementError::Suicide(Coord::new(0, 0)))
    );
    assert_eq!(board, before);
}

#[test]
fn capturing_last_liberty_is_not_suicide() {
    // Black fills its own last liberty but captures the white corner stone
    let board = Board::with_stones(
        9,
        &[
            (Coord::new(0, 0), Color::White),
            (Coord::new(0, 1), Color::Black),
            (Coord::new(2, 0), Color::White),
            (Coord::new(1, 1), Color::White),
        ],
    );
    let validator = RuleValidator::new(&board);
    assert!(validator.check_move(Coord::new(1, 0), Color::Black).is_ok());

    let mut board = board;
    let captured = board.place_stone(Coord::new(1, 0), Color::Black).unwrap();
    assert_eq!(captured.coords(), &[Coord::new(0, 0)]);
}

#[test]
fn capture_detection() {
    // White stones that will be captured, surrounded with one liberty left
    let board = Board::with_stones(
        9,
        &[
            (Coord::new(3, 3), Color::White),
            (Coord::new(4, 3), Color::White),
            (Coord::new(2, 3), Color::Black),
            (Coord::new(3, 2), Color::Black),
            (Coord::new(4, 2), Color::Black),
            (Coord::new(5, 3), Color::Black),
            (Coord::new(4, 4), Color::Black),
        ],
    );

    let validator = RuleValidator::new(&board);
    assert!(validator.check_move(Coord::new(3, 4), Color::Black).is_ok());

    let mut board2 = board.clone();
    let captured = board2.place_stone(Coord::new(3, 4), Color::Black).unwrap();
    assert_eq!(captured.len(), 2, "Should capture 2 white stones");
    assert_eq!(captured.color(), Color::White);
    assert_eq!(board2.stone_count(Color::White), 0);
}

#[test]
fn board_creation() {
    let board = Board::new(19);
    assert_eq!(board.size(), 19);
    assert_eq!(board.get(Coord::new(0, 0)), None);
    assert!(board.is_empty());
}

#[test]
fn position_hash_tracks_stones() {
    let mut board = Board::new(9);
    let empty_hash = board.position_hash();

    board.place_stone(Coord::new(4, 4), Color::Black).unwrap();
    assert_ne!(board.position_hash(), empty_hash);

    board.remove_stone(Coord::new(4, 4)).unwrap();
    assert_eq!(board.position_hash(), empty_hash);
}
