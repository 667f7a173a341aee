// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session: turn order and game state on top of the move chain

use crate::{
    board::Board,
    chain::{MoveChain, MoveId},
    error::{GameError, MoveError},
    moves::{Move, MoveKind},
    Color, Coord, Player,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Smallest supported board
pub const MIN_BOARD_SIZE: u8 = 7;
/// Largest supported board
pub const MAX_BOARD_SIZE: u8 = 19;

/// Settings for a new game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: u8,
    pub black_name: String,
    pub white_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 19,
            black_name: "Black".to_string(),
            white_name: "White".to_string(),
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The given color resigned
    Resignation(Color),
    /// Both players passed in succession
    TwoPasses,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No move has been made yet
    NotStarted,
    InProgress,
    Ended(EndReason),
}

/// Game events emitted during play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was made
    MoveMade {
        /// Ply number of the move
        number: usize,
        kind: MoveKind,
        by: Color,
        /// Location for play moves
        coord: Option<Coord>,
        /// Coordinates of stones the move captured
        captured: Vec<Coord>,
    },
    /// The tail move was taken back
    MoveUndone {
        number: usize,
        kind: MoveKind,
        by: Color,
        coord: Option<Coord>,
        /// Stones returned to the board
        restored: Vec<Coord>,
    },
    /// The game has ended
    GameEnded(EndReason),
}

/// A game between two players on one board
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    chain: MoveChain,
    black: Arc<Player>,
    white: Arc<Player>,
}

impl GameSession {
    /// Create a new game; black moves first
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&config.board_size) {
            return Err(GameError::InvalidBoardSize(config.board_size));
        }

        info!(
            "New {}x{} game: {} vs {}",
            config.board_size, config.board_size, config.black_name, config.white_name
        );
        Ok(Self {
            board: Board::new(config.board_size),
            chain: MoveChain::new(),
            black: Arc::new(Player::new(config.black_name.clone(), Color::Black)),
            white: Arc::new(Player::new(config.white_name.clone(), Color::White)),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn chain(&self) -> &MoveChain {
        &self.chain
    }

    pub fn player(&self, color: Color) -> &Arc<Player> {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// The player whose turn it is
    pub fn next_player(&self) -> &Arc<Player> {
        match self.chain.last_move() {
            Some(mv) => self.player(mv.color().opposite()),
            None => &self.black,
        }
    }

    pub fn status(&self) -> GameStatus {
        let last = match self.chain.last_move() {
            Some(mv) => mv,
            None => return GameStatus::NotStarted,
        };

        match last.kind() {
            MoveKind::Resign => GameStatus::Ended(EndReason::Resignation(last.color())),
            MoveKind::Pass => {
                let passed_before = last
                    .previous()
                    .and_then(|id| self.chain.get(id))
                    .map_or(false, |prev| prev.kind() == MoveKind::Pass);
                if passed_before {
                    GameStatus::Ended(EndReason::TwoPasses)
                } else {
                    GameStatus::InProgress
                }
            }
            MoveKind::Play => GameStatus::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status(), GameStatus::Ended(_))
    }

    /// Number of stones `color` has captured so far
    pub fn prisoners(&self, color: Color) -> usize {
        self.chain
            .iter()
            .filter(|mv| mv.color() == color)
            .filter_map(Move::captured)
            .map(|captured| captured.len())
            .sum()
    }

    /// Place a stone for the player to move.
    ///
    /// An illegal location leaves both board and history as they were.
    pub fn play(&mut self, coord: Coord) -> Result<GameEvent, GameError> {
        self.ensure_open()?;

        let player = self.next_player().clone();
        let id = self.chain.construct(MoveKind::Play, player, self.chain.tail())?;

        match self.chain.assign_location(id, coord, &mut self.board) {
            Ok(captured) => {
                let mv = self.moved(id)?;
                info!("{}", mv);
                Ok(GameEvent::MoveMade {
                    number: mv.number(),
                    kind: MoveKind::Play,
                    by: mv.color(),
                    coord: Some(coord),
                    captured: captured.coords().to_vec(),
                })
            }
            Err(err) => {
                // Unlocated, so undo only detaches it
                self.chain.undo(id, &mut self.board)?;
                Err(err.into())
            }
        }
    }

    /// Pass the turn
    pub fn pass(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.append(MoveKind::Pass)
    }

    /// Resign the game
    pub fn resign(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.append(MoveKind::Resign)
    }

    /// Take back the most recent move; reopens a finished game
    pub fn undo(&mut self) -> Result<GameEvent, GameError> {
        let mv = self
            .chain
            .undo_tail(&mut self.board)?
            .ok_or(GameError::NothingToUndo)?;

        info!("Undid {}", mv);
        Ok(GameEvent::MoveUndone {
            number: mv.number(),
            kind: mv.kind(),
            by: mv.color(),
            coord: mv.location(),
            restored: mv.captured().map(|c| c.coords().to_vec()).unwrap_or_default(),
        })
    }

    fn append(&mut self, kind: MoveKind) -> Result<Vec<GameEvent>, GameError> {
        self.ensure_open()?;

        let player = self.next_player().clone();
        let id = self.chain.construct(kind, player, self.chain.tail())?;
        let mv = self.moved(id)?;
        info!("{}", mv);

        let mut events = vec![GameEvent::MoveMade {
            number: mv.number(),
            kind,
            by: mv.color(),
            coord: None,
            captured: Vec::new(),
        }];
        if let GameStatus::Ended(reason) = self.status() {
            info!("Game ended: {:?}", reason);
            events.push(GameEvent::GameEnded(reason));
        }
        Ok(events)
    }

    fn ensure_open(&self) -> Result<(), GameError> {
        if self.is_over() {
            warn!("Move attempted after the game ended");
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn moved(&self, id: MoveId) -> Result<&Move, GameError> {
        self.chain.get(id).ok_or_else(|| {
            GameError::Move(MoveError::BrokenChainInvariant(format!(
                "move {} missing right after it was made",
                id
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: u8) -> GameSession {
        GameSession::new(&GameConfig {
            board_size: size,
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_board_size_bounds() {
        for size in [6, 20, 0] {
            let config = GameConfig {
                board_size: size,
                ..GameConfig::default()
            };
            assert!(matches!(
                GameSession::new(&config),
                Err(GameError::InvalidBoardSize(s)) if s == size
            ));
        }
        assert!(GameSession::new(&GameConfig::default()).is_ok());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = session(9);
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.next_player().color(), Color::Black);

        game.play(Coord::new(2, 2)).unwrap();
        assert_eq!(game.next_player().color(), Color::White);
        game.pass().unwrap();
        assert_eq!(game.next_player().color(), Color::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_resign_ends_game() {
        let mut game = session(9);
        game.play(Coord::new(2, 2)).unwrap();
        let events = game.resign().unwrap();

        assert_eq!(
            events.last(),
            Some(&GameEvent::GameEnded(EndReason::Resignation(Color::White)))
        );
        assert!(matches!(game.play(Coord::new(3, 3)), Err(GameError::GameOver)));
        assert!(matches!(game.pass(), Err(GameError::GameOver)));

        game.undo().unwrap();
        assert!(!game.is_over());
        assert!(game.play(Coord::new(3, 3)).is_ok());
    }

    #[test]
    fn test_undo_without_moves() {
        let mut game = session(9);
        assert!(matches!(game.undo(), Err(GameError::NothingToUndo)));
    }
}
