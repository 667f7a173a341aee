// SPDX-License-Identifier: MIT OR Apache-2.0

//! goban core - board state and undoable move history
//!
//! This crate provides the core game functionality including:
//! - Go board representation with capture resolution
//! - Placement rules (occupancy, suicide)
//! - The move chain: an ordered, navigable, undoable history of moves
//! - A game session that drives the chain turn by turn

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod chain;
pub mod error;
pub mod game;
pub mod moves;
pub mod player;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use board::{Board, BoardState, CapturedSet};
pub use chain::{MoveChain, MoveId};
pub use error::{GameError, MoveError, PlacementError};
pub use game::{EndReason, GameConfig, GameEvent, GameSession, GameStatus};
pub use moves::{Move, MoveKind, Placement};
pub use player::Player;

/// Player color in a Go game (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (traditionally goes first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.pad("Black"),
            Color::White => f.pad("White"),
        }
    }
}

/// Board coordinate representing an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
