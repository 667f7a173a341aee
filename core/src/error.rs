// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for board placement, the move chain and game sessions

use crate::{chain::MoveId, Coord, MoveKind};
use thiserror::Error;

/// Reasons the board refuses to place or remove a stone
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The coordinate is outside the board
    #[error("{0} is outside the board")]
    OutOfBounds(Coord),

    /// The intersection already holds a stone
    #[error("{0} is already occupied")]
    Occupied(Coord),

    /// The placed stone's group would have no liberties and captures nothing
    #[error("playing at {0} would be suicide")]
    Suicide(Coord),

    /// Removal was requested on an empty intersection
    #[error("no stone at {0}")]
    Empty(Coord),
}

/// Why a location could not be assigned to a move
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KindViolation {
    /// Only play moves carry a location
    #[error("a {0} move has no location")]
    NotAPlay(MoveKind),

    /// The move already has a location
    #[error("location already assigned at {0}")]
    AlreadyLocated(Coord),

    /// A later move has been appended after this one
    #[error("move is no longer the tail of the chain")]
    NotTail,
}

/// Errors raised by move chain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Location assignment that the move's kind or state does not allow
    #[error("invalid operation on move {id}: {reason}")]
    InvalidKindOperation {
        /// The move the assignment targeted
        id: MoveId,
        /// What made the assignment invalid
        reason: KindViolation,
    },

    /// The board rejected the location; nothing was recorded
    #[error("illegal placement: {0}")]
    IllegalPlacement(#[from] PlacementError),

    /// Undo of a move that is not the current tail or was already undone
    #[error("move {0} is not the tail of the chain")]
    UndoOnNonTail(MoveId),

    /// A move may only be appended after the current tail
    #[error("cannot append after {given:?}, the tail is {tail:?}")]
    AppendOnNonTail {
        /// The predecessor the caller supplied
        given: Option<MoveId>,
        /// The actual tail
        tail: Option<MoveId>,
    },

    /// Internal consistency failure between links or between a move and the board
    #[error("move chain invariant broken: {0}")]
    BrokenChainInvariant(String),
}

/// Errors that can occur while running a game session
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has ended by resignation or two passes
    #[error("the game is over")]
    GameOver,

    /// There is no move to undo
    #[error("no move to undo")]
    NothingToUndo,

    /// Board size outside the supported range
    #[error("invalid board size {0}")]
    InvalidBoardSize(u8),

    /// A move chain operation failed
    #[error(transparent)]
    Move(#[from] MoveError),
}
