// SPDX-License-Identifier: MIT OR Apache-2.0

//! The move chain: the ordered, undoable history of a game
//!
//! Moves live in an arena owned by the chain, stored in game order. A move's
//! `next` link is the owning direction: a move can only be removed once it has
//! no successor, which is why undo is restricted to the tail. `previous` is a
//! plain handle used for lookup.
//!
//! Handles carry the identity of the chain that issued them and a serial
//! number, so a handle to an undone move never resolves again, even after a new
//! move takes its slot, and a handle never resolves on another chain.

use crate::{
    board::{BoardState, CapturedSet},
    error::{KindViolation, MoveError},
    moves::{Move, MoveKind, Placement},
    Coord, Player,
};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

static NEXT_CHAIN: AtomicU64 = AtomicU64::new(0);

fn next_chain_id() -> u64 {
    NEXT_CHAIN.fetch_add(1, Ordering::Relaxed)
}

/// Stable handle to a move in a [`MoveChain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveId {
    chain: u64,
    index: usize,
    serial: u64,
}

impl MoveId {
    pub(crate) fn new(chain: u64, index: usize, serial: u64) -> Self {
        Self { chain, index, serial }
    }

    /// Position of the move in the chain, 0 for the first move
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index + 1)
    }
}

/// Linear history of moves from game start to the current position
///
/// A clone is a separate chain: handles issued by the original do not resolve
/// on it.
#[derive(Debug)]
pub struct MoveChain {
    id: u64,
    moves: Vec<Move>,
    next_serial: u64,
}

impl Default for MoveChain {
    fn default() -> Self {
        Self {
            id: next_chain_id(),
            moves: Vec::new(),
            next_serial: 0,
        }
    }
}

impl Clone for MoveChain {
    fn clone(&self) -> Self {
        let chain = next_chain_id();
        let rehome = |id: MoveId| MoveId { chain, ..id };
        let moves = self
            .moves
            .iter()
            .map(|mv| {
                let mut mv = mv.clone();
                mv.id = rehome(mv.id);
                mv.previous = mv.previous.map(rehome);
                mv.next = mv.next.map(rehome);
                mv
            })
            .collect();

        Self {
            id: chain,
            moves,
            next_serial: self.next_serial,
        }
    }
}

impl MoveChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The first move of the game
    pub fn first(&self) -> Option<MoveId> {
        self.moves.first().map(Move::id)
    }

    /// The current move: the most recent move not yet undone
    pub fn tail(&self) -> Option<MoveId> {
        self.moves.last().map(Move::id)
    }

    /// Resolve a handle. Handles of undone moves resolve to `None`.
    pub fn get(&self, id: MoveId) -> Option<&Move> {
        self.moves.get(id.index).filter(|mv| mv.id == id)
    }

    /// The current move itself
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Successor of `id`
    pub fn next(&self, id: MoveId) -> Option<MoveId> {
        self.get(id).and_then(Move::next)
    }

    /// Predecessor of `id`
    pub fn previous(&self, id: MoveId) -> Option<MoveId> {
        self.get(id).and_then(Move::previous)
    }

    /// Walk `next` links from the first move
    pub fn iter(&self) -> Links<'_> {
        Links {
            chain: self,
            cursor: self.first(),
            remaining: self.moves.len(),
            forward: true,
        }
    }

    /// Walk `previous` links from the tail
    pub fn iter_rev(&self) -> Links<'_> {
        Links {
            chain: self,
            cursor: self.tail(),
            remaining: self.moves.len(),
            forward: false,
        }
    }

    /// Append a move of `kind` by `player` after `predecessor`.
    ///
    /// `predecessor` must be the current tail (`None` only for the first
    /// move). The new move is unlocated and becomes the tail; the board is not
    /// touched.
    pub fn construct(
        &mut self,
        kind: MoveKind,
        player: Arc<Player>,
        predecessor: Option<MoveId>,
    ) -> Result<MoveId, MoveError> {
        let tail = self.tail();
        if predecessor != tail {
            warn!("Rejected append after {:?}, tail is {:?}", predecessor, tail);
            return Err(MoveError::AppendOnNonTail {
                given: predecessor,
                tail,
            });
        }

        let id = MoveId::new(self.id, self.moves.len(), self.next_serial);
        self.next_serial += 1;

        if let Some(prev) = predecessor {
            self.moves[prev.index].next = Some(id);
        }
        self.moves.push(Move::new(id, kind, player, predecessor));

        debug!("Constructed {} move {} for {}", kind, id, self.moves[id.index].player());
        self.debug_check();
        Ok(id)
    }

    /// Assign the location of play move `id`, placing its stone on `board`.
    ///
    /// The board is asked first; the location is recorded only if the board
    /// accepted the stone, so a failed assignment leaves the move unlocated and
    /// the board untouched. Returns the stones the placement captured.
    pub fn assign_location<B: BoardState + ?Sized>(
        &mut self,
        id: MoveId,
        coord: Coord,
        board: &mut B,
    ) -> Result<CapturedSet, MoveError> {
        let tail = self.tail();
        let mv = self.get(id).ok_or(MoveError::InvalidKindOperation {
            id,
            reason: KindViolation::NotTail,
        })?;

        let violation = if mv.kind() != MoveKind::Play {
            Some(KindViolation::NotAPlay(mv.kind()))
        } else if let Some(located) = mv.location() {
            Some(KindViolation::AlreadyLocated(located))
        } else if tail != Some(id) {
            Some(KindViolation::NotTail)
        } else {
            None
        };
        if let Some(reason) = violation {
            warn!("Rejected location {} for move {}: {}", coord, id, reason);
            return Err(MoveError::InvalidKindOperation { id, reason });
        }

        let color = mv.color();
        let captured = board.place_stone(coord, color).map_err(|err| {
            warn!("Board rejected {} at {}: {}", color, coord, err);
            MoveError::IllegalPlacement(err)
        })?;

        self.moves[id.index].placement = Placement::Located {
            coord,
            captured: captured.clone(),
        };
        debug!("Move {} located at {}, {} captured", id, coord, captured.len());
        Ok(captured)
    }

    /// Undo move `id`, which must be the tail.
    ///
    /// A located play move has its stone removed and its captured stones put
    /// back before it is detached. The detached move is handed back to the
    /// caller; its handle no longer resolves.
    pub fn undo<B: BoardState + ?Sized>(&mut self, id: MoveId, board: &mut B) -> Result<Move, MoveError> {
        if self.tail() != Some(id) {
            warn!("Rejected undo of non-tail move {}", id);
            return Err(MoveError::UndoOnNonTail(id));
        }

        if let Some(mv) = self.moves.last() {
            if let Placement::Located { coord, captured } = &mv.placement {
                invert_placement(board, *coord, mv, captured)?;
            }
        }

        let mut mv = self
            .moves
            .pop()
            .ok_or_else(|| MoveError::BrokenChainInvariant("tail vanished during undo".to_string()))?;
        if let Some(prev) = mv.previous {
            self.moves[prev.index].next = None;
        }
        mv.previous = None;
        mv.next = None;

        debug!("Undid move {} ({})", id, mv.kind());
        self.debug_check();
        Ok(mv)
    }

    /// Undo the current tail, if any
    pub fn undo_tail<B: BoardState + ?Sized>(&mut self, board: &mut B) -> Result<Option<Move>, MoveError> {
        match self.tail() {
            Some(id) => self.undo(id, board).map(Some),
            None => Ok(None),
        }
    }

    /// Verify that `next` and `previous` links agree and cover every move once
    pub fn check_links(&self) -> Result<(), MoveError> {
        let broken = |msg: String| {
            error!("Move chain invariant broken: {}", msg);
            Err(MoveError::BrokenChainInvariant(msg))
        };

        let mut expected_previous = None;
        let mut cursor = self.first();
        let mut visited = 0;
        while let Some(id) = cursor {
            let mv = match self.get(id) {
                Some(mv) => mv,
                None => return broken(format!("dangling link to {}", id)),
            };
            if id.chain != self.id || id.index != visited {
                return broken(format!("move {} found at position {}", id, visited));
            }
            if mv.previous != expected_previous {
                return broken(format!("move {} links back to {:?}", id, mv.previous));
            }
            visited += 1;
            if visited > self.moves.len() {
                return broken("cycle in next links".to_string());
            }
            expected_previous = Some(id);
            cursor = mv.next;
        }
        if visited != self.moves.len() {
            return broken(format!("{} of {} moves reachable from the first", visited, self.moves.len()));
        }

        let backward = self.iter_rev().count();
        if backward != self.moves.len() {
            return broken(format!("{} of {} moves reachable from the tail", backward, self.moves.len()));
        }

        for mv in &self.moves {
            if mv.kind() != MoveKind::Play && mv.location().is_some() {
                return broken(format!("{} move {} carries a location", mv.kind(), mv.id));
            }
        }
        Ok(())
    }

    fn debug_check(&self) {
        debug_assert!(self.check_links().is_ok(), "move chain links inconsistent");
    }
}

/// Put the board back the way it was before `mv` placed its stone.
///
/// Every precondition is checked before anything is written, so a refusal
/// leaves the board as it was.
fn invert_placement<B: BoardState + ?Sized>(
    board: &mut B,
    coord: Coord,
    mv: &Move,
    captured: &CapturedSet,
) -> Result<(), MoveError> {
    let broken = |msg: String| {
        error!("Cannot invert move {}: {}", mv.id(), msg);
        MoveError::BrokenChainInvariant(msg)
    };

    if board.stone_at(coord) != Some(mv.color()) {
        return Err(broken(format!("no {} stone at {}", mv.color(), coord)));
    }
    if let Some(taken) = captured.coords().iter().find(|c| board.stone_at(**c).is_some()) {
        return Err(broken(format!("captured point {} is occupied", taken)));
    }

    board
        .remove_stone(coord)
        .map_err(|err| broken(format!("remove failed: {}", err)))?;
    board
        .restore_stones(captured)
        .map_err(|err| broken(format!("restore failed: {}", err)))?;
    Ok(())
}

/// Iterator over the chain following its links
pub struct Links<'a> {
    chain: &'a MoveChain,
    cursor: Option<MoveId>,
    remaining: usize,
    forward: bool,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let mv = self.chain.get(self.cursor?)?;
        self.remaining -= 1;
        self.cursor = if self.forward { mv.next() } else { mv.previous() };
        Some(mv)
    }
}
