// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single ply of a game and its one-shot placement state

use crate::{board::CapturedSet, chain::MoveId, Color, Coord, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The closed set of move kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A stone is placed on the board
    Play,
    /// The player passes the turn
    Pass,
    /// The player resigns the game
    Resign,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Play => write!(f, "play"),
            MoveKind::Pass => write!(f, "pass"),
            MoveKind::Resign => write!(f, "resign"),
        }
    }
}

/// Where a move put its stone.
///
/// A move starts `Unlocated`. A play move moves to `Located` once, when its
/// location is assigned and the board accepted the stone; it never goes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Unlocated,
    Located {
        /// The intersection played
        coord: Coord,
        /// Stones removed from the board by this placement
        captured: CapturedSet,
    },
}

/// One ply in a game.
///
/// `kind` and `player` are fixed at construction. The only other state that
/// changes over a move's life is its placement (once) and its chain links.
#[derive(Debug, Clone)]
pub struct Move {
    pub(crate) id: MoveId,
    kind: MoveKind,
    player: Arc<Player>,
    pub(crate) placement: Placement,
    pub(crate) previous: Option<MoveId>,
    pub(crate) next: Option<MoveId>,
}

impl Move {
    pub(crate) fn new(id: MoveId, kind: MoveKind, player: Arc<Player>, previous: Option<MoveId>) -> Self {
        Self {
            id,
            kind,
            player,
            placement: Placement::Unlocated,
            previous,
            next: None,
        }
    }

    /// Handle of this move within its chain
    pub fn id(&self) -> MoveId {
        self.id
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    /// Color of the stone this move plays (or would have played)
    pub fn color(&self) -> Color {
        self.player.color()
    }

    /// 1-based ply number within the game
    pub fn number(&self) -> usize {
        self.id.index() + 1
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// The location played, if this is a located play move
    pub fn location(&self) -> Option<Coord> {
        match &self.placement {
            Placement::Located { coord, .. } => Some(*coord),
            Placement::Unlocated => None,
        }
    }

    /// Stones this move captured, if it is a located play move
    pub fn captured(&self) -> Option<&CapturedSet> {
        match &self.placement {
            Placement::Located { captured, .. } => Some(captured),
            Placement::Unlocated => None,
        }
    }

    /// The move before this one, or `None` for the first move
    pub fn previous(&self) -> Option<MoveId> {
        self.previous
    }

    /// The move after this one, or `None` for the tail
    pub fn next(&self) -> Option<MoveId> {
        self.next
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.location()) {
            (MoveKind::Play, Some(coord)) => {
                write!(f, "{}. {} plays {}", self.number(), self.player.color(), coord)
            }
            (kind, _) => write!(f, "{}. {} {}", self.number(), self.player.color(), kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black() -> Arc<Player> {
        Arc::new(Player::new("Black", Color::Black))
    }

    #[test]
    fn test_new_move_is_unlocated() {
        let mv = Move::new(MoveId::new(0, 0, 1), MoveKind::Play, black(), None);
        assert_eq!(mv.placement(), &Placement::Unlocated);
        assert_eq!(mv.location(), None);
        assert!(mv.captured().is_none());
        assert_eq!(mv.number(), 1);
        assert_eq!(mv.to_string(), "1. Black play");
    }

    #[test]
    fn test_display_located_move() {
        let mut mv = Move::new(MoveId::new(0, 2, 3), MoveKind::Play, black(), Some(MoveId::new(0, 1, 2)));
        mv.placement = Placement::Located {
            coord: Coord::new(3, 3),
            captured: CapturedSet::none(Color::White),
        };
        assert_eq!(mv.to_string(), "3. Black plays (3,3)");
        assert_eq!(mv.location(), Some(Coord::new(3, 3)));
    }
}
