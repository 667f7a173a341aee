// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and the stone-placement contract used by move history

use crate::{rules::RuleValidator, Color, Coord, PlacementError};
use serde::{Deserialize, Serialize};

/// Stones cleared from the board by a single placement.
///
/// Kept on the move that caused the capture so that undo can put exactly
/// these stones back without recomputing anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapturedSet {
    /// Color of the captured stones
    color: Color,
    /// Captured intersections, sorted
    coords: Vec<Coord>,
}

impl CapturedSet {
    /// Build a captured set; coordinates are sorted and deduplicated
    pub fn new(color: Color, mut coords: Vec<Coord>) -> Self {
        coords.sort();
        coords.dedup();
        Self { color, coords }
    }

    /// A placement that captured nothing
    pub fn none(color: Color) -> Self {
        Self {
            color,
            coords: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.binary_search(&coord).is_ok()
    }

    /// Iterate over `(location, color)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.coords.iter().map(move |c| (*c, self.color))
    }
}

/// Stone occupancy operations the move chain relies on.
///
/// `place_stone` is invoked exactly once per play move when its location is
/// assigned; `remove_stone` and `restore_stones` are invoked exactly once each
/// when that move is undone, with the captured set `place_stone` returned.
pub trait BoardState {
    /// Color of the stone at `coord`, if any
    fn stone_at(&self, coord: Coord) -> Option<Color>;

    /// Place a stone, resolve captures and report what was captured
    fn place_stone(&mut self, coord: Coord, color: Color) -> Result<CapturedSet, PlacementError>;

    /// Remove the stone at `coord`, returning its color
    fn remove_stone(&mut self, coord: Coord) -> Result<Color, PlacementError>;

    /// Put previously captured stones back. Fails without changing anything
    /// if any of the intersections is occupied.
    fn restore_stones(&mut self, captured: &CapturedSet) -> Result<(), PlacementError>;
}

/// Represents the Go board with stones and empty positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Size of the board (typically 9, 13, or 19)
    size: u8,
    /// Positions on the board
    positions: Vec<Option<Color>>,
}

impl Board {
    /// Create a new empty board with the specified size
    pub fn new(size: u8) -> Self {
        let cells = (size as usize) * (size as usize);
        Self {
            size,
            positions: vec![None; cells],
        }
    }

    /// Create a board with a fixed setup position.
    ///
    /// Setup stones are not moves: no rules are applied and nothing is
    /// captured. Coordinates outside the board are ignored.
    pub fn with_stones(size: u8, stones: &[(Coord, Color)]) -> Self {
        let mut board = Self::new(size);
        for &(coord, color) in stones {
            if coord.is_valid(size) {
                board.put(coord, color);
            }
        }
        board
    }

    /// Get the stone at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if !coord.is_valid(self.size) {
            return None;
        }

        let idx = self.coord_to_index(coord);
        self.positions[idx]
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// True when no stone is on the board
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(Option::is_none)
    }

    /// Count stones of the specified color
    pub fn stone_count(&self, color: Color) -> usize {
        self.positions.iter().filter(|stone| **stone == Some(color)).count()
    }

    /// Get adjacent coordinates (up, down, left, right)
    pub fn adjacent_coords(&self, coord: Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(4);
        let x = coord.x;
        let y = coord.y;

        // Up
        if y > 0 {
            result.push(Coord::new(x, y - 1));
        }

        // Down
        if y + 1 < self.size {
            result.push(Coord::new(x, y + 1));
        }

        // Left
        if x > 0 {
            result.push(Coord::new(x - 1, y));
        }

        // Right
        if x + 1 < self.size {
            result.push(Coord::new(x + 1, y));
        }

        result
    }

    /// Calculate a hash of the current board position
    pub fn position_hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.positions.hash(&mut hasher);
        hasher.finish()
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> usize {
        (coord.y as usize) * (self.size as usize) + (coord.x as usize)
    }

    /// Unchecked write used by rules evaluation and setup; callers validate `coord`
    pub(crate) fn put(&mut self, coord: Coord, color: Color) {
        let idx = self.coord_to_index(coord);
        self.positions[idx] = Some(color);
    }

    fn clear(&mut self, coord: Coord) {
        let idx = self.coord_to_index(coord);
        self.positions[idx] = None;
    }
}

impl BoardState for Board {
    fn stone_at(&self, coord: Coord) -> Option<Color> {
        self.get(coord)
    }

    fn place_stone(&mut self, coord: Coord, color: Color) -> Result<CapturedSet, PlacementError> {
        RuleValidator::new(self).check_move(coord, color)?;

        self.put(coord, color);
        let captured = RuleValidator::new(self).find_captures(coord);
        for &c in &captured {
            self.clear(c);
        }

        if !captured.is_empty() {
            tracing::debug!("{} at {} captured {} stone(s)", color, coord, captured.len());
        }
        Ok(CapturedSet::new(color.opposite(), captured))
    }

    fn remove_stone(&mut self, coord: Coord) -> Result<Color, PlacementError> {
        if !coord.is_valid(self.size) {
            return Err(PlacementError::OutOfBounds(coord));
        }
        match self.get(coord) {
            Some(color) => {
                self.clear(coord);
                Ok(color)
            }
            None => Err(PlacementError::Empty(coord)),
        }
    }

    fn restore_stones(&mut self, captured: &CapturedSet) -> Result<(), PlacementError> {
        for &coord in captured.coords() {
            if !coord.is_valid(self.size) {
                return Err(PlacementError::OutOfBounds(coord));
            }
            if self.get(coord).is_some() {
                return Err(PlacementError::Occupied(coord));
            }
        }
        for (coord, color) in captured.iter() {
            self.put(coord, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_without_capture() {
        let mut board = Board::new(9);
        let captured = board.place_stone(Coord::new(4, 4), Color::Black).unwrap();
        assert!(captured.is_empty());
        assert_eq!(captured.color(), Color::White);
        assert_eq!(board.get(Coord::new(4, 4)), Some(Color::Black));
        assert_eq!(board.stone_count(Color::Black), 1);
    }

    #[test]
    fn test_place_rejects_occupied_and_off_board() {
        let mut board = Board::with_stones(9, &[(Coord::new(2, 2), Color::White)]);
        let before = board.clone();

        assert_eq!(
            board.place_stone(Coord::new(2, 2), Color::Black),
            Err(PlacementError::Occupied(Coord::new(2, 2)))
        );
        assert_eq!(
            board.place_stone(Coord::new(9, 0), Color::Black),
            Err(PlacementError::OutOfBounds(Coord::new(9, 0)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_restore_is_all_or_nothing() {
        let mut board = Board::with_stones(9, &[(Coord::new(1, 1), Color::Black)]);
        let before = board.clone();
        let captured = CapturedSet::new(Color::White, vec![Coord::new(0, 0), Coord::new(1, 1)]);

        assert_eq!(
            board.restore_stones(&captured),
            Err(PlacementError::Occupied(Coord::new(1, 1)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_remove_empty_intersection() {
        let mut board = Board::new(9);
        assert_eq!(
            board.remove_stone(Coord::new(3, 3)),
            Err(PlacementError::Empty(Coord::new(3, 3)))
        );
    }

    #[test]
    fn test_captured_set_is_sorted() {
        let set = CapturedSet::new(
            Color::White,
            vec![Coord::new(3, 1), Coord::new(0, 2), Coord::new(3, 1)],
        );
        assert_eq!(set.coords(), &[Coord::new(0, 2), Coord::new(3, 1)]);
        assert!(set.contains(Coord::new(3, 1)));
        assert!(!set.contains(Coord::new(1, 1)));
    }
}
