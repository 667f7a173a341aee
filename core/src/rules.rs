// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placement rules: groups, liberties, captures and suicide

use crate::{board::Board, Color, Coord, PlacementError};
use std::collections::HashSet;

/// Validates stone placements against a board
pub struct RuleValidator<'a> {
    /// The board being checked
    board: &'a Board,
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Check whether `color` may place a stone at `coord`.
    ///
    /// Ko is not considered; a placement is legal when it is on the board,
    /// on an empty intersection, and either leaves its own group a liberty or
    /// captures at least one opposing group.
    pub fn check_move(&self, coord: Coord, color: Color) -> Result<(), PlacementError> {
        if !coord.is_valid(self.board.size()) {
            return Err(PlacementError::OutOfBounds(coord));
        }

        if self.board.get(coord).is_some() {
            return Err(PlacementError::Occupied(coord));
        }

        // Create a temporary board with the move applied
        let mut temp_board = self.board.clone();
        temp_board.put(coord, color);

        let group_coords = find_group(&temp_board, coord);
        if liberties(&temp_board, &group_coords) == 0 {
            let captures = RuleValidator::new(&temp_board).find_captures(coord);
            if captures.is_empty() {
                tracing::debug!("Suicide rejected at {} for {}", coord, color);
                return Err(PlacementError::Suicide(coord));
            }
        }

        Ok(())
    }

    /// Find opposing stones left without liberties by the stone at `last_move`.
    ///
    /// Returns an empty list when `last_move` is empty. The result is sorted
    /// and free of duplicates.
    pub fn find_captures(&self, last_move: Coord) -> Vec<Coord> {
        let color = match self.board.get(last_move) {
            Some(color) => color,
            None => return Vec::new(),
        };
        let opponent = color.opposite();

        let mut captures = Vec::new();
        let mut seen = HashSet::new();

        // Check all adjacent groups for captures
        for neighbor in self.board.adjacent_coords(last_move) {
            if self.board.get(neighbor) != Some(opponent) || seen.contains(&neighbor) {
                continue;
            }
            let group = find_group(self.board, neighbor);
            seen.extend(group.iter().copied());
            if liberties(self.board, &group) == 0 {
                captures.extend(group);
            }
        }

        captures.sort();
        captures
    }
}

/// Calculate the number of liberties for a group of stones
pub fn liberties(board: &Board, group: &[Coord]) -> usize {
    let mut liberties_set = HashSet::new();

    for &coord in group {
        for neighbor in board.adjacent_coords(coord) {
            if board.get(neighbor).is_none() {
                liberties_set.insert(neighbor);
            }
        }
    }

    liberties_set.len()
}

/// Find all stones in a group connected to the stone at coord
pub fn find_group(board: &Board, coord: Coord) -> Vec<Coord> {
    let target_color = match board.get(coord) {
        Some(color) => color,
        None => return Vec::new(),
    };

    let mut group = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = vec![coord];

    while let Some(current) = queue.pop() {
        if !visited.insert(current) {
            continue;
        }
        group.push(current);

        for neighbor in board.adjacent_coords(current) {
            if board.get(neighbor) == Some(target_color) && !visited.contains(&neighbor) {
                queue.push(neighbor);
            }
        }
    }

    group
}
