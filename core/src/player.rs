// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game participants

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant in a game. Moves hold shared references to their player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    /// Create a player with the given display name and stone color
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stone color this player plays with
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
