//! Named board positions for human-facing input.

use super::action::Move;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A named cell on the board.
///
/// Positions are how a person names a square: by keypad number (1-9,
/// matching the numbers shown on an empty cell when a board is displayed)
/// or by label. Each position converts to exactly one [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (keypad 1)
    TopLeft,
    /// Top-center (keypad 2)
    TopCenter,
    /// Top-right (keypad 3)
    TopRight,
    /// Middle-left (keypad 4)
    MiddleLeft,
    /// Center (keypad 5)
    Center,
    /// Middle-right (keypad 6)
    MiddleRight,
    /// Bottom-left (keypad 7)
    BottomLeft,
    /// Bottom-center (keypad 8)
    BottomCenter,
    /// Bottom-right (keypad 9)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parse from a keypad number (1-9) or a label.
    ///
    /// Labels match case-insensitively and ignore spaces, dashes and
    /// underscores, so `"top left"`, `"TopLeft"` and `"top-left"` agree.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let trimmed = s.trim();
        if let Ok(num) = trimmed.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(trimmed);
        if wanted.is_empty() {
            return None;
        }
        Position::iter().find(|pos| normalize(pos.label()) == wanted)
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }

    /// Converts position to the move that marks it.
    pub fn to_move(self) -> Move {
        let idx = self.to_index();
        Move::new(idx / 3, idx % 3)
    }

    /// Names the cell a move targets, if it is on the board.
    pub fn from_move(mv: Move) -> Option<Self> {
        mv.index().and_then(Self::from_index)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        pos.to_move()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
