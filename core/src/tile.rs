use serde::{Deserialize, Serialize};

use crate::Player;

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Flagged,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What lies under a cell: either a mine or the number of neighbouring mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    Count(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }

    /// Neighbouring mine count, `None` for a mine.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Count(0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    pub content: CellContent,
    /// Player who revealed this mine, only ever set in multi-player games.
    pub owner: Option<Player>,
}

impl Cell {
    pub const fn new(content: CellContent) -> Self {
        Self {
            state: CellState::Hidden,
            content,
            owner: None,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.content.is_mine()
    }
}
