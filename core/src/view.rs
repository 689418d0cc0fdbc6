use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Empty,
    Number(u8),
    Flag,
    /// A single-player mine shown at the end, `exploded` for the one that ended the game.
    Mine { exploded: bool },
    /// A mine correctly flagged before the game ended.
    FlaggedMine,
    /// A multi-player mine and the player who found it.
    ClaimedMine(Player),
}

/// Background of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backdrop {
    Closed,
    Open,
    Exploded,
}

fn count_view(count: u8) -> TileView {
    match count {
        0 => TileView::Empty,
        count => TileView::Number(count),
    }
}

impl Game {
    /// Maps a cell to its view. Once the game is over every cell is uncovered.
    pub fn view_at(&self, coords: Coord2) -> Result<TileView> {
        let cell = self.cell_at(coords)?;
        let multi_player = self.mode().is_multi_player();

        if !self.is_finished() {
            return Ok(match (cell.state, cell.content) {
                (CellState::Hidden, _) => TileView::Hidden,
                (CellState::Flagged, _) => TileView::Flag,
                (CellState::Revealed, CellContent::Count(count)) => count_view(count),
                (CellState::Revealed, CellContent::Mine) if multi_player => {
                    TileView::ClaimedMine(cell.owner.unwrap_or_default())
                }
                (CellState::Revealed, CellContent::Mine) => TileView::Mine { exploded: false },
            });
        }

        Ok(match cell.content {
            CellContent::Mine if cell.state == CellState::Flagged => TileView::FlaggedMine,
            CellContent::Mine if multi_player => {
                TileView::ClaimedMine(cell.owner.unwrap_or_default())
            }
            CellContent::Mine => TileView::Mine {
                exploded: self.last_revealed() == Some(coords),
            },
            CellContent::Count(count) => count_view(count),
        })
    }

    pub fn backdrop_at(&self, coords: Coord2) -> Result<Backdrop> {
        let cell = self.cell_at(coords)?;
        let revealed = cell.state.is_revealed();

        Ok(if !revealed && !self.is_finished() {
            Backdrop::Closed
        } else if cell.is_mine()
            && !self.mode().is_multi_player()
            && self.last_revealed() == Some(coords)
        {
            Backdrop::Exploded
        } else if revealed || cell.content.is_zero() {
            Backdrop::Open
        } else {
            Backdrop::Closed
        })
    }
}
