use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells, with every cell's content precomputed from a [`MineLayout`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn from_layout(layout: &MineLayout) -> Self {
        let cells = Array2::from_shape_fn(layout.size().to_nd_index(), |(row, col)| {
            // indices come from the layout's own shape
            Cell::new(layout.content_at((row as Coord, col as Coord)))
        });
        Self { cells }
    }

    pub fn level(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn size(&self) -> Coord2 {
        let level = self.level();
        (level, level)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let level = self.level();
        coords.0 < level && coords.1 < level
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn count_state(&self, state: CellState) -> CellCount {
        self.cells.iter().filter(|cell| cell.state == state).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
