use ndarray::Array2;

/// Single coordinate axis, used for the board level and for rows/columns.
pub type Coord = u8;

/// Count type used for mine counts, flag counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Square of a level, saturating at `CellCount::MAX`.
pub const fn square(level: Coord) -> CellCount {
    let level = level as CellCount;
    level.saturating_mul(level)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // grids are built from a `Coord` level, so both dimensions fit
        let bounds = (rows as Coord, cols as Coord);
        NeighborIter::new(center, bounds)
    }
}

/// Orthogonal offsets first, then diagonals.
const SURROUNDINGS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Applies `offset` to `coords`, returning a value only when it remains in bounds.
fn apply_offset(coords: Coord2, offset: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = offset;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up-to-eight in-bounds neighbours of a cell.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = SURROUNDINGS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_offset(self.center, offset, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (10, 10)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn inner_cell_has_eight_neighbors() {
        let count = NeighborIter::new((4, 4), (10, 10)).count();
        assert_eq!(count, 8);
    }

    #[test]
    fn edge_cell_stays_in_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((9, 5), (10, 10)).collect();
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|&(row, col)| row < 10 && col < 10));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn square_saturates() {
        assert_eq!(square(10), 100);
        assert_eq!(square(255), 65025);
    }
}
