use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Reports every cell a reveal of `start` opens: `start` itself, and when its count is zero the whole connected
/// zero region plus its non-zero border. Mines and flagged cells are never reported, and each cell is reported once.
///
/// The board is only read; applying the reveal is up to `on_reveal`. Traversal uses an explicit stack, so board
/// size does not bound recursion depth.
pub fn flood_reveal<F>(board: &Board, start: Coord2, mut on_reveal: F)
where
    F: FnMut(Coord2),
{
    debug_assert!(board.contains(start), "flood fill started out of bounds");
    debug_assert!(!board[start].is_mine(), "flood fill started on a mine");
    debug_assert!(board[start].state.is_hidden(), "flood fill started on an open cell");

    on_reveal(start);
    if !board[start].content.is_zero() {
        return;
    }

    let mut visited: Array2<bool> = Array2::default(board.size().to_nd_index());
    visited[start.to_nd_index()] = true;
    let mut to_visit = vec![start];

    while let Some(coords) = to_visit.pop() {
        for pos in board.iter_neighbors(coords) {
            if visited[pos.to_nd_index()] || !board[pos].state.is_hidden() {
                continue;
            }

            match board[pos].content {
                CellContent::Mine => {}
                CellContent::Count(count) => {
                    visited[pos.to_nd_index()] = true;
                    on_reveal(pos);
                    if count == 0 {
                        log::trace!("Flood fill expanding through {:?}", pos);
                        to_visit.push(pos);
                    }
                }
            }
        }
    }
}

/// Collects what [`flood_reveal`] reports, in reveal order.
pub fn reveal_set(board: &Board, start: Coord2) -> Vec<Coord2> {
    let mut revealed = Vec::new();
    flood_reveal(board, start, |coords| revealed.push(coords));
    revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn board(level: Coord, mines: &[Coord2]) -> Board {
        Board::from_layout(&MineLayout::from_mine_coords(level, mines).unwrap())
    }

    fn revealed(board: &Board, start: Coord2) -> BTreeSet<Coord2> {
        let cells = reveal_set(board, start);
        let set: BTreeSet<_> = cells.iter().copied().collect();
        assert_eq!(set.len(), cells.len(), "a cell was reported twice");
        set
    }

    #[test]
    fn positive_start_reveals_only_itself() {
        let board = board(3, &[(0, 0)]);
        assert_eq!(reveal_set(&board, (1, 1)), [(1, 1)]);
    }

    #[test]
    fn zero_region_and_border_are_revealed() {
        // mine wall along row 2, everything above is reachable
        let board = board(5, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        let cells = revealed(&board, (0, 0));

        let expected: BTreeSet<_> = (0..2)
            .flat_map(|row| (0..5).map(move |col| (row, col)))
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn mines_are_never_revealed() {
        let board = board(6, &[(0, 5), (5, 0), (3, 3)]);
        let cells = revealed(&board, (0, 0));

        assert!(!cells.contains(&(0, 5)));
        assert!(!cells.contains(&(5, 0)));
        assert!(!cells.contains(&(3, 3)));
        // twelve zero cells in the top-left region plus nine border cells
        assert_eq!(cells.len(), 21);
        assert!(!cells.contains(&(5, 5)));
    }

    #[test]
    fn flagged_cells_are_skipped() {
        let mut board = board(4, &[]);
        board[(3, 3)].state = CellState::Flagged;
        let cells = revealed(&board, (0, 0));

        assert_eq!(cells.len(), 15);
        assert!(!cells.contains(&(3, 3)));
    }

    #[test]
    fn already_revealed_cells_are_not_reported_again() {
        let mut board = board(3, &[]);
        board[(2, 2)].state = CellState::Revealed;
        let cells = revealed(&board, (0, 0));

        assert_eq!(cells.len(), 8);
    }

    #[test]
    fn large_open_board_does_not_recurse() {
        let board = board(Coord::MAX, &[]);
        let mut count = 0usize;
        flood_reveal(&board, (0, 0), |_| count += 1);

        assert_eq!(count, 255 * 255);
    }
}
