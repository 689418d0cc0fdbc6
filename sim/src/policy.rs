use hotsweep_core::{CellState, Coord2, Game, Mode};
use rand::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Reveal(Coord2),
    Flag(Coord2),
}

/// Picks moves using only what a player can see on the board.
#[derive(Clone, Debug)]
pub struct Policy {
    rng: SmallRng,
    deduce: bool,
}

impl Policy {
    pub fn new(seed: u64, deduce: bool) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            deduce,
        }
    }

    pub fn next_move(&mut self, game: &Game) -> Option<Move> {
        if self.deduce && game.mode() == Mode::SinglePlayer {
            if let Some(next) = deduce(game) {
                return Some(next);
            }
        }

        let hidden = game.hidden_cells();
        if hidden.is_empty() {
            return None;
        }
        let guess = hidden[self.rng.random_range(0..hidden.len())];
        log::trace!("guessing {:?} out of {} hidden cells", guess, hidden.len());
        Some(Move::Reveal(guess))
    }
}

/// Looks for a revealed number whose neighbours are fully determined: all its mines already flagged, so the rest
/// is safe, or exactly as many covered neighbours as its count, so they are all mines.
fn deduce(game: &Game) -> Option<Move> {
    let board = game.board();

    for (coords, cell) in board.iter() {
        if !cell.state.is_revealed() {
            continue;
        }
        let Some(count) = cell.content.count().filter(|&count| count > 0) else {
            continue;
        };

        let mut hidden = None;
        let mut hidden_count: u8 = 0;
        let mut flagged_count: u8 = 0;
        for pos in board.iter_neighbors(coords) {
            match board[pos].state {
                CellState::Hidden => {
                    hidden.get_or_insert(pos);
                    hidden_count += 1;
                }
                CellState::Flagged => flagged_count += 1,
                CellState::Revealed => {}
            }
        }

        let Some(target) = hidden else {
            continue;
        };
        if flagged_count == count {
            return Some(Move::Reveal(target));
        }
        if flagged_count + hidden_count == count {
            return Some(Move::Flag(target));
        }
    }

    None
}
