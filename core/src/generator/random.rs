use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Generation strategy that places every mine uniformly at random, resampling a cell that is already mined.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Same placement as [`BoardGenerator::generate`], drawing from the given random source.
    ///
    /// Sampling stops once `config.mine_count()` distinct cells are mined, which always happens because a
    /// valid config never asks for as many mines as there are cells.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<MineLayout> {
        let config = config.validate()?;
        let level = config.level;
        let mine_count = usize::from(config.mine_count());
        if mine_count >= usize::from(config.total_cells()) {
            return Err(GameError::TooManyMines);
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut mines = Vec::with_capacity(mine_count);
        let mut draws: usize = 0;

        while mines.len() < mine_count {
            let coords = (rng.random_range(0..level), rng.random_range(0..level));
            draws += 1;

            let slot = &mut mine_mask[coords.to_nd_index()];
            if *slot {
                continue;
            }
            *slot = true;
            mines.push(coords);
        }

        log::debug!(
            "Placed {} mines on a {}x{} board after {} draws",
            mines.len(),
            level,
            level,
            draws
        );
        Ok(MineLayout::from_parts(mine_mask, mines))
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        Self::generate_with_rng(config, &mut rng)
    }
}
