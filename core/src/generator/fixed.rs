use alloc::vec::Vec;

use super::*;

/// Generation strategy that always places the same, known mines. Used to replay or reproduce boards.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mines: Vec<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let config = config.validate()?;
        if self.mines.len() != usize::from(config.mine_count()) {
            log::warn!(
                "Fixed layout has {} mines, a level {} board usually has {}",
                self.mines.len(),
                config.level,
                config.mine_count()
            );
        }
        MineLayout::from_mine_coords(config.level, &self.mines)
    }
}
