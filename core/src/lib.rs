#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use player::*;
pub use reveal::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod clock;
mod engine;
mod error;
mod generator;
mod player;
mod reveal;
mod tile;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    SinglePlayer,
    MultiPlayer,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::MultiPlayer, Mode::SinglePlayer];

    pub const fn label(self) -> &'static str {
        match self {
            Self::SinglePlayer => "Single player",
            Self::MultiPlayer => "Multi player",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SinglePlayer => "single-player",
            Self::MultiPlayer => "multi-player",
        }
    }

    pub const fn is_multi_player(self) -> bool {
        matches!(self, Self::MultiPlayer)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::SinglePlayer
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        // `single` and `multi` are accepted as short forms
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s || mode.name().strip_suffix("-player") == Some(s))
            .ok_or(ParseModeError)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected `single-player` or `multi-player`")]
pub struct ParseModeError;

/// Preset board sizes offered to players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Easy, Level::Medium, Level::Hard, Level::Expert];

    pub const fn size(self) -> Coord {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
            Self::Expert => 30,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    pub fn from_size(size: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.size() == size)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Medium
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s))
            .ok_or(ParseLevelError)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected one of `easy`, `medium`, `hard` or `expert`")]
pub struct ParseLevelError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub level: Coord,
    pub mode: Mode,
}

impl GameConfig {
    pub const fn new_unchecked(level: Coord, mode: Mode) -> Self {
        Self { level, mode }
    }

    pub fn new(level: Coord, mode: Mode) -> Result<Self> {
        if level == 0 {
            return Err(GameError::InvalidLevel);
        }
        Ok(Self::new_unchecked(level, mode))
    }

    pub const fn preset(level: Level, mode: Mode) -> Self {
        Self::new_unchecked(level.size(), mode)
    }

    pub fn validate(self) -> Result<Self> {
        Self::new(self.level, self.mode)
    }

    pub const fn size(&self) -> Coord2 {
        (self.level, self.level)
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.level)
    }

    /// One mine per ten cells, rounded down.
    pub const fn mine_count(&self) -> CellCount {
        self.total_cells() / 10
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::preset(Level::default(), Mode::default())
    }
}

/// Where the mines are, both as a mask for lookups and as the list in placement order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mines: Vec<Coord2>,
}

impl MineLayout {
    pub fn from_mine_coords(level: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if level == 0 {
            return Err(GameError::InvalidLevel);
        }
        if mine_coords.len() >= usize::from(square(level)) {
            return Err(GameError::TooManyMines);
        }

        let mut mine_mask: Array2<bool> = Array2::default((level, level).to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= level || coords.1 >= level {
                return Err(GameError::InvalidCoords);
            }
            let slot = &mut mine_mask[coords.to_nd_index()];
            if *slot {
                return Err(GameError::DuplicateMine);
            }
            *slot = true;
        }

        Ok(Self::from_parts(mine_mask, mine_coords.to_vec()))
    }

    /// Caller guarantees `mines` lists exactly the set cells of `mine_mask`.
    pub(crate) fn from_parts(mine_mask: Array2<bool>, mines: Vec<Coord2>) -> Self {
        debug_assert_eq!(
            mine_mask.iter().filter(|&&is_mine| is_mine).count(),
            mines.len()
        );
        Self { mine_mask, mines }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let level = self.level();
        if coords.0 < level && coords.1 < level {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn level(&self) -> Coord {
        // built from a `Coord` level
        self.mine_mask.nrows() as Coord
    }

    pub fn size(&self) -> Coord2 {
        let level = self.level();
        (level, level)
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.level())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn mine_count(&self) -> CellCount {
        // never more than `square(level)` entries
        self.mines.len() as CellCount
    }

    /// Mine coordinates in placement order.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbours
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn content_at(&self, coords: Coord2) -> CellContent {
        if self[coords] {
            CellContent::Mine
        } else {
            CellContent::Count(self.adjacent_mine_count(coords))
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// A safe cell was opened, `count` cells in total including the flood fill.
    Revealed { count: CellCount },
    /// Single-player only: the game is lost.
    HitMine,
    /// Multi-player only: the player found a mine and scores it.
    ClaimedMine(Player),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
