use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> Playing
/// - Playing -> Won
/// - Playing -> Lost
/// - Idle -> Won, only for a multi-player board without mines
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Represents a game from start to finish. A new game replaces the old one, nothing resets it in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    layout: MineLayout,
    board: Board,
    status: GameStatus,
    flags_count: CellCount,
    last_revealed: Option<Coord2>,
    current_player: Player,
    tallies: Tallies,
}

/// Creates a fresh game of the given size and mode with mines drawn from `rng`.
pub fn create_game<R: rand::Rng + ?Sized>(level: Coord, mode: Mode, rng: &mut R) -> Result<Game> {
    let config = GameConfig::new(level, mode)?;
    let layout = RandomBoardGenerator::generate_with_rng(config, rng)?;
    Game::new(config, layout)
}

impl Game {
    pub fn new(config: GameConfig, layout: MineLayout) -> Result<Self> {
        if config.level != layout.level() {
            return Err(GameError::LevelMismatch);
        }
        let board = Board::from_layout(&layout);
        log::debug!(
            "New {} game on a {}x{} board with {} mines",
            config.mode,
            config.level,
            config.level,
            layout.mine_count()
        );
        Ok(Self {
            config,
            layout,
            board,
            status: Default::default(),
            flags_count: 0,
            last_revealed: None,
            current_player: Default::default(),
            tallies: Default::default(),
        })
    }

    pub fn generate(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        let layout = generator.generate(config)?;
        Self::new(config, layout)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn level(&self) -> Coord {
        self.config.level
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.layout.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    /// Mine coordinates in placement order.
    pub fn mines(&self) -> &[Coord2] {
        self.layout.mines()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn flags_count(&self) -> CellCount {
        self.flags_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.layout.mine_count() as isize) - (self.flags_count as isize)
    }

    /// Last cell a player tried to reveal; after a single-player loss this is the mine that went off.
    pub fn last_revealed(&self) -> Option<Coord2> {
        self.last_revealed
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    pub fn hidden_cells(&self) -> Vec<Coord2> {
        self.board
            .iter()
            .filter(|(_, cell)| cell.state.is_hidden())
            .map(|(coords, _)| coords)
            .collect()
    }

    /// Opens a hidden cell. Opening a safe cell floods through its zero region; opening a mine loses a
    /// single-player game or scores the mine for the current player in a multi-player one.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.board[coords].state.is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        self.mark_started();
        self.last_revealed = Some(coords);

        if self.board[coords].is_mine() {
            return Ok(match self.config.mode {
                Mode::SinglePlayer => {
                    log::debug!("Mine hit at {:?}", coords);
                    self.status = GameStatus::Lost;
                    RevealOutcome::HitMine
                }
                Mode::MultiPlayer => {
                    let player = self.current_player;
                    let cell = &mut self.board[coords];
                    cell.state = CellState::Revealed;
                    cell.owner = Some(player);
                    self.tallies[player] += 1;
                    self.current_player = player.opponent();
                    log::debug!("{:?} found the mine at {:?}", player, coords);
                    RevealOutcome::ClaimedMine(player)
                }
            });
        }

        let mut opened = Vec::new();
        flood_reveal(&self.board, coords, |pos| opened.push(pos));
        for &pos in &opened {
            self.board[pos].state = CellState::Revealed;
        }
        log::debug!("Revealed {} cells from {:?}", opened.len(), coords);

        if self.config.mode.is_multi_player() {
            self.current_player = self.current_player.opponent();
        }

        Ok(RevealOutcome::Revealed {
            // bounded by the number of cells
            count: opened.len() as CellCount,
        })
    }

    /// Toggles a flag on a hidden cell. Only single-player games use flags.
    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.config.mode.is_multi_player() {
            return Ok(MarkOutcome::NoChange);
        }

        self.mark_started();

        let cell = &mut self.board[coords];
        Ok(match cell.state {
            CellState::Hidden => {
                cell.state = CellState::Flagged;
                self.flags_count += 1;
                MarkOutcome::Flagged
            }
            CellState::Flagged => {
                cell.state = CellState::Hidden;
                self.flags_count -= 1;
                MarkOutcome::Unflagged
            }
            CellState::Revealed => MarkOutcome::NoChange,
        })
    }

    /// Whether the board is cleared: every safe cell open in single-player, every mine found in multi-player.
    ///
    /// Does not change the status, see [`Game::settle`].
    pub fn has_won(&self) -> bool {
        match self.config.mode {
            Mode::SinglePlayer => self
                .board
                .iter()
                .all(|(_, cell)| cell.is_mine() || cell.state.is_revealed()),
            Mode::MultiPlayer => self
                .layout
                .mines()
                .iter()
                .all(|&coords| self.board[coords].state.is_revealed()),
        }
    }

    /// Runs the win check after a move, ending the game when [`Game::has_won`] holds.
    pub fn settle(&mut self) -> GameStatus {
        if !self.status.is_finished() && self.has_won() {
            log::debug!("Game won, tallies: {:?}", self.tallies);
            self.status = GameStatus::Won;
        }
        self.status
    }

    fn mark_started(&mut self) {
        if self.status.is_idle() {
            log::debug!("Game started");
            self.status = GameStatus::Playing;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
