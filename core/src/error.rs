use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Level must be at least 1")]
    InvalidLevel,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mine placed twice on the same cell")]
    DuplicateMine,
    #[error("Mine layout does not match the board level")]
    LevelMismatch,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
