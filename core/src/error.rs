use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Tile values must be positive")]
    InvalidValue,
    #[error("No empty cell left on the board")]
    BoardFull,
}

pub type Result<T> = core::result::Result<T, GameError>;
