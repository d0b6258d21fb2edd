use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Location outside the board")]
    OutOfBounds,
    #[error("Weight table is empty or sums to zero")]
    InvalidDistribution,
}

pub type Result<T> = core::result::Result<T, GameError>;
