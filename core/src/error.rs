use crate::types::Pos;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt board encoding at row {row}, col {col}: {reason}")]
    CorruptBoard {
        row: usize,
        col: usize,
        reason: String,
    },

    #[error("coordinate out of range: row {row}, col {col}")]
    OutOfBounds { row: usize, col: usize },

    #[error("step off the grid from row {row}, col {col}")]
    StepOffGrid { row: usize, col: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GameError {
    pub fn corrupt(at: Pos, reason: impl Into<String>) -> Self {
        Self::CorruptBoard {
            row: at.row,
            col: at.col,
            reason: reason.into(),
        }
    }
}

pub type GameResult<T> = Result<T, GameError>;
