use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions {width}x{height} must both be positive")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Too many mines ({mines}) for board size {width}x{height}")]
    TooManyMines { width: u32, height: u32, mines: u32 },
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("No cell at {0:?}")]
    CellNotFound(Position),
    #[error("More than one cell at {0:?}")]
    DuplicateCell(Position),
    #[error("Snapshot has {found} cells, expected {expected}")]
    IncompleteSnapshot { expected: usize, found: usize },
    #[error("Cannot read cell ({x}, {y}) from classes {classes:?}")]
    UnrecognizedCell { x: i32, y: i32, classes: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
