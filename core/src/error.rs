use thiserror::Error;

use crate::{CellCount, CellIndex, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions {width}x{height} are out of bounds")]
    InvalidDimensions { width: Coord, height: Coord },
    #[error("Board needs at least one mine")]
    TooFewMines,
    #[error("Too many mines: {mines} (max: {max})")]
    TooManyMines { mines: CellCount, max: CellCount },
    #[error("Invalid cell index {0}")]
    InvalidIndex(CellIndex),
    #[error("Cannot toggle flag on an explored cell")]
    CellExplored,
    #[error("Cell already holds a mine")]
    CellMined,
    #[error("Not enough free cells to place {0} mines")]
    NoRoomForMines(CellCount),
}

pub type Result<T> = core::result::Result<T, GameError>;
