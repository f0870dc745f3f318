use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
    #[error("Cell {0:?} is outside the board shape")]
    OutsideShape(Coord2),
    #[error("Start cell {0:?} cannot hold a bomb")]
    StartCellMined(Coord2),
    #[error("Round already started, reset the board first")]
    AlreadyStarted,
}

pub type Result<T> = core::result::Result<T, GameError>;
