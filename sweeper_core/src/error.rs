use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("Too many mines, requested {requested} but only {capacity} tiles fit")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Invalid coordinates {coords:?} for a {width}x{height} board")]
    InvalidCoords { coords: Coord2, width: Coord, height: Coord },
    #[error("Invalid game config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
