use thiserror::Error;

use crate::{CellCount, Coord2};

/// Broad category of a [`BoardError`], for callers that only care whether the
/// request itself was malformed or merely outside the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board size must be positive")]
    InvalidSize,
    #[error("Too many mines, requested {requested} but only {available} cells are free")]
    TooManyMines {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
    #[error("Mines cannot be placed once cells are revealed")]
    MinesFrozen,
    #[error("Board snapshot does not match its declared size")]
    InvalidBoardShape,
}

impl BoardError {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidSize | Self::MinesFrozen | Self::InvalidBoardShape => {
                ErrorKind::InvalidArgument
            }
            Self::TooManyMines { .. } | Self::InvalidCoords(_) => ErrorKind::OutOfRange,
        }
    }
}

pub type Result<T> = core::result::Result<T, BoardError>;
