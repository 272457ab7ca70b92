use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
    #[error("Board must be at least one tile wide and tall")]
    EmptyBoard,
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines, at least one tile must stay safe")]
    TooManyMines,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
    #[error("Unknown start tile policy")]
    UnknownStartTile,
}

pub type Result<T> = core::result::Result<T, GameError>;
