use crate::prelude::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No face for move")]
    EmptyToken,
    #[error("Unrecognized face {0:?}")]
    UnknownFace(char),
    #[error("Unrecognized direction {modifier:?} in move {token:?}")]
    UnknownModifier { token: String, modifier: char },
    #[error("Trailing characters in move {0:?}")]
    TrailingCharacters(String),
    #[error("Unrecognized color {0:?}")]
    UnknownColor(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// A turn is already in progress. Requests are never queued.
    #[error("A turn is already in progress")]
    Busy,
    #[error("Facelet {axis} of {slot} is not on any face")]
    InteriorFacelet { slot: Slot, axis: Axis },
    #[error("No turn has been committed yet")]
    NothingToRepeat,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Speed must be a positive number, got {0}")]
    InvalidSpeed(f64),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Operation not allowed in {0:?} mode")]
    WrongMode(SessionMode),
    #[error("No slot {0}")]
    UnknownSlot(Slot),
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// The solver answered with a message instead of a solution.
    #[error("Solver: {0}")]
    Solver(String),
    #[error("Solver unavailable: {0}")]
    Transport(anyhow::Error),
}
