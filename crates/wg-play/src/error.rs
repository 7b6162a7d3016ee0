//! Error types for play.

use thiserror::Error;
use wg_core::{Direction, LocationId};

/// Result type for session operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Why a move or backtrack did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The current location has no exit that way.
    #[error("no exit {0} from here")]
    NoExit(Direction),

    /// There is nowhere to go back to.
    #[error("no previous location")]
    NoHistory,

    /// The navigator was used before being placed in the world.
    #[error("navigator has not been placed in the world")]
    Uninitialized,

    /// The navigator points at a location the world does not have.
    #[error("location {0} does not belong to this world")]
    UnknownLocation(LocationId),
}

impl MoveError {
    /// Whether the player simply asked for something impossible.
    ///
    /// Anything else is a setup bug and ends the session.
    pub fn is_recoverable(self) -> bool {
        matches!(self, Self::NoExit(_) | Self::NoHistory)
    }
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum PlayError {
    /// `initialize` was called on a navigator that is already placed.
    #[error("navigator is already placed at {0}")]
    AlreadyInitialized(LocationId),

    /// A move failed for a reason the player cannot fix.
    #[error("{0}")]
    Move(#[from] MoveError),
}
