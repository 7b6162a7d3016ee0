//! Navigation and command dispatch for Wegweiser.
//!
//! Turns raw input lines into typed operations, moves the player through a
//! [`wg_core::World`], and renders every result as player-facing text. The
//! terminal itself is left to the caller: feed lines into
//! [`GameSession::dispatch`] and print what comes back.

/// Session configuration.
pub mod config;
/// Error types for play.
pub mod error;
/// Player-facing text.
pub mod narrator;
/// Command registry and input tokenizing.
pub mod parser;
/// The player's position and visit history.
pub mod player;
/// A running game session.
pub mod session;

pub use config::SessionConfig;
pub use error::{MoveError, PlayError, PlayResult};
pub use narrator::Narrator;
pub use parser::{CommandRegistry, CommandSpec, Operation, Resolution};
pub use player::Navigator;
pub use session::{DispatchOutcome, GameSession};
