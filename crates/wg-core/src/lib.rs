//! Core types for Wegweiser: directions, locations, and the world graph.
//!
//! A [`World`] is assembled once through a [`WorldBuilder`] (or loaded from a
//! JSON [`WorldPack`]) and is read-only afterwards. Player state lives
//! elsewhere; this crate only answers "where does this exit lead?".

/// Movement directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Language selection for player-facing text.
pub mod locale;
/// A single node of the world graph.
pub mod location;
/// Serializable world content.
pub mod pack;
/// The world graph and its builder.
pub mod world;

/// Re-export direction types.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WgError, WgResult};
/// Re-export the locale.
pub use locale::Locale;
/// Re-export location types.
pub use location::{Location, LocationId};
/// Re-export world pack types.
pub use pack::{LocationPack, WorldPack};
/// Re-export world graph types.
pub use world::{World, WorldBuilder};
