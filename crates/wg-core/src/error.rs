/// Alias for `Result<T, WgError>`.
pub type WgResult<T> = Result<T, WgError>;

/// Errors raised while assembling a world graph.
///
/// All of these indicate malformed content and abort setup.
#[derive(Debug, thiserror::Error)]
pub enum WgError {
    /// A location with the same name (case-insensitive) already exists.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(String),

    /// An exit refers to a location that was never added.
    #[error("exit {direction} of \"{from}\" leads to unknown location \"{to}\"")]
    UnregisteredTarget {
        /// Name of the location owning the exit.
        from: String,
        /// Direction code of the exit.
        direction: String,
        /// The unresolved target name.
        to: String,
    },

    /// An exit was declared on a location that was never added.
    #[error("exit declared on unknown location \"{0}\"")]
    UnknownLocation(String),

    /// The selected starting location was never added.
    #[error("starting location not found: \"{0}\"")]
    UnknownStart(String),

    /// The world has no locations at all.
    #[error("world has no locations")]
    EmptyWorld,

    /// An exit key in world data is not a known direction.
    #[error("unknown direction \"{direction}\" in exits of \"{location}\"")]
    UnknownDirection {
        /// Name of the location whose exit table is malformed.
        location: String,
        /// The offending key.
        direction: String,
    },

    /// A location name is empty after trimming.
    #[error("validation error: {0}")]
    Validation(String),

    /// World data could not be deserialized.
    #[error("invalid world file: {0}")]
    Json(#[from] serde_json::Error),
}
