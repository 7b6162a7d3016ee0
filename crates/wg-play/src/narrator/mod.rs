//! Player-facing text, in the session's language.

mod templates;

pub use templates::Narrator;
