//! Command registry and input tokenizing.

mod command;
mod resolver;

pub use command::{CommandRegistry, CommandSpec, Operation, Resolution, tokenize};
pub use resolver::{FUZZY_THRESHOLD, suggest_keyword};
