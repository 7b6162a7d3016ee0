//! Command registration and lookup.

use std::collections::HashMap;

use wg_core::Direction;

/// What a command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List the registered commands.
    Help,
    /// End the session.
    Quit,
    /// Move in the direction given as the first argument.
    Go,
    /// Move in a fixed direction.
    Move(Direction),
    /// Describe the current location again.
    Look,
    /// List the locations already left behind.
    History,
    /// Return to the previous location.
    Back,
}

/// A registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    keyword: String,
    help_text: String,
    arity: usize,
    operation: Operation,
}

impl CommandSpec {
    /// Lower-case trigger word.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Suffix printed after the keyword in `help`.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Number of arguments the command expects after its keyword.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Bound operation.
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

/// Outcome of looking up a raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'r> {
    /// Blank input.
    Empty,
    /// The first word is not a registered keyword.
    Unknown {
        /// The lower-cased first word.
        keyword: String,
    },
    /// A registered command matched.
    Found {
        /// The matched command.
        command: &'r CommandSpec,
        /// Every word of the input, keyword included.
        words: Vec<String>,
    },
}

/// Split input on whitespace runs, dropping leading and trailing blanks.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Case-insensitive keyword table.
///
/// Re-registering a keyword replaces the earlier command in place, so the
/// last registration wins and `help` keeps its first listing position.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    by_keyword: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, returning the one it replaced.
    pub fn register(
        &mut self,
        keyword: &str,
        help_text: impl Into<String>,
        arity: usize,
        operation: Operation,
    ) -> Option<CommandSpec> {
        let keyword = keyword.trim().to_lowercase();
        let spec = CommandSpec {
            keyword: keyword.clone(),
            help_text: help_text.into(),
            arity,
            operation,
        };

        if let Some(&pos) = self.by_keyword.get(&keyword) {
            tracing::warn!(%keyword, "command re-registered, replacing earlier binding");
            return Some(std::mem::replace(&mut self.commands[pos], spec));
        }

        tracing::debug!(%keyword, ?operation, arity, "command registered");
        self.by_keyword.insert(keyword, self.commands.len());
        self.commands.push(spec);
        None
    }

    /// Look up a command by keyword, ignoring case.
    pub fn get(&self, keyword: &str) -> Option<&CommandSpec> {
        self.by_keyword
            .get(&keyword.to_lowercase())
            .map(|&pos| &self.commands[pos])
    }

    /// Whether `keyword` is registered.
    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Registered keywords in registration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.keyword.as_str())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Tokenize a raw line and find its command.
    pub fn resolve(&self, input: &str) -> Resolution<'_> {
        let words = tokenize(input);
        let Some(first) = words.first() else {
            return Resolution::Empty;
        };

        let keyword = first.to_lowercase();
        match self.get(&keyword) {
            Some(command) => Resolution::Found {
                command,
                words: words.iter().map(|w| w.to_string()).collect(),
            },
            None => Resolution::Unknown { keyword },
        }
    }
}
