//! A running game session.

use wg_core::{Direction, Location, World};

use crate::config::SessionConfig;
use crate::error::{MoveError, PlayResult};
use crate::narrator::Narrator;
use crate::parser::{CommandRegistry, Operation, Resolution, suggest_keyword};
use crate::player::Navigator;

/// What happened to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Blank input. Nothing to print.
    Ignored,
    /// The first word is not a command. Nothing ran.
    Unrecognized {
        /// The lower-cased first word.
        keyword: String,
        /// Message for the player.
        message: String,
    },
    /// A command ran.
    Executed {
        /// The operation that ran.
        operation: Operation,
        /// Message for the player.
        output: String,
    },
}

impl DispatchOutcome {
    /// Text to show the player, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Ignored => None,
            Self::Unrecognized { message, .. } => Some(message),
            Self::Executed { output, .. } => Some(output),
        }
    }
}

/// Build the standard command set for `world`.
pub fn builtin_registry(world: &World, narrator: &Narrator) -> CommandRegistry {
    let codes = direction_codes(world, narrator);
    let bindings: [(&str, usize, Operation); 9] = [
        ("help", 0, Operation::Help),
        ("quit", 0, Operation::Quit),
        ("go", 1, Operation::Go),
        ("up", 0, Operation::Move(Direction::Up)),
        ("down", 0, Operation::Move(Direction::Down)),
        ("look", 0, Operation::Look),
        ("history", 0, Operation::History),
        ("back", 0, Operation::Back),
        ("retour", 0, Operation::Back),
    ];

    let mut registry = CommandRegistry::new();
    for (keyword, arity, operation) in bindings {
        let help = narrator.operation_help(keyword, operation, &codes);
        registry.register(keyword, help, arity, operation);
    }
    registry
}

/// Codes of every direction used in `world`, or all codes for a world
/// without exits.
fn direction_codes(world: &World, narrator: &Narrator) -> String {
    let locale = narrator.locale();
    if world.valid_directions().is_empty() {
        Direction::ALL
            .iter()
            .map(|d| d.code(locale))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        world.valid_direction_codes(locale)
    }
}

/// One player exploring one world.
pub struct GameSession {
    world: World,
    navigator: Navigator,
    registry: CommandRegistry,
    narrator: Narrator,
    finished: bool,
}

impl GameSession {
    /// Start a session with the built-in commands, placing the player at the
    /// world's starting location.
    pub fn new(world: World, config: SessionConfig) -> PlayResult<Self> {
        let narrator = Narrator::new(config.locale);
        let registry = builtin_registry(&world, &narrator);
        Self::with_registry(world, config, registry)
    }

    /// Start a session with a custom command set.
    pub fn with_registry(
        world: World,
        config: SessionConfig,
        registry: CommandRegistry,
    ) -> PlayResult<Self> {
        let narrator = Narrator::new(config.locale);
        let name = config.player_name.as_deref().unwrap_or("");
        let mut navigator = Navigator::new(name, narrator.default_player_name())
            .with_history_limit(config.history_limit);
        navigator.initialize(world.start())?;

        tracing::info!(
            world = world.title(),
            player = navigator.name(),
            commands = registry.len(),
            "session started"
        );

        Ok(Self {
            world,
            navigator,
            registry,
            narrator,
            finished: false,
        })
    }

    /// The world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's navigator.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The command set.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The narrator in use.
    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    /// Whether `quit` has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The player's current location.
    pub fn current_location(&self) -> PlayResult<&Location> {
        Ok(self.navigator.current_location(&self.world)?)
    }

    /// Greeting followed by the starting location.
    pub fn welcome(&self) -> PlayResult<String> {
        let mut output = self
            .narrator
            .welcome(self.navigator.name(), self.world.title());
        output.push_str(&self.narrator.arrive(self.current_location()?));
        Ok(output)
    }

    /// Interpret one raw input line.
    ///
    /// Only setup bugs produce an `Err`; everything the player can get
    /// wrong comes back as text.
    pub fn dispatch(&mut self, input: &str) -> PlayResult<DispatchOutcome> {
        let (operation, words) = match self.registry.resolve(input) {
            Resolution::Empty => return Ok(DispatchOutcome::Ignored),
            Resolution::Unknown { keyword } => {
                tracing::debug!(%keyword, "unrecognized command");
                let suggestion = suggest_keyword(&self.registry, &keyword);
                let message = self.narrator.unrecognized(&keyword, suggestion);
                return Ok(DispatchOutcome::Unrecognized { keyword, message });
            }
            Resolution::Found { command, words } => (command.operation(), words),
        };

        let output = self.execute(operation, &words)?;
        Ok(DispatchOutcome::Executed { operation, output })
    }

    /// Run an operation with the words of the line that triggered it.
    pub fn execute(&mut self, operation: Operation, words: &[String]) -> PlayResult<String> {
        tracing::debug!(?operation, args = words.len().saturating_sub(1), "executing");
        match operation {
            Operation::Help => Ok(self.narrator.help(self.registry.iter())),
            Operation::Quit => {
                self.finished = true;
                Ok(self.narrator.farewell(self.navigator.name()))
            }
            Operation::Go => self.do_go(words.get(1).map(String::as_str)),
            Operation::Move(direction) => self.do_move(direction),
            Operation::Look => Ok(self.narrator.arrive(self.current_location()?)),
            Operation::History => Ok(self.navigator.history_report(&self.world, &self.narrator)),
            Operation::Back => {
                let result = self.navigator.back(&self.world);
                render_move(&self.narrator, result)
            }
        }
    }

    fn do_go(&mut self, token: Option<&str>) -> PlayResult<String> {
        let codes = direction_codes(&self.world, &self.narrator);
        let Some(token) = token else {
            return Ok(self.narrator.missing_direction(&codes));
        };
        match Direction::parse(token) {
            Some(direction) => self.do_move(direction),
            None => Ok(self.narrator.invalid_direction(token, &codes)),
        }
    }

    fn do_move(&mut self, direction: Direction) -> PlayResult<String> {
        let result = self.navigator.go(&self.world, direction);
        render_move(&self.narrator, result)
    }
}

fn render_move(narrator: &Narrator, result: Result<&Location, MoveError>) -> PlayResult<String> {
    match result {
        Ok(location) => Ok(narrator.arrive(location)),
        Err(e) if !e.is_recoverable() => Err(e.into()),
        Err(MoveError::NoExit(direction)) => Ok(narrator.no_exit(direction)),
        Err(_) => Ok(narrator.no_history().to_string()),
    }
}
