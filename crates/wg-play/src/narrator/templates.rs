//! Message templates for every piece of text the session prints.

use wg_core::{Direction, Locale, Location};

use crate::parser::{CommandSpec, Operation};

/// Renders session messages in one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Narrator {
    locale: Locale,
}

impl Narrator {
    /// Create a narrator speaking `locale`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Language in use.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    // -----------------------------------------------------------------------
    // Session framing
    // -----------------------------------------------------------------------

    /// Prompt asking for the player's name.
    pub fn name_prompt(&self) -> &'static str {
        match self.locale {
            Locale::French => "\nEntrez votre nom: ",
            Locale::English => "\nEnter your name: ",
        }
    }

    /// Name used when the player leaves theirs blank.
    pub fn default_player_name(&self) -> &'static str {
        match self.locale {
            Locale::French => "Joueur",
            Locale::English => "Player",
        }
    }

    /// Input prompt.
    pub fn prompt(&self) -> &'static str {
        "> "
    }

    /// Greeting printed once, before the starting location.
    pub fn welcome(&self, player: &str, title: &str) -> String {
        match self.locale {
            Locale::French => format!(
                "\nBienvenue {player} dans {title} !\nEntrez 'help' si vous avez besoin d'aide.\n"
            ),
            Locale::English => format!(
                "\nWelcome {player} to {title}!\nType 'help' if you need help.\n"
            ),
        }
    }

    /// Printed by `quit`.
    pub fn farewell(&self, player: &str) -> String {
        match self.locale {
            Locale::French => format!("\nMerci {player} d'avoir joué. Au revoir.\n"),
            Locale::English => format!("\nThanks for playing, {player}. Goodbye.\n"),
        }
    }

    /// Printed when input ends without `quit`.
    pub fn interrupted(&self) -> &'static str {
        match self.locale {
            Locale::French => "\n\nInterruption détectée. Fin du jeu.\n",
            Locale::English => "\n\nInterrupted. Game over.\n",
        }
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Arrival text for a location.
    pub fn arrive(&self, location: &Location) -> String {
        location.describe_long(self.locale)
    }

    /// The current location has no exit in the requested direction.
    pub fn no_exit(&self, direction: Direction) -> String {
        match self.locale {
            Locale::French => format!(
                "\nAucune porte dans cette direction ({}) !\n",
                direction.name(self.locale)
            ),
            Locale::English => format!(
                "\nThere is no door to the {}!\n",
                direction.name(self.locale)
            ),
        }
    }

    /// `back` with nothing to go back to.
    pub fn no_history(&self) -> &'static str {
        match self.locale {
            Locale::French => "\nImpossible de revenir en arrière : aucun lieu précédent.\n",
            Locale::English => "\nYou cannot go back: there is no previous location.\n",
        }
    }

    /// `go` typed without a direction.
    pub fn missing_direction(&self, codes: &str) -> String {
        match self.locale {
            Locale::French => format!("\nLa commande 'go' attend une direction ({codes}).\n"),
            Locale::English => format!("\nThe 'go' command needs a direction ({codes}).\n"),
        }
    }

    /// `go` followed by something that is not a direction.
    pub fn invalid_direction(&self, token: &str, codes: &str) -> String {
        match self.locale {
            Locale::French => format!(
                "\nDirection '{token}' non reconnue. Directions possibles : {codes}.\n"
            ),
            Locale::English => format!(
                "\nUnknown direction '{token}'. Possible directions: {codes}.\n"
            ),
        }
    }

    /// Departed locations, oldest first.
    pub fn history(&self, names: &[&str]) -> String {
        if names.is_empty() {
            return self.history_empty().to_string();
        }

        let mut output = match self.locale {
            Locale::French => "\nVous avez déjà visité les lieux suivants :\n".to_string(),
            Locale::English => "\nYou have already visited:\n".to_string(),
        };
        for name in names {
            output.push_str(&format!("    - {name}\n"));
        }
        output
    }

    /// Sentinel shown by `history` before the first move.
    pub fn history_empty(&self) -> &'static str {
        match self.locale {
            Locale::French => "\nVous n'avez encore visité aucun autre lieu.\n",
            Locale::English => "\nYou have not visited any other place yet.\n",
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Unknown keyword, with an optional close match.
    pub fn unrecognized(&self, keyword: &str, suggestion: Option<&str>) -> String {
        let hint = match (self.locale, suggestion) {
            (Locale::French, Some(s)) => format!(" Vouliez-vous dire '{s}' ?"),
            (Locale::English, Some(s)) => format!(" Did you mean '{s}'?"),
            (_, None) => String::new(),
        };
        match self.locale {
            Locale::French => format!(
                "\nCommande '{keyword}' non reconnue.{hint} Entrez 'help' pour voir la liste des commandes disponibles.\n"
            ),
            Locale::English => format!(
                "\nUnknown command '{keyword}'.{hint} Type 'help' to list the available commands.\n"
            ),
        }
    }

    /// Listing produced by `help`, in registration order.
    pub fn help<'a>(&self, commands: impl IntoIterator<Item = &'a CommandSpec>) -> String {
        let mut output = match self.locale {
            Locale::French => "\nVoici les commandes disponibles:\n".to_string(),
            Locale::English => "\nAvailable commands:\n".to_string(),
        };
        for cmd in commands {
            output.push_str(&format!("\t- {}{}\n", cmd.keyword(), cmd.help_text()));
        }
        output
    }

    /// Help suffix for a built-in operation bound to `keyword`.
    ///
    /// `codes` lists the directions used anywhere in the world.
    pub fn operation_help(&self, keyword: &str, operation: Operation, codes: &str) -> String {
        match self.locale {
            Locale::French => match operation {
                Operation::Help => " : afficher cette aide".to_string(),
                Operation::Quit => " : quitter le jeu".to_string(),
                Operation::Go => format!(
                    " <direction> : se déplacer dans une direction cardinale ({codes})"
                ),
                Operation::Move(Direction::Up) if keyword == "up" => {
                    " : monter d'un niveau (équivalent go U)".to_string()
                }
                Operation::Move(Direction::Down) if keyword == "down" => {
                    " : descendre d'un niveau (équivalent go D)".to_string()
                }
                Operation::Move(d) => format!(
                    " : aller vers {} (équivalent go {})",
                    d.name(self.locale),
                    d.code(self.locale)
                ),
                Operation::Look => " : décrire le lieu actuel".to_string(),
                Operation::History => " : afficher les lieux déjà visités".to_string(),
                Operation::Back => " : revenir au lieu précédent".to_string(),
            },
            Locale::English => match operation {
                Operation::Help => " : show this help".to_string(),
                Operation::Quit => " : quit the game".to_string(),
                Operation::Go => format!(" <direction> : move in a direction ({codes})"),
                Operation::Move(d) => format!(
                    " : go {} (same as go {})",
                    d.name(self.locale),
                    d.code(self.locale)
                ),
                Operation::Look => " : describe the current location".to_string(),
                Operation::History => " : list the places already visited".to_string(),
                Operation::Back => " : return to the previous location".to_string(),
            },
        }
    }
}
