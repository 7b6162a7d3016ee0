use std::fmt;
use std::str::FromStr;

/// Language used for player-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Locale {
    /// French, the language of the bundled content.
    #[default]
    French,
    /// English.
    English,
}

impl Locale {
    /// Prefix placed before a location name ("You are in").
    pub fn you_are_in(self) -> &'static str {
        match self {
            Self::French => "Vous êtes dans",
            Self::English => "You are in",
        }
    }

    /// Label of the exits line.
    pub fn exits_label(self) -> &'static str {
        match self {
            Self::French => "Sorties : ",
            Self::English => "Exits: ",
        }
    }

    /// Word shown when a location has no exits.
    pub fn no_exits(self) -> &'static str {
        match self {
            Self::French => "aucune",
            Self::English => "none",
        }
    }

    /// Two-letter language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "french" | "français" | "francais" => Ok(Self::French),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unknown language \"{other}\" (expected fr or en)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_french() {
        assert_eq!(Locale::default(), Locale::French);
    }

    #[test]
    fn parse_tags() {
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::French));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
        assert!("de".parse::<Locale>().is_err());
    }
}
