use std::fmt;

use crate::locale::Locale;

/// A movement direction.
///
/// The variant order is the canonical listing order for exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
    /// Up one level.
    Up,
    /// Down one level.
    Down,
}

impl Direction {
    /// Every direction, in listing order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction code or name, case-insensitively.
    ///
    /// Accepts single-letter codes (`O` is the French code for west) as well
    /// as English and French names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "nord" => Some(Self::North),
            "e" | "east" | "est" => Some(Self::East),
            "s" | "south" | "sud" => Some(Self::South),
            "w" | "o" | "west" | "ouest" => Some(Self::West),
            "u" | "up" | "haut" | "monter" => Some(Self::Up),
            "d" | "down" | "bas" | "descendre" => Some(Self::Down),
            _ => None,
        }
    }

    /// The direction leading back the way you came.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short code shown in exit listings.
    pub fn code(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::North, _) => "N",
            (Self::East, _) => "E",
            (Self::South, _) => "S",
            (Self::West, Locale::French) => "O",
            (Self::West, Locale::English) => "W",
            (Self::Up, _) => "U",
            (Self::Down, _) => "D",
        }
    }

    /// Lower-case display name.
    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                Self::North => "north",
                Self::East => "east",
                Self::South => "south",
                Self::West => "west",
                Self::Up => "up",
                Self::Down => "down",
            },
            Locale::French => match self {
                Self::North => "nord",
                Self::East => "est",
                Self::South => "sud",
                Self::West => "ouest",
                Self::Up => "haut",
                Self::Down => "bas",
            },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Locale::English))
    }
}
