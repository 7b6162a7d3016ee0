use std::fmt;

use crate::direction::Direction;
use crate::locale::Locale;

/// Index of a location inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(usize);

impl LocationId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the location in world insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the world graph.
///
/// Exits hold [`LocationId`]s into the owning world rather than references,
/// so cyclic layouts need no shared ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    name: String,
    description: String,
    exits: [Option<LocationId>; Direction::ALL.len()],
}

impl Location {
    pub(crate) fn new(id: LocationId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            exits: [None; Direction::ALL.len()],
        }
    }

    /// Identifier of this location.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw description, as authored.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn set_exit(&mut self, direction: Direction, target: Option<LocationId>) {
        self.exits[direction.index()] = target;
    }

    /// Target of the exit in `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<LocationId> {
        self.exits[direction.index()]
    }

    /// Target of the exit named by a free-text direction.
    ///
    /// Unrecognized direction strings yield `None`, same as a missing exit.
    pub fn exit_to(&self, direction: &str) -> Option<LocationId> {
        Direction::parse(direction).and_then(|d| self.exit(d))
    }

    /// Populated exits in listing order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, LocationId)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.exit(d).map(|target| (d, target)))
    }

    /// One line listing the available exits, e.g. `Sorties : N, E`.
    pub fn describe_exits(&self, locale: Locale) -> String {
        let codes: Vec<&str> = self.exits().map(|(d, _)| d.code(locale)).collect();
        if codes.is_empty() {
            format!("{}{}", locale.exits_label(), locale.no_exits())
        } else {
            format!("{}{}", locale.exits_label(), codes.join(", "))
        }
    }

    /// Full presentation shown on arrival.
    pub fn describe_long(&self, locale: Locale) -> String {
        format!(
            "\n{} {}, {}\n\n{}\n",
            locale.you_are_in(),
            self.name,
            self.description.trim(),
            self.describe_exits(locale)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall() -> Location {
        Location::new(
            LocationId::new(0),
            "Salle centrale".to_string(),
            "  la chambre centrale du temple. ".to_string(),
        )
    }

    #[test]
    fn exit_lookup_is_case_insensitive() {
        let mut loc = hall();
        loc.set_exit(Direction::North, Some(LocationId::new(1)));
        assert_eq!(loc.exit_to("n"), Some(LocationId::new(1)));
        assert_eq!(loc.exit_to("N"), Some(LocationId::new(1)));
        assert_eq!(loc.exit_to("nord"), Some(LocationId::new(1)));
    }

    #[test]
    fn unknown_direction_is_absent() {
        let loc = hall();
        assert_eq!(loc.exit_to("sideways"), None);
        assert_eq!(loc.exit_to(""), None);
        assert_eq!(loc.exit_to("s"), None);
    }

    #[test]
    fn cleared_exit_is_absent() {
        let mut loc = hall();
        loc.set_exit(Direction::East, Some(LocationId::new(3)));
        loc.set_exit(Direction::East, None);
        assert_eq!(loc.exit(Direction::East), None);
        assert_eq!(loc.exits().count(), 0);
    }

    #[test]
    fn exits_listed_in_direction_order() {
        let mut loc = hall();
        loc.set_exit(Direction::Down, Some(LocationId::new(4)));
        loc.set_exit(Direction::West, Some(LocationId::new(3)));
        loc.set_exit(Direction::North, Some(LocationId::new(1)));
        assert_eq!(loc.describe_exits(Locale::French), "Sorties : N, O, D");
        assert_eq!(loc.describe_exits(Locale::English), "Exits: N, W, D");
    }

    #[test]
    fn no_exits_sentinel() {
        let loc = hall();
        assert_eq!(loc.describe_exits(Locale::French), "Sorties : aucune");
        assert_eq!(loc.describe_exits(Locale::English), "Exits: none");
    }

    #[test]
    fn long_description_format() {
        let mut loc = hall();
        loc.set_exit(Direction::Up, Some(LocationId::new(9)));
        assert_eq!(
            loc.describe_long(Locale::French),
            "\nVous êtes dans Salle centrale, la chambre centrale du temple.\n\nSorties : U\n"
        );
    }
}
