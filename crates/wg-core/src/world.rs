use std::collections::{BTreeSet, HashMap};

use crate::direction::Direction;
use crate::error::{WgError, WgResult};
use crate::locale::Locale;
use crate::location::{Location, LocationId};

/// A sealed world graph. Owns every location.
///
/// Produced by [`WorldBuilder::build`]; there is no way to rewire exits
/// afterwards, so a `World` can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct World {
    title: String,
    locations: Vec<Location>,
    by_name_lower: HashMap<String, LocationId>,
    valid_directions: BTreeSet<Direction>,
    start: LocationId,
}

impl World {
    /// Start assembling a world with the given title.
    pub fn builder(title: impl Into<String>) -> WorldBuilder {
        WorldBuilder::new(title)
    }

    /// Human-readable title of the world.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get a location by ID.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Find a location by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        self.by_name_lower
            .get(&name.trim().to_lowercase())
            .and_then(|id| self.location(*id))
    }

    /// Whether `id` belongs to this world.
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false for a built world; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Where a new player is placed.
    pub fn start(&self) -> LocationId {
        self.start
    }

    /// Every direction that leads somewhere from at least one location.
    ///
    /// Useful for help text only. Whether a move is legal depends on the
    /// exits of the player's current location.
    pub fn valid_directions(&self) -> &BTreeSet<Direction> {
        &self.valid_directions
    }

    /// Comma-separated codes of [`World::valid_directions`].
    pub fn valid_direction_codes(&self, locale: Locale) -> String {
        self.valid_directions
            .iter()
            .map(|d| d.code(locale))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone)]
struct PendingExit {
    from: String,
    direction: Direction,
    to: Option<String>,
}

/// Staged construction of a [`World`].
///
/// Exits are declared by location name and resolved in [`build`](Self::build),
/// so an exit may name a location that is added later.
#[derive(Debug, Clone)]
pub struct WorldBuilder {
    title: String,
    locations: Vec<Location>,
    by_name_lower: HashMap<String, LocationId>,
    pending: Vec<PendingExit>,
    start: Option<String>,
}

impl WorldBuilder {
    /// Create an empty builder.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            locations: Vec::new(),
            by_name_lower: HashMap::new(),
            pending: Vec::new(),
            start: None,
        }
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    /// Register a location. Names are unique, ignoring case.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> WgResult<LocationId> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(WgError::Validation("location name is empty".into()));
        }

        let name_lower = name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(WgError::DuplicateLocation(name));
        }

        let id = LocationId::new(self.locations.len());
        self.by_name_lower.insert(name_lower, id);
        self.locations
            .push(Location::new(id, name, description.into()));
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Declare a one-way exit. Later declarations for the same exit win.
    pub fn connect(
        &mut self,
        from: impl Into<String>,
        direction: Direction,
        to: impl Into<String>,
    ) -> &mut Self {
        self.pending.push(PendingExit {
            from: from.into(),
            direction,
            to: Some(to.into()),
        });
        self
    }

    /// Declare an exit in both directions (`a -> b` and the opposite way back).
    pub fn connect_both(
        &mut self,
        a: impl Into<String>,
        direction: Direction,
        b: impl Into<String>,
    ) -> &mut Self {
        let a = a.into();
        let b = b.into();
        self.connect(a.clone(), direction, b.clone());
        self.connect(b, direction.opposite(), a)
    }

    /// Remove an exit declared earlier.
    pub fn disconnect(&mut self, from: impl Into<String>, direction: Direction) -> &mut Self {
        self.pending.push(PendingExit {
            from: from.into(),
            direction,
            to: None,
        });
        self
    }

    /// Choose the starting location. Defaults to the first one added.
    pub fn start_at(&mut self, name: impl Into<String>) -> &mut Self {
        self.start = Some(name.into());
        self
    }

    // -----------------------------------------------------------------------
    // Sealing
    // -----------------------------------------------------------------------

    fn resolve(&self, name: &str) -> Option<LocationId> {
        self.by_name_lower.get(&name.trim().to_lowercase()).copied()
    }

    /// Resolve all exits and seal the graph.
    pub fn build(mut self) -> WgResult<World> {
        if self.locations.is_empty() {
            return Err(WgError::EmptyWorld);
        }

        let pending = std::mem::take(&mut self.pending);
        for exit in &pending {
            let from = self
                .resolve(&exit.from)
                .ok_or_else(|| WgError::UnknownLocation(exit.from.clone()))?;
            let target = match &exit.to {
                Some(to) => Some(self.resolve(to).ok_or_else(|| {
                    WgError::UnregisteredTarget {
                        from: exit.from.clone(),
                        direction: exit.direction.code(Locale::English).to_string(),
                        to: to.clone(),
                    }
                })?),
                None => None,
            };
            self.locations[from.index()].set_exit(exit.direction, target);
        }

        let start = match &self.start {
            Some(name) => self
                .resolve(name)
                .ok_or_else(|| WgError::UnknownStart(name.clone()))?,
            None => LocationId::new(0),
        };

        let valid_directions: BTreeSet<Direction> = self
            .locations
            .iter()
            .flat_map(|loc| loc.exits().map(|(d, _)| d))
            .collect();

        tracing::info!(
            title = %self.title,
            locations = self.locations.len(),
            exits = pending.len(),
            "world built"
        );

        Ok(World {
            title: self.title,
            locations: self.locations,
            by_name_lower: self.by_name_lower,
            valid_directions,
            start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> WorldBuilder {
        let mut b = World::builder("Test");
        b.add_location("A", "the first room.").unwrap();
        b.add_location("B", "the second room.").unwrap();
        b
    }

    #[test]
    fn build_resolves_exits() {
        let mut b = two_rooms();
        b.connect("A", Direction::North, "B");
        b.connect("B", Direction::South, "A");
        let world = b.build().unwrap();

        let a = world.find_by_name("A").unwrap();
        let b = world.find_by_name("B").unwrap();
        assert_eq!(a.exit(Direction::North), Some(b.id()));
        assert_eq!(b.exit(Direction::South), Some(a.id()));
        assert_eq!(a.exit(Direction::South), None);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut b = two_rooms();
        let err = b.add_location("a", "again").unwrap_err();
        assert!(matches!(err, WgError::DuplicateLocation(name) if name == "a"));
        assert_eq!(b.build().unwrap().len(), 2);
    }

    #[test]
    fn empty_name_rejected() {
        let mut b = World::builder("Test");
        assert!(matches!(
            b.add_location("   ", "nothing"),
            Err(WgError::Validation(_))
        ));
    }

    #[test]
    fn forward_reference_allowed() {
        let mut b = World::builder("Test");
        b.add_location("A", "first").unwrap();
        b.connect("A", Direction::East, "Later");
        b.add_location("Later", "added after the exit").unwrap();
        let world = b.build().unwrap();
        let later = world.find_by_name("later").unwrap().id();
        assert_eq!(
            world.find_by_name("A").unwrap().exit(Direction::East),
            Some(later)
        );
    }

    #[test]
    fn unregistered_target_fails_build() {
        let mut b = two_rooms();
        b.connect("A", Direction::Up, "Attic");
        let err = b.build().unwrap_err();
        assert!(matches!(
            err,
            WgError::UnregisteredTarget { ref to, ref direction, .. } if to == "Attic" && direction == "U"
        ));
    }

    #[test]
    fn exit_on_unknown_location_fails_build() {
        let mut b = two_rooms();
        b.connect("Cellar", Direction::Up, "A");
        assert!(matches!(b.build(), Err(WgError::UnknownLocation(name)) if name == "Cellar"));
    }

    #[test]
    fn empty_world_fails_build() {
        assert!(matches!(
            World::builder("Nothing").build(),
            Err(WgError::EmptyWorld)
        ));
    }

    #[test]
    fn start_defaults_to_first_location() {
        let world = two_rooms().build().unwrap();
        assert_eq!(world.location(world.start()).unwrap().name(), "A");
    }

    #[test]
    fn start_at_named_location() {
        let mut b = two_rooms();
        b.start_at("b");
        let world = b.build().unwrap();
        assert_eq!(world.location(world.start()).unwrap().name(), "B");
    }

    #[test]
    fn unknown_start_fails_build() {
        let mut b = two_rooms();
        b.start_at("Nowhere");
        assert!(matches!(b.build(), Err(WgError::UnknownStart(_))));
    }

    #[test]
    fn graph_may_be_asymmetric_and_disconnected() {
        let mut b = two_rooms();
        b.add_location("Island", "nobody gets here.").unwrap();
        b.connect("A", Direction::North, "B");
        let world = b.build().unwrap();

        let b_loc = world.find_by_name("B").unwrap();
        assert_eq!(b_loc.exits().count(), 0);
        assert_eq!(world.find_by_name("Island").unwrap().exits().count(), 0);
    }

    #[test]
    fn connect_both_wires_opposite() {
        let mut b = two_rooms();
        b.connect_both("A", Direction::Up, "B");
        let world = b.build().unwrap();
        let a = world.find_by_name("A").unwrap().id();
        assert_eq!(world.find_by_name("B").unwrap().exit(Direction::Down), Some(a));
    }

    #[test]
    fn disconnect_clears_earlier_exit() {
        let mut b = two_rooms();
        b.connect("A", Direction::North, "B");
        b.disconnect("A", Direction::North);
        let world = b.build().unwrap();
        assert_eq!(world.find_by_name("A").unwrap().exit(Direction::North), None);
        assert!(world.valid_directions().is_empty());
    }

    #[test]
    fn valid_directions_is_union_of_exits() {
        let mut b = two_rooms();
        b.connect("A", Direction::North, "B");
        b.connect("B", Direction::Down, "A");
        let world = b.build().unwrap();

        let dirs: Vec<Direction> = world.valid_directions().iter().copied().collect();
        assert_eq!(dirs, vec![Direction::North, Direction::Down]);
        assert_eq!(world.valid_direction_codes(Locale::French), "N, D");
    }

    #[test]
    fn self_loop_allowed() {
        let mut b = two_rooms();
        b.connect("A", Direction::West, "A");
        let world = b.build().unwrap();
        let a = world.find_by_name("A").unwrap();
        assert_eq!(a.exit(Direction::West), Some(a.id()));
    }

    #[test]
    fn locations_keep_insertion_order() {
        let world = two_rooms().build().unwrap();
        let names: Vec<&str> = world.locations().map(|l| l.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(world.len(), 2);
        assert!(!world.is_empty());
    }
}
