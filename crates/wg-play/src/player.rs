//! The player's position and visit history.

use std::collections::VecDeque;

use wg_core::{Direction, Location, LocationId, World};

use crate::error::{MoveError, PlayError, PlayResult};
use crate::narrator::Narrator;

/// Tracks where the player is and where they have been.
///
/// A navigator starts unplaced; [`initialize`](Self::initialize) puts it in
/// the world exactly once. Moves push the location being left onto the
/// history. [`back`](Self::back) pops without pushing, so repeated calls walk
/// further into the past instead of bouncing between two rooms.
#[derive(Debug, Clone)]
pub struct Navigator {
    name: String,
    current: Option<LocationId>,
    history: VecDeque<LocationId>,
    history_limit: Option<usize>,
}

impl Navigator {
    /// Create an unplaced navigator. A blank `name` becomes `fallback`.
    pub fn new(name: &str, fallback: &str) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() { fallback } else { trimmed };
        Self {
            name: name.to_string(),
            current: None,
            history: VecDeque::new(),
            history_limit: None,
        }
    }

    /// Keep at most `limit` departed locations, dropping the oldest first.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self.trim_history();
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the navigator has been placed.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Place the navigator at its starting location.
    pub fn initialize(&mut self, start: LocationId) -> PlayResult<()> {
        if let Some(current) = self.current {
            return Err(PlayError::AlreadyInitialized(current));
        }
        tracing::debug!(player = %self.name, %start, "navigator placed");
        self.current = Some(start);
        Ok(())
    }

    /// Current location ID.
    pub fn current(&self) -> Result<LocationId, MoveError> {
        self.current.ok_or(MoveError::Uninitialized)
    }

    /// Current location, looked up in `world`.
    pub fn current_location<'w>(&self, world: &'w World) -> Result<&'w Location, MoveError> {
        let id = self.current()?;
        world.location(id).ok_or(MoveError::UnknownLocation(id))
    }

    /// Departed locations, oldest first. The current location is not included.
    pub fn history(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.history.iter().copied()
    }

    /// Number of remembered locations.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Follow the exit in `direction`.
    ///
    /// On [`MoveError::NoExit`] nothing changes. A self-loop still records
    /// the departure.
    pub fn go<'w>(
        &mut self,
        world: &'w World,
        direction: Direction,
    ) -> Result<&'w Location, MoveError> {
        let here = self.current_location(world)?;
        let target = here.exit(direction).ok_or(MoveError::NoExit(direction))?;
        let destination = world
            .location(target)
            .ok_or(MoveError::UnknownLocation(target))?;

        self.history.push_back(here.id());
        self.trim_history();
        self.current = Some(target);

        tracing::debug!(
            player = %self.name,
            from = here.name(),
            to = destination.name(),
            %direction,
            "moved"
        );
        Ok(destination)
    }

    /// Return to the most recently departed location.
    pub fn back<'w>(&mut self, world: &'w World) -> Result<&'w Location, MoveError> {
        self.current()?;
        let previous = *self.history.back().ok_or(MoveError::NoHistory)?;
        let destination = world
            .location(previous)
            .ok_or(MoveError::UnknownLocation(previous))?;

        self.history.pop_back();
        self.current = Some(previous);

        tracing::debug!(player = %self.name, to = destination.name(), "went back");
        Ok(destination)
    }

    /// Text listing departed locations, or the empty-history sentinel.
    pub fn history_report(&self, world: &World, narrator: &Narrator) -> String {
        let names: Vec<&str> = self
            .history
            .iter()
            .filter_map(|id| world.location(*id))
            .map(|loc| loc.name())
            .collect();
        narrator.history(&names)
    }

    fn trim_history(&mut self) {
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wg_core::Locale;

    /// `A` north to `B`, `B` south to `A`, `B` up to `C` (one-way).
    fn test_world() -> World {
        let mut b = World::builder("Test");
        b.add_location("A", "room a.").unwrap();
        b.add_location("B", "room b.").unwrap();
        b.add_location("C", "room c.").unwrap();
        b.connect("A", Direction::North, "B");
        b.connect("B", Direction::South, "A");
        b.connect("B", Direction::Up, "C");
        b.connect("C", Direction::West, "C");
        b.build().unwrap()
    }

    fn placed(world: &World) -> Navigator {
        let mut nav = Navigator::new("Link", "Joueur");
        nav.initialize(world.start()).unwrap();
        nav
    }

    fn id(world: &World, name: &str) -> LocationId {
        world.find_by_name(name).unwrap().id()
    }

    #[test]
    fn blank_name_falls_back() {
        assert_eq!(Navigator::new("  ", "Joueur").name(), "Joueur");
        assert_eq!(Navigator::new(" Zelda ", "Joueur").name(), "Zelda");
    }

    #[test]
    fn initialize_twice_fails() {
        let world = test_world();
        let mut nav = placed(&world);
        assert!(matches!(
            nav.initialize(world.start()),
            Err(PlayError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn unplaced_navigator_cannot_move() {
        let world = test_world();
        let mut nav = Navigator::new("Link", "Joueur");
        assert!(!nav.is_active());
        assert_eq!(nav.current(), Err(MoveError::Uninitialized));
        assert_eq!(
            nav.go(&world, Direction::North).unwrap_err(),
            MoveError::Uninitialized
        );
        assert_eq!(nav.back(&world).unwrap_err(), MoveError::Uninitialized);
    }

    #[test]
    fn go_then_back_scenario() {
        let world = test_world();
        let mut nav = placed(&world);

        let b = nav.go(&world, Direction::North).unwrap();
        assert_eq!(b.name(), "B");
        assert_eq!(nav.history().collect::<Vec<_>>(), vec![id(&world, "A")]);

        let a = nav.back(&world).unwrap();
        assert_eq!(a.name(), "A");
        assert_eq!(nav.history_len(), 0);

        assert_eq!(
            nav.go(&world, Direction::South).unwrap_err(),
            MoveError::NoExit(Direction::South)
        );
        assert_eq!(nav.current().unwrap(), id(&world, "A"));
    }

    #[test]
    fn no_exit_leaves_state_unchanged() {
        let world = test_world();
        let mut nav = placed(&world);
        nav.go(&world, Direction::North).unwrap();

        assert!(nav.go(&world, Direction::East).is_err());
        assert_eq!(nav.current().unwrap(), id(&world, "B"));
        assert_eq!(nav.history_len(), 1);
    }

    #[test]
    fn back_walks_further_into_history() {
        let world = test_world();
        let mut nav = placed(&world);
        nav.go(&world, Direction::North).unwrap();
        nav.go(&world, Direction::Up).unwrap();

        assert_eq!(nav.back(&world).unwrap().name(), "B");
        assert_eq!(nav.back(&world).unwrap().name(), "A");
        assert_eq!(nav.back(&world).unwrap_err(), MoveError::NoHistory);
        assert_eq!(nav.current().unwrap(), id(&world, "A"));
    }

    #[test]
    fn back_with_empty_history() {
        let world = test_world();
        let mut nav = placed(&world);
        assert_eq!(nav.back(&world).unwrap_err(), MoveError::NoHistory);
        assert_eq!(nav.current().unwrap(), world.start());
    }

    #[test]
    fn self_loop_is_recorded() {
        let world = test_world();
        let mut nav = placed(&world);
        nav.go(&world, Direction::North).unwrap();
        nav.go(&world, Direction::Up).unwrap();
        let c = nav.go(&world, Direction::West).unwrap();

        assert_eq!(c.name(), "C");
        assert_eq!(nav.history_len(), 3);
        assert_eq!(nav.history().last(), Some(id(&world, "C")));
    }

    #[test]
    fn history_limit_drops_oldest() {
        let world = test_world();
        let mut nav = Navigator::new("Link", "Joueur").with_history_limit(Some(2));
        nav.initialize(world.start()).unwrap();

        nav.go(&world, Direction::North).unwrap();
        nav.go(&world, Direction::South).unwrap();
        nav.go(&world, Direction::North).unwrap();

        assert_eq!(
            nav.history().collect::<Vec<_>>(),
            vec![id(&world, "B"), id(&world, "A")]
        );
    }

    #[test]
    fn history_report_sentinel_and_listing() {
        let world = test_world();
        let narrator = Narrator::new(Locale::French);
        let mut nav = placed(&world);

        assert_eq!(nav.history_report(&world, &narrator), narrator.history_empty());

        nav.go(&world, Direction::North).unwrap();
        nav.go(&world, Direction::Up).unwrap();
        let report = nav.history_report(&world, &narrator);
        assert!(report.contains("- A"));
        assert!(report.contains("- B"));
        assert!(!report.contains("- C"));
    }
}
