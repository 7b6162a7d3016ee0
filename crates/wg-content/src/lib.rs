//! Built-in world packs for Wegweiser.
//!
//! Each pack is a JSON [`WorldPack`] embedded at compile time. Packs are
//! plain data: nothing in the engine knows their room names.

use std::fmt;
use std::str::FromStr;

use wg_core::{WgResult, World, WorldPack};

/// A bundled world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Pack {
    /// The flooded water temple: a 3x3 ground floor with two galleries above
    /// and two below.
    #[default]
    WaterTemple,
    /// A small frozen mountain region with a cave beneath the refuge.
    Hebra,
}

impl Pack {
    /// Every bundled pack.
    pub const ALL: [Pack; 2] = [Self::WaterTemple, Self::Hebra];

    /// Name used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Self::WaterTemple => "water-temple",
            Self::Hebra => "hebra",
        }
    }

    /// One-line description for listings.
    pub fn summary(self) -> &'static str {
        match self {
            Self::WaterTemple => "Flooded temple, three floors, thirteen rooms",
            Self::Hebra => "Frozen mountain pass with an ice cave",
        }
    }

    /// Raw JSON source.
    pub fn json(self) -> &'static str {
        match self {
            Self::WaterTemple => include_str!("../packs/water_temple.json"),
            Self::Hebra => include_str!("../packs/hebra.json"),
        }
    }

    /// Parse the embedded JSON.
    pub fn load(self) -> WgResult<WorldPack> {
        WorldPack::from_json(self.json())
    }

    /// Build the world.
    pub fn world(self) -> WgResult<World> {
        self.load()?.into_world()
    }
}

impl FromStr for Pack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == wanted || p.slug().replace('-', "_") == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|p| p.slug()).collect();
                format!("unknown pack \"{s}\" (available: {})", known.join(", "))
            })
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wg_core::{Direction, Locale};

    #[test]
    fn every_pack_builds() {
        for pack in Pack::ALL {
            let world = pack.world().unwrap();
            assert!(!world.is_empty(), "{pack} is empty");
            for loc in world.locations() {
                for (_, target) in loc.exits() {
                    assert!(world.contains(target));
                }
            }
        }
    }

    #[test]
    fn water_temple_layout() {
        let world = Pack::WaterTemple.world().unwrap();
        assert_eq!(world.len(), 13);
        assert_eq!(world.title(), "le temple de l'eau");

        let centre = world.location(world.start()).unwrap();
        assert_eq!(centre.name(), "Salle centrale");
        assert_eq!(
            centre.describe_exits(Locale::French),
            "Sorties : N, E, S, O, U, D"
        );

        let up = centre.exit(Direction::Up).unwrap();
        assert_eq!(world.location(up).unwrap().name(), "Galerie supérieure A");
        assert_eq!(world.valid_directions().len(), 6);
    }

    #[test]
    fn water_temple_trims_descriptions() {
        let world = Pack::WaterTemple.world().unwrap();
        let west = world.find_by_name("Aile ouest").unwrap();
        assert!(
            west.describe_long(Locale::French)
                .contains("Aile ouest, un passage bordé")
        );
    }

    #[test]
    fn hebra_has_one_way_drop() {
        let world = Pack::Hebra.world().unwrap();
        let cave = world.find_by_name("Grotte du refuge").unwrap();
        assert_eq!(cave.exit(Direction::Up), None);
    }

    #[test]
    fn parse_slugs() {
        assert_eq!("water-temple".parse::<Pack>(), Ok(Pack::WaterTemple));
        assert_eq!("WATER_TEMPLE".parse::<Pack>(), Ok(Pack::WaterTemple));
        assert_eq!("hebra".parse::<Pack>(), Ok(Pack::Hebra));
        assert!("atlantis".parse::<Pack>().unwrap_err().contains("hebra"));
    }
}
