//! World content as plain data.
//!
//! A [`WorldPack`] is the serialized form of a world: a title, an optional
//! starting location, and each location with its exits keyed by direction
//! code. Exit keys are validated against [`Direction`] when the pack is
//! turned into a [`World`], so malformed content fails at load time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{WgError, WgResult};
use crate::locale::Locale;
use crate::world::{World, WorldBuilder};

/// Serializable description of a whole world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPack {
    /// Title shown in the welcome banner.
    pub title: String,
    /// Name of the starting location; the first location when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Locations in listing order.
    pub locations: Vec<LocationPack>,
}

/// Serializable description of one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPack {
    /// Unique name.
    pub name: String,
    /// Text shown after the name on arrival.
    pub description: String,
    /// Exits keyed by direction code or name. `null` means no exit.
    #[serde(default)]
    pub exits: BTreeMap<String, Option<String>>,
}

impl WorldPack {
    /// Parse a pack from JSON text.
    pub fn from_json(json: &str) -> WgResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Describe an existing world as a pack. Exit keys use English codes.
    pub fn from_world(world: &World) -> Self {
        let locations = world
            .locations()
            .map(|loc| LocationPack {
                name: loc.name().to_string(),
                description: loc.description().to_string(),
                exits: loc
                    .exits()
                    .filter_map(|(dir, target)| {
                        let to = world.location(target)?.name().to_string();
                        Some((dir.code(Locale::English).to_string(), Some(to)))
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: world.title().to_string(),
            start: world.location(world.start()).map(|loc| loc.name().to_string()),
            locations,
        }
    }

    /// Render the pack as pretty-printed JSON.
    pub fn to_json(&self) -> WgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Feed the pack into a fresh [`WorldBuilder`].
    pub fn to_builder(&self) -> WgResult<WorldBuilder> {
        let mut builder = World::builder(self.title.clone());
        for loc in &self.locations {
            builder.add_location(loc.name.clone(), loc.description.clone())?;
        }

        for loc in &self.locations {
            for (key, target) in &loc.exits {
                let direction =
                    Direction::parse(key).ok_or_else(|| WgError::UnknownDirection {
                        location: loc.name.clone(),
                        direction: key.clone(),
                    })?;
                match target {
                    Some(to) => builder.connect(loc.name.clone(), direction, to.clone()),
                    None => builder.disconnect(loc.name.clone(), direction),
                };
            }
        }

        if let Some(start) = &self.start {
            builder.start_at(start.clone());
        }
        Ok(builder)
    }

    /// Build the world described by this pack.
    pub fn into_world(self) -> WgResult<World> {
        self.to_builder()?.build()
    }
}
