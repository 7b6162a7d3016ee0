pub mod check;
pub mod packs;
pub mod play;
pub mod rooms;

use std::path::Path;

use wg_content::Pack;
use wg_core::{World, WorldPack};

/// Load a world from a JSON file, or from a built-in pack otherwise.
pub fn load_world(pack: Option<Pack>, file: Option<&Path>) -> Result<World, String> {
    match file {
        Some(path) => read_pack(path)?.into_world().map_err(|e| e.to_string()),
        None => pack.unwrap_or_default().world().map_err(|e| e.to_string()),
    }
}

/// Read and parse a JSON world file.
fn read_pack(path: &Path) -> Result<WorldPack, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    WorldPack::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}
