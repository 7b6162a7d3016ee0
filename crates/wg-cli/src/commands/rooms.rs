use comfy_table::{ContentArrangement, Table};
use wg_core::{Locale, World, WorldPack};

pub fn run(world: &World, lang: Locale) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Exits", "Description"]);

    for loc in world.locations() {
        let exits: Vec<String> = loc
            .exits()
            .filter_map(|(dir, target)| {
                world
                    .location(target)
                    .map(|t| format!("{} -> {}", dir.code(lang), t.name()))
            })
            .collect();
        let exits = if exits.is_empty() {
            "—".to_string()
        } else {
            exits.join("\n")
        };

        let marker = if loc.id() == world.start() { " *" } else { "" };
        table.add_row(vec![
            loc.id().index().to_string(),
            format!("{}{marker}", loc.name()),
            exits,
            loc.description().trim().to_string(),
        ]);
    }

    println!("  {}", world.title());
    println!("{table}");
    println!();
    println!(
        "  {} locations, * marks the start. Directions in use: {}",
        world.len(),
        world.valid_direction_codes(lang)
    );

    Ok(())
}

/// Print `world` as a JSON world file that `--world` can load back.
pub fn export(world: &World) -> Result<(), String> {
    let json = WorldPack::from_world(world)
        .to_json()
        .map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
