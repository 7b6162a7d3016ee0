use std::path::Path;

use colored::Colorize;
use wg_core::Locale;

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load_world(None, Some(file))?;

    let isolated = world
        .locations()
        .filter(|loc| {
            loc.id() != world.start()
                && !world
                    .locations()
                    .any(|other| other.exits().any(|(_, target)| target == loc.id()))
        })
        .count();

    println!(
        "  {} {}: {} locations, directions in use: {}",
        "ok".green().bold(),
        world.title(),
        world.len(),
        world.valid_direction_codes(Locale::English)
    );
    if isolated > 0 {
        println!(
            "  {} {isolated} location(s) cannot be reached by any exit",
            "note".yellow().bold()
        );
    }
    println!("  All checks passed.");

    Ok(())
}
