use comfy_table::{ContentArrangement, Table};
use wg_content::Pack;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Pack", "Title", "Locations", "Description"]);

    for pack in Pack::ALL {
        let world = pack.world().map_err(|e| format!("{pack}: {e}"))?;
        table.add_row(vec![
            pack.slug().to_string(),
            world.title().to_string(),
            world.len().to_string(),
            pack.summary().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
