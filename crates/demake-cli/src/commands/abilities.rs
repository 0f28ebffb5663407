use comfy_table::{ContentArrangement, Table};
use demake_mechanics::ABILITIES;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Ability", "Abbr."]);

    for ability in ABILITIES {
        table.add_row(vec![ability.key, ability.label, ability.abbreviation]);
    }

    println!("{table}");
    Ok(())
}
