use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use demake_mechanics::actor::ActiveEffect;
use demake_mechanics::{Item, SheetContext};

pub fn run(actor_path: &Path, json: bool) -> Result<(), String> {
    let actor = super::load_actor(actor_path)?;
    let ctx = SheetContext::build(&actor);

    if json {
        println!("{}", super::to_json(&ctx)?);
        return Ok(());
    }

    println!("  {} [{}]", ctx.name.bold(), ctx.kind.to_string().dimmed());
    println!("  essence:   {}", ctx.derived.essence);
    println!();

    if !ctx.derived.abilities.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Ability", "Abbr.", "Score"]);
        for ability in &ctx.derived.abilities {
            table.add_row(vec![
                ability.label.clone(),
                ability.abbreviation.clone(),
                ability.value.to_string(),
            ]);
        }
        println!("{table}");
        println!();
    }

    print_items("Gear", &ctx.gear);
    print_items("Features", &ctx.features);
    for (level, spells) in ctx.known_spell_levels() {
        print_items(&format!("Spells (level {level})"), spells);
    }

    print_effects("Temporary effects", &ctx.effects.temporary);
    print_effects("Passive effects", &ctx.effects.passive);
    print_effects("Inactive effects", &ctx.effects.inactive);

    Ok(())
}

fn print_items(title: &str, items: &[Item]) {
    if items.is_empty() {
        return;
    }
    println!("  {}", title.bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Image", "Formula"]);
    for item in items {
        table.add_row(vec![item.name.as_str(), item.image(), item.formula().unwrap_or("—")]);
    }
    println!("{table}");
    println!();
}

fn print_effects(title: &str, effects: &[ActiveEffect]) {
    if effects.is_empty() {
        return;
    }
    let labels: Vec<&str> = effects.iter().map(|e| e.label.as_str()).collect();
    println!("  {}: {}", title.bold(), labels.join(", "));
}
