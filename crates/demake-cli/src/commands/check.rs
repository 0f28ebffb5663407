use std::path::Path;

use colored::Colorize;
use demake_mechanics::{CheckRequest, perform_check};

/// Flags for `demake check`.
pub struct CheckArgs {
    pub formula: Option<String>,
    pub item: Option<String>,
    pub label: Option<String>,
    pub difficulty: Option<i32>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(actor_path: &Path, args: CheckArgs) -> Result<(), String> {
    let actor = super::load_actor(actor_path)?;

    let mut request = match (&args.item, args.formula) {
        (Some(item_id), _) => {
            CheckRequest::for_item(&actor, item_id).map_err(|e| e.to_string())?
        }
        (None, Some(formula)) => CheckRequest::new(formula),
        (None, None) => return Err("either a formula or --item is required".into()),
    };
    if let Some(label) = args.label {
        request = request.with_label(label);
    }
    if let Some(difficulty) = args.difficulty {
        request = request.with_difficulty(difficulty);
    }

    let config = super::roll_config(args.seed);
    let mut rng = config.rng();
    let check = perform_check(&actor, &request, &config, &mut rng).map_err(|e| e.to_string())?;

    if args.json {
        println!("{}", super::to_json(&check)?);
        return Ok(());
    }

    println!("  {}", check.actor.bold());
    if let Some(flavor) = check.flavor() {
        println!("  {}", flavor.dimmed());
    }
    println!("  pool:      {} = {}", check.formula, check.pool);
    super::print_pool_result(&check.result);
    Ok(())
}
