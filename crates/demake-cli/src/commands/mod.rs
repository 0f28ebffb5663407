pub mod abilities;
pub mod check;
pub mod roll;
pub mod sheet;

use std::path::Path;

use colored::{ColoredString, Colorize};
use demake_mechanics::{Actor, Outcome, PoolResult, RollConfig};

/// Read and decode an actor snapshot.
fn load_actor(path: &Path) -> Result<Actor, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let actor = Actor::from_json(&json).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), actor = %actor.name, "loaded actor");
    Ok(actor)
}

/// Roll config from CLI flags.
fn roll_config(seed: Option<u64>) -> RollConfig {
    match seed {
        Some(seed) => RollConfig::default().with_seed(seed),
        None => RollConfig::default(),
    }
}

fn colorize_outcome(outcome: Outcome) -> ColoredString {
    let text = outcome.to_string();
    match outcome {
        Outcome::Success => text.green().bold(),
        Outcome::Fail => text.yellow(),
        Outcome::Botch => text.red().bold(),
    }
}

/// Print the dice, net successes, and outcome of a roll.
fn print_pool_result(result: &PoolResult) {
    let faces: Vec<String> = result
        .dice
        .iter()
        .map(|d| {
            let face = d.face.to_string();
            if d.is_critical() {
                face.green().to_string()
            } else if d.is_botch() {
                face.red().to_string()
            } else {
                face
            }
        })
        .collect();
    println!("  dice:      [{}]", faces.join(", "));
    println!("  successes: {}", result.success_count);
    println!("  outcome:   {}", colorize_outcome(result.outcome));
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}
