//! Prompted checks: roll an actor's pool formula against a difficulty.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::config::RollConfig;
use crate::dice::{DicePool, PoolResult};
use crate::error::{MechError, MechResult};
use crate::formula::PoolFormula;

/// A request to roll a check for an actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRequest {
    /// Pool-size formula, e.g. `@dex + @athletics`.
    pub formula: String,
    /// What is being rolled, shown as "Rolling {label}".
    pub label: Option<String>,
    /// Override the configured default difficulty.
    pub difficulty: Option<i32>,
}

impl CheckRequest {
    /// Create a request for a formula.
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            ..Self::default()
        }
    }

    /// Build a request from an item's `system.formula`, labelled with its name.
    pub fn for_item(actor: &Actor, item_id: &str) -> MechResult<Self> {
        let item = actor
            .item(item_id)
            .ok_or_else(|| MechError::ItemNotFound(item_id.to_string()))?;
        let formula = item.formula().ok_or_else(|| {
            MechError::InvalidFormula(format!("item '{}' has no formula", item.name))
        })?;
        Ok(Self::new(formula).with_label(item.name.clone()))
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// The result of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Name of the actor who rolled.
    pub actor: String,
    /// What was rolled.
    pub label: Option<String>,
    /// The normalized formula.
    pub formula: String,
    /// The pool that was rolled.
    pub pool: DicePool,
    /// The resolved roll.
    pub result: PoolResult,
}

impl CheckResult {
    /// Flavor line for the roll, e.g. "Rolling Dexterity".
    pub fn flavor(&self) -> Option<String> {
        self.label.as_ref().map(|l| format!("Rolling {l}"))
    }
}

/// Roll a check: evaluate the formula against the actor's roll data, then
/// resolve a pool of that size.
pub fn perform_check<R: Rng + ?Sized>(
    actor: &Actor,
    request: &CheckRequest,
    config: &RollConfig,
    rng: &mut R,
) -> MechResult<CheckResult> {
    let formula = PoolFormula::parse(&request.formula)?;
    let size = formula.pool_size(&actor.roll_data())?;
    let difficulty = request.difficulty.unwrap_or(config.default_difficulty);
    let pool = DicePool::new(size, difficulty);

    tracing::debug!(actor = %actor.name, formula = %formula, %pool, "rolling check");
    let result = pool.roll(rng);

    Ok(CheckResult {
        actor: actor.name.clone(),
        label: request.label.clone(),
        formula: formula.to_string(),
        pool,
        result,
    })
}
