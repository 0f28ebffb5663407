//! Actor snapshots and the data derived from them.
//!
//! An [`Actor`] is a plain JSON document: a name, a type, a free-form
//! `system` object, and embedded items and active effects. Derived data and
//! roll data are computed from it on demand and never written back.

pub mod item;
pub mod roll_data;

pub use item::{ActiveEffect, EffectDuration, Item, ItemKind};
pub use roll_data::RollData;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config;
use crate::error::MechResult;

/// The type of an actor document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A player character.
    Character,
    /// A non-player opponent.
    Antagonist,
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Antagonist => write!(f, "antagonist"),
        }
    }
}

/// A snapshot of an actor document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Actor type.
    #[serde(rename = "type")]
    pub kind: ActorKind,
    /// System data as stored on the document.
    #[serde(default)]
    pub system: Map<String, Value>,
    /// Embedded items.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Embedded active effects.
    #[serde(default)]
    pub effects: Vec<ActiveEffect>,
}

/// An ability score with its display labels attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityView {
    /// Key in the actor's `system.abilities`.
    pub key: String,
    /// Full label, or the key when the ability is not in the system table.
    pub label: String,
    /// Short label, or the key when the ability is not in the system table.
    pub abbreviation: String,
    /// The score.
    pub value: f64,
}

/// Data computed from an actor snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedData {
    /// Labelled ability scores (characters only), in sheet order.
    pub abilities: Vec<AbilityView>,
    /// Current essence, or 0 when the actor has none.
    pub essence: f64,
}

impl Actor {
    /// Decode an actor snapshot from JSON.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find an embedded item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Compute derived data for this actor.
    pub fn prepare_derived_data(&self) -> DerivedData {
        let abilities = match self.kind {
            ActorKind::Character => self.labelled_abilities(),
            ActorKind::Antagonist => Vec::new(),
        };
        DerivedData {
            abilities,
            essence: self.essence(),
        }
    }

    /// The flat name-to-number map that pool formulas are evaluated against.
    pub fn roll_data(&self) -> RollData {
        let mut data = RollData::from_system(&self.system);
        for (key, value) in self.ability_scores() {
            data.insert(key, value);
        }
        data.insert("essence", self.essence());
        data
    }

    /// Current essence: `system.essence.value` for characters,
    /// `system.base.essence.value` for antagonists.
    pub fn essence(&self) -> f64 {
        let path: &[&str] = match self.kind {
            ActorKind::Character => &["essence", "value"],
            ActorKind::Antagonist => &["base", "essence", "value"],
        };
        lookup(&self.system, path)
            .and_then(roll_data::numeric)
            .unwrap_or(0.0)
    }

    /// Raw ability scores from `system.abilities`, keyed by ability key.
    fn ability_scores(&self) -> Vec<(String, f64)> {
        let Some(Value::Object(abilities)) = self.system.get("abilities") else {
            return Vec::new();
        };
        abilities
            .iter()
            .filter_map(|(key, value)| {
                let score = match value {
                    Value::Object(obj) => obj.get("value").and_then(roll_data::numeric),
                    other => roll_data::numeric(other),
                }?;
                Some((key.clone(), score))
            })
            .collect()
    }

    fn labelled_abilities(&self) -> Vec<AbilityView> {
        let mut views: Vec<AbilityView> = self
            .ability_scores()
            .into_iter()
            .map(|(key, value)| match config::ability(&key) {
                Some(ability) => AbilityView {
                    label: ability.label.to_string(),
                    abbreviation: ability.abbreviation.to_string(),
                    key,
                    value,
                },
                None => AbilityView {
                    label: key.clone(),
                    abbreviation: key.clone(),
                    key,
                    value,
                },
            })
            .collect();
        views.sort_by_key(|v| {
            let position = config::ABILITIES
                .iter()
                .position(|a| a.key == v.key.to_lowercase())
                .unwrap_or(config::ABILITIES.len());
            (position, v.key.clone())
        });
        views
    }
}

/// Follow a path of object keys into a JSON map.
fn lookup<'a>(map: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = map.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}
