//! Character sheet context.
//!
//! [`SheetContext::build`] gathers everything a sheet view needs from an
//! actor snapshot: derived data, roll data, items grouped by declared type,
//! and active effects grouped by category.

pub mod effects;

pub use effects::EffectCategories;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::actor::{Actor, ActorKind, DerivedData, Item, ItemKind, RollData};

/// Number of spell levels (0 through 9).
pub const SPELL_LEVELS: usize = 10;

/// Everything a character sheet renders.
#[derive(Debug, Clone, Serialize)]
pub struct SheetContext {
    /// Actor name.
    pub name: String,
    /// Actor type.
    pub kind: ActorKind,
    /// Copy of the actor's system data.
    pub system: Map<String, Value>,
    /// Derived values (labelled abilities, essence).
    pub derived: DerivedData,
    /// Roll data for inline formulas.
    pub roll_data: RollData,
    /// Items of type `item`.
    pub gear: Vec<Item>,
    /// Items of type `feature`.
    pub features: Vec<Item>,
    /// Items of type `spell`, indexed by spell level.
    pub spells: [Vec<Item>; SPELL_LEVELS],
    /// Active effects by category.
    pub effects: EffectCategories,
}

impl SheetContext {
    /// Build the sheet context for an actor.
    pub fn build(actor: &Actor) -> Self {
        let (gear, features, spells) = bucket_items(&actor.items);
        Self {
            name: actor.name.clone(),
            kind: actor.kind,
            system: actor.system.clone(),
            derived: actor.prepare_derived_data(),
            roll_data: actor.roll_data(),
            gear,
            features,
            spells,
            effects: EffectCategories::from_effects(&actor.effects),
        }
    }

    /// Spell levels that have at least one spell, with their spells.
    pub fn known_spell_levels(&self) -> impl Iterator<Item = (usize, &[Item])> {
        self.spells
            .iter()
            .enumerate()
            .filter(|(_, spells)| !spells.is_empty())
            .map(|(level, spells)| (level, spells.as_slice()))
    }
}

/// Group items by declared type.
///
/// Every kept item gets its image filled in. Spells without a usable level
/// are dropped.
fn bucket_items(items: &[Item]) -> (Vec<Item>, Vec<Item>, [Vec<Item>; SPELL_LEVELS]) {
    let mut gear = Vec::new();
    let mut features = Vec::new();
    let mut spells: [Vec<Item>; SPELL_LEVELS] = Default::default();

    for item in items {
        let mut item = item.clone();
        item.img = Some(item.image().to_string());

        match item.kind {
            ItemKind::Item => gear.push(item),
            ItemKind::Feature => features.push(item),
            ItemKind::Spell => match item
                .spell_level()
                .and_then(|level| usize::try_from(level).ok())
                .filter(|level| *level < SPELL_LEVELS)
            {
                Some(level) => spells[level].push(item),
                None => tracing::warn!(
                    item = %item.name,
                    level = ?item.spell_level(),
                    "spell has no usable level; leaving it off the sheet"
                ),
            },
            ItemKind::Other => {}
        }
    }

    (gear, features, spells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::item::DEFAULT_ITEM_IMAGE;

    fn actor() -> Actor {
        Actor::from_json(
            r#"{
                "name": "Kael",
                "type": "character",
                "system": {
                    "abilities": { "str": { "value": 4 } },
                    "essence": { "value": 2 }
                },
                "items": [
                    { "_id": "i1", "name": "Sword", "type": "item", "img": "sword.png" },
                    { "_id": "i2", "name": "Rope", "type": "item" },
                    { "_id": "f1", "name": "Iron Will", "type": "feature" },
                    { "_id": "s1", "name": "Spark", "type": "spell", "system": { "spellLevel": 0 } },
                    { "_id": "s2", "name": "Storm", "type": "spell", "system": { "spellLevel": 9 } },
                    { "_id": "s3", "name": "Lost", "type": "spell" },
                    { "_id": "s4", "name": "Too High", "type": "spell", "system": { "spellLevel": 12 } },
                    { "_id": "s5", "name": "Negative", "type": "spell", "system": { "spellLevel": -1 } },
                    { "_id": "o1", "name": "Horse", "type": "mount" }
                ],
                "effects": [
                    { "label": "Haste", "duration": { "rounds": 2 } },
                    { "label": "Cursed", "disabled": true }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn buckets_gear_and_features() {
        let ctx = SheetContext::build(&actor());
        let gear: Vec<&str> = ctx.gear.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(gear, ["Sword", "Rope"]);
        assert_eq!(ctx.features.len(), 1);
        assert_eq!(ctx.features[0].name, "Iron Will");
    }

    #[test]
    fn fills_default_image() {
        let ctx = SheetContext::build(&actor());
        assert_eq!(ctx.gear[0].img.as_deref(), Some("sword.png"));
        assert_eq!(ctx.gear[1].img.as_deref(), Some(DEFAULT_ITEM_IMAGE));
    }

    #[test]
    fn buckets_spells_by_level() {
        let ctx = SheetContext::build(&actor());
        assert_eq!(ctx.spells[0].len(), 1);
        assert_eq!(ctx.spells[0][0].name, "Spark");
        assert_eq!(ctx.spells[9][0].name, "Storm");
        let total: usize = ctx.spells.iter().map(Vec::len).sum();
        assert_eq!(total, 2);
        let levels: Vec<usize> = ctx.known_spell_levels().map(|(l, _)| l).collect();
        assert_eq!(levels, [0, 9]);
    }

    #[test]
    fn carries_derived_and_roll_data() {
        let ctx = SheetContext::build(&actor());
        assert_eq!(ctx.kind, ActorKind::Character);
        assert_eq!(ctx.derived.essence, 2.0);
        assert_eq!(ctx.derived.abilities[0].label, "Strength");
        assert_eq!(ctx.roll_data.get("str"), Some(4.0));
        assert!(ctx.system.contains_key("abilities"));
    }

    #[test]
    fn categorizes_effects() {
        let ctx = SheetContext::build(&actor());
        assert_eq!(ctx.effects.temporary.len(), 1);
        assert_eq!(ctx.effects.inactive.len(), 1);
        assert!(ctx.effects.passive.is_empty());
    }

    #[test]
    fn antagonist_gets_items_but_no_ability_labels() {
        let actor = Actor::from_json(
            r#"{
                "name": "Ghoul",
                "type": "antagonist",
                "system": { "abilities": { "str": { "value": 3 } } },
                "items": [{ "name": "Claws", "type": "feature" }]
            }"#,
        )
        .unwrap();
        let ctx = SheetContext::build(&actor);
        assert_eq!(ctx.features.len(), 1);
        assert!(ctx.derived.abilities.is_empty());
    }
}
