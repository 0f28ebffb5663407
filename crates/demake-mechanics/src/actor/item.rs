//! Embedded items and active effects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::roll_data::numeric;

/// Image shown for items that do not carry their own.
pub const DEFAULT_ITEM_IMAGE: &str = "icons/svg/mystery-man.svg";

/// The declared type of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Carried equipment.
    Item,
    /// A feature, merit, or other permanent trait.
    Feature,
    /// A spell, bucketed by `system.spellLevel`.
    Spell,
    /// Any type the sheet does not display.
    #[serde(other)]
    Other,
}

/// An item embedded in an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Image path, if set.
    #[serde(default)]
    pub img: Option<String>,
    /// System data as stored on the document.
    #[serde(default)]
    pub system: Map<String, Value>,
}

impl Item {
    /// The image path, falling back to [`DEFAULT_ITEM_IMAGE`].
    pub fn image(&self) -> &str {
        match self.img.as_deref() {
            Some(img) if !img.is_empty() => img,
            _ => DEFAULT_ITEM_IMAGE,
        }
    }

    /// Spell level from `system.spellLevel`, if present and a whole number.
    pub fn spell_level(&self) -> Option<i64> {
        self.system
            .get("spellLevel")
            .and_then(numeric)
            .filter(|level| level.fract() == 0.0)
            .map(|level| level as i64)
    }

    /// Pool formula from `system.formula`, if present.
    pub fn formula(&self) -> Option<&str> {
        self.system
            .get("formula")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

/// How long a temporary effect lasts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDuration {
    /// Duration in combat rounds.
    #[serde(default)]
    pub rounds: Option<u32>,
    /// Duration in combat turns.
    #[serde(default)]
    pub turns: Option<u32>,
    /// Duration in world seconds.
    #[serde(default)]
    pub seconds: Option<u32>,
}

impl EffectDuration {
    /// Returns true if any component of the duration is non-zero.
    pub fn is_limited(&self) -> bool {
        [self.rounds, self.turns, self.seconds]
            .into_iter()
            .flatten()
            .any(|n| n > 0)
    }
}

/// An active effect embedded in an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Display label.
    #[serde(alias = "name")]
    pub label: String,
    /// Whether the effect is switched off.
    #[serde(default)]
    pub disabled: bool,
    /// Duration, for temporary effects.
    #[serde(default)]
    pub duration: Option<EffectDuration>,
}

impl ActiveEffect {
    /// Returns true if the effect expires.
    pub fn is_temporary(&self) -> bool {
        self.duration.as_ref().is_some_and(EffectDuration::is_limited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: &str) -> Item {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn unknown_item_type_is_other() {
        let i = item(r#"{"name": "Horse", "type": "mount"}"#);
        assert_eq!(i.kind, ItemKind::Other);
    }

    #[test]
    fn default_image() {
        let i = item(r#"{"name": "Rope", "type": "item"}"#);
        assert_eq!(i.image(), DEFAULT_ITEM_IMAGE);
        let i = item(r#"{"name": "Rope", "type": "item", "img": ""}"#);
        assert_eq!(i.image(), DEFAULT_ITEM_IMAGE);
        let i = item(r#"{"name": "Rope", "type": "item", "img": "rope.png"}"#);
        assert_eq!(i.image(), "rope.png");
    }

    #[test]
    fn spell_level() {
        let i = item(r#"{"name": "Bolt", "type": "spell", "system": {"spellLevel": 3}}"#);
        assert_eq!(i.spell_level(), Some(3));
        let i = item(r#"{"name": "Bolt", "type": "spell", "system": {"spellLevel": "x"}}"#);
        assert_eq!(i.spell_level(), None);
        let i = item(r#"{"name": "Bolt", "type": "spell", "system": {"spellLevel": 1.5}}"#);
        assert_eq!(i.spell_level(), None);
    }

    #[test]
    fn formula() {
        let i = item(r#"{"name": "Bow", "type": "item", "system": {"formula": " @dex + 2 "}}"#);
        assert_eq!(i.formula(), Some("@dex + 2"));
        let i = item(r#"{"name": "Bow", "type": "item", "system": {"formula": ""}}"#);
        assert_eq!(i.formula(), None);
    }

    #[test]
    fn effect_temporary() {
        let e: ActiveEffect =
            serde_json::from_str(r#"{"label": "Haste", "duration": {"rounds": 3}}"#).unwrap();
        assert!(e.is_temporary());
        let e: ActiveEffect =
            serde_json::from_str(r#"{"name": "Blessed", "duration": {"rounds": 0}}"#).unwrap();
        assert_eq!(e.label, "Blessed");
        assert!(!e.is_temporary());
    }
}
