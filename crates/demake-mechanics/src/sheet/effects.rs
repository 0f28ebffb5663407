//! Active effect categories shown on the sheet.

use serde::Serialize;

use crate::actor::ActiveEffect;

/// Active effects split by how the sheet lists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectCategories {
    /// Enabled effects with a limited duration.
    pub temporary: Vec<ActiveEffect>,
    /// Enabled effects without a duration.
    pub passive: Vec<ActiveEffect>,
    /// Disabled effects.
    pub inactive: Vec<ActiveEffect>,
}

impl EffectCategories {
    /// Sort effects into categories. Disabled wins over temporary.
    pub fn from_effects<'a>(effects: impl IntoIterator<Item = &'a ActiveEffect>) -> Self {
        let mut categories = Self::default();
        for effect in effects {
            let bucket = if effect.disabled {
                &mut categories.inactive
            } else if effect.is_temporary() {
                &mut categories.temporary
            } else {
                &mut categories.passive
            };
            bucket.push(effect.clone());
        }
        categories
    }

    /// Total number of effects across all categories.
    pub fn len(&self) -> usize {
        self.temporary.len() + self.passive.len() + self.inactive.len()
    }

    /// Returns true if there are no effects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
