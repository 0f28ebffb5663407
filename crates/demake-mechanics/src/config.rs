//! Static system tables and roll configuration.

use std::collections::HashMap;
use std::sync::LazyLock;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// An ability score known to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ability {
    /// Key used in actor data (`str`, `dex`, ...).
    pub key: &'static str,
    /// Full display label.
    pub label: &'static str,
    /// Short display label.
    pub abbreviation: &'static str,
}

/// The abilities used within the system, in sheet order.
pub static ABILITIES: &[Ability] = &[
    Ability {
        key: "str",
        label: "Strength",
        abbreviation: "Str",
    },
    Ability {
        key: "dex",
        label: "Dexterity",
        abbreviation: "Dex",
    },
    Ability {
        key: "con",
        label: "Constitution",
        abbreviation: "Con",
    },
    Ability {
        key: "int",
        label: "Intelligence",
        abbreviation: "Int",
    },
    Ability {
        key: "wis",
        label: "Wisdom",
        abbreviation: "Wis",
    },
    Ability {
        key: "cha",
        label: "Charisma",
        abbreviation: "Cha",
    },
];

static ABILITY_INDEX: LazyLock<HashMap<&'static str, &'static Ability>> =
    LazyLock::new(|| ABILITIES.iter().map(|a| (a.key, a)).collect());

/// Look up an ability by key (case-insensitive).
pub fn ability(key: &str) -> Option<&'static Ability> {
    ABILITY_INDEX
        .get(key.to_lowercase().as_str())
        .copied()
}

/// Difficulty used when a roll does not ask for one.
pub const DEFAULT_DIFFICULTY: i32 = 6;

/// Configuration for rolling checks.
#[derive(Debug, Clone)]
pub struct RollConfig {
    /// RNG seed for reproducible rolls; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Difficulty applied when a request leaves it unset.
    pub default_difficulty: i32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default difficulty.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Build the RNG described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
