//! Game mechanics for the Demake system.
//!
//! Provides World of Darkness style d10 pool resolution, actor data
//! derivation, pool formulas, and character sheet contexts with items
//! grouped by type.

pub mod actor;
pub mod check;
pub mod config;
pub mod dice;
pub mod error;
pub mod formula;
pub mod resolution;
pub mod sheet;

pub use actor::{Actor, ActorKind, DerivedData, Item, ItemKind, RollData};
pub use check::{CheckRequest, CheckResult, perform_check};
pub use config::{ABILITIES, Ability, RollConfig};
pub use dice::{DicePool, DieOutcome, PoolResult, resolve};
pub use error::{MechError, MechResult};
pub use formula::PoolFormula;
pub use resolution::Outcome;
pub use sheet::SheetContext;
