//! Dice pool construction and rolling.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::D10_SIDES;
use super::roll::PoolResult;
use crate::error::{MechError, MechResult};

/// A pool of d10s rolled together against one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    /// How many dice to roll.
    pub size: u32,
    /// Faces at or above this value count as successes.
    pub difficulty: i32,
}

impl DicePool {
    /// Create a pool of `size` dice at the given difficulty.
    pub fn new(size: u32, difficulty: i32) -> Self {
        Self { size, difficulty }
    }

    /// Create a pool from an unchecked size, rejecting negative values.
    pub fn checked(size: i64, difficulty: i32) -> MechResult<Self> {
        if size < 0 {
            return Err(MechError::InvalidPool(format!(
                "pool size cannot be negative (got {size})"
            )));
        }
        let size = u32::try_from(size)
            .map_err(|_| MechError::InvalidPool(format!("pool size {size} is too large")))?;
        Ok(Self::new(size, difficulty))
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Roll every die in the pool and resolve the result.
    ///
    /// Always rolls exactly `size` dice; there is no early exit.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> PoolResult {
        let faces: Vec<u8> = (0..self.size)
            .map(|_| rng.random_range(1..=D10_SIDES))
            .collect();
        let result = PoolResult::from_faces(faces, self.difficulty);
        tracing::debug!(
            size = self.size,
            difficulty = self.difficulty,
            successes = result.success_count,
            outcome = %result.outcome,
            "resolved dice pool"
        );
        result
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d10 @ difficulty {}", self.size, self.difficulty)
    }
}
