//! Roll results and aggregation.

use serde::{Deserialize, Serialize};

use crate::resolution::{self, Outcome};

/// The face shown by a single rolled d10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieOutcome {
    /// The value rolled (1 to 10).
    pub face: u8,
}

impl DieOutcome {
    /// This die's contribution to the success count at the given difficulty.
    pub fn contribution(self, difficulty: i32) -> i32 {
        resolution::contribution(self.face, difficulty)
    }

    /// Returns true for a natural ten.
    pub fn is_critical(self) -> bool {
        self.face == resolution::CRITICAL_FACE
    }

    /// Returns true for a natural one.
    pub fn is_botch(self) -> bool {
        self.face == resolution::BOTCH_FACE
    }
}

/// The resolved result of rolling a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolResult {
    /// Net successes; negative when ones outnumber successes.
    pub success_count: i64,
    /// Classification of `success_count`.
    pub outcome: Outcome,
    /// Individual dice, in the order they were rolled.
    pub dice: Vec<DieOutcome>,
}

impl PoolResult {
    /// Tally a known sequence of faces against a difficulty.
    pub fn from_faces(faces: impl IntoIterator<Item = u8>, difficulty: i32) -> Self {
        let dice: Vec<DieOutcome> = faces.into_iter().map(|face| DieOutcome { face }).collect();
        let success_count = resolution::count_successes(dice.iter().map(|d| d.face), difficulty);
        Self {
            success_count,
            outcome: Outcome::classify(success_count),
            dice,
        }
    }

    /// The rolled faces, in order.
    pub fn faces(&self) -> Vec<u8> {
        self.dice.iter().map(|d| d.face).collect()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for PoolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.dice.iter().map(|d| d.face.to_string()).collect();
        write!(
            f,
            "[{}] = {} ({})",
            faces.join(", "),
            self.success_count,
            self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_tens_and_ones_cancel() {
        let r = PoolResult::from_faces([10, 6, 3, 1, 1], 6);
        assert_eq!(r.success_count, 0);
        assert_eq!(r.outcome, Outcome::Fail);
        assert_eq!(r.faces(), vec![10, 6, 3, 1, 1]);
    }

    #[test]
    fn scenario_high_difficulty_success() {
        let r = PoolResult::from_faces([9, 10, 2], 8);
        assert_eq!(r.success_count, 2);
        assert_eq!(r.outcome, Outcome::Success);
    }

    #[test]
    fn scenario_all_ones_botch() {
        let r = PoolResult::from_faces([1, 1], 4);
        assert_eq!(r.success_count, -2);
        assert_eq!(r.outcome, Outcome::Botch);
    }

    #[test]
    fn single_one_botches() {
        let r = PoolResult::from_faces([1], 6);
        assert_eq!(r.success_count, -1);
        assert_eq!(r.outcome, Outcome::Botch);
    }

    #[test]
    fn empty_result_fails() {
        let r = PoolResult::from_faces(Vec::new(), 6);
        assert_eq!(r.success_count, 0);
        assert_eq!(r.outcome, Outcome::Fail);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn display() {
        let r = PoolResult::from_faces([9, 10, 2], 8);
        assert_eq!(r.to_string(), "[9, 10, 2] = 2 (Success)");
    }

    #[test]
    fn serializes_for_rendering() {
        let r = PoolResult::from_faces([1, 1], 4);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["success_count"], -2);
        assert_eq!(json["outcome"], "botch");
        assert_eq!(json["dice"][0]["face"], 1);
    }
}
