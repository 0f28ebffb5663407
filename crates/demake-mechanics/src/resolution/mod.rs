//! Interpreting a rolled pool.
//!
//! Pools resolve by counting successes against a difficulty: tens always
//! succeed, ones always subtract, and the sign of the net count decides
//! between success, failure, and a botch.

pub mod count;

pub use count::{BOTCH_FACE, CRITICAL_FACE, contribution, count_successes};

use serde::{Deserialize, Serialize};

/// The outcome of resolving a dice pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// At least one net success.
    Success,
    /// Exactly zero net successes.
    Fail,
    /// Negative net successes: more ones than successes.
    Botch,
}

impl Outcome {
    /// Classify a net success count.
    pub fn classify(success_count: i64) -> Self {
        match success_count {
            n if n > 0 => Self::Success,
            0 => Self::Fail,
            _ => Self::Botch,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Fail => write!(f, "Fail"),
            Self::Botch => write!(f, "Botch"),
        }
    }
}
