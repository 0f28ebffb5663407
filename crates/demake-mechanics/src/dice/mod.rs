//! Dice pools and rolling.
//!
//! Every pool is made of ten-sided dice. [`DicePool::roll`] takes any RNG so
//! callers can seed it; [`resolve`] draws from the thread-local generator.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieOutcome, PoolResult};

/// Number of faces on each die in a pool.
pub const D10_SIDES: u8 = 10;

/// Roll `size` d10s against `difficulty` using fresh thread-local entropy.
///
/// Each call is an independent draw.
pub fn resolve(size: u32, difficulty: i32) -> PoolResult {
    DicePool::new(size, difficulty).roll(&mut rand::rng())
}
