//! Success counting for d10 pools.
//!
//! Each die is scored on its own; the net count is the plain sum of the
//! per-die contributions.

/// A natural ten: always one success, whatever the difficulty.
pub const CRITICAL_FACE: u8 = 10;

/// A natural one: always subtracts one success.
pub const BOTCH_FACE: u8 = 1;

/// The contribution of a single die face to the success count.
///
/// Ones are checked before the difficulty, so a one still subtracts when the
/// difficulty is 1 or lower.
pub fn contribution(face: u8, difficulty: i32) -> i32 {
    if face == CRITICAL_FACE {
        1
    } else if face == BOTCH_FACE {
        -1
    } else if i32::from(face) >= difficulty {
        1
    } else {
        0
    }
}

/// Net successes for a sequence of faces.
///
/// Summed in `i64` so that pools of up to `u32::MAX` dice cannot overflow.
pub fn count_successes(faces: impl IntoIterator<Item = u8>, difficulty: i32) -> i64 {
    faces
        .into_iter()
        .map(|face| i64::from(contribution(face, difficulty)))
        .sum()
}
