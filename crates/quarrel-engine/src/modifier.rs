//! Shared modifier arithmetic.
//!
//! Two leaf helpers used by every resolver. Both are total functions over
//! their input domain; all arithmetic is exact integer math with no wrap.

/// Derive the signed modifier from a raw ability score:
/// `floor(score / 2) - 5`.
///
/// A score of 0 yields -5, 10 yields 0, 18 yields +4.
pub fn ability_modifier(score: u32) -> i32 {
    (score / 2) as i32 - 5
}

/// Add a signed delta to a die roll, flooring the result at 0.
///
/// This is the check-level clamp: a negative ability modifier cannot drag
/// the roll-plus-modifier contribution below zero, while skill ranks and
/// feat bonuses are layered on afterwards unclamped.
pub fn clamped_add(roll: u32, delta: i32) -> u32 {
    (i64::from(roll) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32
}
