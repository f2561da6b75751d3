//! Scoring module - line-clear points, level and fall speed
//!
//! Level is never stored on its own: it is always `score / 1000 + 1`. The fall
//! delay shrinks by a constant factor for every 1000-point milestone.

use crate::types::{INITIAL_FALL_DELAY_MS, LEVEL_SPEED_MULTIPLIER, LINE_SCORES, POINTS_PER_LEVEL};

/// Base points for a single lock that cleared `lines` rows
///
/// 0 for anything outside 1..=4.
pub fn base_points(lines: usize) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines],
        _ => 0,
    }
}

/// Points awarded for clearing `lines` rows at `level`
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    base_points(lines).saturating_mul(level)
}

/// Level derived from score (starts at 1)
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Number of 1000-point milestones reached
pub fn milestones(score: u32) -> u32 {
    score / POINTS_PER_LEVEL
}

/// Fall delay in milliseconds for the given score
///
/// `initial_ms * multiplier ^ milestones`, never below 1ms.
pub fn fall_delay_ms(score: u32, initial_ms: u64, multiplier: f64) -> u64 {
    let factor = multiplier.powi(milestones(score).min(i32::MAX as u32) as i32);
    ((initial_ms as f64 * factor).round() as u64).max(1)
}

/// Fall delay with the default constants
pub fn default_fall_delay_ms(score: u32) -> u64 {
    fall_delay_ms(score, INITIAL_FALL_DELAY_MS, LEVEL_SPEED_MULTIPLIER)
}
