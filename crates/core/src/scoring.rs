//! Scoring module - classic line-clear scoring, leveling, and gravity.
//!
//! One consistent table: the classic {40, 100, 300, 1200} base points per
//! 1..4 cleared lines, multiplied by the current level. Levels start at 1
//! and advance every ten cleared lines; gravity speeds up 100ms per level
//! down to a 100ms floor.

use blockfall_types::{
    GRAVITY_BASE_MS, GRAVITY_MIN_MS, GRAVITY_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS,
};

/// Points awarded for clearing `lines` rows at `level`.
///
/// Zero lines award zero points; counts above four cannot occur for a
/// tetromino and also award zero.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Level derived from the total cleared-line count. Starts at 1.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level: 1000ms at level 1, 100ms faster per
/// level, floored at 100ms.
pub fn gravity_interval_ms(level: u32) -> u32 {
    GRAVITY_BASE_MS
        .saturating_sub(level.saturating_sub(1) * GRAVITY_STEP_MS)
        .max(GRAVITY_MIN_MS)
}

/// Points for player-commanded descent: 1 per soft-dropped cell, 3 per
/// hard-dropped cell. Gravity descent scores nothing.
pub fn drop_points(cells: u32, hard: bool) -> u32 {
    if hard {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}
