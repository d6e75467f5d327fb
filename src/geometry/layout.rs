//! Size, radius and index schemes shared by the variant builders.
//!
//! Everything here is a pure function of `(target_size, n_surrounds, aspect_ratio)`.
//! The index schemes encode where targets must sit so that they land on the intended
//! polarity; the variant builders and the mask compositor rely on them agreeing exactly.

use crate::foundation::core::{Size, pixel_shape};
use crate::foundation::error::{StimError, StimResult};

/// Width-to-height ratio of every canonical stimulus.
pub const ASPECT_RATIO: f64 = 2.0;

/// Number of units (targets, rings, checks) along the canonical height.
pub fn units_per_side(n_surrounds: usize) -> usize {
    2 * n_surrounds + 1
}

/// Canonical physical size: `height = target_size * (2n + 1)`, `width = height * aspect_ratio`.
pub fn visual_size(target_size: f64, n_surrounds: usize, aspect_ratio: f64) -> Size {
    let height = target_size * units_per_side(n_surrounds) as f64;
    Size::new(height * aspect_ratio, height)
}

/// Size of one half (left or right) of the canonical stimulus.
pub fn half_visual_size(target_size: f64, n_surrounds: usize) -> Size {
    let full = visual_size(target_size, n_surrounds, ASPECT_RATIO);
    Size::new(full.width / 2.0, full.height)
}

/// Left and right halves of `visual_size` that tile its pixel grid exactly at `ppd`.
///
/// Each half is sized from whole pixel columns, so an odd column count puts the extra
/// column on the right instead of rounding both halves up.
pub fn split_visual_size(visual_size: Size, ppd: f64) -> StimResult<[Size; 2]> {
    let (rows, cols) = pixel_shape(visual_size, ppd)?;
    let left = cols / 2;
    let height = rows as f64 / ppd;
    Ok([
        Size::new(left as f64 / ppd, height),
        Size::new((cols - left) as f64 / ppd, height),
    ])
}

/// Outer radii of `2n + 1` nested frames; the i-th radius is `(i + 1) * target_size / 2`.
pub fn radii(target_size: f64, n_surrounds: usize) -> Vec<f64> {
    (0..units_per_side(n_surrounds))
        .map(|i| (i + 1) as f64 * target_size / 2.0)
        .collect()
}

/// Every other radius starting at the first: frames as wide as a target.
pub fn coarse_radii(target_size: f64, n_surrounds: usize) -> Vec<f64> {
    radii(target_size, n_surrounds).into_iter().step_by(2).collect()
}

/// Target column pair `(left_board_col, right_board_col)` for one context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnPair {
    /// Target column on the left board.
    pub left: usize,
    /// Target column on the right board.
    pub right: usize,
}

/// Target columns in a `(2n + 1) x (4n + 2)` board, per context.
///
/// The "black" target sits in column `n` on the left and `3n` on the right; the "white"
/// target sits one column further right on each side, so the two contexts always
/// differ in check parity.
pub fn checkerboard_target_columns(n_surrounds: usize, context: &str) -> StimResult<ColumnPair> {
    let n_cols = 2 * units_per_side(n_surrounds);
    match context {
        "black" => Ok(ColumnPair {
            left: n_surrounds,
            right: n_cols - (n_surrounds + 1) - 1,
        }),
        "white" => Ok(ColumnPair {
            left: n_surrounds + 1,
            right: n_cols - (n_surrounds + 1),
        }),
        other => Err(StimError::unknown_context(format!(
            "'{other}' has no checkerboard target column scheme"
        ))),
    }
}

/// Signed bar indices `(left, right)` for one context in a White's grating.
///
/// Non-negative values count from the left edge (0-based), negative values from the
/// right edge (`-1` is the last bar).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarPair {
    /// Target bar counted from the left edge.
    pub left: isize,
    /// Target bar counted from the right edge (negative).
    pub right: isize,
}

/// Target bars for a grating of `2 * (2n + 1)` bars.
///
/// With `row = n`, "black" is `(row + 1, -(row + 1))` and "white" is `(row + 2, -row)`.
/// The one-bar offset between contexts only yields the intended polarity together
/// with [`bars_start_with_first_context`].
pub fn whites_target_indices(n_surrounds: usize, context: &str) -> StimResult<BarPair> {
    let row = n_surrounds as isize;
    match context {
        "black" => Ok(BarPair {
            left: row + 1,
            right: -(row + 1),
        }),
        "white" => Ok(BarPair {
            left: row + 2,
            right: -row,
        }),
        other => Err(StimError::unknown_context(format!(
            "'{other}' has no White's target index scheme"
        ))),
    }
}

/// Parity rule for the full-height and narrow gratings.
///
/// Odd `n` keeps the context table order for the bars, even `n` reverses it; otherwise
/// the targets would land on the wrong light/dark bar.
pub fn bars_start_with_first_context(n_surrounds: usize) -> bool {
    n_surrounds % 2 == 1
}

/// Validate the inputs every variant builder shares before anything is allocated.
pub fn check_geometry(target_size: f64, n_surrounds: usize) -> StimResult<()> {
    if n_surrounds == 0 {
        return Err(StimError::geometry("n_surrounds must be > 0"));
    }
    if !target_size.is_finite() || target_size <= 0.0 {
        return Err(StimError::geometry(format!(
            "target_size must be > 0, got {target_size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/layout.rs"]
mod tests;
