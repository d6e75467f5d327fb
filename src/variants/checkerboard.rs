//! Checkerboard family: full, narrow, separate, smallest and the two cross variants.

use crate::compose::masks::{
    clear, corner_mask, flanker_mask, inner_ring_mask, select, switch_polarity, union,
};
use crate::compose::spatial::{join_halves, pad_to_visual_size};
use crate::config::params::StimulusParams;
use crate::context::resolve::resolve;
use crate::foundation::core::{CHECKER_MASK, FRAME_MASK, Size, StimulusBundle, TARGET_MASK};
use crate::foundation::error::{StimError, StimResult};
use crate::geometry::layout::{checkerboard_target_columns, split_visual_size, units_per_side};
use crate::primitives::checkerboard::{CheckerboardSpec, board_shape_for, checkerboard as board};
use crate::variants::bullseye::bullseye_high_freq;

/// The cross variants only support two `CROSS_BOARD x CROSS_BOARD` boards; the label
/// lists below are written against that topology.
pub const CROSS_N_SURROUNDS: usize = 5;
const CROSS_BOARD: u32 = CROSS_N_SURROUNDS as u32;

/// Diagonal neighbours of the target check `(2, 2)` on the left board.
pub const CORNERS_LEFT: [u32; 4] = [7, 9, 17, 19];
/// Same checks on the right board (left labels + 25).
pub const CORNERS_RIGHT: [u32; 4] = [32, 34, 42, 44];
/// Horizontal neighbours of the target check on the left board.
pub const FLANKERS_LEFT: [u32; 2] = [12, 14];
/// Same checks on the right board.
pub const FLANKERS_RIGHT: [u32; 2] = [37, 39];

/// Full `(2n + 1) x 2(2n + 1)` board with both targets in row `n`.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn checkerboard(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let visual_size = params.visual_size();
    board(
        params.ppd,
        &CheckerboardSpec {
            board_shape: board_shape_for(visual_size, params.target_size)?,
            check_size: params.target_size,
            target_indices: target_checks(params, params.n_surrounds)?,
            intensity_checks: params.intensity_contexts.reversed_values(),
            intensity_targets: params.intensity_targets.to_vec(),
        },
    )
}

/// Board only `n` checks tall, padded back to the canonical size.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn checkerboard_narrow(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let n = params.n_surrounds;
    let visual_size = params.visual_size();

    // The target row moves to n/2; flip the check order when that changes its parity.
    let mut intensity_checks = params.intensity_contexts.reversed_values();
    if ((n / 2) as i64 - 1).rem_euclid(2) == 1 {
        intensity_checks.reverse();
    }

    let narrow = Size::new(visual_size.width, n as f64 * params.target_size);
    let stim = board(
        params.ppd,
        &CheckerboardSpec {
            board_shape: board_shape_for(narrow, params.target_size)?,
            check_size: params.target_size,
            target_indices: target_checks(params, n / 2)?,
            intensity_checks,
            intensity_targets: params.intensity_targets.to_vec(),
        },
    )?;
    pad_to_visual_size(stim, visual_size, params.intensity_background)
}

/// One `n x n` board per context, each centered in its half.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn checkerboard_separate(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let n = params.n_surrounds;
    let visual_size = params.visual_size();
    let [left_half, right_half] = split_visual_size(visual_size, params.ppd)?;
    let [left, right] = resolve(&params.contexts, &params.intensity_contexts)?;

    let side = |half: Size, checks: Vec<f64>, target: f64| -> StimResult<StimulusBundle> {
        let stim = board(
            params.ppd,
            &CheckerboardSpec {
                board_shape: (n, n),
                check_size: params.target_size,
                target_indices: vec![(n / 2, n / 2)],
                // Target check has even parity, so its neighbours get the context.
                intensity_checks: checks,
                intensity_targets: vec![target],
            },
        )?;
        pad_to_visual_size(stim, half, params.intensity_background)
    };

    let [t_left, t_right] = params.intensity_targets;
    join_halves(
        side(left_half, left.surround_last(), t_left)?,
        side(right_half, right.surround_last(), t_right)?,
        visual_size,
    )
}

/// [`checkerboard_separate`] cut down to the checks within the three innermost
/// high-frequency rings around each target.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn checkerboard_smallest(params: &StimulusParams) -> StimResult<StimulusBundle> {
    let mut stim = checkerboard_separate(params)?;
    let rings = bullseye_high_freq(params)?;

    let targets = stim.mask(TARGET_MASK)?;
    let frames_per_side = units_per_side(params.n_surrounds) as u32;
    let inner = inner_ring_mask(rings.mask(FRAME_MASK)?, targets, frames_per_side)?;
    let keep = union(&inner, targets)?;
    stim.image = select(&stim.image, &keep, params.intensity_background)?;
    Ok(stim)
}

/// [`checkerboard_smallest`] with the diagonal neighbours of each target removed.
///
/// Requires `n_surrounds == 5`.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn cross(params: &StimulusParams) -> StimResult<StimulusBundle> {
    ensure_cross_topology(params)?;
    let mut stim = checkerboard_smallest(params)?;
    let corners = corner_mask(stim.mask(CHECKER_MASK)?, &CORNERS_LEFT, &CORNERS_RIGHT)?;
    stim.image = clear(&stim.image, &corners, params.intensity_background)?;
    Ok(stim)
}

/// [`cross`] with the horizontal flankers given the opposite side's context.
///
/// Requires `n_surrounds == 5`.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn cross_polarity(params: &StimulusParams) -> StimResult<StimulusBundle> {
    let mut stim = cross(params)?;
    let flankers = flanker_mask(stim.mask(CHECKER_MASK)?, &FLANKERS_LEFT, &FLANKERS_RIGHT)?;
    let swapped = [params.contexts[1].clone(), params.contexts[0].clone()];
    stim.image = switch_polarity(&stim.image, &flankers, &swapped, &params.intensity_contexts)?;
    Ok(stim)
}

fn target_checks(params: &StimulusParams, row: usize) -> StimResult<Vec<(usize, usize)>> {
    let left = checkerboard_target_columns(params.n_surrounds, &params.contexts[0])?.left;
    let right = checkerboard_target_columns(params.n_surrounds, &params.contexts[1])?.right;
    Ok(vec![(row, left), (row, right)])
}

fn ensure_cross_topology(params: &StimulusParams) -> StimResult<()> {
    if params.n_surrounds != CROSS_N_SURROUNDS {
        return Err(StimError::index(format!(
            "corner and flanker labels assume two {CROSS_BOARD}x{CROSS_BOARD} boards \
             (n_surrounds = {CROSS_N_SURROUNDS}), got n_surrounds = {}",
            params.n_surrounds
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/variants/checkerboard.rs"]
mod tests;
