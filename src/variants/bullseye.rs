use crate::compose::masks::{select, separation_mask};
use crate::compose::spatial::join_halves;
use crate::config::params::StimulusParams;
use crate::context::resolve::resolve;
use crate::foundation::core::{FRAME_MASK, Size, StimulusBundle};
use crate::foundation::error::StimResult;
use crate::geometry::layout::{coarse_radii, radii, split_visual_size};
use crate::primitives::rings::{RingSpec, rectangular_generalized};

/// Concentric square rings, one stack per context, frames as wide as the target.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn bullseye(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    two_sided(params, coarse_radii(params.target_size, params.n_surrounds))
}

/// Like [`bullseye`] with twice the ring density.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn bullseye_high_freq(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    two_sided(params, radii(params.target_size, params.n_surrounds))
}

/// High-frequency bullseye reduced to the inner half of each ring stack.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn bullseye_separate(params: &StimulusParams) -> StimResult<StimulusBundle> {
    let mut stim = bullseye_high_freq(params)?;
    let keep = separation_mask(stim.mask(FRAME_MASK)?, params.n_surrounds)?;
    stim.image = select(&stim.image, &keep, params.intensity_background)?;
    Ok(stim)
}

fn two_sided(params: &StimulusParams, radii: Vec<f64>) -> StimResult<StimulusBundle> {
    let visual_size = params.visual_size();
    let [left_half, right_half] = split_visual_size(visual_size, params.ppd)?;
    let [left, right] = resolve(&params.contexts, &params.intensity_contexts)?;
    let side = |half: Size, frames: Vec<f64>, target: f64| {
        rectangular_generalized(
            params.ppd,
            &RingSpec {
                visual_size: half,
                radii: radii.clone(),
                intensity_frames: frames,
                target_indices: vec![1],
                intensity_target: target,
                intensity_background: params.intensity_background,
            },
        )
    };
    let [t_left, t_right] = params.intensity_targets;
    join_halves(
        side(left_half, left.surround_last(), t_left)?,
        side(right_half, right.surround_last(), t_right)?,
        visual_size,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/variants/bullseye.rs"]
mod tests;
