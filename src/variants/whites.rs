use crate::compose::spatial::{join_halves, pad_to_visual_size};
use crate::config::params::StimulusParams;
use crate::context::resolve::{ResolvedContext, resolve};
use crate::foundation::core::{Size, StimulusBundle};
use crate::foundation::error::StimResult;
use crate::geometry::layout::{
    bars_start_with_first_context, split_visual_size, whites_target_indices,
};
use crate::primitives::grating::{WhiteSpec, white};

/// White's grating over the full canonical size.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn whites(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    grating(
        params,
        params.visual_size(),
        bar_order(params, bars_start_with_first_context(params.n_surrounds)),
    )
}

/// Grating only `n` target heights tall, padded back to the canonical size.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn whites_narrow(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let visual_size = params.visual_size();
    let narrow = Size::new(
        visual_size.width,
        params.n_surrounds as f64 * params.target_size,
    );
    let stim = grating(
        params,
        narrow,
        bar_order(params, bars_start_with_first_context(params.n_surrounds)),
    )?;
    pad_to_visual_size(stim, visual_size, params.intensity_background)
}

/// A single target-high strip of bars; the targets span the full bar height, so the
/// bar order is the opposite of [`whites`].
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn strip(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let visual_size = params.visual_size();
    let strip = Size::new(visual_size.width, params.target_size);
    let stim = grating(
        params,
        strip,
        bar_order(params, !bars_start_with_first_context(params.n_surrounds)),
    )?;
    pad_to_visual_size(stim, visual_size, params.intensity_background)
}

/// One square `n`-bar grating per context, each centered in its half.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn whites_separate(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let n = params.n_surrounds;
    let visual_size = params.visual_size();
    let [left_half, right_half] = split_visual_size(visual_size, params.ppd)?;
    let side_len = n as f64 * params.target_size;
    let target_bar = ((n - 1) / 2 + 1) as isize;
    let surround_first = ((n - 1) / 2) % 2 == 1;
    let [left, right] = resolve(&params.contexts, &params.intensity_contexts)?;

    let side = |half: Size, bars: Vec<f64>, target: f64| -> StimResult<StimulusBundle> {
        let stim = white(
            params.ppd,
            &WhiteSpec {
                visual_size: Size::new(side_len, side_len),
                bar_width: params.target_size,
                target_indices: vec![target_bar],
                target_height: params.target_size,
                intensity_bars: bars,
                intensity_targets: vec![target],
            },
        )?;
        pad_to_visual_size(stim, half, params.intensity_background)
    };
    let order = |ctx: &ResolvedContext| {
        if surround_first {
            ctx.surround_first()
        } else {
            ctx.surround_last()
        }
    };

    let [t_left, t_right] = params.intensity_targets;
    join_halves(
        side(left_half, order(&left), t_left)?,
        side(right_half, order(&right), t_right)?,
        visual_size,
    )
}

fn bar_order(params: &StimulusParams, table_order: bool) -> Vec<f64> {
    if table_order {
        params.intensity_contexts.values()
    } else {
        params.intensity_contexts.reversed_values()
    }
}

fn grating(
    params: &StimulusParams,
    visual_size: Size,
    intensity_bars: Vec<f64>,
) -> StimResult<StimulusBundle> {
    let left = whites_target_indices(params.n_surrounds, &params.contexts[0])?.left;
    let right = whites_target_indices(params.n_surrounds, &params.contexts[1])?.right;
    white(
        params.ppd,
        &WhiteSpec {
            visual_size,
            bar_width: params.target_size,
            target_indices: vec![left, right],
            target_height: params.target_size,
            intensity_bars,
            intensity_targets: params.intensity_targets.to_vec(),
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/variants/whites.rs"]
mod tests;
