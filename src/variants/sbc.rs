use crate::config::params::StimulusParams;
use crate::foundation::core::StimulusBundle;
use crate::foundation::error::StimResult;
use crate::geometry::layout::radii;
use crate::primitives::rings::{TwoSidedSpec, square_two_sided};

/// Simultaneous brightness contrast with surrounds filling each half.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn sbc(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    two_sided(params, params.visual_size().height / 2.0)
}

/// Surround shrunk to the middle radius, leaving background between the two sides.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn sbc_separate(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let r = radii(params.target_size, params.n_surrounds);
    two_sided(params, r[r.len() / 2])
}

/// Surround shrunk to a single target-width frame.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = ?params.contexts))]
pub fn sbc_smallest(params: &StimulusParams) -> StimResult<StimulusBundle> {
    params.validate()?;
    let r = radii(params.target_size, params.n_surrounds);
    two_sided(params, r[1])
}

fn two_sided(params: &StimulusParams, surround_radius: f64) -> StimResult<StimulusBundle> {
    let table = &params.intensity_contexts;
    square_two_sided(
        params.ppd,
        &TwoSidedSpec {
            visual_size: params.visual_size(),
            target_radius: params.target_size / 2.0,
            surround_radius,
            intensity_targets: params.intensity_targets,
            intensity_surrounds: [table.get(&params.contexts[0])?, table.get(&params.contexts[1])?],
            intensity_background: params.intensity_background,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/variants/sbc.rs"]
mod tests;
