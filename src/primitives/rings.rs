use crate::compose::spatial::join_halves;
use crate::foundation::core::{
    FRAME_MASK, Image, LabelMask, Size, StimulusBundle, TARGET_MASK, pixel_shape,
};
use crate::foundation::error::{StimError, StimResult};
use crate::geometry::layout::split_visual_size;

/// Nested square frames around the image center.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSpec {
    /// Physical extent; frames are centered in it.
    pub visual_size: Size,
    /// Outer radius (half side length) of each frame, innermost first.
    pub radii: Vec<f64>,
    /// Cycled over frames from the innermost outward.
    pub intensity_frames: Vec<f64>,
    /// Frame labels (1-based) painted as targets.
    pub target_indices: Vec<u32>,
    /// Intensity painted over target frames.
    pub intensity_target: f64,
    /// Fill outside the outermost frame.
    pub intensity_background: f64,
}

/// Rasterize square frames.
///
/// A pixel whose Chebyshev distance from the center is `d` belongs to frame
/// `1 + min { i : d < radii[i] }`, or to the background (label 0) past the last radius.
pub fn rectangular_generalized(ppd: f64, spec: &RingSpec) -> StimResult<StimulusBundle> {
    check_radii(&spec.radii)?;
    if spec.intensity_frames.is_empty() {
        return Err(StimError::validation("intensity_frames must not be empty"));
    }
    let n_frames = spec.radii.len() as u32;
    for &t in &spec.target_indices {
        if t == 0 || t > n_frames {
            return Err(StimError::index(format!(
                "target frame {t} outside 1..={n_frames}"
            )));
        }
    }

    let (rows, cols) = pixel_shape(spec.visual_size, ppd)?;
    let center_r = rows as f64 / 2.0;
    let center_c = cols as f64 / 2.0;
    let radii_px: Vec<f64> = spec.radii.iter().map(|r| r * ppd).collect();

    let frame_mask = LabelMask::from_shape_fn((rows, cols), |(r, c)| {
        let dy = (r as f64 + 0.5 - center_r).abs();
        let dx = (c as f64 + 0.5 - center_c).abs();
        let d = dx.max(dy);
        radii_px
            .iter()
            .position(|&rad| d < rad)
            .map_or(0, |i| i as u32 + 1)
    });

    let n_intensities = spec.intensity_frames.len();
    let mut image: Image = frame_mask.mapv(|label| match label {
        0 => spec.intensity_background,
        l => spec.intensity_frames[(l as usize - 1) % n_intensities],
    });

    let mut target_mask = LabelMask::zeros((rows, cols));
    for (k, &target) in spec.target_indices.iter().enumerate() {
        ndarray::Zip::from(&mut target_mask)
            .and(&mut image)
            .and(&frame_mask)
            .for_each(|tm, px, &frame| {
                if frame == target {
                    *tm = k as u32 + 1;
                    *px = spec.intensity_target;
                }
            });
    }

    StimulusBundle::new(image, spec.visual_size, ppd)
        .with_mask(FRAME_MASK, frame_mask)?
        .with_mask(TARGET_MASK, target_mask)
}

/// Two square simultaneous-contrast displays side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct TwoSidedSpec {
    /// Size of the combined display; each side gets half of its pixel columns.
    pub visual_size: Size,
    /// Half side length of each square target.
    pub target_radius: f64,
    /// Half side length of each square surround.
    pub surround_radius: f64,
    /// Left and right target intensity.
    pub intensity_targets: [f64; 2],
    /// Left and right surround intensity.
    pub intensity_surrounds: [f64; 2],
    /// Fill outside the surrounds.
    pub intensity_background: f64,
}

/// Square target on a square surround, one per side, stacked horizontally.
///
/// `frame_mask` labels are 1 (target) and 2 (surround) on the left, 3 and 4 on the right.
pub fn square_two_sided(ppd: f64, spec: &TwoSidedSpec) -> StimResult<StimulusBundle> {
    let halves = split_visual_size(spec.visual_size, ppd)?;
    let side = |i: usize| {
        rectangular_generalized(
            ppd,
            &RingSpec {
                visual_size: halves[i],
                radii: vec![spec.target_radius, spec.surround_radius],
                intensity_frames: vec![spec.intensity_surrounds[i]],
                target_indices: vec![1],
                intensity_target: spec.intensity_targets[i],
                intensity_background: spec.intensity_background,
            },
        )
    };
    join_halves(side(0)?, side(1)?, spec.visual_size)
}

fn check_radii(radii: &[f64]) -> StimResult<()> {
    if radii.is_empty() {
        return Err(StimError::geometry("at least one radius is required"));
    }
    if radii.iter().any(|r| !r.is_finite() || *r <= 0.0) {
        return Err(StimError::geometry("radii must be finite and > 0"));
    }
    if radii.windows(2).any(|w| w[0] >= w[1]) {
        return Err(StimError::geometry("radii must be strictly increasing"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/rings.rs"]
mod tests;
