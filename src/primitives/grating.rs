use crate::foundation::core::{
    BAR_MASK, Image, LabelMask, Size, StimulusBundle, TARGET_MASK, pixel_shape,
};
use crate::foundation::error::{StimError, StimResult};

/// A square-wave grating of vertical bars with targets embedded in some bars.
#[derive(Clone, Debug, PartialEq)]
pub struct WhiteSpec {
    /// Physical extent of the grating.
    pub visual_size: Size,
    /// Width of one bar.
    pub bar_width: f64,
    /// 0-based bar indices; negative values count from the right edge.
    pub target_indices: Vec<isize>,
    /// Height of each target, vertically centered in its bar.
    pub target_height: f64,
    /// Bar `i` takes `intensity_bars[i % len]`.
    pub intensity_bars: Vec<f64>,
    /// Target `k` takes `intensity_targets[k % len]`.
    pub intensity_targets: Vec<f64>,
}

impl WhiteSpec {
    /// Number of whole bars across `visual_size.width`.
    pub fn n_bars(&self) -> StimResult<usize> {
        if !self.bar_width.is_finite() || self.bar_width <= 0.0 {
            return Err(StimError::geometry(format!(
                "bar width must be > 0, got {}",
                self.bar_width
            )));
        }
        let n = (self.visual_size.width / self.bar_width).round();
        if n < 1.0 {
            return Err(StimError::geometry("grating is narrower than one bar"));
        }
        Ok(n as usize)
    }
}

/// Map a signed bar index onto `0..n_bars`, failing instead of wrapping twice or clipping.
pub fn resolve_bar_index(index: isize, n_bars: usize) -> StimResult<usize> {
    let n = n_bars as isize;
    let resolved = if index < 0 { n + index } else { index };
    if resolved < 0 || resolved >= n {
        return Err(StimError::index(format!(
            "bar index {index} outside a grating of {n_bars} bars"
        )));
    }
    Ok(resolved as usize)
}

/// Rasterize a White's-effect grating. `bar_mask` labels bars left to right from 1.
pub fn white(ppd: f64, spec: &WhiteSpec) -> StimResult<StimulusBundle> {
    let n_bars = spec.n_bars()?;
    if spec.intensity_bars.is_empty() {
        return Err(StimError::validation("intensity_bars must not be empty"));
    }
    if !spec.target_indices.is_empty() && spec.intensity_targets.is_empty() {
        return Err(StimError::validation("intensity_targets must not be empty"));
    }
    if !spec.target_height.is_finite() || spec.target_height <= 0.0 {
        return Err(StimError::geometry("target height must be > 0"));
    }
    let targets = spec
        .target_indices
        .iter()
        .map(|&i| resolve_bar_index(i, n_bars))
        .collect::<StimResult<Vec<_>>>()?;

    let (rows, cols) = pixel_shape(spec.visual_size, ppd)?;
    let bar_px = spec.bar_width * ppd;
    let bar_of = |c: usize| (((c as f64 + 0.5) / bar_px) as usize).min(n_bars - 1);

    let bar_mask = LabelMask::from_shape_fn((rows, cols), |(_, c)| bar_of(c) as u32 + 1);
    let n_intensities = spec.intensity_bars.len();
    let mut image: Image = Image::from_shape_fn((rows, cols), |(_, c)| {
        spec.intensity_bars[bar_of(c) % n_intensities]
    });

    let center_r = rows as f64 / 2.0;
    let half_height_px = spec.target_height * ppd / 2.0;
    let mut target_mask = LabelMask::zeros((rows, cols));
    for (k, &bar) in targets.iter().enumerate() {
        let intensity = spec.intensity_targets[k % spec.intensity_targets.len()];
        for ((r, c), tm) in target_mask.indexed_iter_mut() {
            if bar_of(c) == bar && (r as f64 + 0.5 - center_r).abs() < half_height_px {
                *tm = k as u32 + 1;
                image[[r, c]] = intensity;
            }
        }
    }

    StimulusBundle::new(image, spec.visual_size, ppd)
        .with_mask(BAR_MASK, bar_mask)?
        .with_mask(TARGET_MASK, target_mask)
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/grating.rs"]
mod tests;
