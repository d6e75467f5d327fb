use crate::foundation::core::{
    CHECKER_MASK, Image, LabelMask, Size, StimulusBundle, TARGET_MASK, pixel_shape,
};
use crate::foundation::error::{StimError, StimResult};

/// A board of square checks with targets replacing some checks.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckerboardSpec {
    /// `(rows, cols)`.
    pub board_shape: (usize, usize),
    /// Side length of one check.
    pub check_size: f64,
    /// 0-based `(row, col)` of each target check.
    pub target_indices: Vec<(usize, usize)>,
    /// Check `(row, col)` takes `intensity_checks[(row + col) % len]`; the first value is top-left.
    pub intensity_checks: Vec<f64>,
    /// Target `k` takes `intensity_targets[k % len]`.
    pub intensity_targets: Vec<f64>,
}

/// Board shape that tiles `visual_size` with checks of `check_size`.
pub fn board_shape_for(visual_size: Size, check_size: f64) -> StimResult<(usize, usize)> {
    if !check_size.is_finite() || check_size <= 0.0 {
        return Err(StimError::geometry(format!(
            "check size must be > 0, got {check_size}"
        )));
    }
    let rows = (visual_size.height / check_size).round();
    let cols = (visual_size.width / check_size).round();
    if rows < 1.0 || cols < 1.0 {
        return Err(StimError::geometry(format!(
            "{}x{} does not fit a single check of {check_size}",
            visual_size.height, visual_size.width
        )));
    }
    Ok((rows as usize, cols as usize))
}

/// Rasterize a checkerboard. `checker_mask` labels checks row-major starting at 1.
pub fn checkerboard(ppd: f64, spec: &CheckerboardSpec) -> StimResult<StimulusBundle> {
    let (n_rows, n_cols) = spec.board_shape;
    if n_rows == 0 || n_cols == 0 {
        return Err(StimError::geometry("board shape must be at least 1x1"));
    }
    if spec.intensity_checks.is_empty() {
        return Err(StimError::validation("intensity_checks must not be empty"));
    }
    if !spec.target_indices.is_empty() && spec.intensity_targets.is_empty() {
        return Err(StimError::validation("intensity_targets must not be empty"));
    }
    for &(r, c) in &spec.target_indices {
        if r >= n_rows || c >= n_cols {
            return Err(StimError::index(format!(
                "target check ({r}, {c}) outside {n_rows}x{n_cols} board"
            )));
        }
    }

    let visual_size = Size::new(
        n_cols as f64 * spec.check_size,
        n_rows as f64 * spec.check_size,
    );
    let (rows, cols) = pixel_shape(visual_size, ppd)?;
    let check_px = spec.check_size * ppd;
    let cell = |px: usize, n: usize| (((px as f64 + 0.5) / check_px) as usize).min(n - 1);

    let checker_mask = LabelMask::from_shape_fn((rows, cols), |(r, c)| {
        (cell(r, n_rows) * n_cols + cell(c, n_cols) + 1) as u32
    });

    let n_intensities = spec.intensity_checks.len();
    let mut image: Image = Image::from_shape_fn((rows, cols), |(r, c)| {
        spec.intensity_checks[(cell(r, n_rows) + cell(c, n_cols)) % n_intensities]
    });

    let mut target_mask = LabelMask::zeros((rows, cols));
    for (k, &(tr, tc)) in spec.target_indices.iter().enumerate() {
        let label = (tr * n_cols + tc + 1) as u32;
        let intensity = spec.intensity_targets[k % spec.intensity_targets.len()];
        ndarray::Zip::from(&mut target_mask)
            .and(&mut image)
            .and(&checker_mask)
            .for_each(|tm, px, &check| {
                if check == label {
                    *tm = k as u32 + 1;
                    *px = intensity;
                }
            });
    }

    StimulusBundle::new(image, visual_size, ppd)
        .with_mask(CHECKER_MASK, checker_mask)?
        .with_mask(TARGET_MASK, target_mask)
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/checkerboard.rs"]
mod tests;
