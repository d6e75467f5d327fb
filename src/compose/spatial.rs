//! Whole-bundle spatial operations: padding, stacking, flipping and rotating.
//!
//! Every operation transforms the image and all masks alike, so masks stay aligned
//! with the pixels they label.

use std::collections::BTreeMap;

use ndarray::{Array2, Axis as NdAxis, s};

use crate::foundation::core::{
    Axis, LabelMask, Size, StimulusBundle, max_label, pixel_shape,
};
use crate::foundation::error::{StimError, StimResult};

const PPD_TOLERANCE: f64 = 1e-9;

/// Center-pad to a physical size; padded pixels get `pad_value`, padded mask pixels 0.
///
/// A bundle that already has the requested size is returned unchanged.
pub fn pad_to_visual_size(
    bundle: StimulusBundle,
    visual_size: Size,
    pad_value: f64,
) -> StimResult<StimulusBundle> {
    let shape = pixel_shape(visual_size, bundle.ppd)?;
    let mut padded = pad_to_shape(bundle, shape, pad_value)?;
    padded.visual_size = visual_size;
    Ok(padded)
}

/// Center-pad to a pixel shape `(rows, cols)`. The extra row or column of an odd
/// difference goes after the content.
pub fn pad_to_shape(
    bundle: StimulusBundle,
    shape: (usize, usize),
    pad_value: f64,
) -> StimResult<StimulusBundle> {
    let (rows, cols) = shape;
    let (h, w) = bundle.shape();
    if rows < h || cols < w {
        return Err(StimError::geometry(format!(
            "cannot pad {h}x{w} pixels down to {rows}x{cols}"
        )));
    }
    if (rows, cols) == (h, w) {
        return Ok(bundle);
    }

    let top = (rows - h) / 2;
    let left = (cols - w) / 2;
    let mut image = Array2::from_elem((rows, cols), pad_value);
    image
        .slice_mut(s![top..top + h, left..left + w])
        .assign(&bundle.image);
    let masks = bundle
        .masks
        .iter()
        .map(|(name, mask)| {
            let mut out = LabelMask::zeros((rows, cols));
            out.slice_mut(s![top..top + h, left..left + w]).assign(mask);
            (name.clone(), out)
        })
        .collect();

    tracing::debug!(from = ?(h, w), to = ?(rows, cols), "padded stimulus");
    Ok(StimulusBundle {
        image,
        masks,
        visual_size: Size::new(cols as f64 / bundle.ppd, rows as f64 / bundle.ppd),
        ppd: bundle.ppd,
    })
}

/// Concatenate `b` after `a` along `axis`.
///
/// Masks present in either bundle are concatenated too (a missing mask counts as all
/// background). Positive labels from `b` are shifted by the largest label of `a`'s mask
/// so every label stays unique in the combined mask.
pub fn stack(a: StimulusBundle, b: StimulusBundle, axis: Axis) -> StimResult<StimulusBundle> {
    if (a.ppd - b.ppd).abs() > PPD_TOLERANCE {
        return Err(StimError::shape(format!(
            "cannot stack bundles at ppd {} and {}",
            a.ppd, b.ppd
        )));
    }
    let (ha, wa) = a.shape();
    let (hb, wb) = b.shape();
    let (nd_axis, visual_size) = match axis {
        Axis::Horizontal => {
            if ha != hb {
                return Err(StimError::shape(format!(
                    "horizontal stack needs equal heights, got {ha} and {hb}"
                )));
            }
            (
                NdAxis(1),
                Size::new(a.visual_size.width + b.visual_size.width, a.visual_size.height),
            )
        }
        Axis::Vertical => {
            if wa != wb {
                return Err(StimError::shape(format!(
                    "vertical stack needs equal widths, got {wa} and {wb}"
                )));
            }
            (
                NdAxis(0),
                Size::new(a.visual_size.width, a.visual_size.height + b.visual_size.height),
            )
        }
    };

    let image = ndarray::concatenate(nd_axis, &[a.image.view(), b.image.view()])
        .map_err(|e| StimError::shape(format!("stack image: {e}")))?;

    let names: Vec<String> = a.masks.keys().chain(b.masks.keys()).cloned().collect();
    let mut masks = BTreeMap::new();
    for name in names {
        if masks.contains_key(&name) {
            continue;
        }
        let ma = a
            .masks
            .get(&name)
            .cloned()
            .unwrap_or_else(|| LabelMask::zeros(a.shape()));
        let offset = max_label(&ma);
        let mb = match b.masks.get(&name) {
            Some(m) => m.mapv(|l| if l > 0 { l + offset } else { 0 }),
            None => LabelMask::zeros(b.shape()),
        };
        let joined = ndarray::concatenate(nd_axis, &[ma.view(), mb.view()])
            .map_err(|e| StimError::shape(format!("stack mask '{name}': {e}")))?;
        masks.insert(name, joined);
    }

    tracing::debug!(?axis, shape = ?image.dim(), "stacked stimuli");
    Ok(StimulusBundle {
        image,
        masks,
        visual_size,
        ppd: a.ppd,
    })
}

/// Stack two halves side by side into a display of exactly `visual_size`.
///
/// The halves must already tile `visual_size * ppd` pixels; see
/// [`split_visual_size`](crate::split_visual_size).
pub fn join_halves(
    left: StimulusBundle,
    right: StimulusBundle,
    visual_size: Size,
) -> StimResult<StimulusBundle> {
    let mut joined = stack(left, right, Axis::Horizontal)?;
    let expected = pixel_shape(visual_size, joined.ppd)?;
    if joined.shape() != expected {
        return Err(StimError::shape(format!(
            "halves join to {:?} pixels, {}x{} at ppd {} needs {expected:?}",
            joined.shape(),
            visual_size.height,
            visual_size.width,
            joined.ppd
        )));
    }
    joined.visual_size = visual_size;
    Ok(joined)
}

/// Mirror the bundle: `Horizontal` reverses columns, `Vertical` reverses rows.
pub fn flip(bundle: StimulusBundle, axis: Axis) -> StimulusBundle {
    fn flip_array<T: Clone>(a: &Array2<T>, axis: Axis) -> Array2<T> {
        let view = match axis {
            Axis::Horizontal => a.slice(s![.., ..;-1]),
            Axis::Vertical => a.slice(s![..;-1, ..]),
        };
        view.as_standard_layout().into_owned()
    }

    StimulusBundle {
        image: flip_array(&bundle.image, axis),
        masks: bundle
            .masks
            .iter()
            .map(|(name, m)| (name.clone(), flip_array(m, axis)))
            .collect(),
        visual_size: bundle.visual_size,
        ppd: bundle.ppd,
    }
}

/// Rotate by `quarter_turns * 90` degrees counter-clockwise. Odd turns swap the
/// visual height and width.
pub fn rotate(bundle: StimulusBundle, quarter_turns: i32) -> StimulusBundle {
    fn rot90<T: Clone>(a: &Array2<T>) -> Array2<T> {
        a.t().slice(s![..;-1, ..]).as_standard_layout().into_owned()
    }

    let turns = quarter_turns.rem_euclid(4);
    let mut out = bundle;
    for _ in 0..turns {
        out = StimulusBundle {
            image: rot90(&out.image),
            masks: out
                .masks
                .iter()
                .map(|(name, m)| (name.clone(), rot90(m)))
                .collect(),
            visual_size: Size::new(out.visual_size.height, out.visual_size.width),
            ppd: out.ppd,
        };
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/spatial.rs"]
mod tests;
