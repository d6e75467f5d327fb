//! Derived masks and the pixel operations that apply them.
//!
//! Label lists passed in here are checked against the labels actually present in the
//! source mask; a missing label is an [`StimError::Index`], never a silent no-op.

use std::collections::BTreeSet;

use ndarray::Zip;

use crate::context::table::ContextTable;
use crate::foundation::core::{Image, LabelMask, max_label};
use crate::foundation::error::{StimError, StimResult};
use crate::geometry::layout::units_per_side;

/// Keep-mask for the "separate" bullseye: the inner half of each side's fine frames.
///
/// `frame_mask` must come from two stacked fine ring stacks (`N = 2n + 1` frames per
/// side, labels `1..=2N`). Labels `1..=N/2` and `N+1..=N+N/2` map to 1, all else to 0.
pub fn separation_mask(frame_mask: &LabelMask, n_surrounds: usize) -> StimResult<LabelMask> {
    let n = units_per_side(n_surrounds) as u32;
    let found = max_label(frame_mask);
    if found != 2 * n {
        return Err(StimError::index(format!(
            "separation mask expects {} frame labels for n_surrounds={n_surrounds}, found {found}",
            2 * n
        )));
    }
    let half = n / 2;
    Ok(frame_mask.mapv(|l| {
        let left = (1..=half).contains(&l);
        let right = (n + 1..=n + half).contains(&l);
        u32::from(left || right)
    }))
}

/// Regions of the three innermost frames on each side.
///
/// Region 1: `frame < 4`; region 2: `frames_per_side + 1 < frame < frames_per_side + 4`.
/// Pixels inside `target_mask` are cleared so the result never overlaps the targets.
pub fn inner_ring_mask(
    frame_mask: &LabelMask,
    target_mask: &LabelMask,
    frames_per_side: u32,
) -> StimResult<LabelMask> {
    ensure_same_shape(frame_mask.dim(), target_mask.dim(), "inner ring mask")?;
    let lo = frames_per_side + 1;
    let hi = frames_per_side + 4;
    Ok(Zip::from(frame_mask)
        .and(target_mask)
        .map_collect(|&frame, &target| {
            if target > 0 {
                0
            } else if frame < 4 {
                1
            } else if lo < frame && frame < hi {
                2
            } else {
                0
            }
        }))
}

/// Map groups of labels to region ids: every pixel whose label is in `groups[i].0`
/// becomes `groups[i].1`; everything else becomes 0.
pub fn label_regions(mask: &LabelMask, groups: &[(&[u32], u32)]) -> StimResult<LabelMask> {
    let present: BTreeSet<u32> = mask.iter().copied().filter(|&l| l > 0).collect();
    for (labels, _) in groups {
        for label in labels.iter() {
            if !present.contains(label) {
                return Err(StimError::index(format!(
                    "label {label} not present in mask (max label {})",
                    present.last().copied().unwrap_or(0)
                )));
            }
        }
    }
    Ok(mask.mapv(|l| {
        groups
            .iter()
            .find(|(labels, _)| labels.contains(&l))
            .map_or(0, |(_, region)| *region)
    }))
}

/// Corner checks: region 1 on the left board, region 2 on the right.
pub fn corner_mask(
    checker_mask: &LabelMask,
    left_indices: &[u32],
    right_indices: &[u32],
) -> StimResult<LabelMask> {
    label_regions(checker_mask, &[(left_indices, 1), (right_indices, 2)])
}

/// Flanker checks: region 1 on the left board, region 2 on the right.
pub fn flanker_mask(
    checker_mask: &LabelMask,
    left_pair: &[u32],
    right_pair: &[u32],
) -> StimResult<LabelMask> {
    label_regions(checker_mask, &[(left_pair, 1), (right_pair, 2)])
}

/// `image` where `keep` is non-zero, `background` elsewhere.
pub fn select(image: &Image, keep: &LabelMask, background: f64) -> StimResult<Image> {
    ensure_same_shape(image.dim(), keep.dim(), "select")?;
    let out = Zip::from(image)
        .and(keep)
        .map_collect(|&px, &k| if k > 0 { px } else { background });
    tracing::debug!(
        kept = keep.iter().filter(|&&k| k > 0).count(),
        "selected masked pixels"
    );
    Ok(out)
}

/// `background` where `remove` is non-zero, `image` elsewhere.
pub fn clear(image: &Image, remove: &LabelMask, background: f64) -> StimResult<Image> {
    ensure_same_shape(image.dim(), remove.dim(), "clear")?;
    Ok(Zip::from(image)
        .and(remove)
        .map_collect(|&px, &r| if r > 0 { background } else { px }))
}

/// Pixelwise union of two masks as a 0/1 mask.
pub fn union(a: &LabelMask, b: &LabelMask) -> StimResult<LabelMask> {
    ensure_same_shape(a.dim(), b.dim(), "union")?;
    Ok(Zip::from(a)
        .and(b)
        .map_collect(|&x, &y| u32::from(x > 0 || y > 0)))
}

/// Recolor flanker regions: region `i + 1` takes the intensity of `swapped_contexts[i]`.
pub fn switch_polarity(
    image: &Image,
    flanker_mask: &LabelMask,
    swapped_contexts: &[String; 2],
    table: &ContextTable,
) -> StimResult<Image> {
    ensure_same_shape(image.dim(), flanker_mask.dim(), "switch polarity")?;
    let intensities = [
        table.get(&swapped_contexts[0])?,
        table.get(&swapped_contexts[1])?,
    ];
    Ok(Zip::from(image)
        .and(flanker_mask)
        .map_collect(|&px, &region| match region {
            1 => intensities[0],
            2 => intensities[1],
            _ => px,
        }))
}

fn ensure_same_shape(a: (usize, usize), b: (usize, usize), op: &str) -> StimResult<()> {
    if a != b {
        return Err(StimError::shape(format!("{op}: {a:?} vs {b:?}")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/masks.rs"]
mod tests;
