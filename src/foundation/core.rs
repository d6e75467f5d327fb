use std::collections::BTreeMap;

use ndarray::Array2;

use crate::foundation::error::{StimError, StimResult};

pub use kurbo::{Point, Size};

/// Intensity raster, row-major `(height, width)`.
pub type Image = Array2<f64>;

/// Integer-labeled region raster. Label 0 is background; positive labels are regions.
pub type LabelMask = Array2<u32>;

/// Mask holding the target regions of a stimulus.
pub const TARGET_MASK: &str = "target_mask";
/// Mask holding ring / frame labels, innermost first.
pub const FRAME_MASK: &str = "frame_mask";
/// Mask holding checkerboard labels, row-major.
pub const CHECKER_MASK: &str = "checker_mask";
/// Mask holding grating bar labels, left to right.
pub const BAR_MASK: &str = "bar_mask";

/// Spatial axis used for stacking and flipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Side by side; concatenates columns.
    Horizontal,
    /// Top to bottom; concatenates rows.
    Vertical,
}

/// An image together with its region masks and physical extent.
///
/// `visual_size` is in the same units as `target_size` (degrees of visual angle by
/// convention) and `image.dim() == round(visual_size * ppd)`.
#[derive(Clone, Debug, PartialEq)]
pub struct StimulusBundle {
    /// Intensities, nominally in `[0, 1]`.
    pub image: Image,
    /// Label masks by name, each the same shape as `image`.
    pub masks: BTreeMap<String, LabelMask>,
    /// Physical extent of `image`.
    pub visual_size: Size,
    /// Pixels per unit of visual angle.
    pub ppd: f64,
}

impl StimulusBundle {
    /// Bundle with no masks attached yet.
    pub fn new(image: Image, visual_size: Size, ppd: f64) -> Self {
        Self {
            image,
            masks: BTreeMap::new(),
            visual_size,
            ppd,
        }
    }

    /// Attach a mask, rejecting one whose shape differs from the image.
    pub fn with_mask(mut self, name: impl Into<String>, mask: LabelMask) -> StimResult<Self> {
        let name = name.into();
        if mask.dim() != self.image.dim() {
            return Err(StimError::shape(format!(
                "mask '{name}' has shape {:?}, image has {:?}",
                mask.dim(),
                self.image.dim()
            )));
        }
        self.masks.insert(name, mask);
        Ok(self)
    }

    /// `(rows, cols)` of the image.
    pub fn shape(&self) -> (usize, usize) {
        self.image.dim()
    }

    /// Look up a mask by name; a missing mask is a validation error.
    pub fn mask(&self, name: &str) -> StimResult<&LabelMask> {
        self.masks
            .get(name)
            .ok_or_else(|| StimError::validation(format!("bundle has no mask named '{name}'")))
    }

    /// Largest label present in the named mask (0 for an all-background mask).
    pub fn max_label(&self, name: &str) -> StimResult<u32> {
        Ok(max_label(self.mask(name)?))
    }

    /// Check the shape invariants: masks match the image and the image matches
    /// `visual_size * ppd`.
    pub fn validate(&self) -> StimResult<()> {
        let expected = pixel_shape(self.visual_size, self.ppd)?;
        if expected != self.shape() {
            return Err(StimError::shape(format!(
                "image shape {:?} does not match visual size {}x{} at ppd {} (expected {expected:?})",
                self.shape(),
                self.visual_size.height,
                self.visual_size.width,
                self.ppd
            )));
        }
        for (name, mask) in &self.masks {
            if mask.dim() != self.shape() {
                return Err(StimError::shape(format!(
                    "mask '{name}' has shape {:?}, image has {:?}",
                    mask.dim(),
                    self.shape()
                )));
            }
        }
        Ok(())
    }
}

/// Largest label in `mask` (0 for an all-background mask).
pub fn max_label(mask: &LabelMask) -> u32 {
    mask.iter().copied().max().unwrap_or(0)
}

/// Pixel dimensions `(rows, cols)` for a physical size at the given resolution.
pub fn pixel_shape(visual_size: Size, ppd: f64) -> StimResult<(usize, usize)> {
    if !ppd.is_finite() || ppd <= 0.0 {
        return Err(StimError::geometry(format!("ppd must be > 0, got {ppd}")));
    }
    if !visual_size.is_finite() || visual_size.height < 0.0 || visual_size.width < 0.0 {
        return Err(StimError::geometry(format!(
            "visual size must be finite and non-negative, got {}x{}",
            visual_size.height, visual_size.width
        )));
    }
    let rows = (visual_size.height * ppd).round() as usize;
    let cols = (visual_size.width * ppd).round() as usize;
    Ok((rows, cols))
}

/// Physical coordinate of a pixel center, measured from the top-left corner.
pub fn pixel_center(row: usize, col: usize, ppd: f64) -> Point {
    Point::new((col as f64 + 0.5) / ppd, (row as f64 + 0.5) / ppd)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
