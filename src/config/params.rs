use crate::context::table::ContextTable;
use crate::foundation::core::{Size, pixel_shape};
use crate::foundation::error::{StimError, StimResult};
use crate::geometry::layout::{ASPECT_RATIO, check_geometry, visual_size};

/// Default resolution in pixels per degree.
pub const PPD: f64 = 72.0;
/// Default side length of one target, check or bar.
pub const TARGET_SIZE: f64 = 0.5;
/// Default number of surround units on each side of a target.
pub const N_SURROUNDS: usize = 5;
/// Default fill for padded or removed regions.
pub const INTENSITY_BACKGROUND: f64 = 0.3;
/// Default target intensity.
pub const INTENSITY_TARGET: f64 = 0.5;

/// Options shared by every variant builder.
///
/// Parsed from JSON with every field optional:
///
/// ```json
/// { "ppd": 32, "contexts": ["white", "black"], "n_surrounds": 3 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StimulusParams {
    /// Pixels per unit of visual angle.
    pub ppd: f64,
    /// Intensity of the left (first) and right (second) target.
    pub intensity_targets: [f64; 2],
    /// Context applied to the left and right half, looked up in `intensity_contexts`.
    pub contexts: [String; 2],
    /// Context name to intensity; must contain both `contexts`.
    pub intensity_contexts: ContextTable,
    /// Side length of one target, check or bar.
    pub target_size: f64,
    /// Surround units on each side of a target; must be > 0.
    pub n_surrounds: usize,
    /// Fill for padded or removed regions.
    pub intensity_background: f64,
}

impl Default for StimulusParams {
    fn default() -> Self {
        Self {
            ppd: PPD,
            intensity_targets: [INTENSITY_TARGET, INTENSITY_TARGET],
            contexts: ["black".to_string(), "white".to_string()],
            intensity_contexts: ContextTable::default(),
            target_size: TARGET_SIZE,
            n_surrounds: N_SURROUNDS,
            intensity_background: INTENSITY_BACKGROUND,
        }
    }
}

impl StimulusParams {
    /// Parse and validate parameters from JSON; missing fields take their defaults.
    ///
    /// A negative `n_surrounds` is reported as a geometry error like `0` is, not as a
    /// decode failure.
    pub fn from_json_str(s: &str) -> StimResult<Self> {
        let params: Self = serde_json::from_str(s).map_err(|e| decode_error(s, e))?;
        params.validate()?;
        Ok(params)
    }

    /// Geometry and context checks shared by all builders; runs before any allocation.
    pub fn validate(&self) -> StimResult<()> {
        check_geometry(self.target_size, self.n_surrounds)?;
        pixel_shape(self.visual_size(), self.ppd)?;
        for context in &self.contexts {
            if !self.intensity_contexts.contains(context) {
                return Err(StimError::unknown_context(context.clone()));
            }
        }
        Ok(())
    }

    /// Canonical physical size for these parameters.
    pub fn visual_size(&self) -> Size {
        visual_size(self.target_size, self.n_surrounds, ASPECT_RATIO)
    }

    /// Set the left and right context names.
    pub fn with_contexts(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.contexts = [left.into(), right.into()];
        self
    }

    /// Replace the context intensity table.
    pub fn with_intensity_contexts(mut self, table: ContextTable) -> Self {
        self.intensity_contexts = table;
        self
    }

    /// Set the left and right target intensities.
    pub fn with_intensity_targets(mut self, left: f64, right: f64) -> Self {
        self.intensity_targets = [left, right];
        self
    }

    /// Set the resolution in pixels per unit.
    pub fn with_ppd(mut self, ppd: f64) -> Self {
        self.ppd = ppd;
        self
    }

    /// Set the target, check and bar size.
    pub fn with_target_size(mut self, target_size: f64) -> Self {
        self.target_size = target_size;
        self
    }

    /// Set the number of surround units per side.
    pub fn with_n_surrounds(mut self, n_surrounds: usize) -> Self {
        self.n_surrounds = n_surrounds;
        self
    }

    /// Set the fill for padded or removed regions.
    pub fn with_intensity_background(mut self, intensity: f64) -> Self {
        self.intensity_background = intensity;
        self
    }

    /// Same parameters with the left and right contexts exchanged.
    pub fn swapped_contexts(&self) -> Self {
        let [left, right] = self.contexts.clone();
        self.clone().with_contexts(right, left)
    }
}

fn decode_error(s: &str, err: serde_json::Error) -> StimError {
    let n_surrounds = serde_json::from_str::<serde_json::Value>(s)
        .ok()
        .and_then(|v| v.get("n_surrounds").and_then(serde_json::Value::as_i64));
    match n_surrounds {
        Some(n) if n < 0 => StimError::geometry(format!("n_surrounds must be > 0, got {n}")),
        _ => StimError::validation(format!("stimulus params: {err}")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/params.rs"]
mod tests;
