use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::{Image, LabelMask, StimulusBundle, max_label};
use crate::foundation::error::{StimError, StimResult};

/// One line of `manifest.json`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    /// Variant name.
    pub name: String,
    /// PNG file name relative to the batch directory.
    pub file: String,
    /// `[rows, cols]` in pixels.
    pub shape: [usize; 2],
    /// `[height, width]`.
    pub visual_size: [f64; 2],
    /// Pixels per unit the stimulus was rendered at.
    pub ppd: f64,
    /// Names of the masks carried by the bundle.
    pub masks: Vec<String>,
}

/// Intensities clamped to `[0, 1]` and scaled to 8-bit gray.
pub fn to_luma8(bundle: &StimulusBundle) -> StimResult<image::GrayImage> {
    gray(&bundle.image)
}

/// Labels spread evenly over `1..=255`; background stays black.
pub fn mask_to_luma8(mask: &LabelMask) -> StimResult<image::GrayImage> {
    let max = max_label(mask);
    let scaled = mask.mapv(|l| {
        if max == 0 {
            0.0
        } else {
            f64::from(l) / f64::from(max)
        }
    });
    gray(&scaled)
}

fn gray(values: &Image) -> StimResult<image::GrayImage> {
    let (rows, cols) = values.dim();
    let width = u32::try_from(cols).map_err(|_| StimError::shape("image too wide for PNG"))?;
    let height = u32::try_from(rows).map_err(|_| StimError::shape("image too tall for PNG"))?;
    let data: Vec<u8> = values
        .iter()
        .map(|&v| {
            let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
            (v * 255.0).round() as u8
        })
        .collect();
    image::GrayImage::from_raw(width, height, data)
        .ok_or_else(|| StimError::shape(format!("{rows}x{cols} buffer does not fit image")))
}

/// Write `bundle` as a grayscale PNG, creating parent directories as needed.
pub fn save_png(bundle: &StimulusBundle, path: &Path) -> StimResult<()> {
    let img = to_luma8(bundle)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Write `<name>.png` for every stimulus plus a `manifest.json` describing them.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(count = stimuli.len(), dir = %dir.display())
)]
pub fn write_batch(
    dir: &Path,
    stimuli: &BTreeMap<String, StimulusBundle>,
) -> StimResult<Vec<ManifestEntry>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let mut manifest = Vec::with_capacity(stimuli.len());
    for (name, stim) in stimuli {
        let file = format!("{name}.png");
        save_png(stim, &dir.join(&file))?;
        let (rows, cols) = stim.shape();
        manifest.push(ManifestEntry {
            name: name.clone(),
            file,
            shape: [rows, cols],
            visual_size: [stim.visual_size.height, stim.visual_size.width],
            ppd: stim.ppd,
            masks: stim.masks.keys().cloned().collect(),
        });
    }

    let manifest_path: PathBuf = dir.join("manifest.json");
    let json = serde_json::to_vec_pretty(&manifest).context("serialize manifest")?;
    std::fs::write(&manifest_path, json)
        .with_context(|| format!("write manifest '{}'", manifest_path.display()))?;
    tracing::info!(path = %manifest_path.display(), "wrote stimulus batch");
    Ok(manifest)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
