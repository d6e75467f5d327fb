//! Grayscale PNG output for generated stimuli.

/// PNG and manifest writers.
pub mod png;
