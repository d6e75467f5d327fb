//! Rasterizers for the primitive pattern families.
//!
//! Each returns a [`StimulusBundle`](crate::StimulusBundle) whose masks label the
//! regions the variant builders later select, crop or recolor.

/// Checkerboards with target checks.
pub mod checkerboard;
/// Square-wave gratings with targets (White's effect).
pub mod grating;
/// Nested square frames (bullseye) and two-sided simultaneous contrast.
pub mod rings;
