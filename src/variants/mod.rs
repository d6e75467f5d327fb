//! One builder per illusion family.
//!
//! Every builder takes [`StimulusParams`](crate::StimulusParams), validates it before
//! allocating, and returns a fresh bundle; builders share no state.

/// Concentric ring stimuli.
pub mod bullseye;
/// Checkerboard stimuli and the cross variants.
pub mod checkerboard;
/// Simultaneous brightness contrast.
pub mod sbc;
/// White's effect gratings.
pub mod whites;
