//! Combining and masking stimulus bundles.

/// Derived masks (separation, inner rings, corners, flankers) and pixel selection.
pub mod masks;
/// Padding, stacking, flipping and rotating whole bundles.
pub mod spatial;
