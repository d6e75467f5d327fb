//! Generate many variants at once from a single parameter set.

/// Variant registry and parallel generation.
pub mod registry;
