/// Bundle type and array aliases.
pub mod core;
/// Crate error type.
pub mod error;
