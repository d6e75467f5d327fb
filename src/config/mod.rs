/// Shared builder parameters and their defaults.
pub mod params;
