/// Canonical sizes, radii and target index schemes.
pub mod layout;
