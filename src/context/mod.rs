/// Per-side context resolution.
pub mod resolve;
/// Ordered context intensity table.
pub mod table;
