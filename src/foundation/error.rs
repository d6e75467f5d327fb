/// Crate-wide result alias.
pub type StimResult<T> = Result<T, StimError>;

/// Errors raised while generating or composing stimuli.
///
/// Every failure is local to one generator call; nothing is clipped, wrapped, or
/// silently defaulted.
#[derive(thiserror::Error, Debug)]
pub enum StimError {
    /// Non-positive sizes, empty surround counts, unordered radii, impossible padding.
    #[error("invalid geometry: {0}")]
    Geometry(String),

    /// A context name that is not present in the intensity table or index scheme.
    #[error("unknown context: {0}")]
    UnknownContext(String),

    /// Arrays or bundles whose shapes cannot be combined.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A target, corner, flanker or bar index outside the valid label range.
    #[error("index error: {0}")]
    Index(String),

    /// Malformed configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level failure (I/O, encoding, thread pool).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StimError {
    /// Build a [`StimError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`StimError::UnknownContext`] value.
    pub fn unknown_context(name: impl Into<String>) -> Self {
        Self::UnknownContext(name.into())
    }

    /// Build a [`StimError::ShapeMismatch`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Build a [`StimError::Index`] value.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::Index(msg.into())
    }

    /// Build a [`StimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
