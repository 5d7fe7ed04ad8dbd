use thiserror::Error;

/// Error type for the Euclis geometry kernel.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("component index {index} is out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("degenerate line: endpoints coincide")]
    DegenerateLine,

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
