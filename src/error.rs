use thiserror::Error;

use crate::geometry::ShapeKind;

/// Errors raised when an operation receives a shape it cannot handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The operation is only defined for other shape kinds.
    #[error("{operation} does not support {kind} shapes")]
    UnsupportedShapeKind {
        operation: &'static str,
        kind: ShapeKind,
    },

    /// The operation is planned for this shape kind but not available yet.
    #[error("{operation} is not yet implemented for {kind} shapes")]
    NotYetImplemented {
        operation: &'static str,
        kind: ShapeKind,
    },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
