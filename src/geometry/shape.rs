use std::fmt;

use tracing::debug;

use super::{Ellipse, Polygon};
use crate::error::{GeometryError, Result};

/// A planar shape.
///
/// Only [`Shape::Polygon`] takes part in containment and intersection;
/// the other variants are carried for callers that store mixed shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Polygon(Polygon),
    Ellipse(Ellipse),
}

/// Discriminant of a [`Shape`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Polygon,
    Ellipse,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polygon => f.write_str("polygon"),
            Self::Ellipse => f.write_str("ellipse"),
        }
    }
}

impl Shape {
    /// Returns the kind of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    /// Returns the polygon, or `UnsupportedShapeKind` naming `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedShapeKind`] for non-polygon shapes.
    pub fn as_polygon(&self, operation: &'static str) -> Result<&Polygon> {
        match self {
            Self::Polygon(polygon) => Ok(polygon),
            Self::Ellipse(_) => {
                debug!(operation, kind = %self.kind(), "rejecting unsupported shape");
                Err(GeometryError::UnsupportedShapeKind {
                    operation,
                    kind: self.kind(),
                })
            }
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}
