use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::Shape;
use crate::math::{Matrix3, Point2, Vector2};

/// Converts a shape into its outline as floating-point vertices.
///
/// # Errors
///
/// Returns `NotYetImplemented` for ellipses.
pub fn outline(shape: &Shape) -> Result<Vec<Point2>> {
    match shape {
        Shape::Polygon(polygon) => Ok(polygon.iter().map(|p| p.to_point2()).collect()),
        Shape::Ellipse(_) => {
            debug!(kind = %shape.kind(), "outline unavailable");
            Err(GeometryError::NotYetImplemented {
                operation: "outline",
                kind: shape.kind(),
            })
        }
    }
}

/// Outline of `shape` scaled by `(sx, sy)` about the origin.
///
/// The origin stays fixed, not the shape's own center.
///
/// # Errors
///
/// Returns `NotYetImplemented` for ellipses.
pub fn scale(shape: &Shape, sx: f64, sy: f64) -> Result<Vec<Point2>> {
    let matrix = Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy));
    Ok(outline(shape)?
        .iter()
        .map(|p| matrix.transform_point(p))
        .collect())
}
