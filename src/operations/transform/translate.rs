use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Point, Polygon, Shape};

/// Returns a copy of the polygon with every vertex offset by `(dx, dy)`.
///
/// Coordinates wrap on `i32` overflow.
///
/// # Errors
///
/// Returns `NotYetImplemented` for shapes other than polygons.
pub fn translate(shape: &Shape, dx: i32, dy: i32) -> Result<Polygon> {
    match shape {
        Shape::Polygon(polygon) => Ok(polygon
            .iter()
            .map(|p| Point::new(p.x().wrapping_add(dx), p.y().wrapping_add(dy)))
            .collect()),
        Shape::Ellipse(_) => {
            debug!(kind = %shape.kind(), "translate unavailable");
            Err(GeometryError::NotYetImplemented {
                operation: "translate",
                kind: shape.kind(),
            })
        }
    }
}
