use nalgebra::Rotation2;
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Point, Polygon, Shape};
use crate::math::round_coord;

/// Rotates a polygon by `degrees` counter-clockwise about its first vertex.
///
/// The pivot is the first vertex, not the centroid, so it maps to itself.
/// Rotated coordinates are rounded to the nearest integer, ties away from
/// zero. An empty polygon is returned unchanged.
#[must_use]
pub fn rotate(polygon: &Polygon, degrees: f64) -> Polygon {
    let Some(pivot) = polygon.first() else {
        return Polygon::default();
    };
    let rotation = Rotation2::new(degrees.to_radians());
    polygon
        .iter()
        .map(|&p| rotate_point(&rotation, p, pivot))
        .collect()
}

/// Applies `rotation` to `point` about `pivot`, rounding the result.
#[must_use]
pub fn rotate_point(rotation: &Rotation2<f64>, point: Point, pivot: Point) -> Point {
    let origin = pivot.to_point2();
    let rotated = origin + rotation * (point.to_point2() - origin);
    Point::new(round_coord(rotated.x), round_coord(rotated.y))
}

/// [`rotate`] over shapes.
///
/// # Errors
///
/// Returns `NotYetImplemented` for shapes other than polygons.
pub fn rotate_shape(shape: &Shape, degrees: f64) -> Result<Polygon> {
    match shape {
        Shape::Polygon(polygon) => Ok(rotate(polygon, degrees)),
        Shape::Ellipse(_) => {
            debug!(kind = %shape.kind(), "rotate unavailable");
            Err(GeometryError::NotYetImplemented {
                operation: "rotate",
                kind: shape.kind(),
            })
        }
    }
}
