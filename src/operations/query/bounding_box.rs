use crate::geometry::{Point, Polygon};

/// An axis-aligned bounding box on the integer plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point,
    /// Maximum corner of the bounding box.
    pub max: Point,
}

impl BoundingBox {
    /// The four corners as a polygon: `min`, `(max.x, min.y)`, `max`, `(min.x, max.y)`.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(vec![
            self.min,
            Point::new(self.max.x(), self.min.y()),
            self.max,
            Point::new(self.min.x(), self.max.y()),
        ])
    }
}

/// Computes the axis-aligned bounding box of a polygon.
///
/// Returns `None` for a polygon without vertices.
#[must_use]
pub fn bounding_box(polygon: &Polygon) -> Option<BoundingBox> {
    let first = polygon.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x(), first.y(), first.x(), first.y());
    for p in polygon {
        min_x = min_x.min(p.x());
        min_y = min_y.min(p.y());
        max_x = max_x.max(p.x());
        max_y = max_y.max(p.y());
    }
    Some(BoundingBox {
        min: Point::new(min_x, min_y),
        max: Point::new(max_x, max_y),
    })
}

/// Midpoint of a bounding box, truncated toward zero per axis.
///
/// Not used by [`rotate`](crate::operations::rotate), which pivots on the
/// first vertex.
#[must_use]
pub fn rectangle_center(bbox: &BoundingBox) -> Point {
    Point::new(
        midpoint(bbox.min.x(), bbox.max.x()),
        midpoint(bbox.min.y(), bbox.max.y()),
    )
}

/// `min + (max - min) / 2`, widened so spans beyond `i32::MAX` do not overflow.
#[allow(clippy::cast_possible_truncation)]
fn midpoint(min: i32, max: i32) -> i32 {
    let (min, max) = (i64::from(min), i64::from(max));
    // Lies between min and max, so it fits back into i32.
    ((max - min) / 2 + min) as i32
}
