use tracing::trace;

use super::polygon_contains;
use crate::error::Result;
use crate::geometry::{Polygon, Shape};

/// Reports whether any vertex of either polygon lies inside the other.
///
/// This is a vertex-containment test, not a true overlap test: two bars
/// crossing like a plus sign, with no vertex inside the other bar, are
/// reported as not intersecting. It is sufficient for checking whether a
/// door polygon sits inside a room polygon.
#[must_use]
pub fn intersects(source: &Polygon, target: &Polygon) -> bool {
    if let Some(vertex) = source.iter().find(|p| polygon_contains(target, **p)) {
        trace!(x = vertex.x(), y = vertex.y(), "source vertex inside target");
        return true;
    }
    if let Some(vertex) = target.iter().find(|p| polygon_contains(source, **p)) {
        trace!(x = vertex.x(), y = vertex.y(), "target vertex inside source");
        return true;
    }
    false
}

/// [`intersects`] over shapes.
///
/// # Errors
///
/// Returns `UnsupportedShapeKind` if either shape is not a polygon.
pub fn intersects_shapes(source: &Shape, target: &Shape) -> Result<bool> {
    let source = source.as_polygon("intersects")?;
    let target = target.as_polygon("intersects")?;
    Ok(intersects(source, target))
}
