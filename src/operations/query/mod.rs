mod bounding_box;
mod contains;
mod intersect;

pub use bounding_box::{bounding_box, rectangle_center, BoundingBox};
pub use contains::{contains, polygon_contains};
pub use intersect::{intersects, intersects_shapes};
