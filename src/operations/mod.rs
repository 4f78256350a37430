//! Stateless operations over planar shapes.

pub mod query;
pub mod transform;

pub use query::{
    bounding_box, contains, intersects, intersects_shapes, polygon_contains, rectangle_center,
    BoundingBox,
};
pub use transform::{outline, rotate, rotate_shape, scale, translate};
