pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, Result};
pub use geometry::{Color, Ellipse, Point, Polygon, Shape, ShapeKind};
