mod color;
mod ellipse;
mod point;
mod polygon;
mod shape;

pub use color::Color;
pub use ellipse::Ellipse;
pub use point::Point;
pub use polygon::Polygon;
pub use shape::{Shape, ShapeKind};
