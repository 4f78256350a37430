use super::Point;

/// An axis-aligned ellipse described by its bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Ellipse {
    /// Creates an ellipse inscribed in the rectangle at `(x, y)` with the given size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corner of the bounding rectangle with the smallest coordinates.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }
}
