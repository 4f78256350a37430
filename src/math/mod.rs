/// 2D point type for floating-point intermediate math.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rounds a floating-point coordinate to the nearest integer, ties away from zero.
///
/// Values outside the `i32` range saturate at its bounds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_coord(value: f64) -> i32 {
    value.round() as i32
}
