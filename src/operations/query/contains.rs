use tracing::debug;

use crate::geometry::{Point, Polygon, Shape};

/// Tests whether `point` lies inside `shape` using the even-odd rule.
///
/// Only polygons have an interior here; any other shape yields `false`.
/// Points exactly on an edge or vertex may be classified either way.
#[must_use]
pub fn contains(shape: &Shape, point: Point) -> bool {
    match shape {
        Shape::Polygon(polygon) => polygon_contains(polygon, point),
        Shape::Ellipse(_) => {
            debug!(kind = %shape.kind(), "containment undefined for shape kind");
            false
        }
    }
}

/// Even-odd ray casting against the polygon's closed edge loop.
///
/// A polygon with fewer than three vertices contains nothing.
#[must_use]
pub fn polygon_contains(polygon: &Polygon, point: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let px = f64::from(point.x());
    let py = f64::from(point.y());

    let mut inside = false;
    for (prev, cur) in polygon.edges() {
        let (x1, y1) = (f64::from(cur.x()), f64::from(cur.y()));
        let (x2, y2) = (f64::from(prev.x()), f64::from(prev.y()));
        // Half-open test so a vertex level with the point counts for one edge only.
        let straddles = (y1 < py && y2 >= py) || (y1 >= py && y2 < py);
        if straddles {
            let crossing_x = x1 + (py - y1) / (y2 - y1) * (x2 - x1);
            if crossing_x > px {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ellipse;

    fn poly(coords: &[(i32, i32)]) -> Polygon {
        coords.iter().copied().map(Point::from).collect()
    }

    fn square() -> Polygon {
        poly(&[(0, 0), (10, 0), (10, 10), (0, 10)])
    }

    #[test]
    fn square_center_inside() {
        assert!(polygon_contains(&square(), Point::new(5, 5)));
        assert!(contains(&Shape::from(square()), Point::new(5, 5)));
    }

    #[test]
    fn square_right_of_edge_outside() {
        assert!(!polygon_contains(&square(), Point::new(15, 5)));
    }

    #[test]
    fn square_border_points_are_unspecified() {
        // Border classification is not guaranteed either way. Currently the
        // right edge (10, 5) reports false: its crossing at x = 10 is not
        // strictly greater than px. The left edge (0, 5) reports true: only
        // the crossing at x = 10 lies right of it. The vertex (0, 0) reports
        // false: no edge straddles y = 0 under the half-open test.
        let on_right_edge = polygon_contains(&square(), Point::new(10, 5));
        let on_left_edge = polygon_contains(&square(), Point::new(0, 5));
        let on_vertex = polygon_contains(&square(), Point::new(0, 0));
        eprintln!("border: right edge {on_right_edge}, left edge {on_left_edge}, vertex {on_vertex}");
    }

    #[test]
    fn convex_interior_points_inside() {
        let hexagon = poly(&[(10, 0), (30, 0), (40, 20), (30, 40), (10, 40), (0, 20)]);
        for x in 11..30 {
            for y in 1..40 {
                assert!(
                    polygon_contains(&hexagon, Point::new(x, y)),
                    "({x}, {y}) should be inside"
                );
            }
        }
    }

    #[test]
    fn far_points_outside() {
        let hexagon = poly(&[(10, 0), (30, 0), (40, 20), (30, 40), (10, 40), (0, 20)]);
        for &(x, y) in &[(-100, 20), (100, 20), (20, -100), (20, 100), (-50, -50), (90, 90)] {
            assert!(!polygon_contains(&hexagon, Point::new(x, y)));
        }
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape opening upwards.
        let u = poly(&[(0, 0), (30, 0), (30, 30), (20, 30), (20, 10), (10, 10), (10, 30), (0, 30)]);
        assert!(polygon_contains(&u, Point::new(5, 20)));
        assert!(polygon_contains(&u, Point::new(25, 20)));
        assert!(polygon_contains(&u, Point::new(15, 5)));
        assert!(!polygon_contains(&u, Point::new(15, 20)));
    }

    #[test]
    fn vertex_level_with_point_counted_once() {
        // Ray from (5, 10) passes through vertex (20, 10).
        let diamond = poly(&[(10, 0), (20, 10), (10, 20), (0, 10)]);
        assert!(polygon_contains(&diamond, Point::new(5, 10)));
        assert!(!polygon_contains(&diamond, Point::new(-5, 10)));
    }

    #[test]
    fn clockwise_and_counter_clockwise_agree() {
        let ccw = square();
        let cw = poly(&[(0, 0), (0, 10), (10, 10), (10, 0)]);
        for &(x, y) in &[(5, 5), (1, 9), (15, 5), (-1, -1)] {
            let p = Point::new(x, y);
            assert_eq!(polygon_contains(&ccw, p), polygon_contains(&cw, p));
        }
    }

    #[test]
    fn fewer_than_three_points_contains_nothing() {
        let candidates = [Point::new(0, 0), Point::new(1, 1), Point::new(5, 0)];
        for polygon in [poly(&[]), poly(&[(0, 0)]), poly(&[(0, 0), (10, 0)])] {
            for &p in &candidates {
                assert!(!polygon_contains(&polygon, p));
            }
        }
    }

    #[test]
    fn ellipse_contains_nothing() {
        let shape = Shape::from(Ellipse::new(0, 0, 10, 10));
        assert!(!contains(&shape, Point::new(5, 5)));
    }
}
