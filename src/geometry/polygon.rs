use std::slice;

use super::Point;

/// A closed polygon given by its vertices in order.
///
/// The last vertex implicitly connects back to the first. Vertex order
/// defines the edges, so two polygons with the same vertex set in a
/// different order are different shapes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the first vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the closed edges `(v[i-1], v[i])`, starting with `(v[n-1], v[0])`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let last = self.points.last().copied();
        last.into_iter()
            .chain(self.points.iter().copied())
            .zip(self.points.iter().copied())
    }

    /// Iterates over the vertices.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        [(0, 0), (10, 0), (0, 10)].into_iter().map(Point::from).collect()
    }

    #[test]
    fn preserves_vertex_order() {
        let poly = triangle();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.first(), Some(Point::new(0, 0)));
        assert_eq!(poly.points()[2], Point::new(0, 10));
    }

    #[test]
    fn edges_wrap_around() {
        let edges: Vec<_> = triangle().edges().collect();
        assert_eq!(
            edges,
            vec![
                (Point::new(0, 10), Point::new(0, 0)),
                (Point::new(0, 0), Point::new(10, 0)),
                (Point::new(10, 0), Point::new(0, 10)),
            ]
        );
    }

    #[test]
    fn into_points_returns_vertices_in_order() {
        let points = triangle().into_points();
        assert_eq!(points, vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)]);
        assert_eq!(Polygon::from(points), triangle());
    }

    #[test]
    fn empty_polygon_has_no_edges() {
        let poly = Polygon::default();
        assert!(poly.is_empty());
        assert_eq!(poly.first(), None);
        assert_eq!(poly.edges().count(), 0);
    }

    #[test]
    fn single_point_has_degenerate_edge() {
        let poly = Polygon::new(vec![Point::new(1, 1)]);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges, vec![(Point::new(1, 1), Point::new(1, 1))]);
    }
}
