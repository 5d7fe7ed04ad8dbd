use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

use super::{Point2D, Vector2D};

/// A line in 2D space through two endpoints.
///
/// Endpoints are stored verbatim; nothing is validated or normalized at
/// construction time. Consumers that divide by the direction length check
/// degeneracy lazily, at the division site.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    point1: Point2D,
    point2: Point2D,
}

impl Line2D {
    /// Creates a new line through `point1` and `point2`.
    #[must_use]
    pub fn new(point1: Point2D, point2: Point2D) -> Self {
        Self { point1, point2 }
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn point1(&self) -> &Point2D {
        &self.point1
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn point2(&self) -> &Point2D {
        &self.point2
    }

    /// Returns the displacement from the first endpoint to the second.
    ///
    /// The zero vector when the endpoints coincide.
    #[must_use]
    pub fn direction_vector(&self) -> Vector2D {
        Vector2D::from_two_points(&self.point1, &self.point2)
    }

    /// Returns the distance between the two endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction_vector().length()
    }

    /// Returns whether the endpoints coincide within [`TOLERANCE`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Returns the unit-length direction of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn unit_direction(&self) -> Result<Vector2D> {
        let direction = self.direction_vector();
        let len = direction.length();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(direction / len)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_stored_verbatim() {
        let p1 = Point2D::new(1.0, 0.0);
        let p2 = Point2D::new(1.0, 1.0);
        let line = Line2D::new(p1, p2);
        assert_eq!(*line.point1(), p1);
        assert_eq!(*line.point2(), p2);
    }

    #[test]
    fn direction_is_second_minus_first() {
        let line = Line2D::new(Point2D::new(0.0, 1.0), Point2D::new(1.0, 0.0));
        assert_eq!(line.direction_vector(), Vector2D::new(1.0, -1.0));
    }

    #[test]
    fn length_is_endpoint_distance() {
        let line = Line2D::new(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
        assert_relative_eq!(line.length(), 5.0);
    }

    #[test]
    fn unit_direction_has_unit_norm() {
        let line = Line2D::new(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
        let unit = line.unit_direction().unwrap();
        assert_relative_eq!(unit.length(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(unit.x(), 0.6);
        assert_relative_eq!(unit.y(), 0.8);
    }

    #[test]
    fn degenerate_line_has_zero_direction() {
        let p = Point2D::new(2.0, 2.0);
        let line = Line2D::new(p, p);
        assert!(line.is_degenerate());
        assert_eq!(line.direction_vector(), Vector2D::new(0.0, 0.0));
        assert!(matches!(
            line.unit_direction(),
            Err(GeometryError::ZeroVector)
        ));
    }
}
