use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

use super::{Point3D, Vector3D};

/// A line in 3D space through two endpoints.
///
/// Same contract as [`Line2D`](super::Line2D): endpoints stored verbatim,
/// degeneracy checked lazily at use sites.
#[derive(Debug, Clone, PartialEq)]
pub struct Line3D {
    point1: Point3D,
    point2: Point3D,
}

impl Line3D {
    /// Creates a new line through `point1` and `point2`.
    #[must_use]
    pub fn new(point1: Point3D, point2: Point3D) -> Self {
        Self { point1, point2 }
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn point1(&self) -> &Point3D {
        &self.point1
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn point2(&self) -> &Point3D {
        &self.point2
    }

    /// Returns the displacement from the first endpoint to the second.
    #[must_use]
    pub fn direction_vector(&self) -> Vector3D {
        Vector3D::from_two_points(&self.point1, &self.point2)
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
    pub fn unit_direction(&self) -> Result<Vector3D> {
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
    fn direction_is_second_minus_first() {
        let line = Line3D::new(Point3D::new(0.0, 1.0, 2.0), Point3D::new(1.0, 0.0, 2.0));
        assert_eq!(line.direction_vector(), Vector3D::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn unit_direction_has_unit_norm() {
        let line = Line3D::new(Point3D::new(0.0, 0.0, 0.0), Point3D::new(2.0, 0.0, 0.0));
        let unit = line.unit_direction().unwrap();
        assert_relative_eq!(unit.length(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn degenerate_line_rejected_by_unit_direction() {
        let p = Point3D::new(-1.0, 0.5, 3.0);
        let line = Line3D::new(p, p);
        assert!(line.is_degenerate());
        assert!(matches!(
            line.unit_direction(),
            Err(GeometryError::ZeroVector)
        ));
    }
}
