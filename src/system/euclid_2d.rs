use crate::error::{GeometryError, Result};
use crate::geometry::{Line2D, Point2D, Vector2D, Vector3D};

use super::EuclideanSystem;

/// Measurement operations for 2D Euclidean space.
///
/// Stateless; exists only to group the dimension-specific operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclid2D;

impl Euclid2D {
    /// Creates a new 2D system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the cross product of two 2D vectors, embedded in 3D.
    ///
    /// 2D vectors have no native cross product; the result is
    /// `(0, 0, v1.x * v2.y - v1.y * v2.x)`. The Z component is the signed
    /// area of the parallelogram spanned by the operands, so both sign
    /// (orientation) and magnitude (area) carry meaning.
    #[must_use]
    pub fn cross_product(&self, v1: &Vector2D, v2: &Vector2D) -> Vector3D {
        Vector3D::new(0.0, 0.0, v1.x() * v2.y() - v1.y() * v2.x())
    }

    /// Computes the norm of the cross product of two 2D vectors.
    ///
    /// Only the Z component of the embedded cross product is nonzero, so
    /// this collapses to `|v1.x * v2.y - v1.y * v2.x|`, the unsigned area
    /// of the parallelogram spanned by the operands.
    #[must_use]
    pub fn cross_product_norm(&self, v1: &Vector2D, v2: &Vector2D) -> f64 {
        self.cross_product(v1, v2).length()
    }

    /// Computes twice the area of the triangle formed by `point` and the
    /// endpoints of `line`.
    ///
    /// Takes the cross product of the vector from `point` to the line's
    /// first endpoint with the line's direction vector; the norm of that
    /// product is twice the triangle area.
    #[must_use]
    pub fn double_triangle_area(&self, point: &Point2D, line: &Line2D) -> f64 {
        let to_line = Vector2D::from_two_points(point, line.point1());
        self.cross_product_norm(&to_line, &line.direction_vector())
    }

    /// Computes the perpendicular distance from `point` to `line`.
    ///
    /// From `area = base * height / 2`: the double triangle area divided by
    /// the length of the line's direction vector. The division is
    /// unguarded; a degenerate line yields `0.0 / 0.0 = NaN`. Use
    /// [`Self::try_distance_point_line`] for a checked variant.
    #[must_use]
    pub fn distance_point_line(&self, point: &Point2D, line: &Line2D) -> f64 {
        self.double_triangle_area(point, line) / line.length()
    }

    /// Checked variant of [`Self::distance_point_line`].
    ///
    /// # Errors
    ///
    /// Returns an error if the line is degenerate.
    pub fn try_distance_point_line(&self, point: &Point2D, line: &Line2D) -> Result<f64> {
        if line.is_degenerate() {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(self.distance_point_line(point, line))
    }
}

impl EuclideanSystem for Euclid2D {
    fn dimension(&self) -> usize {
        2
    }
}
