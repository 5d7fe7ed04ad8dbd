use crate::error::{GeometryError, Result};
use crate::geometry::{Line3D, Point3D, Vector3D};

use super::EuclideanSystem;

/// Measurement operations for 3D Euclidean space.
///
/// Same contract shape as [`Euclid2D`](super::Euclid2D), operating natively
/// in three dimensions: no embedding step, the cross product is the true 3D
/// one, and the area/distance identities are unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclid3D;

impl Euclid3D {
    /// Creates a new 3D system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the cross product of two 3D vectors.
    #[must_use]
    pub fn cross_product(&self, v1: &Vector3D, v2: &Vector3D) -> Vector3D {
        v1.cross(v2)
    }

    /// Computes the norm of the cross product of two 3D vectors.
    ///
    /// Equals the area of the parallelogram spanned by the operands.
    #[must_use]
    pub fn cross_product_norm(&self, v1: &Vector3D, v2: &Vector3D) -> f64 {
        self.cross_product(v1, v2).length()
    }

    /// Computes twice the area of the triangle formed by `point` and the
    /// endpoints of `line`.
    #[must_use]
    pub fn double_triangle_area(&self, point: &Point3D, line: &Line3D) -> f64 {
        let to_line = Vector3D::from_two_points(point, line.point1());
        self.cross_product_norm(&to_line, &line.direction_vector())
    }

    /// Computes the perpendicular distance from `point` to `line`.
    ///
    /// Unguarded like the 2D variant: a degenerate line yields
    /// `0.0 / 0.0 = NaN`. Use [`Self::try_distance_point_line`] for a
    /// checked variant.
    #[must_use]
    pub fn distance_point_line(&self, point: &Point3D, line: &Line3D) -> f64 {
        self.double_triangle_area(point, line) / line.length()
    }

    /// Checked variant of [`Self::distance_point_line`].
    ///
    /// # Errors
    ///
    /// Returns an error if the line is degenerate.
    pub fn try_distance_point_line(&self, point: &Point3D, line: &Line3D) -> Result<f64> {
        if line.is_degenerate() {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(self.distance_point_line(point, line))
    }
}

impl EuclideanSystem for Euclid3D {
    fn dimension(&self) -> usize {
        3
    }
}
