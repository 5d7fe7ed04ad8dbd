use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::Vector3D;

/// A location in 3D space.
///
/// See [`Point2D`](super::Point2D) for the position/displacement split; the
/// same rules apply here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub(crate) inner: Point3,
}

impl Point3D {
    /// Creates a new point from its three coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: Point3::new(x, y, z),
        }
    }

    /// Creates a point from a slice of coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly three coordinates.
    pub fn from_slice(coordinates: &[f64]) -> Result<Self> {
        match coordinates {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GeometryError::DimensionMismatch {
                expected: 3,
                actual: coordinates.len(),
            }),
        }
    }

    /// Reinterprets the point as a displacement from the origin.
    #[must_use]
    pub fn as_vector(&self) -> Vector3D {
        Vector3D {
            inner: self.inner.coords,
        }
    }

    /// Creates the point reached by following `vector` from the origin.
    #[must_use]
    pub fn from_vector(vector: &Vector3D) -> Self {
        Self {
            inner: Point3::from(vector.inner),
        }
    }

    /// Returns the coordinate at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not 0, 1, or 2.
    pub fn component(&self, index: usize) -> Result<f64> {
        self.inner
            .coords
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimension: 3,
            })
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Returns the Z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.inner.z
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
