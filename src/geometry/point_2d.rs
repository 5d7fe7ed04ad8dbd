use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Vector2D;

/// A location in 2D space.
///
/// Structurally a pair of coordinates like [`Vector2D`], but semantically a
/// position rather than a displacement. The API never coerces between the
/// two; use [`Self::as_vector`] and [`Self::from_vector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub(crate) inner: Point2,
}

impl Point2D {
    /// Creates a new point from its two coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: Point2::new(x, y),
        }
    }

    /// Creates a point from a slice of coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly two coordinates.
    pub fn from_slice(coordinates: &[f64]) -> Result<Self> {
        match coordinates {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(GeometryError::DimensionMismatch {
                expected: 2,
                actual: coordinates.len(),
            }),
        }
    }

    /// Reinterprets the point as a displacement from the origin.
    #[must_use]
    pub fn as_vector(&self) -> Vector2D {
        Vector2D {
            inner: self.inner.coords,
        }
    }

    /// Creates the point reached by following `vector` from the origin.
    #[must_use]
    pub fn from_vector(vector: &Vector2D) -> Self {
        Self {
            inner: Point2::from(vector.inner),
        }
    }

    /// Returns the coordinate at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not 0 or 1.
    pub fn component(&self, index: usize) -> Result<f64> {
        self.inner
            .coords
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimension: 2,
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
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vector_conversion_round_trip() {
        let p = Point2D::new(2.5, -1.0);
        let v = p.as_vector();
        assert_relative_eq!(v.x(), 2.5);
        assert_relative_eq!(v.y(), -1.0);
        assert_eq!(Point2D::from_vector(&v), p);
    }

    #[test]
    fn slice_arity_rejected() {
        assert!(matches!(
            Point2D::from_slice(&[1.0]),
            Err(GeometryError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn component_round_trip() {
        let p = Point2D::from_slice(&[0.0, 1.0]).unwrap();
        assert_relative_eq!(p.component(0).unwrap(), 0.0);
        assert_relative_eq!(p.component(1).unwrap(), 1.0);
        assert!(p.component(2).is_err());
    }
}
