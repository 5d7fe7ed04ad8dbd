use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};
use crate::math::Vector3;

use super::Point3D;

/// A displacement in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3D {
    pub(crate) inner: Vector3,
}

impl Vector3D {
    /// Creates a new vector from its three components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: Vector3::new(x, y, z),
        }
    }

    /// Creates a vector from a slice of components.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly three components.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        match components {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GeometryError::DimensionMismatch {
                expected: 3,
                actual: components.len(),
            }),
        }
    }

    /// Creates the displacement from `p1` to `p2`, i.e. `p2 - p1`.
    #[must_use]
    pub fn from_two_points(p1: &Point3D, p2: &Point3D) -> Self {
        Self {
            inner: p2.inner - p1.inner,
        }
    }

    /// Returns the Euclidean norm of the vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.inner.norm()
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not 0, 1, or 2.
    pub fn component(&self, index: usize) -> Result<f64> {
        self.inner
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimension: 3,
            })
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    /// Computes the cross product with `other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.cross(&other.inner),
        }
    }
}

/// Aligned column rendering from the underlying algebra type.
/// A debugging aid, not a parse format.
impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            inner: self.inner + rhs.inner,
        }
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            inner: self.inner - rhs.inner,
        }
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self { inner: -self.inner }
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            inner: self.inner * rhs,
        }
    }
}

impl Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            inner: self.inner / rhs,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn component_round_trip() {
        let v = Vector3D::new(0.0, 1.0, 2.0);
        assert_relative_eq!(v.component(0).unwrap(), 0.0);
        assert_relative_eq!(v.component(1).unwrap(), 1.0);
        assert_relative_eq!(v.component(2).unwrap(), 2.0);
        assert!(matches!(
            v.component(3),
            Err(GeometryError::IndexOutOfRange {
                index: 3,
                dimension: 3
            })
        ));
    }

    #[test]
    fn slice_arity_rejected() {
        assert!(matches!(
            Vector3D::from_slice(&[1.0, 2.0]),
            Err(GeometryError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn two_point_construction() {
        // Direction from (0,1,2) to (1,0,2) is (1,-1,0).
        let p1 = Point3D::new(0.0, 1.0, 2.0);
        let p2 = Point3D::new(1.0, 0.0, 2.0);
        let v = Vector3D::from_two_points(&p1, &p2);
        assert_relative_eq!(v.x(), 1.0);
        assert_relative_eq!(v.y(), -1.0);
        assert_relative_eq!(v.z(), 0.0);
    }

    #[test]
    fn length_3_4_5() {
        let v = Vector3D::new(3.0, 0.0, 4.0);
        assert_relative_eq!(v.length(), 5.0);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_with_self_is_zero() {
        let v = Vector3D::new(2.0, -1.0, 0.5);
        assert_eq!(v.cross(&v), Vector3D::new(0.0, 0.0, 0.0));
    }
}
