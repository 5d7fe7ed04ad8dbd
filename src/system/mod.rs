mod euclid_2d;
mod euclid_3d;

pub use euclid_2d::Euclid2D;
pub use euclid_3d::Euclid3D;

/// Trait for dimension-tagged Euclidean measurement systems.
pub trait EuclideanSystem {
    /// Returns the spatial dimension the system operates in.
    fn dimension(&self) -> usize;
}
