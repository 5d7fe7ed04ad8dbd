mod line_2d;
mod line_3d;
mod point_2d;
mod point_3d;
mod vector_2d;
mod vector_3d;

pub use line_2d::Line2D;
pub use line_3d::Line3D;
pub use point_2d::Point2D;
pub use point_3d::Point3D;
pub use vector_2d::Vector2D;
pub use vector_3d::Vector3D;
