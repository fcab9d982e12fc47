// src/core/geometry/mod.rs

//! Geometry collaborators of the spatial index: coordinate points, the
//! distance metric and axis-aligned bounding boxes.

pub mod bounds;
pub mod metric;
pub mod point;

pub use self::bounds::Bounds;
pub use self::metric::{squared_distance, Metric, SquaredEuclidean};
pub use self::point::{Point, Scalar};
