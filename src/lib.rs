#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![forbid(unsafe_code)]

//! # Oxikd: a balanced KD-tree for nearest-neighbour search
//!
//! `oxikd` indexes a fixed-dimensionality point set and answers nearest and
//! k-nearest-neighbour queries by recursively partitioning space and pruning
//! subtrees whose bounding box cannot hold a better answer. It features:
//! - Median-split construction along the longest axis of each region
//! - Single-best, k-best and fixed-radius accumulators driving the pruning
//! - Points as `[T; D]` or `Vec<T>` over `f32`/`f64`, with a pluggable metric
//! - TOML configuration for query validation limits
//!
//! ```
//! use oxikd::{build_kdtree, Bounds};
//!
//! let tree = build_kdtree(vec![[0.1, 0.2], [0.8, 0.9], [0.4, 0.4]]).unwrap();
//! let search = Bounds::new([-2.0, -2.0], [2.0, 2.0]).unwrap();
//!
//! let best = tree.nearest_neighbour(&[0.5, 0.5], &search).unwrap().unwrap();
//! assert_eq!(best.point, [0.4, 0.4]);
//!
//! let two = tree.nearest_neighbours(2, &[0.0, 0.0], &search).unwrap();
//! assert_eq!(two[0].point, [0.1, 0.2]);
//! assert_eq!(two[1].point, [0.4, 0.4]);
//! ```

pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::core::common::OxikdError;
pub use crate::core::config::{KdTreeConfig, KdTreeConfigBuilder};
pub use crate::core::geometry::{squared_distance, Bounds, Metric, Point, Scalar, SquaredEuclidean};
pub use crate::core::indexing::kdtree::{
    build_kdtree, Accumulator, KdNode, KdTree, KdTreeBuilder, KdTreeError, NearestNeighbour,
    NearestNeighbours, Neighbour, WithinRadius,
};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, OxikdError>;
