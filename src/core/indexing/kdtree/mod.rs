// src/core/indexing/kdtree/mod.rs

//! KD-Tree implementation for nearest-neighbour search.
//!
//! `KdTreeBuilder` turns a point set into a balanced `KdTree` by recursive
//! median splitting; the tree answers single and k-nearest-neighbour
//! queries through accumulators that drive subtree pruning.

// Re-export key components for easier use.
pub use self::accumulator::{
    Accumulator, NearestNeighbour, NearestNeighbours, Neighbour, WithinRadius,
};
pub use self::builder::{build_kdtree, KdTreeBuilder};
pub use self::error::KdTreeError;
pub use self::tree::{KdNode, KdTree};

// Modules within the kdtree crate
mod accumulator;
mod builder;
mod error;
mod search;
mod tree;

#[cfg(test)]
mod tests;
