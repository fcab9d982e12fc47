// src/core/indexing/kdtree/builder.rs

//! Logic for building a balanced KD-Tree from a set of points.

use std::cmp::Ordering;

use log::debug;

use super::error::KdTreeError;
use super::tree::{KdNode, KdTree};
use crate::core::config::KdTreeConfig;
use crate::core::geometry::{Bounds, Metric, Point, SquaredEuclidean};

/// Builds `KdTree`s with a chosen metric and configuration.
///
/// ```
/// use oxikd::KdTreeBuilder;
///
/// let tree = KdTreeBuilder::new()
///     .build(vec![[0.0, 0.0], [1.0, 0.5], [0.25, 0.75]])
///     .unwrap();
/// let nearest = tree.nearest(&[0.9, 0.4]).unwrap().unwrap();
/// assert_eq!(nearest.point, [1.0, 0.5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KdTreeBuilder<M = SquaredEuclidean> {
    metric: M,
    config: KdTreeConfig,
}

impl KdTreeBuilder<SquaredEuclidean> {
    /// A builder using squared Euclidean distance and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> KdTreeBuilder<M> {
    /// Replaces the distance metric.
    pub fn metric<N>(self, metric: N) -> KdTreeBuilder<N> {
        KdTreeBuilder {
            metric,
            config: self.config,
        }
    }

    /// Replaces the configuration carried into the built tree.
    pub fn config(mut self, config: KdTreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a tree holding every point of `points`.
    ///
    /// Each level sorts its subset along the longest axis of its box and
    /// makes the median the split pivot; the points before and after it form
    /// the two children. The sort is stable, so duplicate coordinates keep
    /// their input order and the result is deterministic.
    ///
    /// # Errors
    /// `InvalidInput` for zero-dimensional points or non-finite coordinates,
    /// `DimensionMismatch` if the points do not all share one dimensionality.
    pub fn build<P>(self, points: Vec<P>) -> Result<KdTree<P, M>, KdTreeError>
    where
        P: Point,
        M: Metric<P>,
    {
        let Some(bounds) = Bounds::from_points(&points)? else {
            debug!("Building empty KD-tree");
            return Ok(KdTree::from_parts(KdNode::Empty, None, self.metric, self.config));
        };

        debug!(
            "Building KD-tree from {} points of dimension {}",
            points.len(),
            bounds.dimension()
        );
        let root = build_recursive(points, &bounds);
        let tree = KdTree::from_parts(root, Some(bounds), self.metric, self.config);
        debug!("KD-tree built: {} points, depth {}", tree.len(), tree.depth());
        Ok(tree)
    }
}

/// Builds a tree with squared Euclidean distance and the default configuration.
pub fn build_kdtree<P: Point>(points: Vec<P>) -> Result<KdTree<P>, KdTreeError> {
    KdTreeBuilder::new().build(points)
}

/// Recursively builds the node for `subset`, whose points all lie in `bounds`.
fn build_recursive<P: Point>(mut subset: Vec<P>, bounds: &Bounds<P>) -> KdNode<P> {
    if subset.len() <= 1 {
        return subset.pop().map_or(KdNode::Empty, KdNode::Single);
    }

    let axis = bounds.longest_dimension();
    subset.sort_by(|a, b| {
        a.coord(axis)
            .partial_cmp(&b.coord(axis))
            .unwrap_or(Ordering::Equal)
    });

    let median_idx = subset.len() / 2;
    let right = subset.split_off(median_idx + 1);
    let pivot = subset.remove(median_idx);
    let left = subset;

    let (lower, upper) = bounds.split(&pivot, axis);

    KdNode::Split {
        left: Box::new(build_recursive(left, &lower)),
        right: Box::new(build_recursive(right, &upper)),
        pivot,
        axis,
    }
}
