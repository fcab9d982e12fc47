// src/core/indexing/kdtree/tree.rs

//! Defines the core KD-Tree structures: `KdNode` and `KdTree`.

use crate::core::config::KdTreeConfig;
use crate::core::geometry::{Bounds, Point, SquaredEuclidean};

/// Represents a node in the KD-Tree.
///
/// Every point given to the builder is stored in exactly one node, either
/// as the pivot of a split or as the point of a single-point leaf. Parents
/// own their children exclusively.
#[derive(Debug, Clone)]
pub enum KdNode<P> {
    /// Splits its region by the hyperplane through `pivot` orthogonal to `axis`.
    /// `left` holds points at or below the pivot on `axis`, `right` those at or above.
    Split {
        pivot: P,
        axis: usize,
        left: Box<KdNode<P>>,
        right: Box<KdNode<P>>,
    },
    /// Leaf holding exactly one point.
    Single(P),
    /// Leaf for an empty partition.
    Empty,
}

impl<P> KdNode<P> {
    /// Number of levels below and including this node; empty leaves count zero.
    pub fn depth(&self) -> usize {
        match self {
            KdNode::Empty => 0,
            KdNode::Single(_) => 1,
            KdNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        match self {
            KdNode::Empty => 0,
            KdNode::Single(_) => 1,
            KdNode::Split { left, right, .. } => 1 + left.len() + right.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KdNode::Empty)
    }
}

/// A balanced KD-Tree, immutable once built.
///
/// The tree stores copies of the points it was built from together with
/// the bounding box of those points. Queries take a search box from the
/// caller; that box must enclose every stored point, otherwise a closer
/// point may be pruned. With `validate_search_bounds` enabled the tree
/// checks this and reports `PreconditionViolated`.
///
/// Concurrent read-only queries are safe: a query only reads the tree and
/// writes to its own accumulator.
#[derive(Debug, Clone)]
pub struct KdTree<P, M = SquaredEuclidean> {
    pub(super) root: KdNode<P>,
    pub(super) bounds: Option<Bounds<P>>,
    pub(super) metric: M,
    pub(super) config: KdTreeConfig,
    pub(super) len: usize,
    pub(super) dimension: usize,
}

impl<P: Point, M> KdTree<P, M> {
    /// Assembles a tree from a built node graph. Used by the builder.
    pub(super) fn from_parts(
        root: KdNode<P>,
        bounds: Option<Bounds<P>>,
        metric: M,
        config: KdTreeConfig,
    ) -> Self {
        let len = root.len();
        let dimension = bounds.as_ref().map_or(0, Bounds::dimension);
        KdTree {
            root,
            bounds,
            metric,
            config,
            len,
            dimension,
        }
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Dimensionality of the stored points; 0 for an empty tree.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Height of the node graph.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Bounding box of the stored points, `None` for an empty tree.
    pub fn bounds(&self) -> Option<&Bounds<P>> {
        self.bounds.as_ref()
    }

    pub fn root(&self) -> &KdNode<P> {
        &self.root
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn config(&self) -> &KdTreeConfig {
        &self.config
    }
}
