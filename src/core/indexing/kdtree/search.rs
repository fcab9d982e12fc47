// src/core/indexing/kdtree/search.rs

//! Nearest-neighbour search over a `KdTree`.
//!
//! Every query seeds an accumulator with the distance to the farthest corner
//! of the search box and walks the tree from the root, carrying the box that
//! corresponds to each node. A split node offers its pivot, descends into
//! the half that contains the target, and only visits the other half if the
//! closest point of that half could beat the accumulator's threshold.

use log::{trace, warn};

use super::accumulator::{
    Accumulator, NearestNeighbour, NearestNeighbours, Neighbour, WithinRadius,
};
use super::error::KdTreeError;
use super::tree::{KdNode, KdTree};
use crate::core::geometry::{Bounds, Metric, Point};

impl<P: Point> KdNode<P> {
    /// Offers the points of this subtree to `acc`, pruning with `bounds`,
    /// the region of space this node covers for the current query.
    pub fn search<M, A>(&self, target: &P, acc: &mut A, bounds: &Bounds<P>, metric: &M)
    where
        M: Metric<P>,
        A: Accumulator<P>,
    {
        match self {
            KdNode::Empty => {}
            KdNode::Single(point) => {
                let distance_sq = metric.distance_sq(point, target);
                acc.update(point, distance_sq);
            }
            KdNode::Split {
                pivot,
                axis,
                left,
                right,
            } => {
                acc.update(pivot, metric.distance_sq(pivot, target));

                let (lower, upper) = bounds.split(pivot, *axis);

                // A target on the splitting plane is in both halves; lower wins.
                let (near_bounds, near, far_bounds, far) = if lower.contains(target) {
                    (&lower, left, &upper, right)
                } else {
                    (&upper, right, &lower, left)
                };

                near.search(target, acc, near_bounds, metric);

                let closest = far_bounds.nearest_point(target);
                if metric.distance_sq(&closest, target) < acc.max_distance_sq() || acc.incomplete()
                {
                    far.search(target, acc, far_bounds, metric);
                }
            }
        }
    }
}

impl<P: Point, M: Metric<P>> KdTree<P, M> {
    /// Finds the stored point nearest to `target`.
    ///
    /// `bounds` must enclose every stored point. Returns `Ok(None)` only for
    /// an empty tree.
    pub fn nearest_neighbour(
        &self,
        target: &P,
        bounds: &Bounds<P>,
    ) -> Result<Option<Neighbour<P>>, KdTreeError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.validate_query(target, bounds)?;

        let mut acc = NearestNeighbour::new(self.seed_distance_sq(target, bounds));
        self.root.search(target, &mut acc, bounds, &self.metric);

        if self.config.log_queries {
            trace!(
                "nearest_neighbour({:?}) -> {:?}",
                target,
                acc.best().map(|n| n.distance_sq)
            );
        }
        Ok(acc.into_neighbour())
    }

    /// Finds the `k` stored points nearest to `target`, ascending by squared
    /// distance. Fewer than `k` are returned only when the tree holds fewer.
    pub fn nearest_neighbours(
        &self,
        k: usize,
        target: &P,
        bounds: &Bounds<P>,
    ) -> Result<Vec<Neighbour<P>>, KdTreeError> {
        self.validate_k(k)?;
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        self.validate_query(target, bounds)?;

        let mut acc = NearestNeighbours::new(k, self.seed_distance_sq(target, bounds));
        self.root.search(target, &mut acc, bounds, &self.metric);

        if self.config.log_queries {
            trace!(
                "nearest_neighbours({}, {:?}) -> {} results",
                k,
                target,
                acc.neighbours().len()
            );
        }
        Ok(acc.into_neighbours())
    }

    /// All stored points strictly within `radius_sq` of `target`, ascending.
    pub fn within_radius(
        &self,
        target: &P,
        radius_sq: P::Scalar,
        bounds: &Bounds<P>,
    ) -> Result<Vec<Neighbour<P>>, KdTreeError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.validate_query(target, bounds)?;

        let mut acc = WithinRadius::new(radius_sq);
        self.root.search(target, &mut acc, bounds, &self.metric);
        Ok(acc.into_sorted())
    }

    /// Runs the node search with a caller-supplied accumulator.
    pub fn search_with<A: Accumulator<P>>(
        &self,
        target: &P,
        acc: &mut A,
        bounds: &Bounds<P>,
    ) -> Result<(), KdTreeError> {
        if self.is_empty() {
            return Ok(());
        }
        self.validate_query(target, bounds)?;
        self.root.search(target, acc, bounds, &self.metric);
        Ok(())
    }

    /// `nearest_neighbour` searching within the tree's own bounding box.
    pub fn nearest(&self, target: &P) -> Result<Option<Neighbour<P>>, KdTreeError> {
        match &self.bounds {
            Some(bounds) => self.nearest_neighbour(target, bounds),
            None => Ok(None),
        }
    }

    /// `nearest_neighbours` searching within the tree's own bounding box.
    pub fn k_nearest(&self, k: usize, target: &P) -> Result<Vec<Neighbour<P>>, KdTreeError> {
        match &self.bounds {
            Some(bounds) => self.nearest_neighbours(k, target, bounds),
            None => {
                self.validate_k(k)?;
                Ok(Vec::new())
            }
        }
    }

    /// Distance to the farthest corner of `bounds`: no enclosed point is farther.
    fn seed_distance_sq(&self, target: &P, bounds: &Bounds<P>) -> P::Scalar {
        let farthest = bounds.farthest_point(target);
        self.metric.distance_sq(&farthest, target)
    }

    fn validate_k(&self, k: usize) -> Result<(), KdTreeError> {
        match self.config.max_neighbours {
            Some(max) if k > max => Err(KdTreeError::InvalidInput(format!(
                "Requested {} neighbours, the configured maximum is {}.",
                k, max
            ))),
            _ => Ok(()),
        }
    }

    fn validate_query(&self, target: &P, bounds: &Bounds<P>) -> Result<(), KdTreeError> {
        if target.dimension() != self.dimension {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Query target dimension {} does not match tree dimension {}.",
                target.dimension(),
                self.dimension
            )));
        }
        if !target.is_finite() {
            return Err(KdTreeError::InvalidInput(format!(
                "Query target {:?} has a non-finite coordinate.",
                target
            )));
        }
        if bounds.dimension() != self.dimension {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Search bounds dimension {} does not match tree dimension {}.",
                bounds.dimension(),
                self.dimension
            )));
        }
        if self.config.validate_search_bounds {
            if let Some(data_bounds) = &self.bounds {
                if !bounds.encloses(data_bounds) {
                    warn!(
                        "Search bounds {:?}..{:?} do not enclose the indexed points",
                        bounds.min(),
                        bounds.max()
                    );
                    return Err(KdTreeError::PreconditionViolated(format!(
                        "Search bounds {:?}..{:?} do not enclose data bounds {:?}..{:?}.",
                        bounds.min(),
                        bounds.max(),
                        data_bounds.min(),
                        data_bounds.max()
                    )));
                }
            }
        }
        Ok(())
    }
}
