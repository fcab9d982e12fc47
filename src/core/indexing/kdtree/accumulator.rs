// src/core/indexing/kdtree/accumulator.rs

//! Query-scoped result accumulators.
//!
//! An accumulator collects candidates offered by the node search and
//! publishes the pruning threshold that decides whether the far side of a
//! split is worth visiting. A fresh accumulator is created for every query.

use std::cmp::Ordering;

use crate::core::geometry::Point;

/// A point found by a query together with its squared distance to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour<P: Point> {
    pub point: P,
    pub distance_sq: P::Scalar,
}

/// Running answer of a search.
pub trait Accumulator<P: Point> {
    /// Offers a candidate point at `distance_sq` from the target.
    fn update(&mut self, point: &P, distance_sq: P::Scalar);

    /// Subtrees whose closest possible point is not strictly nearer than
    /// this are pruned once the accumulator is complete.
    fn max_distance_sq(&self) -> P::Scalar;

    /// True while fewer results are held than the query asks for. An
    /// incomplete accumulator forces every subtree to be visited.
    fn incomplete(&self) -> bool;
}

/// Tracks the single nearest point.
#[derive(Debug, Clone)]
pub struct NearestNeighbour<P: Point> {
    best: Option<Neighbour<P>>,
    max_distance_sq: P::Scalar,
}

impl<P: Point> NearestNeighbour<P> {
    /// `seed_distance_sq` must be an upper bound on the distance to any
    /// candidate, normally the distance to the farthest corner of the
    /// search bounds.
    pub fn new(seed_distance_sq: P::Scalar) -> Self {
        Self {
            best: None,
            max_distance_sq: seed_distance_sq,
        }
    }

    pub fn best(&self) -> Option<&Neighbour<P>> {
        self.best.as_ref()
    }

    pub fn into_neighbour(self) -> Option<Neighbour<P>> {
        self.best
    }
}

impl<P: Point> Accumulator<P> for NearestNeighbour<P> {
    fn update(&mut self, point: &P, distance_sq: P::Scalar) {
        // The seed itself is admissible until something has been found.
        let admit = if self.best.is_none() {
            distance_sq <= self.max_distance_sq
        } else {
            distance_sq < self.max_distance_sq
        };

        if admit {
            self.max_distance_sq = distance_sq;
            self.best = Some(Neighbour {
                point: point.clone(),
                distance_sq,
            });
        }
    }

    fn max_distance_sq(&self) -> P::Scalar {
        self.max_distance_sq
    }

    fn incomplete(&self) -> bool {
        self.best.is_none()
    }
}

/// Tracks the `k` nearest points, ascending by distance. Candidates at an
/// equal distance keep the order in which they were offered.
#[derive(Debug, Clone)]
pub struct NearestNeighbours<P: Point> {
    neighbours: Vec<Neighbour<P>>,
    capacity: usize,
    nth_distance_sq: P::Scalar,
}

impl<P: Point> NearestNeighbours<P> {
    pub fn new(k: usize, seed_distance_sq: P::Scalar) -> Self {
        Self {
            neighbours: Vec::with_capacity(k.saturating_add(1).min(1024)),
            capacity: k,
            nth_distance_sq: seed_distance_sq,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn neighbours(&self) -> &[Neighbour<P>] {
        &self.neighbours
    }

    pub fn into_neighbours(self) -> Vec<Neighbour<P>> {
        self.neighbours
    }
}

impl<P: Point> Accumulator<P> for NearestNeighbours<P> {
    fn update(&mut self, point: &P, distance_sq: P::Scalar) {
        if self.capacity == 0 {
            return;
        }

        let admit = if self.incomplete() {
            distance_sq <= self.nth_distance_sq
        } else {
            distance_sq < self.nth_distance_sq
        };
        if !admit {
            return;
        }

        // Insert before the first entry that is strictly farther.
        let idx = self
            .neighbours
            .partition_point(|n| n.distance_sq <= distance_sq);
        self.neighbours.insert(
            idx,
            Neighbour {
                point: point.clone(),
                distance_sq,
            },
        );

        if self.neighbours.len() > self.capacity {
            self.neighbours.pop();
        }
        if self.neighbours.len() == self.capacity {
            if let Some(last) = self.neighbours.last() {
                self.nth_distance_sq = last.distance_sq;
            }
        }
    }

    fn max_distance_sq(&self) -> P::Scalar {
        self.nth_distance_sq
    }

    fn incomplete(&self) -> bool {
        self.neighbours.len() < self.capacity
    }
}

/// Collects every point strictly closer than a fixed squared radius.
#[derive(Debug, Clone)]
pub struct WithinRadius<P: Point> {
    radius_sq: P::Scalar,
    found: Vec<Neighbour<P>>,
}

impl<P: Point> WithinRadius<P> {
    pub fn new(radius_sq: P::Scalar) -> Self {
        Self {
            radius_sq,
            found: Vec::new(),
        }
    }

    /// Matches sorted ascending by distance (stable for equal distances).
    pub fn into_sorted(mut self) -> Vec<Neighbour<P>> {
        self.found.sort_by(|a, b| {
            a.distance_sq
                .partial_cmp(&b.distance_sq)
                .unwrap_or(Ordering::Equal)
        });
        self.found
    }
}

impl<P: Point> Accumulator<P> for WithinRadius<P> {
    fn update(&mut self, point: &P, distance_sq: P::Scalar) {
        if distance_sq < self.radius_sq {
            self.found.push(Neighbour {
                point: point.clone(),
                distance_sq,
            });
        }
    }

    fn max_distance_sq(&self) -> P::Scalar {
        self.radius_sq
    }

    fn incomplete(&self) -> bool {
        false
    }
}
