// src/core/geometry/metric.rs

use super::point::{Point, Scalar};

/// Squared distance between two points.
///
/// Pruning compares the distance from a query to the nearest point of a
/// bounding box against the current threshold, so an implementation must
/// be non-negative, symmetric, zero only for equal points and monotone in
/// each per-axis separation (as squared Euclidean distance is).
pub trait Metric<P: Point> {
    fn distance_sq(&self, a: &P, b: &P) -> P::Scalar;
}

/// The default metric: sum of squared per-axis differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl<P: Point> Metric<P> for SquaredEuclidean {
    #[inline]
    fn distance_sq(&self, a: &P, b: &P) -> P::Scalar {
        squared_distance(a, b)
    }
}

/// Squared Euclidean distance between two N-dimensional points.
#[inline]
pub fn squared_distance<P: Point>(a: &P, b: &P) -> P::Scalar {
    let mut sum = P::Scalar::ZERO;
    for axis in 0..a.dimension() {
        let d = a.coord(axis) - b.coord(axis);
        sum = sum + d * d;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(&[0.0f64, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(squared_distance(&[1.0f64, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(SquaredEuclidean.distance_sq(&vec![1.0f32], &vec![-1.0]), 4.0);
    }

    #[test]
    fn test_squared_distance_is_symmetric() {
        let a = [0.25f64, -1.5, 2.0];
        let b = [3.0f64, 0.5, -0.75];
        assert_eq!(squared_distance(&a, &b), squared_distance(&b, &a));
    }
}
