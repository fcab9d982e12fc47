// src/core/geometry/bounds.rs

//! Axis-aligned bounding boxes over any `Point` type.

use super::point::{Point, Scalar};
use crate::core::indexing::kdtree::KdTreeError;

/// An axis-aligned box defined by its `min` and `max` corners.
///
/// Invariant: both corners have the same dimensionality and
/// `min[i] <= max[i]` on every axis. Bounds are values; every derived
/// operation returns new points or boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds<P> {
    min: P,
    max: P,
}

impl<P: Point> Bounds<P> {
    /// Creates a box from its two corners, checking the invariant.
    pub fn new(min: P, max: P) -> Result<Self, KdTreeError> {
        if min.dimension() != max.dimension() {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Bounds corners have dimensions {} and {}.",
                min.dimension(),
                max.dimension()
            )));
        }
        if min.dimension() == 0 {
            return Err(KdTreeError::InvalidInput(
                "Bounds must have at least one axis.".to_string(),
            ));
        }
        for axis in 0..min.dimension() {
            // Negated so that NaN coordinates are rejected too.
            if !(min.coord(axis) <= max.coord(axis)) {
                return Err(KdTreeError::InvalidBounds(format!(
                    "min {:?} exceeds max {:?} on axis {}.",
                    min.coord(axis),
                    max.coord(axis),
                    axis
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// Smallest box enclosing all `points`, or `None` for an empty slice.
    ///
    /// # Errors
    /// `DimensionMismatch` if the points differ in dimensionality,
    /// `InvalidInput` for zero-dimensional points or non-finite coordinates.
    pub fn from_points(points: &[P]) -> Result<Option<Self>, KdTreeError> {
        let Some(first) = points.first() else {
            return Ok(None);
        };
        let dimension = first.dimension();
        if dimension == 0 {
            return Err(KdTreeError::InvalidInput(
                "Bounds must have at least one axis.".to_string(),
            ));
        }

        let mut min = first.clone();
        let mut max = first.clone();
        for point in points {
            if point.dimension() != dimension {
                return Err(KdTreeError::DimensionMismatch(format!(
                    "Expected dimension {}, found a point of dimension {}.",
                    dimension,
                    point.dimension()
                )));
            }
            if !point.is_finite() {
                return Err(KdTreeError::InvalidInput(format!(
                    "Non-finite coordinate in {:?}.",
                    point
                )));
            }
            for axis in 0..dimension {
                let v = point.coord(axis);
                if v < min.coord(axis) {
                    min.set_coord(axis, v);
                }
                if v > max.coord(axis) {
                    max.set_coord(axis, v);
                }
            }
        }

        Ok(Some(Self { min, max }))
    }

    pub fn min(&self) -> &P {
        &self.min
    }

    pub fn max(&self) -> &P {
        &self.max
    }

    pub fn dimension(&self) -> usize {
        self.min.dimension()
    }

    /// True iff `point` lies inside the box, faces included.
    pub fn contains(&self, point: &P) -> bool {
        (0..self.dimension()).all(|axis| {
            let v = point.coord(axis);
            self.min.coord(axis) <= v && v <= self.max.coord(axis)
        })
    }

    /// True iff `other` lies entirely inside this box.
    pub fn encloses(&self, other: &Self) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }

    /// The point of the box closest to `point`: each coordinate clamped
    /// into `[min, max]`.
    pub fn nearest_point(&self, point: &P) -> P {
        let mut nearest = point.clone();
        for axis in 0..self.dimension() {
            let v = point.coord(axis);
            if v < self.min.coord(axis) {
                nearest.set_coord(axis, self.min.coord(axis));
            } else if v > self.max.coord(axis) {
                nearest.set_coord(axis, self.max.coord(axis));
            }
        }
        nearest
    }

    /// The corner of the box farthest from `point`. On each axis the face
    /// at the larger separation wins; equal separations pick `max`.
    pub fn farthest_point(&self, point: &P) -> P {
        let mut farthest = point.clone();
        for axis in 0..self.dimension() {
            let v = point.coord(axis);
            let lo = self.min.coord(axis);
            let hi = self.max.coord(axis);
            let corner = if (v - lo).abs() > (v - hi).abs() { lo } else { hi };
            farthest.set_coord(axis, corner);
        }
        farthest
    }

    /// Axis with the largest extent. The first such axis wins ties.
    pub fn longest_dimension(&self) -> usize {
        let mut longest = 0;
        let mut length = self.max.coord(0) - self.min.coord(0);

        for axis in 1..self.dimension() {
            let extent = self.max.coord(axis) - self.min.coord(axis);
            if length < extent {
                longest = axis;
                length = extent;
            }
        }

        longest
    }

    /// Splits the box by the hyperplane through `pivot` orthogonal to `axis`.
    ///
    /// The lower half keeps `min` and caps `max[axis]` at `pivot[axis]`; the
    /// upper half keeps `max` and raises `min[axis]` to `pivot[axis]`. The
    /// halves share only the splitting hyperplane. `axis` must be below the
    /// dimensionality of the box.
    pub fn split(&self, pivot: &P, axis: usize) -> (Self, Self) {
        let value = pivot.coord(axis);
        let lower = Self {
            min: self.min.clone(),
            max: self.max.with_coord(axis, value),
        };
        let upper = Self {
            min: self.min.with_coord(axis, value),
            max: self.max.clone(),
        };
        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Bounds<[f64; 2]> {
        Bounds::new([0.0, 0.0], [1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_corners() {
        let result = Bounds::new([0.0, 2.0], [1.0, 1.0]);
        assert!(matches!(result, Err(KdTreeError::InvalidBounds(_))));
    }

    #[test]
    fn test_new_rejects_mismatched_corners() {
        let result = Bounds::new(vec![0.0, 0.0], vec![1.0, 1.0, 1.0]);
        assert!(matches!(result, Err(KdTreeError::DimensionMismatch(_))));
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = Bounds::new([f64::NAN, 0.0], [1.0, 1.0]);
        assert!(matches!(result, Err(KdTreeError::InvalidBounds(_))));
    }

    #[test]
    fn test_from_points() {
        let points = vec![[1.0, 5.0], [-2.0, 3.0], [4.0, -1.0]];
        let bounds = Bounds::from_points(&points).unwrap().unwrap();
        assert_eq!(bounds.min(), &[-2.0, -1.0]);
        assert_eq!(bounds.max(), &[4.0, 5.0]);
        assert!(Bounds::<[f64; 2]>::from_points(&[]).unwrap().is_none());
    }

    #[test]
    fn test_from_points_rejects_mixed_dimensions() {
        let result = Bounds::from_points(&[vec![1.0, 2.0], vec![0.0]]);
        assert!(matches!(result, Err(KdTreeError::DimensionMismatch(_))));

        let result = Bounds::<Vec<f64>>::from_points(&[vec![], vec![]]);
        assert!(matches!(result, Err(KdTreeError::InvalidInput(_))));
    }

    #[test]
    fn test_from_points_rejects_non_finite() {
        let result = Bounds::from_points(&[vec![f64::NAN], vec![1.0]]);
        assert!(matches!(result, Err(KdTreeError::InvalidInput(_))));

        let result = Bounds::from_points(&[[0.0, 1.0], [2.0, f64::NEG_INFINITY]]);
        assert!(matches!(result, Err(KdTreeError::InvalidInput(_))));
    }

    #[test]
    fn test_farthest_point_on_vec_points() {
        let b = Bounds::new(vec![-1.0f32, 0.0, 2.0], vec![1.0, 4.0, 3.0]).unwrap();
        assert_eq!(b.farthest_point(&vec![0.5, 3.0, 2.0]), vec![-1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = unit_square();
        assert!(b.contains(&[0.0, 0.0]));
        assert!(b.contains(&[1.0, 0.5]));
        assert!(b.contains(&[0.5, 0.5]));
        assert!(!b.contains(&[1.0001, 0.5]));
        assert!(!b.contains(&[0.5, -0.1]));
    }

    #[test]
    fn test_encloses() {
        let outer = Bounds::new([-2.0, -2.0], [2.0, 2.0]).unwrap();
        assert!(outer.encloses(&unit_square()));
        assert!(!unit_square().encloses(&outer));
        assert!(unit_square().encloses(&unit_square()));
    }

    #[test]
    fn test_nearest_point_clamps() {
        let b = unit_square();
        assert_eq!(b.nearest_point(&[2.0, 0.5]), [1.0, 0.5]);
        assert_eq!(b.nearest_point(&[-1.0, -3.0]), [0.0, 0.0]);
        assert_eq!(b.nearest_point(&[0.25, 0.75]), [0.25, 0.75]);
    }

    #[test]
    fn test_farthest_point_picks_opposite_corner() {
        let b = unit_square();
        assert_eq!(b.farthest_point(&[0.1, 0.9]), [1.0, 0.0]);
        assert_eq!(b.farthest_point(&[5.0, -5.0]), [0.0, 1.0]);
        assert_eq!(b.farthest_point(&[0.5, 0.5]), [1.0, 1.0]);
    }

    #[test]
    fn test_longest_dimension() {
        let b = Bounds::new([0.0, 0.0, 0.0], [1.0, 3.0, 2.0]).unwrap();
        assert_eq!(b.longest_dimension(), 1);

        let b = Bounds::new([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]).unwrap();
        assert_eq!(b.longest_dimension(), 2);
    }

    #[test]
    fn test_longest_dimension_first_axis_wins_ties() {
        let b = Bounds::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]).unwrap();
        assert_eq!(b.longest_dimension(), 0);

        let b = Bounds::new([0.0, 0.0, 0.0], [1.0, 2.0, 2.0]).unwrap();
        assert_eq!(b.longest_dimension(), 1);
    }

    #[test]
    fn test_split_halves() {
        let b = Bounds::new([0.0, 0.0], [4.0, 2.0]).unwrap();
        let pivot = [1.0, 1.5];
        let (lower, upper) = b.split(&pivot, 0);

        assert_eq!(lower.min(), &[0.0, 0.0]);
        assert_eq!(lower.max(), &[1.0, 2.0]);
        assert_eq!(upper.min(), &[1.0, 0.0]);
        assert_eq!(upper.max(), &[4.0, 2.0]);

        assert!(lower.contains(&pivot));
        assert!(upper.contains(&pivot));
        assert!(!lower.contains(&[1.5, 1.0]));
        assert!(!upper.contains(&[0.5, 1.0]));

        // Every point of the parent lands in at least one half.
        for &x in &[0.0, 0.5, 1.0, 2.5, 4.0] {
            for &y in &[0.0, 1.0, 2.0] {
                let p = [x, y];
                assert!(lower.contains(&p) || upper.contains(&p));
                if lower.contains(&p) && upper.contains(&p) {
                    assert_eq!(x, 1.0);
                }
            }
        }
    }

    #[test]
    fn test_split_leaves_other_axes() {
        let b = Bounds::new(vec![0.0, 0.0, 0.0], vec![3.0, 3.0, 3.0]).unwrap();
        let (lower, upper) = b.split(&vec![1.0, 2.0, 0.5], 2);
        assert_eq!(lower.max(), &vec![3.0, 3.0, 0.5]);
        assert_eq!(upper.min(), &vec![0.0, 0.0, 0.5]);
    }
}
