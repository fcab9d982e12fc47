// src/core/geometry/point.rs

//! The coordinate contract consumed by the index.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Numeric type of a single coordinate.
pub trait Scalar:
    Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// False for NaN and the infinities.
    fn is_finite(self) -> bool;
}

macro_rules! impl_scalar_for_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_scalar_for_float!(f32, f64);

/// A point with indexed read and write access to its coordinates.
///
/// The index copies points into its nodes, so implementations should be
/// cheap to clone. Fixed-size arrays carry their dimensionality in the type;
/// `Vec` points are checked for consistent dimensionality when a tree is built.
pub trait Point: Clone + Debug {
    type Scalar: Scalar;

    /// Number of axes.
    fn dimension(&self) -> usize;

    /// Coordinate on `axis`. Panics if `axis >= self.dimension()`.
    fn coord(&self, axis: usize) -> Self::Scalar;

    /// Overwrites the coordinate on `axis`.
    fn set_coord(&mut self, axis: usize, value: Self::Scalar);

    /// Returns a copy of `self` with the coordinate on `axis` replaced.
    fn with_coord(&self, axis: usize, value: Self::Scalar) -> Self {
        let mut point = self.clone();
        point.set_coord(axis, value);
        point
    }

    /// True when every coordinate is finite.
    fn is_finite(&self) -> bool {
        (0..self.dimension()).all(|axis| self.coord(axis).is_finite())
    }
}

impl<T: Scalar, const D: usize> Point for [T; D] {
    type Scalar = T;

    #[inline]
    fn dimension(&self) -> usize {
        D
    }

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    #[inline]
    fn set_coord(&mut self, axis: usize, value: T) {
        self[axis] = value;
    }
}

impl<T: Scalar> Point for Vec<T> {
    type Scalar = T;

    #[inline]
    fn dimension(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    #[inline]
    fn set_coord(&mut self, axis: usize, value: T) {
        self[axis] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_point_access() {
        let mut p = [1.0f64, 2.0, 3.0];
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.coord(1), 2.0);
        p.set_coord(1, 5.0);
        assert_eq!(p, [1.0, 5.0, 3.0]);
    }

    #[test]
    fn test_vec_point_with_coord_leaves_original() {
        let p = vec![1.0f32, 2.0];
        let q = p.with_coord(0, -4.0);
        assert_eq!(p, vec![1.0, 2.0]);
        assert_eq!(q, vec![-4.0, 2.0]);
        assert_eq!(q.dimension(), 2);
    }

    #[test]
    fn test_is_finite() {
        assert!([0.0f64, 1.0].is_finite());
        assert!(![0.0f64, f64::NAN].is_finite());
        assert!(!vec![f32::INFINITY].is_finite());
    }
}
