// src/core/indexing/kdtree/error.rs

use std::fmt;

/// Custom error types for KD-Tree operations.
///
/// An empty tree is not an error: queries against it return `None` or an
/// empty result list.
#[derive(Debug)]
pub enum KdTreeError {
    /// Points, query targets or bounds of inconsistent dimensionality.
    DimensionMismatch(String),
    /// Input that cannot be indexed, e.g. zero axes or non-finite coordinates.
    InvalidInput(String),
    /// A bounding box whose `min` exceeds its `max` on some axis.
    InvalidBounds(String),
    /// Query bounds that do not enclose the indexed points.
    PreconditionViolated(String),
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdTreeError::DimensionMismatch(msg) => write!(f, "KD-Tree Dimension Mismatch: {}", msg),
            KdTreeError::InvalidInput(msg) => write!(f, "KD-Tree Invalid Input: {}", msg),
            KdTreeError::InvalidBounds(msg) => write!(f, "KD-Tree Invalid Bounds: {}", msg),
            KdTreeError::PreconditionViolated(msg) => {
                write!(f, "KD-Tree Precondition Violated: {}", msg)
            }
        }
    }
}

impl std::error::Error for KdTreeError {}
