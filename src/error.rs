//! Error types for euclid operations.
//!
//! Vector arithmetic itself never fails; errors only come from building
//! vectors out of slices and from the batch helpers, where lengths are only
//! known at run time.

use std::fmt;

/// Errors that can occur during euclid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EuclidError {
    /// A slice did not have as many elements as the vector has lanes.
    SliceLength {
        /// The vector dimension.
        expected: usize,
        /// The slice length.
        found: usize,
    },
    /// Two batches of vectors had different lengths.
    BatchLength {
        /// Number of vectors on the left.
        left: usize,
        /// Number of vectors on the right.
        right: usize,
    },
}

impl fmt::Display for EuclidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EuclidError::SliceLength { expected, found } => write!(
                f,
                "Slice length mismatch: expected {} elements, found {}",
                expected, found
            ),
            EuclidError::BatchLength { left, right } => write!(
                f,
                "Batch length mismatch: {} vectors on the left, {} on the right",
                left, right
            ),
        }
    }
}

impl std::error::Error for EuclidError {}

/// Result type alias for euclid operations.
pub type Result<T> = std::result::Result<T, EuclidError>;

/// Creates a slice length error.
pub fn slice_length_error(expected: usize, found: usize) -> EuclidError {
    EuclidError::SliceLength { expected, found }
}

/// Creates a batch length error.
pub fn batch_length_error(left: usize, right: usize) -> EuclidError {
    EuclidError::BatchLength { left, right }
}
