//! Operations over slices of vectors.
//!
//! Each operation has a sequential form and a `par_` form that splits the
//! slice into chunks of [`PARALLEL_CHUNK_SIZE`] vectors and hands them to the
//! rayon thread pool. Below [`PARALLEL_THRESHOLD`] vectors the `par_` forms
//! run sequentially, since spawning work costs more than it saves.
//!
//! ```rust
//! use euclid::batch::VectorSlice;
//! use euclid::Vector;
//!
//! let points = vec![Vector::new([3.0f32, 4.0]); 3];
//! assert_eq!(points.lengths(), vec![5.0; 3]);
//! assert!(points.dots(&points[..2]).is_err());
//! ```

use rayon::prelude::*;

use crate::error::{batch_length_error, Result};
use crate::{Dimension, Element, SupportedDimension, Vector};

/// Number of vectors below which `par_` operations stay on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Number of vectors handed to one rayon task.
pub const PARALLEL_CHUNK_SIZE: usize = 4_096;

/// Read-only batch operations on `[Vector<T, N>]`.
pub trait VectorSlice<T: Element, const N: usize>
where
    Dimension<N>: SupportedDimension,
{
    /// Euclidean norm of every vector.
    fn lengths(&self) -> Vec<f32>;

    fn par_lengths(&self) -> Vec<f32>;

    /// Pairwise dot products.
    ///
    /// # Errors
    ///
    /// Returns [`EuclidError::BatchLength`](crate::EuclidError::BatchLength)
    /// when the two slices differ in length.
    fn dots(&self, rhs: &[Vector<T, N>]) -> Result<Vec<T>>;

    fn par_dots(&self, rhs: &[Vector<T, N>]) -> Result<Vec<T>>;
}

impl<T: Element, const N: usize> VectorSlice<T, N> for [Vector<T, N>]
where
    Dimension<N>: SupportedDimension,
{
    fn lengths(&self) -> Vec<f32> {
        self.iter().map(|v| v.length()).collect()
    }

    fn par_lengths(&self) -> Vec<f32> {
        if self.len() < PARALLEL_THRESHOLD {
            return self.lengths();
        }

        let mut out = vec![0.0; self.len()];
        out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|(out, vectors)| {
                for (length, v) in out.iter_mut().zip(vectors) {
                    *length = v.length();
                }
            });
        out
    }

    fn dots(&self, rhs: &[Vector<T, N>]) -> Result<Vec<T>> {
        if self.len() != rhs.len() {
            return Err(batch_length_error(self.len(), rhs.len()));
        }

        Ok(self.iter().zip(rhs).map(|(a, b)| a.dot(*b)).collect())
    }

    fn par_dots(&self, rhs: &[Vector<T, N>]) -> Result<Vec<T>> {
        if self.len() < PARALLEL_THRESHOLD {
            return self.dots(rhs);
        }
        if self.len() != rhs.len() {
            return Err(batch_length_error(self.len(), rhs.len()));
        }

        let mut out = vec![T::default(); self.len()];
        out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
            .zip(rhs.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|((out, left), right)| {
                for ((dot, a), b) in out.iter_mut().zip(left).zip(right) {
                    *dot = a.dot(*b);
                }
            });
        Ok(out)
    }
}

/// In-place normalization of float vector slices.
pub trait NormalizeSlice {
    /// Scales every vector to unit length, with the precision of
    /// [`Vector::normalized`].
    fn normalize_all(&mut self);

    fn par_normalize_all(&mut self);
}

impl<const N: usize> NormalizeSlice for [Vector<f32, N>]
where
    Dimension<N>: SupportedDimension,
{
    fn normalize_all(&mut self) {
        self.iter_mut().for_each(Vector::normalized);
    }

    fn par_normalize_all(&mut self) {
        if self.len() < PARALLEL_THRESHOLD {
            return self.normalize_all();
        }

        self.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .for_each(|chunk| chunk.normalize_all());
    }
}
