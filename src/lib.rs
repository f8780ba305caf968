//! Small fixed-size vectors with a constant path and a SIMD path.
//!
//! [`Vector<T, N>`] holds one to eight `f32` or `i32` lanes. Every operation is
//! available twice:
//!
//! - `const fn` methods prefixed with `const_` use plain element arithmetic and
//!   run during constant evaluation;
//! - ordinary methods and operators run through the kernels in [`simd`],
//!   chosen at compile time by the build script (AVX2 or portable).
//!
//! ```rust
//! use euclid::{vector, Vector};
//!
//! const A: Vector<i32, 3> = vector![1, 2, 3];
//! const B: Vector<i32, 3> = vector![4, 5, 6];
//! const DOT: i32 = A.const_dot(B);
//!
//! assert_eq!(DOT, 32);
//! assert_eq!(A * B, DOT);
//! assert_eq!((A + B).to_array(), [5, 7, 9]);
//! ```
//!
//! Unsupported combinations do not compile: `Vector<f32, 9>` has no
//! [`SupportedDimension`], a two-lane vector has no cross product and an
//! `i32` vector cannot be scaled by an `f32`.

pub mod batch;
pub mod error;
pub mod math;
pub mod simd;
mod vector;

pub use error::{EuclidError, Result};
pub use vector::{
    Align16, Align32, CrossDimension, Dimension, Element, SupportedDimension, Vector, VectorType,
};
