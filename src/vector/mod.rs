//! Fixed-size vector of 1 to 8 lanes.
//!
//! [`Vector<T, N>`] stores `N` elements of `T` (`f32` or `i32`) contiguously,
//! aligned to 16 bytes for up to four lanes and 32 bytes for five to eight, so
//! the run-time kernels can view it as one `__m128` or `__m256` register.
//!
//! Every operation has two implementations:
//!
//! - a `const fn` named `const_*`, written only with element arithmetic and
//!   usable in `const` items and blocks;
//! - a run-time method or operator that goes through the backend selected at
//!   compile time (see [`crate::simd`]).
//!
//! The two agree exactly for integer arithmetic and the first three lanes of
//! cross products, and within the documented tolerances for `length`,
//! `normalize` and integer `dot`.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{slice_length_error, EuclidError};

mod element;
mod ops;
mod portable;

pub use element::Element;

/// Type-level vector dimension.
///
/// Only `Dimension<1>` to `Dimension<8>` implement [`SupportedDimension`], so a
/// `Vector<T, 0>` or `Vector<T, 9>` is rejected at compile time.
pub struct Dimension<const N: usize>;

/// Dimensions a [`Vector`] can have, with the alignment of their storage.
pub trait SupportedDimension: sealed::Sealed {
    /// Zero-sized marker whose alignment the vector inherits.
    type Align: Copy + Default + fmt::Debug + PartialEq + Send + Sync + 'static;
}

/// Dimensions that have a cross product (three lanes or more).
pub trait CrossDimension: SupportedDimension {}

/// Alignment of a 128-bit register.
#[repr(align(16))]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Align16;

/// Alignment of a 256-bit register.
#[repr(align(32))]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Align32;

mod sealed {
    pub trait Sealed {}
}

macro_rules! supported_dimension {
    ($align:ty => $($n:literal),+) => {
        $(
            impl sealed::Sealed for Dimension<$n> {}

            impl SupportedDimension for Dimension<$n> {
                type Align = $align;
            }
        )+
    };
}

supported_dimension!(Align16 => 1, 2, 3, 4);
supported_dimension!(Align32 => 5, 6, 7, 8);

impl CrossDimension for Dimension<3> {}
impl CrossDimension for Dimension<4> {}
impl CrossDimension for Dimension<5> {}
impl CrossDimension for Dimension<6> {}
impl CrossDimension for Dimension<7> {}
impl CrossDimension for Dimension<8> {}

/// Fixed-size vector of `N` elements of type `T`.
///
/// # Examples
///
/// ```rust
/// use euclid::{vector, Vector};
///
/// const X: Vector<f32, 3> = vector![1.0, 0.0, 0.0];
/// const Y: Vector<f32, 3> = vector![0.0, 1.0, 0.0];
///
/// // Constant evaluation uses the portable path
/// const Z: Vector<f32, 3> = X.const_cross(Y);
///
/// // Run time uses the SIMD backend
/// assert_eq!(X.cross(Y), Z);
/// assert_eq!(Z.to_array(), [0.0, 0.0, 1.0]);
/// ```
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Vector<T, const N: usize>
where
    Dimension<N>: SupportedDimension,
{
    align: [<Dimension<N> as SupportedDimension>::Align; 0],
    data: [T; N],
}

impl<T: Copy, const N: usize> Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Builds a vector from its elements.
    #[inline(always)]
    pub const fn new(data: [T; N]) -> Self {
        Self { align: [], data }
    }

    /// Builds a vector with every element set to `value`.
    #[inline(always)]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Number of elements.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline(always)]
    pub const fn to_array(self) -> [T; N] {
        self.data
    }

    /// Element at `index`, or `None` past the end.
    #[inline(always)]
    pub const fn get(&self, index: usize) -> Option<T> {
        if index < N {
            Some(self.data[index])
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Start of the storage; aligned to the register width for `N`.
    #[cfg(any(avx2, test))]
    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[cfg(avx2)]
    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.data).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Vector<i32, N> where Dimension<N>: SupportedDimension {}

impl<T: Copy, const N: usize> From<[T; N]> for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N]
where
    Dimension<N>: SupportedDimension,
{
    fn from(vector: Vector<T, N>) -> Self {
        vector.data
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Error = EuclidError;

    /// Copies a slice of exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`EuclidError::SliceLength`] when `slice.len() != N`.
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(slice)
            .map(Self::new)
            .map_err(|_| slice_length_error(N, slice.len()))
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Compile-time predicate for vector types.
///
/// Implemented for every [`Vector`] and nothing else, so generic code can
/// specialise with a `V: VectorType` bound and read the element type and size
/// without naming them.
///
/// ```rust
/// use euclid::{Vector, VectorType};
///
/// fn lanes<V: VectorType>(_: &V) -> usize {
///     V::SIZE
/// }
///
/// assert_eq!(lanes(&Vector::new([1, 2, 3])), 3);
/// ```
pub trait VectorType: Copy {
    type Element: Element;
    const SIZE: usize;
}

impl<T: Element, const N: usize> VectorType for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Element = T;
    const SIZE: usize = N;
}

/// Builds a [`Vector`] from its elements, deducing type and size.
///
/// All elements must have the same type.
///
/// ```rust
/// use euclid::{vector, Vector};
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v, Vector::<i32, 3>::new([1, 2, 3]));
/// ```
#[macro_export]
macro_rules! vector {
    ($($element:expr),+ $(,)?) => {
        $crate::Vector::new([$($element),+])
    };
}
