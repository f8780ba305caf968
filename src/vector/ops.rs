//! Run-time path.
//!
//! Methods and operators here go through [`Element`]'s kernels, which resolve
//! to the backend chosen at compile time (see [`crate::simd`]).

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::simd::native;

use super::element::sealed::Kernel;
use super::{CrossDimension, Dimension, Element, SupportedDimension, Vector};

impl<T: Element, const N: usize> Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Flips the sign of every element in place.
    #[inline(always)]
    pub fn negate(&mut self) {
        T::lanes_neg(self)
    }

    /// Dot product.
    ///
    /// The SIMD backend uses the hardware dot-product instruction. Integer
    /// vectors are converted to `f32` first and the sum is truncated back, so
    /// results whose partial sums exceed 2^24 in magnitude can differ from the
    /// exact [`const_dot`](Self::const_dot).
    #[inline(always)]
    pub fn dot(self, rhs: Self) -> T {
        T::lanes_dot(&self, &rhs)
    }

    /// Euclidean norm, computed as `f32`.
    #[inline(always)]
    pub fn length(self) -> f32 {
        T::lanes_length(&self)
    }

    /// Euclidean distance to `rhs`.
    #[inline(always)]
    pub fn distance(self, rhs: Self) -> f32 {
        (self - rhs).length()
    }

    /// Unit vector in the direction of `self`, converted to `f32`.
    ///
    /// See [`normalized`](Vector::normalized) for the precision of the SIMD
    /// backend.
    #[inline(always)]
    pub fn normalize(self) -> Vector<f32, N> {
        let mut unit = T::lanes_to_float(&self);
        unit.normalized();
        unit
    }

    /// Cross product of the first three elements.
    ///
    /// Elements past index 2 are implementation defined: the SIMD backend
    /// shuffles every 128-bit half the same way, the portable one writes zeros.
    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self
    where
        Dimension<N>: CrossDimension,
    {
        T::lanes_cross(&self, &rhs)
    }
}

impl<const N: usize> Vector<f32, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Scales `self` to unit length in place.
    ///
    /// The SIMD backend multiplies by the approximate reciprocal square root
    /// (`rsqrtps`, relative error below 1.5 * 2^-12), so the resulting norm is
    /// within about 1e-3 of one. A zero vector becomes NaN.
    #[inline(always)]
    pub fn normalized(&mut self) {
        native::normalize_ps(self)
    }

    /// Truncates every element toward zero.
    #[inline(always)]
    pub fn cast_to_int(self) -> Vector<i32, N> {
        native::cvttps_epi32(&self)
    }
}

impl<const N: usize> Vector<i32, N>
where
    Dimension<N>: SupportedDimension,
{
    #[inline(always)]
    pub fn cast_to_float(self) -> Vector<f32, N> {
        native::cvtepi32_ps(&self)
    }
}

impl<T: Element, const N: usize> AddAssign for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        T::lanes_add(self, &rhs)
    }
}

impl<T: Element, const N: usize> SubAssign for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        T::lanes_sub(self, &rhs)
    }
}

impl<T: Element, const N: usize> Add for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Output = Self;

    #[inline(always)]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Element, const N: usize> Sub for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Element, const N: usize> Neg for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Output = Self;

    #[inline(always)]
    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

/// `v * w` is the dot product.
impl<T: Element, const N: usize> Mul for Vector<T, N>
where
    Dimension<N>: SupportedDimension,
{
    type Output = T;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(rhs)
    }
}

// Scalars accepted by a vector are the ones its element type converts from
// without loss (`From`), so `Vector<i32, N> * 0.5` does not compile.
macro_rules! impl_scalar_ops {
    ($t:ident => $($scalar:ty),+) => {
        $(
            impl<const N: usize> MulAssign<$scalar> for Vector<$t, N>
            where
                Dimension<N>: SupportedDimension,
            {
                #[inline(always)]
                fn mul_assign(&mut self, rhs: $scalar) {
                    <$t as Kernel>::lanes_scale(self, <$t>::from(rhs))
                }
            }

            impl<const N: usize> DivAssign<$scalar> for Vector<$t, N>
            where
                Dimension<N>: SupportedDimension,
            {
                #[inline(always)]
                fn div_assign(&mut self, rhs: $scalar) {
                    <$t as Kernel>::lanes_div(self, <$t>::from(rhs))
                }
            }

            impl<const N: usize> Mul<$scalar> for Vector<$t, N>
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Self;

                #[inline(always)]
                fn mul(mut self, rhs: $scalar) -> Self::Output {
                    self *= rhs;
                    self
                }
            }

            impl<const N: usize> Div<$scalar> for Vector<$t, N>
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Self;

                #[inline(always)]
                fn div(mut self, rhs: $scalar) -> Self::Output {
                    self /= rhs;
                    self
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $scalar
            where
                Dimension<N>: SupportedDimension,
            {
                type Output = Vector<$t, N>;

                #[inline(always)]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_ops!(f32 => f32, i16, u16, i8, u8);
impl_scalar_ops!(i32 => i32, i16, u16, i8, u8);
