use std::fmt::Debug;

use crate::simd::native;

use super::{CrossDimension, Dimension, SupportedDimension, Vector};

/// Element types a [`Vector`] supports: `f32` and `i32`.
///
/// The trait is sealed; its run-time kernels route each operation to the
/// backend selected at compile time.
pub trait Element: sealed::Kernel + Copy + Default + PartialEq + Debug + Send + Sync + 'static {}

impl Element for f32 {}
impl Element for i32 {}

pub(crate) mod sealed {
    use super::*;

    /// Per element type entry points into the native backend.
    pub trait Kernel: Sized {
        fn lanes_add<const N: usize>(a: &mut Vector<Self, N>, b: &Vector<Self, N>)
        where
            Dimension<N>: SupportedDimension;

        fn lanes_sub<const N: usize>(a: &mut Vector<Self, N>, b: &Vector<Self, N>)
        where
            Dimension<N>: SupportedDimension;

        fn lanes_neg<const N: usize>(v: &mut Vector<Self, N>)
        where
            Dimension<N>: SupportedDimension;

        fn lanes_scale<const N: usize>(v: &mut Vector<Self, N>, factor: Self)
        where
            Dimension<N>: SupportedDimension;

        fn lanes_div<const N: usize>(v: &mut Vector<Self, N>, divisor: Self)
        where
            Dimension<N>: SupportedDimension;

        fn lanes_dot<const N: usize>(a: &Vector<Self, N>, b: &Vector<Self, N>) -> Self
        where
            Dimension<N>: SupportedDimension;

        fn lanes_cross<const N: usize>(a: &Vector<Self, N>, b: &Vector<Self, N>) -> Vector<Self, N>
        where
            Dimension<N>: CrossDimension;

        fn lanes_to_float<const N: usize>(v: &Vector<Self, N>) -> Vector<f32, N>
        where
            Dimension<N>: SupportedDimension;

        fn lanes_length<const N: usize>(v: &Vector<Self, N>) -> f32
        where
            Dimension<N>: SupportedDimension;
    }

    impl Kernel for f32 {
        #[inline(always)]
        fn lanes_add<const N: usize>(a: &mut Vector<f32, N>, b: &Vector<f32, N>)
        where
            Dimension<N>: SupportedDimension,
        {
            native::add_ps(a, b)
        }

        #[inline(always)]
        fn lanes_sub<const N: usize>(a: &mut Vector<f32, N>, b: &Vector<f32, N>)
        where
            Dimension<N>: SupportedDimension,
        {
            native::sub_ps(a, b)
        }

        #[inline(always)]
        fn lanes_neg<const N: usize>(v: &mut Vector<f32, N>)
        where
            Dimension<N>: SupportedDimension,
        {
            native::neg_ps(v)
        }

        #[inline(always)]
        fn lanes_scale<const N: usize>(v: &mut Vector<f32, N>, factor: f32)
        where
            Dimension<N>: SupportedDimension,
        {
            native::scale_ps(v, factor)
        }

        #[inline(always)]
        fn lanes_div<const N: usize>(v: &mut Vector<f32, N>, divisor: f32)
        where
            Dimension<N>: SupportedDimension,
        {
            native::div_ps(v, divisor)
        }

        #[inline(always)]
        fn lanes_dot<const N: usize>(a: &Vector<f32, N>, b: &Vector<f32, N>) -> f32
        where
            Dimension<N>: SupportedDimension,
        {
            native::dot_ps(a, b)
        }

        #[inline(always)]
        fn lanes_cross<const N: usize>(a: &Vector<f32, N>, b: &Vector<f32, N>) -> Vector<f32, N>
        where
            Dimension<N>: CrossDimension,
        {
            native::cross_ps(a, b)
        }

        #[inline(always)]
        fn lanes_to_float<const N: usize>(v: &Vector<f32, N>) -> Vector<f32, N>
        where
            Dimension<N>: SupportedDimension,
        {
            *v
        }

        #[inline(always)]
        fn lanes_length<const N: usize>(v: &Vector<f32, N>) -> f32
        where
            Dimension<N>: SupportedDimension,
        {
            native::length_ps(v)
        }
    }

    impl Kernel for i32 {
        #[inline(always)]
        fn lanes_add<const N: usize>(a: &mut Vector<i32, N>, b: &Vector<i32, N>)
        where
            Dimension<N>: SupportedDimension,
        {
            native::add_epi32(a, b)
        }

        #[inline(always)]
        fn lanes_sub<const N: usize>(a: &mut Vector<i32, N>, b: &Vector<i32, N>)
        where
            Dimension<N>: SupportedDimension,
        {
            native::sub_epi32(a, b)
        }

        #[inline(always)]
        fn lanes_neg<const N: usize>(v: &mut Vector<i32, N>)
        where
            Dimension<N>: SupportedDimension,
        {
            native::neg_epi32(v)
        }

        #[inline(always)]
        fn lanes_scale<const N: usize>(v: &mut Vector<i32, N>, factor: i32)
        where
            Dimension<N>: SupportedDimension,
        {
            native::scale_epi32(v, factor)
        }

        /// No SIMD integer division exists; both backends divide lane by lane.
        #[inline(always)]
        fn lanes_div<const N: usize>(v: &mut Vector<i32, N>, divisor: i32)
        where
            Dimension<N>: SupportedDimension,
        {
            *v = v.const_div(divisor)
        }

        #[inline(always)]
        fn lanes_dot<const N: usize>(a: &Vector<i32, N>, b: &Vector<i32, N>) -> i32
        where
            Dimension<N>: SupportedDimension,
        {
            native::dot_epi32(a, b)
        }

        #[inline(always)]
        fn lanes_cross<const N: usize>(a: &Vector<i32, N>, b: &Vector<i32, N>) -> Vector<i32, N>
        where
            Dimension<N>: CrossDimension,
        {
            native::cross_epi32(a, b)
        }

        #[inline(always)]
        fn lanes_to_float<const N: usize>(v: &Vector<i32, N>) -> Vector<f32, N>
        where
            Dimension<N>: SupportedDimension,
        {
            native::cvtepi32_ps(v)
        }

        #[inline(always)]
        fn lanes_length<const N: usize>(v: &Vector<i32, N>) -> f32
        where
            Dimension<N>: SupportedDimension,
        {
            native::length_ps(&native::cvtepi32_ps(v))
        }
    }
}
