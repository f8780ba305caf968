//! Scalar backend for targets without the SIMD kernels.

use crate::math;
use crate::vector::{CrossDimension, Dimension, SupportedDimension, Vector};

#[inline(always)]
pub(crate) fn add_ps<const N: usize>(a: &mut Vector<f32, N>, b: &Vector<f32, N>)
where
    Dimension<N>: SupportedDimension,
{
    *a = a.const_add(*b)
}

#[inline(always)]
pub(crate) fn sub_ps<const N: usize>(a: &mut Vector<f32, N>, b: &Vector<f32, N>)
where
    Dimension<N>: SupportedDimension,
{
    *a = a.const_sub(*b)
}

#[inline(always)]
pub(crate) fn neg_ps<const N: usize>(v: &mut Vector<f32, N>)
where
    Dimension<N>: SupportedDimension,
{
    v.const_negate()
}

#[inline(always)]
pub(crate) fn scale_ps<const N: usize>(v: &mut Vector<f32, N>, factor: f32)
where
    Dimension<N>: SupportedDimension,
{
    *v = v.const_mul(factor)
}

#[inline(always)]
pub(crate) fn div_ps<const N: usize>(v: &mut Vector<f32, N>, divisor: f32)
where
    Dimension<N>: SupportedDimension,
{
    *v = v.const_div(divisor)
}

#[inline(always)]
pub(crate) fn dot_ps<const N: usize>(a: &Vector<f32, N>, b: &Vector<f32, N>) -> f32
where
    Dimension<N>: SupportedDimension,
{
    a.const_dot(*b)
}

#[inline(always)]
pub(crate) fn length_ps<const N: usize>(v: &Vector<f32, N>) -> f32
where
    Dimension<N>: SupportedDimension,
{
    math::sqrt(v.const_dot(*v))
}

#[inline(always)]
pub(crate) fn normalize_ps<const N: usize>(v: &mut Vector<f32, N>)
where
    Dimension<N>: SupportedDimension,
{
    *v = v.const_div(length_ps(v))
}

#[inline(always)]
pub(crate) fn cross_ps<const N: usize>(a: &Vector<f32, N>, b: &Vector<f32, N>) -> Vector<f32, N>
where
    Dimension<N>: CrossDimension,
{
    a.const_cross(*b)
}

#[inline(always)]
pub(crate) fn cvttps_epi32<const N: usize>(v: &Vector<f32, N>) -> Vector<i32, N>
where
    Dimension<N>: SupportedDimension,
{
    v.const_cast_to_int()
}

#[inline(always)]
pub(crate) fn add_epi32<const N: usize>(a: &mut Vector<i32, N>, b: &Vector<i32, N>)
where
    Dimension<N>: SupportedDimension,
{
    *a = a.const_add(*b)
}

#[inline(always)]
pub(crate) fn sub_epi32<const N: usize>(a: &mut Vector<i32, N>, b: &Vector<i32, N>)
where
    Dimension<N>: SupportedDimension,
{
    *a = a.const_sub(*b)
}

#[inline(always)]
pub(crate) fn neg_epi32<const N: usize>(v: &mut Vector<i32, N>)
where
    Dimension<N>: SupportedDimension,
{
    v.const_negate()
}

#[inline(always)]
pub(crate) fn scale_epi32<const N: usize>(v: &mut Vector<i32, N>, factor: i32)
where
    Dimension<N>: SupportedDimension,
{
    *v = v.const_mul(factor)
}

/// Exact integer dot product; the SIMD backend goes through `f32` instead.
#[inline(always)]
pub(crate) fn dot_epi32<const N: usize>(a: &Vector<i32, N>, b: &Vector<i32, N>) -> i32
where
    Dimension<N>: SupportedDimension,
{
    a.const_dot(*b)
}

#[inline(always)]
pub(crate) fn cross_epi32<const N: usize>(a: &Vector<i32, N>, b: &Vector<i32, N>) -> Vector<i32, N>
where
    Dimension<N>: CrossDimension,
{
    a.const_cross(*b)
}

#[inline(always)]
pub(crate) fn cvtepi32_ps<const N: usize>(v: &Vector<i32, N>) -> Vector<f32, N>
where
    Dimension<N>: SupportedDimension,
{
    v.const_cast_to_float()
}
