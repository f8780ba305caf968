//! AVX2 kernels.
//!
//! A [`Vector`] of one to four lanes is viewed as a 128-bit register, five to
//! eight lanes as a 256-bit register. Full vectors (`N == 4`, `N == 8`) use
//! aligned loads and stores; the alignment comes from the vector's `Align`
//! marker. Partial vectors use masked loads, which read zeros into the unused
//! lanes, and masked stores, which leave memory past `N` untouched.
//!
//! The backend is chosen from the build host's CPU, with no run-time check.
//! Binaries meant for other machines should be built with the `portable`
//! feature.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::vector::{CrossDimension, Dimension, SupportedDimension, Vector};

/// Lanes `1, 2, 0, 3` of each 128-bit half.
const YZX: i32 = 0b11_00_10_01;

mod kernels {
    use super::*;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn mask128<const N: usize>() -> __m128i {
        _mm_cmpgt_epi32(_mm_set1_epi32(N as i32), _mm_setr_epi32(0, 1, 2, 3))
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn mask256<const N: usize>() -> __m256i {
        _mm256_cmpgt_epi32(
            _mm256_set1_epi32(N as i32),
            _mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7),
        )
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load128_ps<const N: usize>(v: &Vector<f32, N>) -> __m128
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 4 {
            _mm_load_ps(v.as_ptr())
        } else {
            _mm_maskload_ps(v.as_ptr(), mask128::<N>())
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load256_ps<const N: usize>(v: &Vector<f32, N>) -> __m256
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 8 {
            _mm256_load_ps(v.as_ptr())
        } else {
            _mm256_maskload_ps(v.as_ptr(), mask256::<N>())
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store128_ps<const N: usize>(v: &mut Vector<f32, N>, a: __m128)
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 4 {
            _mm_store_ps(v.as_mut_ptr(), a)
        } else {
            _mm_maskstore_ps(v.as_mut_ptr(), mask128::<N>(), a)
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store256_ps<const N: usize>(v: &mut Vector<f32, N>, a: __m256)
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 8 {
            _mm256_store_ps(v.as_mut_ptr(), a)
        } else {
            _mm256_maskstore_ps(v.as_mut_ptr(), mask256::<N>(), a)
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load128_epi32<const N: usize>(v: &Vector<i32, N>) -> __m128i
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 4 {
            _mm_load_si128(v.as_ptr() as *const __m128i)
        } else {
            _mm_maskload_epi32(v.as_ptr(), mask128::<N>())
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load256_epi32<const N: usize>(v: &Vector<i32, N>) -> __m256i
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 8 {
            _mm256_load_si256(v.as_ptr() as *const __m256i)
        } else {
            _mm256_maskload_epi32(v.as_ptr(), mask256::<N>())
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store128_epi32<const N: usize>(v: &mut Vector<i32, N>, a: __m128i)
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 4 {
            _mm_store_si128(v.as_mut_ptr() as *mut __m128i, a)
        } else {
            _mm_maskstore_epi32(v.as_mut_ptr(), mask128::<N>(), a)
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store256_epi32<const N: usize>(v: &mut Vector<i32, N>, a: __m256i)
    where
        Dimension<N>: SupportedDimension,
    {
        if N == 8 {
            _mm256_store_si256(v.as_mut_ptr() as *mut __m256i, a)
        } else {
            _mm256_maskstore_epi32(v.as_mut_ptr(), mask256::<N>(), a)
        }
    }

    /// Horizontal dot product of both halves, in lane 0.
    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn dp256(a: __m256, b: __m256) -> __m128 {
        let d = _mm256_dp_ps::<0xF1>(a, b);
        _mm_add_ss(_mm256_castps256_ps128(d), _mm256_extractf128_ps::<1>(d))
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn add_ps<const N: usize>(a: &mut Vector<f32, N>, b: &Vector<f32, N>)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_ps(a, _mm_add_ps(load128_ps(a), load128_ps(b)))
        } else {
            store256_ps(a, _mm256_add_ps(load256_ps(a), load256_ps(b)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn sub_ps<const N: usize>(a: &mut Vector<f32, N>, b: &Vector<f32, N>)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_ps(a, _mm_sub_ps(load128_ps(a), load128_ps(b)))
        } else {
            store256_ps(a, _mm256_sub_ps(load256_ps(a), load256_ps(b)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn neg_ps<const N: usize>(v: &mut Vector<f32, N>)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_ps(v, _mm_xor_ps(load128_ps(v), _mm_set1_ps(-0.0)))
        } else {
            store256_ps(v, _mm256_xor_ps(load256_ps(v), _mm256_set1_ps(-0.0)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn scale_ps<const N: usize>(v: &mut Vector<f32, N>, factor: f32)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_ps(v, _mm_mul_ps(load128_ps(v), _mm_set1_ps(factor)))
        } else {
            store256_ps(v, _mm256_mul_ps(load256_ps(v), _mm256_set1_ps(factor)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn div_ps<const N: usize>(v: &mut Vector<f32, N>, divisor: f32)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_ps(v, _mm_div_ps(load128_ps(v), _mm_set1_ps(divisor)))
        } else {
            store256_ps(v, _mm256_div_ps(load256_ps(v), _mm256_set1_ps(divisor)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn dot_ps<const N: usize>(a: &Vector<f32, N>, b: &Vector<f32, N>) -> f32
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            _mm_cvtss_f32(_mm_dp_ps::<0xF1>(load128_ps(a), load128_ps(b)))
        } else {
            _mm_cvtss_f32(dp256(load256_ps(a), load256_ps(b)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn length_ps<const N: usize>(v: &Vector<f32, N>) -> f32
    where
        Dimension<N>: SupportedDimension,
    {
        let squared = if N <= 4 {
            let a = load128_ps(v);
            _mm_dp_ps::<0xF1>(a, a)
        } else {
            let a = load256_ps(v);
            dp256(a, a)
        };
        _mm_cvtss_f32(_mm_sqrt_ss(squared))
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn normalize_ps<const N: usize>(v: &mut Vector<f32, N>)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            let a = load128_ps(v);
            let inverse = _mm_rsqrt_ps(_mm_dp_ps::<0xFF>(a, a));
            store128_ps(v, _mm_mul_ps(a, inverse))
        } else {
            let a = load256_ps(v);
            let halves = _mm256_dp_ps::<0xFF>(a, a);
            let squared = _mm256_add_ps(halves, _mm256_permute2f128_ps::<0x01>(halves, halves));
            store256_ps(v, _mm256_mul_ps(a, _mm256_rsqrt_ps(squared)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn cross_ps<const N: usize>(
        a: &Vector<f32, N>,
        b: &Vector<f32, N>,
    ) -> Vector<f32, N>
    where
        Dimension<N>: CrossDimension,
    {
        let mut out = *a;
        if N <= 4 {
            let (a, b) = (load128_ps(a), load128_ps(b));
            let c = _mm_sub_ps(
                _mm_mul_ps(a, _mm_shuffle_ps::<YZX>(b, b)),
                _mm_mul_ps(_mm_shuffle_ps::<YZX>(a, a), b),
            );
            store128_ps(&mut out, _mm_shuffle_ps::<YZX>(c, c));
        } else {
            let (a, b) = (load256_ps(a), load256_ps(b));
            let c = _mm256_sub_ps(
                _mm256_mul_ps(a, _mm256_permute_ps::<YZX>(b)),
                _mm256_mul_ps(_mm256_permute_ps::<YZX>(a), b),
            );
            store256_ps(&mut out, _mm256_permute_ps::<YZX>(c));
        }
        out
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn cvttps_epi32<const N: usize>(v: &Vector<f32, N>) -> Vector<i32, N>
    where
        Dimension<N>: SupportedDimension,
    {
        let mut out = Vector::splat(0);
        if N <= 4 {
            store128_epi32(&mut out, _mm_cvttps_epi32(load128_ps(v)))
        } else {
            store256_epi32(&mut out, _mm256_cvttps_epi32(load256_ps(v)))
        }
        out
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn add_epi32<const N: usize>(a: &mut Vector<i32, N>, b: &Vector<i32, N>)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_epi32(a, _mm_add_epi32(load128_epi32(a), load128_epi32(b)))
        } else {
            store256_epi32(a, _mm256_add_epi32(load256_epi32(a), load256_epi32(b)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn sub_epi32<const N: usize>(a: &mut Vector<i32, N>, b: &Vector<i32, N>)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_epi32(a, _mm_sub_epi32(load128_epi32(a), load128_epi32(b)))
        } else {
            store256_epi32(a, _mm256_sub_epi32(load256_epi32(a), load256_epi32(b)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn neg_epi32<const N: usize>(v: &mut Vector<i32, N>)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_epi32(v, _mm_sub_epi32(_mm_setzero_si128(), load128_epi32(v)))
        } else {
            store256_epi32(v, _mm256_sub_epi32(_mm256_setzero_si256(), load256_epi32(v)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn scale_epi32<const N: usize>(v: &mut Vector<i32, N>, factor: i32)
    where
        Dimension<N>: SupportedDimension,
    {
        if N <= 4 {
            store128_epi32(v, _mm_mullo_epi32(load128_epi32(v), _mm_set1_epi32(factor)))
        } else {
            store256_epi32(v, _mm256_mullo_epi32(load256_epi32(v), _mm256_set1_epi32(factor)))
        }
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn dot_epi32<const N: usize>(a: &Vector<i32, N>, b: &Vector<i32, N>) -> i32
    where
        Dimension<N>: SupportedDimension,
    {
        let sum = if N <= 4 {
            _mm_cvtss_f32(_mm_dp_ps::<0xF1>(
                _mm_cvtepi32_ps(load128_epi32(a)),
                _mm_cvtepi32_ps(load128_epi32(b)),
            ))
        } else {
            _mm_cvtss_f32(dp256(
                _mm256_cvtepi32_ps(load256_epi32(a)),
                _mm256_cvtepi32_ps(load256_epi32(b)),
            ))
        };
        sum as i32
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn cross_epi32<const N: usize>(
        a: &Vector<i32, N>,
        b: &Vector<i32, N>,
    ) -> Vector<i32, N>
    where
        Dimension<N>: CrossDimension,
    {
        let mut out = *a;
        if N <= 4 {
            let (a, b) = (load128_epi32(a), load128_epi32(b));
            let c = _mm_sub_epi32(
                _mm_mullo_epi32(a, _mm_shuffle_epi32::<YZX>(b)),
                _mm_mullo_epi32(_mm_shuffle_epi32::<YZX>(a), b),
            );
            store128_epi32(&mut out, _mm_shuffle_epi32::<YZX>(c));
        } else {
            let (a, b) = (load256_epi32(a), load256_epi32(b));
            let c = _mm256_sub_epi32(
                _mm256_mullo_epi32(a, _mm256_shuffle_epi32::<YZX>(b)),
                _mm256_mullo_epi32(_mm256_shuffle_epi32::<YZX>(a), b),
            );
            store256_epi32(&mut out, _mm256_shuffle_epi32::<YZX>(c));
        }
        out
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn cvtepi32_ps<const N: usize>(v: &Vector<i32, N>) -> Vector<f32, N>
    where
        Dimension<N>: SupportedDimension,
    {
        let mut out = Vector::splat(0.0);
        if N <= 4 {
            store128_ps(&mut out, _mm_cvtepi32_ps(load128_epi32(v)))
        } else {
            store256_ps(&mut out, _mm256_cvtepi32_ps(load256_epi32(v)))
        }
        out
    }
}

macro_rules! avx2_kernels {
    ($(fn $name:ident($($arg:ident: $ty:ty),+) $(-> $ret:ty)? where $bound:path;)+) => {
        $(
            #[inline(always)]
            pub(crate) fn $name<const N: usize>($($arg: $ty),+) $(-> $ret)?
            where
                Dimension<N>: $bound,
            {
                // SAFETY: `cfg(avx2)` is only emitted by the build script when the
                // build host reports AVX2 on a native build, and every load and
                // store stays inside the vector's `N` lanes. The binary is only
                // sound on CPUs with AVX2: one built here and run on a machine
                // without it executes unsupported instructions.
                unsafe { kernels::$name($($arg),+) }
            }
        )+
    };
}

avx2_kernels! {
    fn add_ps(a: &mut Vector<f32, N>, b: &Vector<f32, N>) where SupportedDimension;
    fn sub_ps(a: &mut Vector<f32, N>, b: &Vector<f32, N>) where SupportedDimension;
    fn neg_ps(v: &mut Vector<f32, N>) where SupportedDimension;
    fn scale_ps(v: &mut Vector<f32, N>, factor: f32) where SupportedDimension;
    fn div_ps(v: &mut Vector<f32, N>, divisor: f32) where SupportedDimension;
    fn dot_ps(a: &Vector<f32, N>, b: &Vector<f32, N>) -> f32 where SupportedDimension;
    fn length_ps(v: &Vector<f32, N>) -> f32 where SupportedDimension;
    fn normalize_ps(v: &mut Vector<f32, N>) where SupportedDimension;
    fn cross_ps(a: &Vector<f32, N>, b: &Vector<f32, N>) -> Vector<f32, N> where CrossDimension;
    fn cvttps_epi32(v: &Vector<f32, N>) -> Vector<i32, N> where SupportedDimension;
    fn add_epi32(a: &mut Vector<i32, N>, b: &Vector<i32, N>) where SupportedDimension;
    fn sub_epi32(a: &mut Vector<i32, N>, b: &Vector<i32, N>) where SupportedDimension;
    fn neg_epi32(v: &mut Vector<i32, N>) where SupportedDimension;
    fn scale_epi32(v: &mut Vector<i32, N>, factor: i32) where SupportedDimension;
    fn dot_epi32(a: &Vector<i32, N>, b: &Vector<i32, N>) -> i32 where SupportedDimension;
    fn cross_epi32(a: &Vector<i32, N>, b: &Vector<i32, N>) -> Vector<i32, N> where CrossDimension;
    fn cvtepi32_ps(v: &Vector<i32, N>) -> Vector<f32, N> where SupportedDimension;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats<const N: usize>(offset: f32) -> Vector<f32, N>
    where
        Dimension<N>: SupportedDimension,
    {
        Vector::new(std::array::from_fn(|i| offset + i as f32 * 0.75))
    }

    mod memory_tests {
        use super::*;

        #[test]
        fn test_masked_store_leaves_neighbours_untouched() {
            // Three-lane vectors sit in 16-byte slots
            let mut pair = [Vector::<f32, 3>::splat(1.0), Vector::splat(2.0)];
            add_ps(&mut pair[0], &Vector::splat(1.0));
            assert_eq!(pair[0].to_array(), [2.0; 3]);
            assert_eq!(pair[1].to_array(), [2.0; 3]);
        }

        #[test]
        fn test_partial_vectors_every_dimension() {
            fn check<const N: usize>()
            where
                Dimension<N>: SupportedDimension,
            {
                let mut a = floats::<N>(1.0);
                add_ps(&mut a, &floats::<N>(-1.0));
                assert_eq!(a, floats::<N>(1.0).const_add(floats::<N>(-1.0)), "N = {N}");

                let ints = Vector::<i32, N>::new(std::array::from_fn(|i| i as i32 - 3));
                let mut b = ints;
                neg_epi32(&mut b);
                assert_eq!(b, ints.const_neg(), "N = {N}");
                assert_eq!(cvtepi32_ps(&ints), ints.const_cast_to_float(), "N = {N}");
            }

            check::<1>();
            check::<2>();
            check::<3>();
            check::<4>();
            check::<5>();
            check::<6>();
            check::<7>();
            check::<8>();
        }
    }

    mod reduction_tests {
        use super::*;

        #[test]
        fn test_dot_every_dimension() {
            fn check<const N: usize>()
            where
                Dimension<N>: SupportedDimension,
            {
                let (a, b) = (floats::<N>(1.0), floats::<N>(0.5));
                let expected = a.const_dot(b);
                let actual = dot_ps(&a, &b);
                assert!((actual - expected).abs() <= 1e-5 * expected.abs(), "N = {N}");

                let ints = Vector::<i32, N>::new(std::array::from_fn(|i| 2 * i as i32 - 5));
                assert_eq!(dot_epi32(&ints, &ints), ints.const_dot(ints), "N = {N}");
            }

            check::<1>();
            check::<2>();
            check::<3>();
            check::<4>();
            check::<5>();
            check::<6>();
            check::<7>();
            check::<8>();
        }

        #[test]
        fn test_normalize_upper_half_counts() {
            let mut v = Vector::<f32, 8>::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
            normalize_ps(&mut v);
            assert!((v[7] - 1.0).abs() < 1e-3, "got {v:?}");

            let mut w = Vector::<f32, 5>::new([3.0, 0.0, 0.0, 0.0, 4.0]);
            normalize_ps(&mut w);
            assert!((w[0] - 0.6).abs() < 1e-3 && (w[4] - 0.8).abs() < 1e-3, "got {w:?}");
        }

        #[test]
        fn test_length_is_exact_for_perfect_squares() {
            let v = Vector::<f32, 6>::new([1.0, 2.0, 2.0, 4.0, 0.0, 0.0]);
            assert_eq!(length_ps(&v), 5.0);
        }
    }

    mod cross_tests {
        use super::*;

        #[test]
        fn test_cross_first_three_lanes() {
            fn check<const N: usize>()
            where
                Dimension<N>: CrossDimension,
            {
                let a = Vector::<i32, N>::new(std::array::from_fn(|i| i as i32 + 1));
                let b = Vector::<i32, N>::new(std::array::from_fn(|i| 7 - i as i32));
                let expected = a.const_cross(b);
                let actual = cross_epi32(&a, &b);
                assert_eq!(actual.as_array()[..3], expected.as_array()[..3], "N = {N}");

                let (x, y) = (a.const_cast_to_float(), b.const_cast_to_float());
                let actual = cross_ps(&x, &y);
                assert_eq!(
                    actual.as_array()[..3],
                    x.const_cross(y).as_array()[..3],
                    "N = {N}"
                );
            }

            check::<3>();
            check::<4>();
            check::<5>();
            check::<6>();
            check::<7>();
            check::<8>();
        }
    }
}
