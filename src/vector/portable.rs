//! Portable scalar path.
//!
//! `const fn` forms of every vector operation, generated per element type.
//! They only use element arithmetic over the backing array, so they run in
//! constant evaluation; the portable run-time backend calls them as well.
//!
//! Integer lanes wrap on overflow, matching the SIMD integer instructions.

use crate::math;

use super::{CrossDimension, Dimension, SupportedDimension, Vector};

/// Lane arithmetic per element type.
mod lane {
    pub(super) mod f32 {
        #[inline(always)]
        pub(crate) const fn add(a: f32, b: f32) -> f32 {
            a + b
        }

        #[inline(always)]
        pub(crate) const fn sub(a: f32, b: f32) -> f32 {
            a - b
        }

        #[inline(always)]
        pub(crate) const fn mul(a: f32, b: f32) -> f32 {
            a * b
        }

        #[inline(always)]
        pub(crate) const fn div(a: f32, b: f32) -> f32 {
            a / b
        }

        #[inline(always)]
        pub(crate) const fn neg(a: f32) -> f32 {
            -a
        }
    }

    pub(super) mod i32 {
        #[inline(always)]
        pub(crate) const fn add(a: i32, b: i32) -> i32 {
            a.wrapping_add(b)
        }

        #[inline(always)]
        pub(crate) const fn sub(a: i32, b: i32) -> i32 {
            a.wrapping_sub(b)
        }

        #[inline(always)]
        pub(crate) const fn mul(a: i32, b: i32) -> i32 {
            a.wrapping_mul(b)
        }

        // Panics on a zero divisor, like every integer division
        #[inline(always)]
        pub(crate) const fn div(a: i32, b: i32) -> i32 {
            a.wrapping_div(b)
        }

        #[inline(always)]
        pub(crate) const fn neg(a: i32) -> i32 {
            a.wrapping_neg()
        }
    }
}

macro_rules! portable_impl {
    ($t:ident, $zero:literal) => {
        impl<const N: usize> Vector<$t, N>
        where
            Dimension<N>: SupportedDimension,
        {
            /// Element-wise sum, constant-evaluation form of `+`.
            #[inline(always)]
            pub const fn const_add(self, rhs: Self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = lane::$t::add(data[i], rhs.data[i]);
                    i += 1;
                }
                Self::new(data)
            }

            /// Element-wise difference, constant-evaluation form of `-`.
            #[inline(always)]
            pub const fn const_sub(self, rhs: Self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = lane::$t::sub(data[i], rhs.data[i]);
                    i += 1;
                }
                Self::new(data)
            }

            /// Sign flip, constant-evaluation form of unary `-`.
            #[inline(always)]
            pub const fn const_neg(self) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = lane::$t::neg(data[i]);
                    i += 1;
                }
                Self::new(data)
            }

            /// In-place sign flip, constant-evaluation form of [`negate`](Self::negate).
            #[inline(always)]
            pub const fn const_negate(&mut self) {
                *self = self.const_neg();
            }

            /// Scales every element, constant-evaluation form of `* scalar`.
            #[inline(always)]
            pub const fn const_mul(self, factor: $t) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = lane::$t::mul(data[i], factor);
                    i += 1;
                }
                Self::new(data)
            }

            /// Divides every element, constant-evaluation form of `/ scalar`.
            #[inline(always)]
            pub const fn const_div(self, divisor: $t) -> Self {
                let mut data = self.data;
                let mut i = 0;
                while i < N {
                    data[i] = lane::$t::div(data[i], divisor);
                    i += 1;
                }
                Self::new(data)
            }

            /// Dot product accumulated in index order.
            #[inline(always)]
            pub const fn const_dot(self, rhs: Self) -> $t {
                let mut sum = $zero;
                let mut i = 0;
                while i < N {
                    sum = lane::$t::add(sum, lane::$t::mul(self.data[i], rhs.data[i]));
                    i += 1;
                }
                sum
            }

            /// Cross product of the first three elements; the rest are zero.
            #[inline(always)]
            pub const fn const_cross(self, rhs: Self) -> Self
            where
                Dimension<N>: CrossDimension,
            {
                let a = &self.data;
                let b = &rhs.data;
                let mut data = [$zero; N];
                data[0] = lane::$t::sub(lane::$t::mul(a[1], b[2]), lane::$t::mul(a[2], b[1]));
                data[1] = lane::$t::sub(lane::$t::mul(a[2], b[0]), lane::$t::mul(a[0], b[2]));
                data[2] = lane::$t::sub(lane::$t::mul(a[0], b[1]), lane::$t::mul(a[1], b[0]));
                Self::new(data)
            }

            /// Distance to `rhs` with the approximate square root.
            #[inline(always)]
            pub const fn const_distance(self, rhs: Self) -> f32 {
                self.const_sub(rhs).const_length()
            }
        }
    };
}

portable_impl!(f32, 0.0);
portable_impl!(i32, 0);

impl<const N: usize> Vector<f32, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Euclidean norm using [`math::f32::sqrt`], accurate to about 1e-3.
    #[inline(always)]
    pub const fn const_length(self) -> f32 {
        math::f32::sqrt(self.const_dot(self))
    }

    /// Divides by [`const_length`](Self::const_length) in place.
    #[inline(always)]
    pub const fn const_normalized(&mut self) {
        *self = self.const_div(self.const_length());
    }

    /// Unit vector in the direction of `self`.
    #[inline(always)]
    pub const fn const_normalize(self) -> Vector<f32, N> {
        self.const_div(self.const_length())
    }

    /// Truncates every element toward zero.
    ///
    /// Out of range values saturate and NaN becomes `0`; the SIMD conversion
    /// returns `i32::MIN` for those instead.
    #[inline(always)]
    pub const fn const_cast_to_int(self) -> Vector<i32, N> {
        let mut data = [0; N];
        let mut i = 0;
        while i < N {
            data[i] = self.data[i] as i32;
            i += 1;
        }
        Vector::new(data)
    }
}

impl<const N: usize> Vector<i32, N>
where
    Dimension<N>: SupportedDimension,
{
    /// Euclidean norm of the exact integer dot product.
    #[inline(always)]
    pub const fn const_length(self) -> f32 {
        math::f32::sqrt(self.const_dot(self) as f32)
    }

    #[inline(always)]
    pub const fn const_normalize(self) -> Vector<f32, N> {
        self.const_cast_to_float().const_normalize()
    }

    #[inline(always)]
    pub const fn const_cast_to_float(self) -> Vector<f32, N> {
        let mut data = [0.0; N];
        let mut i = 0;
        while i < N {
            data[i] = self.data[i] as f32;
            i += 1;
        }
        Vector::new(data)
    }
}
