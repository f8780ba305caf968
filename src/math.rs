//! Scalar math kernel.
//!
//! Every function comes in two forms:
//!
//! - [`f32`] and [`f64`] hold `const fn` approximations built from bit tricks
//!   and fixed polynomials. They are the only forms callable during constant
//!   evaluation (`const` items, `const` blocks) and never touch the platform
//!   math library.
//! - [`sqrt`], [`sin`], [`cos`] and [`tan`] at the root of this module are the
//!   run-time forms. They delegate to the exact library functions through
//!   [`num::Float`].
//!
//! Angles are in degrees for both forms and are converted with
//! `angle * (pi / 180)`.
//!
//! # Accuracy of the constant forms
//!
//! | Function | Domain | Error |
//! |----------|--------|-------|
//! | `sqrt`   | positive normals, `0` | relative < 1e-3 (fast inverse sqrt class) |
//! | `sin`    | [-90°, 90°] | absolute < 1e-3 |
//! | `cos`    | [-90°, 90°] | absolute < 1e-3 |
//! | `tan`    | [30°, 90°) | relative < 1e-4, grows toward 0° |
//!
//! Outside those domains the polynomials return whatever they evaluate to:
//! there is no range reduction, `tan(90)` is an infinity and negative `sqrt`
//! inputs produce garbage. None of the functions panic.

use num::Float;

/// Square root, run-time form.
#[inline(always)]
pub fn sqrt<F: Float>(x: F) -> F {
    x.sqrt()
}

/// Sine of an angle in degrees, run-time form.
#[inline(always)]
pub fn sin<F: Float>(angle: F) -> F {
    angle.to_radians().sin()
}

/// Cosine of an angle in degrees, run-time form.
#[inline(always)]
pub fn cos<F: Float>(angle: F) -> F {
    angle.to_radians().cos()
}

/// Tangent of an angle in degrees, run-time form.
#[inline(always)]
pub fn tan<F: Float>(angle: F) -> F {
    angle.to_radians().tan()
}

/// Constant-evaluation kernel for single precision.
pub mod f32 {
    const RADIAN: f32 = core::f32::consts::PI / 180.0;

    // Bits of the seed before the subtraction of the halved input
    const SQRT_MAGIC: u32 = 0x5f1f_fff9;

    /// Approximate square root.
    ///
    /// A fast inverse square root seed refined by one Newton-Raphson style step
    /// that lands directly on `sqrt(x)` instead of `1 / sqrt(x)`.
    ///
    /// ```rust
    /// const FIVE: f32 = euclid::math::f32::sqrt(25.0);
    /// assert!((FIVE - 5.0).abs() < 5e-3);
    /// ```
    #[inline(always)]
    pub const fn sqrt(x: f32) -> f32 {
        let half = x.to_bits() >> 1;
        let seed = f32::from_bits(SQRT_MAGIC.wrapping_sub(half));
        seed * (0.703952253 * (2.38924456 - x * seed * seed)) * x
    }

    /// Approximate cosine of an angle in degrees.
    #[inline(always)]
    pub const fn cos(angle: f32) -> f32 {
        let first = angle * RADIAN * angle * RADIAN;
        let second = first * first;
        let third = first * second;
        1.0 - 0.5 * first + second * 0.04166666791 - third * 0.001361971023
    }

    /// Approximate sine of an angle in degrees.
    #[inline(always)]
    pub const fn sin(angle: f32) -> f32 {
        let first = angle * RADIAN;
        let square = first * first;
        let second = first * square;
        let third = second * square;
        let fourth = third * square;
        first - second * 0.1666666716 + third * 0.008333333768 - fourth * 0.0001984127011
    }

    /// Approximate tangent of an angle in degrees.
    ///
    /// Evaluates the cotangent series of the complementary angle, so the result
    /// is best close to 90° and infinite at exactly 90°.
    #[inline(always)]
    pub const fn tan(angle: f32) -> f32 {
        let first = (90.0 - angle) * RADIAN;
        let square = first * first;
        let second = first * square;
        let third = second * square;
        let fourth = third * square;
        -(-1.0 / first + first / 3.0 + second / 45.0 + third * 2.0 / 945.0 + fourth / 4725.0)
    }
}

/// Constant-evaluation kernel for double precision.
///
/// The polynomial coefficients are the single precision ones, so accuracy is
/// bounded by the [`f32`](super::f32) kernel rather than by `f64`.
pub mod f64 {
    const RADIAN: f64 = core::f64::consts::PI / 180.0;

    /// Approximate square root, computed in single precision and widened.
    #[inline(always)]
    pub const fn sqrt(x: f64) -> f64 {
        super::f32::sqrt(x as f32) as f64
    }

    /// Approximate cosine of an angle in degrees.
    #[inline(always)]
    pub const fn cos(angle: f64) -> f64 {
        let first = angle * RADIAN * angle * RADIAN;
        let second = first * first;
        let third = first * second;
        1.0 - 0.5 * first + second * 0.04166666791 - third * 0.001361971023
    }

    /// Approximate sine of an angle in degrees.
    #[inline(always)]
    pub const fn sin(angle: f64) -> f64 {
        let first = angle * RADIAN;
        let square = first * first;
        let second = first * square;
        let third = second * square;
        let fourth = third * square;
        first - second * 0.1666666716 + third * 0.008333333768 - fourth * 0.0001984127011
    }

    /// Approximate tangent of an angle in degrees.
    #[inline(always)]
    pub const fn tan(angle: f64) -> f64 {
        let first = (90.0 - angle) * RADIAN;
        let square = first * first;
        let second = first * square;
        let third = second * square;
        let fourth = third * square;
        -(-1.0 / first + first / 3.0 + second / 45.0 + third * 2.0 / 945.0 + fourth / 4725.0)
    }
}
