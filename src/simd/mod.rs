//! Run-time kernels.
//!
//! One backend is compiled per build, selected by the `cfg` flags the build
//! script emits:
//!
//! - `avx2`: x86/x86_64 hosts whose CPU reports AVX2. Vectors of up to four
//!   lanes use 128-bit registers, five to eight lanes use 256-bit registers.
//! - `fallback`: everything else, or any build with the `portable` feature.
//!   The kernels call the vector's `const fn` forms, except that `length` and
//!   `normalize` use the exact library square root.
//!
//! Both backends expose the same functions under `native`, so the choice is a
//! module alias resolved at compile time rather than a branch at run time.
//! Kernel names follow the intrinsic suffixes: `_ps` for `f32` lanes, `_epi32`
//! for `i32` lanes.

#[cfg(avx2)]
pub(crate) mod avx2;

#[cfg(not(avx2))]
pub(crate) mod portable;

#[cfg(avx2)]
pub(crate) use avx2 as native;

#[cfg(not(avx2))]
pub(crate) use portable as native;

/// Name of the backend compiled into this build.
#[cfg(avx2)]
pub const BACKEND: &str = "avx2";

/// Name of the backend compiled into this build.
#[cfg(not(avx2))]
pub const BACKEND: &str = "portable";
