//! Element-wise arithmetic: run-time operators against the `const fn` forms.
//!
//! Float addition, subtraction, scaling and division are single IEEE
//! operations per lane on both paths, so the two must agree bit for bit.

use euclid::{Dimension, SupportedDimension, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 200;

fn random_floats<const N: usize>(rng: &mut StdRng) -> Vector<f32, N>
where
    Dimension<N>: SupportedDimension,
{
    Vector::new(std::array::from_fn(|_| rng.random_range(-100.0..100.0)))
}

fn random_ints<const N: usize>(rng: &mut StdRng) -> Vector<i32, N>
where
    Dimension<N>: SupportedDimension,
{
    Vector::new(std::array::from_fn(|_| rng.random_range(-1_000_000..1_000_000)))
}

fn check_float_paths<const N: usize>(rng: &mut StdRng)
where
    Dimension<N>: SupportedDimension,
{
    let mut worst = 0.0f32;
    for _ in 0..ROUNDS {
        let v = random_floats::<N>(rng);
        let w = random_floats::<N>(rng);
        let s: f32 = rng.random_range(-10.0..10.0);

        assert_eq!(v + w, v.const_add(w), "add, N = {N}");
        assert_eq!(v - w, v.const_sub(w), "sub, N = {N}");
        assert_eq!(-v, v.const_neg(), "neg, N = {N}");
        assert_eq!(v * s, v.const_mul(s), "scale, N = {N}");
        assert_eq!(v / 4.0f32, v.const_div(4.0), "div, N = {N}");

        // v + w - w == v up to one rounding of the intermediate sum
        let round_trip = v + w - w;
        for (a, b) in round_trip.iter().zip(&v) {
            let error = (a - b).abs();
            worst = worst.max(error);
            assert!(error < 1e-4, "N = {N}: {round_trip:?} vs {v:?}");
        }
    }
    println!("N = {N}: worst |v + w - w - v| = {worst:.2e}");
}

fn check_int_paths<const N: usize>(rng: &mut StdRng)
where
    Dimension<N>: SupportedDimension,
{
    for _ in 0..ROUNDS {
        let v = random_ints::<N>(rng);
        let w = random_ints::<N>(rng);
        let s: i32 = rng.random_range(-5_000..5_000);

        assert_eq!(v + w, v.const_add(w), "add, N = {N}");
        assert_eq!(v - w, v.const_sub(w), "sub, N = {N}");
        assert_eq!(v + w - w, v, "round trip, N = {N}");
        assert_eq!(-v, v.const_neg(), "neg, N = {N}");
        assert_eq!(v * s, v.const_mul(s), "scale, N = {N}");
        assert_eq!(v / 7i32, v.const_div(7), "div, N = {N}");
    }
}

#[test]
fn test_float_arithmetic_matches_const_path() {
    let mut rng = StdRng::seed_from_u64(12345);
    check_float_paths::<1>(&mut rng);
    check_float_paths::<2>(&mut rng);
    check_float_paths::<3>(&mut rng);
    check_float_paths::<4>(&mut rng);
    check_float_paths::<5>(&mut rng);
    check_float_paths::<6>(&mut rng);
    check_float_paths::<7>(&mut rng);
    check_float_paths::<8>(&mut rng);
}

#[test]
fn test_int_arithmetic_matches_const_path() {
    let mut rng = StdRng::seed_from_u64(54321);
    check_int_paths::<1>(&mut rng);
    check_int_paths::<2>(&mut rng);
    check_int_paths::<3>(&mut rng);
    check_int_paths::<4>(&mut rng);
    check_int_paths::<5>(&mut rng);
    check_int_paths::<6>(&mut rng);
    check_int_paths::<7>(&mut rng);
    check_int_paths::<8>(&mut rng);
}

#[test]
fn test_integer_overflow_wraps_on_both_paths() {
    let v = Vector::<i32, 7>::splat(i32::MAX);
    let one = Vector::<i32, 7>::splat(1);
    assert_eq!((v + one).to_array(), [i32::MIN; 7]);
    assert_eq!(v.const_add(one), v + one);
    assert_eq!(v * 2i32, v.const_mul(2));

    let min = Vector::<i32, 2>::splat(i32::MIN);
    assert_eq!(-min, min);
    assert_eq!(min.const_neg(), min);
}

#[test]
fn test_scalar_multiplication_commutes_for_every_scalar_type() {
    let v = Vector::<f32, 5>::new([1.5, -2.0, 0.25, 8.0, -0.75]);
    assert_eq!(2.0f32 * v, v * 2.0f32);
    assert_eq!(3i16 * v, v * 3i16);
    assert_eq!(300u16 * v, v * 300u16);
    assert_eq!(-7i8 * v, v * -7i8);
    assert_eq!(200u8 * v, v * 200u8);
    assert_eq!(v * 3i16, v.const_mul(3.0));

    let w = Vector::<i32, 3>::new([4, -5, 6]);
    assert_eq!(9i32 * w, w * 9i32);
    assert_eq!(-9i16 * w, w * -9i16);
    assert_eq!(9u16 * w, w * 9u16);
    assert_eq!(-9i8 * w, w * -9i8);
    assert_eq!(9u8 * w, w * 9u8);
    assert_eq!((9u8 * w).to_array(), [36, -45, 54]);
}

#[test]
fn test_compound_assignment() {
    let mut v = Vector::<i32, 4>::new([10, 20, 30, 40]);
    v += Vector::splat(2);
    v -= Vector::new([1, 1, 1, 1]);
    v *= 3u8;
    v /= 11i8;
    assert_eq!(v.to_array(), [3, 5, 8, 11]);
}

#[test]
#[should_panic]
fn test_integer_division_by_zero_panics() {
    let v = Vector::<i32, 3>::new([1, 2, 3]);
    let _ = std::hint::black_box(v) / std::hint::black_box(0i32);
}

#[test]
fn test_float_division_by_zero_is_infinite() {
    let v = Vector::<f32, 3>::new([1.0, -1.0, 2.0]) / 0.0f32;
    assert_eq!(v.to_array(), [f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY]);
}
