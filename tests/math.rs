//! Precision of the constant-evaluation math kernel against the library
//! functions used at run time.

use euclid::math;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn relative_error(expected: f32, actual: f32) -> f32 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((expected - actual) / expected).abs()
    }
}

#[test]
fn test_sqrt_precision_comparison() {
    let test_cases = [
        // Perfect squares
        vec![1.0f32, 4.0, 9.0, 16.0, 25.0, 36.0],
        // Fractions
        vec![0.01f32, 0.1, 0.25, 0.5],
        // Large values
        vec![1e4f32, 1e6, 1e8, 1e12],
        // Very small values
        vec![1e-8f32, 1e-6, 1e-4],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        for &x in test_case {
            let exact = math::sqrt(x);
            let approx = math::f32::sqrt(x);
            let error = relative_error(exact, approx);

            println!("  Input: {x:e}, Exact: {exact:.8}, Const: {approx:.8}, Rel Error: {error:.2e}");

            assert!(
                error < 1e-3,
                "Precision error too large for input {x}: exact={exact}, const={approx}, rel_error={error:.2e}"
            );
        }
    }
}

#[test]
fn test_sqrt_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut worst = 0.0f32;

    for _ in 0..10_000 {
        let x: f32 = rng.random_range(0.0..1_000_000.0);
        let error = relative_error(math::sqrt(x), math::f32::sqrt(x));
        worst = worst.max(error);
        assert!(error < 1e-3, "sqrt({x}) rel error {error:.2e}");
    }
    println!("Worst relative error over random inputs: {worst:.2e}");
}

#[test]
fn test_trig_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(54321);

    for _ in 0..10_000 {
        let angle: f32 = rng.random_range(-90.0..=90.0);
        let sin_error = (math::sin(angle) - math::f32::sin(angle)).abs();
        let cos_error = (math::cos(angle) - math::f32::cos(angle)).abs();
        assert!(sin_error < 1e-3, "sin({angle}) abs error {sin_error:.2e}");
        assert!(cos_error < 1e-3, "cos({angle}) abs error {cos_error:.2e}");

        let angle = angle as f64;
        assert!((math::sin(angle) - math::f64::sin(angle)).abs() < 1e-3);
        assert!((math::cos(angle) - math::f64::cos(angle)).abs() < 1e-3);
    }
}

#[test]
fn test_tan_precision_toward_right_angle() {
    let mut rng = StdRng::seed_from_u64(13579);

    for _ in 0..10_000 {
        let angle: f64 = rng.random_range(30.0..89.9);
        let exact = math::tan(angle);
        let approx = math::f64::tan(angle);
        let error = ((exact - approx) / exact).abs();
        assert!(error < 1e-4, "tan({angle}): exact={exact}, const={approx}, rel error={error:.2e}");
    }
}
