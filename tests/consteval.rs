//! Values computed entirely during constant evaluation.
//!
//! Every item below is a `const`, so a regression that makes one of the
//! `const fn` forms non-const fails to compile rather than at run time.

use euclid::{math, vector, Vector, VectorType};

const A: Vector<f32, 4> = vector![1.0, -2.0, 3.0, 0.5];
const B: Vector<f32, 4> = vector![0.5, 4.0, -1.0, 2.0];
const P: Vector<i32, 6> = vector![1, 2, 3, 4, 5, 6];
const Q: Vector<i32, 6> = vector![6, 5, 4, 3, 2, 1];

const SUM: Vector<f32, 4> = A.const_add(B);
const DIFFERENCE: Vector<i32, 6> = P.const_sub(Q);
const NEGATED: Vector<i32, 6> = P.const_neg();
const SCALED: Vector<f32, 4> = A.const_mul(2.0);
const HALVED: Vector<i32, 6> = P.const_div(2);
const DOT: i32 = P.const_dot(Q);
const CROSS: Vector<i32, 6> = P.const_cross(Q);
const LENGTH: f32 = vector![6.0f32, 8.0].const_length();
const INT_LENGTH: f32 = vector![0, 0, 12, 5].const_length();
const DISTANCE: f32 = P.const_distance(Q);
const UNIT: Vector<f32, 4> = A.const_normalize();
const FLOATS: Vector<f32, 6> = P.const_cast_to_float();
const INTS: Vector<i32, 4> = SCALED.const_cast_to_int();
const SIZE: usize = P.size();
const THIRD: Option<i32> = P.get(2);
const ARRAY: [f32; 4] = A.to_array();

const NORMALIZED_IN_PLACE: Vector<f32, 4> = {
    let mut v = A;
    v.const_normalized();
    v
};

const NEGATED_IN_PLACE: Vector<i32, 6> = {
    let mut v = P;
    v.const_negate();
    v
};

const SIN_30: f32 = math::f32::sin(30.0);
const COS_30: f64 = math::f64::cos(30.0);
const TAN_60: f32 = math::f32::tan(60.0);
const SQRT_2: f32 = math::f32::sqrt(2.0);

#[test]
fn test_const_results_match_run_time() {
    println!("sum = {SUM:?}, dot = {DOT}, cross = {CROSS:?}");

    assert_eq!(SUM, A + B);
    assert_eq!(DIFFERENCE, P - Q);
    assert_eq!(NEGATED, -P);
    assert_eq!(SCALED, A * 2.0f32);
    assert_eq!(HALVED, P / 2i32);
    assert_eq!(DOT, P.dot(Q));
    assert_eq!(DOT, 56);
    assert_eq!(CROSS.to_array()[..3], P.cross(Q).to_array()[..3]);
    assert_eq!(CROSS.to_array(), [-7, 14, -7, 0, 0, 0]);
    assert_eq!(FLOATS, P.cast_to_float());
    assert_eq!(INTS, SCALED.cast_to_int());
    assert_eq!(INTS.to_array(), [2, -4, 6, 1]);
}

#[test]
fn test_const_geometry_is_approximate() {
    assert!((LENGTH - 10.0).abs() < 1e-2, "length {LENGTH}");
    assert!((INT_LENGTH - 13.0).abs() < 1e-2, "length {INT_LENGTH}");
    assert!((DISTANCE - P.distance(Q)).abs() < 1e-2, "distance {DISTANCE}");

    let unit_length = UNIT.length();
    assert!((unit_length - 1.0).abs() < 1e-3, "|unit| = {unit_length}");
    assert_eq!(NORMALIZED_IN_PLACE, UNIT);
    assert_eq!(NEGATED_IN_PLACE, NEGATED);
}

#[test]
fn test_const_access() {
    assert_eq!(SIZE, 6);
    assert_eq!(<Vector<i32, 6> as VectorType>::SIZE, SIZE);
    assert_eq!(THIRD, Some(3));
    assert_eq!(ARRAY, [1.0, -2.0, 3.0, 0.5]);
}

#[test]
fn test_const_math() {
    assert!((SIN_30 - 0.5).abs() < 1e-3, "sin(30) = {SIN_30}");
    assert!((COS_30 - math::cos(30.0f64)).abs() < 1e-3, "cos(30) = {COS_30}");
    assert!((TAN_60 - math::tan(60.0f32)).abs() < 1e-3, "tan(60) = {TAN_60}");
    assert!((SQRT_2 - std::f32::consts::SQRT_2).abs() < 1e-3, "sqrt(2) = {SQRT_2}");
}
