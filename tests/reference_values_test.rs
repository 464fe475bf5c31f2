//! 기본 파라미터(β=2, σ=4)에서의 참조 결과 검증

use approx::assert_abs_diff_eq;
use laguerre_transform::{ClampedTangent, Gaussian, LaguerreTransform, ShiftedSinePulse};
use std::f64::consts::PI;

const ORDER: usize = 20;

#[test]
fn 펄스_역변환_참조값_테스트() {
    let engine = LaguerreTransform::default();
    let coefficients = engine.forward_sequence(&ShiftedSinePulse, ORDER);

    assert_eq!(coefficients.len(), ORDER + 1);
    let value = engine.inverse(&coefficients, PI);
    assert_abs_diff_eq!(value, 1.99994, epsilon = 5e-6);
}

#[test]
fn 가우시안_계수_참조값_테스트() {
    let engine = LaguerreTransform::default();
    let gauss = Gaussian::new(4.0, 3.0).unwrap();
    let coefficients = engine.forward_sequence(&gauss, ORDER);

    assert_eq!(coefficients.len(), 21);
    assert_abs_diff_eq!(coefficients[0], 0.0425, epsilon = 5e-5);
    assert_abs_diff_eq!(coefficients[11], 0.0005, epsilon = 5e-5);
    assert_abs_diff_eq!(coefficients[20], 0.0005, epsilon = 5e-5);

    assert_abs_diff_eq!(engine.inverse(&coefficients, PI), 0.1256, epsilon = 5e-5);
}

#[test]
fn 가우시안_평균_3배_참조값_테스트() {
    let engine = LaguerreTransform::default();
    let spread = 5.0;
    let gauss = Gaussian::new(3.0 * spread, spread).unwrap();
    let coefficients = engine.forward_sequence(&gauss, ORDER);

    assert_eq!(coefficients.len(), 21);
    assert_abs_diff_eq!(coefficients[0], 0.0007, epsilon = 5e-5);
    assert_abs_diff_eq!(coefficients[11], 7.07136699545659e-06, epsilon = 1e-12);
    assert_abs_diff_eq!(coefficients[20], 7.771885685696491e-06, epsilon = 1e-12);
    assert_abs_diff_eq!(engine.inverse(&coefficients, PI), 0.0048, epsilon = 5e-5);
}

#[test]
fn 가우시안_평균_6배_참조값_테스트() {
    let engine = LaguerreTransform::default();
    let spread = 2.0;
    let gauss = Gaussian::new(6.0 * spread, spread).unwrap();
    let coefficients = engine.forward_sequence(&gauss, ORDER);

    assert_eq!(coefficients.len(), 21);
    assert_abs_diff_eq!(coefficients[0], 2e-8, epsilon = 5e-9);
    assert_abs_diff_eq!(coefficients[11], -2.49e-6, epsilon = 5e-9);
    assert_abs_diff_eq!(coefficients[20], -1e-11, epsilon = 5e-12);
    assert_abs_diff_eq!(engine.inverse(&coefficients, PI), 1e-5, epsilon = 5e-6);
}

#[test]
fn 탄젠트_신호_재구성_테스트() {
    let engine = LaguerreTransform::default();
    let coefficients = engine.forward_sequence(&ClampedTangent, ORDER);
    let table = engine.inverse_tabulate_default(&coefficients, 0.0, PI / 3.0);

    assert_eq!(table.len(), 1001);
    assert!(table.iter().all(|v| v.is_finite()));
}
