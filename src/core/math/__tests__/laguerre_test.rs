use crate::core::error::ParameterError;
use crate::core::math::laguerre::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

fn 기본_기저() -> LaguerreBasis {
    LaguerreBasis::new(2.0, 4.0).unwrap()
}

#[test]
fn 생성자_게터_테스트() {
    let basis = 기본_기저();
    assert_eq!(basis.beta(), 2.0);
    assert_eq!(basis.sigma(), 4.0);
    assert_eq!(basis.last_horizon(), None);
    assert_eq!(LaguerreBasis::default(), basis);
}

#[test]
fn 잘못된_파라미터_거부_테스트() {
    for &(beta, sigma) in &[(-0.5, 4.0), (5.0, 4.0), (f64::NAN, 4.0)] {
        let err = LaguerreBasis::new(beta, sigma).unwrap_err();
        match err.downcast_ref::<ParameterError>() {
            Some(ParameterError::InvalidBasis { .. }) => {}
            other => panic!("InvalidBasis 오류여야 함: {:?}", other),
        }
    }

    // 경계값은 허용
    assert!(LaguerreBasis::new(0.0, 0.0).is_ok());
    assert!(LaguerreBasis::new(3.0, 3.0).is_ok());
}

#[test]
fn 원점_기저값_테스트() {
    for &(beta, sigma) in &[(0.0, 1.0), (2.0, 4.0), (0.5, 9.0), (7.0, 7.0)] {
        let basis = LaguerreBasis::new(beta, sigma).unwrap();
        assert_eq!(basis.evaluate(0.0, 0), sigma.sqrt());
        assert_eq!(basis.evaluate(0.0, 1), sigma.sqrt());
    }
}

#[test]
fn 참조값_테스트() {
    // √4 · L_2(4) · e^(-1) = 2/e
    let value = 기본_기저().evaluate(1.0, 2);
    assert_abs_diff_eq!(value, 0.73576, epsilon = 5e-6);
    assert_relative_eq!(value, 2.0 / std::f64::consts::E, max_relative = 1e-12);
}

#[test]
fn 점화식_일관성_테스트() {
    let basis = LaguerreBasis::new(1.5, 3.0).unwrap();
    let sigma = basis.sigma();

    for &t in &[0.0, 0.1, 0.7, 2.5, 10.0] {
        for n in 2..30usize {
            let k = n as f64;
            let expected = ((2 * n - 1) as f64 - sigma * t) * basis.evaluate(t, n - 1) / k
                - (n - 1) as f64 * basis.evaluate(t, n - 2) / k;
            assert_relative_eq!(basis.evaluate(t, n), expected, epsilon = 1e-12, max_relative = 1e-12);
        }
    }
}

#[test]
fn 닫힌_형태_비교_테스트() {
    // L_3(x) = (-x³ + 9x² - 18x + 6) / 6
    let basis = 기본_기저();
    let t: f64 = 0.3;
    let x = 4.0 * t;
    let closed = 2.0 * (-x * x * x + 9.0 * x * x - 18.0 * x + 6.0) / 6.0 * (-t).exp();
    assert_relative_eq!(basis.evaluate(t, 3), closed, max_relative = 1e-12);
}

#[test]
fn 기저_표_작성_테스트() {
    let table = 기본_기저().tabulate_default(10.0, 2);

    assert_eq!(table.len(), 100);
    assert_eq!(table[0].t, 0.0);
    assert_abs_diff_eq!(table[1].value, 0.5067, epsilon = 5e-5);
    assert_abs_diff_eq!(table[99].t, 9.9, epsilon = 1e-12);
    assert_abs_diff_eq!(table[99].value, 0.0708, epsilon = 5e-5);

    // 증가하는 t 순서
    assert!(table.windows(2).all(|w| w[0].t < w[1].t));
}

#[test]
fn 지평_탐색_테스트() {
    let result = 기본_기저().find_horizon(100.0, DEFAULT_HORIZON_EPSILON, DEFAULT_HORIZON_ORDER);

    let horizon = result.horizon.expect("지평이 있어야 함");
    assert_abs_diff_eq!(horizon, 79.1, epsilon = 1e-9);
    assert_eq!(result.trace.len(), HORIZON_GRID_POINTS);
    assert_eq!(result.integration_bound(), horizon);
    assert!(!result.is_degenerate());
}

#[test]
fn 지평_단락_기록_테스트() {
    let basis = 기본_기저();
    let short = basis.find_horizon(100.0, 1e-3, 20);
    let full = basis.find_horizon_full_trace(100.0, 1e-3, 20);

    assert_eq!(short.horizon, full.horizon);
    assert_eq!(short.trace.len(), full.trace.len());

    // t = 0에서는 1차가 이미 √σ > ε 이므로 한 개만 기록됨
    assert_eq!(short.trace[0].values.len(), 1);
    assert!(full.trace.iter().all(|p| p.values.len() == 20));

    // 지평 이후 점들은 단락 없이 전부 기록됨
    let horizon = short.horizon.unwrap();
    let at_horizon = short.trace.iter().find(|p| p.t == horizon).unwrap();
    assert_eq!(at_horizon.values.len(), 20);
    assert!(at_horizon.values.iter().all(|v| v.abs() <= 1e-3));
}

#[test]
fn 지평_부재_테스트() {
    // 짧은 구간에서는 어떤 점도 허용오차를 만족하지 못함
    let result = 기본_기저().find_horizon(1.0, 1e-3, 20);
    assert_eq!(result.horizon, None);
    assert!(result.is_degenerate());
    assert_eq!(result.integration_bound(), f64::INFINITY);
    assert_eq!(result.trace.len(), HORIZON_GRID_POINTS);
}

#[test]
fn 지평_캐시_기록_테스트() {
    let mut basis = 기본_기저();
    let result = basis.probe_horizon(100.0, 1e-3, 20);
    assert_eq!(basis.last_horizon(), result.horizon);

    basis.probe_horizon(1.0, 1e-3, 20);
    assert_eq!(basis.last_horizon(), None);
}

#[test]
fn 격자_크기_지정_테스트() {
    let result = 기본_기저().find_horizon_on_grid(100.0, 1e-3, 20, 10);
    assert_eq!(result.trace.len(), 10);
    // 10점 격자에서는 t = 80이 첫 만족점
    assert_eq!(result.horizon, Some(80.0));
}
