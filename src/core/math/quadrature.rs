//! 고정 스텝 구적법 (좌측 끝점 사각형 규칙)
//!
//! 적응적 세분화나 오차 추정 없이 `steps`번의 함수 평가로 정적분을 근사한다.

/// 기본 분할 수
pub const DEFAULT_QUADRATURE_STEPS: usize = 10_000;

/// 좌측 끝점 사각형 규칙으로 `[a, b]` 구간 적분
///
/// 표본점은 부호 있는 `(b - a) / steps` 간격으로 생성하고,
/// 최종 스케일은 `|b - a| / steps`를 쓴다. `a > b`일 때도 이 비대칭을 유지한다.
/// 비유한 값은 그대로 전파된다.
pub fn integrate<F>(f: F, a: f64, b: f64, steps: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let dx = (b - a) / steps as f64;
    let mut s = 0.0;

    for i in 0..steps {
        s += f(a + i as f64 * dx);
    }

    s * (b - a).abs() / steps as f64
}

/// 기본 분할 수(10000)로 적분
#[inline]
pub fn integrate_default<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    integrate(f, a, b, DEFAULT_QUADRATURE_STEPS)
}
