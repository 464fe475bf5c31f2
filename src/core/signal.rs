//! 신호 추상화
//!
//! 변환 엔진은 신호 내부를 보지 않고 표본점에서 값만 요청한다.

/// 실수 → 실수 신호
pub trait Signal {
    fn value(&self, t: f64) -> f64;
}

impl<F> Signal for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn value(&self, t: f64) -> f64 {
        self(t)
    }
}
