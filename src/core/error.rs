//! 파라미터 오류 정의
//!
//! 라이브러리 전체는 `anyhow::Result`를 쓰고, 호출자가 구분해야 하는
//! 파라미터 위반만 구체 타입으로 둔다 (`downcast_ref`로 확인 가능).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// 0 ≤ β ≤ σ 위반
    #[error("잘못된 기저 파라미터: beta={beta}, sigma={sigma} (0 <= beta <= sigma 이어야 함)")]
    InvalidBasis { beta: f64, sigma: f64 },

    /// 가우시안 표준편차가 0 이하
    #[error("표준편차는 0보다 커야 함: {spread}")]
    InvalidSpread { spread: f64 },

    /// 격자/분할 수가 0
    #[error("{name}은(는) 0보다 커야 함: {value}")]
    InvalidGrid { name: &'static str, value: usize },
}
