//! 라게르 변환 라이브러리
//!
//! 스케일된 라게르 함수 기저로 실수 신호를 전개하고(정변환)
//! 잘린 계수열로 신호를 재구성한다(역변환).

pub mod core;
pub mod report;
pub mod signals;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 수치 핵심
    integrate, integrate_default, BasisSample, HorizonProbe, HorizonResult, LaguerreBasis,
    // 변환
    CoefficientSequence, LaguerreTransform, ZeroHandling,
    // 설정 및 오류
    ParameterError, Signal, TransformConfig,
};
pub use crate::signals::{ClampedTangent, Gaussian, ShiftedSinePulse};
