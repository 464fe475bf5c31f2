//! 수치 핵심: 고정 스텝 구적법과 라게르 기저 엔진

pub mod laguerre;
pub mod quadrature;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use laguerre::*;
pub use quadrature::*;
