//! # 라게르 변환 핵심 모듈
//!
//! 구적법과 라게르 기저(`math`), 정/역변환(`transform`), 설정(`systems`)

pub mod error;
pub mod math;
pub mod signal;
pub mod systems;
pub mod transform;

// 주요 타입들 재수출
pub use error::ParameterError;
pub use math::*;
pub use signal::Signal;
pub use systems::*;
pub use transform::*;
