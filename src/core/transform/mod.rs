//! # 변환 모듈
//!
//! 라게르 기저 위의 정변환(계수 계산)과 역변환(재구성)

pub mod laguerre_transform;


pub use laguerre_transform::*;
