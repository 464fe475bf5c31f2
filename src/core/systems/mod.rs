//! # 시스템 설정
//!
//! 변환 엔진이 쓰는 수치 상수와 기저 파라미터 설정

pub mod config;


pub use config::*;
