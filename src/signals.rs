//! 참조 신호들
//!
//! 변환 실험에 쓰는 작은 불변 값 타입들. 모두 `Signal`을 구현한다.

use std::f64::consts::PI;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::error::ParameterError;
use crate::core::signal::Signal;

/// `[0, 2π]`에서 sin(t - π/2) + 1, 그 밖에서는 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftedSinePulse;

impl Signal for ShiftedSinePulse {
    fn value(&self, t: f64) -> f64 {
        if (0.0..=2.0 * PI).contains(&t) {
            (t - PI / 2.0).sin() + 1.0
        } else {
            0.0
        }
    }
}

/// 정규화된 가우시안 밀도
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    mean: f64,
    spread: f64,
}

impl Gaussian {
    /// spread ≤ 0 이면 `ParameterError::InvalidSpread`
    pub fn new(mean: f64, spread: f64) -> Result<Self> {
        if !(spread > 0.0) {
            return Err(ParameterError::InvalidSpread { spread }.into());
        }
        Ok(Self { mean, spread })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl Signal for Gaussian {
    fn value(&self, t: f64) -> f64 {
        let exponent = -(t - self.mean).powi(2) / (2.0 * self.spread.powi(2));
        let denominator = self.spread * (2.0 * PI).sqrt();
        exponent.exp() / denominator
    }
}

/// t ≤ π/3 에서 tan(t), 이후 tan(π/3)로 고정
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClampedTangent;

impl Signal for ClampedTangent {
    fn value(&self, t: f64) -> f64 {
        if t <= PI / 3.0 {
            t.tan()
        } else {
            (PI / 3.0).tan()
        }
    }
}
