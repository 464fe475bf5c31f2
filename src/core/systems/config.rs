//! # 변환 구성 설정
//!
//! 구적법 분할 수, 지평 탐색 파라미터, 표 작성 크기와 기저 파라미터.
//! JSON 파일에서 일부 필드만 덮어쓸 수 있고 나머지는 기본값을 따른다.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::error::ParameterError;
use crate::core::math::laguerre::{
    validate_parameters, DEFAULT_HORIZON_EPSILON, DEFAULT_HORIZON_ORDER, DEFAULT_TABULATION_POINTS,
};
use crate::core::math::quadrature::DEFAULT_QUADRATURE_STEPS;

/// 역변환 표 작성 기본 구간 수
pub const DEFAULT_INVERSE_TABULATION_SIZE: usize = 1000;
/// 지평 탐색 기본 구간 길이
pub const DEFAULT_HORIZON_PROBE_T: f64 = 100.0;

/// 변환 구성
///
/// 지평 탐색 격자는 1000점으로 고정이며 설정 대상이 아니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// 기저 파라미터 β
    pub beta: f64,
    /// 기저 파라미터 σ
    pub sigma: f64,
    /// 구적법 분할 수
    pub quadrature_steps: usize,
    /// 지평 탐색 구간 [0, T]
    pub horizon_probe_t: f64,
    /// 지평 허용오차 ε
    pub horizon_epsilon: f64,
    /// 지평 탐색 최대 차수
    pub horizon_order: usize,
    /// 기저 함수 표 작성 표본 수
    pub tabulation_points: usize,
    /// 역변환 표 작성 구간 수 (표본은 +1개)
    pub inverse_tabulation_size: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            beta: 2.0,
            sigma: 4.0,
            quadrature_steps: DEFAULT_QUADRATURE_STEPS,
            horizon_probe_t: DEFAULT_HORIZON_PROBE_T,
            horizon_epsilon: DEFAULT_HORIZON_EPSILON,
            horizon_order: DEFAULT_HORIZON_ORDER,
            tabulation_points: DEFAULT_TABULATION_POINTS,
            inverse_tabulation_size: DEFAULT_INVERSE_TABULATION_SIZE,
        }
    }
}

impl TransformConfig {
    /// JSON 파일에서 설정 로드 후 검증
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("설정 파일 읽기 실패: {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("설정 파일 해석 실패: {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_parameters(self.beta, self.sigma)?;

        let counts = [
            ("quadrature_steps", self.quadrature_steps),
            ("tabulation_points", self.tabulation_points),
            ("inverse_tabulation_size", self.inverse_tabulation_size),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ParameterError::InvalidGrid { name, value }.into());
            }
        }

        Ok(())
    }
}
