//! 스케일된 라게르 기저 함수 엔진
//!
//! (β, σ)로 파라미터화된 라게르 함수
//! `l_n(t) = √σ · L_n(σt) · e^(-βt/2)`를 3항 점화식으로 계산하고,
//! 모든 차수가 허용오차 아래로 떨어지는 시간 지평(horizon)을 탐색한다.

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::ParameterError;

/// 기저 함수 표 작성 기본 표본 수
pub const DEFAULT_TABULATION_POINTS: usize = 100;
/// 지평 탐색 격자 크기 (고정)
pub const HORIZON_GRID_POINTS: usize = 1000;
/// 지평 탐색 기본 허용오차
pub const DEFAULT_HORIZON_EPSILON: f64 = 1e-3;
/// 지평 탐색 기본 최대 차수
pub const DEFAULT_HORIZON_ORDER: usize = 20;

/// 한 차수의 기저 함수를 시각 `t`에서 평가한 값
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisSample {
    pub t: f64,
    pub value: f64,
}

/// 지평 탐색 격자점 하나의 진단 기록
///
/// `values`는 차수 1부터 평가된 순서대로이며, 단락 탐색에서는
/// 허용오차를 처음 넘은 차수에서 잘린다.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonProbe {
    pub t: f64,
    pub values: Vec<f64>,
}

/// 지평 탐색 결과
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonResult {
    /// 모든 차수가 허용오차 이하가 되는 첫 격자점 (없으면 `None`)
    pub horizon: Option<f64>,
    /// 격자점별 진단 기록 (증가하는 t 순)
    pub trace: Vec<HorizonProbe>,
}

impl HorizonResult {
    /// 적분 상한으로 사용할 값. 지평이 없으면 +∞
    pub fn integration_bound(&self) -> f64 {
        self.horizon.unwrap_or(f64::INFINITY)
    }

    pub fn is_degenerate(&self) -> bool {
        self.horizon.is_none()
    }
}

/// 라게르 기저 엔진
///
/// (β, σ)는 생성 시 검증되고 이후 변경되지 않는다.
/// `last_horizon`은 외부 확인용 참고값이며 어떤 연산도 이를 읽지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct LaguerreBasis {
    beta: f64,
    sigma: f64,
    last_horizon: Option<f64>,
}

impl Default for LaguerreBasis {
    fn default() -> Self {
        Self {
            beta: 2.0,
            sigma: 4.0,
            last_horizon: None,
        }
    }
}

impl LaguerreBasis {
    /// 0 ≤ β ≤ σ 가 아니면 `ParameterError::InvalidBasis`
    pub fn new(beta: f64, sigma: f64) -> Result<Self> {
        validate_parameters(beta, sigma)?;
        Ok(Self {
            beta,
            sigma,
            last_horizon: None,
        })
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// 마지막 `probe_horizon` 호출에서 찾은 지평 (참고용)
    pub fn last_horizon(&self) -> Option<f64> {
        self.last_horizon
    }

    /// n차 라게르 함수 값
    ///
    /// 매 호출마다 0차부터 반복 점화식을 다시 계산한다.
    pub fn evaluate(&self, t: f64, n: usize) -> f64 {
        let decay = (-self.beta * t / 2.0).exp();
        let mut lpp = self.sigma.sqrt() * decay;
        let mut lp = self.sigma.sqrt() * (1.0 - self.sigma * t) * decay;

        if n == 0 {
            return lpp;
        }
        if n == 1 {
            return lp;
        }

        for i in 2..=n {
            let k = i as f64;
            let next = ((2 * i - 1) as f64 - self.sigma * t) * lp / k - (i - 1) as f64 * lpp / k;
            lpp = lp;
            lp = next;
        }

        lp
    }

    /// `[0, T)` 구간 k개 균등 표본점에서 n차 함수 값 표 작성
    pub fn tabulate(&self, t_max: f64, n: usize, points: usize) -> Vec<BasisSample> {
        (0..points)
            .map(|i| {
                let t = i as f64 * t_max / points as f64;
                BasisSample {
                    t,
                    value: self.evaluate(t, n),
                }
            })
            .collect()
    }

    /// 기본 표본 수(100)로 표 작성
    pub fn tabulate_default(&self, t_max: f64, n: usize) -> Vec<BasisSample> {
        self.tabulate(t_max, n, DEFAULT_TABULATION_POINTS)
    }

    /// 1000점 격자에서 지평 탐색 (단락 평가)
    ///
    /// 각 격자점에서 1..=N 차수를 차례로 평가하다가 |값| > ε인 첫 차수에서 멈춘다.
    pub fn find_horizon(&self, t_max: f64, epsilon: f64, max_order: usize) -> HorizonResult {
        self.search_horizon(t_max, epsilon, max_order, HORIZON_GRID_POINTS, true)
    }

    /// 단락 없이 모든 차수를 기록하는 지평 탐색. 지평 값은 `find_horizon`과 같다.
    pub fn find_horizon_full_trace(
        &self,
        t_max: f64,
        epsilon: f64,
        max_order: usize,
    ) -> HorizonResult {
        self.search_horizon(t_max, epsilon, max_order, HORIZON_GRID_POINTS, false)
    }

    /// 임의 격자 크기로 지평 탐색
    pub fn find_horizon_on_grid(
        &self,
        t_max: f64,
        epsilon: f64,
        max_order: usize,
        grid_points: usize,
    ) -> HorizonResult {
        self.search_horizon(t_max, epsilon, max_order, grid_points, true)
    }

    /// 지평 탐색 후 결과를 `last_horizon`에 기록
    pub fn probe_horizon(&mut self, t_max: f64, epsilon: f64, max_order: usize) -> HorizonResult {
        let result = self.find_horizon(t_max, epsilon, max_order);
        self.last_horizon = result.horizon;
        result
    }

    fn search_horizon(
        &self,
        t_max: f64,
        epsilon: f64,
        max_order: usize,
        grid_points: usize,
        short_circuit: bool,
    ) -> HorizonResult {
        let mut horizon = None;
        let mut trace = Vec::with_capacity(grid_points);

        for i in 0..grid_points {
            let t = i as f64 * t_max / grid_points as f64;
            let mut negligible = true;
            let mut values = Vec::with_capacity(max_order);

            for order in 1..=max_order {
                let value = self.evaluate(t, order);
                values.push(value);
                if value.abs() > epsilon {
                    negligible = false;
                    if short_circuit {
                        break;
                    }
                }
            }

            // 처음 찾은 지평을 고정
            if negligible && horizon.is_none() {
                horizon = Some(t);
            }

            trace.push(HorizonProbe { t, values });
        }

        debug!(
            "지평 탐색: T={}, eps={}, N={}, grid={} -> {:?}",
            t_max, epsilon, max_order, grid_points, horizon
        );

        HorizonResult { horizon, trace }
    }
}

/// 0 ≤ β ≤ σ 검증 (NaN 거부)
pub fn validate_parameters(beta: f64, sigma: f64) -> Result<()> {
    if !(beta >= 0.0 && beta <= sigma) {
        return Err(ParameterError::InvalidBasis { beta, sigma }.into());
    }
    Ok(())
}
