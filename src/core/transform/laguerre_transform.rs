//! 라게르 변환 엔진
//!
//! 정변환: 신호 → 계수열, 가중 적분 `∫ f(t)·l_n(t)·e^(-t(σ-β)) dt`
//! 역변환: 계수열 → 재구성 값 `Σ c_i·l_i(t)`

use anyhow::Result;
use log::{debug, warn};
use rayon::prelude::*;

use crate::core::math::laguerre::{HorizonResult, LaguerreBasis};
use crate::core::math::quadrature::integrate;
use crate::core::signal::Signal;
use crate::core::systems::config::TransformConfig;

/// 차수 0..=N 순서의 전개 계수
pub type CoefficientSequence = Vec<f64>;

/// 역변환에서 정확히 0인 계수를 다루는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroHandling {
    /// 0을 걸러낸 뒤 0부터 다시 번호를 매김. 내부 0 이후의 계수는 한 차수씩 당겨진다.
    Reindex,
    /// 0을 건너뛰되 각 계수를 원래 차수와 짝지음
    PreserveOrder,
}

/// 라게르 정/역변환 엔진
#[derive(Debug, Clone)]
pub struct LaguerreTransform {
    basis: LaguerreBasis,
    config: TransformConfig,
}

impl Default for LaguerreTransform {
    fn default() -> Self {
        Self {
            basis: LaguerreBasis::default(),
            config: TransformConfig::default(),
        }
    }
}

impl LaguerreTransform {
    /// 설정의 (β, σ)로 기저를 만들어 엔진 생성
    pub fn from_config(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        let basis = LaguerreBasis::new(config.beta, config.sigma)?;
        Ok(Self { basis, config })
    }

    /// 주어진 기저와 기본 수치 설정으로 엔진 생성
    pub fn with_basis(basis: LaguerreBasis) -> Self {
        let config = TransformConfig {
            beta: basis.beta(),
            sigma: basis.sigma(),
            ..TransformConfig::default()
        };
        Self { basis, config }
    }

    pub fn basis(&self) -> &LaguerreBasis {
        &self.basis
    }

    pub fn basis_mut(&mut self) -> &mut LaguerreBasis {
        &mut self.basis
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// 설정된 탐색 파라미터로 적분 상한용 지평 탐색 (1000점 고정 격자)
    pub fn probe_horizon(&self) -> HorizonResult {
        self.search_bound(
            self.config.horizon_probe_t,
            self.config.horizon_epsilon,
            self.config.horizon_order,
        )
    }

    /// n차 계수. 호출마다 지평 탐색을 새로 수행한다.
    pub fn forward_coefficient<S>(&self, signal: &S, n: usize) -> f64
    where
        S: Signal + ?Sized,
    {
        let horizon = self.probe_horizon();
        self.forward_coefficient_with_bound(signal, n, &horizon)
    }

    /// 탐색 파라미터 (T_probe, ε, N_probe)를 직접 지정한 n차 계수
    pub fn forward_coefficient_with<S>(
        &self,
        signal: &S,
        n: usize,
        probe_t: f64,
        epsilon: f64,
        probe_order: usize,
    ) -> f64
    where
        S: Signal + ?Sized,
    {
        let horizon = self.search_bound(probe_t, epsilon, probe_order);
        self.forward_coefficient_with_bound(signal, n, &horizon)
    }

    /// 미리 구한 지평으로 n차 계수 계산
    ///
    /// 지평이 없으면 상한은 +∞이고 결과는 NaN 또는 발산값이 된다.
    pub fn forward_coefficient_with_bound<S>(
        &self,
        signal: &S,
        n: usize,
        horizon: &HorizonResult,
    ) -> f64
    where
        S: Signal + ?Sized,
    {
        let upper = horizon.integration_bound();
        if horizon.is_degenerate() {
            warn!("지평을 찾지 못함: {}차 계수를 무한 구간으로 적분", n);
        }

        let rate = self.basis.sigma() - self.basis.beta();
        let integrand = |t: f64| signal.value(t) * self.basis.evaluate(t, n) * (-t * rate).exp();
        integrate(integrand, 0.0, upper, self.config.quadrature_steps)
    }

    /// 0..=N 차 계수열
    pub fn forward_sequence<S>(&self, signal: &S, max_order: usize) -> CoefficientSequence
    where
        S: Signal + ?Sized,
    {
        debug!("정변환: N={}", max_order);
        (0..=max_order)
            .map(|n| self.forward_coefficient(signal, n))
            .collect()
    }

    /// 하나의 지평을 모든 차수에 재사용하는 계수열
    pub fn forward_sequence_with_bound<S>(
        &self,
        signal: &S,
        max_order: usize,
        horizon: &HorizonResult,
    ) -> CoefficientSequence
    where
        S: Signal + ?Sized,
    {
        (0..=max_order)
            .map(|n| self.forward_coefficient_with_bound(signal, n, horizon))
            .collect()
    }

    /// 차수별 병렬 계산. 결과는 `forward_sequence`와 동일한 순서/값
    pub fn forward_sequence_parallel<S>(&self, signal: &S, max_order: usize) -> CoefficientSequence
    where
        S: Signal + Sync + ?Sized,
    {
        debug!("병렬 정변환: N={}", max_order);
        (0..=max_order)
            .into_par_iter()
            .map(|n| self.forward_coefficient(signal, n))
            .collect()
    }

    /// 역변환 (0 필터 후 재번호)
    pub fn inverse(&self, coefficients: &[f64], t: f64) -> f64 {
        self.inverse_with(coefficients, t, ZeroHandling::Reindex)
    }

    /// 역변환 (0을 건너뛰되 차수 유지)
    pub fn inverse_preserving_order(&self, coefficients: &[f64], t: f64) -> f64 {
        self.inverse_with(coefficients, t, ZeroHandling::PreserveOrder)
    }

    pub fn inverse_with(&self, coefficients: &[f64], t: f64, zeros: ZeroHandling) -> f64 {
        let mut sum = 0.0;
        match zeros {
            ZeroHandling::Reindex => {
                for (order, &c) in coefficients.iter().filter(|&&c| c != 0.0).enumerate() {
                    sum += c * self.basis.evaluate(t, order);
                }
            }
            ZeroHandling::PreserveOrder => {
                for (order, &c) in coefficients.iter().enumerate() {
                    if c != 0.0 {
                        sum += c * self.basis.evaluate(t, order);
                    }
                }
            }
        }
        sum
    }

    /// `[t1, t2]`를 size 구간으로 나눈 size + 1개 점에서 역변환
    ///
    /// size가 0이면 t1 한 점만 평가한다.
    pub fn inverse_tabulate(&self, coefficients: &[f64], t1: f64, t2: f64, size: usize) -> Vec<f64> {
        self.inverse_tabulate_with(coefficients, t1, t2, size, ZeroHandling::Reindex)
    }

    /// 설정된 기본 구간 수(1000)로 역변환 표 작성
    pub fn inverse_tabulate_default(&self, coefficients: &[f64], t1: f64, t2: f64) -> Vec<f64> {
        self.inverse_tabulate(coefficients, t1, t2, self.config.inverse_tabulation_size)
    }

    pub fn inverse_tabulate_preserving_order(
        &self,
        coefficients: &[f64],
        t1: f64,
        t2: f64,
        size: usize,
    ) -> Vec<f64> {
        self.inverse_tabulate_with(coefficients, t1, t2, size, ZeroHandling::PreserveOrder)
    }

    pub fn inverse_tabulate_with(
        &self,
        coefficients: &[f64],
        t1: f64,
        t2: f64,
        size: usize,
        zeros: ZeroHandling,
    ) -> Vec<f64> {
        if size == 0 {
            return vec![self.inverse_with(coefficients, t1, zeros)];
        }
        let step = (t2 - t1) / size as f64;
        (0..=size)
            .map(|i| self.inverse_with(coefficients, t1 + i as f64 * step, zeros))
            .collect()
    }

    fn search_bound(&self, probe_t: f64, epsilon: f64, probe_order: usize) -> HorizonResult {
        self.basis.find_horizon(probe_t, epsilon, probe_order)
    }
}
