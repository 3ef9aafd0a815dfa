//! 스넬 옵티마이저 - 굴절 기반 경사하강법
//!
//! 파라미터별로 직전 스텝의 그래디언트 스냅샷을 유지하고, 행렬 형상의
//! 그래디언트는 행 단위로 직전 방향 쪽으로 굴절시켜 하강 방향을 만든다.
//! 스냅샷이 없거나 벡터 형상이면 일반 경사하강으로 후퇴한다.

use anyhow::{ensure, Result};
use nalgebra::Vector3;
use ndarray::{Array2, ArrayD, Ix2};

use super::config::SnellConfig;
use super::history::GradientHistory;
use crate::core::math::refraction::refract;
use crate::core::tensors::Parameter;

/// 스넬 옵티마이저
///
/// 파라미터 개수는 생성 시점에 고정되고, 스냅샷 슬롯 개수와 항상 일치한다.
/// 단일 스레드 동기 호출 전용.
#[derive(Debug, Clone)]
pub struct SnellOptimizer {
    /// 학습률
    pub learning_rate: f32,
    /// 수치 안정성 엡실론
    pub epsilon: f32,
    /// 파라미터별 직전 그래디언트 스냅샷
    history: GradientHistory,
}

impl SnellOptimizer {
    /// 기본 구성(학습률 0.01, 엡실론 1e-8)으로 생성
    pub fn new(num_params: usize) -> Self {
        Self::with_config(num_params, SnellConfig::default())
    }

    /// 학습률만 지정해 생성
    pub fn with_learning_rate(num_params: usize, learning_rate: f32) -> Self {
        Self::with_config(
            num_params,
            SnellConfig::default().with_learning_rate(learning_rate),
        )
    }

    pub fn with_config(num_params: usize, config: SnellConfig) -> Self {
        Self {
            learning_rate: config.learning_rate,
            epsilon: config.epsilon,
            history: GradientHistory::new(num_params),
        }
    }

    /// 구성을 검증한 뒤 생성
    pub fn from_config(num_params: usize, config: SnellConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(num_params, config))
    }

    /// 파라미터 `index`의 스냅샷 보유 여부
    pub fn has_history(&self, index: usize) -> bool {
        self.history.has_history(index)
    }

    /// 한 스텝 수행: 각 파라미터에 대해 업데이트 방향을 계산해 제자리 차감하고,
    /// 방금 사용한 그래디언트의 독립 복사본으로 스냅샷을 갱신한다.
    ///
    /// 그래디언트가 채워지지 않은 파라미터는 건드리지 않고 스냅샷도 갱신하지
    /// 않는다. 굴절 결과가 유한하지 않으면 해당 파라미터에 값을 쓰기 전에
    /// 에러로 중단한다.
    pub fn step(&mut self, params: &mut [Parameter]) -> Result<()> {
        ensure!(
            params.len() == self.history.len(),
            "파라미터 개수({})가 스냅샷 슬롯 개수({})와 다릅니다",
            params.len(),
            self.history.len()
        );

        for (index, param) in params.iter_mut().enumerate() {
            let update = match param.grad.as_ref() {
                Some(grad) => self.compute_update(index, grad)?,
                None => continue,
            };

            param.apply_update(&update, self.learning_rate);

            // 다음 스텝의 "직전 그래디언트"가 되도록 복사본을 저장
            if let Some(grad) = param.grad.as_ref() {
                self.history.set(index, grad);
            }
        }

        Ok(())
    }

    /// 모든 파라미터의 그래디언트 버퍼를 제자리에서 0으로 초기화.
    /// 스냅샷은 복사본이므로 영향을 받지 않는다.
    pub fn zero_grad(&self, params: &mut [Parameter]) {
        for param in params.iter_mut() {
            param.zero_grad();
        }
    }

    /// 파라미터 하나의 업데이트 방향 계산
    ///
    /// 행렬 형상이고 형상이 일치하는 스냅샷이 있으면 행 단위 굴절, 그 외에는
    /// 원본 그래디언트 그대로(일반 경사하강).
    fn compute_update(&self, index: usize, grad: &ArrayD<f32>) -> Result<ArrayD<f32>> {
        if grad.ndim() != 2 {
            return Ok(grad.to_owned());
        }

        let cur = grad.view().into_dimensionality::<Ix2>()?;
        // 굴절은 3차원 외적을 쓰므로 행 너비 3에서만 정의된다
        ensure!(
            cur.ncols() == 3,
            "파라미터 {}: 행렬 그래디언트의 행 너비는 3이어야 합니다 (현재 {})",
            index,
            cur.ncols()
        );

        let prev = match self.history.get(index) {
            // 행 수가 달라진 스냅샷은 사용하지 않고 일반 경사하강으로 후퇴
            Some(prev) if prev.shape() == grad.shape() => {
                prev.view().into_dimensionality::<Ix2>()?
            }
            _ => return Ok(grad.to_owned()),
        };

        let mut bent = Array2::<f32>::zeros(cur.raw_dim());
        for (row, (c, p)) in cur.outer_iter().zip(prev.outer_iter()).enumerate() {
            let dir = refract(
                Vector3::new(c[0], c[1], c[2]),
                Vector3::new(p[0], p[1], p[2]),
                self.epsilon,
            );
            ensure!(
                dir.iter().all(|v| v.is_finite()),
                "파라미터 {}의 {}번째 행 굴절 결과가 유한하지 않습니다",
                index,
                row
            );
            bent[[row, 0]] = dir.x;
            bent[[row, 1]] = dir.y;
            bent[[row, 2]] = dir.z;
        }

        Ok(bent.into_dyn())
    }
}
