//! 학습 가능한 파라미터 버퍼
//!
//! 외부 미분 엔진과 공유하는 좁은 인터페이스. 옵티마이저 핵심부는 이 타입의
//! 메서드(값 읽기/갱신, 그래디언트 읽기/설정/초기화)만 사용한다.

use anyhow::{ensure, Result};
use ndarray::{arr1, arr2, ArrayD};

/// 학습 가능한 파라미터
///
/// `grad`는 외부 미분 엔진이 `step()` 호출 전에 채우는 선택적 버퍼로,
/// 값 버퍼와 동일한 형상을 가져야 한다.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// 파라미터 값 버퍼
    pub data: ArrayD<f32>,
    /// 그래디언트 버퍼 (채워지기 전까지 None)
    pub grad: Option<ArrayD<f32>>,
}

impl Parameter {
    pub fn new(data: ArrayD<f32>) -> Self {
        Self { data, grad: None }
    }

    /// 1차원 벡터 파라미터 생성
    pub fn from_vector(values: &[f32]) -> Self {
        Self::new(arr1(values).into_dyn())
    }

    /// 3성분 행벡터들로 이루어진 행렬 파라미터 생성
    pub fn from_matrix(rows: &[[f32; 3]]) -> Self {
        Self::new(arr2(rows).into_dyn())
    }

    /// 그래디언트 버퍼 설정. 값 버퍼와 형상이 다르면 거부한다.
    pub fn set_grad(&mut self, grad: ArrayD<f32>) -> Result<()> {
        ensure!(
            grad.shape() == self.data.shape(),
            "그래디언트 형상 {:?}이 파라미터 형상 {:?}과 다릅니다",
            grad.shape(),
            self.data.shape()
        );
        self.grad = Some(grad);
        Ok(())
    }

    /// 그래디언트 버퍼를 제자리에서 0으로 초기화 (버퍼가 없으면 아무 일도 없음)
    pub fn zero_grad(&mut self) {
        if let Some(grad) = self.grad.as_mut() {
            grad.fill(0.0);
        }
    }

    /// 업데이트 방향을 학습률로 스케일해 제자리에서 차감: data -= lr * update
    pub fn apply_update(&mut self, update: &ArrayD<f32>, learning_rate: f32) {
        self.data.scaled_add(-learning_rate, update);
    }
}
