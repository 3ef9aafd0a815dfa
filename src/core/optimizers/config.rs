use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// 기본 학습률
pub const DEFAULT_LEARNING_RATE: f32 = 0.01;
/// 수치 안정성을 위한 기본 엡실론
pub const DEFAULT_EPSILON: f32 = 1e-8;

/// 스넬 옵티마이저 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnellConfig {
    /// 학습률 (양수)
    pub learning_rate: f32,
    /// 엡실론 (수치 안정성을 위한 작은 양수)
    pub epsilon: f32,
}

impl Default for SnellConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl SnellConfig {
    /// 새 구성 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 학습률 설정
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// 엡실론 설정
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// 구성 값 검증
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.learning_rate.is_finite() && self.learning_rate > 0.0,
            "학습률은 유한한 양수여야 합니다: {}",
            self.learning_rate
        );
        ensure!(
            self.epsilon.is_finite() && self.epsilon > 0.0,
            "엡실론은 유한한 양수여야 합니다: {}",
            self.epsilon
        );
        Ok(())
    }
}
