//! # 스넬 옵티마이저 핵심 모듈
//!
//! 굴절 수치 계산, 그래디언트 스냅샷 이력, 스텝 조정 로직의 핵심 구성 요소들

pub mod math;
pub mod optimizers;
pub mod tensors;

// 주요 타입들 재수출
pub use math::*;
pub use optimizers::*;
pub use tensors::*;

// 각 모듈이 자체 테스트를 포함함
