//! Snell 옵티마이저 라이브러리
//!
//! 광학 굴절(스넬의 법칙) 유추로 현재 그래디언트를 직전 스텝의 그래디언트 방향
//! 쪽으로 휘어서 하강하는 경사 기반 옵티마이저

pub mod core;

// 핵심 모듈들 재수출
pub use core::{
    // 굴절 계산
    refraction::{is_degenerate, refract},
    // 파라미터 버퍼
    Parameter,
    // 최적화기
    GradientHistory, SnellConfig, SnellOptimizer,
};

// 편의 타입 별칭
pub type Optimizer = SnellOptimizer;
