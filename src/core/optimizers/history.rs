//! 직전 스텝 그래디언트 스냅샷 저장소

use ndarray::ArrayD;

/// 파라미터별 그래디언트 스냅샷 슬롯
///
/// 슬롯 개수는 생성 시점에 파라미터 개수로 고정된다. 각 슬롯은 해당 파라미터가
/// 처음으로 그래디언트를 가진 스텝을 마칠 때까지 비어 있고, 그 뒤로는 매 스텝
/// 덮어써진다(다시 비워지지 않음).
///
/// 저장 값은 항상 소유된 복사본이다. 호출자가 스텝 사이에 그래디언트 버퍼를
/// 0으로 만들거나 덮어써도 스냅샷은 영향을 받지 않아야 한다.
#[derive(Debug, Clone)]
pub struct GradientHistory {
    slots: Vec<Option<ArrayD<f32>>>,
}

impl GradientHistory {
    pub fn new(num_params: usize) -> Self {
        Self {
            slots: vec![None; num_params],
        }
    }

    /// 슬롯 개수 (= 파라미터 개수)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 파라미터 `index`의 스냅샷이 채워졌는지 확인
    pub fn has_history(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// 파라미터 `index`의 스냅샷 조회 (없으면 None)
    pub fn get(&self, index: usize) -> Option<&ArrayD<f32>> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// 파라미터 `index`의 스냅샷을 `grad`의 독립 복사본으로 교체
    pub fn set(&mut self, index: usize, grad: &ArrayD<f32>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(grad.to_owned());
        }
    }
}
