//! 스넬의 법칙(Snell's law) 기반 그래디언트 굴절 - 정밀 수학적 구현
//!
//! 그래디언트를 두 매질의 경계를 지나는 광선으로 보고, 매질의 굴절 특성을
//! 그래디언트 자신의 크기에서 유도한다. 크기가 큰 그래디언트일수록 밀한(느린)
//! 매질처럼 동작한다.

use nalgebra::Vector3;

/// 현재 그래디언트 행을 직전 그래디언트 방향 쪽으로 굴절시킨다.
///
/// 반환 벡터의 크기는 `cur`와 동일하고, 방향만 `cur`와 `prev`가 이루는 평면
/// 안에서 회전한다. 입력은 수정하지 않는 순수 함수.
pub fn refract(cur: Vector3<f32>, prev: Vector3<f32>, eps: f32) -> Vector3<f32> {
    // 퇴화 입력은 굴절 없이 현재 벡터를 그대로 반환
    if is_degenerate(&cur, &prev) {
        return cur;
    }

    // 1. 크기와 입사각 (0 근처 나눗셈은 모두 eps로 방어)
    let norm_cur = cur.norm().max(eps);
    let norm_prev = prev.norm().max(eps);
    let cos1 = (cur.dot(&prev) / (norm_cur * norm_prev)).clamp(-1.0, 1.0);
    let sin1 = (1.0 - cos1 * cos1).clamp(0.0, 1.0).sqrt();

    // 2. 매질 속도 근사: v = exp(-‖g‖)
    let vel_cur = (-norm_cur).exp();
    let vel_prev = (-norm_prev).exp();

    // 3. 굴절 평면의 정규 직교 기저 (u_cur, u_ortho), 법선 u_cross
    let cross = cur.cross(&prev);
    let u_cur = cur / norm_cur;
    let u_cross = cross / cross.norm().max(eps);
    let u_ortho = u_cur.cross(&u_cross);

    // 4. 스넬의 법칙: sin2 = sin1 * v_cur / v_prev
    //    전반사는 반사 분기 없이 상한 클램프로만 처리한다
    let sin2 = (sin1 * vel_cur / vel_prev.max(eps)).min(1.0);
    let cos2 = (1.0 - sin2 * sin2).max(0.0).sqrt();

    // 5. 로컬 방향 (cos2, sin2, 0)을 원래 좌표계로 되돌리고 크기 복원
    (u_cur * cos2 + u_ortho * sin2) * norm_cur
}

/// 굴절을 건너뛰어야 하는 퇴화 입력인지 판정한다.
///
/// 영벡터이거나, 두 벡터의 성분이 최대 한 개만 다른 근사-중복 입력이면
/// 외적 기반 기저가 특이해지므로 굴절을 적용하지 않는다.
pub fn is_degenerate(cur: &Vector3<f32>, prev: &Vector3<f32>) -> bool {
    let is_zero = |v: &Vector3<f32>| v.iter().all(|&c| c == 0.0);
    if is_zero(cur) || is_zero(prev) {
        return true;
    }

    let differing = cur.iter().zip(prev.iter()).filter(|(a, b)| a != b).count();
    differing <= 1
}
