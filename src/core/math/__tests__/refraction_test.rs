use crate::core::math::refraction::{is_degenerate, refract};
use nalgebra::Vector3;

const EPS: f32 = 1e-8;

#[test]
fn 굴절_동일벡터_테스트() {
    let v = Vector3::new(0.3, -1.2, 2.5);
    assert_eq!(refract(v, v, EPS), v, "동일한 벡터는 굴절 없이 그대로 반환되어야 함");
}

#[test]
fn 굴절_영벡터_가드_테스트() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let zero = Vector3::zeros();

    assert_eq!(refract(v, zero, EPS), v, "이전 그래디언트가 영벡터면 현재 벡터 그대로");
    assert_eq!(refract(zero, v, EPS), zero, "현재 그래디언트가 영벡터면 현재 벡터(영벡터) 그대로");
    assert_eq!(refract(zero, zero, EPS), zero, "둘 다 영벡터여도 그대로");
}

#[test]
fn 굴절_근사중복_가드_테스트() {
    // 시나리오 B: 한 성분만 다른 평행 벡터는 특이 기저를 만들지 않고 그대로 반환
    let cur = Vector3::new(2.0, 0.0, 0.0);
    let prev = Vector3::new(1.0, 0.0, 0.0);

    assert!(is_degenerate(&cur, &prev), "성분이 최대 한 개 다른 입력은 퇴화 입력");
    assert_eq!(refract(cur, prev, EPS), cur, "퇴화 입력은 현재 벡터를 그대로 반환");

    // 두 성분이 다르면 퇴화가 아님
    let other = Vector3::new(1.0, 1.0, 0.0);
    assert!(!is_degenerate(&cur, &other), "두 성분이 다르면 일반 경로로 진행");
}

#[test]
fn 굴절_직교_동일크기_테스트() {
    // 시나리오 A: 직교하고 크기가 같으면 sin2 = 1, cos2 = 0
    let cur = Vector3::new(0.0, 1.0, 0.0);
    let prev = Vector3::new(1.0, 0.0, 0.0);

    let out = refract(cur, prev, EPS);

    assert!((out.norm() - 1.0).abs() < 1e-5, "크기 1이 유지되어야 함");
    assert!(out.dot(&cur).abs() < 1e-5, "현재 벡터와 직교해야 함");
    assert!(out.z.abs() < 1e-6, "두 입력이 이루는 평면(xy) 안에 있어야 함");
    assert!((out - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-5, "기저상 u_ortho 방향이어야 함");
}

#[test]
fn 굴절_크기보존_테스트() {
    let cur = Vector3::new(1.0, 2.0, 2.0); // 크기 3
    let prev = Vector3::new(3.0, 1.0, -1.0);

    let out = refract(cur, prev, EPS);

    assert!((out.norm() - 3.0).abs() < 1e-4, "출력 크기는 현재 벡터 크기와 같아야 함");
    assert!(out.iter().all(|v| v.is_finite()), "출력은 유한해야 함");
}

#[test]
fn 굴절_이전크기변화_테스트() {
    // 이전 그래디언트 크기를 키우면 각도는 달라지지만 크기는 그대로
    let cur = Vector3::new(0.0, 2.0, 0.0);
    let near = refract(cur, Vector3::new(1.0, 0.0, 0.0), EPS);
    let far = refract(cur, Vector3::new(3.0, 0.0, 0.0), EPS);

    assert!((near.norm() - 2.0).abs() < 1e-4, "크기는 이전 그래디언트와 무관하게 유지");
    assert!((far.norm() - 2.0).abs() < 1e-4, "크기는 이전 그래디언트와 무관하게 유지");

    let near_dir = near / near.norm();
    let far_dir = far / far.norm();
    assert!(
        (near_dir - far_dir).norm() > 1e-3,
        "이전 그래디언트 크기가 다르면 출력 각도가 달라져야 함"
    );
}

#[test]
fn 굴절_전반사_상한클램프_테스트() {
    // vel_cur / vel_prev > 1이면 sin2가 1로 클램프되어 u_ortho 방향이 됨
    let cur = Vector3::new(0.0, 2.0, 0.0); // vel_cur = e^-2
    let prev = Vector3::new(3.0, 0.0, 0.0); // vel_prev = e^-3, 비율 e > 1

    let out = refract(cur, prev, EPS);

    assert!((out - Vector3::new(-2.0, 0.0, 0.0)).norm() < 1e-4, "전반사 상황에서는 전부 u_ortho 성분");
    assert!(out.dot(&cur).abs() < 1e-4, "sin2 = 1이면 현재 방향 성분이 없음");
}

#[test]
fn 굴절_평행벡터_외적영_테스트() {
    // 모든 성분이 다른 평행 벡터: 외적이 0이어도 eps 방어로 유한한 결과
    let cur = Vector3::new(1.0, 2.0, 3.0);
    let prev = Vector3::new(2.0, 4.0, 6.0);

    let out = refract(cur, prev, EPS);

    assert!(out.iter().all(|v| v.is_finite()), "평행 입력에서도 결과는 유한해야 함");
    // cos1 ≈ 1, sin1 ≈ 0이므로 방향이 사실상 유지됨
    assert!((out - cur).norm() < 1e-2, "평행 입력이면 현재 방향이 유지되어야 함");
}

#[test]
fn 굴절_무작위입력_유한성_테스트() {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    for _ in 0..1000 {
        let cur = Vector3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        let prev = Vector3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );

        let out = refract(cur, prev, EPS);

        assert!(out.iter().all(|v| v.is_finite()), "무작위 입력에서도 결과는 유한해야 함");
        assert!(
            (out.norm() - cur.norm()).abs() < 1e-3 * (1.0 + cur.norm()),
            "무작위 입력에서도 크기가 보존되어야 함"
        );
    }
}
