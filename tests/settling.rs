//! 액적 종말속도 반복 계산의 영역 전환/수렴 회귀 테스트.
use separator_sizing_toolbox::separator::settling::{
    self, drag_coefficient, terminal_velocity,
};

#[test]
fn stokes_regime_matches_drag_curve() {
    // 고점도 오일 중 물 액적: Re « 2 (Stokes 영역)
    let res = terminal_velocity(600.0, 63.65, 58.0, 80.0).expect("settling calc");
    assert!(res.converged, "iterations={}", res.iterations);
    assert!(res.reynolds < 2.0, "Re={} expected Stokes regime", res.reynolds);
    // Stokes 영역에서는 Cd·Re ≈ 24
    let cd_re = res.drag_coefficient * res.reynolds;
    assert!(
        (cd_re - 24.0).abs() < 0.5,
        "Cd*Re={cd_re} expected ~24 (Cd={}, Re={})",
        res.drag_coefficient,
        res.reynolds
    );
    // Stokes 법칙 v = 1.78e-6·ΔSG·dm²/µ 과 근사적으로 일치해야 한다
    let stokes = 1.78e-6 * ((63.65 - 58.0) / 62.4) * 600.0 * 600.0 / 80.0;
    let rel = (res.velocity_ft_per_s - stokes).abs() / stokes;
    assert!(rel < 0.05, "v={} stokes={stokes}", res.velocity_ft_per_s);
}

#[test]
fn newton_regime_uses_constant_cd() {
    // 큰 액적 + 저밀도/저점도 가스 연속상: Re ≥ 500 (Newton 영역)
    let res = terminal_velocity(1000.0, 54.0, 2.7, 0.013).expect("settling calc");
    assert!(res.converged);
    assert!(res.reynolds >= 500.0, "Re={}", res.reynolds);
    assert!(
        (res.drag_coefficient - 0.44).abs() < 1e-12,
        "Cd={}",
        res.drag_coefficient
    );
}

#[test]
fn intermediate_regime_converges() {
    // 가스 중 100 µm 액적: Re가 2~500 사이에 들어온다
    let res = terminal_velocity(100.0, 54.0, 2.7, 0.013).expect("settling calc");
    assert!(res.converged, "iterations={}", res.iterations);
    assert!(
        res.reynolds >= 2.0 && res.reynolds < 500.0,
        "Re={}",
        res.reynolds
    );
    assert!(res.velocity_ft_per_s > 0.0);
    assert!(res.iterations <= settling::MAX_ITERATIONS);
}

#[test]
fn velocity_monotone_in_density_difference() {
    // 밀도차가 커질수록 종말속도는 감소하지 않는다
    let mut last = 0.0;
    for rho_dispersed in [10.0, 20.0, 30.0, 45.0, 54.0] {
        let res = terminal_velocity(100.0, rho_dispersed, 2.7, 0.013).expect("settling calc");
        assert!(
            res.velocity_ft_per_s >= last,
            "v={} decreased below {last} at rho={rho_dispersed}",
            res.velocity_ft_per_s
        );
        last = res.velocity_ft_per_s;
    }
}

#[test]
fn regime_boundaries_produce_finite_velocity() {
    // 액적 크기를 쓸어가며 Re=2, Re=500 경계를 양쪽에서 지나도
    // 속도는 항상 유한/비음수여야 한다 (경계 불연속은 허용)
    let mut crossed_stokes = false;
    let mut crossed_newton = false;
    for dm in (1..=3000).step_by(7) {
        let res = terminal_velocity(dm as f64, 54.0, 2.7, 0.013).expect("settling calc");
        assert!(
            res.velocity_ft_per_s.is_finite() && res.velocity_ft_per_s >= 0.0,
            "dm={dm} v={}",
            res.velocity_ft_per_s
        );
        assert!(res.drag_coefficient.is_finite() && res.drag_coefficient > 0.0);
        if res.reynolds >= 2.0 {
            crossed_stokes = true;
        }
        if res.reynolds >= 500.0 {
            crossed_newton = true;
        }
    }
    assert!(crossed_stokes && crossed_newton, "sweep did not cross both boundaries");
}

#[test]
fn drag_curve_piecewise_values() {
    assert!((drag_coefficient(1.0) - 24.0).abs() < 1e-12);
    // 경계 바로 아래/위: 유한 양수이며 영역별 식을 따른다
    let below = drag_coefficient(1.999);
    let above = drag_coefficient(2.001);
    assert!(below.is_finite() && below > 0.0);
    assert!(above.is_finite() && above > 0.0);
    assert!((drag_coefficient(600.0) - 0.44).abs() < 1e-12);
}

#[test]
fn equal_densities_settle_nowhere() {
    let res = terminal_velocity(200.0, 55.0, 55.0, 1.0).expect("settling calc");
    assert_eq!(res.velocity_ft_per_s, 0.0);
    assert!(res.converged);
}

#[test]
fn gas_density_real_gas_law() {
    let rho = settling::gas_density(1000.0, 600.0, 0.6, 1.0).expect("gas density");
    assert!((rho - 2.7).abs() < 1e-12, "rho={rho}");
    // z<1 이면 밀도가 커진다
    let rho_z = settling::gas_density(1000.0, 600.0, 0.6, 0.9).expect("gas density");
    assert!(rho_z > rho);
    assert!(settling::gas_density(0.0, 600.0, 0.6, 1.0).is_err());
    assert!(settling::gas_density(1000.0, -1.0, 0.6, 1.0).is_err());
}
