//! psi 게이지/절대 변환 회귀 테스트.
use separator_sizing_toolbox::conversion::{convert_pressure_mode, PressureMode};
use separator_sizing_toolbox::units::PressureUnit;

#[test]
fn psig_zero_to_psia() {
    // 0 psi(g) => 1 atm abs ≈ 14.696 psia
    let psia = convert_pressure_mode(
        0.0,
        PressureUnit::Psi,
        PressureMode::Gauge,
        PressureUnit::Psi,
        PressureMode::Absolute,
    );
    assert!((psia - 14.696).abs() < 1e-2, "psia={psia}");
}

#[test]
fn bar_abs_to_psia() {
    let psia = convert_pressure_mode(
        1.0,
        PressureUnit::Bar,
        PressureMode::Absolute,
        PressureUnit::Psi,
        PressureMode::Absolute,
    );
    assert!((psia - 14.5038).abs() < 1e-3, "psia={psia}");
}

#[test]
fn atm_to_psia_roundtrip() {
    // 1 atm(abs) => 14.69595 psia => 0 psi(g)
    let psig = convert_pressure_mode(
        1.0,
        PressureUnit::Atm,
        PressureMode::Absolute,
        PressureUnit::Psi,
        PressureMode::Gauge,
    );
    assert!(psig.abs() < 1e-6, "expected ~0 psig, got {psig}");
}

#[test]
fn kpa_roundtrip() {
    let kpa = convert_pressure_mode(
        100.0,
        PressureUnit::KiloPascal,
        PressureMode::Absolute,
        PressureUnit::Psi,
        PressureMode::Absolute,
    );
    let back = convert_pressure_mode(
        kpa,
        PressureUnit::Psi,
        PressureMode::Absolute,
        PressureUnit::KiloPascal,
        PressureMode::Absolute,
    );
    assert!((back - 100.0).abs() < 1e-9, "back={back}");
}
