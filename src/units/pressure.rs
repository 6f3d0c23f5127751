use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 psi(절대압 psia)이다.
/// 게이지/절대 구분은 `conversion::convert_pressure_mode`에서 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    Bar,
    KiloPascal,
    MegaPascal,
    KgPerCm2,
    Atm,
}

const PSI_PER_BAR: f64 = 14.503_77;
const PSI_PER_ATM: f64 = 14.695_95;
const PSI_PER_KGF_CM2: f64 = 14.223_34;

/// 주어진 압력을 psi 로 변환한다. 스케일만 환산하며 기준점(게이지/절대)은 유지된다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Bar => value * PSI_PER_BAR,
        PressureUnit::KiloPascal => value * PSI_PER_BAR / 100.0,
        PressureUnit::MegaPascal => value * PSI_PER_BAR * 10.0,
        PressureUnit::KgPerCm2 => value * PSI_PER_KGF_CM2,
        PressureUnit::Atm => value * PSI_PER_ATM,
    }
}

/// psi 값을 원하는 단위로 변환한다.
pub fn from_psi(value_psi: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_psi,
        PressureUnit::Bar => value_psi / PSI_PER_BAR,
        PressureUnit::KiloPascal => value_psi / PSI_PER_BAR * 100.0,
        PressureUnit::MegaPascal => value_psi / PSI_PER_BAR / 10.0,
        PressureUnit::KgPerCm2 => value_psi / PSI_PER_KGF_CM2,
        PressureUnit::Atm => value_psi / PSI_PER_ATM,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let psi = to_psi(value, from);
    from_psi(psi, to)
}
