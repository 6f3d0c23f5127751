use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 cp(센티푸아즈)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    Centipoise,
    MilliPascalSecond,
    PascalSecond,
}

fn to_cp(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value,
        // 1 mPa·s = 1 cp
        ViscosityUnit::MilliPascalSecond => value,
        ViscosityUnit::PascalSecond => value * 1000.0,
    }
}

fn from_cp(value_cp: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value_cp,
        ViscosityUnit::MilliPascalSecond => value_cp,
        ViscosityUnit::PascalSecond => value_cp / 1000.0,
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let cp = to_cp(value, from);
    from_cp(cp, to)
}
