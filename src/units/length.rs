use serde::{Deserialize, Serialize};

/// 길이 단위를 정의한다. 내부 기준은 피트(ft)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Foot,
    Inch,
    Meter,
    Centimeter,
    Millimeter,
}

const FT_PER_M: f64 = 3.280_84;

fn to_feet(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value,
        LengthUnit::Inch => value / 12.0,
        LengthUnit::Meter => value * FT_PER_M,
        LengthUnit::Centimeter => value * FT_PER_M / 100.0,
        LengthUnit::Millimeter => value * FT_PER_M / 1000.0,
    }
}

fn from_feet(value_ft: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value_ft,
        LengthUnit::Inch => value_ft * 12.0,
        LengthUnit::Meter => value_ft / FT_PER_M,
        LengthUnit::Centimeter => value_ft / FT_PER_M * 100.0,
        LengthUnit::Millimeter => value_ft / FT_PER_M * 1000.0,
    }
}

/// 길이를 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let ft = to_feet(value, from);
    from_feet(ft, to)
}
