use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 lb/ft³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    PoundPerCubicFoot,
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
}

const LBFT3_PER_KGM3: f64 = 0.062_428;

fn to_lb_ft3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::PoundPerCubicFoot => value,
        DensityUnit::KilogramPerCubicMeter => value * LBFT3_PER_KGM3,
        DensityUnit::GramPerCubicCentimeter => value * LBFT3_PER_KGM3 * 1000.0,
    }
}

fn from_lb_ft3(value_lb_ft3: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::PoundPerCubicFoot => value_lb_ft3,
        DensityUnit::KilogramPerCubicMeter => value_lb_ft3 / LBFT3_PER_KGM3,
        DensityUnit::GramPerCubicCentimeter => value_lb_ft3 / LBFT3_PER_KGM3 / 1000.0,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    let base = to_lb_ft3(value, from);
    from_lb_ft3(base, to)
}
