use serde::{Deserialize, Serialize};

/// 액체 유량 단위. 내부 기준은 BPD(배럴/일)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidFlowUnit {
    BarrelPerDay,
    CubicMeterPerDay,
    CubicMeterPerHour,
    GallonPerMinute,
}

const BBL_PER_M3: f64 = 6.289_81;

fn to_bpd(value: f64, unit: LiquidFlowUnit) -> f64 {
    match unit {
        LiquidFlowUnit::BarrelPerDay => value,
        LiquidFlowUnit::CubicMeterPerDay => value * BBL_PER_M3,
        LiquidFlowUnit::CubicMeterPerHour => value * BBL_PER_M3 * 24.0,
        // 1 bbl = 42 gal
        LiquidFlowUnit::GallonPerMinute => value * 1440.0 / 42.0,
    }
}

fn from_bpd(value_bpd: f64, unit: LiquidFlowUnit) -> f64 {
    match unit {
        LiquidFlowUnit::BarrelPerDay => value_bpd,
        LiquidFlowUnit::CubicMeterPerDay => value_bpd / BBL_PER_M3,
        LiquidFlowUnit::CubicMeterPerHour => value_bpd / BBL_PER_M3 / 24.0,
        LiquidFlowUnit::GallonPerMinute => value_bpd * 42.0 / 1440.0,
    }
}

/// 액체 유량을 변환한다.
pub fn convert_liquid_flow(value: f64, from: LiquidFlowUnit, to: LiquidFlowUnit) -> f64 {
    let base = to_bpd(value, from);
    from_bpd(base, to)
}
