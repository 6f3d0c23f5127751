use serde::{Deserialize, Serialize};

/// 가스 표준 유량 단위. 내부 기준은 MMscfd(백만 표준 ft³/일)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasFlowUnit {
    MMscfd,
    Mscfd,
    StdCubicMeterPerDay,
}

// 1 scf = 0.0283168 Sm³
const SM3_PER_MMSCF: f64 = 28_316.846_6;

fn to_mmscfd(value: f64, unit: GasFlowUnit) -> f64 {
    match unit {
        GasFlowUnit::MMscfd => value,
        GasFlowUnit::Mscfd => value / 1000.0,
        GasFlowUnit::StdCubicMeterPerDay => value / SM3_PER_MMSCF,
    }
}

fn from_mmscfd(value_mmscfd: f64, unit: GasFlowUnit) -> f64 {
    match unit {
        GasFlowUnit::MMscfd => value_mmscfd,
        GasFlowUnit::Mscfd => value_mmscfd * 1000.0,
        GasFlowUnit::StdCubicMeterPerDay => value_mmscfd * SM3_PER_MMSCF,
    }
}

/// 가스 표준 유량을 변환한다.
pub fn convert_gas_flow(value: f64, from: GasFlowUnit, to: GasFlowUnit) -> f64 {
    let base = to_mmscfd(value, from);
    from_mmscfd(base, to)
}
