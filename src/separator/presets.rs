//! 자주 쓰는 분리기 사이징 시나리오를 이름으로 제공한다.
//! 값은 참고용 출발점이며 실제 설계 조건으로 반드시 교체해야 한다.

use crate::separator::sizing::{Orientation, SeparatorInput};

#[derive(Debug)]
pub struct PresetData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    pub input: SeparatorInput,
}

pub fn presets() -> &'static [PresetData] {
    PRESETS
}

pub fn find_preset(code: &str) -> Option<&'static PresetData> {
    PRESETS
        .iter()
        .find(|p| p.code.eq_ignore_ascii_case(code) || p.name.eq_ignore_ascii_case(code))
}

const PRESETS: &[PresetData] = &[
    PresetData {
        code: "VERT-TEST",
        name: "수직 시험 분리기",
        notes: "중압 시험 분리기. 저유량 웰 테스트 기준.",
        input: SeparatorInput {
            orientation: Orientation::Vertical,
            pressure_psia: 500.0,
            temperature_r: 560.0,
            gas_sg: 0.65,
            gas_flow_mmscfd: 5.0,
            z_factor: None,
            oil_sg: 0.85,
            water_sg: 1.05,
            oil_flow_bpd: 2000.0,
            water_flow_bpd: 500.0,
            oil_viscosity_cp: 10.0,
            water_viscosity_cp: 1.0,
            oil_density_lb_ft3: 53.0,
            dm_liquid_um: 100.0,
            dm_oil_um: 200.0,
            dm_water_um: 500.0,
            retention_time_min: 5.0,
            slenderness: 3.0,
        },
    },
    PresetData {
        code: "HORIZ-PROD",
        name: "수평 생산 분리기",
        notes: "고압 생산 분리기. 가스-오일 유량이 모두 큰 경우.",
        input: SeparatorInput {
            orientation: Orientation::Horizontal,
            pressure_psia: 1000.0,
            temperature_r: 600.0,
            gas_sg: 0.6,
            gas_flow_mmscfd: 10.0,
            z_factor: Some(0.9),
            oil_sg: 0.8,
            water_sg: 1.05,
            oil_flow_bpd: 5000.0,
            water_flow_bpd: 3000.0,
            oil_viscosity_cp: 5.0,
            water_viscosity_cp: 0.8,
            oil_density_lb_ft3: 50.0,
            dm_liquid_um: 100.0,
            dm_oil_um: 200.0,
            dm_water_um: 500.0,
            retention_time_min: 5.0,
            slenderness: 3.0,
        },
    },
    PresetData {
        code: "HEAVY-OIL",
        name: "중질유 분리기",
        notes: "고점도 중질유. 체류시간을 길게 잡고 액적 크기를 키운 기준.",
        input: SeparatorInput {
            orientation: Orientation::Vertical,
            pressure_psia: 150.0,
            temperature_r: 580.0,
            gas_sg: 0.7,
            gas_flow_mmscfd: 1.0,
            z_factor: None,
            oil_sg: 0.93,
            water_sg: 1.02,
            oil_flow_bpd: 1500.0,
            water_flow_bpd: 1000.0,
            oil_viscosity_cp: 80.0,
            water_viscosity_cp: 1.0,
            oil_density_lb_ft3: 58.0,
            dm_liquid_um: 150.0,
            dm_oil_um: 250.0,
            dm_water_um: 600.0,
            retention_time_min: 10.0,
            slenderness: 3.0,
        },
    },
];
