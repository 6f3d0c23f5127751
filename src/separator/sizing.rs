use serde::{Deserialize, Serialize};

use crate::separator::settling::{self, SettlingError, SettlingResult};

/// 사이징 계산 오류를 표현한다.
#[derive(Debug)]
pub enum SizingError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for SizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for SizingError {}

impl From<SettlingError> for SizingError {
    fn from(value: SettlingError) -> Self {
        match value {
            SettlingError::InvalidInput(msg) => SizingError::InvalidInput(msg),
        }
    }
}

/// 용기 배치 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// 분리기 사이징 입력값. 유전 현장 단위(psia, °R, MMscfd, BPD, cp, lb/ft³, µm) 기준.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparatorInput {
    pub orientation: Orientation,
    /// 운전 압력 [psia]
    pub pressure_psia: f64,
    /// 운전 온도 [°R]
    pub temperature_r: f64,
    /// 가스 비중 (공기=1)
    pub gas_sg: f64,
    /// 가스 유량 [MMscfd]
    pub gas_flow_mmscfd: f64,
    /// 가스 압축인자. 알 수 없으면 생략(1.0 사용).
    #[serde(default)]
    pub z_factor: Option<f64>,
    /// 오일 비중 (물=1)
    pub oil_sg: f64,
    /// 물 비중 (물=1)
    pub water_sg: f64,
    /// 오일 유량 [BOPD]
    pub oil_flow_bpd: f64,
    /// 물 유량 [BWPD]
    pub water_flow_bpd: f64,
    /// 오일 점도 [cp]
    pub oil_viscosity_cp: f64,
    /// 물 점도 [cp]
    pub water_viscosity_cp: f64,
    /// 오일 밀도 [lb/ft³]
    pub oil_density_lb_ft3: f64,
    /// 가스 중 액적 제거 크기 [µm]
    pub dm_liquid_um: f64,
    /// 물 중 오일 액적 제거 크기 [µm]
    pub dm_oil_um: f64,
    /// 오일 중 물 액적 제거 크기 [µm]
    pub dm_water_um: f64,
    /// 액체 체류시간 [min]
    #[serde(default = "default_retention_time")]
    pub retention_time_min: f64,
    /// 목표 세장비 L/D. 제약이 없을 때 길이 산정에 사용한다.
    #[serde(default = "default_slenderness")]
    pub slenderness: f64,
}

fn default_retention_time() -> f64 {
    5.0
}

fn default_slenderness() -> f64 {
    3.0
}

/// 분리기 사이징 결과. 하나의 입력에서 새로 만들어지는 불변 값이다.
#[derive(Debug, Clone)]
pub struct SeparatorResult {
    /// 운전 조건 가스 밀도 [lb/ft³]
    pub gas_density_lb_ft3: f64,
    /// 가스 중 액적 침강 계산
    pub gas_settling: SettlingResult,
    /// 물 중 오일 액적 부상 계산
    pub oil_in_water_settling: SettlingResult,
    /// 오일 중 물 액적 침강 계산
    pub water_in_oil_settling: SettlingResult,
    /// 가스 처리용량 제약 직경 [ft]
    pub gas_capacity_diameter_ft: f64,
    /// 오일상(물 액적 침강) 제약 직경 [ft]
    pub oil_settling_diameter_ft: f64,
    /// 물상(오일 액적 부상) 제약 직경 [ft]
    pub water_settling_diameter_ft: f64,
    /// 액체 체류 제약 직경 [ft]
    pub retention_diameter_ft: f64,
    /// 액체 체류 제약 길이 [ft]
    pub retention_length_ft: f64,
    /// 선정 직경 [ft]. 지배 제약의 최댓값을 0.5 ft 단위로 올림한 값.
    pub diameter_ft: f64,
    /// 선정 seam-to-seam 길이 [ft]
    pub length_ft: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 제작 직경 증분 [ft]. 용기는 0.5 ft 단위로 제작한다.
pub const DIAMETER_INCREMENT_FT: f64 = 0.5;
/// 세장비(L/D) 하한.
pub const SLENDERNESS_MIN: f64 = 1.5;
/// 세장비(L/D) 상한.
pub const SLENDERNESS_MAX: f64 = 6.0;

const FT3_PER_BBL: f64 = 5.614_58;
const WATER_DENSITY_LB_FT3: f64 = 62.4;
const STD_PRESSURE_PSIA: f64 = 14.696;
const STD_TEMPERATURE_R: f64 = 520.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
// 탄화수소 가스 점도 근사값 [cp], 향후 상관식으로 치환
const GAS_VISCOSITY_CP: f64 = 0.013;
// 액체가 용기 단면의 절반을 차지한다고 본다 (수평 half-full 관례, 수직도 동일 적용)
const LIQUID_FILL_FRACTION: f64 = 0.5;

/// 표준 유량(MMscfd)을 운전 조건 실제 체적유량 [ft³/s]으로 환산한다.
pub fn actual_gas_rate_ft3_per_s(
    gas_flow_mmscfd: f64,
    pressure_psia: f64,
    temperature_r: f64,
    z_factor: f64,
) -> f64 {
    gas_flow_mmscfd * 1.0e6 / SECONDS_PER_DAY
        * (STD_PRESSURE_PSIA / pressure_psia)
        * (temperature_r / STD_TEMPERATURE_R)
        * z_factor
}

/// 액체 유량(BPD)을 실제 체적유량 [ft³/s]으로 환산한다.
fn liquid_rate_ft3_per_s(flow_bpd: f64) -> f64 {
    flow_bpd * FT3_PER_BBL / SECONDS_PER_DAY
}

/// 가스 처리용량 제약 직경을 계산한다.
///
/// 수직: 가스 단면 유속이 액적 종말속도를 넘지 않아야 하므로 A = q/v.
/// 수평: 액적이 가스 공간(셸 절반)을 가로질러 침강해야 하므로
/// D·L_eff ≥ 4q/(π·v)이고, L_eff = 세장비·D 로 풀어 직경을 얻는다.
pub fn size_gas_capacity(
    q_actual_ft3_per_s: f64,
    terminal_velocity_ft_per_s: f64,
    orientation: Orientation,
    slenderness: f64,
) -> f64 {
    if q_actual_ft3_per_s <= 0.0 {
        return 0.0;
    }
    match orientation {
        Orientation::Vertical => {
            let area = q_actual_ft3_per_s / terminal_velocity_ft_per_s;
            (4.0 * area / std::f64::consts::PI).sqrt()
        }
        Orientation::Horizontal => {
            let d_times_l =
                4.0 * q_actual_ft3_per_s / (std::f64::consts::PI * terminal_velocity_ft_per_s);
            (d_times_l / slenderness).sqrt()
        }
    }
}

/// 액체 체류 제약 (직경, 길이)를 계산한다.
///
/// 필요 체류 체적 V = (Qo+Qw)·5.61458·t_r/1440 [ft³]. 액체가 셸 절반을
/// 차지하고 L/D = r 이면 V = π·r·D³/8 이므로 D = (8V/(π·r))^⅓, L = r·D.
/// 액체 유량이 모두 0이면 (0, 0)을 반환한다.
pub fn size_liquid_retention(
    oil_flow_bpd: f64,
    water_flow_bpd: f64,
    retention_time_min: f64,
    slenderness: f64,
) -> (f64, f64) {
    let volume_ft3 =
        (oil_flow_bpd + water_flow_bpd) * FT3_PER_BBL * retention_time_min / 1440.0;
    if volume_ft3 <= 0.0 {
        return (0.0, 0.0);
    }
    let diameter =
        (8.0 * volume_ft3 / (std::f64::consts::PI * slenderness)).cbrt();
    (diameter, slenderness * diameter)
}

/// 직경을 제작 증분(0.5 ft) 단위로 올림한다.
fn round_up_diameter(diameter_ft: f64) -> f64 {
    (diameter_ft / DIAMETER_INCREMENT_FT).ceil() * DIAMETER_INCREMENT_FT
}

fn validate(input: &SeparatorInput) -> Result<(), SizingError> {
    if input.pressure_psia <= 0.0 {
        return Err(SizingError::InvalidInput("압력은 0보다 커야 합니다."));
    }
    if input.temperature_r <= 0.0 {
        return Err(SizingError::InvalidInput("온도는 0보다 커야 합니다."));
    }
    if input.gas_sg <= 0.0 || input.oil_sg <= 0.0 || input.water_sg <= 0.0 {
        return Err(SizingError::InvalidInput("비중은 0보다 커야 합니다."));
    }
    if input.gas_flow_mmscfd < 0.0 || input.oil_flow_bpd < 0.0 || input.water_flow_bpd < 0.0 {
        return Err(SizingError::InvalidInput("유량은 음수일 수 없습니다."));
    }
    if input.oil_viscosity_cp <= 0.0 || input.water_viscosity_cp <= 0.0 {
        return Err(SizingError::InvalidInput("점도는 0보다 커야 합니다."));
    }
    if input.oil_density_lb_ft3 <= 0.0 {
        return Err(SizingError::InvalidInput("오일 밀도는 0보다 커야 합니다."));
    }
    if input.dm_liquid_um <= 0.0 || input.dm_oil_um <= 0.0 || input.dm_water_um <= 0.0 {
        return Err(SizingError::InvalidInput("액적 제거 크기는 0보다 커야 합니다."));
    }
    if let Some(z) = input.z_factor {
        if z <= 0.0 {
            return Err(SizingError::InvalidInput("압축인자는 0보다 커야 합니다."));
        }
    }
    if input.retention_time_min <= 0.0 {
        return Err(SizingError::InvalidInput("체류시간은 0보다 커야 합니다."));
    }
    if input.slenderness < SLENDERNESS_MIN || input.slenderness > SLENDERNESS_MAX {
        return Err(SizingError::InvalidInput(
            "세장비는 1.5 이상 6.0 이하여야 합니다.",
        ));
    }
    Ok(())
}

/// 입력 전체를 검증한 뒤 지배 제약을 선정해 분리기 치수를 계산한다.
///
/// 결정적 순수 계산이며 공유 상태가 없어 병렬 호출에 안전하다. 유량이 0인
/// 상은 제약 기여가 0이 되어 오류 없이 처리된다.
pub fn size(input: &SeparatorInput) -> Result<SeparatorResult, SizingError> {
    validate(input)?;

    let z = input.z_factor.unwrap_or(1.0);
    let rho_gas = settling::gas_density(
        input.pressure_psia,
        input.temperature_r,
        input.gas_sg,
        z,
    )?;
    let rho_oil = input.oil_density_lb_ft3;
    let rho_water = WATER_DENSITY_LB_FT3 * input.water_sg;

    let mut warnings = Vec::new();
    let implied_oil_density = WATER_DENSITY_LB_FT3 * input.oil_sg;
    if (implied_oil_density - rho_oil).abs() > 0.1 * rho_oil {
        warnings.push(format!(
            "오일 비중으로 환산한 밀도 {:.1} lb/ft³와 입력 밀도 {:.1} lb/ft³ 차이가 큽니다.",
            implied_oil_density, rho_oil
        ));
    }

    // 세 가지 액적 제거 요건별 종말속도
    let gas_settling =
        settling::terminal_velocity(input.dm_liquid_um, rho_oil, rho_gas, GAS_VISCOSITY_CP)?;
    let oil_in_water_settling = settling::terminal_velocity(
        input.dm_oil_um,
        rho_oil,
        rho_water,
        input.water_viscosity_cp,
    )?;
    let water_in_oil_settling = settling::terminal_velocity(
        input.dm_water_um,
        rho_water,
        rho_oil,
        input.oil_viscosity_cp,
    )?;
    push_convergence_warnings(
        &mut warnings,
        &[
            ("가스 중 액적", &gas_settling),
            ("물 중 오일 액적", &oil_in_water_settling),
            ("오일 중 물 액적", &water_in_oil_settling),
        ],
    );

    // 가스 처리용량 제약
    let q_gas = actual_gas_rate_ft3_per_s(
        input.gas_flow_mmscfd,
        input.pressure_psia,
        input.temperature_r,
        z,
    );
    if q_gas > 0.0 && gas_settling.velocity_ft_per_s <= 0.0 {
        return Err(SizingError::InvalidInput(
            "가스와 액체의 밀도차가 0이라 가스 제약을 계산할 수 없습니다.",
        ));
    }
    let gas_capacity_diameter_ft = size_gas_capacity(
        q_gas,
        gas_settling.velocity_ft_per_s,
        input.orientation,
        input.slenderness,
    );

    // 액-액 침강 제약: 연속상 표면유속이 분산 액적 종말속도를 넘지 않아야 한다.
    let water_settling_diameter_ft = settling_constraint_diameter(
        liquid_rate_ft3_per_s(input.water_flow_bpd),
        oil_in_water_settling.velocity_ft_per_s,
        "오일과 물의 밀도차가 0이라 물상 제약을 계산할 수 없습니다.",
    )?;
    let oil_settling_diameter_ft = settling_constraint_diameter(
        liquid_rate_ft3_per_s(input.oil_flow_bpd),
        water_in_oil_settling.velocity_ft_per_s,
        "오일과 물의 밀도차가 0이라 오일상 제약을 계산할 수 없습니다.",
    )?;

    // 액체 체류 제약
    let (retention_diameter_ft, retention_length_ft) = size_liquid_retention(
        input.oil_flow_bpd,
        input.water_flow_bpd,
        input.retention_time_min,
        input.slenderness,
    );

    // 지배 제약 선정 + 제작 증분 올림
    let governing = gas_capacity_diameter_ft
        .max(oil_settling_diameter_ft)
        .max(water_settling_diameter_ft)
        .max(retention_diameter_ft);
    if governing <= 0.0 {
        // 모든 상의 유량이 0인 퇴화 케이스: 치수 0인 설명 가능한 결과를 반환한다.
        warnings.push("모든 유량이 0이라 용기 치수가 0으로 계산되었습니다.".to_string());
        return Ok(SeparatorResult {
            gas_density_lb_ft3: rho_gas,
            gas_settling,
            oil_in_water_settling,
            water_in_oil_settling,
            gas_capacity_diameter_ft,
            oil_settling_diameter_ft,
            water_settling_diameter_ft,
            retention_diameter_ft,
            retention_length_ft,
            diameter_ft: 0.0,
            length_ft: 0.0,
            warnings,
        });
    }

    let mut diameter_ft = round_up_diameter(governing);
    let holdup_volume_ft3 =
        (input.oil_flow_bpd + input.water_flow_bpd) * FT3_PER_BBL * input.retention_time_min
            / 1440.0;

    // 선정 직경에서 필요한 길이를 다시 계산하고, L/D 상한을 넘으면 직경을
    // 제작 증분만큼 키운다. 길이 요건은 직경에 반비례하므로 유한 회 안에 끝난다.
    let mut bumped = false;
    let length_ft = loop {
        let mut required = required_length_ft(
            holdup_volume_ft3,
            q_gas,
            gas_settling.velocity_ft_per_s,
            diameter_ft,
            input.orientation,
        );
        if required <= 0.0 {
            // 길이를 제약하는 조건이 없으면 목표 세장비를 그대로 쓴다.
            break input.slenderness * diameter_ft;
        }
        if required > SLENDERNESS_MAX * diameter_ft {
            diameter_ft += DIAMETER_INCREMENT_FT;
            bumped = true;
            continue;
        }
        if required < SLENDERNESS_MIN * diameter_ft {
            required = SLENDERNESS_MIN * diameter_ft;
        }
        break required;
    };
    if bumped {
        warnings.push(format!(
            "세장비 상한(L/D≤{SLENDERNESS_MAX})을 만족하도록 직경을 {diameter_ft} ft로 키웠습니다."
        ));
    }

    Ok(SeparatorResult {
        gas_density_lb_ft3: rho_gas,
        gas_settling,
        oil_in_water_settling,
        water_in_oil_settling,
        gas_capacity_diameter_ft,
        oil_settling_diameter_ft,
        water_settling_diameter_ft,
        retention_diameter_ft,
        retention_length_ft,
        diameter_ft,
        length_ft,
        warnings,
    })
}

fn settling_constraint_diameter(
    phase_rate_ft3_per_s: f64,
    terminal_velocity_ft_per_s: f64,
    zero_delta_msg: &'static str,
) -> Result<f64, SizingError> {
    if phase_rate_ft3_per_s <= 0.0 {
        return Ok(0.0);
    }
    if terminal_velocity_ft_per_s <= 0.0 {
        return Err(SizingError::InvalidInput(zero_delta_msg));
    }
    let area = phase_rate_ft3_per_s / terminal_velocity_ft_per_s;
    Ok((4.0 * area / std::f64::consts::PI).sqrt())
}

/// 선정 직경 기준으로 요구되는 seam-to-seam 길이를 계산한다.
///
/// 체류 체적은 액체가 셸 절반을 차지한다고 보고 L = 8V/(π·D²),
/// 수평 가스 제약은 L_eff = 4q/(π·v·D). 두 요건 중 큰 값을 쓴다.
fn required_length_ft(
    holdup_volume_ft3: f64,
    q_gas_ft3_per_s: f64,
    gas_terminal_velocity_ft_per_s: f64,
    diameter_ft: f64,
    orientation: Orientation,
) -> f64 {
    let retention = if holdup_volume_ft3 > 0.0 {
        holdup_volume_ft3
            / (std::f64::consts::PI / 4.0 * diameter_ft * diameter_ft * LIQUID_FILL_FRACTION)
    } else {
        0.0
    };
    let gas = match orientation {
        Orientation::Horizontal if q_gas_ft3_per_s > 0.0 => {
            4.0 * q_gas_ft3_per_s
                / (std::f64::consts::PI * gas_terminal_velocity_ft_per_s * diameter_ft)
        }
        _ => 0.0,
    };
    retention.max(gas)
}

fn push_convergence_warnings(
    warnings: &mut Vec<String>,
    results: &[(&str, &SettlingResult)],
) {
    for (label, res) in results {
        if !res.converged {
            warnings.push(format!(
                "{label} 침강속도 반복이 {}회 내에 수렴하지 않아 근사값을 사용합니다.",
                settling::MAX_ITERATIONS
            ));
        }
    }
}
