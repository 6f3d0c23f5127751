use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(&'static str),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 게이지/절대 모드를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureMode {
    Gauge,
    Absolute,
}

const ATM_PSI: f64 = 14.695_95;

/// 압력 변환 (모드 포함). 내부 기준은 psia로 처리한 뒤 요청 모드로 반환한다.
/// 분리기 계산은 항상 절대압을 사용하므로 게이지 입력은 대기압을 더해 환산한다.
pub fn convert_pressure_mode(
    value: f64,
    from_unit: PressureUnit,
    from_mode: PressureMode,
    to_unit: PressureUnit,
    to_mode: PressureMode,
) -> f64 {
    let psi = pressure::to_psi(value, from_unit);
    let psia = match from_mode {
        PressureMode::Gauge => psi + ATM_PSI,
        PressureMode::Absolute => psi,
    };
    let psi_target = match to_mode {
        PressureMode::Absolute => psia,
        PressureMode::Gauge => psia - ATM_PSI,
    };
    pressure::from_psi(psi_target, to_unit)
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `psi`, `bar`, `R`, `ft`, `cp`, `MMscfd`, `bpd` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::GasFlow => {
            let from = parse_gas_flow_unit(from_unit_str)?;
            let to = parse_gas_flow_unit(to_unit_str)?;
            Ok(convert_gas_flow(value, from, to))
        }
        QuantityKind::LiquidFlow => {
            let from = parse_liquid_flow_unit(from_unit_str)?;
            let to = parse_liquid_flow_unit(to_unit_str)?;
            Ok(convert_liquid_flow(value, from, to))
        }
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "r" | "rankine" | "°r" => Ok(TemperatureUnit::Rankine),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "psi" | "psia" | "psig" => Ok(PressureUnit::Psi),
        "bar" => Ok(PressureUnit::Bar),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
        "atm" => Ok(PressureUnit::Atm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "ft/min" | "fpm" => Ok(VelocityUnit::FootPerMinute),
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "cp" | "cps" | "centipoise" => Ok(ViscosityUnit::Centipoise),
        "mpa·s" | "mpa.s" | "mpas" => Ok(ViscosityUnit::MilliPascalSecond),
        "pa·s" | "pa.s" | "pas" => Ok(ViscosityUnit::PascalSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "lb/ft3" | "lb/ft^3" | "lbm/ft3" => Ok(DensityUnit::PoundPerCubicFoot),
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KilogramPerCubicMeter),
        "g/cm3" | "g/cm^3" => Ok(DensityUnit::GramPerCubicCentimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_gas_flow_unit(s: &str) -> Result<GasFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "mmscfd" => Ok(GasFlowUnit::MMscfd),
        "mscfd" => Ok(GasFlowUnit::Mscfd),
        "sm3/d" | "sm3/day" => Ok(GasFlowUnit::StdCubicMeterPerDay),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_liquid_flow_unit(s: &str) -> Result<LiquidFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "bpd" | "bopd" | "bwpd" | "bbl/d" => Ok(LiquidFlowUnit::BarrelPerDay),
        "m3/d" | "m3/day" => Ok(LiquidFlowUnit::CubicMeterPerDay),
        "m3/h" => Ok(LiquidFlowUnit::CubicMeterPerHour),
        "gpm" | "gal/min" => Ok(LiquidFlowUnit::GallonPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
