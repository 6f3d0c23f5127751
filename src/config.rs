use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 유전 현장 단위(psia, °R, ft, BPD). 내부 계산 기본값.
    Field,
    /// SI (Pa·기반)
    SI,
    /// 미터법 혼합 (bar, °C)
    Metric,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub length: LengthUnit,
    pub velocity: VelocityUnit,
    pub viscosity: ViscosityUnit,
    pub density: DensityUnit,
    pub gas_flow: GasFlowUnit,
    pub liquid_flow: LiquidFlowUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위 세트를 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Field => Self {
                temperature: TemperatureUnit::Rankine,
                pressure: PressureUnit::Psi,
                length: LengthUnit::Foot,
                velocity: VelocityUnit::FootPerSecond,
                viscosity: ViscosityUnit::Centipoise,
                density: DensityUnit::PoundPerCubicFoot,
                gas_flow: GasFlowUnit::MMscfd,
                liquid_flow: LiquidFlowUnit::BarrelPerDay,
            },
            UnitSystem::SI => Self {
                temperature: TemperatureUnit::Kelvin,
                pressure: PressureUnit::KiloPascal,
                length: LengthUnit::Meter,
                velocity: VelocityUnit::MeterPerSecond,
                viscosity: ViscosityUnit::PascalSecond,
                density: DensityUnit::KilogramPerCubicMeter,
                gas_flow: GasFlowUnit::StdCubicMeterPerDay,
                liquid_flow: LiquidFlowUnit::CubicMeterPerDay,
            },
            UnitSystem::Metric => Self {
                temperature: TemperatureUnit::Celsius,
                pressure: PressureUnit::Bar,
                length: LengthUnit::Meter,
                velocity: VelocityUnit::MeterPerSecond,
                viscosity: ViscosityUnit::Centipoise,
                density: DensityUnit::KilogramPerCubicMeter,
                gas_flow: GasFlowUnit::StdCubicMeterPerDay,
                liquid_flow: LiquidFlowUnit::CubicMeterPerHour,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Field)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/en 등). auto면 시스템 로케일을 따른다.
    pub language: String,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    /// 액체 체류시간 기본값 [min]
    pub retention_time_min: f64,
    /// 목표 세장비(L/D) 기본값
    pub slenderness: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            unit_system: UnitSystem::Field,
            default_units: DefaultUnits::default(),
            retention_time_min: 5.0,
            slenderness: 3.0,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
