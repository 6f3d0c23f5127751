//! 단위 정의 및 변환 모듈 모음.

pub mod density;
pub mod gas_flow;
pub mod length;
pub mod liquid_flow;
pub mod pressure;
pub mod temperature;
pub mod velocity;
pub mod viscosity;

pub use density::{convert_density, DensityUnit};
pub use gas_flow::{convert_gas_flow, GasFlowUnit};
pub use length::{convert_length, LengthUnit};
pub use liquid_flow::{convert_liquid_flow, LiquidFlowUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
