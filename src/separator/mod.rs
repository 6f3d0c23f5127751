//! 3상(가스/오일/물) 분리기 사이징 계산 모듈.

pub mod presets;
pub mod settling;
pub mod sizing;

pub use settling::{drag_coefficient, gas_density, terminal_velocity, SettlingResult};
pub use sizing::{size, Orientation, SeparatorInput, SeparatorResult, SizingError};
