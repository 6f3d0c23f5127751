use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 ft/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    FootPerSecond,
    FootPerMinute,
    MeterPerSecond,
}

fn to_fps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::FootPerSecond => value,
        VelocityUnit::FootPerMinute => value / 60.0,
        VelocityUnit::MeterPerSecond => value * 3.280_84,
    }
}

fn from_fps(value_fps: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::FootPerSecond => value_fps,
        VelocityUnit::FootPerMinute => value_fps * 60.0,
        VelocityUnit::MeterPerSecond => value_fps / 3.280_84,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let fps = to_fps(value, from);
    from_fps(fps, to)
}
