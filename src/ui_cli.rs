use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, DefaultUnits, UnitSystem};
use crate::conversion::{self, PressureMode};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::separator::presets;
use crate::separator::sizing::{self, Orientation, SeparatorInput, SeparatorResult};
use crate::units::*;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sizing,
    Presets,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIZING));
    println!("{}", tr.t(keys::MAIN_MENU_PRESETS));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Sizing),
            "2" => return Ok(MenuChoice::Presets),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 분리기 사이징 메뉴를 처리한다. 설정된 기본 단위로 입력을 받아
/// 현장 단위(psia/°R/MMscfd/BPD/cp/lb/ft³)로 환산해 엔진에 넘긴다.
pub fn handle_sizing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIZING_HEADING));
    let units = &cfg.default_units;

    let orientation = loop {
        let sel = read_line(&tr.t(keys::PROMPT_ORIENTATION))?;
        match sel.trim() {
            "1" => break Orientation::Vertical,
            "2" => break Orientation::Horizontal,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };

    let p_value = read_f64(
        tr,
        &with_unit(&tr.t(keys::PROMPT_PRESSURE), pressure_label(units.pressure)),
    )?;
    let p_mode = read_pressure_mode(tr)?;
    let pressure_psia = conversion::convert_pressure_mode(
        p_value,
        units.pressure,
        p_mode,
        PressureUnit::Psi,
        PressureMode::Absolute,
    );

    let t_value = read_f64(
        tr,
        &with_unit(
            &tr.t(keys::PROMPT_TEMPERATURE),
            temperature_label(units.temperature),
        ),
    )?;
    let temperature_r =
        convert_temperature(t_value, units.temperature, TemperatureUnit::Rankine);

    let gas_sg = read_f64(tr, &tr.t(keys::PROMPT_GAS_SG))?;
    let gas_flow_value = read_f64(
        tr,
        &with_unit(&tr.t(keys::PROMPT_GAS_FLOW), gas_flow_label(units.gas_flow)),
    )?;
    let gas_flow_mmscfd = convert_gas_flow(gas_flow_value, units.gas_flow, GasFlowUnit::MMscfd);
    let z = read_f64(tr, &tr.t(keys::PROMPT_Z_FACTOR))?;
    let z_factor = if z > 0.0 { Some(z) } else { None };

    let oil_sg = read_f64(tr, &tr.t(keys::PROMPT_OIL_SG))?;
    let water_sg = read_f64(tr, &tr.t(keys::PROMPT_WATER_SG))?;
    let oil_flow_bpd = convert_liquid_flow(
        read_f64(
            tr,
            &with_unit(&tr.t(keys::PROMPT_OIL_FLOW), liquid_flow_label(units.liquid_flow)),
        )?,
        units.liquid_flow,
        LiquidFlowUnit::BarrelPerDay,
    );
    let water_flow_bpd = convert_liquid_flow(
        read_f64(
            tr,
            &with_unit(&tr.t(keys::PROMPT_WATER_FLOW), liquid_flow_label(units.liquid_flow)),
        )?,
        units.liquid_flow,
        LiquidFlowUnit::BarrelPerDay,
    );
    let oil_viscosity_cp = convert_viscosity(
        read_f64(
            tr,
            &with_unit(&tr.t(keys::PROMPT_OIL_VISCOSITY), viscosity_label(units.viscosity)),
        )?,
        units.viscosity,
        ViscosityUnit::Centipoise,
    );
    let water_viscosity_cp = convert_viscosity(
        read_f64(
            tr,
            &with_unit(&tr.t(keys::PROMPT_WATER_VISCOSITY), viscosity_label(units.viscosity)),
        )?,
        units.viscosity,
        ViscosityUnit::Centipoise,
    );
    let oil_density_lb_ft3 = convert_density(
        read_f64(
            tr,
            &with_unit(&tr.t(keys::PROMPT_OIL_DENSITY), density_label(units.density)),
        )?,
        units.density,
        DensityUnit::PoundPerCubicFoot,
    );

    let dm_liquid_um = read_f64(tr, &tr.t(keys::PROMPT_DM_LIQUID))?;
    let dm_oil_um = read_f64(tr, &tr.t(keys::PROMPT_DM_OIL))?;
    let dm_water_um = read_f64(tr, &tr.t(keys::PROMPT_DM_WATER))?;

    let rt = read_f64(tr, &tr.t(keys::PROMPT_RETENTION_TIME))?;
    let retention_time_min = if rt > 0.0 { rt } else { cfg.retention_time_min };
    let sl = read_f64(tr, &tr.t(keys::PROMPT_SLENDERNESS))?;
    let slenderness = if sl > 0.0 { sl } else { cfg.slenderness };

    let input = SeparatorInput {
        orientation,
        pressure_psia,
        temperature_r,
        gas_sg,
        gas_flow_mmscfd,
        z_factor,
        oil_sg,
        water_sg,
        oil_flow_bpd,
        water_flow_bpd,
        oil_viscosity_cp,
        water_viscosity_cp,
        oil_density_lb_ft3,
        dm_liquid_um,
        dm_oil_um,
        dm_water_um,
        retention_time_min,
        slenderness,
    };
    let result = sizing::size(&input)?;
    print_result(tr, cfg, &result);
    Ok(())
}

/// 프리셋 시나리오 메뉴를 처리한다.
pub fn handle_presets(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRESETS_HEADING));
    for p in presets::presets() {
        println!("{:<12} {} - {}", p.code, p.name, p.notes);
    }
    let code = read_line(&tr.t(keys::PRESETS_PROMPT_SELECT))?;
    let Some(preset) = presets::find_preset(code.trim()) else {
        println!("{}", tr.t(keys::PRESETS_UNKNOWN));
        return Ok(());
    };
    let rt = read_f64(tr, &tr.t(keys::PRESETS_PROMPT_RETENTION))?;
    let mut input = preset.input.clone();
    if rt > 0.0 {
        input.retention_time_min = rt;
    }
    let result = sizing::size(&input)?;
    print_result(tr, cfg, &result);
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::Pressure),
        3 => Some(QuantityKind::Length),
        4 => Some(QuantityKind::Velocity),
        5 => Some(QuantityKind::Viscosity),
        6 => Some(QuantityKind::Density),
        7 => Some(QuantityKind::GasFlow),
        8 => Some(QuantityKind::LiquidFlow),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        let system = match sel.trim() {
            "1" => Some(UnitSystem::Field),
            "2" => Some(UnitSystem::SI),
            "3" => Some(UnitSystem::Metric),
            _ => {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                None
            }
        };
        if let Some(system) = system {
            cfg.unit_system = system;
            cfg.default_units = DefaultUnits::for_system(system);
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    if !lang.trim().is_empty() {
        cfg.language = lang.trim().to_lowercase();
    }
    let rt = read_line(&tr.t(keys::SETTINGS_PROMPT_RETENTION))?;
    if let Ok(v) = rt.trim().parse::<f64>() {
        if v > 0.0 {
            cfg.retention_time_min = v;
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 사이징 결과를 설정된 기본 단위로 출력한다.
pub fn print_result(tr: &Translator, cfg: &Config, result: &SeparatorResult) {
    let units = &cfg.default_units;
    let len = |v_ft: f64| convert_length(v_ft, LengthUnit::Foot, units.length);
    let vel = |v_fps: f64| {
        convert_velocity(v_fps, VelocityUnit::FootPerSecond, units.velocity)
    };
    let len_label = length_label(units.length);
    let vel_label = velocity_label(units.velocity);

    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} {:.4} {}",
        tr.t(keys::RESULT_GAS_DENSITY),
        convert_density(
            result.gas_density_lb_ft3,
            DensityUnit::PoundPerCubicFoot,
            units.density
        ),
        density_label(units.density)
    );
    for (key, settling) in [
        (keys::RESULT_SETTLING_GAS, &result.gas_settling),
        (keys::RESULT_SETTLING_OIL_IN_WATER, &result.oil_in_water_settling),
        (keys::RESULT_SETTLING_WATER_IN_OIL, &result.water_in_oil_settling),
    ] {
        println!(
            "{} {:.4} {} (Cd={:.3}, Re={:.3e})",
            tr.t(key),
            vel(settling.velocity_ft_per_s),
            vel_label,
            settling.drag_coefficient,
            settling.reynolds
        );
    }
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_CONSTRAINT_GAS),
        len(result.gas_capacity_diameter_ft),
        len_label
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_CONSTRAINT_OIL),
        len(result.oil_settling_diameter_ft),
        len_label
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_CONSTRAINT_WATER),
        len(result.water_settling_diameter_ft),
        len_label
    );
    println!(
        "{} D={:.2} {}, L={:.2} {}",
        tr.t(keys::RESULT_CONSTRAINT_RETENTION),
        len(result.retention_diameter_ft),
        len_label,
        len(result.retention_length_ft),
        len_label
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_SELECTED_DIAMETER),
        len(result.diameter_ft),
        len_label
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_SELECTED_LENGTH),
        len(result.length_ft),
        len_label
    );
    for w in &result.warnings {
        println!("{} {w}", tr.t(keys::RESULT_WARNING_PREFIX));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_pressure_mode(tr: &Translator) -> Result<PressureMode, AppError> {
    let sel = read_line(&tr.t(keys::PROMPT_PRESSURE_MODE))?;
    let mode = match sel.trim() {
        "2" => PressureMode::Gauge,
        _ => PressureMode::Absolute,
    };
    Ok(mode)
}

/// 프롬프트 끝의 ": "를 떼고 단위 표기를 붙인다. ("가스 유량: " → "가스 유량 [MMscfd]: ")
fn with_unit(prompt: &str, label: &str) -> String {
    let base = prompt.trim_end().trim_end_matches(':');
    format!("{base} [{label}]: ")
}

fn temperature_label(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Rankine => "R",
        TemperatureUnit::Fahrenheit => "F",
        TemperatureUnit::Kelvin => "K",
        TemperatureUnit::Celsius => "C",
    }
}

fn pressure_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Psi => "psi",
        PressureUnit::Bar => "bar",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::MegaPascal => "MPa",
        PressureUnit::KgPerCm2 => "kg/cm2",
        PressureUnit::Atm => "atm",
    }
}

fn length_label(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Foot => "ft",
        LengthUnit::Inch => "in",
        LengthUnit::Meter => "m",
        LengthUnit::Centimeter => "cm",
        LengthUnit::Millimeter => "mm",
    }
}

fn velocity_label(unit: VelocityUnit) -> &'static str {
    match unit {
        VelocityUnit::FootPerSecond => "ft/s",
        VelocityUnit::FootPerMinute => "ft/min",
        VelocityUnit::MeterPerSecond => "m/s",
    }
}

fn viscosity_label(unit: ViscosityUnit) -> &'static str {
    match unit {
        ViscosityUnit::Centipoise => "cp",
        ViscosityUnit::MilliPascalSecond => "mPa.s",
        ViscosityUnit::PascalSecond => "Pa.s",
    }
}

fn density_label(unit: DensityUnit) -> &'static str {
    match unit {
        DensityUnit::PoundPerCubicFoot => "lb/ft3",
        DensityUnit::KilogramPerCubicMeter => "kg/m3",
        DensityUnit::GramPerCubicCentimeter => "g/cm3",
    }
}

fn gas_flow_label(unit: GasFlowUnit) -> &'static str {
    match unit {
        GasFlowUnit::MMscfd => "MMscfd",
        GasFlowUnit::Mscfd => "Mscfd",
        GasFlowUnit::StdCubicMeterPerDay => "Sm3/d",
    }
}

fn liquid_flow_label(unit: LiquidFlowUnit) -> &'static str {
    match unit {
        LiquidFlowUnit::BarrelPerDay => "BPD",
        LiquidFlowUnit::CubicMeterPerDay => "m3/d",
        LiquidFlowUnit::CubicMeterPerHour => "m3/h",
        LiquidFlowUnit::GallonPerMinute => "gpm",
    }
}
