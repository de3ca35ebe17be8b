use std::io::{self, Write};

use crate::app::AppError;
use crate::co2::{self, PressureRegime};
use crate::config::{Config, DefaultUnits, UnitSystem};
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::reservoir::{
    initial_pressure, max_allowable_pressure, rock_compressibility, temperature_at_depth,
    water_compressibility, ShminModel,
};
use crate::units::{
    convert_compressibility, convert_density, convert_pressure, convert_temperature,
    pressure::to_bar, temperature::to_celsius, CompressibilityUnit, DensityUnit, PressureUnit,
    TemperatureUnit, PSI_PER_BAR,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    ReservoirState,
    Compressibility,
    PressureEnvelope,
    Co2Density,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_RESERVOIR_STATE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPRESSIBILITY));
    println!("{}", tr.t(keys::MAIN_MENU_PRESSURE_ENVELOPE));
    println!("{}", tr.t(keys::MAIN_MENU_CO2_DENSITY));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::ReservoirState),
            "3" => return Ok(MenuChoice::Compressibility),
            "4" => return Ok(MenuChoice::PressureEnvelope),
            "5" => return Ok(MenuChoice::Co2Density),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::Pressure),
        3 => Some(QuantityKind::Depth),
        4 => Some(QuantityKind::Density),
        5 => Some(QuantityKind::Compressibility),
        _ => None,
    }
}

/// 저류층 온도/초기압 메뉴를 처리한다.
pub fn handle_reservoir_state(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RESERVOIR_HEADING));
    println!("{}", tr.t(keys::HELP_RESERVOIR_STATE));
    let depth = read_f64(tr, tr.t(keys::PROMPT_DEPTH))?;
    let depletion = read_f64(tr, tr.t(keys::PROMPT_DEPLETION))?;
    let thermal = read_f64_default(
        tr,
        tr.t(keys::PROMPT_THERMAL_GRADIENT),
        cfg.reservoir.thermal_gradient_c_per_m,
    )?;
    let ts = read_f64_default(tr, tr.t(keys::PROMPT_SURFACE_TEMP), cfg.reservoir.surface_temp_c)?;
    let hydro = read_f64_default(
        tr,
        tr.t(keys::PROMPT_HYDRO_GRADIENT),
        cfg.reservoir.hydrostatic_gradient_bar_per_m,
    )?;

    let t_c = temperature_at_depth(depth, thermal, ts);
    let p_bar = initial_pressure(depth, depletion, hydro);
    let t_out = convert_temperature(t_c, TemperatureUnit::Celsius, cfg.default_units.temperature);
    let p_out = convert_pressure(p_bar, PressureUnit::Bar, cfg.default_units.pressure);
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_TEMPERATURE),
        t_out,
        temperature_symbol(cfg.default_units.temperature)
    );
    println!(
        "{} {:.3} {}",
        tr.t(keys::RESULT_INITIAL_PRESSURE),
        p_out,
        pressure_symbol(cfg.default_units.pressure)
    );
    Ok(())
}

/// 압축률 메뉴를 처리한다.
pub fn handle_compressibility(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPRESSIBILITY_HEADING));
    println!("{}", tr.t(keys::HELP_COMPRESSIBILITY));
    println!("{}", tr.t(keys::COMPRESSIBILITY_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let porosity = read_f64(tr, tr.t(keys::PROMPT_POROSITY))?;
            let alpha =
                read_f64_default(tr, tr.t(keys::PROMPT_HALL_ALPHA), cfg.reservoir.hall_alpha)?;
            let beta = read_f64_default(tr, tr.t(keys::PROMPT_HALL_BETA), cfg.reservoir.hall_beta)?;
            let c_bar = rock_compressibility(porosity, alpha, beta)?;
            print_compressibility(tr, keys::RESULT_ROCK_COMPRESSIBILITY, c_bar, cfg);
        }
        "2" => {
            let depth = read_f64(tr, tr.t(keys::PROMPT_DEPTH))?;
            let press = read_f64(tr, tr.t(keys::PROMPT_PORE_PRESSURE))?;
            let thermal = read_f64_default(
                tr,
                tr.t(keys::PROMPT_THERMAL_GRADIENT),
                cfg.reservoir.thermal_gradient_c_per_m,
            )?;
            let ts =
                read_f64_default(tr, tr.t(keys::PROMPT_SURFACE_TEMP), cfg.reservoir.surface_temp_c)?;
            let c_bar = water_compressibility(depth, press, thermal, ts);
            print_compressibility(tr, keys::RESULT_WATER_COMPRESSIBILITY, c_bar, cfg);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn print_compressibility(tr: &Translator, label_key: &str, value_per_bar: f64, cfg: &Config) {
    let out = convert_compressibility(
        value_per_bar,
        CompressibilityUnit::PerBar,
        cfg.default_units.compressibility,
    );
    println!(
        "{} {:.6e} {}",
        tr.t(label_key),
        out,
        compressibility_symbol(cfg.default_units.compressibility)
    );
}

/// 최대 허용 압력 메뉴를 처리한다.
pub fn handle_pressure_envelope(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ENVELOPE_HEADING));
    println!("{}", tr.t(keys::HELP_PRESSURE_ENVELOPE));
    let depth = read_f64(tr, tr.t(keys::PROMPT_DEPTH))?;
    let crest = read_f64(tr, tr.t(keys::PROMPT_CREST))?;
    let sf = read_f64_default(tr, tr.t(keys::PROMPT_SAFETY_FACTOR), cfg.reservoir.safety_factor)?;
    let hydro = read_f64_default(
        tr,
        tr.t(keys::PROMPT_HYDRO_GRADIENT),
        cfg.reservoir.hydrostatic_gradient_bar_per_m,
    )?;
    println!("{}", tr.t(keys::ENVELOPE_SHMIN_OPTIONS));
    let shmin = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => break ShminModel::SnsTrend,
            "2" => {
                let grad = read_f64(tr, tr.t(keys::PROMPT_SHMIN_GRADIENT))?;
                break ShminModel::Gradient(grad);
            }
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let pmax_bar = max_allowable_pressure(depth, crest, sf, hydro, shmin);
    let p_out = convert_pressure(pmax_bar, PressureUnit::Bar, cfg.default_units.pressure);
    println!(
        "{} {:.3} {}",
        tr.t(keys::RESULT_MAX_PRESSURE),
        p_out,
        pressure_symbol(cfg.default_units.pressure)
    );
    Ok(())
}

/// CO2 밀도 메뉴를 처리한다.
pub fn handle_co2_density(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CO2_HEADING));
    println!("{}", tr.t(keys::HELP_CO2_DENSITY));
    let p_value = read_f64(tr, tr.t(keys::PROMPT_CO2_PRESSURE))?;
    let p_unit = read_pressure_unit(tr)?;
    let t_value = read_f64(tr, tr.t(keys::PROMPT_CO2_TEMPERATURE))?;
    let t_unit = read_temperature_unit(tr)?;

    let p_bar = to_bar(p_value, p_unit);
    let t_c = to_celsius(t_value, t_unit);
    let rho = co2::co2_density(p_bar, t_c);

    let p_psi = p_bar * PSI_PER_BAR;
    if p_psi < co2::IDEAL_GAS_LIMIT_PSI {
        println!("{}", tr.t(keys::CO2_NOTE_IDEAL_GAS));
    } else {
        match PressureRegime::from_psi(p_psi) {
            PressureRegime::LowPressure => println!("{}", tr.t(keys::CO2_NOTE_LOW_TABLE)),
            PressureRegime::HighPressure => println!("{}", tr.t(keys::CO2_NOTE_HIGH_TABLE)),
        }
    }
    let rho_out = convert_density(rho, DensityUnit::KgPerCubicMeter, cfg.default_units.density);
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_CO2_DENSITY),
        rho_out,
        density_symbol(cfg.default_units.density)
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => handle_unit_system(tr, cfg)?,
        "2" => handle_language(tr, cfg)?,
        "3" => handle_reservoir_defaults(tr, cfg)?,
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn handle_unit_system(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_UNIT_SYSTEM_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let system = match sel.trim() {
        "1" => UnitSystem::SIBar,
        "2" => UnitSystem::SI,
        "3" => UnitSystem::Field,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.unit_system = system;
    cfg.default_units = DefaultUnits::for_system(system);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn handle_language(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "ko".to_string(),
        "2" => "en-us".to_string(),
        "3" => "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn handle_reservoir_defaults(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_RESERVOIR_HEADING));
    let r = &mut cfg.reservoir;
    r.thermal_gradient_c_per_m = read_f64_default(
        tr,
        tr.t(keys::PROMPT_THERMAL_GRADIENT),
        r.thermal_gradient_c_per_m,
    )?;
    r.surface_temp_c = read_f64_default(tr, tr.t(keys::PROMPT_SURFACE_TEMP), r.surface_temp_c)?;
    r.hydrostatic_gradient_bar_per_m = read_f64_default(
        tr,
        tr.t(keys::PROMPT_HYDRO_GRADIENT),
        r.hydrostatic_gradient_bar_per_m,
    )?;
    r.safety_factor = read_f64_default(tr, tr.t(keys::PROMPT_SAFETY_FACTOR), r.safety_factor)?;
    r.hall_alpha = read_f64_default(tr, tr.t(keys::PROMPT_HALL_ALPHA), r.hall_alpha)?;
    r.hall_beta = read_f64_default(tr, tr.t(keys::PROMPT_HALL_BETA), r.hall_beta)?;
    println!("{}", tr.t(keys::SETTINGS_RESERVOIR_SAVED));
    Ok(())
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

/// 엔터만 입력하면 기본값을 쓰는 숫자 입력.
fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_pressure_unit(tr: &Translator) -> Result<PressureUnit, AppError> {
    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => PressureUnit::Bar,
        "2" => PressureUnit::KiloPascal,
        "3" => PressureUnit::MegaPascal,
        "4" => PressureUnit::Psi,
        "5" => PressureUnit::Atm,
        _ => PressureUnit::Bar,
    };
    Ok(unit)
}

fn read_temperature_unit(tr: &Translator) -> Result<TemperatureUnit, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => TemperatureUnit::Celsius,
        "2" => TemperatureUnit::Kelvin,
        "3" => TemperatureUnit::Fahrenheit,
        "4" => TemperatureUnit::Rankine,
        _ => TemperatureUnit::Celsius,
    };
    Ok(unit)
}

fn temperature_symbol(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Celsius => "°C",
        TemperatureUnit::Kelvin => "K",
        TemperatureUnit::Fahrenheit => "°F",
        TemperatureUnit::Rankine => "R",
    }
}

fn pressure_symbol(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Bar => "bar",
        PressureUnit::Pascal => "Pa",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::MegaPascal => "MPa",
        PressureUnit::Psi => "psi",
        PressureUnit::Atm => "atm",
    }
}

fn density_symbol(unit: DensityUnit) -> &'static str {
    match unit {
        DensityUnit::KgPerCubicMeter => "kg/m3",
        DensityUnit::GramPerCubicCentimeter => "g/cm3",
        DensityUnit::PoundPerCubicFoot => "lb/ft3",
    }
}

fn compressibility_symbol(unit: CompressibilityUnit) -> &'static str {
    match unit {
        CompressibilityUnit::PerBar => "1/bar",
        CompressibilityUnit::PerMegaPascal => "1/MPa",
        CompressibilityUnit::PerPsi => "1/psi",
        CompressibilityUnit::Microsip => "usip",
    }
}
