use serde::{Deserialize, Serialize};

/// bar → psi 환산 인자. 경험 상관식(물 압축률, CO2 밀도)이 이 값을
/// 피팅의 일부로 쓰므로 변환기에서도 동일한 리터럴 하나만 사용한다.
pub const PSI_PER_BAR: f64 = 14.5038;

const ATM_BAR: f64 = 1.01325;
const PA_PER_BAR: f64 = 100_000.0;

/// 게이지/절대압을 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureMode {
    Gauge,
    Absolute,
}

/// 압력 단위. 내부 기준은 bar(절대)이다. 저류층 압력은 절대압으로 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    Pascal,
    KiloPascal,
    MegaPascal,
    Psi,
    Atm,
}

/// 주어진 압력을 bar 로 변환한다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::Psi => value / PSI_PER_BAR,
        PressureUnit::Atm => value * ATM_BAR,
    }
}

/// bar 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::Psi => value_bar * PSI_PER_BAR,
        PressureUnit::Atm => value_bar / ATM_BAR,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let bar = to_bar(value, from);
    from_bar(bar, to)
}

/// 게이지/절대 모드를 포함한 압력 변환. 내부는 bar(절대) 기준으로 처리한다.
pub fn convert_pressure_mode(
    value: f64,
    from_unit: PressureUnit,
    from_mode: PressureMode,
    to_unit: PressureUnit,
    to_mode: PressureMode,
) -> f64 {
    let base = to_bar(value, from_unit);
    let bar_abs = match from_mode {
        PressureMode::Gauge => base + ATM_BAR,
        PressureMode::Absolute => base,
    };
    let bar_target = match to_mode {
        PressureMode::Absolute => bar_abs,
        PressureMode::Gauge => bar_abs - ATM_BAR,
    };
    from_bar(bar_target, to_unit)
}
