use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::reservoir;
use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI(Bar) 기준. 내부 계산 기본값.
    SIBar,
    /// SI (Pa/m 기반)
    SI,
    /// 유전 현장 단위 (psi/ft/°F)
    Field,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub depth: LengthUnit,
    pub density: DensityUnit,
    pub compressibility: CompressibilityUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::SIBar)
    }
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위 세트를 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::SIBar => Self {
                temperature: TemperatureUnit::Celsius,
                pressure: PressureUnit::Bar,
                depth: LengthUnit::Meter,
                density: DensityUnit::KgPerCubicMeter,
                compressibility: CompressibilityUnit::PerBar,
            },
            UnitSystem::SI => Self {
                temperature: TemperatureUnit::Kelvin,
                pressure: PressureUnit::MegaPascal,
                depth: LengthUnit::Meter,
                density: DensityUnit::KgPerCubicMeter,
                compressibility: CompressibilityUnit::PerMegaPascal,
            },
            UnitSystem::Field => Self {
                temperature: TemperatureUnit::Fahrenheit,
                pressure: PressureUnit::Psi,
                depth: LengthUnit::Foot,
                density: DensityUnit::PoundPerCubicFoot,
                compressibility: CompressibilityUnit::Microsip,
            },
        }
    }
}

/// 저류층 기본 파라미터. 상관식 기본 계수의 단일 출처를 설정으로 노출한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservoirDefaults {
    /// 지온구배 [°C/m]
    pub thermal_gradient_c_per_m: f64,
    /// 지표 온도 [°C]
    pub surface_temp_c: f64,
    /// 정수압 구배 [bar/m]
    pub hydrostatic_gradient_bar_per_m: f64,
    /// Pmax 안전계수 (분율)
    pub safety_factor: f64,
    /// Hall(1953) alpha [bar⁻¹]
    pub hall_alpha: f64,
    /// Hall(1953) beta (무차원)
    pub hall_beta: f64,
}

impl Default for ReservoirDefaults {
    fn default() -> Self {
        Self {
            thermal_gradient_c_per_m: reservoir::DEFAULT_THERMAL_GRADIENT_C_PER_M,
            surface_temp_c: reservoir::DEFAULT_SURFACE_TEMP_C,
            hydrostatic_gradient_bar_per_m: reservoir::DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M,
            safety_factor: reservoir::DEFAULT_SAFETY_FACTOR,
            hall_alpha: reservoir::DEFAULT_HALL_ALPHA,
            hall_beta: reservoir::DEFAULT_HALL_BETA,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/ko-kr/en/en-us)
    #[serde(default = "default_language")]
    pub language: String,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    #[serde(default)]
    pub reservoir: ReservoirDefaults,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            unit_system: UnitSystem::SIBar,
            default_units: DefaultUnits::default(),
            reservoir: ReservoirDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
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
