use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_RESERVOIR_STATE: &str = "main_menu.reservoir_state";
    pub const MAIN_MENU_COMPRESSIBILITY: &str = "main_menu.compressibility";
    pub const MAIN_MENU_PRESSURE_ENVELOPE: &str = "main_menu.pressure_envelope";
    pub const MAIN_MENU_CO2_DENSITY: &str = "main_menu.co2_density";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";
    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const RESERVOIR_HEADING: &str = "reservoir.heading";
    pub const PROMPT_DEPTH: &str = "prompt.depth";
    pub const PROMPT_DEPLETION: &str = "prompt.depletion";
    pub const PROMPT_THERMAL_GRADIENT: &str = "prompt.thermal_gradient";
    pub const PROMPT_SURFACE_TEMP: &str = "prompt.surface_temp";
    pub const PROMPT_HYDRO_GRADIENT: &str = "prompt.hydro_gradient";
    pub const RESULT_TEMPERATURE: &str = "result.temperature";
    pub const RESULT_INITIAL_PRESSURE: &str = "result.initial_pressure";

    pub const COMPRESSIBILITY_HEADING: &str = "compressibility.heading";
    pub const COMPRESSIBILITY_OPTIONS: &str = "compressibility.options";
    pub const PROMPT_POROSITY: &str = "prompt.porosity";
    pub const PROMPT_HALL_ALPHA: &str = "prompt.hall_alpha";
    pub const PROMPT_HALL_BETA: &str = "prompt.hall_beta";
    pub const PROMPT_PORE_PRESSURE: &str = "prompt.pore_pressure";
    pub const RESULT_ROCK_COMPRESSIBILITY: &str = "result.rock_compressibility";
    pub const RESULT_WATER_COMPRESSIBILITY: &str = "result.water_compressibility";

    pub const ENVELOPE_HEADING: &str = "envelope.heading";
    pub const ENVELOPE_SHMIN_OPTIONS: &str = "envelope.shmin_options";
    pub const PROMPT_CREST: &str = "prompt.crest";
    pub const PROMPT_SAFETY_FACTOR: &str = "prompt.safety_factor";
    pub const PROMPT_SHMIN_GRADIENT: &str = "prompt.shmin_gradient";
    pub const RESULT_MAX_PRESSURE: &str = "result.max_pressure";

    pub const CO2_HEADING: &str = "co2.heading";
    pub const PROMPT_CO2_PRESSURE: &str = "prompt.co2_pressure";
    pub const PROMPT_CO2_TEMPERATURE: &str = "prompt.co2_temperature";
    pub const RESULT_CO2_DENSITY: &str = "result.co2_density";
    pub const CO2_NOTE_IDEAL_GAS: &str = "co2.note_ideal_gas";
    pub const CO2_NOTE_LOW_TABLE: &str = "co2.note_low_table";
    pub const CO2_NOTE_HIGH_TABLE: &str = "co2.note_high_table";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_UNIT_SYSTEM_OPTIONS: &str = "settings.unit_system_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_RESERVOIR_HEADING: &str = "settings.reservoir_heading";
    pub const SETTINGS_RESERVOIR_SAVED: &str = "settings.reservoir_saved";

    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_RESERVOIR_STATE: &str = "help.reservoir_state";
    pub const HELP_COMPRESSIBILITY: &str = "help.compressibility";
    pub const HELP_PRESSURE_ENVELOPE: &str = "help.pressure_envelope";
    pub const HELP_CO2_DENSITY: &str = "help.co2_density";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== CO2 Storage Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_RESERVOIR_STATE => "2) 저류층 온도/초기압",
        MAIN_MENU_COMPRESSIBILITY => "3) 압축률 (암석/물)",
        MAIN_MENU_PRESSURE_ENVELOPE => "4) 최대 허용 압력",
        MAIN_MENU_CO2_DENSITY => "5) CO2 밀도 (Ouyang 2011)",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_SELECT => "선택: ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=bar 2=kPa 3=MPa 4=psi 5=atm",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F 4=R",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 압력  3) 심도  4) 밀도  5) 압축률",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, bar, m, kg/m3, 1/bar): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, psi, ft, lb/ft3, usip): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        RESERVOIR_HEADING => "\n-- 저류층 온도/초기압 --",
        PROMPT_DEPTH => "심도 z [m]: ",
        PROMPT_DEPLETION => "고갈량 depl [bar] (없으면 0): ",
        PROMPT_THERMAL_GRADIENT => "지온구배 [°C/m]",
        PROMPT_SURFACE_TEMP => "지표 온도 Ts [°C]",
        PROMPT_HYDRO_GRADIENT => "정수압 구배 [bar/m]",
        RESULT_TEMPERATURE => "지층 온도:",
        RESULT_INITIAL_PRESSURE => "초기 공극압:",
        COMPRESSIBILITY_HEADING => "\n-- 압축률 --",
        COMPRESSIBILITY_OPTIONS => "1) 암석 압축률 (Hall 1953)  2) 물 압축률 (Brill & Beggs 1978)",
        PROMPT_POROSITY => "공극률 (분율, 예 0.2): ",
        PROMPT_HALL_ALPHA => "alpha [bar⁻¹]",
        PROMPT_HALL_BETA => "beta (무차원)",
        PROMPT_PORE_PRESSURE => "공극압 [bar]: ",
        RESULT_ROCK_COMPRESSIBILITY => "암석 압축률:",
        RESULT_WATER_COMPRESSIBILITY => "물 압축률:",
        ENVELOPE_HEADING => "\n-- 최대 허용 압력 --",
        ENVELOPE_SHMIN_OPTIONS => "Shmin: 1) SNS 심도 경험식  2) 응력 구배 직접 입력",
        PROMPT_CREST => "크레스트 심도 crest [m]: ",
        PROMPT_SAFETY_FACTOR => "안전계수 SF (분율)",
        PROMPT_SHMIN_GRADIENT => "Shmin 구배 [bar/m]: ",
        RESULT_MAX_PRESSURE => "최대 허용 압력:",
        CO2_HEADING => "\n-- CO2 밀도 (Ouyang 2011) --",
        PROMPT_CO2_PRESSURE => "압력 값: ",
        PROMPT_CO2_TEMPERATURE => "온도 값: ",
        RESULT_CO2_DENSITY => "CO2 밀도:",
        CO2_NOTE_IDEAL_GAS => "환산 압력 1070 psi 미만: 이상기체 근사 구간입니다.",
        CO2_NOTE_LOW_TABLE => "저압 계수표(< 3000 psi) 구간입니다.",
        CO2_NOTE_HIGH_TABLE => "고압 계수표(>= 3000 psi) 구간입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_OPTIONS => "1) 단위 시스템  2) 언어  3) 저류층 기본값",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_UNIT_SYSTEM_OPTIONS => "1) SI(Bar)  2) SI  3) Field",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어(ko)  2) English(en-us)  3) auto",
        SETTINGS_RESERVOIR_HEADING => "저류층 기본값 (엔터 시 현재 값 유지)",
        SETTINGS_RESERVOIR_SAVED => "저류층 기본값이 저장되었습니다.",
        HELP_UNIT_CONVERSION => "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: bar/psi/MPa, C/K/F, m/ft, kg/m3, 1/bar/usip).",
        HELP_RESERVOIR_STATE => "도움말: 심도와 고갈량을 입력하면 지온구배/정수압 구배로 지층 온도와 초기 공극압을 계산합니다.",
        HELP_COMPRESSIBILITY => "도움말: 암석은 Hall(1953) 멱법칙, 물은 Brill & Beggs(1978) 경험식입니다. 물 압축률은 심도와 공극압을 사용합니다.",
        HELP_PRESSURE_ENVELOPE => "도움말: Shmin을 직접 입력하거나 SNS 심도 경험식으로 추정해 크레스트 안전계수와 정수압 수두를 반영합니다.",
        HELP_CO2_DENSITY => "도움말: 압력/온도 단위를 선택해 입력하면 환산 압력 구간에 따라 계수표 또는 이상기체 근사로 밀도를 계산합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== CO2 Storage Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_RESERVOIR_STATE => "2) Reservoir Temperature / Initial Pressure",
        MAIN_MENU_COMPRESSIBILITY => "3) Compressibility (rock/water)",
        MAIN_MENU_PRESSURE_ENVELOPE => "4) Maximum Allowable Pressure",
        MAIN_MENU_CO2_DENSITY => "5) CO2 Density (Ouyang 2011)",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_SELECT => "Select: ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=bar 2=kPa 3=MPa 4=psi 5=atm",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=K 3=°F 4=R",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Temperature  2) Pressure  3) Depth  4) Density  5) Compressibility",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, bar, m, kg/m3, 1/bar): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, psi, ft, lb/ft3, usip): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        RESERVOIR_HEADING => "\n-- Reservoir Temperature / Initial Pressure --",
        PROMPT_DEPTH => "Depth z [m]: ",
        PROMPT_DEPLETION => "Depletion depl [bar] (0 if none): ",
        PROMPT_THERMAL_GRADIENT => "Thermal gradient [°C/m]",
        PROMPT_SURFACE_TEMP => "Surface temperature Ts [°C]",
        PROMPT_HYDRO_GRADIENT => "Hydrostatic gradient [bar/m]",
        RESULT_TEMPERATURE => "Formation temperature:",
        RESULT_INITIAL_PRESSURE => "Initial pore pressure:",
        COMPRESSIBILITY_HEADING => "\n-- Compressibility --",
        COMPRESSIBILITY_OPTIONS => "1) Rock (Hall 1953)  2) Water (Brill & Beggs 1978)",
        PROMPT_POROSITY => "Porosity (fraction, e.g. 0.2): ",
        PROMPT_HALL_ALPHA => "alpha [bar⁻¹]",
        PROMPT_HALL_BETA => "beta (dimensionless)",
        PROMPT_PORE_PRESSURE => "Pore pressure [bar]: ",
        RESULT_ROCK_COMPRESSIBILITY => "Rock compressibility:",
        RESULT_WATER_COMPRESSIBILITY => "Water compressibility:",
        ENVELOPE_HEADING => "\n-- Maximum Allowable Pressure --",
        ENVELOPE_SHMIN_OPTIONS => "Shmin: 1) SNS depth trend  2) enter stress gradient",
        PROMPT_CREST => "Crest depth [m]: ",
        PROMPT_SAFETY_FACTOR => "Safety factor SF (fraction)",
        PROMPT_SHMIN_GRADIENT => "Shmin gradient [bar/m]: ",
        RESULT_MAX_PRESSURE => "Maximum allowable pressure:",
        CO2_HEADING => "\n-- CO2 Density (Ouyang 2011) --",
        PROMPT_CO2_PRESSURE => "Pressure value: ",
        PROMPT_CO2_TEMPERATURE => "Temperature value: ",
        RESULT_CO2_DENSITY => "CO2 density:",
        CO2_NOTE_IDEAL_GAS => "Converted pressure below 1070 psi: ideal-gas branch.",
        CO2_NOTE_LOW_TABLE => "Low-pressure coefficient table (< 3000 psi).",
        CO2_NOTE_HIGH_TABLE => "High-pressure coefficient table (>= 3000 psi).",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_OPTIONS => "1) Unit system  2) Language  3) Reservoir defaults",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_UNIT_SYSTEM_OPTIONS => "1) SI(Bar)  2) SI  3) Field",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Unit system changed to:",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Korean(ko)  2) English(en-us)  3) auto",
        SETTINGS_RESERVOIR_HEADING => "Reservoir defaults (enter to keep current value)",
        SETTINGS_RESERVOIR_SAVED => "Reservoir defaults saved.",
        HELP_UNIT_CONVERSION => "Help: choose quantity → enter value → from/to units (bar/psi/MPa, C/K/F, m/ft, kg/m3, 1/bar/usip).",
        HELP_RESERVOIR_STATE => "Help: depth and depletion give formation temperature and initial pore pressure via the linear gradients.",
        HELP_COMPRESSIBILITY => "Help: rock uses the Hall (1953) power law, water the Brill & Beggs (1978) fit (depth + pore pressure).",
        HELP_PRESSURE_ENVELOPE => "Help: supply an Shmin gradient or use the SNS depth trend; crest safety factor and hydrostatic head are applied.",
        HELP_CO2_DENSITY => "Help: enter pressure/temperature with units; the converted pressure picks a coefficient table or the ideal-gas branch.",
        _ => return None,
    })
}
