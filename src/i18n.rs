use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIZING: &str = "main_menu.sizing";
    pub const MAIN_MENU_PRESETS: &str = "main_menu.presets";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const SIZING_HEADING: &str = "sizing.heading";
    pub const PROMPT_ORIENTATION: &str = "sizing.prompt_orientation";
    pub const PROMPT_PRESSURE: &str = "sizing.prompt_pressure";
    pub const PROMPT_PRESSURE_MODE: &str = "sizing.prompt_pressure_mode";
    pub const PROMPT_TEMPERATURE: &str = "sizing.prompt_temperature";
    pub const PROMPT_GAS_SG: &str = "sizing.prompt_gas_sg";
    pub const PROMPT_GAS_FLOW: &str = "sizing.prompt_gas_flow";
    pub const PROMPT_Z_FACTOR: &str = "sizing.prompt_z_factor";
    pub const PROMPT_OIL_SG: &str = "sizing.prompt_oil_sg";
    pub const PROMPT_WATER_SG: &str = "sizing.prompt_water_sg";
    pub const PROMPT_OIL_FLOW: &str = "sizing.prompt_oil_flow";
    pub const PROMPT_WATER_FLOW: &str = "sizing.prompt_water_flow";
    pub const PROMPT_OIL_VISCOSITY: &str = "sizing.prompt_oil_viscosity";
    pub const PROMPT_WATER_VISCOSITY: &str = "sizing.prompt_water_viscosity";
    pub const PROMPT_OIL_DENSITY: &str = "sizing.prompt_oil_density";
    pub const PROMPT_DM_LIQUID: &str = "sizing.prompt_dm_liquid";
    pub const PROMPT_DM_OIL: &str = "sizing.prompt_dm_oil";
    pub const PROMPT_DM_WATER: &str = "sizing.prompt_dm_water";
    pub const PROMPT_RETENTION_TIME: &str = "sizing.prompt_retention_time";
    pub const PROMPT_SLENDERNESS: &str = "sizing.prompt_slenderness";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_GAS_DENSITY: &str = "result.gas_density";
    pub const RESULT_SETTLING_GAS: &str = "result.settling_gas";
    pub const RESULT_SETTLING_OIL_IN_WATER: &str = "result.settling_oil_in_water";
    pub const RESULT_SETTLING_WATER_IN_OIL: &str = "result.settling_water_in_oil";
    pub const RESULT_CONSTRAINT_GAS: &str = "result.constraint_gas";
    pub const RESULT_CONSTRAINT_OIL: &str = "result.constraint_oil";
    pub const RESULT_CONSTRAINT_WATER: &str = "result.constraint_water";
    pub const RESULT_CONSTRAINT_RETENTION: &str = "result.constraint_retention";
    pub const RESULT_SELECTED_DIAMETER: &str = "result.selected_diameter";
    pub const RESULT_SELECTED_LENGTH: &str = "result.selected_length";
    pub const RESULT_WARNING_PREFIX: &str = "result.warning_prefix";

    pub const PRESETS_HEADING: &str = "presets.heading";
    pub const PRESETS_PROMPT_SELECT: &str = "presets.prompt_select";
    pub const PRESETS_UNKNOWN: &str = "presets.unknown";
    pub const PRESETS_PROMPT_RETENTION: &str = "presets.prompt_retention";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_RETENTION: &str = "settings.prompt_retention";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
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
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
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

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return v.clone();
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
        .to_string()
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
        MAIN_MENU_TITLE => "\n=== Separator Sizing Toolbox ===",
        MAIN_MENU_SIZING => "1) 3상 분리기 사이징",
        MAIN_MENU_PRESETS => "2) 프리셋 시나리오",
        MAIN_MENU_UNIT_CONVERSION => "3) 단위 변환기",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        SIZING_HEADING => "\n-- 3상 분리기 사이징 --",
        PROMPT_ORIENTATION => "배치 방향 (1=수직, 2=수평): ",
        PROMPT_PRESSURE => "운전 압력 값: ",
        PROMPT_PRESSURE_MODE => "압력 기준 (1=절대, 2=게이지): ",
        PROMPT_TEMPERATURE => "운전 온도 값: ",
        PROMPT_GAS_SG => "가스 비중 (공기=1): ",
        PROMPT_GAS_FLOW => "가스 유량: ",
        PROMPT_Z_FACTOR => "압축인자 z (모르면 0 입력 시 1.0 사용): ",
        PROMPT_OIL_SG => "오일 비중 (물=1): ",
        PROMPT_WATER_SG => "물 비중 (물=1): ",
        PROMPT_OIL_FLOW => "오일 유량: ",
        PROMPT_WATER_FLOW => "물 유량: ",
        PROMPT_OIL_VISCOSITY => "오일 점도: ",
        PROMPT_WATER_VISCOSITY => "물 점도: ",
        PROMPT_OIL_DENSITY => "오일 밀도: ",
        PROMPT_DM_LIQUID => "가스 중 액적 제거 크기 [µm]: ",
        PROMPT_DM_OIL => "물 중 오일 액적 제거 크기 [µm]: ",
        PROMPT_DM_WATER => "오일 중 물 액적 제거 크기 [µm]: ",
        PROMPT_RETENTION_TIME => "액체 체류시간 [min] (0 입력 시 설정값 사용): ",
        PROMPT_SLENDERNESS => "목표 세장비 L/D (0 입력 시 설정값 사용): ",
        RESULT_HEADING => "\n-- 사이징 결과 --",
        RESULT_GAS_DENSITY => "가스 밀도:",
        RESULT_SETTLING_GAS => "가스 중 액적 종말속도:",
        RESULT_SETTLING_OIL_IN_WATER => "물 중 오일 액적 부상속도:",
        RESULT_SETTLING_WATER_IN_OIL => "오일 중 물 액적 침강속도:",
        RESULT_CONSTRAINT_GAS => "가스 처리용량 제약 직경:",
        RESULT_CONSTRAINT_OIL => "오일상 침강 제약 직경:",
        RESULT_CONSTRAINT_WATER => "물상 침강 제약 직경:",
        RESULT_CONSTRAINT_RETENTION => "액체 체류 제약:",
        RESULT_SELECTED_DIAMETER => "선정 직경:",
        RESULT_SELECTED_LENGTH => "선정 seam-to-seam 길이:",
        RESULT_WARNING_PREFIX => "주의:",
        PRESETS_HEADING => "\n-- 프리셋 시나리오 --",
        PRESETS_PROMPT_SELECT => "프리셋 코드 입력: ",
        PRESETS_UNKNOWN => "해당 프리셋을 찾을 수 없습니다.",
        PRESETS_PROMPT_RETENTION => "체류시간 [min] (0 입력 시 프리셋 값 유지): ",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => {
            "1) 온도  2) 압력  3) 길이  4) 속도  5) 점도  6) 밀도  7) 가스유량  8) 액체유량"
        }
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: psi, R, ft, cp): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: bar, K, m, Pa.s): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Field  2) SI  3) Metric",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en, 취소하려면 엔터): ",
        SETTINGS_PROMPT_RETENTION => "기본 체류시간 [min] (취소하려면 엔터): ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Separator Sizing Toolbox ===",
        MAIN_MENU_SIZING => "1) Three-phase separator sizing",
        MAIN_MENU_PRESETS => "2) Preset scenarios",
        MAIN_MENU_UNIT_CONVERSION => "3) Unit converter",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        SIZING_HEADING => "\n-- Three-Phase Separator Sizing --",
        PROMPT_ORIENTATION => "Orientation (1=vertical, 2=horizontal): ",
        PROMPT_PRESSURE => "Operating pressure value: ",
        PROMPT_PRESSURE_MODE => "Pressure basis (1=absolute, 2=gauge): ",
        PROMPT_TEMPERATURE => "Operating temperature value: ",
        PROMPT_GAS_SG => "Gas specific gravity (air=1): ",
        PROMPT_GAS_FLOW => "Gas flow rate: ",
        PROMPT_Z_FACTOR => "Compressibility z (0 = use 1.0): ",
        PROMPT_OIL_SG => "Oil specific gravity (water=1): ",
        PROMPT_WATER_SG => "Water specific gravity (water=1): ",
        PROMPT_OIL_FLOW => "Oil flow rate: ",
        PROMPT_WATER_FLOW => "Water flow rate: ",
        PROMPT_OIL_VISCOSITY => "Oil viscosity: ",
        PROMPT_WATER_VISCOSITY => "Water viscosity: ",
        PROMPT_OIL_DENSITY => "Oil density: ",
        PROMPT_DM_LIQUID => "Droplet removal size, liquid in gas [µm]: ",
        PROMPT_DM_OIL => "Droplet removal size, oil in water [µm]: ",
        PROMPT_DM_WATER => "Droplet removal size, water in oil [µm]: ",
        PROMPT_RETENTION_TIME => "Liquid retention time [min] (0 = config default): ",
        PROMPT_SLENDERNESS => "Target slenderness L/D (0 = config default): ",
        RESULT_HEADING => "\n-- Sizing Result --",
        RESULT_GAS_DENSITY => "Gas density:",
        RESULT_SETTLING_GAS => "Terminal velocity, liquid in gas:",
        RESULT_SETTLING_OIL_IN_WATER => "Rise velocity, oil in water:",
        RESULT_SETTLING_WATER_IN_OIL => "Settling velocity, water in oil:",
        RESULT_CONSTRAINT_GAS => "Gas capacity constraint diameter:",
        RESULT_CONSTRAINT_OIL => "Oil-phase settling constraint diameter:",
        RESULT_CONSTRAINT_WATER => "Water-phase settling constraint diameter:",
        RESULT_CONSTRAINT_RETENTION => "Liquid retention constraint:",
        RESULT_SELECTED_DIAMETER => "Selected diameter:",
        RESULT_SELECTED_LENGTH => "Selected seam-to-seam length:",
        RESULT_WARNING_PREFIX => "Warning:",
        PRESETS_HEADING => "\n-- Preset Scenarios --",
        PRESETS_PROMPT_SELECT => "Enter preset code: ",
        PRESETS_UNKNOWN => "No such preset.",
        PRESETS_PROMPT_RETENTION => "Retention time [min] (0 = keep preset value): ",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Temperature  2) Pressure  3) Length  4) Velocity  5) Viscosity  6) Density  7) Gas flow  8) Liquid flow"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: psi, R, ft, cp): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: bar, K, m, Pa.s): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Field  2) SI  3) Metric",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, enter to cancel): ",
        SETTINGS_PROMPT_RETENTION => "Default retention time [min] (enter to cancel): ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}
