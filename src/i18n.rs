use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::recycling::{BottleKind, Period};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calculate.heading";
    pub const HELP_CALCULATE: &str = "help.calculate";
    pub const FIELD_TWO_LITER: &str = "field.two_liter";
    pub const FIELD_ONE_LITER: &str = "field.one_liter";
    pub const FIELD_MINERAL_WATER: &str = "field.mineral_water";
    pub const FIELD_PERIOD: &str = "field.period";

    pub const PERIOD_DAILY: &str = "period.daily";
    pub const PERIOD_WEEKLY: &str = "period.weekly";
    pub const PERIOD_MONTHLY: &str = "period.monthly";
    pub const PERIOD_ANNUAL: &str = "period.annual";
    pub const PROMPT_PERIOD: &str = "prompt.period";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_ANNUAL_WEIGHT: &str = "result.annual_weight";
    pub const RESULT_ANNUAL_VALUE: &str = "result.annual_value";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_EMPTY_NUMBER: &str = "error.empty_number";
    pub const ERROR_NEGATIVE_COUNT: &str = "error.negative_count";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pt
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt-br",
            Language::En => "en-us",
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
    /// 언어 코드(pt/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 pt로 폴백한다.
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

    /// 언어팩 값이 없으면 주어진 기본 문자열을 쓴다.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 포르투갈어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// 기간 선택지의 번역 키.
pub fn period_key(period: Period) -> &'static str {
    use keys::*;
    match period {
        Period::Daily => PERIOD_DAILY,
        Period::Weekly => PERIOD_WEEKLY,
        Period::Monthly => PERIOD_MONTHLY,
        Period::Annual => PERIOD_ANNUAL,
    }
}

/// 병 종류 입력란의 번역 키.
pub fn bottle_key(kind: BottleKind) -> &'static str {
    use keys::*;
    match kind {
        BottleKind::TwoLiter => FIELD_TWO_LITER,
        BottleKind::OneLiter => FIELD_ONE_LITER,
        BottleKind::MineralWater => FIELD_MINERAL_WATER,
    }
}

/// `{name}` 형태의 자리표시자를 채운다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
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
        "pt" | "pt-br" | "pt_br" => Some("pt-br".into()),
        "en" | "en-us" | "en_us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
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
        "pt" => Some("pt-br".into()),
        "en" => Some("en-us".into()),
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
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
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

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
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
        "pt-br" | "pt" => parse_toml_to_map(include_str!("../locales/pt-br.toml")),
        _ => None,
    }
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando o programa.",
        APP_TITLE => "Equipe: PescaViva | Calculadora de Reciclagem de Tampinhas PET",
        MAIN_MENU_TITLE => "\n=== Calculadora de Reciclagem de Tampinhas PET ===",
        MAIN_MENU_CALCULATE => "1) Calcular potencial anual",
        MAIN_MENU_SETTINGS => "2) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Escolha uma opção: ",
        INVALID_SELECTION_RETRY => "Opção inválida. Tente novamente.",
        CALC_HEADING => "\n-- Potencial anual de reciclagem --",
        HELP_CALCULATE => "Informe quantas garrafas foram consumidas no período (uma tampinha por garrafa).",
        FIELD_TWO_LITER => "Garrafas PET de 2L",
        FIELD_ONE_LITER => "Garrafas PET de 1L",
        FIELD_MINERAL_WATER => "Garrafas de água mineral",
        FIELD_PERIOD => "Período de consumo",
        PERIOD_DAILY => "Diário",
        PERIOD_WEEKLY => "Semanal",
        PERIOD_MONTHLY => "Mensal",
        PERIOD_ANNUAL => "Anual",
        PROMPT_PERIOD => "Período (1=Diário 2=Semanal 3=Mensal 4=Anual, Enter={default}): ",
        RESULT_HEADING => "Resultado estimado",
        RESULT_ANNUAL_WEIGHT => "Peso anual estimado:",
        RESULT_ANNUAL_VALUE => "Valor anual estimado:",
        ERROR_INVALID_NUMBER => "Digite um número inteiro válido para \"{field}\": {text}",
        ERROR_EMPTY_NUMBER => "O campo \"{field}\" está vazio. Digite um número inteiro.",
        ERROR_NEGATIVE_COUNT => "A quantidade de \"{field}\" não pode ser negativa: {value}",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT_LANGUAGE => "Idioma atual:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Automático  2) Português (BR)  3) English (US)",
        SETTINGS_PROMPT_CHANGE => "Número para alterar (Enter para cancelar): ",
        SETTINGS_INVALID => "Entrada inválida; idioma mantido.",
        SETTINGS_SAVED => "Idioma alterado para:",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting the program.",
        APP_TITLE => "Team: PescaViva | PET Bottle Cap Recycling Calculator",
        MAIN_MENU_TITLE => "\n=== PET Bottle Cap Recycling Calculator ===",
        MAIN_MENU_CALCULATE => "1) Estimate annual potential",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        CALC_HEADING => "\n-- Annual recycling potential --",
        HELP_CALCULATE => "Enter how many bottles were consumed in the period (one cap per bottle).",
        FIELD_TWO_LITER => "2L PET bottles",
        FIELD_ONE_LITER => "1L PET bottles",
        FIELD_MINERAL_WATER => "Mineral water bottles",
        FIELD_PERIOD => "Consumption period",
        PERIOD_DAILY => "Daily",
        PERIOD_WEEKLY => "Weekly",
        PERIOD_MONTHLY => "Monthly",
        PERIOD_ANNUAL => "Annual",
        PROMPT_PERIOD => "Period (1=Daily 2=Weekly 3=Monthly 4=Annual, Enter={default}): ",
        RESULT_HEADING => "Estimated result",
        RESULT_ANNUAL_WEIGHT => "Estimated annual weight:",
        RESULT_ANNUAL_VALUE => "Estimated annual value:",
        ERROR_INVALID_NUMBER => "Enter a valid whole number for \"{field}\": {text}",
        ERROR_EMPTY_NUMBER => "\"{field}\" is empty. Enter a whole number.",
        ERROR_NEGATIVE_COUNT => "\"{field}\" cannot be negative: {value}",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Automatic  2) Português (BR)  3) English (US)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
