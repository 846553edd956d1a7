use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EDIT_VALUE: &str = "main_menu.edit_value";
    pub const MAIN_MENU_CHANGE_UNIT: &str = "main_menu.change_unit";
    pub const MAIN_MENU_SHOW_RESULT: &str = "main_menu.show_result";
    pub const MAIN_MENU_CONVERT_MASS: &str = "main_menu.convert_mass";
    pub const MAIN_MENU_RESET: &str = "main_menu.reset";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_SLOT: &str = "prompt.slot";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_UNIT: &str = "prompt.unit";
    pub const PROMPT_COPY: &str = "prompt.copy";

    pub const ERROR_INVALID_SLOT: &str = "error.invalid_slot";
    pub const ERROR_UNKNOWN_UNIT: &str = "error.unknown_unit";

    pub const STATE_HEADING: &str = "state.heading";
    pub const STATE_FORMULA: &str = "state.formula";
    pub const STATE_DERIVED_NOTE: &str = "state.derived_note";
    pub const RESULT_EMPTY: &str = "result.empty";
    pub const RESULT_FULL: &str = "result.full";
    pub const RESULT_COPIED: &str = "result.copied";

    pub const CONVERT_MASS_UNAVAILABLE: &str = "convert_mass.unavailable";
    pub const RESET_DONE: &str = "reset.done";

    pub const HELP_MAIN: &str = "help.main";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩에 있으면 그것을, 없으면 내장 문자열을 쓴다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
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
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 언어팩을 로드한다. `[section] key = "value"`는 `section.key`로 펼친다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        log::warn!("ignoring empty or malformed language pack {lang}.toml");
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn flatten(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    flatten(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &table {
        flatten(k, v, &mut map);
    }

    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 비례식 계산기 ===",
        MAIN_MENU_EDIT_VALUE => "1) 값 입력",
        MAIN_MENU_CHANGE_UNIT => "2) 단위 변경",
        MAIN_MENU_SHOW_RESULT => "3) 결과 전체 보기/복사",
        MAIN_MENU_CONVERT_MASS => "4) 1번 칸 g → 2번 칸 oz 환산",
        MAIN_MENU_RESET => "5) 초기화",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_SLOT => "칸 번호(1-4): ",
        PROMPT_VALUE => "값: ",
        PROMPT_UNIT => "단위(g/oz/lbs/ml/floz/kcal): ",
        PROMPT_COPY => "클립보드로 복사할까요? (y/N): ",
        ERROR_INVALID_SLOT => "칸 번호는 1~4 사이여야 합니다.",
        ERROR_UNKNOWN_UNIT => "알 수 없는 단위입니다.",
        STATE_HEADING => "\n-- 현재 비례식 --",
        STATE_FORMULA => "4번 = 2번 × 3번 ÷ 1번",
        STATE_DERIVED_NOTE => "4번 칸은 항상 다시 계산되어 덮어씌워집니다.",
        RESULT_EMPTY => "(결과 없음)",
        RESULT_FULL => "전체 결과:",
        RESULT_COPIED => "복사했습니다:",
        CONVERT_MASS_UNAVAILABLE => "1번 칸이 g, 2번 칸이 oz일 때만 사용할 수 있습니다.",
        RESET_DONE => "초기화했습니다.",
        HELP_MAIN => "도움말: 1~3번 칸에 값을 넣으면 4번 칸이 자동 계산됩니다 (1번 oz + 3번 lbs면 3번을 16배).",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Proportion Calculator ===",
        MAIN_MENU_EDIT_VALUE => "1) Edit value",
        MAIN_MENU_CHANGE_UNIT => "2) Change unit",
        MAIN_MENU_SHOW_RESULT => "3) Show / copy full result",
        MAIN_MENU_CONVERT_MASS => "4) Fill slot 2 with slot 1 grams in ounces",
        MAIN_MENU_RESET => "5) Reset",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_SLOT => "Slot number (1-4): ",
        PROMPT_VALUE => "Value: ",
        PROMPT_UNIT => "Unit (g/oz/lbs/ml/floz/kcal): ",
        PROMPT_COPY => "Copy to clipboard? (y/N): ",
        ERROR_INVALID_SLOT => "Slot number must be between 1 and 4.",
        ERROR_UNKNOWN_UNIT => "Unknown unit.",
        STATE_HEADING => "\n-- Current proportion --",
        STATE_FORMULA => "slot4 = slot2 × slot3 ÷ slot1",
        STATE_DERIVED_NOTE => "Slot 4 is always recomputed and overwritten.",
        RESULT_EMPTY => "(no result)",
        RESULT_FULL => "Full result:",
        RESULT_COPIED => "Copied:",
        CONVERT_MASS_UNAVAILABLE => "Only available when slot 1 is g and slot 2 is oz.",
        RESET_DONE => "Reset done.",
        HELP_MAIN => "Help: fill slots 1-3 and slot 4 is computed (slot 1 oz with slot 3 lbs scales slot 3 by 16).",
        _ => "[missing translation]",
    }
}
