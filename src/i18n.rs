use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PROJECT_INPUTS: &str = "main_menu.project_inputs";
    pub const MAIN_MENU_ADD_RUN: &str = "main_menu.add_run";
    pub const MAIN_MENU_REMOVE_RUN: &str = "main_menu.remove_run";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROJECT_HEADING: &str = "project.heading";
    pub const PROJECT_CURRENT_FLOW: &str = "project.current_flow";
    pub const PROJECT_CURRENT_FLUID: &str = "project.current_fluid";
    pub const PROMPT_FLOW_GPM: &str = "prompt.flow_gpm";
    pub const FLUID_OPTIONS: &str = "fluid.options";
    pub const PROMPT_FLUID_SELECT: &str = "prompt.fluid_select";
    pub const PROMPT_GLYCOL_PERCENT: &str = "prompt.glycol_percent";
    pub const FLUID_NAME_WATER: &str = "fluid.name_water";
    pub const FLUID_NAME_GLYCOL: &str = "fluid.name_glycol";

    pub const ADD_RUN_HEADING: &str = "add_run.heading";
    pub const ADD_RUN_MATERIALS: &str = "add_run.materials";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const ADD_RUN_SIZES: &str = "add_run.sizes";
    pub const PROMPT_NOMINAL_SIZE: &str = "prompt.nominal_size";
    pub const PROMPT_LENGTH_FT: &str = "prompt.length_ft";
    pub const ADD_RUN_FITTINGS: &str = "add_run.fittings";
    pub const PROMPT_FITTING_COUNT_SUFFIX: &str = "prompt.fitting_count_suffix";
    pub const ADD_RUN_SAVED: &str = "add_run.saved";

    pub const REMOVE_RUN_HEADING: &str = "remove_run.heading";
    pub const PROMPT_RUN_NUMBER: &str = "prompt.run_number";
    pub const REMOVE_RUN_DONE: &str = "remove_run.done";
    pub const REMOVE_RUN_NOT_FOUND: &str = "remove_run.not_found";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULTS_NO_RUNS: &str = "results.no_runs";
    pub const RESULTS_TABLE_HEADER: &str = "results.table_header";
    pub const RESULTS_TOTAL_LABEL: &str = "results.total_label";
    pub const RESULTS_NOTES_HEADING: &str = "results.notes_heading";
    pub const RESULTS_NOTE_METHOD: &str = "results.note_method";
    pub const RESULTS_NOTE_UNITS: &str = "results.note_units";
    pub const RESULTS_NOTE_VERIFY: &str = "results.note_verify";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_CURRENT_MATERIAL: &str = "settings.current_material";
    pub const SETTINGS_PROMPT_MATERIAL: &str = "settings.prompt_material";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

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
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
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

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== System Head Calculator ===",
        MAIN_MENU_PROJECT_INPUTS => "1) 유량·유체 입력",
        MAIN_MENU_ADD_RUN => "2) 배관 런 추가",
        MAIN_MENU_REMOVE_RUN => "3) 배관 런 삭제",
        MAIN_MENU_RESULTS => "4) 결과 요약",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROJECT_HEADING => "\n-- 유량·유체 입력 --",
        PROJECT_CURRENT_FLOW => "현재 유량:",
        PROJECT_CURRENT_FLUID => "현재 유체:",
        PROMPT_FLOW_GPM => "유량 [GPM]: ",
        FLUID_OPTIONS => "1) 물  2) 물-글리콜",
        PROMPT_FLUID_SELECT => "유체 선택: ",
        PROMPT_GLYCOL_PERCENT => "글리콜 농도 [%] (0~60): ",
        FLUID_NAME_WATER => "물",
        FLUID_NAME_GLYCOL => "물-글리콜",
        ADD_RUN_HEADING => "\n-- 배관 런 추가 --",
        ADD_RUN_MATERIALS => "재질 목록:",
        PROMPT_MATERIAL => "재질 번호: ",
        ADD_RUN_SIZES => "호칭경 목록 [in]:",
        PROMPT_NOMINAL_SIZE => "호칭경 [in]: ",
        PROMPT_LENGTH_FT => "배관 길이 [ft]: ",
        ADD_RUN_FITTINGS => "피팅 개수 입력 (없으면 엔터):",
        PROMPT_FITTING_COUNT_SUFFIX => " 개수: ",
        ADD_RUN_SAVED => "배관 런이 추가되었습니다:",
        REMOVE_RUN_HEADING => "\n-- 배관 런 삭제 --",
        PROMPT_RUN_NUMBER => "삭제할 런 번호: ",
        REMOVE_RUN_DONE => "삭제했습니다:",
        REMOVE_RUN_NOT_FOUND => "해당 번호의 런이 없습니다.",
        RESULTS_HEADING => "\n-- 결과 요약 --",
        RESULTS_NO_RUNS => "정의된 배관 런이 없습니다. 먼저 런을 추가하세요.",
        RESULTS_TABLE_HEADER => {
            "런    재질          호칭경   길이[ft]   유속[ft/s]   손실수두[ft]   압력강하[psi]   K합계"
        }
        RESULTS_TOTAL_LABEL => "합계",
        RESULTS_NOTES_HEADING => "계산 참고:",
        RESULTS_NOTE_METHOD => "- Hazen-Williams 식과 ASHRAE/Crane TP-410 계열 K값을 사용합니다.",
        RESULTS_NOTE_UNITS => "- 모든 값은 영국 단위계(imperial) 기준입니다.",
        RESULTS_NOTE_VERIFY => "- 예비 견적용이므로 실제 설계·코드 적합성은 별도로 검증하세요.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_LANGUAGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_CURRENT_MATERIAL => "기본 재질:",
        SETTINGS_PROMPT_MATERIAL => "기본 재질 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다. 언어는 다음 실행부터 적용됩니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== System Head Calculator ===",
        MAIN_MENU_PROJECT_INPUTS => "1) Flow & fluid inputs",
        MAIN_MENU_ADD_RUN => "2) Add pipe run",
        MAIN_MENU_REMOVE_RUN => "3) Delete pipe run",
        MAIN_MENU_RESULTS => "4) Summary & results",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROJECT_HEADING => "\n-- Flow & Fluid Inputs --",
        PROJECT_CURRENT_FLOW => "Current flow:",
        PROJECT_CURRENT_FLUID => "Current fluid:",
        PROMPT_FLOW_GPM => "Flow rate [GPM]: ",
        FLUID_OPTIONS => "1) Water  2) Water-Glycol",
        PROMPT_FLUID_SELECT => "Select fluid: ",
        PROMPT_GLYCOL_PERCENT => "Glycol concentration [%] (0-60): ",
        FLUID_NAME_WATER => "Water",
        FLUID_NAME_GLYCOL => "Water-Glycol",
        ADD_RUN_HEADING => "\n-- Add Pipe Run --",
        ADD_RUN_MATERIALS => "Materials:",
        PROMPT_MATERIAL => "Material number: ",
        ADD_RUN_SIZES => "Nominal sizes [in]:",
        PROMPT_NOMINAL_SIZE => "Nominal size [in]: ",
        PROMPT_LENGTH_FT => "Pipe length [ft]: ",
        ADD_RUN_FITTINGS => "Fitting counts (enter to skip):",
        PROMPT_FITTING_COUNT_SUFFIX => " count: ",
        ADD_RUN_SAVED => "Pipe run added:",
        REMOVE_RUN_HEADING => "\n-- Delete Pipe Run --",
        PROMPT_RUN_NUMBER => "Run number to delete: ",
        REMOVE_RUN_DONE => "Deleted:",
        REMOVE_RUN_NOT_FOUND => "No run with that number.",
        RESULTS_HEADING => "\n-- Summary & Results --",
        RESULTS_NO_RUNS => "No pipe runs defined. Add a run first.",
        RESULTS_TABLE_HEADER => {
            "Run   Material      Size   Len[ft]    Vel[ft/s]    HeadLoss[ft]   Drop[psi]   Total K"
        }
        RESULTS_TOTAL_LABEL => "TOTAL",
        RESULTS_NOTES_HEADING => "Calculation notes:",
        RESULTS_NOTE_METHOD => "- Uses Hazen-Williams and K-values from ASHRAE/Crane TP-410.",
        RESULTS_NOTE_UNITS => "- All values are imperial units.",
        RESULTS_NOTE_VERIFY => "- Preliminary estimate; verify results for your project and code compliance.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_LANGUAGE => "Enter number to change (enter to cancel): ",
        SETTINGS_CURRENT_MATERIAL => "Default material:",
        SETTINGS_PROMPT_MATERIAL => "Default material number (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved. Language applies on next start.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}
