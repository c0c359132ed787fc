use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const SUPPORTED_LANGS: [&str; 2] = ["en", "id"];
const FALLBACK_LANG: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedLang {
    English,
    Indonesian,
}

impl SupportedLang {
    pub fn code(self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Indonesian => "id",
        }
    }

    /// Parses "en", "id", "en-US", "id_ID"...; anything else is None.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        let short = code.split(['-', '_']).next().unwrap_or("");
        match short {
            "en" => Some(SupportedLang::English),
            "id" => Some(SupportedLang::Indonesian),
            _ => None,
        }
    }
}

fn load_ftl_source(lang: &str) -> &'static str {
    match lang {
        "id" => include_str!("resources/id.ftl"),
        _ => include_str!("resources/en.ftl"),
    }
}

fn parse_lang(lang_code: &str) -> Result<LanguageIdentifier, LocalizationError> {
    lang_code
        .parse::<LanguageIdentifier>()
        .map_err(|e| LocalizationError::InitError(format!("{lang_code}: {e}")))
}

fn normalize_lang(code: &str) -> String {
    SupportedLang::from_code(code)
        .map(|l| l.code())
        .unwrap_or(FALLBACK_LANG)
        .to_string()
}

fn detect_system_lang() -> String {
    let sys = sys_locale::get_locale().unwrap_or_default();
    normalize_lang(&sys)
}

struct LocalizationManager {
    current: String,
    bundles: HashMap<String, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles: HashMap<String, Bundle> = HashMap::new();
        for &code in SUPPORTED_LANGS.iter() {
            match Self::build_bundle(code) {
                Ok(bundle) => {
                    bundles.insert(code.to_string(), bundle);
                }
                Err(e) => log::error!("Skipping '{}' translations: {}", code, e),
            }
        }
        Self {
            current: FALLBACK_LANG.to_string(),
            bundles,
        }
    }

    fn build_bundle(code: &str) -> Result<Bundle, LocalizationError> {
        let mut bundle: Bundle = FluentBundle::new(vec![parse_lang(code)?]);
        // Keep formatted numbers free of bidi isolation marks.
        bundle.set_use_isolating(false);
        let res = FluentResource::try_new(load_ftl_source(code).to_string())
            .map_err(|(_, errs)| LocalizationError::InitError(format!("{} parse errors", errs.len())))?;
        bundle
            .add_resource(res)
            .map_err(|errs| LocalizationError::InitError(format!("{} duplicate messages", errs.len())))?;
        Ok(bundle)
    }

    fn set_current(&mut self, code: &str) -> Result<(), LocalizationError> {
        let Some(lang) = SupportedLang::from_code(code) else {
            return Err(LocalizationError::UnsupportedLanguage(code.to_string()));
        };
        self.current = lang.code().to_string();
        Ok(())
    }

    fn set_auto(&mut self) {
        self.current = detect_system_lang();
    }

    fn format_with_args(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for code in [self.current.as_str(), FALLBACK_LANG] {
            let Some(b) = self.bundles.get(code) else { continue };
            if let Some(pat) = b.get_message(id).and_then(|m| m.value()) {
                let mut errors = vec![];
                return b.format_pattern(pat, args, &mut errors).to_string();
            }
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Initialization error: {0}")]
    InitError(String),
}

/// Initialize localization. `None` picks the system locale; unsupported
/// locales fall back to English.
pub fn initialize_localization(preferred_lang: Option<SupportedLang>) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        match preferred_lang {
            Some(lang) => mgr.set_current(lang.code()),
            None => {
                mgr.set_auto();
                Ok(())
            }
        }
    })
}

/// Return current language code ("en", "id").
pub fn get_current_language() -> String {
    LOCALIZATION.with(|cell| cell.borrow().current.clone())
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_tagged_codes() {
        assert_eq!(SupportedLang::from_code("id_ID"), Some(SupportedLang::Indonesian));
        assert_eq!(SupportedLang::from_code("EN-us"), Some(SupportedLang::English));
        assert_eq!(SupportedLang::from_code("ru"), None);
        assert_eq!(normalize_lang("fr-FR"), "en");
    }

    #[test]
    fn switches_language_and_falls_back_for_missing_keys() {
        initialize_localization(Some(SupportedLang::Indonesian)).unwrap();
        assert_eq!(get_current_language(), "id");
        assert_eq!(translate("servings"), "Porsi");
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");

        initialize_localization(Some(SupportedLang::English)).unwrap();
        assert_eq!(translate("servings"), "Servings");
    }

    #[test]
    fn formats_arguments() {
        initialize_localization(Some(SupportedLang::English)).unwrap();
        let s = translate_with("tab-empty", &[("tab", "Tools".to_string())]);
        assert_eq!(s, "Nothing in Tools yet");
    }

    #[test]
    fn every_english_key_has_an_indonesian_counterpart() {
        let keys = |src: &str| -> Vec<String> {
            src.lines()
                .filter_map(|l| l.split_once(" = ").map(|(k, _)| k.trim().to_string()))
                .collect()
        };
        let en = keys(load_ftl_source("en"));
        let id = keys(load_ftl_source("id"));
        assert!(!en.is_empty());
        assert_eq!(en, id);
    }
}
