use serde_json::Value;
use std::collections::HashMap;
use std::env;

use crate::{Error, Result};

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "ko";

/// Catalogue key of the default placeholder.
pub const PLACEHOLDER_KEY: &str = "text_field.placeholder";

/// Catalogue key of the placeholder naming the expected value.
pub const NAMED_PLACEHOLDER_KEY: &str = "text_field.placeholder_named";

/// Locale used when the environment names one without a catalogue.
pub const FALLBACK_LOCALE: &str = "en";

#[derive(Clone, Debug)]
pub struct I18n {
    locale: String,
    messages: HashMap<String, String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            messages: parse_messages(catalogue(DEFAULT_LOCALE).unwrap_or("{}")).unwrap_or_default(),
        }
    }
}

impl I18n {
    /// Load the catalogue for `locale` (`"ko"`, `"en"`, `"ko_KR"`, ...).
    pub fn new(locale: &str) -> Result<Self> {
        let normalized = normalize(locale);
        let raw = catalogue(&normalized).ok_or_else(|| Error::UnknownLocale(locale.to_string()))?;
        Ok(Self {
            locale: normalized,
            messages: parse_messages(raw)?,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.t(key);
        for (param, replacement) in params {
            value = value.replace(&format!("{{{param}}}"), replacement);
        }
        value
    }

    /// Placeholder shown when the caller supplies none.
    pub fn default_placeholder(&self) -> String {
        self.t(PLACEHOLDER_KEY)
    }

    /// Placeholder prompting for a named value, e.g. "상품명을(를) 입력해 주세요."
    pub fn named_placeholder(&self, name: &str) -> String {
        self.format(NAMED_PLACEHOLDER_KEY, &[("name", name)])
    }
}

/// Locale from the process environment, falling back to `en`.
pub fn detect_locale() -> String {
    detect_locale_from(|key| env::var(key).ok())
}

/// Locale from `LC_ALL` / `LC_MESSAGES` / `LANG` as returned by `lookup`.
///
/// `C` and `POSIX` (with or without a codeset, e.g. `C.UTF-8`) carry no
/// language and are skipped.
pub fn detect_locale_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    let candidates = ["LC_ALL", "LC_MESSAGES", "LANG"];
    for key in candidates {
        if let Some(value) = lookup(key) {
            let normalized = normalize(value.trim());
            if normalized.is_empty() || normalized == "c" || normalized == "posix" {
                continue;
            }
            return normalized;
        }
    }
    FALLBACK_LOCALE.to_string()
}

/// Whether a catalogue exists for `locale`.
pub fn is_supported(locale: &str) -> bool {
    catalogue(&normalize(locale)).is_some()
}

fn normalize(locale: &str) -> String {
    locale
        .split('.')
        .next()
        .unwrap_or(locale)
        .replace('-', "_")
        .to_lowercase()
}

fn catalogue(locale: &str) -> Option<&'static str> {
    if locale.starts_with("ko") {
        Some(include_str!("../i18n/ko.json"))
    } else if locale.starts_with("en") {
        Some(include_str!("../i18n/en.json"))
    } else {
        None
    }
}

fn parse_messages(raw: &str) -> Result<HashMap<String, String>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect()),
        _ => Ok(HashMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placeholder_is_korean() {
        let i18n = I18n::default();
        assert_eq!(i18n.locale(), "ko");
        assert_eq!(i18n.default_placeholder(), "텍스트를 입력해 주세요.");
    }

    #[test]
    fn test_english_catalogue() {
        let i18n = I18n::new("en-US.UTF-8").unwrap();
        assert_eq!(i18n.locale(), "en_us");
        assert_eq!(i18n.default_placeholder(), "Please enter text.");
    }

    #[test]
    fn test_unknown_locale() {
        assert!(matches!(I18n::new("fr"), Err(Error::UnknownLocale(l)) if l == "fr"));
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(I18n::default().t("no.such.key"), "no.such.key");
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_detect_skips_c_locale_with_codeset() {
        assert_eq!(detect_locale_from(env(&[("LANG", "C.UTF-8")])), "en");
        assert_eq!(detect_locale_from(env(&[("LANG", "POSIX")])), "en");
        assert_eq!(
            detect_locale_from(env(&[("LC_ALL", "C.UTF-8"), ("LANG", "ko_KR.UTF-8")])),
            "ko_kr"
        );
        assert_eq!(detect_locale_from(env(&[("LANG", "fr_FR.UTF-8")])), "fr_fr");
        assert_eq!(detect_locale_from(env(&[])), "en");
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("ko_KR.UTF-8"));
        assert!(is_supported("en"));
        assert!(!is_supported("fr_FR"));
        assert!(!is_supported("c"));
    }

    #[test]
    fn test_named_placeholder() {
        assert_eq!(
            I18n::default().named_placeholder("상품명"),
            "상품명을(를) 입력해 주세요."
        );
        assert_eq!(
            I18n::new("en").unwrap().named_placeholder("a product name"),
            "Please enter a product name."
        );
    }

    #[test]
    fn test_format_params() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.format("text_field.placeholder_named", &[("name", "상품명")]),
            "상품명을(를) 입력해 주세요."
        );
    }
}
