// SPDX-License-Identifier: MPL-2.0
//! Startup language resolution.
//!
//! # Resolution Order
//!
//! 1. **Stored preference** - the last language the user picked, if it is
//!    one of the supported codes
//! 2. **Host locale** - primary subtag of the reported locale
//! 3. **Default** - English
//!
//! Invalid stored values are dropped without comment and resolution moves on.

use super::language::Language;
use crate::app::config::defaults::LANGUAGE_STORAGE_KEY;
use crate::storage::PreferenceStore;

/// Read-only host locale signal.
pub trait LocaleSource {
    /// The locale reported by the environment, e.g. `"en-US"`.
    fn locale(&self) -> Option<String>;
}

/// Locale reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A fixed locale string, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Picks the language from a stored code and a host locale. Never fails.
pub fn resolve_language(stored: Option<&str>, locale: Option<&str>) -> Language {
    if let Some(language) = stored.and_then(Language::from_code) {
        return language;
    }

    locale
        .map(Language::from_locale)
        .unwrap_or(Language::DEFAULT)
}

/// Resolves the initial language from the preference store and host locale.
///
/// Only reads; nothing is written back even when the detected language
/// differs from what is stored.
pub fn resolve_initial_language(
    store: &dyn PreferenceStore,
    locale: &dyn LocaleSource,
) -> Language {
    let stored = store.get(LANGUAGE_STORAGE_KEY);
    let host = locale.locale();
    resolve_language(stored.as_deref(), host.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn stored_supported_code_wins() {
        for lang in Language::ALL {
            assert_eq!(resolve_language(Some(lang.code()), Some("de-DE")), lang);
        }
    }

    #[test]
    fn invalid_stored_value_falls_back_to_locale() {
        assert_eq!(resolve_language(Some("xx"), Some("es-MX")), Language::Spanish);
        assert_eq!(resolve_language(Some(""), Some("fr-CA")), Language::French);
        assert_eq!(resolve_language(Some("EN"), Some("de")), Language::German);
    }

    #[test]
    fn missing_everything_yields_default() {
        assert_eq!(resolve_language(None, None), Language::English);
        assert_eq!(resolve_language(Some("klingon"), None), Language::English);
    }

    #[test]
    fn unsupported_locale_yields_english() {
        assert_eq!(resolve_language(None, Some("ja-JP")), Language::English);
        assert_eq!(resolve_language(None, Some("pt-BR")), Language::English);
        assert_eq!(resolve_language(None, Some("en-GB")), Language::English);
    }

    #[test]
    fn empty_store_with_german_locale_resolves_german() {
        let store = MemoryStore::new();
        let locale = FixedLocale::new("de-DE");
        assert_eq!(resolve_initial_language(&store, &locale), Language::German);
    }

    #[test]
    fn invalid_stored_code_with_mexican_spanish_locale_resolves_spanish() {
        let mut store = MemoryStore::new();
        store
            .set(LANGUAGE_STORAGE_KEY, "xx")
            .expect("memory store never fails");
        let locale = FixedLocale::new("es-MX");
        assert_eq!(resolve_initial_language(&store, &locale), Language::Spanish);
    }

    #[test]
    fn resolution_does_not_write_to_the_store() {
        let store = MemoryStore::new();
        resolve_initial_language(&store, &FixedLocale::new("fr-FR"));
        assert_eq!(store.get(LANGUAGE_STORAGE_KEY), None);
    }

    #[test]
    fn fixed_locale_none_reports_nothing() {
        assert_eq!(FixedLocale::none().locale(), None);
        assert_eq!(FixedLocale::new("fr").locale().as_deref(), Some("fr"));
    }
}
