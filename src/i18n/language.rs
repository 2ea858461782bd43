// SPDX-License-Identifier: MPL-2.0
//! The closed set of display languages.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// One of the four supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    French,
    #[default]
    English,
    Spanish,
    German,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 4] = [
        Language::French,
        Language::English,
        Language::Spanish,
        Language::German,
    ];

    /// Language used when neither the stored preference nor the host
    /// locale names a supported language.
    pub const DEFAULT: Language = Language::English;

    /// Short code used for persistence and the document `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
            Language::Spanish => "es",
            Language::German => "de",
        }
    }

    /// Name of the language written in that language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::French => "Français",
            Language::English => "English",
            Language::Spanish => "Español",
            Language::German => "Deutsch",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::French => "🇫🇷",
            Language::English => "🇬🇧",
            Language::Spanish => "🇪🇸",
            Language::German => "🇩🇪",
        }
    }

    /// Parses one of the exact short codes. Anything else, including
    /// upper-case or region-qualified codes, is rejected.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Maps a host locale string (`"fr-CA"`, `"de_DE.UTF-8"`, `"es"`) to a
    /// language by its primary subtag. Unknown subtags map to the default.
    pub fn from_locale(locale: &str) -> Language {
        let primary = locale
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match primary.as_str() {
            "fr" => Language::French,
            "es" => Language::Spanish,
            "de" => Language::German,
            _ => Language::DEFAULT,
        }
    }

    /// Identifier handed to Fluent for plural and formatting rules.
    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}
