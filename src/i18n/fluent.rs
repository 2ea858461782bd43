// SPDX-License-Identifier: MPL-2.0
use super::language::Language;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Per-language strings consumed by lookup only.
///
/// Two kinds of source feed a language: Fluent resources (the embedded
/// `.ftl` files) and literal key/value entries. Literal entries are returned
/// byte for byte and win over a Fluent message with the same key. Lookups
/// never fail: see [`Self::translate`].
pub struct TranslationTable {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    entries: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// Loads the `.ftl` files embedded from `assets/i18n/`.
    ///
    /// Files whose stem is not a supported language code are ignored.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(language) = filename
                .strip_suffix(".ftl")
                .and_then(Language::from_code)
            else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((
                    language,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ));
            }
        }

        Self::from_sources(sources)
    }

    /// Builds a table from Fluent sources supplied by the caller.
    ///
    /// A language may appear more than once; later sources add messages to
    /// the same bundle, and a duplicate message id is an error.
    pub fn from_sources<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<String>,
    {
        let mut bundles: HashMap<Language, FluentBundle<FluentResource>> = HashMap::new();

        for (language, source) in sources {
            let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
                Error::Translation(format!(
                    "failed to parse {} resource: {} error(s)",
                    language,
                    errors.len()
                ))
            })?;

            let bundle = bundles.entry(language).or_insert_with(|| {
                let mut bundle = FluentBundle::new(vec![language.langid()]);
                bundle.set_use_isolating(false);
                bundle
            });
            bundle.add_resource(resource).map_err(|errors| {
                Error::Translation(format!(
                    "failed to add {} resource: {} conflicting message(s)",
                    language,
                    errors.len()
                ))
            })?;
        }

        Ok(Self {
            bundles,
            entries: HashMap::new(),
        })
    }

    /// Builds a table from plain `{language -> {key -> string}}` entries.
    ///
    /// Keys and values are taken literally: any key shape is allowed and
    /// braces or surrounding whitespace in values are kept as written. A key
    /// repeated for one language keeps its last value.
    pub fn from_entries<I, E, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, E)>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::empty();
        table.extend_entries(entries);
        table
    }

    /// Adds literal entries on top of what the table already holds.
    pub fn extend_entries<I, E, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Language, E)>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (language, pairs) in entries {
            self.entries.entry(language).or_default().extend(
                pairs
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into())),
            );
        }
    }

    /// An empty table. Every lookup falls through to the key itself.
    pub fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    /// Looks `key` up for `language`, then in English, then gives back the
    /// key unchanged so missing strings stay visible in the UI.
    pub fn translate(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| {
                if language == Language::DEFAULT {
                    None
                } else {
                    self.lookup(Language::DEFAULT, key)
                }
            })
            .unwrap_or_else(|| key.to_string())
    }

    /// Whether `language` itself has a usable message for `key`.
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.lookup(language, key).is_some()
    }

    /// Languages that have at least one loaded resource or entry.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.bundles.contains_key(lang) || self.entries.contains_key(lang))
            .collect()
    }

    fn lookup(&self, language: Language, key: &str) -> Option<String> {
        if let Some(value) = self.entries.get(&language).and_then(|map| map.get(key)) {
            return Some(value.clone());
        }

        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            None
        }
    }
}
