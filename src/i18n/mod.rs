// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module owns the language set, the translation tables, and the
//! startup resolution of the active language.
//!
//! # Features
//!
//! - Closed set of four languages with display names and flag symbols
//! - Embedded Fluent `.ftl` tables, one per language
//! - Lookup fallback: current language, then English, then the raw key
//! - Resolution from stored preference, then host locale, then English

pub mod fluent;
pub mod language;
pub mod resolve;

pub use fluent::TranslationTable;
pub use language::Language;
pub use resolve::{resolve_initial_language, resolve_language, FixedLocale, LocaleSource, SystemLocale};
