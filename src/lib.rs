// SPDX-License-Identifier: MPL-2.0
//! `shiftconvert_i18n` holds ShiftConvert's display language.
//!
//! It resolves the language at startup (stored preference, then host
//! locale, then English), persists every change, keeps the document `lang`
//! attribute in sync, and translates keys through embedded Fluent tables.

pub mod app;
pub mod context;
pub mod document;
pub mod error;
pub mod i18n;
pub mod storage;
