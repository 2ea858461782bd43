// SPDX-License-Identifier: MPL-2.0
//! Document-level language attribute.
//!
//! Assistive technology and search engines read the root `lang` attribute,
//! so it has to mirror the active language at all times.

use crate::i18n::Language;
use std::cell::RefCell;
use std::rc::Rc;

/// Sink for the root document's `lang` attribute.
pub trait DocumentLanguage {
    fn set_lang(&mut self, language: Language);
}

/// In-memory root element. Clones share the attribute, so one clone can be
/// handed to the provider while another is read by the host.
#[derive(Debug, Clone, Default)]
pub struct RootElement {
    lang: Rc<RefCell<Option<Language>>>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `lang` attribute value, if one has been set.
    pub fn lang(&self) -> Option<&'static str> {
        self.lang.borrow().map(Language::code)
    }
}

impl DocumentLanguage for RootElement {
    fn set_lang(&mut self, language: Language) {
        *self.lang.borrow_mut() = Some(language);
    }
}
