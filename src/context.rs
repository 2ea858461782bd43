// SPDX-License-Identifier: MPL-2.0
//! Session-scoped language context.
//!
//! A [`LanguageProvider`] owns the active language for as long as it stays
//! mounted. Consumers reach it through a [`Scope`] with [`use_language`],
//! which fails fast when no provider encloses that scope.
//!
//! ```
//! use shiftconvert_i18n::context::{use_language, LanguageProvider, Scope};
//! use shiftconvert_i18n::document::RootElement;
//! use shiftconvert_i18n::i18n::{FixedLocale, Language, TranslationTable};
//! use shiftconvert_i18n::storage::MemoryStore;
//!
//! let provider = LanguageProvider::mount(
//!     TranslationTable::embedded().unwrap(),
//!     MemoryStore::new(),
//!     &FixedLocale::new("fr-CA"),
//!     RootElement::new(),
//! );
//! let handle = use_language(&provider.scope().child()).unwrap();
//! assert_eq!(handle.current_language(), Language::French);
//! assert!(use_language(&Scope::detached()).is_err());
//! ```

use crate::app::config::defaults::LANGUAGE_STORAGE_KEY;
use crate::document::DocumentLanguage;
use crate::error::{Error, Result};
use crate::i18n::{resolve_initial_language, Language, LocaleSource, TranslationTable};
use crate::storage::PreferenceStore;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Language)>;

/// Identifies a change listener registered with [`LanguageHandle::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Shared {
    current: Cell<Language>,
    mounted: Cell<bool>,
    translations: TranslationTable,
    store: RefCell<Box<dyn PreferenceStore>>,
    document: RefCell<Box<dyn DocumentLanguage>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
}

impl Shared {
    /// Mirrors `language` into the document and notifies listeners.
    fn language_changed(&self, language: Language) {
        self.document.borrow_mut().set_lang(language);

        // Snapshot so listeners may subscribe, unsubscribe or set again.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            // A listener set a newer language; that change already notified
            // everyone with the current value.
            if self.current.get() != language {
                break;
            }
            listener(language);
        }
    }
}

/// Owner of the active language for one application mount.
///
/// Dropping the provider unmounts it: scopes created from it stop resolving,
/// and handles already given out keep working on the final state.
pub struct LanguageProvider {
    shared: Rc<Shared>,
}

impl LanguageProvider {
    /// Resolves the initial language and mounts the context.
    ///
    /// The document attribute is synced right away so it is correct before
    /// the first change.
    pub fn mount<S, D>(
        translations: TranslationTable,
        store: S,
        locale: &dyn LocaleSource,
        document: D,
    ) -> Self
    where
        S: PreferenceStore + 'static,
        D: DocumentLanguage + 'static,
    {
        let initial = resolve_initial_language(&store, locale);
        tracing::debug!(language = %initial, "mounting language provider");

        let shared = Rc::new(Shared {
            current: Cell::new(initial),
            mounted: Cell::new(true),
            translations,
            store: RefCell::new(Box::new(store)),
            document: RefCell::new(Box::new(document)),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        });
        shared.language_changed(initial);

        Self { shared }
    }

    /// A scope enclosed by this provider.
    pub fn scope(&self) -> Scope {
        Scope {
            provider: Some(Rc::downgrade(&self.shared)),
        }
    }

    pub fn handle(&self) -> LanguageHandle {
        LanguageHandle {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl Drop for LanguageProvider {
    fn drop(&mut self) {
        self.shared.mounted.set(false);
    }
}

impl fmt::Debug for LanguageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProvider")
            .field("current", &self.shared.current.get())
            .finish_non_exhaustive()
    }
}

/// Position in the consumer tree, possibly enclosed by a provider.
#[derive(Clone, Default)]
pub struct Scope {
    provider: Option<Weak<Shared>>,
}

impl Scope {
    /// A scope that no provider encloses.
    pub fn detached() -> Self {
        Self::default()
    }

    /// A nested scope that sees the same provider as its parent.
    pub fn child(&self) -> Self {
        self.clone()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("enclosed", &self.provider.is_some())
            .finish()
    }
}

/// Returns the language handle for `scope`.
///
/// # Errors
///
/// [`Error::OutsideProvider`] if the scope is detached or its provider has
/// been unmounted.
pub fn use_language(scope: &Scope) -> Result<LanguageHandle> {
    scope
        .provider
        .as_ref()
        .and_then(Weak::upgrade)
        .filter(|shared| shared.mounted.get())
        .map(|shared| LanguageHandle { shared })
        .ok_or(Error::OutsideProvider)
}

/// Context handle shared by every consumer of one provider.
#[derive(Clone)]
pub struct LanguageHandle {
    shared: Rc<Shared>,
}

impl LanguageHandle {
    pub fn current_language(&self) -> Language {
        self.shared.current.get()
    }

    /// Makes `language` current and persists it.
    ///
    /// The store is written on every call. The document attribute and
    /// listeners only hear about actual changes. A failed write is logged
    /// and does not undo the in-memory change.
    pub fn set_language(&self, language: Language) {
        let previous = self.shared.current.replace(language);

        let persisted = self
            .shared
            .store
            .borrow_mut()
            .set(LANGUAGE_STORAGE_KEY, language.code());
        if let Err(error) = persisted {
            tracing::warn!(%language, %error, "failed to persist language preference");
        }

        if previous != language {
            tracing::debug!(from = %previous, to = %language, "language changed");
            self.shared.language_changed(language);
        }
    }

    /// Translates `key` for the current language, falling back to English
    /// and then to the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.shared
            .translations
            .translate(self.current_language(), key)
    }

    /// Human-readable names, in menu order.
    pub fn display_names(&self) -> [(Language, &'static str); 4] {
        Language::ALL.map(|lang| (lang, lang.display_name()))
    }

    /// Flag symbols, in menu order.
    pub fn flag_symbols(&self) -> [(Language, &'static str); 4] {
        Language::ALL.map(|lang| (lang, lang.flag()))
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.shared.translations
    }

    /// Registers `listener` to run after every language change.
    pub fn subscribe(&self, listener: impl Fn(Language) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.shared.next_subscription.get());
        self.shared.next_subscription.set(id.0 + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.shared.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl fmt::Debug for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageHandle")
            .field("current", &self.current_language())
            .finish_non_exhaustive()
    }
}
