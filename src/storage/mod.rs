// SPDX-License-Identifier: MPL-2.0
//! Durable preference store.
//!
//! A small key/value seam so the language context can read its stored
//! choice at mount and overwrite it on every change, without caring where
//! the bytes live.

mod file;

pub use file::FileStore;

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key/value storage scoped to one application instance.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrites any previous value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same entries, so a test can keep a
/// clone and inspect what a provider persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
