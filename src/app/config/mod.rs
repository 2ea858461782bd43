// SPDX-License-Identifier: MPL-2.0
//! This module handles the on-disk preferences file, a flat TOML table of
//! string keys to string values stored as `preferences.toml`.
//!
//! ```toml
//! "shiftconvert-language" = "fr"
//! ```
//!
//! # Path Resolution
//!
//! The file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SHIFTCONVERT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use shiftconvert_i18n::app::config;
//!
//! let (mut prefs, _warning) = config::load_with_override(None);
//! prefs.insert("shiftconvert-language", "fr");
//! config::save_with_override(&prefs, None).expect("Failed to save preferences");
//! ```

pub mod defaults;

pub use defaults::*;

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Warning key reported when an existing preferences file cannot be read.
pub const LOAD_WARNING: &str = "preferences-load-error";

/// Persisted key/value preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(BTreeMap<String, String>);

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads preferences from `base_dir`, or the resolved config directory.
///
/// Returns a tuple of (preferences, optional_warning). A missing file is not
/// a warning; an unreadable or malformed one yields empty preferences plus
/// [`LOAD_WARNING`].
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Preferences, Option<String>) {
    if let Some(path) = paths::get_preferences_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(prefs) => return (prefs, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring unreadable preferences");
                    return (Preferences::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Preferences::default(), None)
}

/// Loads preferences from a specific path.
///
/// Non-string values are rejected as a config error rather than coerced.
pub fn load_from_path(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    let prefs: Preferences = toml::from_str(&content)?;
    Ok(prefs)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves preferences to `base_dir`, or the resolved config directory.
pub fn save_with_override(prefs: &Preferences, base_dir: Option<PathBuf>) -> Result<()> {
    let path = paths::get_preferences_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))?;
    save_to_path(prefs, &path)
}

/// Saves preferences to a specific path, creating parent directories.
pub fn save_to_path(prefs: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}
