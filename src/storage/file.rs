// SPDX-License-Identifier: MPL-2.0
use super::PreferenceStore;
use crate::app::config::{self, Preferences};
use crate::app::paths;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Preference store backed by `preferences.toml`.
///
/// The file is read once when the store is opened; every `set` rewrites it
/// whole. Entries written by other keys are kept untouched.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    prefs: Preferences,
}

impl FileStore {
    /// Opens the store in the resolved config directory.
    ///
    /// The second element carries a load warning when an existing file had
    /// to be ignored.
    pub fn open(base_dir: Option<PathBuf>) -> Result<(Self, Option<String>)> {
        let path = paths::get_preferences_path_with_override(base_dir.clone())
            .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))?;
        let (prefs, warning) = config::load_with_override(base_dir);
        Ok((Self { path, prefs }, warning))
    }

    /// Opens a store at an explicit file path. Unreadable files start empty.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = if path.exists() {
            config::load_from_path(&path).unwrap_or_default()
        } else {
            Preferences::default()
        };
        Self { path, prefs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.prefs.insert(key, value);
        config::save_to_path(&self.prefs, &self.path)
    }
}
