// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Storage**: Preference file naming and keys
//! - **Logging**: Default tracing filter for the binary

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "ShiftConvert";

/// File holding persisted preferences inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Key under which the chosen language code is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "shiftconvert-language";

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing directive applied when `RUST_LOG` does not override it.
pub const DEFAULT_LOG_DIRECTIVE: &str = "shiftconvert_i18n=warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!APP_NAME.is_empty());
    assert!(!LANGUAGE_STORAGE_KEY.is_empty());
    assert!(PREFERENCES_FILE.len() > ".toml".len());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_key_is_namespaced() {
        assert_eq!(LANGUAGE_STORAGE_KEY, "shiftconvert-language");
    }

    #[test]
    fn preferences_file_is_toml() {
        assert!(PREFERENCES_FILE.ends_with(".toml"));
    }

    #[test]
    fn log_directive_targets_this_crate() {
        assert!(DEFAULT_LOG_DIRECTIVE.starts_with(env!("CARGO_CRATE_NAME")));
    }
}
