// SPDX-License-Identifier: MPL-2.0
//! Where ShiftConvert keeps `preferences.toml`.
//!
//! The first of these wins: an explicit override argument, the
//! `--config-dir` flag, `SHIFTCONVERT_CONFIG_DIR` (ignored when empty), then
//! `ShiftConvert/` under the platform config directory.

use super::config::defaults::{APP_NAME, PREFERENCES_FILE};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Names a directory to use instead of the platform default.
pub const ENV_CONFIG_DIR: &str = "SHIFTCONVERT_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` value. The first call wins.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

/// Directory holding `preferences.toml`, or `None` when the platform has no
/// config directory and nothing overrides it.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`], with `override_path` taking precedence
/// over everything else.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().and_then(Clone::clone))
        .or_else(|| {
            std::env::var(ENV_CONFIG_DIR)
                .ok()
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

/// `preferences.toml` inside the resolved config directory.
pub fn get_preferences_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_app_config_dir_with_override(override_dir).map(|dir| dir.join(PREFERENCES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn preferences_path_ends_with_preferences_file() {
        let result = get_preferences_path_with_override(Some(PathBuf::from("/base")));
        assert_eq!(result, Some(PathBuf::from("/base").join(PREFERENCES_FILE)));
    }
}
