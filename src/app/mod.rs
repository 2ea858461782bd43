// SPDX-License-Identifier: MPL-2.0
//! Command-line front end wiring.
//!
//! Mounts a [`LanguageProvider`] against the real collaborators (the
//! preferences file, the OS locale, an in-memory root element) and runs a
//! single [`Command`] against it.

pub mod config;
pub mod paths;

use crate::context::{use_language, LanguageProvider};
use crate::document::RootElement;
use crate::error::{Error, Result};
use crate::i18n::{Language, LocaleSource, SystemLocale, TranslationTable};
use crate::storage::FileStore;
use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Startup flags parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Directory holding `preferences.toml`, overriding env and platform default.
    pub config_dir: Option<String>,
}

/// What to do once the provider is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the active language and the document attribute.
    Current,
    /// Change and persist the active language.
    Set(Language),
    /// List every language with its flag and name.
    List,
    /// Translate each key with the active language.
    Translate(Vec<String>),
    /// Report which languages define each key.
    Check(Vec<String>),
}

impl Command {
    /// Parses a command name and its free arguments.
    pub fn parse(name: &str, args: Vec<String>) -> Result<Self> {
        match name {
            "current" => Ok(Command::Current),
            "list" => Ok(Command::List),
            "set" => {
                let [code] = args.as_slice() else {
                    return Err(Error::Config("usage: set <fr|en|es|de>".to_string()));
                };
                Ok(Command::Set(code.parse()?))
            }
            "tr" => Ok(Command::Translate(non_empty(args, "tr <key>...")?)),
            "check" => Ok(Command::Check(non_empty(args, "check <key>...")?)),
            other => Err(Error::Config(format!("unknown command: {}", other))),
        }
    }
}

impl Command {
    /// Parses the free arguments left after flags: a command name then its
    /// arguments. Arguments that are not valid UTF-8 are rejected.
    pub fn from_args(args: Vec<OsString>) -> Result<Self> {
        let mut args = args
            .into_iter()
            .map(|arg| {
                arg.into_string().map_err(|raw| {
                    Error::Config(format!("argument is not valid UTF-8: {:?}", raw))
                })
            })
            .collect::<Result<Vec<String>>>()?;
        if args.is_empty() {
            return Err(Error::Config("missing command".to_string()));
        }
        let name = args.remove(0);
        Self::parse(&name, args)
    }
}

fn non_empty(args: Vec<String>, usage: &str) -> Result<Vec<String>> {
    if args.is_empty() {
        Err(Error::Config(format!("usage: {}", usage)))
    } else {
        Ok(args)
    }
}

/// Result of running a command: text for stdout and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

/// Mounted application state for one process run.
pub struct App {
    provider: LanguageProvider,
    document: RootElement,
    store_path: PathBuf,
    /// Set when an existing preferences file had to be ignored.
    pub load_warning: Option<String>,
}

impl App {
    /// Mounts against the OS locale and the preferences file resolved from
    /// `flags`.
    pub fn new(flags: Flags) -> Result<Self> {
        paths::init_cli_override(flags.config_dir);
        Self::with_collaborators(None, &SystemLocale)
    }

    /// Mounts with an explicit config directory and locale source.
    pub fn with_collaborators(config_dir: Option<PathBuf>, locale: &dyn LocaleSource) -> Result<Self> {
        let translations = TranslationTable::embedded()?;
        let (store, load_warning) = FileStore::open(config_dir)?;
        let store_path = store.path().to_path_buf();
        let document = RootElement::new();
        let provider = LanguageProvider::mount(translations, store, locale, document.clone());

        Ok(Self {
            provider,
            document,
            store_path,
            load_warning,
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn run(&self, command: &Command) -> Result<Outcome> {
        let handle = use_language(&self.provider.scope())?;
        let mut output = String::new();
        let mut success = true;

        match command {
            Command::Current => {
                let _ = writeln!(output, "{}", handle.current_language());
                let _ = writeln!(output, "lang=\"{}\"", self.document.lang().unwrap_or_default());
            }
            Command::Set(language) => {
                handle.set_language(*language);
                let _ = writeln!(output, "{}", handle.translate("language-changed"));
            }
            Command::List => {
                let current = handle.current_language();
                for ((lang, name), (_, flag)) in handle
                    .display_names()
                    .into_iter()
                    .zip(handle.flag_symbols())
                {
                    let marker = if lang == current { '*' } else { ' ' };
                    let _ = writeln!(output, "{} {} {} {}", marker, lang.code(), flag, name);
                }
            }
            Command::Translate(keys) => {
                for key in keys {
                    let _ = writeln!(output, "{}", handle.translate(key));
                }
            }
            Command::Check(keys) => {
                let table = handle.translations();
                for key in keys {
                    let present: Vec<&str> = Language::ALL
                        .into_iter()
                        .filter(|lang| table.contains(*lang, key))
                        .map(Language::code)
                        .collect();
                    if !table.contains(Language::DEFAULT, key) {
                        success = false;
                    }
                    let _ = writeln!(output, "{}: {}", key, present.join(" "));
                }
            }
        }

        Ok(Outcome { output, success })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{LANGUAGE_STORAGE_KEY, PREFERENCES_FILE};
    use crate::i18n::FixedLocale;
    use crate::storage::PreferenceStore;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path, locale: &str) -> App {
        App::with_collaborators(Some(dir.to_path_buf()), &FixedLocale::new(locale))
            .expect("app should mount")
    }

    #[test]
    fn parse_known_commands() {
        assert_eq!(Command::parse("current", vec![]), Ok(Command::Current));
        assert_eq!(Command::parse("list", vec![]), Ok(Command::List));
        assert_eq!(
            Command::parse("set", vec!["es".into()]),
            Ok(Command::Set(Language::Spanish))
        );
        assert_eq!(
            Command::parse("tr", vec!["nav-home".into()]),
            Ok(Command::Translate(vec!["nav-home".into()]))
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            Command::parse("set", vec!["xx".into()]),
            Err(Error::UnsupportedLanguage(_))
        ));
        assert!(Command::parse("set", vec![]).is_err());
        assert!(Command::parse("tr", vec![]).is_err());
        assert!(matches!(Command::parse("bogus", vec![]), Err(Error::Config(_))));
    }

    #[test]
    fn from_args_parses_name_and_arguments() {
        let args = vec![OsString::from("tr"), OsString::from("nav-home")];
        assert_eq!(
            Command::from_args(args),
            Ok(Command::Translate(vec!["nav-home".into()]))
        );
        assert!(matches!(Command::from_args(vec![]), Err(Error::Config(_))));
    }

    #[cfg(unix)]
    #[test]
    fn from_args_rejects_non_utf8_arguments() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("tr"),
            OsString::from_vec(vec![0x66, 0x6f, 0x80]),
            OsString::from("nav-home"),
        ];
        match Command::from_args(args) {
            Err(Error::Config(message)) => assert!(message.contains("UTF-8")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn current_reports_detected_language_and_document() {
        let dir = tempdir().expect("failed to create temp dir");
        let app = app_in(dir.path(), "de-DE");
        let outcome = app.run(&Command::Current).expect("current should run");
        assert_eq!(outcome.output, "de\nlang=\"de\"\n");
    }

    #[test]
    fn set_writes_preferences_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let app = app_in(dir.path(), "en-US");
        let outcome = app
            .run(&Command::Set(Language::French))
            .expect("set should run");

        assert_eq!(outcome.output, "Langue mise à jour\n");
        assert_eq!(app.store_path(), dir.path().join(PREFERENCES_FILE));
        let reread = FileStore::at_path(app.store_path());
        assert_eq!(reread.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn list_marks_current_language() {
        let dir = tempdir().expect("failed to create temp dir");
        let app = app_in(dir.path(), "es-ES");
        let outcome = app.run(&Command::List).expect("list should run");
        let lines: Vec<&str> = outcome.output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("* es"));
        assert!(lines[0].starts_with("  fr"));
    }

    #[test]
    fn check_fails_for_keys_missing_in_english() {
        let dir = tempdir().expect("failed to create temp dir");
        let app = app_in(dir.path(), "en");
        let outcome = app
            .run(&Command::Check(vec!["footer-feedback".into(), "nope".into()]))
            .expect("check should run");
        assert!(!outcome.success);
        assert!(outcome.output.contains("footer-feedback: en\n"));
        assert!(outcome.output.contains("nope: \n"));
    }
}
