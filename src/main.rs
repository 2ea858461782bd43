// SPDX-License-Identifier: MPL-2.0
use shiftconvert_i18n::app::config::DEFAULT_LOG_DIRECTIVE;
use shiftconvert_i18n::app::{App, Command, Flags};
use std::process::ExitCode;

const USAGE: &str = "\
usage: shiftconvert-lang [--config-dir DIR] <command>

commands:
  current          show the active language
  set <code>       change the language (fr, en, es, de)
  list             list available languages
  tr <key>...      translate keys with the active language
  check <key>...   show which languages define each key";

fn main() -> ExitCode {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let flags = match args.opt_value_from_str("--config-dir") {
        Ok(config_dir) => Flags { config_dir },
        Err(error) => {
            eprintln!("{}\n\n{}", error, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let command = match Command::from_args(args.finish()) {
        Ok(command) => command,
        Err(error) => {
            eprintln!("{}\n\n{}", error, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let app = match App::new(flags) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("Failed to start: {}", error);
            return ExitCode::FAILURE;
        }
    };
    if let Some(warning) = &app.load_warning {
        eprintln!("warning: {} ({})", warning, app.store_path().display());
    }

    match app.run(&command) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::WARN.into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
