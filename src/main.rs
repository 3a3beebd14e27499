//! mob CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use mob::cli::{Cli, CommandDispatcher};
use mob::git::CliGit;
use mob::settings::Settings;
use mob::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. Debug mode (`--debug` or `MOB_DEBUG`) sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout belongs to the session messages.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mob=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mob=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // Anything clap cannot make sense of, `-h` included, falls back to status + usage.
    let (cli, parse_error) = match Cli::try_parse() {
        Ok(cli) => (Some(cli), None),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => (None, Some(e)),
    };

    let debug = cli.as_ref().is_some_and(|c| c.debug);
    let settings = Settings::from_env().with_debug(debug);
    init_tracing(settings.debug);

    if let Some(e) = &parse_error {
        tracing::debug!("unrecognized arguments: {}", e);
    }
    tracing::debug!("mob starting with settings: {:?}", settings);

    // Handle --no-color
    if cli.as_ref().is_some_and(|c| c.no_color) {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new();
    let mut git = CliGit::new();
    let dispatcher = CommandDispatcher::new(settings);

    let result = match &cli {
        Some(cli) => dispatcher.dispatch(cli, &mut git, &mut ui),
        None => dispatcher.fallback(&mut git, &mut ui),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
