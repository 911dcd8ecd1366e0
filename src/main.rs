//! rtcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rtcheck::cli::{Cli, CommandDispatcher};
use rtcheck::config::load_config;
use rtcheck::host::resolve_user;
use rtcheck::ui::should_use_colors;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so reports on stdout stay clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rtcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rtcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> rtcheck::Result<ExitCode> {
    let user = resolve_user()?;
    tracing::debug!("running as {} (uid {})", user.name, user.uid);

    let config = load_config(cli.config.as_deref(), cli.root.clone())?;
    let use_color = !cli.no_color && should_use_colors();

    let dispatcher = CommandDispatcher::new(config, user, use_color);
    let mut stdout = std::io::stdout().lock();
    let result = dispatcher.dispatch(cli, &mut stdout)?;
    Ok(ExitCode::from(result.exit_code as u8))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("rtcheck starting with args: {:?}", cli);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
