//! Cronos CLI - a terminal client for the Cronos booking platform.
//!
//! Signs in and out, registers accounts, and walks the same routes the web
//! client has, applying the same session rules.

mod app;
mod cli;
mod view;

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;
use cli::{Cli, Command};

/// Initialize the tracing subscriber for logging.
///
/// The returned guard flushes the log file on drop and must be held until exit.
fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path.file_name().unwrap_or_else(|| OsStr::new("cronos.log"));
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

async fn run(cli: Cli) -> Result<()> {
    let mut app = App::new(cli.api_url.as_deref(), cli.data_dir)?;

    match cli.command {
        Command::Open { path } => app.open(&path).await,
        Command::Login { email } => app.login(email).await,
        Command::Register {
            first_name,
            last_name,
            email,
        } => app.register(first_name, last_name, email).await,
        Command::Logout => app.logout().await,
        Command::Home => app.go_home().await,
        Command::Whoami => app.whoami().await,
        Command::Status => {
            app.status();
            Ok(())
        }
        Command::Book { slug, section } => app.book(&slug, section.as_deref()).await,
        Command::PasswordStrength => app.password_strength(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let guard = init_tracing(cli.verbose, cli.log_file.as_deref());
    info!("Cronos CLI starting");

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}
