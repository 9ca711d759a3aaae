// Vidlancing Profile - terminal viewer for freelancing platform profiles
//
// Fetches one user profile from the platform API and renders it, either in
// an interactive terminal UI or once to stdout.
//
// Architecture:
// - API client (reqwest): authenticated GET {api_url}/users/{id}
// - Credentials: bearer token read from a file or env store per request
// - View: ProfileView state machine with a generation guard, pure render tree
// - TUI (ratatui): profile screen, go-to prompt, diagnostic logs panel
// - Headless: `show ID` prints the rendered tree as text

mod api;
mod cli;
mod config;
mod credentials;
mod logging;
mod profile;
mod tui;
mod view;

use anyhow::Result;
use api::HttpProfileApi;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use view::{render, ProfileLoader, ProfileView, RenderOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands exit early
    if let Some(command) = &cli.command {
        if cli::handle_config_command(command) {
            return Ok(());
        }
    }

    // Write the config template on first run (helps users discover options)
    Config::ensure_config_exists();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let (profile_id, tui_mode) = match cli.command {
        Some(Commands::Show { id }) => (Some(id), false),
        _ => (cli.id, config.enable_tui),
    };

    let log_buffer = LogBuffer::new();
    let file_guard = init_logging(&config.logging, tui_mode, &log_buffer);

    let api = HttpProfileApi::new(&config.api_url, config.request_timeout())?;
    let loader = ProfileLoader::new(Arc::new(api), config.credentials.provider());

    tracing::debug!(
        "Profile API at {} (credentials: {})",
        config.api_url,
        config.credentials.source.as_str()
    );

    if tui_mode {
        let result = tui::run_tui(&config, loader, log_buffer, profile_id).await;
        drop(file_guard);
        return result;
    }

    let Some(id) = profile_id else {
        eprintln!("Error: a profile identifier is required in headless mode");
        std::process::exit(2);
    };

    let render_options = RenderOptions {
        date_format: config.date_format.clone(),
    };
    let loaded = show_profile(&loader, &id, &render_options).await;

    // Flush file logs before a non-zero exit skips destructors
    drop(file_guard);
    if !loaded {
        std::process::exit(1);
    }
    Ok(())
}

/// Fetch one profile, print the rendered view, report whether it loaded
async fn show_profile(loader: &ProfileLoader, id: &str, options: &RenderOptions) -> bool {
    let mut view = ProfileView::new();
    let trigger = view.mount(id);
    let resolution = loader.load(trigger).await;
    view.resolve(resolution);

    print!("{}", render(view.state(), options));
    !view.state().is_failed()
}

/// Initialize tracing
///
/// TUI mode captures events into `log_buffer` (writing to the terminal would
/// garble the display); headless mode writes to stderr so stdout carries
/// only the profile. File logging adds a JSON layer on a rolling appender.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_logging(
    logging: &LoggingConfig,
    tui_mode: bool,
    log_buffer: &LogBuffer,
) -> Option<WorkerGuard> {
    let default_filter = format!("vidlancing_profile={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match file_writer(logging) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rolling file writer, if file logging is enabled and possible
fn file_writer(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    Some(tracing_appender::non_blocking(file_appender))
}
