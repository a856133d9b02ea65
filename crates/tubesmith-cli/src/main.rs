//! Tubesmith - a terminal shell for generating short-video content.
//!
//! Sign in against the local account store, then type topics; each topic
//! produces a title, script, and thumbnail through the configured provider.

mod app;
mod command;

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tubesmith_core::config::ProviderKind;
use tubesmith_core::Config;

use app::{App, AppState};

/// Log file name prefix inside the data directory
const LOG_FILE_PREFIX: &str = "tubesmith.log";

/// Initialize the tracing subscriber, logging to a daily file so log lines
/// never interleave with the chat prompt.
fn init_tracing(log_dir: &Path) -> WorkerGuard {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let data_dir = Config::data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    let _guard = init_tracing(&data_dir);

    let mut config = Config::load_or_default()?;

    let args: Vec<String> = std::env::args().collect();
    if args.iter().skip(1).any(|a| a == "--mock") {
        config.provider = ProviderKind::Mock;
    }
    info!(provider = ?config.provider, "Tubesmith starting");

    let store = config.credential_store()?;
    let generator = config.artifact_generator(Config::api_key_from_env())?;
    let mut app = App::new(config, store, generator);

    let result = run_app(&mut app).await;

    info!("Tubesmith shutting down");
    match result {
        Err(e) if is_input_closed(&e) => Ok(()),
        other => other,
    }
}

async fn run_app(app: &mut App) -> Result<()> {
    loop {
        match app.state {
            AppState::SigningIn => {
                app.sign_in_interactive()?;
                if app.state == AppState::Chatting {
                    app.print_transcript_tail();
                }
            }
            AppState::Chatting => app.chat_turn().await?,
            AppState::Quitting => return Ok(()),
        }
    }
}

/// End of input (Ctrl-D) ends the program quietly
fn is_input_closed(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::UnexpectedEof)
        .unwrap_or(false)
}
