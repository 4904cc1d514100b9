//! reflect CLI — interactive research-reflection questionnaire.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use reflect_core::{JsonFileStore, ReflectConfig, SessionConfig, SessionController};

mod console;

use console::ConsoleInput;

/// Walks through the built-in questions, saving answers as you go.
///
/// Settings are read from `reflect.toml` in the working directory when present.
#[derive(Parser)]
#[command(
    name = "reflect",
    version,
    about = "Interactive research-reflection questionnaire"
)]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reflect=warn".parse().unwrap()),
        )
        .init();

    let Cli {} = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = ReflectConfig::load(&cwd)?;
    let session_config = SessionConfig::from_config(&config);

    let store = JsonFileStore::new(&session_config.answers_path);
    let input = ConsoleInput::new()?;
    let stdout = io::stdout();

    let mut controller = SessionController::new(session_config, store, input, stdout.lock())?;
    let end = controller.run()?;
    tracing::info!(?end, "session ended");

    Ok(())
}
