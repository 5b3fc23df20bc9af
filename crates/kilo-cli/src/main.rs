mod app;
mod terminal;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use kilo_core::Editor;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kilo", about = "Minimal terminal text viewer")]
struct Cli {
    /// File to open
    #[arg(default_value = "test.txt")]
    path: PathBuf,

    /// Write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(log_file) = &cli.log_file {
        init_logging(log_file)?;
    }
    tracing::info!(path = %cli.path.display(), "starting kilo");

    let geometry =
        terminal::query_screen_geometry().context("kilo needs an interactive terminal")?;
    let editor = Editor::open(geometry, &cli.path).context("unable to load the file to view")?;
    app::App::new(editor).run()
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("unable to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}
