use clap::Parser;
use eyre::Result;
use std::io;
use std::path::PathBuf;
use tasklist::{App, Config, Shell};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList - In-memory task list with priority sorting")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/tasklist/tasklist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colour output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Setup tracing on stderr so it stays out of the rendered list
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match &config.source {
        Some(path) => info!(path = %path.display(), "Loaded config"),
        None => debug!("No config file found, using defaults"),
    }

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let app = App::with_default_priority(config.default_priority);
    let stdin = io::stdin();
    let mut shell = Shell::new(app, stdin.lock(), io::stdout());
    shell.run()
}
