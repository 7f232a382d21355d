// vidshelf - command-driven video library
// Loads the catalog, then hands stdin/stdout to the shell until EXIT

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use vidshelf::config::LoggingConfig;
use vidshelf::{CommandController, Config, Shell, VideoLibrary};

#[derive(Parser)]
#[command(name = "vidshelf")]
#[command(about = "Play, search, flag and organise videos from a text catalog")]
struct Args {
    /// Catalog file (`title | id | #tag , #tag` per line); overrides the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file to use instead of the one in the user config dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable developer logging (stderr + debug output)
    #[arg(long)]
    dev: bool,
}

fn init_logging(config: &LoggingConfig, dev: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory).with_context(|| {
        format!("Failed to create log directory {}", config.directory.display())
    })?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let builder = tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter);

    if dev {
        let subscriber = builder
            .with_writer(file_writer.and(io::stderr))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = builder.with_writer(file_writer).finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(guard)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load config - falls back to defaults if missing
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(catalog) = args.catalog {
        config.catalog_path = catalog;
    }

    let _guard = init_logging(&config.logging, args.dev)?;
    info!("vidshelf starting up");

    let library = VideoLibrary::load(&config.catalog_path)
        .with_context(|| format!("Could not load catalog {}", config.catalog_path.display()))?;

    if config.shell.show_banner {
        println!("Hello and welcome to vidshelf, what would you like to do?");
        println!("Enter HELP for list of available commands or EXIT to terminate.");
    }

    let controller = CommandController::new(library);
    let stdin = io::stdin();
    let mut shell = Shell::new(controller, stdin.lock(), io::stdout())
        .with_prompt(config.shell.prompt.clone());
    shell.run()?;

    println!("vidshelf has now terminated its execution. Thank you and goodbye!");
    info!("vidshelf shutting down");
    Ok(())
}
