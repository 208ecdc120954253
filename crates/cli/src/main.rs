mod commands;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use relief_core::{DATA_DIR_NAME, DATABASE_FILE, SAMPLE_DISASTERS_FILE};
use relief_storage::Storage;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "disaster-relief")]
#[command(about = "Disaster relief needs estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "5001")]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Print all regions as JSON
    Regions,
    /// Print the needs estimate for a region as JSON
    Predict { region: String },
    /// Insert disaster rows from a CSV file
    Import { file: PathBuf },
}

/// Service home: `DISASTER_RELIEF_HOME`, else the executable's directory when
/// it ships a data directory, else the working directory.
pub(crate) fn get_home_dir() -> PathBuf {
    if let Ok(home) = std::env::var("DISASTER_RELIEF_HOME") {
        return PathBuf::from(home);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .filter(|dir| dir.join(DATA_DIR_NAME).is_dir())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub(crate) fn get_data_dir() -> PathBuf {
    get_home_dir().join(DATA_DIR_NAME)
}

/// Opens the database and runs the idempotent startup seeding.
pub(crate) fn open_storage() -> Result<Storage> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let storage = Storage::new(&get_home_dir().join(DATABASE_FILE))?;
    let report = storage.initialize(&data_dir.join(SAMPLE_DISASTERS_FILE))?;
    tracing::debug!(?report, "startup seeding finished");
    Ok(storage)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Regions => commands::query::run_regions().await,
        Commands::Predict { region } => commands::query::run_predict(region).await,
        Commands::Import { file } => commands::import::run_import(&file).await,
    }
}
