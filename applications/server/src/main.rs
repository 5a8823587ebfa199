/// Vinyl Server - Virtual record player backend
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vinyl_artwork::ArtworkExtractor;
use vinyl_core::RecordStore;
use vinyl_server::{config::ServerConfig, create_router, state::AppState};
use vinyl_storage::LocalRecordStore;

#[derive(Parser)]
#[command(name = "vinyl-server")]
#[command(about = "Virtual record player server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "VINYL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract embedded album art from an MP3 file
    ExtractArt {
        /// Audio file to inspect
        path: PathBuf,
        /// Write the image here instead of printing a summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List saved records, newest first
    ListRecords,
    /// Delete every saved record
    ClearCollection,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vinyl_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::ExtractArt { path, output } => extract_art(&path, output.as_deref()).await?,
        Commands::ListRecords => list_records(&config).await?,
        Commands::ClearCollection => clear_collection(&config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Vinyl Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = open_store(&config).await?;
    tracing::info!("Database connected");

    let settings = store.load_settings().await?;
    let artwork = Arc::new(ArtworkExtractor::new(config.artwork.cache_size));
    let app_state = AppState::new(store, &settings, artwork);

    if !config.web.dir.join("index.html").is_file() {
        tracing::warn!(dir = %config.web.dir.display(), "No web UI found, serving API only");
    }

    let app = create_router(
        app_state,
        config.web.dir.clone(),
        config.server.max_upload_bytes,
    );

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<Arc<LocalRecordStore>> {
    ensure_database_dir(&config.storage.database_url).await?;

    let store = LocalRecordStore::open(&config.storage.database_url)
        .await
        .with_context(|| format!("opening {}", config.storage.database_url))?;

    Ok(Arc::new(store))
}

/// Create the parent directory of a file-backed SQLite URL
async fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
    else {
        return Ok(());
    };

    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = PathBuf::from(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    Ok(())
}

async fn extract_art(path: &std::path::Path, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let extractor = ArtworkExtractor::new(1);

    let Some(art) = extractor.extract_from_path(path).await? else {
        println!("No album art found in {}", path.display());
        return Ok(());
    };

    match output {
        Some(output) => {
            tokio::fs::write(output, &art.data).await?;
            println!(
                "Wrote {} ({}, {} bytes)",
                output.display(),
                art.mime_type,
                art.data.len()
            );
        }
        None => println!("{} ({} bytes)", art.mime_type, art.data.len()),
    }

    Ok(())
}

async fn list_records(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let records = store.get_record_summaries().await?;

    println!("Records ({}):", records.len());
    for record in records {
        let art = if record.album_art.is_some() { "art" } else { "no art" };
        println!("  {} - {} (added {}, {})", record.id, record.name, record.date_added, art);
    }

    Ok(())
}

async fn clear_collection(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let removed = store.clear_records().await?;

    println!("Removed {removed} records");
    Ok(())
}
