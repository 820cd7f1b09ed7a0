use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

use subfeed_core::{
    logging,
    models::{Capability, Provider},
    provider::ProviderRegistry,
    repository::{PgChannelRepository, PgLiveStreamRepository, PgVideoRepository},
    service::SyncService,
    Config,
};

#[derive(Parser)]
#[command(name = "subfeed", version, about = "Multi-provider content synchronization")]
struct Cli {
    /// Path to a configuration file; environment variables override it
    #[arg(long, env = "SUBFEED_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest new videos for every provider that carries on-demand content
    SyncVideos,
    /// Refresh the live-stream snapshot of every broadcasting provider
    SyncLiveStreams,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // 2. Initialize logging
    logging::init_logging(&config.logging)?;
    info!("subfeed starting");

    // 3. Connect to the database
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_seconds))
        .connect(config.database_url())
        .await?;
    info!("Database pool ready");

    // 4. Build repositories, registry and the sync service
    let registry = ProviderRegistry::from_config(&config.providers);
    let service = SyncService::new(
        registry,
        Arc::new(PgChannelRepository::new(pool.clone())),
        Arc::new(PgVideoRepository::new(pool.clone())),
        Arc::new(PgLiveStreamRepository::new(pool)),
    );

    match cli.command {
        Command::SyncVideos => sync_videos(&service).await,
        Command::SyncLiveStreams => sync_live_streams(&service).await,
    }
}

/// Run video ingest for every capable provider. A provider or channel
/// failing is logged and counted; the remaining providers still run, and
/// the process exit code reflects whether anything failed.
async fn sync_videos(service: &SyncService) -> Result<()> {
    let mut failures = 0usize;
    for provider in Provider::ALL {
        if !provider.supports(Capability::Videos) {
            continue;
        }
        match service.ingest_new_videos(provider).await {
            Ok(report) => {
                info!(
                    provider = %provider,
                    inserted = report.inserted(),
                    failed_channels = report.failed(),
                    "Video ingest finished"
                );
                failures += report.failed();
            }
            Err(err) => {
                error!(provider = %provider, error = %err, "Video ingest failed");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("video sync finished with {failures} failure(s)");
    }
    Ok(())
}

async fn sync_live_streams(service: &SyncService) -> Result<()> {
    let mut failures = 0usize;
    for provider in Provider::ALL {
        if !provider.supports(Capability::LiveStreams) {
            continue;
        }
        match service.sync_live_streams(provider).await {
            Ok(count) => {
                info!(provider = %provider, streams = count, "Live streams synced");
            }
            Err(err) => {
                error!(provider = %provider, error = %err, "Live-stream sync failed");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("live-stream sync finished with {failures} failure(s)");
    }
    Ok(())
}
