use mimalloc::MiMalloc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vonatlog::api::TrainsApi;
use vonatlog::db::{self, PositionStore};
use vonatlog::{Config, VonatError};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        schema_path = %cfg.schema_path.display(),
        endpoint = %cfg.endpoint_url,
        loglevel = %cfg.loglevel
    );

    if let Err(e) = run(&cfg).await {
        error!(error = %e, "run aborted");
        std::process::exit(1);
    }
}

async fn run(cfg: &Config) -> Result<(), VonatError> {
    let pool = db::connect(&cfg.database_url).await?;
    let store = PositionStore::new(pool);

    let ddl = db::load_ddl(&cfg.schema_path)?;
    store.init_schema(&ddl).await?;
    info!("database initialized");

    let client = reqwest::Client::new();
    let snapshot = TrainsApi::fetch(&client, cfg.endpoint_url.clone()).await?;
    info!(trains = snapshot.len(), "snapshot fetched");

    let start = Instant::now();
    let rows = store.insert_snapshot(&snapshot).await?;
    info!(rows, elapsed = ?start.elapsed(), "snapshot persisted");

    info!("data processing completed successfully");
    Ok(())
}
