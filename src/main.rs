use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use delivery_dashboard::adapters::http::{api_router, ReportAppState};
use delivery_dashboard::adapters::JsonSnapshotSource;
use delivery_dashboard::config::{AppConfig, ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    if server.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate().map_err(ConfigError::from)?;

    let addr = config
        .server
        .bind_addr()
        .map_err(ConfigError::from)?;

    let source = JsonSnapshotSource::new(&config.snapshot.path);
    tracing::info!(
        snapshot = %source.path().display(),
        stages = ?config.engine.stages,
        "Using snapshot issue source"
    );

    let state = ReportAppState::new(Arc::new(source), Arc::new(config.engine.clone()));
    let app = api_router(state, &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, timeout = ?config.server.request_timeout(), "Delivery dashboard listening");
    axum::serve(listener, app).await?;

    Ok(())
}
