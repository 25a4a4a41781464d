use std::sync::Arc;

use configs::{AppConfig, LogFormat};
use service::users::{InMemoryUserStore, UserStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes;

/// Initialize logging via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolves once Ctrl+C is received. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Build the app on a fresh seeded store and serve on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let store: Arc<dyn UserStore> = InMemoryUserStore::new();
    let app = routes::build_router(store, build_cors());
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: bind the configured address and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting users server");
    serve(listener, shutdown_signal()).await
}
