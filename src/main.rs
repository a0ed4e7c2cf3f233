use anyhow::Result;
use axum::Router;
use object_store::{ObjectStore, gcp::GoogleCloudStorageBuilder};
use std::{io::ErrorKind, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod state;
#[cfg(test)]
mod test_utils;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    tracing::info!("Starting rag-backend with config: {:?}", cfg);

    // --- Connect to the object store ---
    let store: Arc<dyn ObjectStore> = Arc::new(
        GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(&cfg.bucket)
            .build()?,
    );

    // --- Initialize core services ---
    let storage = services::storage_service::StorageService::new(store, cfg.bucket.clone());
    let app_state = state::AppState::new(storage);

    // --- Build router ---
    let app: Router = routes::routes::routes()
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
