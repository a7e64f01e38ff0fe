use blog_backend::{
    AppState, blob::LocalBlobStore, config::AppConfig, db::Store, logging, routes,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppConfig::load()?;
    logging::init_tracing(&settings.log_filter);

    let store = Store::open(&settings).await?;
    let blobs = Arc::new(LocalBlobStore::new(&settings.image_dir));
    let state = AppState::new(store.clone(), blobs, settings.clone());
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!(addr = %settings.server_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
