use std::sync::Arc;

use genz::{GenzConfig, build_chat_service, init_tracing, serve};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config = GenzConfig::from_env()?;
    info!(
        phase = "startup",
        event = "config_loaded",
        bind_addr = %config.bind_addr,
        process_keys = config.keys.len(),
        "genz configuration loaded"
    );

    let service = Arc::new(build_chat_service(&config)?);
    let listener = TcpListener::bind(config.bind_addr).await?;
    serve(listener, service, shutdown_signal()).await?;

    info!(phase = "shutdown", event = "stopped", "genz gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
