//! Process bootstrap shared by the service binaries.

use axum::Router;
use tracing_subscriber::EnvFilter;

/// Initialize logging with tracing subscriber.
///
/// Reads the `RUST_LOG` environment variable, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Bind `0.0.0.0:{port}` and serve `app` until the process exits.
pub async fn serve(app: Router, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
