//! mockhttp fixture server.
//!
//! Serves the fixture routes on `0.0.0.0:8080` until Ctrl+C.

use mockhttp::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), FixtureError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = FixtureServer::bind(FixtureConfig::default()).await?;

    tracing::info!("Try: curl -X POST -d '{{\"a\":1}}' http://localhost:8080/echo");
    tracing::info!("Try: curl -H 'X-Foo: bar' http://localhost:8080/headers");

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
}
