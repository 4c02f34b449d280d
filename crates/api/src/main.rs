use std::sync::Arc;

use anyhow::Context;

use gitstats_core::AppConfig;
use gitstats_infra::HttpGitHubClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    gitstats_observability::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let github = HttpGitHubClient::new(&config).context("failed to build GitHub client")?;

    let app = gitstats_api::app::build_app(&config, Arc::new(github));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        owner = %config.owner,
        api_base_url = %config.api_base_url,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install Ctrl+C handler; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
