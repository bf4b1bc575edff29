use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pattern_gym_server::config::AppConfig;
use pattern_gym_server::state::AppState;
use pattern_gym_server::{build_router, database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let db = database::init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;

    if config.seed.enabled {
        seed::seed_content(&db)
            .await
            .context("Failed to seed content")?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(db, config).context("Failed to build application state")?;
    info!(
        evaluator = state.evaluator.name(),
        "Server running at http://{}", addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
