//! Composition root: settings, tracing, pool, schema, router, listener.
//!
//! Run from repo root: `cargo run -p sports-management-server`

use sports_management::{app, apply_schema, connect, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("sports_management=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(
        database_url = %settings.database_url,
        foreign_keys = settings.foreign_keys,
        "loaded settings"
    );

    let pool = connect(&settings).await?;
    apply_schema(&pool).await?;

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    let state = AppState::new(pool, settings);
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
