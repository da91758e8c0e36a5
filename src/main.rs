use anyhow::{Context, Result};
use calculator_atlas::{
    catalogue::Catalogue,
    config::Config,
    server::{self, AppState},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("calculator_atlas=info".parse()?),
        )
        .init();

    info!("Starting calculator atlas");

    let config = Config::from_env()?;

    // Refuse to serve an ambiguous catalogue
    Catalogue::get()
        .validate()
        .context("Tool catalogue failed validation")?;

    let addr = config.listen_addr();
    let app = server::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
