mod config;
mod routes;


use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // Load .env first so it can set RUST_LOG for the subscriber.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Some(e) = dotenv_failure(&dotenv) {
        tracing::warn!(error = %e, "failed to load .env");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

/// A missing `.env` is normal; anything else is worth a warning.
fn dotenv_failure(result: &dotenvy::Result<PathBuf>) -> Option<&dotenvy::Error> {
    result.as_ref().err().filter(|e| !e.not_found())
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app().map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "session gate listening");
    axum::serve(listener, app).await?;
    Ok(())
}
