pub mod config;
pub mod demo;
pub mod logging;
pub mod routes;

use crate::config::{ConfigError, ServerConfig};
use crate::routes::AppState;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read the config and install logging. If either step fails a plain
/// stderr subscriber is installed so the caller can still report the error
/// through `tracing`.
pub fn prepare(lookup: impl Fn(&str) -> Option<String>) -> Result<ServerConfig, ServerError> {
    let prepared = ServerConfig::from_lookup(lookup)
        .map_err(ServerError::from)
        .and_then(|config| logging::init(&config).map(|()| config));
    if prepared.is_err() {
        logging::init_fallback();
    }
    prepared
}

pub async fn run(demo_mode: bool) -> Result<(), ServerError> {
    let config = prepare(|var| std::env::var(var).ok())?;

    let renderer = config.renderer();
    if demo_mode {
        return Ok(demo::run(&renderer, &mut std::io::stdout().lock())?);
    }

    let state = Arc::new(AppState {
        renderer,
        strict: config.strict,
    });
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!(
        listen = %config.listen,
        strict = config.strict,
        "archive-server listening"
    );
    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}
