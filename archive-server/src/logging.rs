use crate::config::{LogFormat, ServerConfig};
use crate::ServerError;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Diagnostics go to stderr so `--demo`
/// output on stdout stays clean.
pub fn init(config: &ServerConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|err| ServerError::Logging(format!("parsing '{}': {err}", config.log_filter)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| ServerError::Logging(err.to_string()))
}

/// Default stderr subscriber for errors raised before [`init`] succeeded.
/// Does nothing when a subscriber is already installed.
pub fn init_fallback() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filter_is_reported() {
        let config = ServerConfig {
            log_filter: "archive_server=loud".into(),
            ..Default::default()
        };
        let err = init(&config).unwrap_err();
        assert!(matches!(err, ServerError::Logging(_)));
    }
}
